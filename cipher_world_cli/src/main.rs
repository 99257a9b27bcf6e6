use anyhow::Result;
use cipher_world_core::{
    additive_transform_with_steps, autokey_decrypt_with_steps, autokey_encrypt_with_steps,
    vigenere_decrypt_with_steps, vigenere_encrypt_with_steps, CipherError, CipherOutput, Mode,
};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{debug, LevelFilter};
use std::path::PathBuf;

mod history;

use history::HistoryStore;

#[derive(Parser)]
#[command(
    name = "cipher-world",
    author,
    version,
    about = "Classical cipher CLI with step-by-step solutions"
)]
struct Cli {
    #[arg(long, global = true)]
    debug: bool,
    /// History file rewritten on every save or delete.
    #[arg(long, global = true, value_name = "FILE", default_value = "cipher_history.json")]
    history_file: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CipherArg {
    Additive,
    Autokey,
    Vigenere,
}

impl CipherArg {
    fn label(self) -> &'static str {
        match self {
            Self::Additive => "Additive Cipher",
            Self::Autokey => "Auto-Key Cipher",
            Self::Vigenere => "Vigenère Cipher",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Additive => "Monoalphabetic",
            Self::Autokey | Self::Vigenere => "Polyalphabetic",
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationArg {
    Encryption,
    Decryption,
}

impl OperationArg {
    fn label(self) -> &'static str {
        match self {
            Self::Encryption => "Encryption",
            Self::Decryption => "Decryption",
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with the chosen cipher.
    Encrypt {
        #[arg(long, value_enum)]
        cipher: CipherArg,
        text: String,
        #[arg(long)]
        key: String,
        /// Print the numbered step-by-step solution.
        #[arg(long)]
        steps: bool,
        /// Append the result to the history file.
        #[arg(long)]
        save: bool,
        /// Emit the result and steps as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Decrypt text with the chosen cipher.
    Decrypt {
        #[arg(long, value_enum)]
        cipher: CipherArg,
        text: String,
        #[arg(long)]
        key: String,
        #[arg(long)]
        steps: bool,
        #[arg(long)]
        save: bool,
        #[arg(long)]
        json: bool,
    },
    /// List saved results, optionally filtered.
    History {
        /// Substring match over plaintext, cipher label, and result.
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, value_enum)]
        operation: Option<OperationArg>,
    },
    /// Delete a saved result by its 1-based entry number.
    HistoryDelete { entry: usize },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    match cli.command {
        Commands::Encrypt {
            cipher,
            text,
            key,
            steps,
            save,
            json,
        } => cmd_transform(
            &cli.history_file,
            cipher,
            Mode::Encrypt,
            &text,
            &key,
            steps,
            save,
            json,
        ),
        Commands::Decrypt {
            cipher,
            text,
            key,
            steps,
            save,
            json,
        } => cmd_transform(
            &cli.history_file,
            cipher,
            Mode::Decrypt,
            &text,
            &key,
            steps,
            save,
            json,
        ),
        Commands::History { search, operation } => {
            cmd_history(&cli.history_file, &search, operation)
        }
        Commands::HistoryDelete { entry } => cmd_history_delete(&cli.history_file, entry),
    }
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default));
    builder.format_timestamp(None);
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn run_cipher(
    cipher: CipherArg,
    mode: Mode,
    text: &str,
    key: &str,
) -> Result<CipherOutput, CipherError> {
    match (cipher, mode) {
        (CipherArg::Additive, _) => additive_transform_with_steps(text, mode, key),
        (CipherArg::Autokey, Mode::Encrypt) => autokey_encrypt_with_steps(text, key),
        (CipherArg::Autokey, Mode::Decrypt) => autokey_decrypt_with_steps(text, key),
        (CipherArg::Vigenere, Mode::Encrypt) => vigenere_encrypt_with_steps(text, key),
        (CipherArg::Vigenere, Mode::Decrypt) => vigenere_decrypt_with_steps(text, key),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_transform(
    history_file: &PathBuf,
    cipher: CipherArg,
    mode: Mode,
    text: &str,
    key: &str,
    steps: bool,
    save: bool,
    json: bool,
) -> Result<()> {
    let output = run_cipher(cipher, mode, text, key)?;
    debug!(
        "{} {:?} produced {} chars, {} steps",
        cipher.label(),
        mode,
        output.text.chars().count(),
        output.steps.len()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let verb = match mode {
            Mode::Encrypt => "Encrypted",
            Mode::Decrypt => "Decrypted",
        };
        println!("{verb}: {}", output.text);
        if steps {
            print_header("STEP-BY-STEP SOLUTION");
            for (i, step) in output.steps.iter().enumerate() {
                println!("{}. {}", i + 1, step);
            }
        }
    }

    if save {
        let operation = match mode {
            Mode::Encrypt => OperationArg::Encryption,
            Mode::Decrypt => OperationArg::Decryption,
        };
        let mut store = HistoryStore::open(history_file);
        store.record(
            cipher.label(),
            cipher.class(),
            operation.label(),
            text,
            key,
            &output.text,
        )?;
        println!("Result saved to {}", history_file.display());
    }
    Ok(())
}

fn cmd_history(history_file: &PathBuf, search: &str, operation: Option<OperationArg>) -> Result<()> {
    let store = HistoryStore::open(history_file);
    if store.is_empty() {
        println!("No cipher history found!");
        return Ok(());
    }

    let filtered = store.filter(search, operation.map(OperationArg::label));
    print_header(&format!(
        "CIPHER HISTORY ({}/{} entries)",
        filtered.len(),
        store.len()
    ));
    for (i, entry) in filtered.iter().enumerate() {
        println!("\n[{}] {}", i + 1, entry.timestamp);
        println!("    Cipher: {} ({})", entry.cipher_type, entry.cipher_class);
        println!("    Operation: {}", entry.operation);
        println!("    Plaintext: {}", truncate(&entry.plaintext, 40));
        println!("    Key: {}", entry.key);
        println!("    Result: {}", truncate(&entry.result, 40));
    }
    Ok(())
}

fn cmd_history_delete(history_file: &PathBuf, entry: usize) -> Result<()> {
    if entry == 0 {
        anyhow::bail!("history entries are numbered from 1");
    }
    let mut store = HistoryStore::open(history_file);
    let removed = store.delete(entry - 1)?;
    println!(
        "Deleted entry {} ({} {} of {:?})",
        entry,
        removed.cipher_type,
        removed.operation,
        truncate(&removed.plaintext, 40)
    );
    Ok(())
}

fn print_header(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title:^60}");
    println!("{}", "=".repeat(60));
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_owned()
    } else {
        let prefix: String = s.chars().take(max_chars).collect();
        format!("{prefix}...")
    }
}
