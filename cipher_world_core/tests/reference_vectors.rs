use cipher_world_core::{
    additive_transform, additive_transform_with_steps, autokey_decrypt, autokey_encrypt,
    autokey_encrypt_with_steps, vigenere_decrypt, vigenere_encrypt, vigenere_encrypt_with_steps,
    CipherError, Mode,
};

#[test]
fn additive_reference_pair() {
    assert_eq!(additive_transform("HELLO", Mode::Encrypt, 3).unwrap(), "khoor");
    assert_eq!(additive_transform("khoor", Mode::Decrypt, 3).unwrap(), "hello");
}

#[test]
fn vigenere_reference_vector() {
    assert_eq!(
        vigenere_encrypt("attack at dawn", "lemon").unwrap(),
        "lxfopv ef rnhr"
    );
}

// The expected ciphertext is derived from the stream-construction rule
// itself: seed 7 followed by the plaintext letter values of H, E, L, L.
#[test]
fn autokey_seed_seven_follows_stream_rule() {
    let plain: Vec<i64> = "HELLO".bytes().map(|b| i64::from(b - b'A')).collect();
    let mut stream = vec![7i64];
    stream.extend(&plain[..plain.len() - 1]);
    let expected: String = plain
        .iter()
        .zip(&stream)
        .map(|(p, k)| ((p + k).rem_euclid(26) as u8 + b'A') as char)
        .collect();
    assert_eq!(autokey_encrypt("HELLO", 7).unwrap(), expected);
    assert_eq!(autokey_decrypt(&expected, 7).unwrap(), "HELLO");
}

#[test]
fn key_errors_are_reported_before_any_output() {
    assert!(matches!(
        additive_transform("abc", Mode::Encrypt, "xyz"),
        Err(CipherError::KeyFormat { .. })
    ));
    assert!(matches!(
        vigenere_encrypt("abc", ""),
        Err(CipherError::EmptyKey)
    ));
}

#[test]
fn non_alphabetic_characters_survive_all_three_ciphers() {
    let text = "sos: 3 ships, 2pm!";
    let keep = |s: &str| -> Vec<char> { s.chars().filter(|c| !c.is_ascii_alphabetic()).collect() };

    let additive = additive_transform(text, Mode::Encrypt, 9).unwrap();
    assert_eq!(keep(&additive), keep(text));

    let vigenere = vigenere_encrypt(text, "key").unwrap();
    assert_eq!(keep(&vigenere), keep(text));

    // Autokey strips spaces first, so compare against the prepared form.
    let prepared: String = text.chars().filter(|c| *c != ' ').collect();
    let autokey = autokey_encrypt(text, 4).unwrap();
    assert_eq!(keep(&autokey), keep(&prepared));
}

#[test]
fn every_cipher_emits_one_step_per_processed_character() {
    let text = "Attack at dawn, 6am!";
    let additive = additive_transform_with_steps(text, Mode::Encrypt, 3).unwrap();
    assert_eq!(additive.steps.len(), text.chars().count());

    let vigenere = vigenere_encrypt_with_steps(text, "lemon").unwrap();
    assert_eq!(vigenere.steps.len(), text.chars().count());

    let autokey = autokey_encrypt_with_steps(text, 3).unwrap();
    assert_eq!(
        autokey.steps.len(),
        text.chars().filter(|c| *c != ' ').count()
    );
}

#[test]
fn vigenere_roundtrip_lowercases_only() {
    let decrypted = vigenere_decrypt(
        &vigenere_encrypt("Attack At Dawn", "lemon").unwrap(),
        "lemon",
    )
    .unwrap();
    assert_eq!(decrypted, "attack at dawn");
}
