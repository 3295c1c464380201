use mcad_core::password::{normalize_username, Dictionary, PasswordPolicy, PolicyViolation};

fn policy() -> PasswordPolicy {
    PasswordPolicy::new(Dictionary::from_words(["moon", "Crater", "it"]))
}

#[test]
fn test_accepts_strong_password() {
    assert_eq!(policy().check("Xq7#vLp2!zRk9@wT"), Ok(()));
}

#[test]
fn test_length_bounds() {
    let p = policy();
    assert!(matches!(
        p.check("Ab#1"),
        Err(PolicyViolation::Length { len: 4, min: 16, max: 64 })
    ));
    let long = format!("Aa#{}", "7".repeat(62));
    assert!(matches!(p.check(&long), Err(PolicyViolation::Length { len: 65, .. })));

    let exactly_min = "Aa#4567890123456";
    assert_eq!(exactly_min.len(), 16);
    assert_eq!(p.check(exactly_min), Ok(()));
}

#[test]
fn test_requires_lowercase() {
    assert_eq!(policy().check("XQ7#VLP2!ZRK9@WT"), Err(PolicyViolation::NoLowercase));
}

#[test]
fn test_requires_uppercase() {
    assert_eq!(policy().check("xq7#vlp2!zrk9@wt"), Err(PolicyViolation::NoUppercase));
}

#[test]
fn test_requires_special_character() {
    assert_eq!(policy().check("Xq7vLp2zRk9wT123"), Err(PolicyViolation::NoSpecialChar));
}

#[test]
fn test_rejects_dictionary_words() {
    let err = policy().check("Big-MOON#crater!42").unwrap_err();
    assert_eq!(
        err,
        PolicyViolation::DictionaryWord(vec!["MOON".into(), "crater".into()])
    );
    assert!(err.to_string().contains("MOON, crater"));
}

#[test]
fn test_words_glued_to_digits_are_ignored() {
    // "moon7" is not a standalone word.
    assert_eq!(policy().check("Xmoon7#vLp2!zRk9@wT"), Ok(()));
}

#[test]
fn test_single_letter_words_ignored() {
    let p = PasswordPolicy::new(Dictionary::from_words(["a", "x"]));
    assert_eq!(p.check("a#X 1 x!Q9 rr77 ZZ55"), Ok(()));
}

#[test]
fn test_empty_dictionary_allows_words() {
    let p = PasswordPolicy::new(Dictionary::empty());
    assert_eq!(p.check("Moon-Crater#Survey"), Ok(()));
}

#[test]
fn test_dictionary_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words");
    std::fs::write(&path, "Apple\n\nbanana\n  cherry  \n").unwrap();

    let dict = Dictionary::load(&path).unwrap();
    assert_eq!(dict.len(), 3);
    assert!(dict.contains("APPLE"));
    assert!(dict.contains("cherry"));
    assert!(!dict.contains("durian"));
}

#[test]
fn test_normalize_username() {
    assert_eq!(normalize_username("  Joshua.J "), "joshua.j");
}
