// Formatting helpers for handing a finished cipher back to the caller.
use crate::cipher::SubstitutionCipher;
use crate::error::CfResult;
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString};

/// On-disk representation of a recovered key.
#[derive(Debug, Clone, Copy, Default, EnumIter, EnumString, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum KeyFormat {
    /// One `"<cipher> -> <plain>"` line per symbol.
    #[default]
    Arrow,
    /// A JSON object from cipher symbol to plain symbol.
    Json,
}

impl KeyFormat {
    pub fn render(&self, cipher: &SubstitutionCipher) -> CfResult<String> {
        match self {
            Self::Arrow => {
                let mut out = mapping_lines(cipher).join("\n");
                out.push('\n');
                Ok(out)
            }
            Self::Json => {
                let map: BTreeMap<String, String> = cipher
                    .mapping()
                    .into_iter()
                    .map(|(from, to)| (from.to_string(), to.to_string()))
                    .collect();
                let mut out = serde_json::to_string_pretty(&map)?;
                out.push('\n');
                Ok(out)
            }
        }
    }
}

/// Canonical `"<cipher> -> <plain>"` lines, sorted by cipher symbol.
pub fn mapping_lines(cipher: &SubstitutionCipher) -> Vec<String> {
    cipher
        .mapping()
        .into_iter()
        .map(|(from, to)| format!("{} -> {}", from, to))
        .collect()
}

/// Decrypts original-case, original-punctuation text.
///
/// Letters are looked up in lowercase and the case of the input character is
/// restored on the output. Everything else passes through unchanged.
pub fn decrypt_preserving_case(cipher: &SubstitutionCipher, text: &str) -> String {
    rewrite_preserving_case(text, |c| cipher.decrypt_char(c))
}

/// Mirror of [`decrypt_preserving_case`], used to produce test ciphertexts.
pub fn encrypt_preserving_case(cipher: &SubstitutionCipher, text: &str) -> String {
    rewrite_preserving_case(text, |c| cipher.encrypt_char(c))
}

/// Decrypts a whole document line by line, dropping blank lines.
pub fn decrypt_document(cipher: &SubstitutionCipher, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        out.push_str(&decrypt_preserving_case(cipher, line));
        out.push('\n');
    }
    out
}

fn rewrite_preserving_case<F: Fn(char) -> char>(text: &str, map: F) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if !ch.is_alphabetic() {
            out.push(ch);
            continue;
        }
        let mapped = map(ch.to_ascii_lowercase());
        if ch.is_uppercase() {
            out.extend(mapped.to_uppercase());
        } else {
            out.push(mapped);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::Cipher;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_case_and_punctuation_preserved() {
        let c = SubstitutionCipher::english("bcdefghijklmnopqrstuvwxyza").unwrap();
        let plain = "Hello, World!";
        let enc = encrypt_preserving_case(&c, plain);
        assert_eq!(enc.len(), plain.len());
        assert!(enc.starts_with(char::is_uppercase));
        assert_eq!(&enc[5..7], ", ");
        assert_eq!(decrypt_preserving_case(&c, &enc), plain);
    }

    #[test]
    fn test_lowercase_matches_plain_decrypt() {
        let c = SubstitutionCipher::english("zyxwvutsrqponmlkjihgfedcba").unwrap();
        let text = "the quick brown fox";
        assert_eq!(decrypt_preserving_case(&c, text), c.decrypt(text));
    }

    #[test]
    fn test_document_drops_blank_lines() {
        let c = SubstitutionCipher::english("zabcdefghijklmnopqrstuvwxy").unwrap();
        let doc = "Uif dbu.\n\n   \nTbu!\n";
        assert_eq!(decrypt_document(&c, doc), "The cat.\nSat!\n");
    }

    #[test]
    fn test_mapping_lines_format() {
        let c = SubstitutionCipher::english("zyxwvutsrqponmlkjihgfedcba").unwrap();
        let lines = mapping_lines(&c);
        assert_eq!(lines.len(), 26);
        assert_eq!(lines[0], "a -> z");
        assert_eq!(lines[25], "z -> a");
    }

    #[test]
    fn test_key_format_parses_from_cli_names() {
        assert_eq!(KeyFormat::from_str("arrow").unwrap(), KeyFormat::Arrow);
        assert_eq!(KeyFormat::from_str("json").unwrap(), KeyFormat::Json);
        assert!(KeyFormat::from_str("yaml").is_err());
        assert_eq!(KeyFormat::default().to_string(), "arrow");
    }

    #[test]
    fn test_every_format_renders_all_symbols() {
        let c = SubstitutionCipher::english("qwertyuiopasdfghjklzxcvbnm").unwrap();
        for format in KeyFormat::iter() {
            let rendered = format.render(&c).unwrap();
            assert!(rendered.ends_with('\n'));
            assert!(rendered.contains("a"), "{} output: {}", format, rendered);
        }
        let json: BTreeMap<String, String> =
            serde_json::from_str(&KeyFormat::Json.render(&c).unwrap()).unwrap();
        assert_eq!(json.len(), 26);
        assert_eq!(json["a"], "q");
    }
}
