use serde::Deserialize;

use crate::syllable::{L_COUNT, T_COUNT, V_COUNT};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TablesConfig {
    initials: Option<Vec<String>>,
    vowels: Option<Vec<String>>,
    finals: Option<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum TablesError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("no tables given (expected initials, vowels or finals)")]
    Empty,
    #[error("{table} must have exactly {expected} entries, got {found}")]
    Length {
        table: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("empty value for vowels[{0}]")]
    EmptyVowel(usize),
    #[error("phonetic tables already initialized")]
    AlreadyInitialized,
}

/// Validated table overrides. `None` means "keep the built-in table".
#[derive(Debug, Default)]
pub struct TableOverrides {
    pub initials: Option<Vec<String>>,
    pub vowels: Option<Vec<String>>,
    pub finals: Option<Vec<String>>,
}

fn check_len(
    table: &'static str,
    entries: &Option<Vec<String>>,
    expected: usize,
) -> Result<(), TablesError> {
    match entries {
        Some(v) if v.len() != expected => Err(TablesError::Length {
            table,
            expected,
            found: v.len(),
        }),
        _ => Ok(()),
    }
}

/// Parse and validate a phonetic tables TOML document.
pub fn parse_tables_toml(toml_str: &str) -> Result<TableOverrides, TablesError> {
    let config: TablesConfig =
        toml::from_str(toml_str).map_err(|e| TablesError::Parse(e.to_string()))?;

    if config.initials.is_none() && config.vowels.is_none() && config.finals.is_none() {
        return Err(TablesError::Empty);
    }

    check_len("initials", &config.initials, L_COUNT)?;
    check_len("vowels", &config.vowels, V_COUNT)?;
    check_len("finals", &config.finals, T_COUNT)?;

    if let Some(ref vowels) = config.vowels {
        if let Some(i) = vowels.iter().position(|v| v.is_empty()) {
            return Err(TablesError::EmptyVowel(i));
        }
    }

    Ok(TableOverrides {
        initials: config.initials,
        vowels: config.vowels,
        finals: config.finals,
    })
}

#[cfg(test)]
mod tests {
    use super::super::table::{DEFAULT_TOML, FINALS, INITIALS, VOWELS};
    use super::*;

    #[test]
    fn default_toml_matches_builtin() {
        let o = parse_tables_toml(DEFAULT_TOML).unwrap();
        assert_eq!(o.initials.unwrap(), INITIALS);
        assert_eq!(o.vowels.unwrap(), VOWELS);
        assert_eq!(o.finals.unwrap(), FINALS);
    }

    #[test]
    fn parse_partial_override() {
        let toml = format!("vowels = [{}]\n", vec!["\"a\""; V_COUNT].join(", "));
        let o = parse_tables_toml(&toml).unwrap();
        assert!(o.initials.is_none());
        assert!(o.finals.is_none());
        assert_eq!(o.vowels.unwrap().len(), V_COUNT);
    }

    #[test]
    fn error_empty_document() {
        let err = parse_tables_toml("").unwrap_err();
        assert!(matches!(err, TablesError::Empty));
    }

    #[test]
    fn error_wrong_length() {
        let err = parse_tables_toml("initials = [\"г\", \"н\"]").unwrap_err();
        assert!(matches!(
            err,
            TablesError::Length {
                table: "initials",
                expected: 19,
                found: 2
            }
        ));
        assert!(err.to_string().contains("initials"));
    }

    #[test]
    fn error_empty_vowel() {
        let mut vowels = vec!["\"а\""; V_COUNT];
        vowels[3] = "\"\"";
        let toml = format!("vowels = [{}]\n", vowels.join(", "));
        let err = parse_tables_toml(&toml).unwrap_err();
        assert!(matches!(err, TablesError::EmptyVowel(3)));
    }

    #[test]
    fn empty_initials_and_finals_are_allowed() {
        let toml = format!(
            "initials = [{}]\nfinals = [{}]\n",
            vec!["\"\""; L_COUNT].join(", "),
            vec!["\"\""; T_COUNT].join(", ")
        );
        assert!(parse_tables_toml(&toml).is_ok());
    }

    #[test]
    fn error_unknown_key() {
        let err = parse_tables_toml("consonants = [\"г\"]").unwrap_err();
        assert!(matches!(err, TablesError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_tables_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, TablesError::Parse(_)));
    }
}
