//! Console and output settings for the line-oriented harness.
//!
//! The embedded `default_settings.toml` applies unless a custom document is
//! installed with [`init_custom`] before the first [`settings`] call. Unknown
//! keys are rejected so a misspelled option fails validation instead of being
//! ignored.

use std::sync::OnceLock;

use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

/// Validate `toml_content` and make it the process-wide settings.
/// Fails once [`settings`] has been read or another document was installed.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)?;
    debug!("custom settings installed");
    Ok(())
}

/// Process-wide settings: the installed document, or the embedded defaults.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let source = CUSTOM_TOML
            .get()
            .map_or(DEFAULT_SETTINGS_TOML, String::as_str);
        // Installed documents were validated by `init_custom`.
        parse_settings_toml(source).expect("settings TOML must be valid")
    })
}

/// The embedded defaults, for `hanru settings-export`.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub console: ConsoleSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleSettings {
    pub prompt: String,
    pub show_prompt: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    pub line_ending: LineEnding,
    pub flush_each_line: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            LineEnding::Lf => b"\n",
            LineEnding::Crlf => b"\r\n",
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.console.show_prompt && s.console.prompt.trim().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "console.prompt".to_string(),
            reason: "must be non-empty when console.show_prompt is true".to_string(),
        });
    }
    if s.console.prompt.contains(['\n', '\r']) {
        return Err(SettingsError::InvalidValue {
            field: "console.prompt".to_string(),
            reason: "must be a single line".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.console.prompt, "Enter UTF-8 text:");
        assert!(s.console.show_prompt);
        assert_eq!(s.output.line_ending, LineEnding::Lf);
        assert!(s.output.flush_each_line);
    }

    #[test]
    fn global_uses_defaults() {
        assert_eq!(settings().console.prompt, "Enter UTF-8 text:");
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[console]
prompt = "Введите текст:"
show_prompt = false

[output]
line_ending = "crlf"
flush_each_line = false
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.console.prompt, "Введите текст:");
        assert!(!s.console.show_prompt);
        assert_eq!(s.output.line_ending.as_bytes(), b"\r\n");
    }

    #[test]
    fn empty_prompt_allowed_when_hidden() {
        let toml = r#"
[console]
prompt = ""
show_prompt = false

[output]
line_ending = "lf"
flush_each_line = true
"#;
        assert!(parse_settings_toml(toml).is_ok());
    }

    #[test]
    fn error_empty_prompt() {
        let toml = r#"
[console]
prompt = "  "
show_prompt = true

[output]
line_ending = "lf"
flush_each_line = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("console.prompt"));
    }

    #[test]
    fn error_multiline_prompt() {
        let toml = r#"
[console]
prompt = "a\nb"
show_prompt = true

[output]
line_ending = "lf"
flush_each_line = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("single line"));
    }

    #[test]
    fn error_unknown_line_ending() {
        let toml = r#"
[console]
prompt = ">"
show_prompt = true

[output]
line_ending = "cr"
flush_each_line = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_unknown_key() {
        let toml = r#"
[console]
prompt = ">"
show_prompt = true
promt = ">>"

[output]
line_ending = "lf"
flush_each_line = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().contains("promt"));
    }

    #[test]
    fn error_unknown_section() {
        let toml = r#"
[console]
prompt = ">"
show_prompt = true

[output]
line_ending = "lf"
flush_each_line = true

[colors]
enabled = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[console]
prompt = ">"
show_prompt = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
