//! Phonetic tables mapping syllable indices to Cyrillic.
//!
//! The built-in tables are constant arrays. A process may install a custom set
//! once, from TOML, before the first [`PhoneticTables::global`] call; tables
//! not named in the custom document keep the built-in content.

mod config;
mod table;

use std::borrow::Cow;
use std::sync::OnceLock;

use tracing::debug;

pub use config::{parse_tables_toml, TableOverrides, TablesError};
pub use table::{FINALS, INITIALS, VOWELS};

use crate::syllable::Syllable;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the built-in tables in the TOML format accepted by
/// [`PhoneticTables::init_custom`].
pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}

fn column(builtin: &'static [&'static str], custom: Option<Vec<String>>) -> Vec<Cow<'static, str>> {
    match custom {
        Some(entries) => entries.into_iter().map(Cow::Owned).collect(),
        None => builtin.iter().map(|s| Cow::Borrowed(*s)).collect(),
    }
}

/// Initial, vowel and final tables. Lengths always match the syllable
/// component counts.
#[derive(Debug, Clone)]
pub struct PhoneticTables {
    initials: Vec<Cow<'static, str>>,
    vowels: Vec<Cow<'static, str>>,
    finals: Vec<Cow<'static, str>>,
}

impl PhoneticTables {
    pub fn builtin() -> Self {
        Self::with_overrides(TableOverrides::default())
    }

    pub fn with_overrides(overrides: TableOverrides) -> Self {
        Self {
            initials: column(&INITIALS, overrides.initials),
            vowels: column(&VOWELS, overrides.vowels),
            finals: column(&FINALS, overrides.finals),
        }
    }

    /// Parse a custom TOML document on top of the built-in tables.
    pub fn from_toml(toml_str: &str) -> Result<Self, TablesError> {
        parse_tables_toml(toml_str).map(Self::with_overrides)
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TablesError> {
        // Validate eagerly
        parse_tables_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TablesError::AlreadyInitialized)?;
        debug!("custom phonetic tables installed");
        Ok(())
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static PhoneticTables {
        static INSTANCE: OnceLock<PhoneticTables> = OnceLock::new();
        INSTANCE.get_or_init(|| match CUSTOM_TOML.get() {
            Some(toml_str) => {
                PhoneticTables::from_toml(toml_str).expect("phonetic tables TOML must be valid")
            }
            None => PhoneticTables::builtin(),
        })
    }

    pub fn initial(&self, index: usize) -> &str {
        &self.initials[index]
    }

    pub fn vowel(&self, index: usize) -> &str {
        &self.vowels[index]
    }

    pub fn trail(&self, index: usize) -> &str {
        &self.finals[index]
    }

    /// Initial, vowel and final strings of one syllable, in output order.
    pub fn parts(&self, syllable: &Syllable) -> [&str; 3] {
        [
            self.initial(syllable.lead()),
            self.vowel(syllable.vowel()),
            self.trail(syllable.trail()),
        ]
    }
}

impl Default for PhoneticTables {
    fn default() -> Self {
        Self::builtin()
    }
}
