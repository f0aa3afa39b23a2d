use super::consts::{DEFAULT_DATUM, SHORT_NAME_LENGTH};
use crate::datum::{ConfigError, Datum};
use crate::shortname::MakeShort;

/// Per-session settings supplied by the surrounding tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Name of the datum coordinates are stored in
    pub datum: String,
    /// Always derive short names from descriptions, even when one is set
    pub synthesize_shortnames: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            datum: DEFAULT_DATUM.to_string(),
            synthesize_shortnames: false,
        }
    }
}

impl Options {
    pub fn resolve_datum(&self) -> Result<Datum, ConfigError> {
        Datum::lookup(&self.datum)
    }

    pub(crate) fn short_name_synthesizer(&self) -> MakeShort {
        MakeShort::new(SHORT_NAME_LENGTH)
            .with_whitespace_ok(true)
            .with_must_upper(true)
    }
}
