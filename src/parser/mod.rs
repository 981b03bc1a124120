//! METAR report parsers.
//!
//! Two independent variants are provided:
//!
//! - [`parse_metar`] decodes a report field by field into a [`ParsedReport`](crate::ParsedReport),
//!   tolerating any missing optional group.
//! - [`format_narrative`] matches the whole report against one fixed layout and
//!   renders a human-readable summary.
//!
//! [`ParseMode`] selects between them when the caller only has a name.

pub mod fields;
pub mod labels;
pub mod narrative;
pub mod patterns;
pub mod structured;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{MetarError, Result};

pub use narrative::{format_narrative, try_format_narrative};
pub use structured::parse_metar;

/// Body of a narrative response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadableReport {
    /// Multi-line summary, or the fixed failure message
    pub readable: String,
}

/// Which parser variant to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Field-by-field decoding into a structured record
    #[default]
    Structured,
    /// Fixed-layout decoding into a readable summary
    Narrative,
}

impl ParseMode {
    /// Name of this mode
    pub fn name(&self) -> &'static str {
        match self {
            ParseMode::Structured => "structured",
            ParseMode::Narrative => "narrative",
        }
    }

    /// Run the selected parser and build the JSON body the API returns for it.
    ///
    /// Only the structured mode can fail; the narrative mode reports a
    /// mismatch through its fixed message.
    pub fn render(&self, raw: &str) -> Result<serde_json::Value> {
        match self {
            ParseMode::Structured => Ok(serde_json::to_value(parse_metar(raw)?)?),
            ParseMode::Narrative => Ok(serde_json::to_value(ReadableReport {
                readable: format_narrative(raw),
            })?),
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParseMode {
    type Err = MetarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "structured" => Ok(ParseMode::Structured),
            "narrative" | "readable" => Ok(ParseMode::Narrative),
            _ => Err(MetarError::InvalidParameter {
                param: "mode".to_string(),
                message: format!("Unknown parse mode: {}", s),
            }),
        }
    }
}
