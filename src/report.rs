//! Structured output of the METAR extractor.
//!
//! Every record is built fresh for one parse and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MetarError;

/// Cloud coverage code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CloudCoverage {
    /// Few (1-2 oktas)
    Few,
    /// Scattered (3-4 oktas)
    Sct,
    /// Broken (5-7 oktas)
    Bkn,
    /// Overcast (8 oktas)
    Ovc,
}

impl CloudCoverage {
    /// The code as it appears in a report
    pub fn code(&self) -> &'static str {
        match self {
            CloudCoverage::Few => "FEW",
            CloudCoverage::Sct => "SCT",
            CloudCoverage::Bkn => "BKN",
            CloudCoverage::Ovc => "OVC",
        }
    }
}

impl fmt::Display for CloudCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CloudCoverage {
    type Err = MetarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FEW" => Ok(CloudCoverage::Few),
            "SCT" => Ok(CloudCoverage::Sct),
            "BKN" => Ok(CloudCoverage::Bkn),
            "OVC" => Ok(CloudCoverage::Ovc),
            other => Err(MetarError::InvalidParameter {
                param: "coverage".to_string(),
                message: format!("Unknown cloud coverage code: {}", other),
            }),
        }
    }
}

/// One cloud layer, in the order it appeared in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudLayer {
    /// Coverage code
    #[serde(rename = "type")]
    pub coverage: CloudCoverage,
    /// Height label (hundreds of feet with a unit suffix, or the unknown label)
    pub height: String,
}

/// A decoded METAR report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedReport {
    /// ICAO airport code
    pub airport: String,
    /// Observation time as `HH:MM` (UTC)
    pub time: String,
    /// Wind direction in degrees
    pub wind_direction: Option<String>,
    /// Wind speed in knots
    pub wind_speed: Option<String>,
    /// Visibility label
    pub visibility: Option<String>,
    /// Cloud layers
    pub clouds: Vec<CloudLayer>,
    /// Temperature label
    pub temperature: Option<String>,
    /// Dew point label
    pub dew_point: Option<String>,
    /// Pressure code (`Q` followed by hectopascals)
    pub pressure: Option<String>,
    /// Text of the TEMPO clause
    pub tempo_info: Option<String>,
    /// Text of the RMK clause
    pub remarks: Option<String>,
}

impl ParsedReport {
    /// Create a report holding only the mandatory header fields
    pub fn new(airport: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            airport: airport.into(),
            time: time.into(),
            wind_direction: None,
            wind_speed: None,
            visibility: None,
            clouds: Vec::new(),
            temperature: None,
            dew_point: None,
            pressure: None,
            tempo_info: None,
            remarks: None,
        }
    }
}
