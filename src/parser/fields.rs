//! Extractors for the individual report fields.
//!
//! Every function scans the whole report on its own; none of them depends on
//! the result of another, so any of them can be called in isolation.

use crate::error::{MetarError, Result};
use crate::parser::{labels, patterns};
use crate::report::{CloudLayer, CloudCoverage};

/// Airport code and observation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// ICAO airport code
    pub airport: String,
    /// Observation time as `HH:MM`
    pub time: String,
}

/// Wind direction and speed, as written in the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wind {
    /// Direction in degrees (3 digits)
    pub direction: String,
    /// Speed in knots (2 digits)
    pub speed: String,
}

/// Temperature and dew point labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Temperatures {
    pub temperature: String,
    pub dew_point: String,
}

/// Locate the mandatory airport code and observation time.
///
/// The day of month is dropped; only hour and minute are kept.
pub fn header(raw: &str) -> Result<Header> {
    let caps = patterns::HEADER
        .captures(raw)
        .ok_or(MetarError::MalformedReport)?;

    Ok(Header {
        airport: caps[1].to_string(),
        time: format!("{}:{}", &caps[3], &caps[4]),
    })
}

/// Wind direction and speed, if a plain `dddssKT` group is present
pub fn wind(raw: &str) -> Option<Wind> {
    patterns::WIND.captures(raw).map(|caps| Wind {
        direction: caps[1].to_string(),
        speed: caps[2].to_string(),
    })
}

/// Visibility label for the 4-digit group right after the wind's `KT`
pub fn visibility(raw: &str) -> Option<String> {
    patterns::VISIBILITY
        .captures(raw)
        .map(|caps| labels::visibility(&caps[1]))
}

/// Every cloud layer, left to right
pub fn cloud_layers(raw: &str) -> Vec<CloudLayer> {
    patterns::CLOUD_LAYER
        .captures_iter(raw)
        .filter_map(|caps| {
            let coverage = caps[1].parse::<CloudCoverage>().ok()?;
            Some(CloudLayer {
                coverage,
                height: labels::cloud_height(&caps[2]),
            })
        })
        .collect()
}

/// Temperature and dew point, with `M` turned into a minus sign
pub fn temperatures(raw: &str) -> Option<Temperatures> {
    patterns::TEMPERATURE.captures(raw).map(|caps| Temperatures {
        temperature: labels::celsius(&caps[2], &caps[1] == "M"),
        dew_point: labels::celsius(&caps[4], &caps[3] == "M"),
    })
}

/// Pressure group, `Q` prefix included
pub fn pressure(raw: &str) -> Option<String> {
    patterns::PRESSURE
        .captures(raw)
        .map(|caps| caps[1].to_string())
}

/// Text of the TEMPO clause, stopping before any remarks
pub fn tempo(raw: &str) -> Option<String> {
    patterns::TEMPO
        .captures(raw)
        .map(|caps| caps[1].to_string())
}

/// Text of the RMK clause
pub fn remarks(raw: &str) -> Option<String> {
    patterns::REMARKS
        .captures(raw)
        .map(|caps| caps[1].to_string())
}
