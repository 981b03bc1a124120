//! Compiled regular expressions for every report field.
//!
//! Each pattern is compiled once on first use and shared read-only between
//! requests.

use once_cell::sync::Lazy;
use regex::Regex;

/// Airport code followed by the `DDHHMMZ` observation time
pub static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]{4})\s+(\d{2})(\d{2})(\d{2})Z").unwrap());

/// Wind direction and speed in knots
pub static WIND: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{3})(\d{2})KT").unwrap());

/// Visibility group following the wind group
pub static VISIBILITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"KT\s+(9999|\d{4})").unwrap());

/// Cloud layer with a coverage code and height (or `///`)
pub static CLOUD_LAYER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(FEW|SCT|BKN|OVC)(\d{3}|///)").unwrap());

/// Temperature and dew point pair
pub static TEMPERATURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s(M?)(\d{1,2})/(M?)(\d{1,2})(?:\s|$)").unwrap());

/// QNH pressure group
pub static PRESSURE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s(Q\d{4})").unwrap());

/// TEMPO clause up to the remarks or the end of the report
pub static TEMPO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"TEMPO\s+(.+?)(?:\s+RMK\b|\s*$)").unwrap());

/// RMK clause up to the end of the report
pub static REMARKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"RMK\s+(.+?)\s*$").unwrap());

/// Whole report in the fixed order used by the narrative formatter
pub static NARRATIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?P<airport>[A-Z]{4})\s+",
        r"(?P<day>\d{2})(?P<hour>\d{2})(?P<minute>\d{2})Z\s+",
        r"(?P<wind_dir>\d{3})(?P<wind_speed>\d{2})(?:G(?P<gust>\d{2}))?KT\s+",
        r"(?P<visibility>\d{4})\s+",
        r"(?:(?P<clouds>.*?)\s+)??",
        r"(?P<temp_sign>M?)(?P<temp>\d{2})/(?P<dew_sign>M?)(?P<dew>\d{2})\s+",
        r"Q(?P<pressure>\d{4})",
        r"(?:\s+(?P<tempo>.*?))?\s*$",
    ))
    .unwrap()
});
