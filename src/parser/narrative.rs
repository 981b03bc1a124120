//! Narrative formatter.
//!
//! Matches the whole report against one fixed-order pattern and renders a
//! multi-line, human-readable summary. Unlike the structured extractor there is
//! no partial output: either everything matches or the fixed failure message is
//! returned.

use regex::Captures;

use crate::error::{MetarError, Result};
use crate::parser::{labels, patterns};

/// Render a report as labeled lines, or the fixed failure message.
pub fn format_narrative(raw: &str) -> String {
    try_format_narrative(raw).unwrap_or_else(|_| labels::NARRATIVE_FAILURE.to_string())
}

/// Render a report as labeled lines.
///
/// # Errors
///
/// Returns [`MetarError::NoMatch`] when the report does not follow the
/// expected field order.
pub fn try_format_narrative(raw: &str) -> Result<String> {
    // Reports pasted over several lines are matched as one
    let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let caps = patterns::NARRATIVE
        .captures(&normalized)
        .ok_or(MetarError::NoMatch)?;

    let group = |name: &str| caps.name(name).map_or("", |m| m.as_str());

    let clouds = match group("clouds").trim() {
        "" => labels::NO_CLOUDS.to_string(),
        segment => segment.to_string(),
    };
    let gust = match group("gust") {
        "" => String::new(),
        knots => format!("{}{}", knots, labels::KNOTS_SUFFIX),
    };

    let lines = [
        ("空港", group("airport").to_string()),
        ("観測時刻", format!("{}:{} (UTC)", group("hour"), group("minute"))),
        ("風向", format!("{}°", group("wind_dir"))),
        ("風速", format!("{}{}", group("wind_speed"), labels::KNOTS_SUFFIX)),
        ("最大瞬間風速", gust),
        ("視程", labels::visibility(group("visibility"))),
        ("雲", clouds),
        ("気温", unsigned_celsius(&caps, "temp")),
        ("露点温度", unsigned_celsius(&caps, "dew")),
        ("気圧", format!("{}{}", group("pressure"), labels::HECTOPASCAL_SUFFIX)),
        ("一時的な変化", group("tempo").to_string()),
    ];

    Ok(lines
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Temperature label with the `M` prefix dropped and no minus sign added
fn unsigned_celsius(caps: &Captures<'_>, name: &str) -> String {
    caps.name(name)
        .map(|m| labels::celsius(m.as_str(), false))
        .unwrap_or_default()
}
