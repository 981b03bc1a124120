//! Structured extractor.
//!
//! Runs each field extractor over the same input and merges the results into a
//! [`ParsedReport`]. Only the header is mandatory; every other field is left
//! empty when its pattern is not found.

use tracing::debug;

use crate::error::Result;
use crate::parser::fields;
use crate::report::ParsedReport;

/// Decode a raw METAR report into a [`ParsedReport`].
///
/// # Errors
///
/// Returns [`MetarError::MalformedReport`](crate::MetarError::MalformedReport)
/// when the airport code and observation time cannot be found.
pub fn parse_metar(raw: &str) -> Result<ParsedReport> {
    let header = fields::header(raw)?;
    let mut report = ParsedReport::new(header.airport, header.time);

    if let Some(wind) = fields::wind(raw) {
        report.wind_direction = Some(wind.direction);
        report.wind_speed = Some(wind.speed);
    }

    report.visibility = fields::visibility(raw);
    report.clouds = fields::cloud_layers(raw);

    if let Some(temps) = fields::temperatures(raw) {
        report.temperature = Some(temps.temperature);
        report.dew_point = Some(temps.dew_point);
    }

    report.pressure = fields::pressure(raw);
    report.tempo_info = fields::tempo(raw);
    report.remarks = fields::remarks(raw);

    debug!(
        airport = %report.airport,
        time = %report.time,
        cloud_layers = report.clouds.len(),
        "Report decoded"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MetarError;
    use crate::report::{CloudCoverage, CloudLayer};
    use pretty_assertions::assert_eq;

    const FULL: &str =
        "RJTT 010000Z 27015KT 9999 FEW020 SCT100 24/18 Q1013 TEMPO 25020G35KT RMK A2992";

    fn layer(coverage: CloudCoverage, height: &str) -> CloudLayer {
        CloudLayer {
            coverage,
            height: height.to_string(),
        }
    }

    #[test]
    fn test_full_report() {
        let report = parse_metar(FULL).unwrap();

        let expected = ParsedReport {
            airport: "RJTT".to_string(),
            time: "00:00".to_string(),
            wind_direction: Some("270".to_string()),
            wind_speed: Some("15".to_string()),
            visibility: Some("10km以上".to_string()),
            clouds: vec![
                layer(CloudCoverage::Few, "020フィート"),
                layer(CloudCoverage::Sct, "100フィート"),
            ],
            temperature: Some("24℃".to_string()),
            dew_point: Some("18℃".to_string()),
            pressure: Some("Q1013".to_string()),
            tempo_info: Some("25020G35KT".to_string()),
            remarks: Some("A2992".to_string()),
        };

        assert_eq!(report, expected);
    }

    #[test]
    fn test_missing_header_is_malformed() {
        for raw in ["", "   ", "not a weather report", "27015KT 9999 FEW020 24/18"] {
            assert!(
                matches!(parse_metar(raw), Err(MetarError::MalformedReport)),
                "expected MalformedReport for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_header_only() {
        let report = parse_metar("RJTT 010930Z").unwrap();
        assert_eq!(report, ParsedReport::new("RJTT", "09:30"));
    }

    #[test]
    fn test_masked_cloud_height() {
        let report = parse_metar("RJTT 010000Z 27015KT 9999 BKN/// 24/18 Q1013").unwrap();
        assert_eq!(report.clouds, vec![layer(CloudCoverage::Bkn, "不明")]);
    }

    #[test]
    fn test_negative_temperatures() {
        let report = parse_metar("UUEE 150300Z 18003KT 9999 OVC010 M05/M10 Q1030").unwrap();
        assert_eq!(report.temperature.as_deref(), Some("-5℃"));
        assert_eq!(report.dew_point.as_deref(), Some("-10℃"));
    }

    #[test]
    fn test_visibility_in_metres() {
        let report = parse_metar("RJAA 010000Z 36005KT 0800 FG VV002 10/10 Q1008").unwrap();
        assert_eq!(report.visibility.as_deref(), Some("0800メートル"));
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let first = serde_json::to_string(&parse_metar(FULL).unwrap()).unwrap();
        let second = serde_json::to_string(&parse_metar(FULL).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_removing_one_segment_changes_only_that_field() {
        let full = parse_metar(FULL).unwrap();

        let cases: [(&str, fn(&mut ParsedReport)); 6] = [
            (
                "RJTT 010000Z 27015KT 9999 FEW020 SCT100 24/18 TEMPO 25020G35KT RMK A2992",
                |r| r.pressure = None,
            ),
            (
                "RJTT 010000Z 27015KT 9999 24/18 Q1013 TEMPO 25020G35KT RMK A2992",
                |r| r.clouds.clear(),
            ),
            (
                "RJTT 010000Z 27015KT 9999 FEW020 SCT100 24/18 Q1013 RMK A2992",
                |r| r.tempo_info = None,
            ),
            (
                "RJTT 010000Z 27015KT 9999 FEW020 SCT100 24/18 Q1013 TEMPO 25020G35KT",
                |r| r.remarks = None,
            ),
            (
                "RJTT 010000Z 27015KT FEW020 SCT100 24/18 Q1013 TEMPO 25020G35KT RMK A2992",
                |r| r.visibility = None,
            ),
            (
                "RJTT 010000Z 27015KT 9999 FEW020 SCT100 Q1013 TEMPO 25020G35KT RMK A2992",
                |r| {
                    r.temperature = None;
                    r.dew_point = None;
                },
            ),
        ];

        for (raw, edit) in cases {
            let mut expected = full.clone();
            edit(&mut expected);
            assert_eq!(parse_metar(raw).unwrap(), expected, "input: {}", raw);
        }
    }

    #[test]
    fn test_removing_wind_keeps_other_fields() {
        // The visibility group is found through the wind's KT, so it goes too
        let report =
            parse_metar("RJTT 010000Z 9999 FEW020 SCT100 24/18 Q1013 TEMPO 25020G35KT RMK A2992")
                .unwrap();
        let full = parse_metar(FULL).unwrap();

        assert_eq!(report.wind_direction, None);
        assert_eq!(report.wind_speed, None);
        assert_eq!(report.clouds, full.clouds);
        assert_eq!(report.temperature, full.temperature);
        assert_eq!(report.pressure, full.pressure);
        assert_eq!(report.tempo_info, full.tempo_info);
        assert_eq!(report.remarks, full.remarks);
    }
}
