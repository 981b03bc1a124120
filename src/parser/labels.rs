//! Human-readable labels attached to decoded values.

/// Visibility of 9999 metres or more
pub const VISIBILITY_10KM_OR_MORE: &str = "10km以上";

/// Suffix for visibility in metres
pub const METRES_SUFFIX: &str = "メートル";

/// Suffix for cloud heights (hundreds of feet)
pub const FEET_SUFFIX: &str = "フィート";

/// Cloud height reported as `///`
pub const UNKNOWN_HEIGHT: &str = "不明";

/// Suffix for temperatures
pub const CELSIUS_SUFFIX: &str = "℃";

/// Suffix for wind speeds
pub const KNOTS_SUFFIX: &str = "ノット";

/// Suffix for pressure values
pub const HECTOPASCAL_SUFFIX: &str = "hPa";

/// Narrative cloud line when the cloud segment is empty
pub const NO_CLOUDS: &str = "雲なし";

/// Narrative output when the report does not match the expected layout
pub const NARRATIVE_FAILURE: &str = "METARの解析に失敗しました。形式を確認してください。";

/// Visibility sentinel meaning 10 km or more
const VISIBILITY_SENTINEL: &str = "9999";

/// Label for a 4-digit visibility group
pub fn visibility(digits: &str) -> String {
    if digits == VISIBILITY_SENTINEL {
        VISIBILITY_10KM_OR_MORE.to_string()
    } else {
        format!("{}{}", digits, METRES_SUFFIX)
    }
}

/// Label for a 3-digit cloud height or the `///` mask
pub fn cloud_height(height: &str) -> String {
    if height == "///" {
        UNKNOWN_HEIGHT.to_string()
    } else {
        format!("{}{}", height, FEET_SUFFIX)
    }
}

/// Label for a temperature, keeping the sign carried by `negative`
pub fn celsius(digits: &str, negative: bool) -> String {
    let sign = if negative { "-" } else { "" };
    format!("{}{}{}", sign, strip_leading_zeros(digits), CELSIUS_SUFFIX)
}

/// Drop leading zeros, keeping at least one digit
fn strip_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() && !digits.is_empty() {
        &digits[digits.len() - 1..]
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_labels() {
        assert_eq!(visibility("9999"), "10km以上");
        assert_eq!(visibility("0800"), "0800メートル");
        assert_eq!(visibility("5000"), "5000メートル");
    }

    #[test]
    fn test_cloud_height_labels() {
        assert_eq!(cloud_height("020"), "020フィート");
        assert_eq!(cloud_height("///"), "不明");
    }

    #[test]
    fn test_celsius_labels() {
        assert_eq!(celsius("24", false), "24℃");
        assert_eq!(celsius("05", true), "-5℃");
        assert_eq!(celsius("05", false), "5℃");
        assert_eq!(celsius("00", false), "0℃");
        assert_eq!(celsius("00", true), "-0℃");
        assert_eq!(celsius("7", true), "-7℃");
    }
}
