//! Sample reports used across the integration tests.

/// Every field the structured extractor knows about
pub const FULL_REPORT: &str =
    "RJTT 010000Z 27015KT 9999 FEW020 SCT100 24/18 Q1013 TEMPO 25020G35KT RMK A2992";

/// Sub-zero temperature and dew point
pub const FREEZING_REPORT: &str = "UUEE 150300Z 18003KT 9999 OVC010 M05/M10 Q1030";

/// Cloud layer with a masked height
pub const MASKED_CLOUD_REPORT: &str = "RJTT 010000Z 27015KT 9999 BKN/// 24/18 Q1013";

/// Gusting wind and reduced visibility
pub const GUST_REPORT: &str = "KJFK 121851Z 31018G28KT 8000 BKN035 12/M03 Q1009";

/// Text with no recognizable header
pub const GARBAGE_REPORT: &str = "this is not a METAR";
