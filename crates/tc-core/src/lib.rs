//! Core types for telemetry comparison
//!
//! This crate provides the fundamental types shared by the parsers and the
//! reconciler: ParameterMap, ComparisonRow, ComparisonReport, and the
//! identifiers for the two telemetry sources.

mod format;
mod parameter;
mod report;

pub use format::{InputFormat, Source};
pub use parameter::{ParameterMap, ParameterName, RawValue};
pub use report::{ComparisonReport, ComparisonRow, ReportSummary, RowStatus};

/// Fixed label vocabulary recognised in device readout logs, in addition to
/// the numeric-prefixed `N#...` labels
pub const DEFAULT_KNOWN_LABELS: &[&str] = &["Env Tp C", "Env Humi C%", "DewPoint C", "Ele Box C"];

/// Output naming defaults
pub mod output {
    /// Base name offered to the user before they pick one
    pub const DEFAULT_FILE_NAME: &str =
        "AWS IoT Shadow vs Air3000 Display Parameter Comparison Device_";

    /// Base name used when the chosen name is blank
    pub const FALLBACK_FILE_NAME: &str = "output";

    /// Extension of the comparison artifact
    pub const FILE_EXTENSION: &str = "txt";
}
