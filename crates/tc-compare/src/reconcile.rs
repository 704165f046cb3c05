//! Row building and rendering

use tc_core::{ComparisonReport, ComparisonRow, ParameterMap};
use tracing::debug;

/// Union-merge two parameter maps into a report.
///
/// Rows follow the shadow map's key order, then the device-only keys in the
/// device map's order. Each name appears exactly once.
pub fn merge(shadow: &ParameterMap, device: &ParameterMap) -> ComparisonReport {
    let device_only = device.keys().filter(|key| !shadow.contains_key(*key));

    let report: ComparisonReport = shadow
        .keys()
        .chain(device_only)
        .filter_map(|key| {
            ComparisonRow::new(
                key.as_str(),
                shadow.get(key).cloned(),
                device.get(key).cloned(),
            )
        })
        .collect();

    let summary = report.summary();
    debug!(
        "Merged {} parameters: {} match, {} differ, {} shadow only, {} device only",
        summary.total,
        summary.matched,
        summary.mismatched,
        summary.shadow_only,
        summary.device_only
    );

    report
}

/// Render one row as `<name>: AWS=<shadow> \t Device=<device>`, with absent
/// values left empty
pub fn render_row(row: &ComparisonRow) -> String {
    format!(
        "{}: AWS={} \t Device={}",
        row.name(),
        row.shadow().unwrap_or_default(),
        row.device().unwrap_or_default()
    )
}

/// Render a report as text, one row per line, without a trailing newline
pub fn render(report: &ComparisonReport) -> String {
    report
        .iter()
        .map(render_row)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a report as pretty-printed JSON
pub fn render_json(report: &ComparisonReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
