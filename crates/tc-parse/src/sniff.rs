//! Input format detection

use crate::patterns::{decimal_value, numeric_label, shadow_pair, trim_line};
use tc_core::InputFormat;
use tracing::debug;

/// Guess the format of an input blob.
///
/// Any `"key": number` pair makes it a shadow export, checked first. Failing
/// that, a numeric-prefixed label line immediately followed by a line holding
/// only a decimal makes it a device readout. Anything else is
/// [`InputFormat::Unknown`], which callers should not route.
pub fn classify(text: &str) -> InputFormat {
    let format = if shadow_pair().is_match(text) {
        InputFormat::Shadow
    } else if has_label_value_pair(text) {
        InputFormat::DeviceLog
    } else {
        InputFormat::Unknown
    };

    debug!("Classified {} bytes as {}", text.len(), format);
    format
}

fn has_label_value_pair(text: &str) -> bool {
    let lines: Vec<&str> = text.split('\n').map(trim_line).collect();
    lines
        .windows(2)
        .any(|pair| numeric_label().is_match(pair[0]) && decimal_value().is_match(pair[1]))
}
