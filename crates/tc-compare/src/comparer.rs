//! Merge-and-emit orchestration

use tc_config::CompareConfig;
use tc_core::{ComparisonReport, Source};
use tc_parse::{DeviceLogParser, ShadowParser};
use tracing::{info, warn};

use crate::error::{CompareError, CompareResult};
use crate::reconcile::merge;
use crate::slots::InputSlots;

/// Runs both parsers and the reconciler over a pair of raw inputs
#[derive(Debug, Clone, Default)]
pub struct Comparer {
    shadow: ShadowParser,
    device: DeviceLogParser,
}

impl Comparer {
    pub fn new(shadow: ShadowParser, device: DeviceLogParser) -> Self {
        Self { shadow, device }
    }

    /// Build a comparer using the configured label vocabulary
    pub fn from_config(config: &CompareConfig) -> Self {
        Self::new(
            ShadowParser::new(),
            DeviceLogParser::new(config.device_log.known_labels.iter().cloned()),
        )
    }

    /// Compare two raw inputs.
    ///
    /// Both must contain something other than whitespace; the shadow input
    /// is checked first. Inputs that parse to nothing are not an error, the
    /// report simply has no values from that side.
    pub fn compare(&self, shadow_text: &str, device_text: &str) -> CompareResult<ComparisonReport> {
        if shadow_text.trim().is_empty() {
            warn!("Comparison blocked: shadow input is empty");
            return Err(CompareError::MissingInput {
                side: Source::Shadow,
            });
        }
        if device_text.trim().is_empty() {
            warn!("Comparison blocked: device input is empty");
            return Err(CompareError::MissingInput {
                side: Source::Device,
            });
        }

        let shadow = self.shadow.parse(shadow_text);
        let device = self.device.parse(device_text);
        if shadow.is_empty() {
            warn!("No parameters found in shadow input");
        }
        if device.is_empty() {
            warn!("No parameters found in device input");
        }

        let report = merge(&shadow, &device);
        info!(
            "Compared {} shadow and {} device parameters into {} rows",
            shadow.len(),
            device.len(),
            report.len()
        );
        Ok(report)
    }

    /// Compare whatever the slots currently hold
    pub fn compare_slots(&self, slots: &InputSlots) -> CompareResult<ComparisonReport> {
        self.compare(slots.shadow(), slots.device())
    }
}
