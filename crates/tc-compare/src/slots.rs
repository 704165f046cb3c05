//! Input slots filled by pasting or by routing dropped files

use tc_core::{InputFormat, Source};
use tc_parse::classify;
use tracing::{debug, info};

/// The two raw inputs of a comparison
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSlots {
    shadow: Option<String>,
    device: Option<String>,
}

impl InputSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put text into a slot, replacing what was there
    pub fn set(&mut self, source: Source, text: impl Into<String>) {
        let text = text.into();
        debug!("Filling {} slot with {} bytes", source, text.len());
        match source {
            Source::Shadow => self.shadow = Some(text),
            Source::Device => self.device = Some(text),
        }
    }

    pub fn get(&self, source: Source) -> Option<&str> {
        match source {
            Source::Shadow => self.shadow.as_deref(),
            Source::Device => self.device.as_deref(),
        }
    }

    /// Sniff a blob and store it in the slot matching its format.
    ///
    /// `Unknown` blobs are not stored; the caller decides what to do with them.
    pub fn route(&mut self, text: impl Into<String>) -> InputFormat {
        let text = text.into();
        let format = classify(&text);
        match format.source() {
            Some(source) => {
                info!("Routed {} input to the {} slot", format, source);
                self.set(source, text);
            }
            None => debug!("Input format not recognised, leaving slots unchanged"),
        }
        format
    }

    /// Shadow text, or an empty string if the slot was never filled
    pub fn shadow(&self) -> &str {
        self.shadow.as_deref().unwrap_or_default()
    }

    /// Device text, or an empty string if the slot was never filled
    pub fn device(&self) -> &str {
        self.device.as_deref().unwrap_or_default()
    }
}
