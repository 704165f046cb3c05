//! Source and input-format identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two telemetry sources being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// AWS IoT shadow export (`"key": number` pairs)
    Shadow,
    /// Device display readout (label line followed by a value line)
    Device,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Shadow => "shadow",
            Source::Device => "device",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best-effort classification of an input blob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    Shadow,
    DeviceLog,
    /// Neither shape was found; callers should not route the blob
    Unknown,
}

impl InputFormat {
    /// The source slot this format feeds, if any
    pub fn source(&self) -> Option<Source> {
        match self {
            InputFormat::Shadow => Some(Source::Shadow),
            InputFormat::DeviceLog => Some(Source::Device),
            InputFormat::Unknown => None,
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Shadow => write!(f, "shadow"),
            InputFormat::DeviceLog => write!(f, "device-log"),
            InputFormat::Unknown => write!(f, "unknown"),
        }
    }
}
