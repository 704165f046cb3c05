//! Parsers for the two telemetry dump formats
//!
//! - [`ShadowParser`] pulls `"name": number` pairs out of a JSON-like shadow
//!   export without requiring it to be valid JSON.
//! - [`DeviceLogParser`] walks a device readout line by line, pairing each
//!   label line with the next value line.
//! - [`classify`] guesses which of the two formats a blob is in.
//!
//! Every function here is total: unparseable input yields an empty map or
//! [`InputFormat::Unknown`](tc_core::InputFormat::Unknown), never an error.
//!
//! # Example
//!
//! ```
//! use tc_parse::{classify, DeviceLogParser, ShadowParser};
//! use tc_core::InputFormat;
//!
//! let shadow = ShadowParser::new().parse(r#"{"Env Tp C": 23.5}"#);
//! assert_eq!(shadow["Env Tp C"], "23.5");
//!
//! let device = DeviceLogParser::default().parse("Env Tp C\n23.4\n");
//! assert_eq!(device["Env Tp C"], "23.4");
//!
//! assert_eq!(classify("2#Fan\n3.3"), InputFormat::DeviceLog);
//! ```

mod device_log;
mod patterns;
mod shadow;
mod sniff;

pub use device_log::{DeviceLogParser, DeviceLogScanner, ScanState};
pub use shadow::ShadowParser;
pub use sniff::classify;
