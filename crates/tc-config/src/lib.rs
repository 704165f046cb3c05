//! Configuration for telemetry comparison
//!
//! Settings come from an optional YAML file; every field has a default, so an
//! empty file (or no file) is valid.
//!
//! ```yaml
//! device_log:
//!   known_labels:
//!     - Env Tp C
//!     - Env Humi C%
//!     - DewPoint C
//!     - Ele Box C
//! output:
//!   file_name: "AWS IoT Shadow vs Air3000 Display Parameter Comparison Device_"
//!   directory: reports
//! ```
//!
//! # Example
//!
//! ```ignore
//! use tc_config::CompareConfig;
//!
//! let config = CompareConfig::load("compare.yaml")?;
//! println!("{:?}", config.device_log.known_labels);
//! ```

mod config;
mod error;

pub use config::{CompareConfig, DeviceLogConfig, OutputConfig};
pub use error::{ConfigError, ConfigResult};
