//! Telemetry comparison: reconcile a shadow export with a device readout
//!
//! ```text
//!  shadow text ──► ShadowParser ────┐
//!                                   ├──► merge ──► ComparisonReport ──► render
//!  device text ──► DeviceLogParser ─┘
//! ```
//!
//! [`merge`] and [`render`] are separate steps: rows can be inspected without
//! caring about the text layout. The rendered text is display-only and does
//! not parse back into the original maps.
//!
//! # Example
//!
//! ```
//! use tc_compare::{render, Comparer};
//!
//! let comparer = Comparer::default();
//! let report = comparer
//!     .compare(r#"{"Env Tp C": 23.5}"#, "Env Tp C\n23.4\n1#Fan\n60")
//!     .unwrap();
//!
//! assert_eq!(
//!     render(&report),
//!     "Env Tp C: AWS=23.5 \t Device=23.4\n1#Fan: AWS= \t Device=60"
//! );
//! ```

mod comparer;
mod error;
mod output;
mod reconcile;
mod slots;

pub use comparer::Comparer;
pub use error::{CompareError, CompareResult};
pub use output::{output_file_name, write_report};
pub use reconcile::{merge, render, render_json, render_row};
pub use slots::InputSlots;
