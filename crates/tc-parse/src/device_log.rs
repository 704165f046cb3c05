//! Device readout tokenizer
//!
//! A readout lists each parameter as a label line followed, possibly after
//! noise lines, by a value line:
//!
//! ```text
//! Env Tp C
//! 23.4
//! 3#Coil Pressure
//! kPa
//! 812/790
//! ```
//!
//! Scanning is a two-state machine. A label line always (re)arms the
//! pending label, so a second label before any value replaces the first.
//! The first value line after a label closes the pair.

use crate::patterns::{decimal_value, numeric_label, trim_line};
use tc_core::{ParameterMap, DEFAULT_KNOWN_LABELS};
use tracing::{debug, trace};

/// Scanner state between lines
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanState {
    /// No label waiting for a value
    #[default]
    Idle,
    /// A label line was seen; the next value line belongs to it
    AwaitingValue(String),
}

/// Parses device readouts with a configurable label vocabulary.
#[derive(Debug, Clone)]
pub struct DeviceLogParser {
    known_labels: Vec<String>,
}

impl Default for DeviceLogParser {
    fn default() -> Self {
        Self::new(DEFAULT_KNOWN_LABELS.iter().copied())
    }
}

impl DeviceLogParser {
    /// Create a parser that recognises `labels`, in addition to the
    /// numeric-prefixed `N#...` labels.
    ///
    /// Labels are trimmed like readout lines; blank ones are dropped since no
    /// line could ever match them.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let known_labels = labels
            .into_iter()
            .filter_map(|label| {
                let label = label.into();
                let trimmed = trim_line(&label);
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect();
        Self { known_labels }
    }

    pub fn known_labels(&self) -> &[String] {
        &self.known_labels
    }

    /// Whether a trimmed line is a label line
    pub fn is_label(&self, line: &str) -> bool {
        numeric_label().is_match(line) || self.known_labels.iter().any(|label| label == line)
    }

    /// Whether a trimmed line can be a reading: a decimal, or anything with a slash
    pub fn is_value(line: &str) -> bool {
        decimal_value().is_match(line) || line.contains('/')
    }

    /// Start a line-by-line scan
    pub fn scanner(&self) -> DeviceLogScanner<'_> {
        DeviceLogScanner {
            parser: self,
            state: ScanState::Idle,
            map: ParameterMap::new(),
        }
    }

    /// Parse a whole readout. A label left without a value at the end is dropped.
    pub fn parse(&self, text: &str) -> ParameterMap {
        let mut scanner = self.scanner();
        for line in text.split('\n') {
            scanner.feed(line);
        }
        let map = scanner.finish();
        debug!("Parsed {} device parameters", map.len());
        map
    }
}

/// Incremental scanner over device readout lines
#[derive(Debug)]
pub struct DeviceLogScanner<'p> {
    parser: &'p DeviceLogParser,
    state: ScanState,
    map: ParameterMap,
}

impl DeviceLogScanner<'_> {
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Pairs recorded so far
    pub fn pairs(&self) -> &ParameterMap {
        &self.map
    }

    /// Consume one line. Surrounding whitespace is ignored and blank lines
    /// leave the state untouched.
    pub fn feed(&mut self, line: &str) {
        let line = trim_line(line);
        if line.is_empty() {
            return;
        }

        if self.parser.is_label(line) {
            if let ScanState::AwaitingValue(dropped) = &self.state {
                debug!("Label {:?} replaced by {:?} before a value", dropped, line);
            }
            self.state = ScanState::AwaitingValue(line.to_string());
            return;
        }

        if !DeviceLogParser::is_value(line) {
            trace!("Ignoring device line {:?}", line);
            return;
        }

        match std::mem::take(&mut self.state) {
            ScanState::AwaitingValue(label) => {
                trace!("device pair {:?} = {}", label, line);
                self.map.insert(label, line.to_string());
            }
            ScanState::Idle => trace!("Value {:?} without a label", line),
        }
    }

    /// Finish scanning, discarding any label still waiting for a value
    pub fn finish(self) -> ParameterMap {
        if let ScanState::AwaitingValue(label) = self.state {
            debug!("Label {:?} has no value, dropping it", label);
        }
        self.map
    }
}
