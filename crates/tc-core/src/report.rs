//! Comparison rows and the report that orders them

use crate::parameter::RawValue;
use serde::Serialize;

/// How the two sides of a row relate. Values are compared as strings only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    Match,
    Mismatch,
    ShadowOnly,
    DeviceOnly,
}

/// A parameter observed in at least one source, with the value from each side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    name: String,
    shadow: Option<RawValue>,
    device: Option<RawValue>,
}

impl ComparisonRow {
    /// Create a row. Returns `None` when neither side has a value, since such
    /// a parameter was never observed.
    pub fn new(
        name: impl Into<String>,
        shadow: Option<RawValue>,
        device: Option<RawValue>,
    ) -> Option<Self> {
        if shadow.is_none() && device.is_none() {
            return None;
        }
        Some(Self {
            name: name.into(),
            shadow,
            device,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shadow-side value, if the shadow export had this parameter
    pub fn shadow(&self) -> Option<&str> {
        self.shadow.as_deref()
    }

    /// Device-side value, if the readout had this parameter
    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    pub fn status(&self) -> RowStatus {
        match (&self.shadow, &self.device) {
            (Some(a), Some(b)) if a == b => RowStatus::Match,
            (Some(_), Some(_)) => RowStatus::Mismatch,
            (Some(_), None) => RowStatus::ShadowOnly,
            // new() rejects rows with no value at all
            (None, _) => RowStatus::DeviceOnly,
        }
    }
}

/// Counts of rows per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub matched: usize,
    pub mismatched: usize,
    pub shadow_only: usize,
    pub device_only: usize,
}

/// Ordered comparison rows, one per distinct parameter name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ComparisonReport {
    rows: Vec<ComparisonRow>,
}

impl ComparisonReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComparisonRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a row by parameter name
    pub fn get(&self, name: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.name == name)
    }

    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            total: self.rows.len(),
            ..Default::default()
        };
        for row in &self.rows {
            match row.status() {
                RowStatus::Match => summary.matched += 1,
                RowStatus::Mismatch => summary.mismatched += 1,
                RowStatus::ShadowOnly => summary.shadow_only += 1,
                RowStatus::DeviceOnly => summary.device_only += 1,
            }
        }
        summary
    }
}

impl FromIterator<ComparisonRow> for ComparisonReport {
    fn from_iter<I: IntoIterator<Item = ComparisonRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ComparisonReport {
    type Item = ComparisonRow;
    type IntoIter = std::vec::IntoIter<ComparisonRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a ComparisonReport {
    type Item = &'a ComparisonRow;
    type IntoIter = std::slice::Iter<'a, ComparisonRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
