//! Console size report.
//!
//! Read-only comparison of artifact durations and on-disk sizes, rendered as
//! an aligned table. Purely observational; nothing here feeds back into the
//! pipeline.

use std::fmt;

use crate::{Error, Result};

/// One artifact in the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub label: String,
    pub duration_seconds: f64,
    pub size_megabytes: f64,
}

/// Tabular comparison of artifact durations and sizes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizeReport {
    rows: Vec<ReportRow>,
}

impl SizeReport {
    /// Build a report from parallel columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] when the columns differ in length.
    pub fn from_columns(labels: &[&str], durations: &[f64], sizes: &[f64]) -> Result<Self> {
        if labels.len() != durations.len() || labels.len() != sizes.len() {
            return Err(Error::ShapeMismatch {
                labels: labels.len(),
                durations: durations.len(),
                sizes: sizes.len(),
            });
        }

        let rows = labels
            .iter()
            .zip(durations)
            .zip(sizes)
            .map(|((label, &duration_seconds), &size_megabytes)| ReportRow {
                label: (*label).to_string(),
                duration_seconds,
                size_megabytes,
            })
            .collect();

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .rows
            .iter()
            .map(|r| r.label.len())
            .chain(std::iter::once("File".len()))
            .max()
            .unwrap_or(4);

        writeln!(
            f,
            "{:<width$}  {:>12}  {:>10}",
            "File",
            "Duration (s)",
            "Size (MB)",
            width = label_width
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<width$}  {:>12.3}  {:>10.3}",
                row.label,
                row.duration_seconds,
                row.size_megabytes,
                width = label_width
            )?;
        }
        Ok(())
    }
}
