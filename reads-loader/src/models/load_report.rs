//! Per-record outcomes and phase reports

use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// At most this many skipped lines are retained verbatim in a report.
/// Every skip is still counted and logged.
pub const MAX_RETAINED_SKIPS: usize = 1000;

/// One forward pass over one dump file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Authors,
    Works,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Authors => write!(f, "authors"),
            Phase::Works => write!(f, "works"),
        }
    }
}

/// Result of processing one line
#[derive(Debug)]
pub enum RecordOutcome {
    /// Entity upserted under this id
    Persisted { id: String },
    /// Line dropped; nothing was written
    Skipped(RecordError),
}

/// A dropped line, kept for offline reprocessing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// 1-based line number in the dump
    pub line_number: usize,
    pub reason: String,
    pub raw_line: String,
}

/// Aggregate of one completed phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseReport {
    pub phase: Phase,
    pub lines_read: usize,
    pub persisted: usize,
    pub skipped: usize,
    /// First [`MAX_RETAINED_SKIPS`] skipped lines
    pub skips: Vec<SkippedRecord>,
    /// Attempt that succeeded (1-based)
    pub attempt: u32,
    pub duration_ms: u64,
}

impl PhaseReport {
    pub fn new(phase: Phase) -> Self {
        Self {
            phase,
            lines_read: 0,
            persisted: 0,
            skipped: 0,
            skips: Vec::new(),
            attempt: 1,
            duration_ms: 0,
        }
    }

    /// Fold one line's outcome into the report
    pub fn record(&mut self, line_number: usize, raw_line: &str, outcome: RecordOutcome) {
        self.lines_read += 1;
        match outcome {
            RecordOutcome::Persisted { .. } => self.persisted += 1,
            RecordOutcome::Skipped(reason) => {
                self.skipped += 1;
                if self.skips.len() < MAX_RETAINED_SKIPS {
                    self.skips.push(SkippedRecord {
                        line_number,
                        reason: reason.to_string(),
                        raw_line: raw_line.to_string(),
                    });
                }
            }
        }
    }
}

/// Aggregate of a whole run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Completed phases, in execution order
    pub phases: Vec<PhaseReport>,
    pub duration_ms: u64,
}

impl LoadReport {
    pub fn phase(&self, phase: Phase) -> Option<&PhaseReport> {
        self.phases.iter().find(|p| p.phase == phase)
    }

    pub fn total_skipped(&self) -> usize {
        self.phases.iter().map(|p| p.skipped).sum()
    }
}
