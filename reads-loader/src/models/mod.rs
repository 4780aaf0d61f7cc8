//! Data models for the loader

pub mod load_report;

pub use load_report::{
    LoadReport, Phase, PhaseReport, RecordOutcome, SkippedRecord, MAX_RETAINED_SKIPS,
};
