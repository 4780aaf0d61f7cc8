//! Phase 2: WORKS
//!
//! One forward pass over the works dump. Author names are snapshotted from
//! the author store as each book is built.

use super::LoadOrchestrator;
use crate::error::{BuildError, LoadResult};
use crate::models::{Phase, PhaseReport, RecordOutcome};
use crate::services::line_source::LineSource;
use crate::services::record_extractor::extract_record;
use crate::services::work_builder::build_book;
use std::path::Path;
use std::time::Instant;

impl LoadOrchestrator {
    pub(super) async fn phase_works(&self, works_dump: &Path) -> LoadResult<PhaseReport> {
        let start_time = Instant::now();
        tracing::info!(dump = %works_dump.display(), "Phase 2: WORKS");

        let mut source = LineSource::open(works_dump).await?;
        let mut report = PhaseReport::new(Phase::Works);

        while let Some(line) = source.next_line().await? {
            let outcome = self.process_work_line(&line.text).await?;
            Self::record_outcome(&mut report, line.number, &line.text, outcome);
        }

        Self::finish_phase(&mut report, &source, start_time);
        Ok(report)
    }

    /// Extract, build and persist one work line
    ///
    /// `Err` only for fatal (store) failures.
    pub(super) async fn process_work_line(&self, line: &str) -> LoadResult<RecordOutcome> {
        let document = match extract_record(line) {
            Ok(document) => document,
            Err(reason) => return Ok(RecordOutcome::Skipped(reason)),
        };

        let book = match build_book(&document, &self.resolver).await {
            Ok(book) => book,
            Err(BuildError::Malformed(reason)) => return Ok(RecordOutcome::Skipped(reason)),
            Err(BuildError::Fatal(e)) => return Err(e),
        };

        tracing::debug!(id = %book.id, title = %book.title, "Saving book");
        crate::db::save_book(&self.db, &book).await?;

        Ok(RecordOutcome::Persisted { id: book.id })
    }
}
