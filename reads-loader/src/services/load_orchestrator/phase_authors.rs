//! Phase 1: AUTHORS
//!
//! One forward pass over the authors dump, upserting every well-formed author.

use super::LoadOrchestrator;
use crate::error::{LoadResult, RecordError};
use crate::models::{Phase, PhaseReport, RecordOutcome};
use crate::services::author_builder::{build_author, AUTHOR_KEY_PREFIX};
use crate::services::line_source::LineSource;
use crate::services::record_extractor::extract_record;
use std::path::Path;
use std::time::Instant;

impl LoadOrchestrator {
    pub(super) async fn phase_authors(&self, authors_dump: &Path) -> LoadResult<PhaseReport> {
        let start_time = Instant::now();
        tracing::info!(dump = %authors_dump.display(), "Phase 1: AUTHORS");

        let mut source = LineSource::open(authors_dump).await?;
        let mut report = PhaseReport::new(Phase::Authors);

        while let Some(line) = source.next_line().await? {
            let outcome = self.process_author_line(&line.text).await?;
            Self::record_outcome(&mut report, line.number, &line.text, outcome);
        }

        Self::finish_phase(&mut report, &source, start_time);
        Ok(report)
    }

    /// Extract, build and persist one author line
    ///
    /// `Err` only for fatal (store) failures.
    pub(super) async fn process_author_line(&self, line: &str) -> LoadResult<RecordOutcome> {
        let document = match extract_record(line) {
            Ok(document) => document,
            Err(reason) => return Ok(RecordOutcome::Skipped(reason)),
        };

        let author = build_author(&document);
        if author.id.is_empty() {
            return Ok(RecordOutcome::Skipped(RecordError::EmptyId {
                prefix: AUTHOR_KEY_PREFIX,
            }));
        }

        tracing::debug!(id = %author.id, name = %author.name, "Saving author");
        crate::db::save_author(&self.db, &author).await?;

        Ok(RecordOutcome::Persisted { id: author.id })
    }
}
