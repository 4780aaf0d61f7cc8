//! Loader pipeline services
//!
//! Line Source → Record Extractor → Author/Work Builder → store, sequenced by
//! the [`LoadOrchestrator`].

pub mod author_builder;
pub mod line_source;
pub mod load_orchestrator;
pub mod record_extractor;
pub mod reference_resolver;
pub mod work_builder;

pub use author_builder::{build_author, AUTHOR_KEY_PREFIX};
pub use line_source::{LineSource, RawLine};
pub use load_orchestrator::{AuthorsLoaded, LoadOrchestrator};
pub use record_extractor::extract_record;
pub use reference_resolver::{AuthorNameResolver, StoreAuthorResolver, UNKNOWN_AUTHOR};
pub use work_builder::{build_book, WORK_KEY_PREFIX};
