//! Line source
//!
//! Lazy, forward-only, single-pass reader over a dump file. The file handle
//! lives inside the source and is released when the source is dropped, on
//! normal end-of-file and on an aborted phase alike.

use crate::error::{LoadError, LoadResult};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};

/// One raw line with its 1-based position in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub number: usize,
    pub text: String,
}

/// Dump line reader
pub struct LineSource {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    lines_read: usize,
}

impl LineSource {
    /// Open a dump file; failure is fatal for the phase
    pub async fn open(path: &Path) -> LoadResult<Self> {
        let file = File::open(path).await.map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
            lines_read: 0,
        })
    }

    /// Next line with its terminator (`\n` or `\r\n`) removed, or `None` at end-of-file
    pub async fn next_line(&mut self) -> LoadResult<Option<RawLine>> {
        match self.lines.next_line().await {
            Ok(Some(text)) => {
                self.lines_read += 1;
                Ok(Some(RawLine {
                    number: self.lines_read,
                    text,
                }))
            }
            Ok(None) => Ok(None),
            Err(source) => Err(LoadError::Read {
                path: self.path.clone(),
                line: self.lines_read,
                source,
            }),
        }
    }

    /// File this source reads from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines yielded so far
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}
