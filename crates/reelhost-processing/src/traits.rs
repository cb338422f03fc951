//! Seams between the ingestion pipeline and the external tools.
//!
//! Handlers hold `Arc<dyn MediaProber>` / `Arc<dyn Remuxer>`; tests substitute
//! fakes so no real binaries run.

use crate::error::ProcessingError;
use crate::probe::Dimensions;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Extracts the first video stream's pixel dimensions from a local file.
#[async_trait]
pub trait MediaProber: Send + Sync {
    async fn probe(&self, path: &Path) -> Result<Dimensions, ProcessingError>;
}

/// Rewrites a container so index metadata precedes the media payload,
/// producing a sibling output file. The input file is not mutated.
#[async_trait]
pub trait Remuxer: Send + Sync {
    async fn remux(&self, input: &Path) -> Result<PathBuf, ProcessingError>;
}
