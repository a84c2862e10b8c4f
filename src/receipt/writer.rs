//! Atomic receipt persistence.

use std::fs;
use std::path::Path;

use tracing::error;

use crate::error::{FisError, Result};

/// Write `content` to `path` through a temporary sibling plus rename.
///
/// The final path never holds partial content: either the rename happened
/// and the file is complete, or the previous state (including absence) is
/// intact and at most the `.tmp` sibling remains. Failures are logged before
/// being returned.
pub fn write_receipt_atomic(path: &Path, content: &str) -> Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content.as_bytes())
        .and_then(|()| fs::rename(&tmp, path))
        .map_err(|source| {
            error!("Atomic write of receipt {} failed: {}", path.display(), source);
            FisError::ReceiptWrite {
                path: path.to_path_buf(),
                source,
            }
        })
}
