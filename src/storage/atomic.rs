//! Crash-safe JSON writes

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::FundcheckResult;

/// Serialize `value` as pretty JSON and swap it into place at `path`.
///
/// The data is written and synced to a temp file in the target's directory,
/// then renamed over the target. Readers see either the old file or the new
/// one, never a partial write. Missing parent directories are created.
pub fn write_json_atomic<T>(path: impl AsRef<Path>, value: &T) -> FundcheckResult<()>
where
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut temp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut temp, value)?;
    temp.write_all(b"\n")?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
