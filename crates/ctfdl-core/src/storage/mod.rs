//! File lifecycle for everything the mirror writes.
//!
//! Content is written to `<final>.part`, synced, then renamed over the final
//! name, so an existing final file is always a complete one.

mod writer;

pub use writer::PartFile;

use std::io;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `flag.zip` → `flag.zip.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Replace `path` with `contents` in one step.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut part = PartFile::create(path)?;
    if let Err(e) = part.append(contents) {
        part.discard();
        return Err(e);
    }
    part.finalize().map(|_| ())
}
