//! Per-challenge Markdown stub.

use std::io;
use std::path::{Path, PathBuf};

use crate::api::ChallengeDetail;
use crate::naming::metadata_file_name;
use crate::storage::write_atomic;

/// Separator between the challenge text and the space left for the writeup.
const RULE: &str = "-------------------";

/// Stub contents: name as heading, description as a quote block.
pub fn render_metadata(challenge: &ChallengeDetail) -> String {
    format!(
        "# {}\n\n> {}\n\n{}\n\n",
        challenge.name, challenge.description, RULE
    )
}

/// Writes `<challenges_dir>/<category>_<slug>.md`, replacing any previous
/// version, and returns the path written.
pub fn write_metadata(challenge: &ChallengeDetail, challenges_dir: &Path) -> io::Result<PathBuf> {
    let path = challenges_dir.join(metadata_file_name(&challenge.category, &challenge.name));
    write_atomic(&path, render_metadata(challenge).as_bytes())?;
    tracing::info!(id = challenge.id, path = %path.display(), "saved challenge file");
    Ok(path)
}
