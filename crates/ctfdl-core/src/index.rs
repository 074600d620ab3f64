//! Top-level `README.md` listing every challenge.

use std::io;
use std::path::{Path, PathBuf};

use crate::api::ChallengeSummary;
use crate::naming::metadata_file_name;
use crate::storage::write_atomic;

pub const INDEX_FILE: &str = "README.md";

/// Index contents. Links are built from summary data only, so a challenge
/// whose detail fetch failed is still listed.
pub fn render_index(ctf_name: &str, challenges_folder: &str, summaries: &[ChallengeSummary]) -> String {
    let mut out = format!("# {}\n\n## Challenges\n\n", ctf_name);
    for s in summaries {
        out.push_str(&format!(
            "* [{}](<{}/{}>)\n",
            s.name,
            challenges_folder,
            metadata_file_name(&s.category, &s.name)
        ));
    }
    out
}

/// Regenerates `<output_dir>/README.md` from scratch.
pub fn write_index(
    output_dir: &Path,
    ctf_name: &str,
    challenges_folder: &str,
    summaries: &[ChallengeSummary],
) -> io::Result<PathBuf> {
    let path = output_dir.join(INDEX_FILE);
    write_atomic(&path, render_index(ctf_name, challenges_folder, summaries).as_bytes())?;
    Ok(path)
}
