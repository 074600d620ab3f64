//! `ctfdl format`: mark solved challenges, optionally link images.

use anyhow::Result;
use ctfdl_core::writeup;
use std::path::Path;

pub fn run_format(writeup_dir: &Path, link_images: bool) -> Result<()> {
    let report = writeup::format(writeup_dir, link_images)?;
    println!(
        "{} of {} challenge(s) solved",
        report.solved, report.entries
    );
    if link_images {
        println!("Linked images in {} file(s)", report.rewritten);
    }
    Ok(())
}
