//! Post-processing of a mirrored tree once solutions have been written.
//!
//! Challenges whose file carries a `## Solution` header get a check mark in
//! the index. Optionally, `(((name.png)))` placeholders above that header
//! become Markdown image links into `<writeup_dir>/images/`.

use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::index::INDEX_FILE;
use crate::storage::write_atomic;

pub const SOLUTION_HEADER: &str = "## Solution";
pub const SOLVED_MARK: &str = ":white_check_mark: ";
pub const IMAGES_DIR: &str = "images";

const ENTRY_PREFIX: &str = "* ";

#[derive(Debug, Error)]
pub enum WriteupError {
    #[error("{0} does not exist")]
    Missing(PathBuf),
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("bad image pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatReport {
    pub entries: usize,
    pub solved: usize,
    /// Challenge files rewritten by image linking.
    pub rewritten: usize,
}

/// Rewrites `(((file)))` into an image link relative to the challenges folder.
pub struct ImageLinker {
    pattern: Regex,
}

impl ImageLinker {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(r"\(\(\(([^()\s]+)\)\)\)")?,
        })
    }

    pub fn link_line(&self, line: &str) -> String {
        self.pattern
            .replace_all(line, |caps: &regex::Captures<'_>| {
                format!("![{name}](<../{IMAGES_DIR}/{name}>)", name = &caps[1])
            })
            .into_owned()
    }

    /// Links every line before the solution header; the rest is kept verbatim.
    pub fn link_document(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut in_solution = false;
        for line in text.split_inclusive('\n') {
            if line.starts_with(SOLUTION_HEADER) {
                in_solution = true;
            }
            if in_solution {
                out.push_str(line);
            } else {
                out.push_str(&self.link_line(line));
            }
        }
        out
    }
}

/// Target of an index entry line: `* [name](<path>)`.
fn entry_target(line: &str) -> Option<&str> {
    if !line.starts_with(ENTRY_PREFIX) {
        return None;
    }
    let start = line.find("(<")? + 2;
    let len = line[start..].find(">)")?;
    Some(&line[start..start + len])
}

fn is_solved(text: &str) -> bool {
    text.lines().any(|l| l.starts_with(SOLUTION_HEADER))
}

fn mark_solved(line: &str) -> String {
    let rest = &line[ENTRY_PREFIX.len()..];
    if rest.starts_with(SOLVED_MARK) {
        line.to_string()
    } else {
        format!("{ENTRY_PREFIX}{SOLVED_MARK}{rest}")
    }
}

fn read(path: &Path) -> Result<String, WriteupError> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            WriteupError::Missing(path.to_path_buf())
        } else {
            WriteupError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

fn write(path: &Path, text: &str) -> Result<(), WriteupError> {
    write_atomic(path, text.as_bytes()).map_err(|source| WriteupError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Entries may point at a challenge file or at a directory holding README.md.
fn challenge_file(writeup_dir: &Path, target: &str) -> PathBuf {
    let path = writeup_dir.join(target);
    if path.is_dir() {
        path.join(INDEX_FILE)
    } else {
        path
    }
}

/// Formats the tree rooted at `writeup_dir`. Every linked file is read before
/// anything is written, so a missing file leaves the tree untouched.
pub fn format(writeup_dir: &Path, link_images: bool) -> Result<FormatReport, WriteupError> {
    let index_path = writeup_dir.join(INDEX_FILE);
    let index = read(&index_path)?;
    let linker = ImageLinker::new()?;

    let mut report = FormatReport::default();
    let mut new_index = String::with_capacity(index.len() + 64);
    let mut rewrites: Vec<(PathBuf, String)> = Vec::new();

    for line in index.split_inclusive('\n') {
        let Some(target) = entry_target(line) else {
            new_index.push_str(line);
            continue;
        };
        report.entries += 1;
        let path = challenge_file(writeup_dir, target);
        let text = read(&path)?;

        if link_images {
            let linked = linker.link_document(&text);
            if linked != text {
                rewrites.push((path, linked));
            }
        }
        if is_solved(&text) {
            report.solved += 1;
            new_index.push_str(&mark_solved(line));
        } else {
            new_index.push_str(line);
        }
    }

    for (path, text) in &rewrites {
        write(path, text)?;
        tracing::info!(path = %path.display(), "linked images");
    }
    report.rewritten = rewrites.len();

    if new_index != index {
        write(&index_path, &new_index)?;
    }
    tracing::info!(
        entries = report.entries,
        solved = report.solved,
        "formatted {}",
        index_path.display()
    );
    Ok(report)
}
