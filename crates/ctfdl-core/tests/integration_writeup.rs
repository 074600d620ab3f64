//! Integration tests: formatting a mirrored tree after solutions were written.

use std::fs;
use std::path::Path;

use ctfdl_core::writeup::{self, WriteupError};
use tempfile::tempdir;

const FOLDER: &str = "📂 Challenges";

fn write_tree(root: &Path, challenges: &[(&str, &str)]) {
    let dir = root.join(FOLDER);
    fs::create_dir_all(&dir).unwrap();
    let mut index = String::from("# TestCTF\n\n## Challenges\n\n");
    for (file, body) in challenges {
        fs::write(dir.join(file), body).unwrap();
        let name = file.trim_end_matches(".md");
        index.push_str(&format!("* [{name}](<{FOLDER}/{file}>)\n"));
    }
    fs::write(root.join("README.md"), index).unwrap();
}

#[test]
fn solved_challenges_are_marked_once() {
    let root = tempdir().unwrap();
    write_tree(
        root.path(),
        &[
            ("Web_a.md", "# A\n\n> d\n\n## Solution\n\nflag{a}\n"),
            ("Pwn_b.md", "# B\n\n> d\n\n-------------------\n\n"),
        ],
    );

    let report = writeup::format(root.path(), false).unwrap();
    assert_eq!(report.entries, 2);
    assert_eq!(report.solved, 1);
    assert_eq!(report.rewritten, 0);

    let expected = format!(
        "# TestCTF\n\n## Challenges\n\n\
         * :white_check_mark: [Web_a](<{FOLDER}/Web_a.md>)\n\
         * [Pwn_b](<{FOLDER}/Pwn_b.md>)\n"
    );
    assert_eq!(fs::read_to_string(root.path().join("README.md")).unwrap(), expected);

    writeup::format(root.path(), false).unwrap();
    assert_eq!(fs::read_to_string(root.path().join("README.md")).unwrap(), expected);
}

#[test]
fn link_images_rewrites_only_above_solution() {
    let root = tempdir().unwrap();
    write_tree(
        root.path(),
        &[(
            "Misc_c.md",
            "# C\n\nSee (((start.png))) here.\n\n## Solution\n\n(((later.png)))\n",
        )],
    );

    let report = writeup::format(root.path(), true).unwrap();
    assert_eq!(report.rewritten, 1);
    assert_eq!(
        fs::read_to_string(root.path().join(FOLDER).join("Misc_c.md")).unwrap(),
        "# C\n\nSee ![start.png](<../images/start.png>) here.\n\n## Solution\n\n(((later.png)))\n"
    );

    let again = writeup::format(root.path(), true).unwrap();
    assert_eq!(again.rewritten, 0);
}

#[test]
fn missing_index_is_an_error() {
    let root = tempdir().unwrap();
    let err = writeup::format(root.path(), false).unwrap_err();
    assert!(matches!(err, WriteupError::Missing(ref p) if p.ends_with("README.md")));
}

#[test]
fn missing_challenge_file_leaves_tree_untouched() {
    let root = tempdir().unwrap();
    write_tree(
        root.path(),
        &[
            ("Web_a.md", "# A\n\n## Solution\n"),
            ("Web_gone.md", "# gone\n"),
        ],
    );
    fs::remove_file(root.path().join(FOLDER).join("Web_gone.md")).unwrap();
    let before = fs::read_to_string(root.path().join("README.md")).unwrap();

    let err = writeup::format(root.path(), true).unwrap_err();
    assert!(matches!(err, WriteupError::Missing(ref p) if p.ends_with("Web_gone.md")));
    assert_eq!(fs::read_to_string(root.path().join("README.md")).unwrap(), before);
}

#[test]
fn directory_entries_use_their_readme() {
    let root = tempdir().unwrap();
    fs::create_dir_all(root.path().join("web/a")).unwrap();
    fs::write(root.path().join("web/a/README.md"), "# A\n## Solution\n").unwrap();
    fs::write(root.path().join("README.md"), "# X\n\n* [A](<web/a>)\n").unwrap();

    let report = writeup::format(root.path(), false).unwrap();
    assert_eq!(report.solved, 1);
    assert_eq!(
        fs::read_to_string(root.path().join("README.md")).unwrap(),
        "# X\n\n* :white_check_mark: [A](<web/a>)\n"
    );
}
