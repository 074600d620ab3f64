//! On-disk naming for challenges and their assets.
//!
//! Every path the sync pipeline writes is derived here from the challenge
//! summary, so the index and the files it links to always agree.

mod sanitize;
mod slug;

pub use sanitize::{sanitize_asset_name, sanitize_component};
pub use slug::{slugify, SLUG_MARKER};

/// Asset name used when the URL path yields nothing usable.
const FALLBACK_ASSET_NAME: &str = "download.bin";

/// `<category>_<slug>.md` for a challenge's metadata stub.
pub fn metadata_file_name(category: &str, name: &str) -> String {
    format!("{}_{}.md", sanitize_component(category), slugify(name))
}

/// Last non-empty path segment of `url`, query and fragment ignored.
fn last_segment(url: &url::Url) -> Option<&str> {
    url.path_segments()?.filter(|s| !s.is_empty()).last()
}

/// Sanitized base name of an asset URL, or `download.bin`.
pub fn asset_base_name(url: &url::Url) -> String {
    last_segment(url)
        .map(sanitize_asset_name)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_ASSET_NAME.to_string())
}

/// `<slug>_<basename>` for an asset attached to the named challenge.
pub fn asset_file_name(challenge_name: &str, url: &url::Url) -> String {
    format!("{}_{}", slugify(challenge_name), asset_base_name(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> url::Url {
        url::Url::parse(s).unwrap()
    }

    #[test]
    fn metadata_name_joins_category_and_slug() {
        assert_eq!(
            metadata_file_name("Web", "SQL Injection 101!!!"),
            "Web_🔲 sql-injection-101.md"
        );
        assert_eq!(
            metadata_file_name("Reverse/Binary", "crackme"),
            "Reverse_Binary_🔲 crackme.md"
        );
    }

    #[test]
    fn asset_name_uses_url_basename() {
        let u = url("http://ctf.local/files/deadbeef/flag.zip?token=x");
        assert_eq!(asset_file_name("Baby Pwn", &u), "🔲 baby-pwn_flag.zip");
        assert_eq!(asset_base_name(&url("http://ctf.local/files/ab/dir/")), "dir");
    }

    #[test]
    fn asset_name_falls_back() {
        assert_eq!(asset_base_name(&url("http://ctf.local/")), "download.bin");
        assert_eq!(asset_base_name(&url("http://ctf.local/files/...")), "download.bin");
    }
}
