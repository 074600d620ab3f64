//! Challenge-name slugs.

/// Prefix carried by every slug. Marks the stub as an unsolved entry in the
/// writeup tree.
pub const SLUG_MARKER: &str = "🔲 ";

/// Turns a display name into a filesystem-safe slug.
///
/// Lowercases, collapses each whitespace run into a single `-`, drops every
/// character outside `[a-z0-9-]`, trims `-` from both ends and prefixes
/// [`SLUG_MARKER`]. Total and deterministic; non-ASCII letters are dropped,
/// and distinct names may share a slug.
///
/// # Examples
///
/// - `slugify("SQL Injection 101!!!")` → `"🔲 sql-injection-101"`
/// - `slugify("!!!")` → `"🔲 "`
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut body = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                body.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            body.push(c);
        }
    }

    format!("{}{}", SLUG_MARKER, body.trim_matches('-'))
}
