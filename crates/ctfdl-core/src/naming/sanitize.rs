//! Making server-supplied strings safe as single path components.

/// Longest file name most Linux filesystems accept, in bytes.
const NAME_MAX: usize = 255;

fn is_forbidden(c: char) -> bool {
    c == '/' || c == '\\' || c.is_control()
}

/// Category prefix: separators and control characters become `_`; spaces and
/// everything else survive so the prefix still reads like the category.
pub fn sanitize_component(name: &str) -> String {
    let out: String = name
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    clamp(out)
}

/// Asset base name: separators, control characters and blanks become `_`,
/// runs of `_` collapse, and leading/trailing dots or underscores go. May
/// return an empty string; callers pick a fallback.
pub fn sanitize_asset_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let c = if is_forbidden(c) || c == ' ' { '_' } else { c };
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }
    clamp(out.trim_matches(|c| c == '.' || c == '_').to_string())
}

fn clamp(mut s: String) -> String {
    if s.len() > NAME_MAX {
        let mut cut = NAME_MAX;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
    }
    s
}
