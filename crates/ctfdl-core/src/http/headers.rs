//! Response header accumulation for streamed transfers.

use std::str;

/// Header lines of the final response. A new status line (after a redirect
/// or a `100 Continue`) discards what came before.
#[derive(Debug, Clone, Default)]
pub struct ResponseHeaders {
    status: Option<u32>,
    lines: Vec<String>,
}

impl ResponseHeaders {
    /// Feed one raw header line as delivered by libcurl's header callback.
    pub fn push_raw(&mut self, data: &[u8]) {
        if let Ok(s) = str::from_utf8(data) {
            self.push_line(s);
        }
    }

    pub fn push_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        if line.starts_with("HTTP/") {
            self.lines.clear();
            self.status = line
                .split_whitespace()
                .nth(1)
                .and_then(|code| code.parse().ok());
            return;
        }
        self.lines.push(line.to_string());
    }

    /// Status code of the latest status line seen.
    pub fn status(&self) -> Option<u32> {
        self.status
    }

    /// First value of header `name` (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| {
            let (k, v) = line.split_once(':')?;
            k.trim().eq_ignore_ascii_case(name).then(|| v.trim())
        })
    }

    /// `Content-Length`, if present and numeric.
    pub fn content_length(&self) -> Option<u64> {
        self.get("content-length")?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(lines: &[&str]) -> ResponseHeaders {
        let mut h = ResponseHeaders::default();
        for l in lines {
            h.push_raw(format!("{}\r\n", l).as_bytes());
        }
        h
    }

    #[test]
    fn content_length_case_insensitive() {
        let h = feed(&["HTTP/1.1 200 OK", "content-LENGTH: 12345", ""]);
        assert_eq!(h.status(), Some(200));
        assert_eq!(h.content_length(), Some(12345));
    }

    #[test]
    fn missing_or_bogus_length_is_none() {
        assert_eq!(feed(&["HTTP/1.1 200 OK"]).content_length(), None);
        assert_eq!(
            feed(&["HTTP/1.1 200 OK", "Content-Length: lots"]).content_length(),
            None
        );
    }

    #[test]
    fn redirect_headers_are_discarded() {
        let h = feed(&[
            "HTTP/1.1 302 Found",
            "Location: /files/real.bin",
            "Content-Length: 0",
            "",
            "HTTP/1.1 200 OK",
            "Content-Type: application/octet-stream",
            "",
        ]);
        assert_eq!(h.status(), Some(200));
        assert_eq!(h.content_length(), None);
        assert_eq!(h.get("location"), None);
        assert_eq!(h.get("content-type"), Some("application/octet-stream"));
    }
}
