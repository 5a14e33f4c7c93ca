//! Viewer configuration from the page query string.
//!
//! Everything is optional: with no query string at all the viewer polls the
//! conventional CGI path on the serving origin. `?src=` overrides the
//! capture endpoint and `?rose=` carries a JSON override for the rose
//! parameters, passed through verbatim for the engine to parse.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default capture endpoint, relative to the serving origin.
pub const DEFAULT_CAPTURE_URL: &str = "/cgi-bin/object_finder.py";

/// Resolved viewer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// URL polled for captures.
    pub capture_url: String,
    /// Raw JSON override for the rose parameters, if supplied.
    pub rose_json: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self { capture_url: DEFAULT_CAPTURE_URL.to_owned(), rose_json: None }
    }
}

/// Parse a `window.location.search` string (with or without the leading
/// `?`) into a configuration. Unknown parameters are ignored.
#[must_use]
pub fn from_query(query: &str) -> ViewerConfig {
    let mut config = ViewerConfig::default();

    for pair in query.trim_start_matches('?').split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "src" => {
                let url = percent_decode(value);
                if !url.is_empty() {
                    config.capture_url = url;
                }
            }
            "rose" => {
                let json = percent_decode(value);
                if !json.is_empty() {
                    config.rose_json = Some(json);
                }
            }
            _ => {}
        }
    }

    config
}

/// Decode `%XX` escapes and `+` spaces from a query-string component.
/// Malformed escapes pass through untouched.
fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => match hex_pair(bytes.get(i + 1).copied(), bytes.get(i + 2).copied()) {
                Some(byte) => {
                    out.push(byte);
                    i += 3;
                }
                None => {
                    out.push(b'%');
                    i += 1;
                }
            },
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_pair(high: Option<u8>, low: Option<u8>) -> Option<u8> {
    let high = (high? as char).to_digit(16)?;
    let low = (low? as char).to_digit(16)?;
    u8::try_from(high * 16 + low).ok()
}
