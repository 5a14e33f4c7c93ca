//! Capture fetching from the Location Source.
//!
//! Browser builds (`web`): real HTTP via `gloo-net`. Host builds: a stub
//! returning `None`, since fetching is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The fetch boundary is where error propagation stops. Network failures,
//! non-2xx statuses, and unparseable payloads are all logged and collapsed
//! to `None`; the caller treats `None` exactly like a capture with no data
//! and keeps the previous frame on screen. No retries, no backoff.

#![allow(clippy::unused_async)]

use capture::Capture;

/// Fetch and decode one capture payload from `url`.
///
/// Returns `None` on any transport or decode failure.
pub async fn fetch_capture(url: &str) -> Option<Capture> {
    #[cfg(feature = "web")]
    {
        let resp = match gloo_net::http::Request::get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("capture fetch failed: {e}");
                return None;
            }
        };
        if !resp.ok() {
            log::warn!("capture fetch returned status {}", resp.status());
            return None;
        }
        let text = match resp.text().await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("capture body read failed: {e}");
                return None;
            }
        };
        match capture::decode_capture(&text) {
            Ok(cap) => Some(cap),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = url;
        None
    }
}
