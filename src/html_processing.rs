//! Document cleaning ahead of block selection.
//!
//! Implements the fetcher-side half of the input contract: whatever retrieves
//! the page is responsible for handing the selector a DOM free of script,
//! style and chrome noise. Callers that already hold a cleaned tree lose
//! nothing by running it again.

use tracing::trace;

use crate::dom::Document;

/// Elements that never contain ingredient content and routinely confuse the
/// density and consensus scans.
const NOISE_SELECTOR: &str = "script, style, noscript, nav, header, footer, iframe, svg";

/// Remove script/style/navigation noise from the document in place.
pub fn strip_noise(doc: &Document) {
    let noise = doc.select(NOISE_SELECTOR);
    let removed = noise.length();
    if removed > 0 {
        trace!(removed, "stripped noise elements");
        noise.remove();
    }
}
