use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::errors::PageSumError;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("anchor selector compiles"));

/// Absolute links found on a page, split by host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPartition {
    pub internal: Vec<String>,
    pub external: Vec<String>,
}

/// Extract every `<a href>` from `markup` and partition it against `base_url`.
///
/// References are resolved relative to `base_url`. Anything that does not
/// resolve is dropped without error. A link is internal when its host is
/// exactly the host of `base_url`; there is no scheme or port normalization.
///
/// Order of appearance is kept and duplicates are **not** removed.
///
/// # Errors
///
/// Returns `FetchError` when `base_url` itself cannot be parsed.
pub fn extract_links(base_url: &str, markup: &str) -> Result<LinkPartition, PageSumError> {
    let base = Url::parse(base_url)
        .map_err(|e| PageSumError::FetchError(format!("invalid page URL {base_url}: {e}")))?;
    let base_host = base.host_str();

    let document = Html::parse_document(markup);
    let mut links = LinkPartition::default();

    for anchor in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if href.is_empty() {
            continue;
        }
        let Ok(resolved) = base.join(href) else {
            continue;
        };

        if resolved.host_str() == base_host {
            links.internal.push(resolved.to_string());
        } else {
            links.external.push(resolved.to_string());
        }
    }

    Ok(links)
}
