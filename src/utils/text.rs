//! Readable text extraction from page markup.

use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Elements whose text is considered readable content, in selector order.
pub const TEXT_TAGS: &str = "title, h1, h2, h3, h4, h5, h6, p, a, table, ul, ol, li, \
    section, article, aside, th, tr, td, figcaption, blockquote, q";

static TEXT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(TEXT_TAGS).expect("text tag selector compiles"));

/// Reduce markup to one block of text.
///
/// Every element matching [`TEXT_TAGS`] contributes its trimmed text, in
/// document order. Nested matches contribute again (a `<li>` inside a `<ul>`
/// appears in both), so identical fragments are collapsed to their first
/// occurrence. Fragments are joined with newlines and the result is trimmed.
#[must_use]
pub fn extract_text(markup: &str) -> String {
    let document = Html::parse_document(markup);

    let mut seen: HashSet<String> = HashSet::new();
    let mut fragments: Vec<String> = Vec::new();

    for element in document.select(&TEXT_SELECTOR) {
        let fragment = element.text().collect::<String>().trim().to_string();
        if seen.insert(fragment.clone()) {
            fragments.push(fragment);
        }
    }

    fragments.join("\n").trim().to_string()
}
