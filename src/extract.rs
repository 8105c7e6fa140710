use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static BODY: Lazy<Selector> = Lazy::new(|| Selector::parse("body").expect("valid body selector"));

/// Elements whose text never reaches the reader.
const INVISIBLE: &[&str] = &["script", "style", "noscript", "template"];

/// Returns the visible text of the document body, one trimmed text node
/// after another separated by a space. Text nodes hold decoded character
/// data, so `&lt;` comes back as a literal `<` and is left alone.
pub fn extract_body_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let Some(body) = document.select(&BODY).next() else {
        return String::new();
    };

    let pieces = body
        .descendants()
        .filter_map(|node| node.value().as_text().map(|text| (node, text)))
        .filter(|(node, _)| {
            !node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .map_or(false, |element| INVISIBLE.contains(&element.name()))
            })
        })
        .map(|(_, text)| text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>();

    pieces.join(" ")
}
