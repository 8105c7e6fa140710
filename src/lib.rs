//! Fetch a web page, segment the visible text of its body into words and
//! chart the most frequent ones.
//!
//! The pipeline is linear: [`Fetcher`] → [`extract_body_text`] →
//! [`ChineseTokenizer`] → [`FrequencyTable`] → [`ChartRenderer`].

pub use chart::{ChartKind, ChartRenderer};
pub use config::Args;
pub use error::{Error, Result};
pub use extract::extract_body_text;
pub use fetch::Fetcher;
pub use font::load_font;
pub use frequency::{FrequencyTable, WordFrequency};
pub use tokenizer::ChineseTokenizer;
pub use wordcloud::{Word, WordCloud};

pub mod chart;
pub mod config;
mod error;
mod extract;
mod fetch;
mod font;
pub mod frequency;
pub mod page;
mod sat;
pub mod server;
mod text;
mod tokenizer;
mod wordcloud;

/// Frequency table of the words in the body of `html`.
pub fn analyze_html(html: &str, tokenizer: &ChineseTokenizer, limit: usize) -> FrequencyTable {
    let text = extract_body_text(html);
    FrequencyTable::from_text(tokenizer, &text, limit)
}

/// Fetches `url` and tabulates its words. Any fetch failure aborts the whole
/// cycle, nothing partial is returned.
pub async fn fetch_frequency_table(
    fetcher: &Fetcher,
    tokenizer: &ChineseTokenizer,
    url: &str,
    limit: usize,
) -> Result<FrequencyTable> {
    let html = fetcher.fetch_text(url).await?;
    let table = analyze_html(&html, tokenizer, limit);

    tracing::debug!(
        url,
        tokens = table.total_tokens,
        distinct = table.distinct_words,
        rows = table.len(),
        "tabulated"
    );

    Ok(table)
}
