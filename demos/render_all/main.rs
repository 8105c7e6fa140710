use std::{env, fs, time::Instant};

use rust_wordfreq::{analyze_html, load_font, ChartKind, ChartRenderer, ChineseTokenizer, WordCloud};

/// Renders every chart kind for a saved HTML page:
///
/// cargo run --example render_all -- page.html /path/to/font.ttc
pub fn main() {
    let mut args = env::args().skip(1);
    let page = args.next().expect("usage: render_all <page.html> <font>");
    let font_path = args.next().expect("usage: render_all <page.html> <font>");

    let html = fs::read_to_string(&page).expect("Unable to read page");
    let font = load_font(&font_path).expect("Unable to load font");

    let tokenizer = ChineseTokenizer::default().with_word("悟空传");
    let table = analyze_html(&html, &tokenizer, 20);
    for row in table.rows.iter().rev() {
        println!("{}, {}", row.word, row.frequency);
    }

    let renderer = ChartRenderer::new(font, 1280, 720)
        .with_word_cloud(WordCloud::default().with_rng_seed(Some(2023)));

    for kind in ChartKind::ALL {
        let now = Instant::now();
        let image = renderer.render(kind, &table).expect("Unable to draw chart");
        println!("{kind} generated in {}ms", now.elapsed().as_millis());

        image
            .save(format!("{kind}.png"))
            .expect("Unable to save image");
    }
}
