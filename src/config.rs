use std::{
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    time::Duration,
};

use clap::Parser;
use image::Rgba;

use crate::{frequency::DEFAULT_LIMIT, ChineseTokenizer, Result, WordCloud};

// TODO: pick a per-platform CJK font instead of the Windows path.
pub const DEFAULT_FONT: &str = "C:/Windows/Fonts/simsun.ttc";

const MIN_WORD_LENGTH: usize = 2;

/// 文本分析: chart the most frequent words of a web page.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about)]
pub struct Args {
    /// Address to listen on
    #[clap(long, env = "WORDFREQ_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    #[clap(long, env = "WORDFREQ_PORT", default_value_t = 8501)]
    pub port: u16,

    /// Font used for every chart, must cover CJK glyphs
    #[clap(long, env = "WORDFREQ_FONT", default_value = DEFAULT_FONT)]
    pub font: PathBuf,

    /// Number of words kept in the table, at most 20
    #[clap(long, default_value_t = DEFAULT_LIMIT, value_parser = parse_top)]
    pub top: usize,

    /// Shorter words are dropped, single characters never count
    #[clap(long, default_value_t = MIN_WORD_LENGTH, value_parser = parse_min_word_length)]
    pub min_word_length: usize,

    /// Word to ignore, may be repeated
    #[clap(long = "stopword")]
    pub stopwords: Vec<String>,

    /// Extra dictionary word for the segmenter, may be repeated
    #[clap(long = "word")]
    pub words: Vec<String>,

    /// Disable HMM discovery of words missing from the dictionary
    #[clap(long)]
    pub no_hmm: bool,

    #[clap(long, default_value_t = 900)]
    pub width: u32,

    #[clap(long, default_value_t = 540)]
    pub height: u32,

    /// Word cloud background, any CSS colour
    #[clap(long, default_value = "white")]
    pub background: String,

    /// Seed for word cloud placement and colours
    #[clap(long, env = "WORDFREQ_SEED")]
    pub seed: Option<u64>,

    /// Fetch timeout in seconds
    #[clap(long, default_value_t = 30)]
    pub timeout: u64,
}

fn parse_top(value: &str) -> std::result::Result<usize, String> {
    let top = value.parse::<usize>().map_err(|err| err.to_string())?;
    if (1..=DEFAULT_LIMIT).contains(&top) {
        Ok(top)
    } else {
        Err(format!("must be between 1 and {DEFAULT_LIMIT}"))
    }
}

fn parse_min_word_length(value: &str) -> std::result::Result<usize, String> {
    let length = value.parse::<usize>().map_err(|err| err.to_string())?;
    if length >= MIN_WORD_LENGTH {
        Ok(length)
    } else {
        Err(format!("must be at least {MIN_WORD_LENGTH}"))
    }
}

impl Args {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn tokenizer(&self) -> ChineseTokenizer {
        ChineseTokenizer::default()
            .with_words(&self.words)
            .with_filter(&self.stopwords)
            .with_min_word_length(self.min_word_length)
            .with_hmm(!self.no_hmm)
    }

    pub fn background_color(&self) -> Result<Rgba<u8>> {
        let color = csscolorparser::parse(&self.background)?;
        Ok(Rgba(color.to_rgba8()))
    }

    pub fn word_cloud(&self) -> Result<WordCloud> {
        Ok(WordCloud::default()
            .with_background_color(self.background_color()?)
            .with_rng_seed(self.seed))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::Rgba;

    use super::Args;
    use crate::Error;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("rust_wordfreq").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn repeated_options_collect() {
        let args = parse(&[
            "--stopword", "我们", "--stopword", "他们", "--word", "悟空传", "--no-hmm", "--top", "10",
        ]);

        assert_eq!(args.stopwords, vec!["我们", "他们"]);
        assert_eq!(args.words, vec!["悟空传"]);
        assert!(args.no_hmm);
        assert_eq!(args.top, 10);

        let tokenizer = args.tokenizer();
        assert!(!tokenizer.hmm);
        assert!(tokenizer.filter.contains("我们"));
    }

    #[test]
    fn parses_css_colors() {
        let args = parse(&["--background", "#102030"]);
        assert_eq!(args.background_color().unwrap(), Rgba([0x10, 0x20, 0x30, 0xFF]));

        let args = parse(&["--background", "not-a-colour"]);
        assert!(matches!(args.background_color(), Err(Error::InvalidColor(_))));
    }

    #[test]
    fn address_combines_host_and_port() {
        let args = parse(&["--host", "0.0.0.0", "--port", "9000"]);

        assert_eq!(args.addr().to_string(), "0.0.0.0:9000");
    }

    #[test]
    fn table_size_is_capped_at_twenty() {
        let reject = |args: &[&str]| {
            Args::try_parse_from(std::iter::once("rust_wordfreq").chain(args.iter().copied()))
                .is_err()
        };

        assert!(reject(&["--top", "50"]));
        assert!(reject(&["--top", "21"]));
        assert!(reject(&["--top", "0"]));
        assert!(reject(&["--top", "many"]));
        assert_eq!(parse(&["--top", "20"]).top, 20);
        assert_eq!(parse(&["--top", "1"]).top, 1);
    }

    #[test]
    fn single_characters_are_never_counted() {
        let result = Args::try_parse_from(["rust_wordfreq", "--min-word-length", "1"]);
        assert!(result.is_err());
        assert!(Args::try_parse_from(["rust_wordfreq", "--min-word-length", "0"]).is_err());

        let args = parse(&[]);
        assert_eq!(args.top, 20);
        assert_eq!(args.min_word_length, 2);

        let args = parse(&["--min-word-length", "3"]);
        assert_eq!(args.tokenizer().min_word_length, 3);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Args::try_parse_from(["rust_wordfreq", "--frobnicate"]).is_err());
    }
}
