use std::collections::HashSet;

use jieba_rs::Jieba;
use regex::Regex;

pub struct ChineseTokenizer {
    //分词正则
    regex: Regex,
    pub jieba: Jieba,
    pub filter: HashSet<String>,
    pub min_word_length: usize,
    pub exclude_numbers: bool,
    pub hmm: bool,
}

impl Default for ChineseTokenizer {
    fn default() -> Self {
        let regex = Regex::new("\\w[\\w']*").expect("Unable to compile tokenization regex");

        ChineseTokenizer {
            regex,
            jieba: Jieba::new(),
            filter: Default::default(),
            min_word_length: 2,
            exclude_numbers: true,
            hmm: true,
        }
    }
}

impl<'a> ChineseTokenizer {
    pub fn with_word(mut self, word: &str) -> Self {
        self.jieba.add_word(word, None, None);
        self
    }

    pub fn with_words<S: AsRef<str>>(self, words: &[S]) -> Self {
        words
            .iter()
            .fold(self, |tokenizer, word| tokenizer.with_word(word.as_ref()))
    }

    pub fn with_min_word_length(mut self, size: usize) -> Self {
        self.min_word_length = size;
        self
    }

    pub fn with_filter<S: AsRef<str>>(mut self, value: &[S]) -> Self {
        self.filter = value.iter().map(|el| el.as_ref().to_lowercase()).collect();

        self
    }

    pub fn with_exclude_numbers(mut self, value: bool) -> Self {
        self.exclude_numbers = value;
        self
    }

    pub fn with_hmm(mut self, value: bool) -> Self {
        self.hmm = value;
        self
    }

    /// Segments `text` into words, in emission order, dropping short words,
    /// pure numbers and filtered words.
    pub fn tokenize(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let mut iter: Box<dyn Iterator<Item = &'a str> + 'a> = Box::new(
            self.regex
                .find_iter(text)
                .map(|mat| mat.as_str())
                .filter(|str| !str.is_empty())
                .flat_map(move |str| self.jieba.cut(str, self.hmm)),
        );

        if self.min_word_length > 0 {
            iter = Box::new(iter.filter(move |str| {
                let chars = str.chars().count();
                chars >= self.min_word_length
            }));
        }

        if self.exclude_numbers {
            iter = Box::new(iter.filter(move |word| !word.chars().all(char::is_numeric)));
        }

        if !self.filter.is_empty() {
            iter = Box::new(iter.filter(move |str| {
                let lower_case = str.to_lowercase();
                !self.filter.contains(&lower_case)
            }));
        }

        iter
    }
}
