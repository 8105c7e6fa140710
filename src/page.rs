//! The single HTML page: URL form, chart selector sidebar, frequency table and chart.

use std::fmt::Write;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{ChartKind, Error, FrequencyTable};

const STYLE: &str = r#"
<style>
body { margin: 0; font-family: "Microsoft YaHei", "PingFang SC", "Noto Sans CJK SC", sans-serif; color: #262730; }
.layout { display: flex; min-height: 100vh; }
.sidebar { width: 240px; padding: 32px 20px; background: #f0f2f6; }
.sidebar label { display: block; font-size: 14px; margin-bottom: 8px; }
.sidebar select { width: 100%; padding: 6px; font-size: 14px; }
.main { flex: 1; padding: 32px 48px; max-width: 1100px; }
.url-row { display: flex; gap: 8px; }
.url-row input { flex: 1; padding: 8px; font-size: 15px; }
.url-row button { padding: 8px 20px; font-size: 15px; }
.error { margin-top: 16px; padding: 12px 16px; background: #ffe9e9; color: #7d353b; border-radius: 6px; }
.info { margin-top: 16px; padding: 12px 16px; background: #e8f4fd; color: #004280; border-radius: 6px; }
.stats { color: #808495; font-size: 13px; }
table { border-collapse: collapse; margin: 8px 0 24px; min-width: 320px; }
th, td { border: 1px solid #e6e9ef; padding: 4px 16px; text-align: left; }
th { background: #fafafa; }
td.num { text-align: right; }
img.chart { max-width: 100%; border: 1px solid #e6e9ef; }
</style>
"#;

/// What one render cycle produced.
pub struct Report {
    pub table: FrequencyTable,
    /// PNG bytes, absent when the table is empty.
    pub chart: Option<Vec<u8>>,
}

/// Why a render cycle produced no report, worded for the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The page could not be downloaded.
    Fetch(String),
    /// The words were counted but the chart could not be drawn.
    Chart(String),
}

impl Failure {
    fn prefix(&self) -> &'static str {
        match self {
            Failure::Fetch(_) => "获取文本失败",
            Failure::Chart(_) => "生成图表失败",
        }
    }

    fn message(&self) -> &str {
        match self {
            Failure::Fetch(message) | Failure::Chart(message) => message,
        }
    }
}

impl From<&Error> for Failure {
    fn from(err: &Error) -> Self {
        match err {
            Error::Fetch(_) => Failure::Fetch(err.to_string()),
            _ => Failure::Chart(err.to_string()),
        }
    }
}

pub struct PageView<'a> {
    pub url: &'a str,
    pub kind: ChartKind,
    /// Rows the table is capped at, shown in the heading.
    pub limit: usize,
    /// `None` until a URL has been submitted.
    pub outcome: Option<Result<Report, Failure>>,
}

impl<'a> PageView<'a> {
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(4096);
        html.push_str("<!doctype html>\n<html lang=\"zh\">\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str("<title>文本分析</title>\n");
        html.push_str(STYLE);
        html.push_str("</head>\n<body>\n<form method=\"get\" action=\"/\" class=\"layout\">\n");

        self.render_sidebar(&mut html);

        html.push_str("<main class=\"main\">\n<h1>文本分析</h1>\n");
        let _ = write!(
            html,
            "<div class=\"url-row\"><input type=\"text\" name=\"url\" aria-label=\"请输入URL\" \
             placeholder=\"请输入URL:\" value=\"{}\"><button type=\"submit\">分析</button></div>\n",
            encode_double_quoted_attribute(self.url)
        );

        match &self.outcome {
            None => {}
            Some(Err(failure)) => {
                let _ = writeln!(
                    html,
                    "<div class=\"error\">{}: {}</div>",
                    failure.prefix(),
                    encode_text(failure.message())
                );
            }
            Some(Ok(report)) => self.render_report(&mut html, report),
        }

        html.push_str("</main>\n</form>\n</body>\n</html>\n");
        html
    }

    fn render_sidebar(&self, html: &mut String) {
        html.push_str("<aside class=\"sidebar\">\n<label for=\"chart\">选择图形类型</label>\n");
        html.push_str("<select id=\"chart\" name=\"chart\" onchange=\"this.form.submit()\">\n");
        for kind in ChartKind::ALL {
            let selected = if kind == self.kind { " selected" } else { "" };
            let _ = writeln!(
                html,
                "<option value=\"{}\"{selected}>{}</option>",
                kind.slug(),
                kind.label()
            );
        }
        html.push_str("</select>\n</aside>\n");
    }

    fn render_report(&self, html: &mut String, report: &Report) {
        let table = &report.table;

        let _ = writeln!(html, "<h3>词频排名前{}的词汇</h3>", self.limit);
        let _ = writeln!(
            html,
            "<p class=\"stats\">有效词 {} 个，不同词汇 {} 个</p>",
            table.total_tokens, table.distinct_words
        );
        html.push_str("<table>\n<thead><tr><th>词汇</th><th>频次</th></tr></thead>\n<tbody>\n");
        for row in &table.rows {
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td class=\"num\">{}</td></tr>",
                encode_text(&row.word),
                row.frequency
            );
        }
        html.push_str("</tbody>\n</table>\n");

        match &report.chart {
            Some(png) => {
                let _ = writeln!(
                    html,
                    "<img class=\"chart\" alt=\"{}\" src=\"data:image/png;base64,{}\">",
                    self.kind.title(),
                    BASE64.encode(png)
                );
            }
            None => html.push_str("<div class=\"info\">正文中没有可统计的词汇</div>\n"),
        }
    }
}
