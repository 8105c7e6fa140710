mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Html,
    routing::get,
    Router,
};
use rust_wordfreq::{
    fetch_frequency_table, server::router, ChartKind, ChineseTokenizer, Error,
};
use tower::ServiceExt;

const WORDS: [&str; 25] = [
    "中国", "经济", "发展", "北京", "上海", "技术", "市场", "企业", "政府", "社会", "文化", "教育",
    "科学", "历史", "世界", "城市", "人民", "工作", "生活", "问题", "国家", "时间", "学生", "老师",
    "朋友",
];

/// The i-th word appears i + 1 times, mixed with numbers and single characters.
fn article() -> String {
    let body = WORDS
        .iter()
        .enumerate()
        .map(|(i, word)| vec![*word; i + 1].join("，"))
        .collect::<Vec<_>>()
        .join("。2024 年 的 ");

    format!(
        "<html><head><title>新闻</title><style>.x {{ color: red }}</style></head>\
         <body><article><h1>标题</h1><p>{body}</p></article>\
         <script>var 隐藏 = 1;</script></body></html>"
    )
}

async fn fixture() -> String {
    common::spawn(
        Router::new()
            .route("/article", get(|| async { Html(article()) }))
            .route("/empty", get(|| async { Html("<html><body> </body></html>") })),
    )
    .await
}

async fn get_page(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn table_section(html: &str) -> &str {
    let start = html.find("<table>").expect("page has a table");
    let end = html.find("</table>").expect("table is closed");
    &html[start..end]
}

#[tokio::test]
async fn fetched_table_is_top_twenty_ascending() {
    let base = fixture().await;

    let table = fetch_frequency_table(
        &common::fetcher(),
        &ChineseTokenizer::default(),
        &format!("{base}/article"),
        20,
    )
    .await
    .unwrap();

    assert_eq!(table.len(), 20);
    assert!(table
        .rows
        .windows(2)
        .all(|pair| pair[0].frequency <= pair[1].frequency));
    assert!(table.rows.iter().all(|row| row.word.chars().count() > 1));
    assert!(table
        .rows
        .iter()
        .all(|row| !row.word.chars().all(char::is_numeric)));
    assert_eq!(table.rows.last().unwrap().word, "朋友");
    assert_eq!(table.rows.last().unwrap().frequency, 25);
    assert!(table.words().all(|word| word != "隐藏" && word != "新闻"));
}

#[tokio::test]
async fn unreachable_url_is_an_error() {
    let url = common::unreachable_url().await;

    let result =
        fetch_frequency_table(&common::fetcher(), &ChineseTokenizer::default(), &url, 20).await;

    assert!(matches!(result, Err(Error::Fetch(_))));
}

#[tokio::test]
async fn page_shows_table_and_chart() {
    let Some(state) = common::app_state() else { return };
    let base = fixture().await;

    let (status, html) = get_page(router(state), &format!("/?url={base}/article&chart=bar")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("词频排名前20的词汇"));
    assert_eq!(table_section(&html).matches("<tr><td>").count(), 20);
    assert!(html.contains("data:image/png;base64,"));
    assert!(html.contains("<option value=\"bar\" selected>"));
}

#[tokio::test]
async fn switching_chart_kind_keeps_the_table() {
    let Some(state) = common::app_state() else { return };
    let base = fixture().await;
    let app = router(state);

    let mut tables = Vec::new();
    for kind in ChartKind::ALL {
        let uri = format!("/?url={base}/article&chart={}", kind.slug());
        let (status, html) = get_page(app.clone(), &uri).await;
        assert_eq!(status, StatusCode::OK, "{kind}");
        tables.push(table_section(&html).to_string());
    }

    assert!(tables.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn fetch_failure_is_shown_and_session_survives() {
    let Some(state) = common::app_state() else { return };
    let app = router(state);
    let bad = common::unreachable_url().await;

    let (status, html) = get_page(app.clone(), &format!("/?url={bad}&chart=pie")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("获取文本失败"));
    assert!(!html.contains("<table>"));

    let base = fixture().await;
    let (status, html) = get_page(app, &format!("/?url={base}/article&chart=pie")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<table>"));
}

#[tokio::test]
async fn empty_body_skips_the_chart() {
    let Some(state) = common::app_state() else { return };
    let base = fixture().await;

    let (status, html) = get_page(router(state), &format!("/?url={base}/empty&chart=radar")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(table_section(&html).matches("<tr><td>").count(), 0);
    assert!(html.contains("正文中没有可统计的词汇"));
    assert!(!html.contains("<img"));
}

#[tokio::test]
async fn blank_url_renders_only_the_form() {
    let Some(state) = common::app_state() else { return };

    let (status, html) = get_page(router(state.clone()), "/?url=%20%20").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("name=\"url\""));
    assert!(!html.contains("<table>"));

    let (status, body) = get_page(router(state), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}
