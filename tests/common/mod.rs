use std::{env, path::PathBuf, sync::Arc, time::Duration};

use axum::Router;
use rust_wordfreq::{
    load_font, server::AppState, ChartRenderer, ChineseTokenizer, Fetcher, WordCloud,
};
use tokio::net::TcpListener;

const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:/Windows/Fonts/simsun.ttc",
    "C:/Windows/Fonts/arial.ttf",
];

pub fn fetcher() -> Fetcher {
    Fetcher::new(Duration::from_secs(5)).unwrap()
}

/// App state over an installed font, `None` when the machine has none.
pub fn app_state() -> Option<Arc<AppState>> {
    let font = env::var_os("WORDFREQ_TEST_FONT")
        .map(PathBuf::from)
        .into_iter()
        .chain(FONT_CANDIDATES.iter().map(PathBuf::from))
        .filter(|path| path.is_file())
        .find_map(|path| load_font(path).ok())?;

    let renderer = ChartRenderer::new(font, 360, 240)
        .with_word_cloud(WordCloud::default().with_rng_seed(Some(11)));

    Some(Arc::new(AppState::new(
        fetcher(),
        ChineseTokenizer::default(),
        renderer,
        20,
    )))
}

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}")
}

/// A local URL nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}
