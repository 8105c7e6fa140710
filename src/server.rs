use std::{net::SocketAddr, sync::Arc, time::Instant};

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::{
    fetch_frequency_table,
    page::{Failure, PageView, Report},
    Args, ChartKind, ChartRenderer, ChineseTokenizer, Error, Fetcher, Result,
};

/// Read-only state shared by every request.
pub struct AppState {
    pub fetcher: Fetcher,
    pub tokenizer: ChineseTokenizer,
    pub renderer: ChartRenderer,
    pub limit: usize,
}

static SHARED: OnceCell<Arc<AppState>> = OnceCell::new();

impl AppState {
    pub fn new(
        fetcher: Fetcher,
        tokenizer: ChineseTokenizer,
        renderer: ChartRenderer,
        limit: usize,
    ) -> Self {
        AppState {
            fetcher,
            tokenizer,
            renderer,
            limit,
        }
    }

    /// Loads the font and builds everything else from the command line.
    pub fn from_args(args: &Args) -> Result<Self> {
        let font = crate::load_font(&args.font)?;
        info!(font = %args.font.display(), "font loaded");

        let renderer =
            ChartRenderer::new(font, args.width, args.height).with_word_cloud(args.word_cloud()?);

        Ok(AppState::new(
            Fetcher::new(args.timeout())?,
            args.tokenizer(),
            renderer,
            args.top,
        ))
    }

    /// Process-wide state, initialised at most once.
    pub fn shared(args: &Args) -> Result<Arc<AppState>> {
        SHARED
            .get_or_try_init(|| AppState::from_args(args).map(Arc::new))
            .cloned()
    }

    /// One full render cycle, from the fetch to the encoded chart.
    pub async fn analyze(&self, url: &str, kind: ChartKind) -> Result<Report> {
        let started = Instant::now();
        let table = fetch_frequency_table(&self.fetcher, &self.tokenizer, url, self.limit).await?;

        let chart = if table.is_empty() {
            None
        } else {
            Some(self.renderer.render_png(kind, &table)?)
        };

        info!(
            url,
            chart = %kind,
            rows = table.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "rendered"
        );

        Ok(Report { table, chart })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub url: Option<String>,
    pub chart: Option<String>,
}

impl PageQuery {
    /// Unknown kinds fall back to the word cloud.
    pub fn kind(&self) -> ChartKind {
        match self.chart.as_deref().map(str::parse::<ChartKind>) {
            Some(Ok(kind)) => kind,
            Some(Err(err)) => {
                warn!(%err, "using the word cloud");
                ChartKind::default()
            }
            None => ChartKind::default(),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
}

async fn index_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let kind = query.kind();
    let url = query.url.as_deref().map(str::trim).unwrap_or_default();

    let outcome = if url.is_empty() {
        None
    } else {
        Some(state.analyze(url, kind).await.map_err(|err| {
            warn!(url, %err, "render cycle failed");
            Failure::from(&err)
        }))
    };

    Html(
        PageView {
            url,
            kind,
            limit: state.limit,
            outcome,
        }
        .render(),
    )
}

pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await.map_err(Error::Bind)?;
    info!("listening on http://{}", listener.local_addr().map_err(Error::Bind)?);

    axum::serve(listener, router(state)).await.map_err(Error::Bind)
}

#[cfg(test)]
mod tests {
    use super::PageQuery;
    use crate::ChartKind;

    fn query(chart: Option<&str>) -> PageQuery {
        PageQuery {
            url: None,
            chart: chart.map(str::to_string),
        }
    }

    #[test]
    fn chart_kind_defaults_to_word_cloud() {
        assert_eq!(query(None).kind(), ChartKind::WordCloud);
        assert_eq!(query(Some("nonsense")).kind(), ChartKind::WordCloud);
        assert_eq!(query(Some("radar")).kind(), ChartKind::Radar);
        assert_eq!(query(Some("热力图")).kind(), ChartKind::Heatmap);
    }
}
