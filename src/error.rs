use std::{io, path::PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to read font file {path}: {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("font file {path} may be invalid")]
    FontInvalid { path: PathBuf },

    #[error("{0}")]
    Fetch(#[from] reqwest::Error),

    #[error("unable to encode chart image: {0}")]
    Image(#[from] image::ImageError),

    #[error("unable to draw chart: {0}")]
    Chart(String),

    #[error("invalid color: {0}")]
    InvalidColor(#[from] csscolorparser::ParseColorError),

    #[error("server error: {0}")]
    Bind(#[source] io::Error),
}
