//! Presentation of a [`FrequencyTable`] as one of seven fixed chart kinds.
//!
//! Every kind reads the same table and none of them filters or reorders it.

use std::{fmt, io::Cursor, str::FromStr};

use ab_glyph::FontVec;
use image::{DynamicImage, ImageOutputFormat, RgbImage, RgbaImage};
use plotters::{coord::Shift, prelude::*};

use crate::{font::FONT_FAMILY, Error, FrequencyTable, Result, WordCloud};

mod cartesian;
mod heatmap;
mod pie;
mod radar;
mod theme;

/// Drawing surface every plotted chart receives: the whole image.
type Area<'b> = DrawingArea<BitMapBackend<'b>, Shift>;
type DrawResult = std::result::Result<(), Box<dyn std::error::Error>>;
type Paint = fn(&Area, &FrequencyTable, &str) -> DrawResult;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChartKind {
    #[default]
    WordCloud,
    Bar,
    Line,
    Pie,
    Scatter,
    Heatmap,
    Radar,
}

impl ChartKind {
    /// Sidebar order.
    pub const ALL: [ChartKind; 7] = [
        ChartKind::WordCloud,
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Pie,
        ChartKind::Scatter,
        ChartKind::Heatmap,
        ChartKind::Radar,
    ];

    /// Value used in the `chart` query parameter.
    pub fn slug(self) -> &'static str {
        match self {
            ChartKind::WordCloud => "wordcloud",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Scatter => "scatter",
            ChartKind::Heatmap => "heatmap",
            ChartKind::Radar => "radar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::WordCloud => "词云图",
            ChartKind::Bar => "柱状图",
            ChartKind::Line => "折线图",
            ChartKind::Pie => "饼图",
            ChartKind::Scatter => "散点图",
            ChartKind::Heatmap => "热力图",
            ChartKind::Radar => "雷达图",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::WordCloud => "词云图",
            ChartKind::Bar => "词频柱状图",
            ChartKind::Line => "词频折线图",
            ChartKind::Pie => "词频饼图",
            ChartKind::Scatter => "词频散点图",
            ChartKind::Heatmap => "词频热力图",
            ChartKind::Radar => "词频雷达图",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownChartKind(pub String);

impl fmt::Display for UnknownChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown chart kind '{}'", self.0)
    }
}

impl std::error::Error for UnknownChartKind {}

impl FromStr for ChartKind {
    type Err = UnknownChartKind;

    /// Accepts the slug or the sidebar label.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.slug().eq_ignore_ascii_case(s) || kind.label() == s)
            .ok_or_else(|| UnknownChartKind(s.to_string()))
    }
}

pub struct ChartRenderer {
    font: FontVec,
    width: u32,
    height: u32,
    word_cloud: WordCloud,
}

impl ChartRenderer {
    pub fn new(font: FontVec, width: u32, height: u32) -> Self {
        ChartRenderer {
            font,
            width: width.max(1),
            height: height.max(1),
            word_cloud: WordCloud::default(),
        }
    }

    pub fn with_word_cloud(mut self, value: WordCloud) -> Self {
        self.word_cloud = value;
        self
    }

    pub fn render(&self, kind: ChartKind, table: &FrequencyTable) -> Result<RgbaImage> {
        let paint: Paint = match kind {
            ChartKind::WordCloud => {
                return Ok(self
                    .word_cloud
                    .generate(table, &self.font, self.width, self.height))
            }
            ChartKind::Bar => cartesian::draw_bar,
            ChartKind::Line => cartesian::draw_line,
            ChartKind::Pie => pie::draw_pie,
            ChartKind::Scatter => cartesian::draw_scatter,
            ChartKind::Heatmap => heatmap::draw_heatmap,
            ChartKind::Radar => radar::draw_radar,
        };

        self.plot(table, kind.title(), paint)
    }

    pub fn render_png(&self, kind: ChartKind, table: &FrequencyTable) -> Result<Vec<u8>> {
        encode_png(self.render(kind, table)?)
    }

    /// Runs `paint` on a white RGB bitmap of the configured size.
    fn plot(&self, table: &FrequencyTable, title: &str, paint: Paint) -> Result<RgbaImage> {
        let mut buffer = vec![0u8; self.width as usize * self.height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (self.width, self.height))
                .into_drawing_area();
            draw_on(&root, table, title, paint).map_err(|err| Error::Chart(err.to_string()))?;
        }

        RgbImage::from_raw(self.width, self.height, buffer)
            .map(|image| DynamicImage::ImageRgb8(image).into_rgba8())
            .ok_or_else(|| Error::Chart("bitmap buffer does not match the chart size".into()))
    }
}

fn draw_on(root: &Area, table: &FrequencyTable, title: &str, paint: Paint) -> DrawResult {
    root.fill(&WHITE)?;
    if table.is_empty() {
        root.titled(title, (FONT_FAMILY, theme::TITLE_SIZE))?;
    } else {
        paint(root, table, title)?;
    }
    root.present()?;
    Ok(())
}

pub fn encode_png(image: RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image).write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)?;
    Ok(bytes)
}
