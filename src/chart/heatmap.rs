use palette::{LinSrgb, Pixel, Srgb};
use plotters::{
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use super::{
    cartesian::{category_label, label_area, rotated_labels},
    theme::{LABEL_SIZE, TEXT, TITLE_SIZE},
    Area, DrawResult,
};
use crate::{font::FONT_FAMILY, FrequencyTable};

/// matplotlib's YlGnBu.
const YL_GN_BU: [[u8; 3]; 9] = [
    [0xFF, 0xFF, 0xD9],
    [0xED, 0xF8, 0xB1],
    [0xC7, 0xE9, 0xB4],
    [0x7F, 0xCD, 0xBB],
    [0x41, 0xB6, 0xC4],
    [0x1D, 0x91, 0xC0],
    [0x22, 0x5E, 0xA8],
    [0x25, 0x34, 0x94],
    [0x08, 0x1D, 0x58],
];

/// Colour at `t` in `0..=1` along the ramp, interpolated in linear RGB.
pub fn ramp_color(t: f32) -> RGBColor {
    let position = t.clamp(0.0, 1.0) * (YL_GN_BU.len() - 1) as f32;
    let lower = (position.floor() as usize).min(YL_GN_BU.len() - 2);
    let factor = position - lower as f32;

    let linear = |raw: [u8; 3]| -> LinSrgb {
        Srgb::new(raw[0], raw[1], raw[2]).into_format::<f32>().into_linear()
    };
    let (a, b) = (linear(YL_GN_BU[lower]), linear(YL_GN_BU[lower + 1]));
    let mixed = LinSrgb::new(
        a.red + (b.red - a.red) * factor,
        a.green + (b.green - a.green) * factor,
        a.blue + (b.blue - a.blue) * factor,
    );

    let raw: [u8; 3] = Srgb::from_linear(mixed).into_format().into_raw();
    RGBColor(raw[0], raw[1], raw[2])
}

/// Position of `value` on the ramp. Equal counts sit in the middle.
pub fn shade(value: usize, min: usize, max: usize) -> f32 {
    if max == min {
        0.5
    } else {
        (value - min) as f32 / (max - min) as f32
    }
}

/// One row of cells, one per word, annotated with the count.
pub fn draw_heatmap(root: &Area, table: &FrequencyTable, title: &str) -> DrawResult {
    let words = table.words().collect::<Vec<_>>();
    let (min, max) = (table.min_frequency(), table.max_frequency());
    let (_, height) = root.dim_in_pixel();

    let mut chart = ChartBuilder::on(root)
        .caption(title, (FONT_FAMILY, TITLE_SIZE))
        .margin(16)
        .margin_bottom(height / 6)
        .x_label_area_size(label_area(table, height))
        .build_cartesian_2d((0..words.len() as i32).into_segmented(), 0.0..1.0)?;

    let label = category_label(&words);
    chart
        .configure_mesh()
        .disable_mesh()
        .disable_y_axis()
        .x_labels(words.len())
        .x_label_formatter(&label)
        .x_label_style(rotated_labels())
        .draw()?;

    chart.draw_series(table.frequencies().enumerate().map(|(index, value)| {
        let index = index as i32;
        Rectangle::new(
            [
                (SegmentValue::Exact(index), 0.0),
                (SegmentValue::Exact(index + 1), 1.0),
            ],
            ramp_color(shade(value, min, max)).filled(),
        )
    }))?;

    chart.draw_series(table.frequencies().enumerate().map(|(index, value)| {
        let ink = if shade(value, min, max) > 0.5 { WHITE } else { TEXT };
        Text::new(
            value.to_string(),
            (SegmentValue::CenterOf(index as i32), 0.5),
            (FONT_FAMILY, LABEL_SIZE)
                .into_font()
                .color(&ink)
                .pos(Pos::new(HPos::Center, VPos::Center)),
        )
    }))?;

    Ok(())
}
