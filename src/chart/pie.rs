use plotters::{element::Pie, prelude::*};

use super::{
    theme::{LABEL_SIZE, PALETTE, TEXT, TITLE_SIZE},
    Area, DrawResult,
};
use crate::{font::FONT_FAMILY, FrequencyTable};

/// Sector sizes and colours, one per row. Colours cycle through the palette.
pub fn sectors(table: &FrequencyTable) -> (Vec<f64>, Vec<RGBColor>) {
    table
        .frequencies()
        .enumerate()
        .map(|(index, value)| (value as f64, PALETTE[index % PALETTE.len()]))
        .unzip()
}

pub fn draw_pie(root: &Area, table: &FrequencyTable, title: &str) -> DrawResult {
    let area = root.titled(title, (FONT_FAMILY, TITLE_SIZE))?;
    let (width, height) = area.dim_in_pixel();

    let center = (width as i32 / 2, height as i32 / 2);
    let radius = width.min(height) as f64 * 0.34;
    let (sizes, colors) = sectors(table);
    let labels = table.words().collect::<Vec<_>>();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    // clockwise from twelve o'clock
    pie.start_angle(-90.0);
    pie.label_style((FONT_FAMILY, LABEL_SIZE).into_font().color(&TEXT));
    area.draw(&pie)?;

    Ok(())
}
