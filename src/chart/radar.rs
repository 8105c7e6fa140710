use std::f64::consts::{FRAC_PI_2, TAU};

use plotters::{
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use super::{
    theme::{AXIS, GRID, LABEL_SIZE, PALETTE, TEXT, TITLE_SIZE},
    Area, DrawResult,
};
use crate::{font::FONT_FAMILY, FrequencyTable};

const SERIES: &str = "词频";
const RINGS: usize = 5;

/// Vertex of axis `index` out of `axes` at `distance` from `center`,
/// the first axis pointing up.
pub fn vertex(center: (i32, i32), axes: usize, index: usize, distance: f64) -> (i32, i32) {
    let angle = index as f64 / axes as f64 * TAU - FRAC_PI_2;
    (
        center.0 + (distance * angle.cos()).round() as i32,
        center.1 + (distance * angle.sin()).round() as i32,
    )
}

/// Text anchor for the label at the end of an axis, pushing the text away
/// from the chart.
fn label_anchor(center: (i32, i32), point: (i32, i32)) -> (HPos, VPos) {
    let (dx, dy) = (point.0 - center.0, point.1 - center.1);
    let horizontal = if dx.abs() <= 1 {
        HPos::Center
    } else if dx > 0 {
        HPos::Left
    } else {
        HPos::Right
    };
    let vertical = if dy.abs() <= 1 {
        VPos::Center
    } else if dy > 0 {
        VPos::Top
    } else {
        VPos::Bottom
    };
    (horizontal, vertical)
}

pub fn draw_radar(root: &Area, table: &FrequencyTable, title: &str) -> DrawResult {
    let area = root.titled(title, (FONT_FAMILY, TITLE_SIZE))?;
    let (width, height) = area.dim_in_pixel();
    let color = PALETTE[0];

    let legend = (width as i32 / 2 - 24, 10);
    area.draw(&Rectangle::new(
        [(legend.0, legend.1 - 6), (legend.0 + 24, legend.1 + 6)],
        color.filled(),
    ))?;
    area.draw(&Text::new(
        SERIES,
        (legend.0 + 30, legend.1),
        (FONT_FAMILY, LABEL_SIZE)
            .into_font()
            .color(&TEXT)
            .pos(Pos::new(HPos::Left, VPos::Center)),
    ))?;

    let axes = table.len();
    // every indicator shares the table maximum
    let max = table.max_frequency().max(1) as f64;
    let center = (width as i32 / 2, height as i32 / 2 + 12);
    let radius = width.min(height) as f64 * 0.34;

    for ring in 1..=RINGS {
        let distance = radius * ring as f64 / RINGS as f64;
        let outline = (0..=axes)
            .map(|index| vertex(center, axes, index % axes, distance))
            .collect::<Vec<_>>();
        area.draw(&PathElement::new(outline, GRID.stroke_width(1)))?;
    }

    let label_style = (FONT_FAMILY, LABEL_SIZE).into_font().color(&AXIS);
    for (index, word) in table.words().enumerate() {
        let end = vertex(center, axes, index, radius);
        area.draw(&PathElement::new(vec![center, end], GRID.stroke_width(1)))?;

        let label = vertex(center, axes, index, radius + 8.0);
        let (horizontal, vertical) = label_anchor(center, label);
        area.draw(&Text::new(
            word,
            label,
            label_style.pos(Pos::new(horizontal, vertical)),
        ))?;
    }

    let series = table
        .frequencies()
        .enumerate()
        .map(|(index, value)| vertex(center, axes, index, radius * value as f64 / max))
        .collect::<Vec<_>>();

    area.draw(&Polygon::new(series.clone(), color.mix(0.35).filled()))?;
    let mut outline = series.clone();
    outline.push(series[0]);
    area.draw(&PathElement::new(outline, color.stroke_width(2)))?;
    for point in series {
        area.draw(&Circle::new(point, 3, color.filled()))?;
    }

    area.draw(&Text::new(
        (max as usize).to_string(),
        (center.0 + 4, center.1 - radius as i32),
        (FONT_FAMILY, LABEL_SIZE - 2.0)
            .into_font()
            .color(&TEXT)
            .pos(Pos::new(HPos::Left, VPos::Top)),
    ))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use plotters::style::text_anchor::{HPos, VPos};

    use super::{label_anchor, vertex};

    #[test]
    fn first_axis_points_up_and_axes_go_clockwise() {
        let center = (100, 100);

        assert_eq!(vertex(center, 4, 0, 50.0), (100, 50));
        assert_eq!(vertex(center, 4, 1, 50.0), (150, 100));
        assert_eq!(vertex(center, 4, 2, 50.0), (100, 150));
    }

    #[test]
    fn labels_are_pushed_away_from_the_centre() {
        let center = (100, 100);

        assert!(matches!(label_anchor(center, (100, 40)), (HPos::Center, VPos::Bottom)));
        assert!(matches!(label_anchor(center, (160, 100)), (HPos::Left, VPos::Center)));
        assert!(matches!(label_anchor(center, (40, 140)), (HPos::Right, VPos::Top)));
    }
}
