use plotters::{prelude::*, style::FontTransform};

use super::{
    theme::{LABEL_SIZE, PALETTE, TEXT, TITLE_SIZE},
    Area, DrawResult,
};
use crate::{font::FONT_FAMILY, FrequencyTable};

const SERIES: &str = "频次";

/// Rounds `max` up to a value with roughly five 1/2/5-sized steps.
pub fn nice_scale(max: usize) -> (usize, usize) {
    if max == 0 {
        return (1, 1);
    }

    let raw_step = max as f64 / 5.0;
    let magnitude = 10f64.powi(raw_step.log10().floor() as i32);
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|factor| factor * magnitude)
        .find(|step| *step >= raw_step)
        .unwrap_or(10.0 * magnitude)
        .max(1.0) as usize;

    (max.div_ceil(step) * step, step)
}

/// Pixels below the plot for the longest word written top to bottom,
/// never more than a third of `height`.
pub fn label_area(table: &FrequencyTable, height: u32) -> u32 {
    let longest = table.words().map(|word| word.chars().count()).max().unwrap_or(0) as u32;
    (longest * LABEL_SIZE as u32 + 12).min(height / 3)
}

/// Tick label for a category axis: the word at the centre of its segment.
pub fn category_label<'t>(words: &'t [&'t str]) -> impl Fn(&SegmentValue<i32>) -> String + 't {
    move |value| match value {
        SegmentValue::CenterOf(index) => usize::try_from(*index)
            .ok()
            .and_then(|index| words.get(index))
            .map(|word| word.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

pub fn rotated_labels<'a>() -> TextStyle<'a> {
    (FONT_FAMILY, LABEL_SIZE)
        .into_font()
        .transform(FontTransform::Rotate90)
        .color(&TEXT)
}

#[derive(Clone, Copy)]
enum Series {
    Bar,
    Line,
    Scatter,
}

pub fn draw_bar(root: &Area, table: &FrequencyTable, title: &str) -> DrawResult {
    draw_series(root, table, title, Series::Bar)
}

pub fn draw_line(root: &Area, table: &FrequencyTable, title: &str) -> DrawResult {
    draw_series(root, table, title, Series::Line)
}

pub fn draw_scatter(root: &Area, table: &FrequencyTable, title: &str) -> DrawResult {
    draw_series(root, table, title, Series::Scatter)
}

fn draw_series(root: &Area, table: &FrequencyTable, title: &str, series: Series) -> DrawResult {
    let words = table.words().collect::<Vec<_>>();
    let (y_max, _) = nice_scale(table.max_frequency());
    let (_, height) = root.dim_in_pixel();

    let mut chart = ChartBuilder::on(root)
        .caption(title, (FONT_FAMILY, TITLE_SIZE))
        .margin(16)
        .x_label_area_size(label_area(table, height))
        .y_label_area_size(40)
        .build_cartesian_2d((0..words.len() as i32).into_segmented(), 0..y_max as i32)?;

    let label = category_label(&words);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(words.len())
        .x_label_formatter(&label)
        .label_style((FONT_FAMILY, LABEL_SIZE))
        .x_label_style(rotated_labels())
        .draw()?;

    let color = PALETTE[0];
    let points = table
        .frequencies()
        .enumerate()
        .map(|(index, value)| (SegmentValue::CenterOf(index as i32), value as i32))
        .collect::<Vec<_>>();

    match series {
        Series::Bar => {
            chart
                .draw_series(table.frequencies().enumerate().map(|(index, value)| {
                    let index = index as i32;
                    let mut bar = Rectangle::new(
                        [
                            (SegmentValue::Exact(index), 0),
                            (SegmentValue::Exact(index + 1), value as i32),
                        ],
                        color.filled(),
                    );
                    bar.set_margin(0, 0, 6, 6);
                    bar
                }))?
                .label(SERIES)
                .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 24, y + 6)], color.filled()));
        }
        Series::Line => {
            chart
                .draw_series(LineSeries::new(points.iter().cloned(), color.stroke_width(2)))?
                .label(SERIES)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(2)));
            chart.draw_series(
                points
                    .iter()
                    .map(|point| Circle::new(point.clone(), 4, color.filled())),
            )?;
        }
        Series::Scatter => {
            chart
                .draw_series(
                    points
                        .iter()
                        .map(|point| Circle::new(point.clone(), 6, color.filled())),
                )?
                .label(SERIES)
                .legend(move |(x, y)| Circle::new((x + 12, y), 6, color.filled()));
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperMiddle)
        .label_font((FONT_FAMILY, LABEL_SIZE))
        .background_style(&WHITE.mix(0.8))
        .border_style(&TEXT)
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use plotters::prelude::SegmentValue;

    use super::{category_label, label_area, nice_scale};
    use crate::FrequencyTable;

    #[test]
    fn nice_scale_rounds_up_to_round_steps() {
        assert_eq!(nice_scale(0), (1, 1));
        assert_eq!(nice_scale(1), (1, 1));
        assert_eq!(nice_scale(7), (8, 2));
        assert_eq!(nice_scale(10), (10, 2));
        assert_eq!(nice_scale(23), (25, 5));
        assert_eq!(nice_scale(87), (100, 20));
        assert_eq!(nice_scale(1234), (1500, 500));
    }

    #[test]
    fn categories_are_labelled_at_segment_centres_only() {
        let words = ["北京", "上海"];
        let label = category_label(&words);

        assert_eq!(label(&SegmentValue::CenterOf(0)), "北京");
        assert_eq!(label(&SegmentValue::CenterOf(1)), "上海");
        assert_eq!(label(&SegmentValue::CenterOf(2)), "");
        assert_eq!(label(&SegmentValue::CenterOf(-1)), "");
        assert_eq!(label(&SegmentValue::Exact(0)), "");
        assert_eq!(label(&SegmentValue::Last), "");
    }

    #[test]
    fn label_area_fits_the_longest_word_within_a_third() {
        let table = FrequencyTable::from_tokens(["中华人民共和国", "北京", "北京"], 20);

        assert_eq!(label_area(&table, 600), 7 * 13 + 12);
        assert_eq!(label_area(&table, 90), 30);
        assert_eq!(label_area(&FrequencyTable::default(), 600), 12);
    }
}
