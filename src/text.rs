use ab_glyph::{point, Font, FontVec, Glyph, GlyphId, Point, PxScale, ScaleFont};
use image::{imageops, GrayImage, Luma, Rgba, RgbaImage};

#[derive(Clone, Debug)]
pub struct GlyphData {
    pub glyphs: Vec<Glyph>,
    pub width: u32,
    pub height: u32,
}

//把文本转换为字体，方便画图
pub fn text_to_glyphs(text: &str, font: &FontVec, scale: PxScale) -> GlyphData {
    let scaled_font = font.as_scaled(scale);

    let mut glyphs: Vec<Glyph> = vec![];
    layout_paragraph(scaled_font, point(0.0, 0.0), text, &mut glyphs);

    let glyphs_height = scaled_font.height().ceil() as u32;
    let glyphs_width = match (glyphs.first(), glyphs.last()) {
        (Some(first), Some(last)) => {
            let max_x = last.position.x + scaled_font.h_advance(last.id);
            (max_x - first.position.x).ceil() as u32
        }
        _ => 0,
    };

    GlyphData {
        glyphs,
        width: glyphs_width,
        height: glyphs_height,
    }
}

/// Rasterizes laid out glyphs into a coverage mask of `width` x `height`.
pub fn glyphs_to_mask(glyph_data: &GlyphData, font: &FontVec) -> GrayImage {
    let mut mask = GrayImage::new(glyph_data.width.max(1), glyph_data.height.max(1));

    for glyph in &glyph_data.glyphs {
        if let Some(outlined) = font.outline_glyph(glyph.clone()) {
            let bounds = outlined.px_bounds();

            outlined.draw(|x, y, v| {
                let (final_x, final_y) = (
                    bounds.min.x as i64 + x as i64,
                    bounds.min.y as i64 + y as i64,
                );
                if final_x < 0
                    || final_y < 0
                    || final_x >= mask.width() as i64
                    || final_y >= mask.height() as i64
                {
                    return;
                }
                let px = mask.get_pixel_mut(final_x as u32, final_y as u32);
                let coverage = (v.clamp(0.0, 1.0) * 255.0) as u8;
                *px = Luma([px.0[0].max(coverage)]);
            })
        }
    }

    mask
}

/// Renders `text` as a coverage mask, turned a quarter anticlockwise when
/// `rotated` so it reads bottom to top.
pub fn text_mask(text: &str, font: &FontVec, scale: PxScale, rotated: bool) -> GrayImage {
    let mask = glyphs_to_mask(&text_to_glyphs(text, font, scale), font);

    if rotated {
        imageops::rotate270(&mask)
    } else {
        mask
    }
}

/// Paints `pixel` through `mask` with its top left corner at (`x`, `y`).
pub fn blend_mask(buffer: &mut RgbaImage, mask: &GrayImage, x: i64, y: i64, pixel: Rgba<u8>) {
    for (mx, my, coverage) in mask.enumerate_pixels() {
        let (final_x, final_y) = (x + mx as i64, y + my as i64);
        if coverage.0[0] == 0
            || final_x < 0
            || final_y < 0
            || final_x >= buffer.width() as i64
            || final_y >= buffer.height() as i64
        {
            continue;
        }

        let v = coverage.0[0] as f32 / 255.0 * pixel.0[3] as f32 / 255.0;
        let px = buffer.get_pixel_mut(final_x as u32, final_y as u32);
        for channel in 0..3 {
            px.0[channel] =
                ((v * pixel.0[channel] as f32) + (1.0 - v) * px.0[channel] as f32) as u8;
        }
        px.0[3] = 0xFF;
    }
}

pub fn layout_paragraph<F, SF>(font: SF, position: Point, text: &str, target: &mut Vec<Glyph>)
where
    F: Font,
    SF: ScaleFont<F>,
{
    let v_advance = font.height() + font.line_gap();
    let mut caret = position + point(0.0, font.ascent());
    let mut last_glyph: Option<GlyphId> = None;
    for c in text.chars() {
        if c.is_control() {
            if c == '\n' {
                //进行换行
                caret = point(position.x, caret.y + v_advance);
            }
            continue;
        }

        let mut glyph = font.scaled_glyph(c);
        if let Some(previous) = last_glyph.take() {
            caret.x += font.kern(previous, glyph.id);
        }
        glyph.position = caret;
        last_glyph = Some(glyph.id);
        caret.x += font.h_advance(glyph.id);

        target.push(glyph);
    }
}
