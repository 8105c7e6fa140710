use ab_glyph::{FontVec, PxScale};
use image::{GrayImage, Luma, Rgba, RgbaImage};
use nanorand::{Rng, WyRand};
use palette::{Hsl, IntoColor, Pixel, Srgb};
use tracing::debug;

use crate::{
    sat::{Point, Rect, SummedAreaTable},
    text, FrequencyTable,
};

pub struct Word<'a> {
    pub text: &'a str,
    pub font_size: PxScale,
    pub mask: GrayImage,
    pub rotated: bool,
    pub position: Point,
    pub frequency: usize,
    pub index: usize,
}

pub struct WordCloud {
    background_color: Rgba<u8>,
    min_font_size: f32,
    max_font_size: f32,
    font_step: f32,
    word_margin: u32,
    word_rotate_chance: f64,
    rng_seed: Option<u64>,
}

impl Default for WordCloud {
    fn default() -> Self {
        WordCloud {
            background_color: Rgba([255, 255, 255, 255]),
            min_font_size: 20.0,
            max_font_size: 100.0,
            font_step: 2.0,
            word_margin: 4,
            word_rotate_chance: 0.10,
            rng_seed: None,
        }
    }
}

impl WordCloud {
    pub fn with_background_color(mut self, value: Rgba<u8>) -> Self {
        self.background_color = value;
        self
    }

    /// Frequencies map linearly onto `min..=max` pixels.
    pub fn with_font_size_range(mut self, min: f32, max: f32) -> Self {
        self.min_font_size = min.max(1.0);
        self.max_font_size = max.max(self.min_font_size);
        self
    }

    pub fn with_word_margin(mut self, value: u32) -> Self {
        self.word_margin = value;
        self
    }

    pub fn with_word_rotate_chance(mut self, value: f64) -> Self {
        self.word_rotate_chance = value.clamp(0.0, 1.0);
        self
    }

    pub fn with_rng_seed(mut self, value: Option<u64>) -> Self {
        self.rng_seed = value;
        self
    }

    fn font_size_for(&self, frequency: usize, min_freq: usize, max_freq: usize) -> f32 {
        if max_freq == min_freq {
            return self.max_font_size;
        }

        let ratio = (frequency - min_freq) as f32 / (max_freq - min_freq) as f32;
        self.min_font_size + ratio * (self.max_font_size - self.min_font_size)
    }

    pub fn generate(
        &self,
        table: &FrequencyTable,
        font: &FontVec,
        width: u32,
        height: u32,
    ) -> RgbaImage {
        self.generate_with_color_func(table, font, width, height, random_color_rgba)
    }

    pub fn generate_with_color_func(
        &self,
        table: &FrequencyTable,
        font: &FontVec,
        width: u32,
        height: u32,
        color_func: fn(&Word, &mut WyRand) -> Rgba<u8>,
    ) -> RgbaImage {
        let mut rng = match self.rng_seed {
            Some(seed) => WyRand::new_seed(seed),
            None => WyRand::new(),
        };

        let word_positions = self.layout(table, font, width, height, &mut rng);

        let mut final_image_buffer = RgbaImage::from_pixel(width, height, self.background_color);
        for word in &word_positions {
            let col = color_func(word, &mut rng);
            text::blend_mask(
                &mut final_image_buffer,
                &word.mask,
                (word.position.x + self.word_margin / 2) as i64,
                (word.position.y + self.word_margin / 2) as i64,
                col,
            );
        }

        final_image_buffer
    }

    /// Places the words largest first, shrinking a word that does not fit
    /// until it reaches the minimum font size.
    fn layout<'a>(
        &self,
        table: &'a FrequencyTable,
        font: &FontVec,
        width: u32,
        height: u32,
        rng: &mut WyRand,
    ) -> Vec<Word<'a>> {
        let (min_freq, max_freq) = (table.min_frequency(), table.max_frequency());

        let mut occupancy = GrayImage::new(width, height);
        let mut summed_area_table = SummedAreaTable::from_mask(&occupancy);
        let mut final_words = Vec::with_capacity(table.len());

        for (index, row) in table.rows.iter().rev().enumerate() {
            let rotated = (rng.generate_range(0u32..1000) as f64) < self.word_rotate_chance * 1000.0;
            let mut font_size = self.font_size_for(row.frequency, min_freq, max_freq);

            let placed = loop {
                if font_size < self.min_font_size {
                    break None;
                }

                let scale = PxScale::from(font_size);
                let mask = text::text_mask(&row.word, font, scale, rotated);
                let rect = Rect {
                    width: mask.width() + self.word_margin,
                    height: mask.height() + self.word_margin,
                };

                if let Some(position) = summed_area_table.find_space_for_rect(&rect, rng) {
                    break Some((scale, mask, rect, position));
                }

                font_size -= self.font_step;
            };

            let Some((font_size, mask, rect, position)) = placed else {
                debug!(word = %row.word, "no room left in word cloud");
                continue;
            };

            for y in position.y..position.y + rect.height {
                for x in position.x..position.x + rect.width {
                    occupancy.put_pixel(x, y, Luma([255]));
                }
            }
            summed_area_table.update(&occupancy, position.y);

            final_words.push(Word {
                text: &row.word,
                font_size,
                mask,
                rotated,
                position,
                frequency: row.frequency,
                index,
            });
        }

        final_words
    }
}

fn random_color_rgba(_: &Word, rng: &mut WyRand) -> Rgba<u8> {
    let hue: u16 = rng.generate_range(0..360);

    let col = Hsl::new(hue as f32, 0.8, 0.45);
    let rgb: Srgb = col.into_color();

    let raw: [u8; 3] = rgb.into_format().into_raw();

    Rgba([raw[0], raw[1], raw[2], 255])
}
