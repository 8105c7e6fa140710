use image::GrayImage;
use nanorand::{Rng, WyRand};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// Summed area table over an occupancy mask, with a zero row and column in
/// front so every lookup stays in bounds.
///
/// https://blog.demofox.org/2018/04/16/prefix-sums-and-summed-area-tables/
pub struct SummedAreaTable {
    table: Vec<u32>,
    width: u32,
    height: u32,
}

impl SummedAreaTable {
    pub fn from_mask(mask: &GrayImage) -> Self {
        let (width, height) = mask.dimensions();
        let mut table = Self {
            table: vec![0; (width as usize + 1) * (height as usize + 1)],
            width,
            height,
        };
        table.update(mask, 0);
        table
    }

    /// Recomputes the rows from `start_row` down after the mask changed there.
    pub fn update(&mut self, mask: &GrayImage, start_row: u32) {
        let stride = self.width as usize + 1;

        for y in start_row..self.height {
            let mut row_sum = 0;
            for x in 0..self.width {
                row_sum += (mask.get_pixel(x, y).0[0] > 0) as u32;
                let above = self.table[y as usize * stride + x as usize + 1];
                self.table[(y as usize + 1) * stride + x as usize + 1] = above + row_sum;
            }
        }
    }

    pub fn region_is_empty(&self, x: u32, y: u32, rect: &Rect) -> bool {
        let stride = self.width as usize + 1;
        let (x, y) = (x as usize, y as usize);
        let (w, h) = (rect.width as usize, rect.height as usize);

        let tl = self.table[y * stride + x];
        let tr = self.table[y * stride + x + w];
        let bl = self.table[(y + h) * stride + x];
        let br = self.table[(y + h) * stride + x + w];

        tl as i64 + br as i64 - tr as i64 - bl as i64 == 0
    }

    /// 在图片寻找位置写字
    ///
    /// Picks uniformly among every free position (reservoir sampling).
    pub fn find_space_for_rect(&self, rect: &Rect, rng: &mut WyRand) -> Option<Point> {
        if rect.width == 0 || rect.height == 0 || rect.width > self.width || rect.height > self.height
        {
            return None;
        }

        let max_x = self.width - rect.width;
        let max_y = self.height - rect.height;

        let mut available_points: u32 = 0;
        let mut random_point = None;

        for y in 0..=max_y {
            for x in 0..=max_x {
                if self.region_is_empty(x, y, rect) {
                    let random_num = rng.generate_range(0..=available_points);
                    if random_num == available_points {
                        random_point = Some(Point { x, y });
                    }
                    available_points += 1;
                }
            }
        }

        random_point
    }
}
