use plotters::style::RGBColor;

pub const TEXT: RGBColor = RGBColor(0x33, 0x33, 0x33);
pub const GRID: RGBColor = RGBColor(0xE0, 0xE6, 0xF1);
pub const AXIS: RGBColor = RGBColor(0x6E, 0x70, 0x79);

/// Series colours, the usual echarts ones.
pub const PALETTE: [RGBColor; 9] = [
    RGBColor(0x54, 0x70, 0xC6),
    RGBColor(0x91, 0xCC, 0x75),
    RGBColor(0xFA, 0xC8, 0x58),
    RGBColor(0xEE, 0x66, 0x66),
    RGBColor(0x73, 0xC0, 0xDE),
    RGBColor(0x3B, 0xA2, 0x72),
    RGBColor(0xFC, 0x84, 0x52),
    RGBColor(0x9A, 0x60, 0xB4),
    RGBColor(0xEA, 0x7C, 0xCC),
];

pub const TITLE_SIZE: f64 = 20.0;
pub const LABEL_SIZE: f64 = 13.0;
