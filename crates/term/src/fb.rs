//! Framebuffer and style types for terminal rendering.
//!
//! Besides plain character cells, the framebuffer can be addressed as a grid
//! of half-block pixels: every cell shows `'▀'`, its foreground color is the
//! upper pixel and its background color the lower one. That doubles the
//! vertical resolution and makes pixels roughly square on common fonts.

use crate::types::ColorRgb;

/// Glyph used for half-block pixel cells.
pub const HALF_BLOCK: char = '▀';

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<ColorRgb> for Rgb {
    fn from(value: ColorRgb) -> Self {
        let [r, g, b] = value.to_rgb8();
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn solid(color: Rgb) -> Self {
        Self {
            fg: color,
            bg: color,
            bold: false,
        }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::BLACK,
            bg: Rgb::WHITE,
            bold: false,
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    /// A half-block cell whose two pixels share one color.
    pub const fn pixels(color: Rgb) -> Self {
        Self {
            ch: HALF_BLOCK,
            style: CellStyle::solid(color),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Height of the half-block pixel grid (two pixels per row).
    pub fn pixel_height(&self) -> u32 {
        self.height as u32 * 2
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Color of the half-block pixel at `(x, py)`, if that cell is a pixel cell.
    pub fn pixel(&self, x: u16, py: u32) -> Option<Rgb> {
        let cell = self.get(x, u16::try_from(py / 2).ok()?)?;
        if cell.ch != HALF_BLOCK {
            return None;
        }
        Some(if py % 2 == 0 {
            cell.style.fg
        } else {
            cell.style.bg
        })
    }

    /// Paint one half-block pixel. Out-of-range pixels are ignored.
    pub fn paint_pixel(&mut self, x: u16, py: u32, color: Rgb) {
        let Ok(y) = u16::try_from(py / 2) else {
            return;
        };
        let Some(i) = self.idx(x, y) else {
            return;
        };

        let cell = &mut self.cells[i];
        if cell.ch != HALF_BLOCK {
            // Text cell: restart it as a pixel pair over its background.
            *cell = Cell::pixels(cell.style.bg);
        }
        if py % 2 == 0 {
            cell.style.fg = color;
        } else {
            cell.style.bg = color;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Write the decimal digits of `value` without allocating.
    ///
    /// Returns the number of columns used.
    pub fn put_u64(&mut self, x: u16, y: u16, value: u64, style: CellStyle) -> u16 {
        let mut digits = [0u8; 20];
        let mut n = value;
        let mut len = 0usize;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }

        for (i, d) in digits[..len].iter().rev().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, *d as char, style);
        }
        len as u16
    }
}

/// Number of decimal digits in `value`.
pub fn decimal_len(value: u64) -> u16 {
    let mut n = value;
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_pixel_splits_cell_halves() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.clear(Cell::pixels(Rgb::WHITE));

        let red = Rgb::new(255, 0, 0);
        let blue = Rgb::new(0, 0, 255);
        fb.paint_pixel(1, 2, red);
        fb.paint_pixel(1, 3, blue);

        let cell = fb.get(1, 1).unwrap();
        assert_eq!(cell.ch, HALF_BLOCK);
        assert_eq!(cell.style.fg, red);
        assert_eq!(cell.style.bg, blue);
        assert_eq!(fb.pixel(1, 2), Some(red));
        assert_eq!(fb.pixel(1, 3), Some(blue));
        assert_eq!(fb.pixel(0, 0), Some(Rgb::WHITE));
    }

    #[test]
    fn paint_pixel_ignores_out_of_range() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.clear(Cell::pixels(Rgb::WHITE));
        let before = fb.clone();

        fb.paint_pixel(2, 0, Rgb::BLACK);
        fb.paint_pixel(0, 2, Rgb::BLACK);
        fb.paint_pixel(0, u32::MAX, Rgb::BLACK);

        assert_eq!(fb, before);
        assert_eq!(fb.pixel_height(), 2);
    }

    #[test]
    fn paint_pixel_over_text_keeps_text_background() {
        let mut fb = FrameBuffer::new(1, 1);
        fb.put_char(0, 0, 'S', CellStyle::default());

        fb.paint_pixel(0, 1, Rgb::new(1, 2, 3));

        let cell = fb.get(0, 0).unwrap();
        assert_eq!(cell.ch, HALF_BLOCK);
        assert_eq!(cell.style.fg, Rgb::WHITE);
        assert_eq!(cell.style.bg, Rgb::new(1, 2, 3));
    }

    #[test]
    fn put_u64_writes_digits() {
        let mut fb = FrameBuffer::new(24, 1);
        let style = CellStyle::default();

        assert_eq!(fb.put_u64(0, 0, 0, style), 1);
        assert_eq!(fb.get(0, 0).unwrap().ch, '0');

        let used = fb.put_u64(2, 0, u64::MAX, style);
        assert_eq!(used, 20);
        let text: String = (2..22).map(|x| fb.get(x, 0).unwrap().ch).collect();
        assert_eq!(text, u64::MAX.to_string());
    }

    #[test]
    fn decimal_len_counts_digits() {
        assert_eq!(decimal_len(0), 1);
        assert_eq!(decimal_len(9), 1);
        assert_eq!(decimal_len(10), 2);
        assert_eq!(decimal_len(1234), 4);
        assert_eq!(decimal_len(u64::MAX), 20);
    }

    #[test]
    fn color_conversion_quantizes() {
        assert_eq!(Rgb::from(ColorRgb::new(1.0, 0.0, 0.5)), Rgb::new(255, 0, 128));
    }
}
