//! Drawing a board onto a rectangle-filling surface.
//!
//! The renderer is host-agnostic: it only needs something that can clear
//! itself and fill axis-aligned rectangles with a CSS color. The browser
//! crate implements [`Surface`] for a 2D canvas context; tests use a
//! recording surface.

use std::fmt;

use crate::board::{Board, Dimensions};
use crate::cell::Position;

/// Axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// Something the renderer can paint on.
pub trait Surface {
    /// Erase the whole surface.
    fn clear(&mut self);

    /// Fill `rect` with `css_color`.
    fn fill_rect(&mut self, rect: Rect, css_color: &str);
}

/// 24-bit color, displayed as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Color of a live cell at `pos`: red ramps across columns, green down
/// rows, blue stays fixed.
pub fn alive_color(pos: Position, dims: Dimensions) -> Rgb {
    Rgb {
        r: ramp(pos.col, dims.cols),
        g: ramp(pos.row, dims.rows),
        b: 200,
    }
}

/// Map `index` in `0..len` onto `55..=255`.
fn ramp(index: usize, len: usize) -> u8 {
    let step = index
        .saturating_mul(200)
        .checked_div(len.saturating_sub(1).max(1))
        .unwrap_or(0)
        .min(200);
    u8::try_from(step.saturating_add(55)).unwrap_or(u8::MAX)
}

/// Paints every cell of a board as a square of `cell_size` pixels.
#[derive(Debug, Clone)]
pub struct Renderer {
    cell_size: u32,
    background: String,
}

impl Renderer {
    /// Create a renderer for square cells of `cell_size` pixels, painting
    /// dead cells with the CSS color `background`.
    pub const fn new(cell_size: u32, background: String) -> Self {
        Self {
            cell_size,
            background,
        }
    }

    /// Side of one cell in pixels.
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Screen rectangle covered by the cell at `pos`.
    pub fn cell_rect(&self, pos: Position) -> Rect {
        let size = f64::from(self.cell_size);
        Rect {
            x: pixel(pos.col, self.cell_size),
            y: pixel(pos.row, self.cell_size),
            width: size,
            height: size,
        }
    }

    /// Paint every cell of `board` onto `surface`.
    pub fn draw<S: Surface + ?Sized>(&self, board: &Board, surface: &mut S) {
        let dims = board.dimensions();
        for cell in board.cells() {
            let rect = self.cell_rect(cell.position());
            if cell.is_alive() {
                let color = alive_color(cell.position(), dims).to_string();
                surface.fill_rect(rect, &color);
            } else {
                surface.fill_rect(rect, &self.background);
            }
        }
    }
}

fn pixel(index: usize, cell_size: u32) -> f64 {
    f64::from(u32::try_from(index).unwrap_or(u32::MAX)) * f64::from(cell_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recording {
        clears: usize,
        fills: Vec<(Rect, String)>,
    }

    impl Surface for Recording {
        fn clear(&mut self) {
            self.clears += 1;
        }

        fn fill_rect(&mut self, rect: Rect, css_color: &str) {
            self.fills.push((rect, css_color.to_owned()));
        }
    }

    #[test]
    fn one_rect_per_cell() {
        let mut board = Board::dead(Dimensions::new(3, 4));
        board.set_alive(Position::new(1, 2), true);
        let renderer = Renderer::new(5, "#111111".to_owned());
        let mut surface = Recording::default();
        renderer.draw(&board, &mut surface);

        assert_eq!(surface.fills.len(), 12);
        assert_eq!(surface.clears, 0);
        let dead = surface.fills.iter().filter(|(_, c)| c == "#111111").count();
        assert_eq!(dead, 11);

        let (rect, color) = &surface.fills[6];
        assert_eq!(
            *rect,
            Rect {
                x: 10.0,
                y: 5.0,
                width: 5.0,
                height: 5.0
            }
        );
        assert_eq!(color, &alive_color(Position::new(1, 2), board.dimensions()).to_string());
    }

    #[test]
    fn color_varies_with_position() {
        let dims = Dimensions::new(10, 10);
        let top_left = alive_color(Position::new(0, 0), dims);
        let bottom_right = alive_color(Position::new(9, 9), dims);
        assert_eq!(top_left, Rgb { r: 55, g: 55, b: 200 });
        assert_eq!(bottom_right, Rgb { r: 255, g: 255, b: 200 });
    }

    #[test]
    fn color_single_column_board() {
        let dims = Dimensions::new(1, 1);
        assert_eq!(alive_color(Position::new(0, 0), dims).r, 55);
    }

    #[test]
    fn rgb_displays_as_hex() {
        assert_eq!(Rgb { r: 255, g: 8, b: 0 }.to_string(), "#ff0800");
    }
}
