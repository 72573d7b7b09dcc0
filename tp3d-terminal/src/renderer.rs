/// ASCII cell surface: the terminal realization of the core's drawing
/// surface, rasterizing filled triangle paths into characters
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use tp3d_core::Surface;

/// Character luminosity ramp for shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// A character-cell drawing surface.
///
/// Implements the path primitives the frame pipeline draws through:
/// a path of pixel-space points is traced, then `fill` rasterizes it as
/// a triangle and `stroke` redraws its edges. Fill and stroke colors are
/// `#rrggbb` grays mapped onto the luminosity ramp.
pub struct CellSurface {
    width: usize,
    height: usize,
    cells: Vec<char>,
    path: Vec<(f32, f32)>,
    closed: bool,
    fill_char: char,
    stroke_char: char,
}

impl CellSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
            path: Vec::with_capacity(3),
            closed: false,
            fill_char: ' ',
            stroke_char: ' ',
        }
    }

    fn set_cell(&mut self, x: i32, y: i32, c: char) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = c;
    }

    fn draw_edge(&mut self, from: (f32, f32), to: (f32, f32), c: char) {
        let steps = ((to.0 - from.0).abs().max((to.1 - from.1).abs()).ceil() as usize).max(1);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = from.0 + (to.0 - from.0) * t;
            let y = from.1 + (to.1 - from.1) * t;
            self.set_cell(x.round() as i32, y.round() as i32, c);
        }
    }

    fn fill_triangle(&mut self, v0: (f32, f32), v1: (f32, f32), v2: (f32, f32), c: char) {
        let min_x = (v0.0.min(v1.0).min(v2.0).floor() as i32).max(0);
        let max_x = (v0.0.max(v1.0).max(v2.0).ceil() as i32).min(self.width as i32 - 1);
        let min_y = (v0.1.min(v1.1).min(v2.1).floor() as i32).max(0);
        let max_y = (v0.1.max(v1.1).max(v2.1).ceil() as i32).min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = (x as f32 + 0.5, y as f32 + 0.5);
                if let Some((w0, w1, w2)) = barycentric(v0, v1, v2, p) {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        self.set_cell(x, y, c);
                    }
                }
            }
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> char {
        self.cells[y * self.width + x]
    }

    /// Queue the whole surface as styled terminal output
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = self.cells[y * self.width + x];
                let color = match c {
                    ' ' | '.' | ':' => Color::DarkGrey,
                    '-' | '=' => Color::Grey,
                    '+' | '*' => Color::White,
                    '#' | '%' | '@' => Color::Cyan,
                    _ => Color::White,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl Surface for CellSurface {
    fn width(&self) -> f32 {
        self.width as f32
    }

    fn height(&self) -> f32 {
        self.height as f32
    }

    fn clear(&mut self) {
        self.cells.fill(' ');
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.closed = false;
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.path.clear();
        self.path.push((x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.push((x, y));
    }

    fn set_fill(&mut self, color: &str) {
        self.fill_char = ramp_char(color, 0);
    }

    fn set_stroke(&mut self, color: &str) {
        // Edges stay visible even for black strokes.
        self.stroke_char = ramp_char(color, 1);
    }

    fn close_path(&mut self) {
        self.closed = true;
    }

    fn fill(&mut self) {
        if self.path.len() >= 3 {
            let (v0, v1, v2) = (self.path[0], self.path[1], self.path[2]);
            self.fill_triangle(v0, v1, v2, self.fill_char);
        }
    }

    fn stroke(&mut self) {
        if self.path.len() < 2 {
            return;
        }
        let stroke_char = self.stroke_char;
        for i in 0..self.path.len() - 1 {
            self.draw_edge(self.path[i], self.path[i + 1], stroke_char);
        }
        if self.closed {
            let (first, last) = (self.path[0], self.path[self.path.len() - 1]);
            self.draw_edge(last, first, stroke_char);
        }
    }
}

/// Map a `#rrggbb` gray onto the luminosity ramp; unparsable colors fall
/// back to the floor index
fn ramp_char(color: &str, floor: usize) -> char {
    let gray = color
        .strip_prefix('#')
        .and_then(|hex| hex.get(0..2))
        .and_then(|channel| u8::from_str_radix(channel, 16).ok())
        .unwrap_or(0);
    let index = (gray as usize * (LUMINOSITY_RAMP.len() - 1)) / 255;
    LUMINOSITY_RAMP[index.max(floor)]
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_cells(surface: &CellSurface) -> usize {
        (0..20)
            .flat_map(|y| (0..20).map(move |x| (x, y)))
            .filter(|&(x, y)| surface.cell(x, y) != ' ')
            .count()
    }

    #[test]
    fn test_fill_covers_interior() {
        let mut surface = CellSurface::new(20, 20);
        surface.begin_path();
        surface.move_to(2.0, 2.0);
        surface.line_to(17.0, 2.0);
        surface.line_to(2.0, 17.0);
        surface.set_fill("#ffffff");
        surface.close_path();
        surface.fill();

        assert_eq!(surface.cell(5, 5), '@');
        assert_eq!(surface.cell(19, 19), ' ');
        assert!(filled_cells(&surface) > 20);
    }

    #[test]
    fn test_clear_resets_cells() {
        let mut surface = CellSurface::new(20, 20);
        surface.begin_path();
        surface.move_to(2.0, 2.0);
        surface.line_to(17.0, 2.0);
        surface.line_to(2.0, 17.0);
        surface.set_fill("#808080");
        surface.close_path();
        surface.fill();
        surface.clear();

        assert_eq!(filled_cells(&surface), 0);
    }

    #[test]
    fn test_black_stroke_is_still_visible() {
        let mut surface = CellSurface::new(20, 20);
        surface.begin_path();
        surface.move_to(1.0, 1.0);
        surface.line_to(18.0, 1.0);
        surface.line_to(1.0, 18.0);
        surface.set_stroke("#000000");
        surface.close_path();
        surface.stroke();

        assert_eq!(surface.cell(10, 1), '.');
        // close_path joins the last point back to the first.
        assert_ne!(surface.cell(1, 10), ' ');
    }

    #[test]
    fn test_out_of_bounds_points_are_clipped_to_surface() {
        let mut surface = CellSurface::new(20, 20);
        surface.begin_path();
        surface.move_to(-50.0, -50.0);
        surface.line_to(70.0, -50.0);
        surface.line_to(-50.0, 70.0);
        surface.set_fill("#ffffff");
        surface.close_path();
        surface.fill();
        // No panic, and the on-surface portion is painted.
        assert!(filled_cells(&surface) > 0);
    }

    #[test]
    fn test_ramp_char_maps_gray_levels() {
        assert_eq!(ramp_char("#000000", 0), ' ');
        assert_eq!(ramp_char("#ffffff", 0), '@');
        assert_eq!(ramp_char("not-a-color", 0), ' ');
        assert_eq!(ramp_char("#000000", 1), '.');
    }
}
