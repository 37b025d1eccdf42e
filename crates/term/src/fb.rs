//! Frame buffer: co-indexed glyph and color grids.

use crate::types::ColorToken;

/// One cell as read back from the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    /// `None` means "no explicit color" (terminal default).
    pub color: Option<ColorToken>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            color: None,
        }
    }
}

/// Glyph grid plus color grid of identical dimensions, stored row-major.
///
/// Both grids are always resized together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<char>,
    colors: Vec<Option<ColorToken>>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            glyphs: vec![' '; len],
            colors: vec![None; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize both grids. Returns `true` when the dimensions changed.
    ///
    /// This preserves the underlying allocations when possible; contents are
    /// cleared on change.
    pub fn resize(&mut self, width: u16, height: u16) -> bool {
        if self.width == width && self.height == height {
            return false;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.glyphs.clear();
        self.glyphs.resize(len, ' ');
        self.colors.clear();
        self.colors.resize(len, None);
        true
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn colors(&self) -> &[Option<ColorToken>] {
        &self.colors
    }

    /// Mutable access to both grids at once, for row-parallel writers.
    pub fn grids_mut(&mut self) -> (&mut [char], &mut [Option<ColorToken>]) {
        (&mut self.glyphs, &mut self.colors)
    }

    /// One row of glyphs and colors. Empty slices for an out-of-range row.
    pub fn row(&self, y: u16) -> (&[char], &[Option<ColorToken>]) {
        if y >= self.height {
            return (&[], &[]);
        }
        let w = self.width as usize;
        let start = y as usize * w;
        (
            &self.glyphs[start..start + w],
            &self.colors[start..start + w],
        )
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| Cell {
            ch: self.glyphs[i],
            color: self.colors[i],
        })
    }

    pub fn set(&mut self, x: u16, y: u16, ch: char, color: Option<ColorToken>) {
        if let Some(i) = self.idx(x, y) {
            self.glyphs[i] = ch;
            self.colors[i] = color;
        }
    }

    /// Makes `self` an exact copy of `other`, reusing the existing allocations.
    pub fn copy_from(&mut self, other: &FrameBuffer) {
        self.width = other.width;
        self.height = other.height;
        self.glyphs.clone_from(&other.glyphs);
        self.colors.clone_from(&other.colors);
    }

    /// Spaces everywhere, no colors.
    pub fn clear(&mut self) {
        self.glyphs.fill(' ');
        self.colors.fill(None);
    }

    /// Writes `text` starting at `(x, y)`, clipped at the right edge.
    ///
    /// `color: None` keeps whatever color the cells already have.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, color: Option<ColorToken>) {
        let mut cx = x;
        for ch in text.chars() {
            let Some(i) = self.idx(cx, y) else {
                break;
            };
            self.glyphs[i] = ch;
            if color.is_some() {
                self.colors[i] = color;
            }
            cx += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, NamedColor};

    #[test]
    fn resize_keeps_grids_in_step() {
        let mut fb = FrameBuffer::new(4, 2);
        assert!(!fb.resize(4, 2));
        assert!(fb.resize(10, 3));
        assert_eq!(fb.glyphs().len(), 30);
        assert_eq!(fb.colors().len(), 30);
        assert!(fb.resize(0, 0));
        assert!(fb.glyphs().is_empty());
        assert!(fb.colors().is_empty());
    }

    #[test]
    fn put_str_clips_at_right_edge() {
        let red = ColorToken::foreground(Color::Named(NamedColor::Red));
        let mut fb = FrameBuffer::new(5, 1);
        fb.put_str(3, 0, "abc", Some(red));
        assert_eq!(fb.get(3, 0).unwrap().ch, 'a');
        assert_eq!(fb.get(4, 0).unwrap().ch, 'b');
        assert_eq!(fb.get(4, 0).unwrap().color, Some(red));
        assert_eq!(fb.get(2, 0).unwrap(), Cell::default());
    }

    #[test]
    fn put_str_without_color_preserves_existing() {
        let red = ColorToken::foreground(Color::Named(NamedColor::Red));
        let mut fb = FrameBuffer::new(3, 1);
        fb.set(0, 0, 'x', Some(red));
        fb.put_str(0, 0, "y", None);
        assert_eq!(fb.get(0, 0).unwrap(), Cell { ch: 'y', color: Some(red) });
    }

    #[test]
    fn copy_from_matches_source_after_resize() {
        let red = ColorToken::foreground(Color::Named(NamedColor::Red));
        let mut src = FrameBuffer::new(4, 3);
        src.set(3, 2, 'q', Some(red));
        let mut dst = FrameBuffer::new(2, 2);
        dst.set(0, 0, 'x', None);
        dst.copy_from(&src);
        assert_eq!(dst, src);
    }

    #[test]
    fn row_slices_match_cells() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set(1, 1, 'z', None);
        let (glyphs, colors) = fb.row(1);
        assert_eq!(glyphs, &[' ', 'z', ' ']);
        assert_eq!(colors.len(), 3);
        assert!(fb.row(2).0.is_empty());
    }
}
