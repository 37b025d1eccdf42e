//! Dirty-row frame differencing.
//!
//! Each row is hashed (FNV-1a over glyph code points and color identities).
//! A row is re-emitted only when its hash changed or the state was
//! invalidated; unchanged frames produce no output at all.

use anyhow::Result;
use crossterm::{
    cursor,
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::FrameBuffer;
use crate::types::{Color, ColorToken, NamedColor};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// What one [`FrameDiffer::diff_into`] call emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffSummary {
    pub dirty_rows: u16,
    pub bytes: usize,
}

/// Previous-frame copy, per-row hashes and a validity flag.
#[derive(Debug, Clone)]
pub struct FrameDiffer {
    width: u16,
    height: u16,
    prev_glyphs: Vec<char>,
    prev_colors: Vec<Option<ColorToken>>,
    row_hashes: Vec<u64>,
    valid: bool,
}

impl FrameDiffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            prev_glyphs: vec![' '; len],
            prev_colors: vec![None; len],
            row_hashes: vec![0; height as usize],
            valid: false,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Force the next diff to redraw every row.
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Reinitialize for new dimensions. Always invalidates, even if the size is unchanged.
    pub fn resize(&mut self, width: u16, height: u16) {
        let len = (width as usize) * (height as usize);
        self.width = width;
        self.height = height;
        self.prev_glyphs.clear();
        self.prev_glyphs.resize(len, ' ');
        self.prev_colors.clear();
        self.prev_colors.resize(len, None);
        self.row_hashes.clear();
        self.row_hashes.resize(height as usize, 0);
        self.valid = false;
    }

    /// Glyph last emitted at `(x, y)`.
    pub fn previous_glyph(&self, x: u16, y: u16) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.prev_glyphs[y as usize * self.width as usize + x as usize])
    }

    /// Appends escape-coded updates for every dirty row of `fb` to `out`.
    pub fn diff_into(&mut self, fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<DiffSummary> {
        if fb.width() != self.width || fb.height() != self.height {
            tracing::debug!(
                width = fb.width(),
                height = fb.height(),
                "frame size changed, reinitializing diff state"
            );
            self.resize(fb.width(), fb.height());
        }

        let start_len = out.len();
        let w = self.width as usize;
        let mut dirty_rows = 0u16;

        for y in 0..self.height {
            let (glyphs, colors) = fb.row(y);
            let hash = hash_row(glyphs, colors);
            let yi = y as usize;

            if self.valid && hash == self.row_hashes[yi] {
                continue;
            }

            let start = yi * w;
            self.prev_glyphs[start..start + w].copy_from_slice(glyphs);
            self.prev_colors[start..start + w].copy_from_slice(colors);
            self.row_hashes[yi] = hash;
            dirty_rows += 1;

            encode_row_into(y, glyphs, colors, out)?;
        }

        self.valid = true;

        let summary = DiffSummary {
            dirty_rows,
            bytes: out.len() - start_len,
        };
        if dirty_rows > 0 {
            tracing::trace!(dirty_rows, bytes = summary.bytes, "frame diff");
        }
        Ok(summary)
    }
}

/// Order-sensitive row hash over glyphs and structured colors.
pub fn hash_row(glyphs: &[char], colors: &[Option<ColorToken>]) -> u64 {
    let mut h = FNV_OFFSET;
    for (&ch, color) in glyphs.iter().zip(colors) {
        h ^= ch as u64;
        h = h.wrapping_mul(FNV_PRIME);
        h ^= color.map_or(0, ColorToken::hash_key);
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

/// Encodes one full row: cursor move, coalesced color switches, cells,
/// clear-to-end-of-line, reset.
fn encode_row_into(
    y: u16,
    glyphs: &[char],
    colors: &[Option<ColorToken>],
    out: &mut Vec<u8>,
) -> Result<()> {
    out.queue(cursor::MoveTo(0, y))?;

    // Outer `None` = nothing emitted yet on this row.
    let mut current: Option<Option<ColorToken>> = None;
    for (&ch, &color) in glyphs.iter().zip(colors) {
        if current != Some(color) {
            apply_color_into(out, color)?;
            current = Some(color);
        }
        out.queue(Print(if ch == '\0' { ' ' } else { ch }))?;
    }

    out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
    out.queue(ResetColor)?;
    Ok(())
}

fn apply_color_into(out: &mut Vec<u8>, color: Option<ColorToken>) -> Result<()> {
    match color {
        Some(token) => {
            out.queue(SetForegroundColor(term_color(token.fg)))?;
            let bg = token.bg.map_or(style::Color::Reset, term_color);
            out.queue(SetBackgroundColor(bg))?;
        }
        None => {
            out.queue(ResetColor)?;
        }
    }
    Ok(())
}

/// Maps a structured color onto crossterm's color model; the role (foreground
/// or background) is chosen by the command it is wrapped in.
pub fn term_color(color: Color) -> style::Color {
    match color {
        Color::Rgb(rgb) => style::Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        },
        Color::Indexed(n) => style::Color::AnsiValue(n),
        Color::Named(named) => match named {
            NamedColor::Black => style::Color::Black,
            NamedColor::Red => style::Color::DarkRed,
            NamedColor::Green => style::Color::DarkGreen,
            NamedColor::Yellow => style::Color::DarkYellow,
            NamedColor::Blue => style::Color::DarkBlue,
            NamedColor::Magenta => style::Color::DarkMagenta,
            NamedColor::Cyan => style::Color::DarkCyan,
            NamedColor::White => style::Color::Grey,
            NamedColor::BrightBlack => style::Color::DarkGrey,
            NamedColor::BrightRed => style::Color::Red,
            NamedColor::BrightGreen => style::Color::Green,
            NamedColor::BrightYellow => style::Color::Yellow,
            NamedColor::BrightBlue => style::Color::Blue,
            NamedColor::BrightMagenta => style::Color::Magenta,
            NamedColor::BrightCyan => style::Color::Cyan,
            NamedColor::BrightWhite => style::Color::White,
        },
    }
}
