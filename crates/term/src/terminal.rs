//! TerminalSession: owns the real terminal while the viewer runs.
//!
//! Frames are encoded into an internal byte buffer first and written with a
//! single `write_all` + `flush`, so a frame never reaches the terminal half
//! finished.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::diff::{DiffSummary, FrameDiffer};
use crate::fb::FrameBuffer;

pub struct TerminalSession {
    stdout: io::Stdout,
    buf: Vec<u8>,
    active: bool,
}

impl TerminalSession {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(256 * 1024),
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Raw mode, alternate screen, hidden cursor, no line wrap.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Current terminal size in cells, at least 1x1.
    pub fn size(&self) -> Result<(u16, u16)> {
        let (w, h) = terminal::size()?;
        Ok((w.max(1), h.max(1)))
    }

    /// Wipe the screen; used after a resize together with [`FrameDiffer::invalidate`].
    pub fn clear(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()
    }

    /// Diff `fb` against the previous frame and write the dirty rows.
    ///
    /// Nothing is written when no row changed.
    pub fn present(&mut self, differ: &mut FrameDiffer, fb: &FrameBuffer) -> Result<DiffSummary> {
        self.buf.clear();
        let summary = differ.diff_into(fb, &mut self.buf)?;
        if !self.buf.is_empty() {
            self.flush_buf()?;
        }
        Ok(summary)
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            if let Err(err) = self.exit() {
                tracing::warn!(error = %err, "failed to restore terminal");
            }
        }
    }
}
