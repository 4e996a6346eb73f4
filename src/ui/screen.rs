//! Display adapter: renders [`DisplayView`] snapshots.

use std::io::{self, Write};

use crate::view::DisplayView;

/// Something that can show the calculator display.
pub trait Screen {
    fn render(&mut self, view: &DisplayView) -> io::Result<()>;
}

/// Output style for [`TerminalScreen`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScreenFormat {
    /// `<text>  [<label>]`, one line per render.
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

/// Line-oriented screen writing to any `io::Write`.
pub struct TerminalScreen<W: Write> {
    out: W,
    format: ScreenFormat,
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W, format: ScreenFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn render(&mut self, view: &DisplayView) -> io::Result<()> {
        match self.format {
            ScreenFormat::Plain => {
                writeln!(self.out, "{}  [{}]", view.text, view.clear_label.as_str())?
            }
            ScreenFormat::Json => {
                serde_json::to_writer(&mut self.out, view)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()
    }
}
