use std::io::{self, IsTerminal, Stderr, Stdout, Write};

use termimad::{FmtText, MadSkin};

use crate::ports::ProgressionSurface;

const FALLBACK_WIDTH: usize = 80;

/// Terminal presentation: model output on `out`, status lines on `err`.
///
/// Keeping the model output alone on stdout lets it be piped untouched. On an
/// interactive terminal the output is rendered as markdown instead.
pub struct TerminalSurface<O: Write, E: Write> {
    out: O,
    err: E,
    markdown: Option<MarkdownView>,
}

struct MarkdownView {
    skin: MadSkin,
    width: usize,
}

impl TerminalSurface<Stdout, Stderr> {
    pub fn stdio() -> Self {
        let surface = Self::new(io::stdout(), io::stderr());
        if !io::stdout().is_terminal() {
            return surface;
        }
        let width = termimad::crossterm::terminal::size()
            .map(|(columns, _)| usize::from(columns))
            .unwrap_or(FALLBACK_WIDTH);
        surface.with_markdown(width)
    }
}

impl<O: Write, E: Write> TerminalSurface<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err, markdown: None }
    }

    /// Render results as markdown wrapped to `width` columns.
    pub fn with_markdown(mut self, width: usize) -> Self {
        self.markdown = Some(MarkdownView { skin: MadSkin::default(), width });
        self
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

// Write failures on a closed terminal are not recoverable here; they are dropped.
impl<O: Write, E: Write> ProgressionSurface for TerminalSurface<O, E> {
    fn begin_progress(&mut self, message: &str) {
        let _ = writeln!(self.err, "⏳ {}", message);
        let _ = self.err.flush();
    }

    fn end_progress(&mut self) {
        let _ = self.err.flush();
    }

    fn show_warning(&mut self, message: &str) {
        let _ = writeln!(self.err, "⚠️  {}", message);
    }

    fn show_error(&mut self, message: &str) {
        let _ = writeln!(self.err, "❌ {}", message);
    }

    fn show_result(&mut self, text: &str) {
        let _ = writeln!(self.err, "✅ Vertical progression analysis generated successfully!");
        match &self.markdown {
            Some(view) => {
                let _ = write!(self.out, "{}", FmtText::from(&view.skin, text, Some(view.width)));
            }
            None => {
                let _ = writeln!(self.out, "{}", text);
            }
        }
        let _ = self.out.flush();
    }
}
