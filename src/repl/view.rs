//! Form rendering
//!
//! Renders the whole form as a full-frame redraw over an injected
//! `io::Write` sink. Production hands in stdout and lets the renderer own
//! terminal setup and teardown; tests hand in a buffer and inspect the
//! rendered text directly.

use anyhow::Result;
use crossterm::{
    cursor::{MoveTo, Show},
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::Write;

use crate::form::filter::FilterTag;
use crate::form::model::FormModel;

const INPUT_PROMPT: &str = "API Input> ";

/// Renders the form state over an injected write sink
pub struct FormRenderer<W: Write> {
    sink: W,
    /// Whether this renderer owns the terminal (raw mode, alternate screen)
    owns_terminal: bool,
}

impl<W: Write> FormRenderer<W> {
    /// Create a renderer that owns the terminal attached to the sink
    pub fn terminal(sink: W) -> Self {
        Self {
            sink,
            owns_terminal: true,
        }
    }

    /// Create a renderer over a plain sink, for headless use
    pub fn with_sink(sink: W) -> Self {
        Self {
            sink,
            owns_terminal: false,
        }
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Prepare the terminal for rendering
    pub fn initialize(&mut self) -> Result<()> {
        if self.owns_terminal {
            enable_raw_mode()?;
            queue!(self.sink, EnterAlternateScreen)?;
            self.sink.flush()?;
        }
        Ok(())
    }

    /// Restore the terminal to its previous state
    pub fn restore(&mut self) -> Result<()> {
        if self.owns_terminal {
            queue!(self.sink, LeaveAlternateScreen, Show)?;
            self.sink.flush()?;
            disable_raw_mode()?;
        }
        Ok(())
    }

    /// Redraw the full frame from the current model state
    pub fn render(&mut self, model: &FormModel) -> Result<()> {
        queue!(self.sink, Clear(ClearType::All), MoveTo(0, 0))?;
        queue!(self.sink, Print("Formline"))?;

        queue!(
            self.sink,
            MoveTo(0, 2),
            Print(format!("{INPUT_PROMPT}{}", model.input()))
        )?;

        let mut row = 4;

        if let Some(error) = model.error() {
            queue!(
                self.sink,
                MoveTo(0, row),
                SetForegroundColor(Color::Red),
                Print(format!("Error: {error}")),
                ResetColor
            )?;
            row += 2;
        }

        if model.response().is_some() {
            queue!(
                self.sink,
                MoveTo(0, row),
                Print(format!("Multi Filter: {}", filter_line(model)))
            )?;
            row += 2;

            let lines = model.filtered_view().result_lines();
            if !lines.is_empty() {
                queue!(self.sink, MoveTo(0, row), Print("Filtered Response"))?;
                row += 1;
                for line in lines {
                    queue!(self.sink, MoveTo(0, row), Print(line))?;
                    row += 1;
                }
            }
            row += 1;
        }

        queue!(
            self.sink,
            MoveTo(0, row + 1),
            SetForegroundColor(Color::DarkGrey),
            Print("Enter submit  ^N/^A/^X filters  ^U clear  ^C quit"),
            ResetColor
        )?;

        // Leave the cursor at the end of the input line
        let cursor_col = (INPUT_PROMPT.len() + model.input().chars().count()) as u16;
        queue!(self.sink, MoveTo(cursor_col, 2), Show)?;

        self.sink.flush()?;
        Ok(())
    }
}

/// One segment per tag in display order, with its toggle state and chord
fn filter_line(model: &FormModel) -> String {
    let chord = |tag: FilterTag| match tag {
        FilterTag::Numbers => "^N",
        FilterTag::Alphabets => "^A",
        FilterTag::MaximumAlphabet => "^X",
    };

    FilterTag::ALL
        .iter()
        .map(|&tag| {
            let mark = if model.filters().contains(tag) { 'x' } else { ' ' };
            format!("[{mark}] {} ({})", tag.label(), chord(tag))
        })
        .collect::<Vec<_>>()
        .join("  ")
}
