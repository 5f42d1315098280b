//! Plain-text rendering for terminals.

use super::view::{Control, GameView, PlayerView};
use super::Renderer;
use std::fmt;
use std::io::Write;
use tracing::error;

fn write_controls(f: &mut fmt::Formatter<'_>, player: &PlayerView, color: bool) -> fmt::Result {
    write!(f, "   ")?;
    for control in &player.controls {
        match control {
            Control::Increment { label, color: c, .. } if color => {
                write!(f, " \x1b[48;2;{};{};{}m{}\x1b[0m", c.r, c.g, c.b, label)?
            }
            other => write!(f, " [{}]", other.label())?,
        }
    }
    writeln!(f)
}

/// Adapter that formats a view, optionally with ANSI colour buttons.
struct Styled<'a> {
    view: &'a GameView,
    color: bool,
}

impl fmt::Display for Styled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for player in &self.view.players {
            writeln!(
                f,
                "[{}] {}: {}",
                player.index + 1,
                player.name,
                player.score_label()
            )?;
            write_controls(f, player, self.color)?;
        }
        if let Some(modal) = &self.view.modal {
            writeln!(f, "-- History: {} --", modal.player_name)?;
            if modal.lines.is_empty() {
                writeln!(f, "  (no points yet)")?;
            }
            for line in &modal.lines {
                writeln!(f, "  {line}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for GameView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled = Styled {
            view: self,
            color: false,
        };
        fmt::Display::fmt(&styled, f)
    }
}

/// Writes each rendered view to an output stream.
///
/// Write failures are logged and otherwise ignored so a broken pipe never
/// interrupts the game.
pub struct TextRenderer<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, color: false }
    }

    /// Paint increment buttons with their ANSI truecolour background.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &GameView) {
        let styled = Styled {
            view,
            color: self.color,
        };
        let result = writeln!(self.out, "{styled}").and_then(|()| self.out.flush());
        if let Err(e) = result {
            error!(error = %e, "Failed to draw game view");
        }
    }
}
