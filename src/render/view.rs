//! Pure projection from game state to a renderable view.

use crate::config::GameConfig;
use crate::core::{GameState, Player};
use std::fmt;

/// Blue channel shared by every increment button.
const BUTTON_BLUE: u8 = 110;

/// Whether the history modal is showing, and for whom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryView {
    #[default]
    Closed,
    Open { player: usize },
}

impl HistoryView {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

/// Button background colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// One control in a player's control row, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Increment {
        points: u32,
        label: String,
        color: Rgb,
    },
    Undo,
    History,
}

impl Control {
    pub fn label(&self) -> &str {
        match self {
            Self::Increment { label, .. } => label,
            Self::Undo => "Undo",
            Self::History => "History",
        }
    }
}

/// Everything shown for one player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerView {
    pub index: usize,
    pub name: String,
    pub score: u32,
    /// Points of the most recent increment, shown as `(+n)` beside the score
    pub last_added: Option<u32>,
    pub controls: Vec<Control>,
}

impl PlayerView {
    /// Score text, e.g. `35 (+10)`, or just `0` before any increment.
    pub fn score_label(&self) -> String {
        match self.last_added {
            Some(points) => format!("{} (+{})", self.score, points),
            None => self.score.to_string(),
        }
    }
}

/// Contents of the open history modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryModal {
    pub player: usize,
    pub player_name: String,
    /// Entries newest first
    pub lines: Vec<String>,
}

/// The whole screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameView {
    pub players: Vec<PlayerView>,
    pub modal: Option<HistoryModal>,
}

/// Background colour for an increment button.
///
/// Colours run from green for the smallest increment to red for the
/// largest. When every increment is the same the ratio is zero.
pub fn increment_color(points: u32, min: u32, max: u32) -> Rgb {
    let ratio = if max > min {
        f64::from(points.saturating_sub(min)) / f64::from(max - min)
    } else {
        0.0
    };
    let ratio = ratio.clamp(0.0, 1.0);
    Rgb {
        r: (ratio * 255.0).round() as u8,
        g: ((1.0 - ratio) * 255.0).round() as u8,
        b: BUTTON_BLUE,
    }
}

fn player_view(index: usize, player: &Player, config: &GameConfig) -> PlayerView {
    let increments = config.increments();
    let min = increments.iter().copied().min().unwrap_or(0);
    let max = increments.iter().copied().max().unwrap_or(0);

    let mut controls: Vec<Control> = increments
        .iter()
        .map(|&points| Control::Increment {
            points,
            label: format!("+{points}"),
            color: increment_color(points, min, max),
        })
        .collect();
    controls.push(Control::Undo);
    controls.push(Control::History);

    PlayerView {
        index,
        name: player.name().to_string(),
        score: player.score(),
        last_added: player.last_entry().map(|e| e.points),
        controls,
    }
}

fn history_modal(state: &GameState, history_view: HistoryView) -> Option<HistoryModal> {
    let HistoryView::Open { player } = history_view else {
        return None;
    };
    let shown = state.player(player)?;
    Some(HistoryModal {
        player,
        player_name: shown.name().to_string(),
        lines: shown
            .history()
            .iter()
            .rev()
            .map(|e| e.display_line())
            .collect(),
    })
}

/// Project the game onto a view (pure).
///
/// # Example
///
/// ```rust
/// use muggins::config::GameConfig;
/// use muggins::core::{GameState, HistoryEntry};
/// use muggins::render::{render, Control, HistoryView};
///
/// let mut state = GameState::default();
/// state.player_mut(0).unwrap().record(HistoryEntry::now(35));
///
/// let view = render(&state, HistoryView::Closed, &GameConfig::default());
///
/// assert_eq!(view.players[0].score_label(), "35 (+35)");
/// assert_eq!(view.players[0].controls.len(), 9);
/// assert_eq!(view.players[0].controls[7], Control::Undo);
/// assert!(view.modal.is_none());
/// ```
pub fn render(state: &GameState, history_view: HistoryView, config: &GameConfig) -> GameView {
    GameView {
        players: state
            .players()
            .iter()
            .enumerate()
            .map(|(index, player)| player_view(index, player, config))
            .collect(),
        modal: history_modal(state, history_view),
    }
}
