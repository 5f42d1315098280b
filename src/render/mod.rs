//! Rendering: pure view projection plus output sinks.
//!
//! [`render`] turns a [`GameState`](crate::core::GameState) into a
//! [`GameView`] without side effects. A [`Renderer`] is the imperative
//! shell that puts the view in front of the players.

mod text;
mod view;

pub use text::TextRenderer;
pub use view::{
    increment_color, render, Control, GameView, HistoryModal, HistoryView, PlayerView, Rgb,
};

/// Output sink invoked after every state change.
pub trait Renderer {
    fn render(&mut self, view: &GameView);
}

impl<F: FnMut(&GameView)> Renderer for F {
    fn render(&mut self, view: &GameView) {
        self(view)
    }
}
