//! Player bookkeeping.

use crate::board::Color;

/// A participant in the game: name, color, and score bookkeeping.
///
/// This is a presentation aggregate the controller updates after each
/// ply; rule logic never consults it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    color: Color,
    in_check: bool,
    score: u32,
    captured_value: u32,
}

impl Player {
    /// Create a player with zeroed bookkeeping.
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Player {
            name: name.into(),
            color,
            in_check: false,
            score: 0,
            captured_value: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Whether this player's king was in check after the last ply
    #[must_use]
    pub const fn in_check(&self) -> bool {
        self.in_check
    }

    /// Games won
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Total point value of the pieces this player has captured
    #[must_use]
    pub const fn captured_value(&self) -> u32 {
        self.captured_value
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub(crate) fn set_in_check(&mut self, in_check: bool) {
        self.in_check = in_check;
    }

    pub(crate) fn add_captured_value(&mut self, value: u32) {
        self.captured_value += value;
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Reset flags and totals for a new game. Name and color persist.
    pub fn reset(&mut self) {
        self.in_check = false;
        self.score = 0;
        self.captured_value = 0;
    }
}
