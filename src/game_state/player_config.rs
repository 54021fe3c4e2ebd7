//! Human/bot side assignment.

use crate::game_state::checkers_types::{Color, PieceKind, SidePieces};

/// Which (man, king) pair the human plays and which the bot plays.
///
/// The two pairs always partition the four piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerConfig {
    human: SidePieces,
    bot: SidePieces,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::with_human(Color::Red)
    }
}

impl PlayerConfig {
    pub fn with_human(color: Color) -> Self {
        Self {
            human: color.pieces(),
            bot: color.opposite().pieces(),
        }
    }

    /// Hand the human `color`; the bot gets the other pair.
    pub fn assign_human(&mut self, color: Color) {
        *self = Self::with_human(color);
    }

    /// Set the human pair directly. Refused unless it is a valid color pair.
    pub fn set_human(&mut self, pieces: SidePieces) -> Result<(), String> {
        let color = side_color(pieces)?;
        self.assign_human(color);
        Ok(())
    }

    /// Set the bot pair directly. Refused unless it is a valid color pair.
    pub fn set_bot(&mut self, pieces: SidePieces) -> Result<(), String> {
        let color = side_color(pieces)?;
        self.assign_human(color.opposite());
        Ok(())
    }

    #[inline]
    pub fn human(&self) -> SidePieces {
        self.human
    }

    #[inline]
    pub fn bot(&self) -> SidePieces {
        self.bot
    }

    #[inline]
    pub fn human_color(&self) -> Color {
        self.human.color().unwrap_or(Color::Red)
    }

    #[inline]
    pub fn bot_color(&self) -> Color {
        self.human_color().opposite()
    }

    /// Pair for `color`.
    #[inline]
    pub fn side(&self, color: Color) -> SidePieces {
        if self.human_color() == color {
            self.human
        } else {
            self.bot
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let human = side_color(self.human)?;
        let bot = side_color(self.bot)?;
        if human == bot {
            return Err(format!("both players assigned {human}"));
        }
        Ok(())
    }
}

fn side_color(pieces: SidePieces) -> Result<Color, String> {
    match (pieces.man, pieces.king) {
        (PieceKind::RedMan, PieceKind::RedKing) => Ok(Color::Red),
        (PieceKind::BlackMan, PieceKind::BlackKing) => Ok(Color::Black),
        (man, king) => Err(format!("invalid piece pair ({man:?}, {king:?})")),
    }
}
