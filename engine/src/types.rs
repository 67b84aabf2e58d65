use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Computer => write!(f, "computer"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    PlayerWon,
    ComputerWon,
    Draw,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "Difficulty must be 'easy', 'normal', or 'hard', got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Normal => write!(f, "normal"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// A selector number in 1..=9, chosen each turn by the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Multiplier(u8);

impl Multiplier {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 9;

    pub fn new(value: u8) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Multiplier> {
        (Self::MIN..=Self::MAX).map(Multiplier)
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Multiplier(Self::MIN)
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why an attempted move was turned down. The session state is unchanged
/// whenever one of these is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveRejection {
    AlreadyMarked,
    NotOnBoard,
    NotAValidProduct,
    NotYourTurn,
    GameOver,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::AlreadyMarked => write!(f, "This position is already marked"),
            MoveRejection::NotOnBoard => write!(f, "This value doesn't exist on the board"),
            MoveRejection::NotAValidProduct => {
                write!(f, "This value cannot be made with the chosen multiplier")
            }
            MoveRejection::NotYourTurn => write!(f, "Wait for the other side's move"),
            MoveRejection::GameOver => write!(f, "Game is already over"),
        }
    }
}

/// Four board values lying consecutively along a row, column, or diagonal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinePattern {
    pub values: [u32; 4],
}

impl LinePattern {
    pub fn new(values: [u32; 4]) -> Self {
        Self { values }
    }

    pub fn contains(&self, value: u32) -> bool {
        self.values.contains(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Player.opponent(), Side::Computer);
        assert_eq!(Side::Computer.opponent(), Side::Player);
    }

    #[test]
    fn test_multiplier_range() {
        assert!(Multiplier::new(0).is_none());
        assert!(Multiplier::new(10).is_none());
        assert_eq!(Multiplier::new(9).map(|m| m.get()), Some(9));
        assert_eq!(Multiplier::all().count(), 9);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("NORMAL".parse::<Difficulty>(), Ok(Difficulty::Normal));
        assert!("expert".parse::<Difficulty>().is_err());
    }
}
