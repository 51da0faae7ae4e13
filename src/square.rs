use std::fmt;
use std::str::FromStr;

use crate::coord::Coord;
use crate::error::BoardError;

/// Side length of the board.
pub const BOARD_SIZE: u8 = 8;

/// Number of squares (and graph vertices).
pub const SQUARE_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// A validated board square: `file` and `rank` are both in `0..BOARD_SIZE`.
///
/// The dense vertex index is `rank * BOARD_SIZE + file`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub fn new(file: i32, rank: i32) -> Result<Self, BoardError> {
        let size = BOARD_SIZE as i32;
        if !(0..size).contains(&file) || !(0..size).contains(&rank) {
            return Err(BoardError::InvalidCoordinate { file, rank });
        }
        Ok(Self {
            file: file as u8,
            rank: rank as u8,
        })
    }

    /// Inverse of [`Square::index`]. `None` outside `0..SQUARE_COUNT`.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= SQUARE_COUNT {
            return None;
        }
        let size = BOARD_SIZE as usize;
        Some(Self {
            file: (index % size) as u8,
            rank: (index / size) as u8,
        })
    }

    #[inline]
    pub fn index(self) -> usize {
        (self.rank as usize) * (BOARD_SIZE as usize) + self.file as usize
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub fn coord(self) -> Coord {
        Coord::new(self.file as i8, self.rank as i8)
    }

    /// The square reached by `delta`, or `None` if it lands off the board.
    pub fn offset(self, delta: Coord) -> Option<Square> {
        let c = self.coord() + delta;
        Square::new(c.x as i32, c.y as i32).ok()
    }

    /// All squares in vertex-index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.file, self.rank)
    }
}

impl FromStr for Square {
    type Err = BoardError;

    /// Accepts `file,rank`, optionally wrapped in brackets: `5,4` or `[5, 4]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = |reason: &str| BoardError::ParseSquare {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let body = s.trim();
        let body = body
            .strip_prefix('[')
            .and_then(|b| b.strip_suffix(']'))
            .unwrap_or(body);

        let Some((file, rank)) = body.split_once(',') else {
            return Err(parse_err("expected `file,rank`"));
        };
        let file: i32 = file
            .trim()
            .parse()
            .map_err(|e| parse_err(&format!("file: {e}")))?;
        let rank: i32 = rank
            .trim()
            .parse()
            .map_err(|e| parse_err(&format!("rank: {e}")))?;

        Square::new(file, rank)
    }
}
