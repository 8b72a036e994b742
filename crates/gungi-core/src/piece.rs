//! Piece types, archetypes, and pieces.

use crate::vectors::{derive_vectors, VectorSet};
use crate::{Coord, CoreError, Rank, Side, Vector};
use std::fmt;

const fn v(dy: i32, dx: i32) -> Vector {
    Vector::new(dy, dx)
}

const KING_STEPS: [Vector; 8] = [
    v(-1, -1),
    v(-1, 0),
    v(-1, 1),
    v(0, -1),
    v(0, 1),
    v(1, -1),
    v(1, 0),
    v(1, 1),
];

const ORTHOGONAL: [Vector; 4] = [v(-1, 0), v(0, -1), v(0, 1), v(1, 0)];

const DIAGONAL: [Vector; 4] = [v(-1, -1), v(-1, 1), v(1, -1), v(1, 1)];

const FILE: [Vector; 2] = [v(-1, 0), v(1, 0)];

const FORWARD: [Vector; 1] = [v(-1, 0)];

const GOLD_STEPS: [Vector; 6] = [v(-1, -1), v(-1, 0), v(-1, 1), v(0, -1), v(0, 1), v(1, 0)];

const SPEAR_STEPS: [Vector; 4] = [v(-1, -1), v(-1, 0), v(-1, 1), v(1, 0)];

const FORTRESS_STEPS: [Vector; 5] = [v(-1, 0), v(0, -1), v(0, 1), v(1, -1), v(1, 1)];

const CANNON_STEPS: [Vector; 4] = [v(-3, 0), v(0, -1), v(0, 1), v(1, 0)];

const ARCHER_STEPS: [Vector; 4] = [v(-2, -1), v(-2, 0), v(-2, 1), v(1, 0)];

const MUSKET_STEPS: [Vector; 3] = [v(-2, 0), v(1, -1), v(1, 1)];

const TACTICIAN_STEPS: [Vector; 3] = [v(-1, -1), v(-1, 1), v(1, 0)];

/// Movement rule of a piece type, written for the first side.
///
/// `base` is the rank-0 step set. Each rank above zero adds one ring: every
/// `reach` direction scaled by the ring's step distance (2 for rank 1, 3 for
/// rank 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Archetype {
    pub base: &'static [Vector],
    pub reach: &'static [Vector],
}

impl Archetype {
    /// Omnidirectional royal piece: king steps, orthogonal rings.
    pub const ROYAL: Archetype = Archetype {
        base: &KING_STEPS,
        reach: &ORTHOGONAL,
    };

    /// Single-file piece: one step forward or back, rings along the file.
    pub const PAWN: Archetype = Archetype {
        base: &FILE,
        reach: &FILE,
    };
}

/// The fourteen piece identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceType {
    Sui = 0,
    Taishou = 1,
    Chujou = 2,
    Shoushou = 3,
    Samurai = 4,
    Yari = 5,
    Kiba = 6,
    Shinobi = 7,
    Toride = 8,
    Hyou = 9,
    Ohdsutsu = 10,
    Yumi = 11,
    Tsutsu = 12,
    Boushou = 13,
}

impl PieceType {
    /// All piece types in order.
    pub const ALL: [PieceType; 14] = [
        PieceType::Sui,
        PieceType::Taishou,
        PieceType::Chujou,
        PieceType::Shoushou,
        PieceType::Samurai,
        PieceType::Yari,
        PieceType::Kiba,
        PieceType::Shinobi,
        PieceType::Toride,
        PieceType::Hyou,
        PieceType::Ohdsutsu,
        PieceType::Yumi,
        PieceType::Tsutsu,
        PieceType::Boushou,
    ];

    /// Returns the index of this piece type (0-13).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the display glyph.
    pub const fn symbol(self) -> char {
        match self {
            PieceType::Sui => '帥',
            PieceType::Taishou => '大',
            PieceType::Chujou => '中',
            PieceType::Shoushou => '小',
            PieceType::Samurai => '侍',
            PieceType::Yari => '槍',
            PieceType::Kiba => '馬',
            PieceType::Shinobi => '忍',
            PieceType::Toride => '砦',
            PieceType::Hyou => '兵',
            PieceType::Ohdsutsu => '砲',
            PieceType::Yumi => '弓',
            PieceType::Tsutsu => '筒',
            PieceType::Boushou => '謀',
        }
    }

    /// Parses a display glyph.
    pub fn from_symbol(c: char) -> Option<PieceType> {
        Self::ALL.into_iter().find(|kind| kind.symbol() == c)
    }

    /// Returns true for the piece whose loss ends the game.
    #[inline]
    pub const fn is_royal(self) -> bool {
        matches!(self, PieceType::Sui)
    }

    /// Returns the movement rule for this piece type.
    pub const fn archetype(self) -> Archetype {
        match self {
            PieceType::Sui => Archetype::ROYAL,
            PieceType::Hyou => Archetype::PAWN,
            PieceType::Taishou => Archetype {
                base: &KING_STEPS,
                reach: &KING_STEPS,
            },
            PieceType::Chujou => Archetype {
                base: &KING_STEPS,
                reach: &DIAGONAL,
            },
            PieceType::Shoushou => Archetype {
                base: &GOLD_STEPS,
                reach: &FORWARD,
            },
            PieceType::Samurai => Archetype {
                base: &SPEAR_STEPS,
                reach: &FORWARD,
            },
            PieceType::Yari => Archetype {
                base: &SPEAR_STEPS,
                reach: &FILE,
            },
            PieceType::Kiba => Archetype {
                base: &ORTHOGONAL,
                reach: &ORTHOGONAL,
            },
            PieceType::Shinobi => Archetype {
                base: &DIAGONAL,
                reach: &DIAGONAL,
            },
            PieceType::Toride => Archetype {
                base: &FORTRESS_STEPS,
                reach: &[],
            },
            PieceType::Ohdsutsu => Archetype {
                base: &CANNON_STEPS,
                reach: &[],
            },
            PieceType::Yumi => Archetype {
                base: &ARCHER_STEPS,
                reach: &[],
            },
            PieceType::Tsutsu => Archetype {
                base: &MUSKET_STEPS,
                reach: &[],
            },
            PieceType::Boushou => Archetype {
                base: &TACTICIAN_STEPS,
                reach: &[],
            },
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceType::Sui => "Sui",
            PieceType::Taishou => "Taishou",
            PieceType::Chujou => "Chujou",
            PieceType::Shoushou => "Shoushou",
            PieceType::Samurai => "Samurai",
            PieceType::Yari => "Yari",
            PieceType::Kiba => "Kiba",
            PieceType::Shinobi => "Shinobi",
            PieceType::Toride => "Toride",
            PieceType::Hyou => "Hyou",
            PieceType::Ohdsutsu => "Ohdsutsu",
            PieceType::Yumi => "Yumi",
            PieceType::Tsutsu => "Tsutsu",
            PieceType::Boushou => "Boushou",
        };
        write!(f, "{}", name)
    }
}

/// A single game piece.
///
/// Side and type never change. The position is `None` while the piece is off
/// the board and is otherwise kept in sync by the board that owns the piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    side: Side,
    kind: PieceType,
    rank: Rank,
    position: Option<Coord>,
}

impl Piece {
    /// Creates an off-board piece at rank 0.
    pub const fn new(side: Side, kind: PieceType) -> Self {
        Piece {
            side,
            kind,
            rank: Rank::ZERO,
            position: None,
        }
    }

    /// Returns this piece with the given rank.
    pub const fn with_rank(mut self, rank: Rank) -> Self {
        self.rank = rank;
        self
    }

    #[inline]
    pub const fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub const fn kind(&self) -> PieceType {
        self.kind
    }

    #[inline]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[inline]
    pub const fn position(&self) -> Option<Coord> {
        self.position
    }

    /// Records a new position. Meant for the board that holds the piece.
    pub fn set_position(&mut self, coord: Coord) {
        self.position = Some(coord);
    }

    /// Marks the piece as off the board.
    pub fn lift(&mut self) {
        self.position = None;
    }

    /// Raises the piece one tier.
    ///
    /// Fails without changing the piece when it is already at [`Rank::MAX`].
    pub fn promote(&mut self) -> Result<Rank, CoreError> {
        self.rank = self.rank.next()?;
        Ok(self.rank)
    }

    /// Derives the displacements this piece may attempt from its current
    /// position on a board of the given dimension.
    ///
    /// The set is recomputed on every call; nothing is cached on the piece.
    pub fn movement_vectors(&self, dimension: u8) -> VectorSet {
        derive_vectors(self.side, self.kind, self.rank, self.position, dimension)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.side, self.kind.symbol())?;
        match self.position {
            Some(coord) => write!(f, " at {}", coord)?,
            None => write!(f, " in hand")?,
        }
        write!(f, ", rank {}", self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_roundtrip() {
        for kind in PieceType::ALL {
            assert_eq!(PieceType::from_symbol(kind.symbol()), Some(kind));
        }
        assert_eq!(PieceType::from_symbol('x'), None);
    }

    #[test]
    fn symbols() {
        assert_eq!(PieceType::Sui.symbol(), '帥');
        assert_eq!(PieceType::Hyou.symbol(), '兵');
        assert_eq!(PieceType::Boushou.symbol(), '謀');
    }

    #[test]
    fn index_matches_order() {
        for (i, kind) in PieceType::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn only_sui_is_royal() {
        let royals: Vec<_> = PieceType::ALL.into_iter().filter(|k| k.is_royal()).collect();
        assert_eq!(royals, vec![PieceType::Sui]);
    }

    #[test]
    fn archetypes_of_modeled_pieces() {
        assert_eq!(PieceType::Sui.archetype(), Archetype::ROYAL);
        assert_eq!(PieceType::Hyou.archetype(), Archetype::PAWN);
        assert_eq!(Archetype::ROYAL.base.len(), 8);
        assert!(!Archetype::ROYAL.base.contains(&Vector::new(0, 0)));
    }

    #[test]
    fn every_archetype_has_moves() {
        for kind in PieceType::ALL {
            let archetype = kind.archetype();
            assert!(!archetype.base.is_empty(), "{} has no base vectors", kind);
            assert!(!archetype.base.contains(&Vector::new(0, 0)));
        }
    }

    #[test]
    fn new_piece_is_off_board() {
        let piece = Piece::new(Side::First, PieceType::Sui);
        assert_eq!(piece.position(), None);
        assert_eq!(piece.rank(), Rank::ZERO);
        assert_eq!(piece.side(), Side::First);
        assert_eq!(piece.kind(), PieceType::Sui);
    }

    #[test]
    fn promote_up_to_max() {
        let mut piece = Piece::new(Side::Second, PieceType::Hyou);
        assert_eq!(piece.promote().map(Rank::value), Ok(1));
        assert_eq!(piece.promote().map(Rank::value), Ok(2));
        assert_eq!(piece.promote(), Err(CoreError::InvalidRank(3)));
        assert_eq!(piece.rank(), Rank::MAX);
    }

    #[test]
    fn position_updates() {
        let mut piece = Piece::new(Side::First, PieceType::Kiba);
        piece.set_position(Coord::new(2, 3));
        assert_eq!(piece.position(), Some(Coord::new(2, 3)));
        piece.lift();
        assert_eq!(piece.position(), None);
    }

    #[test]
    fn display() {
        let mut piece = Piece::new(Side::First, PieceType::Sui);
        assert_eq!(piece.to_string(), "First 帥 in hand, rank 0");
        piece.set_position(Coord::new(4, 8));
        assert_eq!(piece.to_string(), "First 帥 at (4, 8), rank 0");
        assert_eq!(PieceType::Ohdsutsu.to_string(), "Ohdsutsu");
    }
}
