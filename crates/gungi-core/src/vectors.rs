//! Movement-vector derivation.
//!
//! A piece's reachable displacements are a pure function of its side, type,
//! rank and position. They are rebuilt on every query and never stored.

use crate::{Coord, CoreError, PieceType, Rank, Side, Vector};

/// An ordered, duplicate-free set of displacement vectors.
///
/// Insertion order is kept: base vectors first, then each extension ring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VectorSet(Vec<Vector>);

impl VectorSet {
    pub fn new() -> Self {
        VectorSet(Vec::new())
    }

    /// Adds a vector unless it is already present.
    pub fn insert(&mut self, v: Vector) -> bool {
        if self.0.contains(&v) {
            return false;
        }
        self.0.push(v);
        true
    }

    #[inline]
    pub fn contains(&self, v: Vector) -> bool {
        self.0.contains(&v)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vector] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vector> {
        self.0.iter()
    }

    /// Negates every vector.
    pub fn mirrored(self) -> Self {
        VectorSet(self.0.into_iter().map(Vector::mirrored).collect())
    }
}

impl<'a> IntoIterator for &'a VectorSet {
    type Item = &'a Vector;
    type IntoIter = std::slice::Iter<'a, Vector>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Vector> for VectorSet {
    fn from_iter<I: IntoIterator<Item = Vector>>(iter: I) -> Self {
        let mut set = VectorSet::new();
        for v in iter {
            set.insert(v);
        }
        set
    }
}

/// Derives the movement vectors of a piece.
///
/// The set is built in first-side orientation: the archetype's base vectors,
/// then one ring per rank above zero at step distances 2 and 3. Ring vectors
/// whose destination would leave a `dimension`-sized board from `position`
/// are dropped; base vectors are kept as-is and an off-board piece keeps
/// every ring vector. The completed set is mirrored for the second side.
pub fn derive_vectors(
    side: Side,
    kind: PieceType,
    rank: Rank,
    position: Option<Coord>,
    dimension: u8,
) -> VectorSet {
    let archetype = kind.archetype();
    let mut set: VectorSet = archetype.base.iter().copied().collect();

    for step in 2..=i32::from(rank.value()) + 1 {
        for &dir in archetype.reach {
            let ring = dir.scaled(step);
            let on_board =
                position.map_or(true, |from| (from + side.orient(ring)).within(dimension));
            if on_board {
                set.insert(ring);
            }
        }
    }

    match side {
        Side::First => set,
        Side::Second => set.mirrored(),
    }
}

/// Like [`derive_vectors`], but validates a raw rank first.
pub fn derive_vectors_raw(
    side: Side,
    kind: PieceType,
    rank: u8,
    position: Option<Coord>,
    dimension: u8,
) -> Result<VectorSet, CoreError> {
    let rank = Rank::new(rank)?;
    Ok(derive_vectors(side, kind, rank, position, dimension))
}
