//! Entity and favorite target kinds.

use std::fmt;

/// Kind of record a lookup can be performed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Row of the `user` table
    User,
    /// Row of the `characters` table
    Character,
    /// Row of the `planets` table
    Planet,
    /// Row of the `vehicles` table
    Vehicle,
    /// Row of the `favorites` table
    Favorite,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::User => "User",
            Self::Character => "Character",
            Self::Planet => "Planet",
            Self::Vehicle => "Vehicle",
            Self::Favorite => "Favorite",
        };

        f.write_str(name)
    }
}

/// Kind of entity a favorite can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Stored in `favorites.favorite_characters`
    Character,
    /// Stored in `favorites.favorite_planets`
    Planet,
    /// Stored in `favorites.favorite_vehicles`
    Vehicle,
}

impl TargetKind {
    /// Whether removing a favorite of this kind first checks that the target and user exist.
    ///
    /// Vehicle removals only look for the favorite row itself, so a missing vehicle or user
    /// is reported as a missing favorite.
    pub fn verifies_references_on_remove(self) -> bool {
        !matches!(self, Self::Vehicle)
    }
}

impl From<TargetKind> for EntityKind {
    fn from(kind: TargetKind) -> Self {
        match kind {
            TargetKind::Character => Self::Character,
            TargetKind::Planet => Self::Planet,
            TargetKind::Vehicle => Self::Vehicle,
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        EntityKind::from(*self).fmt(f)
    }
}

/// A single favorited entity: which table and which row.
///
/// Storage keeps one nullable column per kind, this type guarantees exactly one is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteTarget {
    /// Table the favorite points at
    pub kind: TargetKind,
    /// Primary key of the favorited row
    pub id: i32,
}

impl FavoriteTarget {
    /// Creates a target of the provided kind
    pub fn new(kind: TargetKind, id: i32) -> Self {
        Self { kind, id }
    }

    /// Shorthand for a [`TargetKind::Character`] target
    pub fn character(id: i32) -> Self {
        Self::new(TargetKind::Character, id)
    }

    /// Shorthand for a [`TargetKind::Planet`] target
    pub fn planet(id: i32) -> Self {
        Self::new(TargetKind::Planet, id)
    }

    /// Shorthand for a [`TargetKind::Vehicle`] target
    pub fn vehicle(id: i32) -> Self {
        Self::new(TargetKind::Vehicle, id)
    }

    /// Returns the target ID when this target is of `kind`, otherwise `None`.
    pub fn id_for(&self, kind: TargetKind) -> Option<i32> {
        (self.kind == kind).then_some(self.id)
    }
}
