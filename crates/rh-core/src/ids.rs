//! Strongly typed arena identifiers.
//!
//! Every entity in the simulation lives in an arena `Vec` owned by the
//! directory; its id is the index into that arena.  Ids are handed out in
//! creation order and never reused during a run, so an id held by a stop, a
//! taxi, or a passenger always names the same entity.

use std::fmt;

/// Generate an arena id wrapper around `u32`, displayed as `<label> #<n>`.
macro_rules! arena_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Id of the arena slot at `index`.
            ///
            /// Arenas never grow past `u32::MAX` entries; the cast truncates
            /// beyond that.
            #[inline(always)]
            pub fn from_index(index: usize) -> Self {
                $name(index as u32)
            }

            /// Position in the owning arena.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " #{}"), self.0)
            }
        }
    };
}

arena_id! {
    /// Index of a stop in the directory's stop arena.
    pub struct StopId => "stop";
}

arena_id! {
    /// Index of a taxi in the directory's taxi arena.
    pub struct TaxiId => "taxi";
}

arena_id! {
    /// Index of a passenger in the directory's passenger arena.
    ///
    /// Delivered passengers keep their slot, so a `PassengerId` stays valid
    /// for the whole run even after the passenger leaves the network.
    pub struct PassengerId => "passenger";
}
