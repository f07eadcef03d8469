//! Index types and semantics for type-safe container indexing.
//!
//! This module is the foundation of the [Semantics Pattern](crate#semantics-pattern-type-safe-indexing):
//! generic containers like [`BitSet9`], [`BitSet81`], [`Array9`], and [`Array81`] are
//! parameterized by a semantics type that defines how user-facing values map to raw indices.
//!
//! - [`Index9`] / [`Index9Semantics`] - indices in the range 0-8, for 9-element containers.
//! - [`Index81`] / [`Index81Semantics`] - indices in the range 0-80, for 81-element containers.
//!
//! [`BitSet9`]: crate::containers::BitSet9
//! [`BitSet81`]: crate::containers::BitSet81
//! [`Array9`]: crate::containers::Array9
//! [`Array81`]: crate::containers::Array81

mod index_81;
mod index_9;

pub use self::{index_81::*, index_9::*};
