//! Core vocabulary for renumbering identifier spaces.
//!
//! A host system names its entities with dense identifiers `0..N`. When some
//! are eliminated, or the space is reordered, every container indexed by those
//! identifiers, and every stored reference to them, must be renumbered
//! consistently. This crate provides the types such renumbering is expressed
//! in; the operations themselves live in the `renumber` crate.
//!
//! # Overview
//!
//! 1. **Identifiers**
//!    - [`Var`]: an identifier.
//!    - [`Lit`]: an identifier with a sign bit.
//!
//! 2. **Mappings** - Renumberings tagged with their convention
//!    - [`NewToOld`]: entry `i` is the old identifier feeding new slot `i`.
//!    - [`OldToNew`]: entry `i` is the new identifier old slot `i` moves to.
//!
//!    Both are aliases of [`Mapping`], parameterized by a [`Direction`].
//!
//! 3. **Containers and scratch space**
//!    - [`IndexedSeq`]: the random-access capability remapping is bounded by.
//!    - [`SeenMarkers`]: reusable, caller-owned visit flags.
//!
//! # Examples
//!
//! ```
//! use renumber_core::{NewToOld, Var};
//!
//! let map = NewToOld::from_indices([2, 0, 1, 4, 3]);
//! assert!(map.is_permutation());
//! assert_eq!(map.cycles().len(), 2);
//! assert_eq!(map.to_opposite().map_var(Var::new(4)), Var::new(3));
//! ```

pub mod ident;
pub mod mapping;
pub mod markers;
pub mod seq;

mod error;

pub use self::{
    error::MappingError,
    ident::{Lit, Var},
    mapping::{Direction, Gather, Mapping, NewToOld, OldToNew, Scatter},
    markers::SeenMarkers,
    seq::IndexedSeq,
};
