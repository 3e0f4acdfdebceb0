//! Apply identifier renumberings to indexed containers.
//!
//! When a system renumbers its identifier space `0..N`, say after eliminating
//! some entities and compacting the rest, every container indexed by those
//! identifiers and every stored reference to them must follow. This crate
//! provides the five operations that do so, each for one convention:
//!
//! - [`apply_forward`]: new slot `i` pulls from old slot `mapper[i]`.
//! - [`apply_reverse`]: old slot `i` pushes to new slot `mapper[i]`.
//! - [`apply_compacting`]: identifier values are translated, out-of-domain
//!   values pass through.
//! - [`apply_polarized`]: like [`apply_compacting`], for signed literals.
//! - [`apply_in_place`]: the same result as [`apply_forward`], computed by
//!   swapping along the permutation's cycles without copying the container.
//!
//! The convention is part of the mapping's type ([`NewToOld`] or
//! [`OldToNew`]), so handing a mapping to the wrong operation does not compile.
//! Contract violations, such as length mismatches, out-of-range entries, or a
//! non-permutation where one is required, panic.
//!
//! # Examples
//!
//! ```
//! use renumber::{NewToOld, SeenMarkers, apply_forward, apply_in_place, apply_reverse};
//!
//! let mapper = NewToOld::from_indices([2, 0, 1, 4, 3]);
//!
//! let mut activity = vec![0.5, 0.1, 0.9, 0.0, 0.3];
//! apply_forward(&mut activity, &mapper);
//! assert_eq!(activity, [0.9, 0.5, 0.1, 0.3, 0.0]);
//!
//! // Undo it again.
//! apply_reverse(&mut activity, &mapper.inverse());
//! assert_eq!(activity, [0.5, 0.1, 0.9, 0.0, 0.3]);
//!
//! // Same permutation, no copy.
//! let mut seen = SeenMarkers::new(mapper.len());
//! apply_in_place(&mut activity, &mut seen, &mapper);
//! assert_eq!(activity, [0.9, 0.5, 0.1, 0.3, 0.0]);
//! ```

pub use renumber_core::{
    IndexedSeq, Lit, Mapping, MappingError, NewToOld, OldToNew, SeenMarkers, Var,
};

pub use self::remap::*;

pub mod remap;

#[cfg(test)]
mod testing;
