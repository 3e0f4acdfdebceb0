//! The remapping operations.
//!
//! | Operation            | Mapping      | Rewrites        | Strategy             |
//! |----------------------|--------------|-----------------|----------------------|
//! | [`apply_forward`]    | [`NewToOld`] | positions       | copy, then gather    |
//! | [`apply_reverse`]    | [`OldToNew`] | positions       | copy, then scatter   |
//! | [`apply_compacting`] | [`OldToNew`] | `Var` values    | per entry            |
//! | [`apply_polarized`]  | [`OldToNew`] | `Lit` values    | per entry            |
//! | [`apply_in_place`]   | [`NewToOld`] | positions       | swap along cycles    |
//!
//! [`NewToOld`]: renumber_core::NewToOld
//! [`OldToNew`]: renumber_core::OldToNew

pub use self::{
    compacting::apply_compacting,
    forward::apply_forward,
    in_place::apply_in_place,
    polarized::{apply_polarized, remap_one},
    reverse::apply_reverse,
};

mod compacting;
mod forward;
mod in_place;
mod polarized;
mod reverse;
