//! Renumbering mappings tagged with their direction.
//!
//! A renumbering of an identifier space can be written down two ways, and the
//! two arrays look alike while meaning opposite things:
//!
//! - [`NewToOld`] (gather): entry `i` is the *old* identifier whose data ends
//!   up in new slot `i`.
//! - [`OldToNew`] (scatter): entry `i` is the *new* identifier that old slot
//!   `i` moves to.
//!
//! Both are [`Mapping`]s, distinguished by a [`Direction`] marker so that an
//! operation expecting one convention cannot be handed the other.
//!
//! # Examples
//!
//! ```
//! use renumber_core::{NewToOld, OldToNew, Var};
//!
//! // New slot 0 takes old 2, new slot 1 takes old 0, new slot 2 takes old 1.
//! let gather = NewToOld::from_indices([2, 0, 1]);
//!
//! // The same renumbering, as "old identifier moves to":
//! let scatter: OldToNew = gather.to_opposite();
//! assert_eq!(scatter.as_slice(), NewToOld::from_indices([1, 2, 0]).as_slice());
//! assert_eq!(scatter.map_var(Var::new(2)), Var::new(0));
//! ```

use std::{
    fmt::{self, Debug},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use crate::{MappingError, Var};

mod sealed {
    pub trait Sealed {}
}

/// Marker trait for the two mapping conventions.
///
/// Implemented only by [`Gather`] and [`Scatter`].
pub trait Direction: sealed::Sealed + 'static {
    /// The other convention.
    type Opposite: Direction<Opposite = Self>;

    /// Human-readable name used in `Debug` output.
    const NAME: &'static str;
}

/// Direction marker for "new slot pulls from old identifier" mappings.
#[derive(Debug)]
pub enum Gather {}

/// Direction marker for "old slot pushes to new identifier" mappings.
#[derive(Debug)]
pub enum Scatter {}

impl sealed::Sealed for Gather {}
impl sealed::Sealed for Scatter {}

impl Direction for Gather {
    type Opposite = Scatter;
    const NAME: &'static str = "NewToOld";
}

impl Direction for Scatter {
    type Opposite = Gather;
    const NAME: &'static str = "OldToNew";
}

/// A mapping whose entry `i` names the old identifier feeding new slot `i`.
pub type NewToOld = Mapping<Gather>;

/// A mapping whose entry `i` names the new identifier old slot `i` moves to.
pub type OldToNew = Mapping<Scatter>;

/// An array of identifiers describing a renumbering in direction `D`.
///
/// A mapping is either a permutation of `0..len()` or a partial function used
/// only to translate identifiers that fall inside its domain. Construction via
/// [`Mapping::new`] accepts either; [`Mapping::try_permutation`] checks for the
/// former.
pub struct Mapping<D> {
    targets: Vec<Var>,
    _direction: PhantomData<fn() -> D>,
}

impl<D: Direction> Mapping<D> {
    /// Wraps `targets` without checking that they form a permutation.
    #[must_use]
    pub fn new(targets: Vec<Var>) -> Self {
        Self {
            targets,
            _direction: PhantomData,
        }
    }

    /// Builds a mapping from raw identifier values, without validation.
    ///
    /// # Panics
    ///
    /// Panics if a value exceeds [`Var::MAX_INDEX`].
    ///
    /// # Examples
    ///
    /// ```
    /// use renumber_core::{OldToNew, Var};
    ///
    /// let map = OldToNew::from_indices([5, 6, 7]);
    /// assert_eq!(map.len(), 3);
    /// assert_eq!(map.get(Var::new(1)), Some(Var::new(6)));
    /// assert_eq!(map.get(Var::new(3)), None);
    /// ```
    #[must_use]
    pub fn from_indices<I>(indices: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        indices.into_iter().map(Var::new).collect()
    }

    /// Wraps `targets` after checking that they form a permutation of
    /// `0..targets.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::OutOfRange`] if an entry is not below the length,
    /// or [`MappingError::DuplicateTarget`] if an entry repeats.
    ///
    /// # Examples
    ///
    /// ```
    /// use renumber_core::{MappingError, NewToOld, Var};
    ///
    /// assert!(NewToOld::try_permutation(vec![Var::new(1), Var::new(0)]).is_ok());
    ///
    /// let err = NewToOld::try_permutation(vec![Var::new(1), Var::new(1)]).unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     MappingError::DuplicateTarget { target: Var::new(1), first: 0, second: 1 }
    /// );
    /// ```
    pub fn try_permutation(targets: Vec<Var>) -> Result<Self, MappingError> {
        let mapping = Self::new(targets);
        mapping.validate_permutation()?;
        Ok(mapping)
    }

    /// Returns the identity mapping over `0..n`.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Var::range(n).collect()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` if the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Returns the entry for `source`, or `None` if `source` lies outside the
    /// mapping's domain.
    #[must_use]
    pub fn get(&self, source: Var) -> Option<Var> {
        self.targets.get(source.as_usize()).copied()
    }

    /// Returns the entry at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`.
    #[must_use]
    #[inline]
    pub fn target(&self, position: usize) -> Var {
        assert!(
            position < self.targets.len(),
            "mapping position {position} out of range for {} of length {}",
            D::NAME,
            self.targets.len()
        );
        self.targets[position]
    }

    /// Returns the entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Var] {
        &self.targets
    }

    /// Returns an iterator over the entries in position order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Var> + ExactSizeIterator + '_ {
        self.targets.iter().copied()
    }

    /// Consumes the mapping and returns its entries.
    #[must_use]
    pub fn into_vec(self) -> Vec<Var> {
        self.targets
    }

    /// Checks that the entries form a permutation of `0..self.len()`.
    ///
    /// # Errors
    ///
    /// Reports the first offending entry, in position order.
    pub fn validate_permutation(&self) -> Result<(), MappingError> {
        let len = self.len();
        let mut first_seen: Vec<Option<usize>> = vec![None; len];
        for (position, target) in self.iter().enumerate() {
            let Some(slot) = first_seen.get_mut(target.as_usize()) else {
                return Err(MappingError::OutOfRange {
                    position,
                    target,
                    len,
                });
            };
            if let Some(first) = *slot {
                return Err(MappingError::DuplicateTarget {
                    target,
                    first,
                    second: position,
                });
            }
            *slot = Some(position);
        }
        Ok(())
    }

    /// Returns `true` if the entries form a permutation of `0..self.len()`.
    #[must_use]
    pub fn is_permutation(&self) -> bool {
        self.validate_permutation().is_ok()
    }

    /// Returns `true` if every entry maps to its own position.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.iter()
            .enumerate()
            .all(|(position, target)| target.as_usize() == position)
    }

    /// Expresses the same renumbering in the opposite convention.
    ///
    /// The result is the array inverse: if entry `i` is `j` here, entry `j` is
    /// `i` in the result.
    ///
    /// # Panics
    ///
    /// Panics if the mapping is not a permutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use renumber_core::{NewToOld, Var};
    ///
    /// let gather = NewToOld::from_indices([2, 0, 1, 4, 3]);
    /// let scatter = gather.to_opposite();
    /// assert_eq!(scatter.map_var(Var::new(2)), Var::new(0));
    /// assert_eq!(scatter.to_opposite(), gather);
    /// ```
    #[must_use]
    pub fn to_opposite(&self) -> Mapping<D::Opposite> {
        if let Err(err) = self.validate_permutation() {
            panic!("cannot invert {} that is not a permutation: {err}", D::NAME);
        }
        let mut inverted = vec![Var::default(); self.len()];
        for (position, target) in self.iter().enumerate() {
            inverted[target.as_usize()] = Var::from_usize(position);
        }
        Mapping::new(inverted)
    }

    /// Expresses the inverse renumbering in the opposite convention.
    ///
    /// Undoing a renumbering swaps the roles of old and new identifiers, so the
    /// entries stay the same and only the convention changes. Applying a
    /// mapping and then its inverse restores the original container.
    ///
    /// # Panics
    ///
    /// Panics if the mapping is not a permutation of `0..self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use renumber_core::NewToOld;
    ///
    /// let gather = NewToOld::from_indices([2, 0, 1]);
    /// let undo = gather.inverse();
    /// assert_eq!(undo.as_slice(), gather.as_slice());
    /// ```
    #[must_use]
    pub fn inverse(&self) -> Mapping<D::Opposite> {
        if let Err(err) = self.validate_permutation() {
            panic!("cannot undo {} that is not a permutation: {err}", D::NAME);
        }
        Mapping::new(self.targets.clone())
    }

    /// Decomposes the mapping into disjoint cycles.
    ///
    /// Each cycle starts at its smallest identifier and follows the entries:
    /// `c[k + 1] == self[c[k]]`. Fixed points form cycles of length one.
    ///
    /// # Panics
    ///
    /// Panics if the mapping is not a permutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use renumber_core::{NewToOld, Var};
    ///
    /// let map = NewToOld::from_indices([2, 0, 1, 3]);
    /// let cycles = map.cycles();
    /// assert_eq!(cycles.len(), 2);
    /// assert_eq!(cycles[0], [Var::new(0), Var::new(2), Var::new(1)]);
    /// assert_eq!(cycles[1], [Var::new(3)]);
    /// ```
    #[must_use]
    pub fn cycles(&self) -> Vec<Vec<Var>> {
        if let Err(err) = self.validate_permutation() {
            panic!("cannot decompose {} that is not a permutation: {err}", D::NAME);
        }
        let mut visited = vec![false; self.len()];
        let mut cycles = Vec::new();
        for start in 0..self.len() {
            if visited[start] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut current = start;
            while !visited[current] {
                visited[current] = true;
                cycle.push(Var::from_usize(current));
                current = self.targets[current].as_usize();
            }
            cycles.push(cycle);
        }
        cycles
    }
}

impl OldToNew {
    /// Translates an old identifier into its new number.
    ///
    /// # Panics
    ///
    /// Panics if `var` lies outside the mapping's domain.
    #[must_use]
    #[inline]
    pub fn map_var(&self, var: Var) -> Var {
        match self.get(var) {
            Some(mapped) => mapped,
            None => panic!(
                "identifier {var} outside renumbering domain 0..{}",
                self.len()
            ),
        }
    }

    /// Translates an old identifier, or returns `None` if it lies outside the
    /// mapping's domain.
    #[must_use]
    #[inline]
    pub fn try_map_var(&self, var: Var) -> Option<Var> {
        self.get(var)
    }
}

impl<D> Clone for Mapping<D> {
    fn clone(&self) -> Self {
        Self {
            targets: self.targets.clone(),
            _direction: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.targets.clone_from(&source.targets);
    }
}

impl<D> PartialEq for Mapping<D> {
    fn eq(&self, other: &Self) -> bool {
        self.targets == other.targets
    }
}

impl<D> Eq for Mapping<D> {}

impl<D> Hash for Mapping<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.targets.hash(state);
    }
}

impl<D: Direction> Debug for Mapping<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", D::NAME)?;
        f.debug_list()
            .entries(self.targets.iter().map(|target| target.index()))
            .finish()
    }
}

impl<D: Direction> From<Vec<Var>> for Mapping<D> {
    fn from(targets: Vec<Var>) -> Self {
        Self::new(targets)
    }
}

impl<D: Direction> FromIterator<Var> for Mapping<D> {
    fn from_iter<I: IntoIterator<Item = Var>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn vars(indices: &[u32]) -> Vec<Var> {
        indices.iter().copied().map(Var::new).collect()
    }

    #[test]
    fn test_try_permutation_accepts_bijection() {
        let map = NewToOld::try_permutation(vars(&[2, 0, 1, 4, 3])).unwrap();
        assert_eq!(map.len(), 5);
        assert!(map.is_permutation());
        assert!(!map.is_identity());
    }

    #[test]
    fn test_try_permutation_rejects_out_of_range() {
        let err = OldToNew::try_permutation(vars(&[0, 3, 1])).unwrap_err();
        assert_eq!(
            err,
            MappingError::OutOfRange {
                position: 1,
                target: Var::new(3),
                len: 3,
            }
        );
        assert_eq!(err.to_string(), "entry 1 targets 3, outside 0..3");
    }

    #[test]
    fn test_try_permutation_rejects_duplicate() {
        let err = OldToNew::try_permutation(vars(&[1, 0, 2, 0])).unwrap_err();
        assert_eq!(
            err,
            MappingError::DuplicateTarget {
                target: Var::new(0),
                first: 1,
                second: 3,
            }
        );
        assert_eq!(err.to_string(), "target 0 appears at positions 1 and 3");
    }

    #[test]
    fn test_empty_mapping_is_identity_permutation() {
        let map = NewToOld::identity(0);
        assert!(map.is_empty());
        assert!(map.is_permutation());
        assert!(map.is_identity());
        assert!(map.cycles().is_empty());
    }

    #[test]
    fn test_identity() {
        let map = OldToNew::identity(4);
        assert!(map.is_identity());
        assert_eq!(map.to_opposite().as_slice(), map.as_slice());
        assert_eq!(map.cycles().len(), 4);
    }

    #[test]
    fn test_partial_mapping_lookup() {
        let map = OldToNew::from_indices([5, 6, 7]);
        assert!(!map.is_permutation());
        assert_eq!(map.try_map_var(Var::new(2)), Some(Var::new(7)));
        assert_eq!(map.try_map_var(Var::new(10)), None);
        assert_eq!(map.map_var(Var::new(0)), Var::new(5));
    }

    #[test]
    #[should_panic(expected = "identifier 3 outside renumbering domain 0..3")]
    fn test_map_var_outside_domain_panics() {
        let map = OldToNew::from_indices([5, 6, 7]);
        let _ = map.map_var(Var::new(3));
    }

    #[test]
    #[should_panic(expected = "mapping position 4 out of range for NewToOld of length 2")]
    fn test_target_out_of_range_panics() {
        let map = NewToOld::identity(2);
        let _ = map.target(4);
    }

    #[test]
    #[should_panic(expected = "cannot invert OldToNew that is not a permutation")]
    fn test_to_opposite_rejects_partial() {
        let _ = OldToNew::from_indices([5, 6, 7]).to_opposite();
    }

    #[test]
    #[should_panic(expected = "cannot undo NewToOld that is not a permutation")]
    fn test_inverse_rejects_duplicate() {
        let _ = NewToOld::from_indices([0, 0, 2]).inverse();
    }

    #[test]
    #[should_panic(expected = "cannot undo OldToNew that is not a permutation")]
    fn test_inverse_rejects_partial() {
        let _ = OldToNew::from_indices([3, 4]).inverse();
    }

    #[test]
    #[should_panic(expected = "cannot decompose NewToOld that is not a permutation")]
    fn test_cycles_rejects_duplicate() {
        let _ = NewToOld::from_indices([1, 1]).cycles();
    }

    #[test]
    fn test_cycles_follow_entries() {
        let map = NewToOld::from_indices([2, 0, 1, 4, 3]);
        let cycles = map.cycles();
        assert_eq!(cycles, vec![vars(&[0, 2, 1]), vars(&[3, 4])]);
    }

    #[test]
    fn test_debug_names_direction() {
        let map = OldToNew::from_indices([1, 0]);
        assert_eq!(format!("{map:?}"), "OldToNew[1, 0]");
        assert_eq!(format!("{:?}", map.inverse()), "NewToOld[1, 0]");
    }

    fn permutation(max_len: usize) -> impl Strategy<Value = Vec<Var>> {
        (0..=max_len).prop_flat_map(|n| Just(Var::range(n).collect::<Vec<_>>()).prop_shuffle())
    }

    proptest! {
        #[test]
        fn test_to_opposite_is_involution(targets in permutation(32)) {
            let map = NewToOld::new(targets);
            prop_assert_eq!(map.to_opposite().to_opposite(), map);
        }

        #[test]
        fn test_to_opposite_composes_to_identity(targets in permutation(32)) {
            let map = NewToOld::new(targets);
            let opposite = map.to_opposite();
            for (position, target) in map.iter().enumerate() {
                prop_assert_eq!(opposite.target(target.as_usize()).as_usize(), position);
            }
        }

        #[test]
        fn test_cycles_partition_domain(targets in permutation(32)) {
            let map = OldToNew::new(targets);
            let mut covered: Vec<Var> = map.cycles().into_iter().flatten().collect();
            covered.sort();
            prop_assert_eq!(covered, Var::range(map.len()).collect::<Vec<_>>());
        }
    }
}
