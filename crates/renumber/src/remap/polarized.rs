use renumber_core::{IndexedSeq, Lit, OldToNew};

/// Renumbers the identifier of a single literal, keeping its sign.
///
/// # Panics
///
/// Panics if the literal's identifier lies outside the mapping's domain. Use
/// [`apply_polarized`] for pass-through behavior on such literals.
///
/// # Examples
///
/// ```
/// use renumber::{Lit, OldToNew, Var, remap_one};
///
/// let mapper = OldToNew::from_indices([2, 0, 1]);
/// let lit = Lit::negative(Var::new(0));
/// assert_eq!(remap_one(lit, &mapper), Lit::negative(Var::new(2)));
/// ```
#[must_use]
#[inline]
pub fn remap_one(lit: Lit, mapper: &OldToNew) -> Lit {
    lit.with_var(mapper.map_var(lit.var()))
}

/// Renumbers the identifiers of the literals in `container`, keeping signs.
///
/// A literal whose identifier is below `mapper.len()` is replaced by
/// [`remap_one`]; any other literal is left as it is, the same pass-through
/// policy as [`apply_compacting`].
///
/// [`apply_compacting`]: crate::apply_compacting
///
/// # Examples
///
/// ```
/// use renumber::{Lit, OldToNew, Var, apply_polarized};
///
/// let mut clause = vec![
///     Lit::positive(Var::new(1)),
///     Lit::negative(Var::new(0)),
///     Lit::negative(Var::new(8)),
/// ];
/// apply_polarized(&mut clause, &OldToNew::from_indices([3, 4]));
/// assert_eq!(
///     clause,
///     [
///         Lit::positive(Var::new(4)),
///         Lit::negative(Var::new(3)),
///         Lit::negative(Var::new(8)),
///     ]
/// );
/// ```
pub fn apply_polarized<C>(container: &mut C, mapper: &OldToNew)
where
    C: IndexedSeq<Item = Lit> + ?Sized,
{
    let mut translated = 0_usize;
    for slot in 0..container.len() {
        let lit = container.at_mut(slot);
        if lit.var().as_usize() < mapper.len() {
            *lit = remap_one(*lit, mapper);
            translated += 1;
        }
    }
    log::trace!(
        "polarized remap translated {translated} of {} literals",
        container.len()
    );
}
