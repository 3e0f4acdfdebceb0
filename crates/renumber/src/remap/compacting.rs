use renumber_core::{IndexedSeq, OldToNew, Var};

/// Renumbers identifier-valued entries of `container` through `mapper`.
///
/// Each entry `e` with `e < mapper.len()` becomes `mapper[e]`. Entries outside
/// the mapping's domain are left as they are: after a space has been compacted,
/// references to identifiers beyond the retained range are passed through
/// rather than rejected. Container and mapping lengths are unrelated.
///
/// Entries are rewritten independently, so no copy of the container is taken.
///
/// # Examples
///
/// ```
/// use renumber::{OldToNew, Var, apply_compacting};
///
/// let mut refs: Vec<Var> = [10, 2, 99].into_iter().map(Var::new).collect();
/// apply_compacting(&mut refs, &OldToNew::from_indices([5, 6, 7]));
/// assert_eq!(refs, [Var::new(10), Var::new(7), Var::new(99)]);
/// ```
pub fn apply_compacting<C>(container: &mut C, mapper: &OldToNew)
where
    C: IndexedSeq<Item = Var> + ?Sized,
{
    let mut translated = 0_usize;
    for slot in 0..container.len() {
        let entry = container.at_mut(slot);
        if let Some(mapped) = mapper.try_map_var(*entry) {
            *entry = mapped;
            translated += 1;
        }
    }
    log::trace!(
        "compacting remap translated {translated} of {} entries",
        container.len()
    );
}
