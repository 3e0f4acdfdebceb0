use renumber_core::{IndexedSeq, OldToNew, SeenMarkers};

/// Rewrites `container` so that what old slot `i` held moves to slot
/// `mapper[i]`, for every `i` in `0..mapper.len()`.
///
/// This is the scatter counterpart of [`apply_forward`]: for a permutation `p`,
/// `apply_reverse(c, &p.to_opposite())` yields the same contents as
/// `apply_forward(c, &p)`. Slots at or beyond `mapper.len()` are left
/// unmodified. The first `mapper.len()` elements are copied before any write.
///
/// [`apply_forward`]: crate::apply_forward
///
/// # Panics
///
/// Panics if `mapper` is longer than `container`, if an entry of `mapper` is
/// not below `mapper.len()`, or if two entries write the same slot. The
/// mapping is checked before any write, so the container is left untouched.
///
/// # Examples
///
/// ```
/// use renumber::{OldToNew, apply_reverse};
///
/// let mut container = vec!['A', 'B', 'C', 'X'];
/// apply_reverse(&mut container, &OldToNew::from_indices([1, 2, 0]));
/// assert_eq!(container, ['C', 'A', 'B', 'X']);
/// ```
pub fn apply_reverse<C>(container: &mut C, mapper: &OldToNew)
where
    C: IndexedSeq + ?Sized,
    C::Item: Clone,
{
    let len = container.len();
    assert!(
        mapper.len() <= len,
        "reverse mapping of length {} exceeds container length {len}",
        mapper.len()
    );
    let domain = mapper.len();
    let mut written = SeenMarkers::new(domain);
    for (slot, target) in mapper.iter().enumerate() {
        let target = target.as_usize();
        assert!(
            target < domain,
            "reverse mapping entry {slot} writes slot {target}, outside 0..{domain}"
        );
        let first_write = written.mark(target);
        assert!(
            first_write,
            "reverse mapping is not a permutation: slot {target} written twice"
        );
    }
    log::trace!("reverse remap of {domain} of {len} slots");

    let backup: Vec<_> = (0..domain).map(|slot| container.at(slot).clone()).collect();
    for (target, value) in mapper.iter().zip(backup) {
        *container.at_mut(target.as_usize()) = value;
    }
}
