use renumber_core::{IndexedSeq, NewToOld};

/// Rewrites `container` so that new slot `i` holds what old slot `mapper[i]`
/// held.
///
/// The original contents are copied first and used as the read source, so
/// every slot sees pre-call data regardless of write order.
///
/// # Panics
///
/// Panics if `mapper.len() != container.len()` or if an entry of `mapper` is
/// not below `container.len()`. The container may be partially rewritten when
/// an out-of-range entry is found.
///
/// # Examples
///
/// ```
/// use renumber::{NewToOld, apply_forward};
///
/// let mut container = vec!['A', 'B', 'C', 'D', 'E'];
/// apply_forward(&mut container, &NewToOld::from_indices([2, 0, 1, 4, 3]));
/// assert_eq!(container, ['C', 'A', 'B', 'E', 'D']);
/// ```
pub fn apply_forward<C>(container: &mut C, mapper: &NewToOld)
where
    C: IndexedSeq + ?Sized,
    C::Item: Clone,
{
    let len = container.len();
    assert_eq!(
        mapper.len(),
        len,
        "forward mapping length does not match container length"
    );
    log::trace!("forward remap over {len} slots");

    let backup = container.snapshot();
    for (slot, source) in mapper.iter().enumerate() {
        let source = source.as_usize();
        assert!(
            source < len,
            "forward mapping entry {slot} reads slot {source}, outside 0..{len}"
        );
        *container.at_mut(slot) = backup[source].clone();
    }
}
