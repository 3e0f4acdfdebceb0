use renumber_core::{IndexedSeq, NewToOld, SeenMarkers};

/// Permutes `container` in place so that new slot `i` holds what old slot
/// `mapper[i]` held, returning the number of cycles walked.
///
/// The result equals [`apply_forward`] with the same mapping, but no copy of
/// the container is taken. Each cycle of the permutation is followed by
/// swapping along it; `seen` records the slots a cycle has already settled.
///
/// `seen` must be clear on entry and is clear again on return, so one buffer
/// can serve any number of calls over the same identifier space.
///
/// [`apply_forward`]: crate::apply_forward
///
/// # Panics
///
/// Panics if `mapper`, `seen` and `container` differ in length, if `seen` is
/// not clear, if an entry of `mapper` is out of range, or if `mapper` is not a
/// permutation (a slot is reached twice before its cycle closes). The
/// container and `seen` are left in an unspecified state after a panic.
///
/// # Examples
///
/// ```
/// use renumber::{NewToOld, SeenMarkers, apply_in_place};
///
/// let mut seen = SeenMarkers::new(5);
/// let mut container = vec!['A', 'B', 'C', 'D', 'E'];
/// let cycles = apply_in_place(&mut container, &mut seen, &NewToOld::from_indices([2, 0, 1, 4, 3]));
/// assert_eq!(container, ['C', 'A', 'B', 'E', 'D']);
/// assert_eq!(cycles, 2);
/// assert!(seen.is_clear());
/// ```
pub fn apply_in_place<C>(container: &mut C, seen: &mut SeenMarkers, mapper: &NewToOld) -> usize
where
    C: IndexedSeq + ?Sized,
{
    let len = container.len();
    assert_eq!(
        mapper.len(),
        len,
        "in-place mapping length does not match container length"
    );
    assert_eq!(
        seen.len(),
        len,
        "seen markers length does not match container length"
    );
    assert!(seen.is_clear(), "seen markers must be clear on entry");

    let mut cycles = 0;
    for start in 0..len {
        if seen.is_marked(start) {
            continue;
        }
        cycles += 1;

        let mut current = start;
        loop {
            let swap_with = mapper.target(current).as_usize();
            assert!(
                swap_with < len,
                "in-place mapping entry {current} reads slot {swap_with}, outside 0..{len}"
            );
            let first_visit = seen.mark(swap_with);
            assert!(
                first_visit,
                "mapping is not a permutation: slot {swap_with} reached twice in the cycle from {start}"
            );
            container.swap_at(current, swap_with);
            current = swap_with;

            if mapper.target(current).as_usize() == start {
                seen.mark(start);
                break;
            }
        }
    }

    seen.clear();
    log::debug!("in-place remap over {len} slots walked {cycles} cycles");
    cycles
}
