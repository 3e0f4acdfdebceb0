//! Proptest strategies shared by the remapping tests.

use proptest::{collection::vec, prelude::*};
use renumber_core::{Direction, Lit, Mapping, Var};

/// Values small enough to repeat, so that equal elements at different slots
/// are exercised.
pub(crate) fn container(max_len: usize) -> impl Strategy<Value = Vec<u16>> {
    vec(0..16u16, 0..=max_len)
}

/// A random permutation of `0..len`.
pub(crate) fn permutation<D: Direction>(len: usize) -> impl Strategy<Value = Mapping<D>> {
    Just(Var::range(len).collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(Mapping::new)
}

/// A container together with a permutation of its slots.
pub(crate) fn container_with_permutation<D: Direction>(
    max_len: usize,
) -> impl Strategy<Value = (Vec<u16>, Mapping<D>)> {
    container(max_len).prop_flat_map(|container| {
        let len = container.len();
        (Just(container), permutation(len))
    })
}

/// Identifiers drawn from a range twice as wide as the mapping built for
/// them, so that roughly half fall outside its domain.
pub(crate) fn vars_with_partial_mapping<D: Direction>(
    max_len: usize,
) -> impl Strategy<Value = (Vec<Var>, Mapping<D>)> {
    (1..=max_len).prop_flat_map(move |domain| {
        let wide = u32::try_from(domain * 2).unwrap();
        (
            vec((0..wide).prop_map(Var::new), 0..=max_len),
            vec((0..wide).prop_map(Var::new), domain).prop_map(Mapping::new),
        )
    })
}

/// Literals over the same identifier range as [`vars_with_partial_mapping`].
pub(crate) fn lits_with_partial_mapping<D: Direction>(
    max_len: usize,
) -> impl Strategy<Value = (Vec<Lit>, Mapping<D>)> {
    vars_with_partial_mapping(max_len).prop_flat_map(|(vars, mapper)| {
        let len = vars.len();
        (Just(vars), vec(any::<bool>(), len), Just(mapper)).prop_map(|(vars, signs, mapper)| {
            let lits = vars
                .into_iter()
                .zip(signs)
                .map(|(var, sign)| Lit::new(var, sign))
                .collect();
            (lits, mapper)
        })
    })
}
