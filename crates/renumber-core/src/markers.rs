//! Reusable per-slot scratch flags.

/// A caller-owned array of per-slot flags, all `false` between uses.
///
/// In-place permutation needs to remember which slots a cycle has already
/// visited. Allocating that array on every call is wasteful when the same
/// identifier space is renumbered repeatedly, so the caller owns it and passes
/// it in. Every user must leave it clear ([`SeenMarkers::is_clear`]) on return.
///
/// # Examples
///
/// ```
/// use renumber_core::SeenMarkers;
///
/// let mut seen = SeenMarkers::new(3);
/// assert!(seen.mark(1));
/// assert!(!seen.mark(1));
/// assert!(seen.is_marked(1));
/// seen.clear();
/// assert!(seen.is_clear());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeenMarkers {
    marks: Vec<bool>,
}

impl SeenMarkers {
    /// Creates `len` clear markers.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            marks: vec![false; len],
        }
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns `true` if no slot is marked.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        !self.marks.contains(&true)
    }

    /// Returns whether slot `index` is marked.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    #[inline]
    pub fn is_marked(&self, index: usize) -> bool {
        self.marks[index]
    }

    /// Marks slot `index`, returning `true` if it was previously clear.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn mark(&mut self, index: usize) -> bool {
        !std::mem::replace(&mut self.marks[index], true)
    }

    /// Clears every slot.
    pub fn clear(&mut self) {
        self.marks.fill(false);
    }

    /// Grows or shrinks to `len` slots.
    ///
    /// # Panics
    ///
    /// Panics if any slot is marked.
    pub fn resize(&mut self, len: usize) {
        assert!(self.is_clear(), "cannot resize markers while slots are marked");
        self.marks.resize(len, false);
    }
}
