//! Identifier types for renumbered index spaces.
//!
//! [`Var`] names an entity in an index space `[0, N)`. [`Lit`] pairs a [`Var`]
//! with an orientation flag, the way a literal pairs a variable with its
//! polarity.
//!
//! # Examples
//!
//! ```
//! use renumber_core::{Lit, Var};
//!
//! let var = Var::new(3);
//! let lit = Lit::new(var, true);
//! assert_eq!(lit.var(), var);
//! assert!(lit.sign());
//! assert_eq!((!lit).sign(), false);
//! assert_eq!(lit.to_string(), "-x3");
//! ```

use std::{
    fmt::{self, Display},
    ops::Not,
};

/// An identifier in the range `0..=Var::MAX_INDEX`.
///
/// The top bit of the underlying `u32` is reserved so that a [`Lit`] can pack
/// an identifier and its sign into a single `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Var {
    index: u32,
}

impl Var {
    /// The largest representable identifier.
    pub const MAX_INDEX: u32 = u32::MAX >> 1;

    /// Creates a new identifier.
    ///
    /// # Panics
    ///
    /// Panics if `index` exceeds [`Var::MAX_INDEX`].
    ///
    /// # Examples
    ///
    /// ```
    /// use renumber_core::Var;
    ///
    /// let var = Var::new(7);
    /// assert_eq!(var.index(), 7);
    /// ```
    #[must_use]
    pub const fn new(index: u32) -> Self {
        assert!(index <= Self::MAX_INDEX, "identifier out of range");
        Self { index }
    }

    /// Creates an identifier from a container position.
    ///
    /// # Panics
    ///
    /// Panics if `index` exceeds [`Var::MAX_INDEX`].
    #[must_use]
    pub fn from_usize(index: usize) -> Self {
        let Ok(index) = u32::try_from(index) else {
            panic!("identifier {index} does not fit in u32");
        };
        Self::new(index)
    }

    /// Returns the underlying identifier value.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Returns the identifier as a container position.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.index as usize
    }

    /// Returns an iterator over the first `n` identifiers, `0..n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use renumber_core::Var;
    ///
    /// let vars: Vec<_> = Var::range(3).collect();
    /// assert_eq!(vars, [Var::new(0), Var::new(1), Var::new(2)]);
    /// ```
    pub fn range(n: usize) -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..n).map(Self::from_usize)
    }
}

impl Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.index, f)
    }
}

impl From<Var> for u32 {
    fn from(var: Var) -> u32 {
        var.index()
    }
}

impl From<Var> for usize {
    fn from(var: Var) -> usize {
        var.as_usize()
    }
}

/// A polarized identifier: a [`Var`] together with a sign bit.
///
/// Encoded as `var << 1 | sign`, so literals of the same variable are adjacent
/// when sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Lit {
    code: u32,
}

impl Lit {
    /// Creates a literal of `var`. `sign == true` means negated.
    #[must_use]
    pub const fn new(var: Var, sign: bool) -> Self {
        let sign_bit = if sign { 1 } else { 0 };
        Self {
            code: (var.index() << 1) | sign_bit,
        }
    }

    /// Creates the non-negated literal of `var`.
    #[must_use]
    pub const fn positive(var: Var) -> Self {
        Self::new(var, false)
    }

    /// Creates the negated literal of `var`.
    #[must_use]
    pub const fn negative(var: Var) -> Self {
        Self::new(var, true)
    }

    /// Returns the identifier part.
    #[must_use]
    pub const fn var(self) -> Var {
        Var::new(self.code >> 1)
    }

    /// Returns the sign part; `true` means negated.
    #[must_use]
    pub const fn sign(self) -> bool {
        self.code & 1 == 1
    }

    /// Returns a literal with the same sign over a different identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use renumber_core::{Lit, Var};
    ///
    /// let lit = Lit::negative(Var::new(4));
    /// let moved = lit.with_var(Var::new(1));
    /// assert_eq!(moved, Lit::negative(Var::new(1)));
    /// ```
    #[must_use]
    pub const fn with_var(self, var: Var) -> Self {
        Self::new(var, self.sign())
    }
}

impl Not for Lit {
    type Output = Self;

    fn not(self) -> Self {
        Self {
            code: self.code ^ 1,
        }
    }
}

impl Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign() {
            write!(f, "-x{}", self.var())
        } else {
            write!(f, "x{}", self.var())
        }
    }
}
