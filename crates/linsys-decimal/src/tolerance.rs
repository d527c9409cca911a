//! Working precision, the shared near-zero tolerance and related helpers.
//!
//! Every geometric degeneracy decision (pivot detection, parallelism,
//! orthogonality, base points) goes through the predicate defined here, so
//! there is exactly one tolerance in the whole workspace.

use std::sync::OnceLock;

use dashu::float::DBig;
use dashu::integer::IBig;
use num_traits::Zero;

use crate::Scalar;

/// Significant decimal digits carried by every [`Scalar`].
pub const PRECISION: usize = 30;

/// Magnitudes below `10^TOLERANCE_EXPONENT` are treated as zero.
pub const TOLERANCE_EXPONENT: isize = -10;

/// The tolerance as a raw decimal, built once.
pub(crate) fn tolerance() -> &'static DBig {
    static TOLERANCE: OnceLock<DBig> = OnceLock::new();
    TOLERANCE.get_or_init(|| DBig::from_parts(IBig::ONE, TOLERANCE_EXPONENT))
}

/// Returns true if `a` and `b` differ by less than the tolerance.
#[must_use]
pub fn approx_eq(a: &Scalar, b: &Scalar) -> bool {
    (a - b).is_zero()
}

/// Returns the index of the first entry that is not (near-)zero.
///
/// ```
/// use linsys_decimal::{first_nonzero_index, Scalar};
///
/// let row = [Scalar::from(0), Scalar::from(0), Scalar::from(4)];
/// assert_eq!(first_nonzero_index(&row), Some(2));
/// ```
pub fn first_nonzero_index<'a, I>(values: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a Scalar>,
{
    values.into_iter().position(|v| !v.is_zero())
}
