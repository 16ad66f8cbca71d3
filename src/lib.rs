//! Thin, strongly-typed wrappers around fixed-rank arrays, plus the small
//! value types and ordering helpers that tend to accumulate around them.
//!
//! [`Array2<T>`] and [`Array3<T>`] store their elements in a dense
//! [`Box<[T]>`] in row-major order and make the storage look like a two- or
//! three-dimensional collection: coordinate indexing, enumeration (forwards
//! and backwards), equality, and conversion between coordinates and flat
//! positions. The conversion arithmetic lives in [`Dims2`] and [`Dims3`] and
//! is shared by the read-only [`ArrayView2`]/[`ArrayView3`] borrows, the
//! rectangular [`Window2`]/[`Window3`] sub-ranges, and the rebased
//! [`OffsetArray2`]/[`OffsetArray3`] variants whose axes start at arbitrary
//! lower bounds.
//!
//! Around the arrays:
//!
//! - [`tuple`] provides small fixed-arity value types ([`Int2`]..[`Int6`],
//!   [`Bool8`]) with parse/format round-tripping.
//! - [`compare`] composes `Ordering`-returning closures for multi-key
//!   sorting, and compares by reference identity ([`ByAddress`]).
//! - [`Scalar`] describes the primitive scalar types (kind, width, extreme
//!   values) with associated constants instead of run-time inspection.

mod layout;
pub use layout::{Dims2, Dims3};

mod array;
pub use array::{Array2, Array3};

mod offset;
pub use offset::{OffsetArray2, OffsetArray3};

mod view;
pub use view::{ArrayView2, ArrayView3, Window2, Window3};

mod iter;
pub use iter::{Indices2, Indices3, Indexed2, Indexed3, WindowIter2, WindowIter3};

pub mod tuple;
pub use tuple::{Int2, Int3, Int4, Int5, Int6, Bool8, Flags8, ParseTupleError, ParseBitsError};

pub mod compare;
pub use compare::ByAddress;

mod scalar;
pub use scalar::{Scalar, ScalarKind, Nullable, is_numeric, is_integer, range_of};

mod empty;
pub use empty::{empty_slice, empty_str};

/// Returns `(index / divisor, index % divisor)`.
///
/// A single division instruction computes both on every mainstream target.
#[inline(always)]
pub(crate) fn div_mod(index: usize, divisor: usize) -> (usize, usize) {
    (index / divisor, index % divisor)
}
