//! Order-statistics [selection] (e.g., minimum/maximum, *k*-th distinct, range,
//! ceiling/floor) with caller-supplied comparators, plus the stable
//! comparator-parameterized [merge sort] backing it, for 1-dimensional
//! [`ndarray`] arrays and (sub)views with arbitrary memory layout (e.g.,
//! non-contiguous).
//!
//! Every selection takes the input by shared reference and returns a
//! [`Result`], so the input is never mutated and a selection without an answer
//! is an ordinary [`SelectError::NotFound`] value rather than a panic.
//! Operations needing an ordered working copy (e.g., [`kth_min`]) clone into
//! private storage and sort there.
//!
//! # Example
//!
//! ```
//! use ndarray_select::{Select1Ext, ndarray::arr2};
//!
//! // 2-dimensional array of 4 rows and 5 columns.
//! let v = arr2(&[[-5, 4, 1, -3,  2],   // row 0, axis 0
//!                [ 8, 3, 2,  4,  8],   // row 1, axis 0
//!                [38, 9, 3,  0,  3],   // row 2, axis 0
//!                [ 4, 9, 0,  8, -1]]); // row 3, axis 0
//!
//! // Due to row-major memory layout, columns are non-contiguous subviews,
//! // selection works on them all the same.
//! let column = v.column(4);
//!
//! assert_eq!(column.min(), Ok(&-1));
//! assert_eq!(column.kth_max(2), Ok(3));
//! assert_eq!(column.ceiling(&4), Ok(&8));
//! ```
//!
//! # Current Implementation
//!
//! Complexities where *n* is the length of the (sub)view.
//!
//! | Operation | Time | Auxiliary Space |
//! |---|---|---|
//! | `min`, `max`, `ceiling`, `floor` | *O*(*n*) | *O*(1) |
//! | `range` | *O*(*n*) | *O*(*n*) |
//! | `kth_min`, `kth_max` | *O*(*n* log *n*) | *O*(*n*) |
//! | `merge_sort` | *O*(*n* log *n*) | *O*(*n*) |
//!
//! [selection]: https://en.wikipedia.org/wiki/Selection_algorithm
//! [merge sort]: https://en.wikipedia.org/wiki/Merge_sort
//!
//! [`kth_min`]: Select1Ext::kth_min
//!
//! # Features
//!
//!   * `alloc` for the operations backed by a working copy or collecting into
//!     a new array: `kth_min`/`kth_max`, `range` and `merge_sort`. Enabled by
//!     `std`.
//!   * `std` enabled by `default`.
//!   * `tracing` for trace-level instrumentation of the allocating operations.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(all(feature = "alloc", feature = "tracing"))]
macro_rules! trace {
	($($arg:tt)*) => { tracing::trace!($($arg)*) };
}
#[cfg(all(feature = "alloc", not(feature = "tracing")))]
macro_rules! trace {
	($($arg:tt)*) => {{}};
}

mod bound;
mod error;
mod extremum;
mod kth_distinct;
mod merge_sort;
mod range;
mod sorted;

use crate::bound::{ceiling, floor};
use crate::extremum::{max, min};
#[cfg(feature = "alloc")]
use crate::kth_distinct::{kth_max, kth_min};
#[cfg(feature = "alloc")]
use crate::merge_sort::merge_sort;
#[cfg(feature = "alloc")]
use crate::range::range;
use crate::sorted::is_sorted;
use core::cmp::Ordering::{self, Less};
#[cfg(feature = "alloc")]
use ndarray::Array1;
use ndarray::{ArrayBase, Data, DataMut, Ix1};

pub use crate::error::SelectError;
pub use ndarray;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array
/// or (sub)view with arbitrary memory layout (e.g., non-contiguous) providing
/// order-statistics [selection] and stable [sorting] driven by a
/// caller-supplied total order.
///
/// Every operation exists in three flavors: the natural order of `A: Ord`, a
/// `_by` flavor taking a comparator function, and a `_by_key` flavor taking a
/// key extraction function. The comparator must define a total ordering for
/// the elements in the array, i.e. it is (for all `a`, `b` and `c`):
///
/// * total and antisymmetric: exactly one of `a < b`, `a == b` or `a > b` is
///   true, and
/// * transitive, `a < b` and `b < c` implies `a < c`. The same must hold for
///   both `==` and `>`.
///
/// Selections never mutate the array they select from; working storage, where
/// needed, is allocated per call and discarded before the call returns.
///
/// [selection]: https://en.wikipedia.org/wiki/Selection_algorithm
/// [sorting]: https://en.wikipedia.org/wiki/Sorting_algorithm
pub trait Select1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Selects the minimum element.
	///
	/// Single linear scan; among equal minima the first in iteration order is
	/// returned, as only a strictly lesser element replaces the running
	/// minimum.
	///
	/// # Errors
	///
	/// [`SelectError::NotFound`] when the array is empty.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_select::{Select1Ext, SelectError, ndarray::arr1};
	///
	/// let v = arr1(&[-5, 4, 1, -3, 2]);
	/// assert_eq!(v.min(), Ok(&-5));
	///
	/// let empty = arr1::<i32>(&[]);
	/// assert_eq!(empty.min(), Err(SelectError::NotFound));
	/// ```
	fn min(&self) -> Result<&A, SelectError>
	where
		A: Ord;
	/// Selects the minimum element with a comparator function.
	///
	/// For example, while [`f64`] doesn't implement [`Ord`] because
	/// `NaN != NaN`, we can use `partial_cmp` as our comparator when we know
	/// the array doesn't contain a `NaN`.
	///
	/// # Errors
	///
	/// [`SelectError::NotFound`] when the array is empty.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_select::{Select1Ext, ndarray::arr1};
	///
	/// let floats = arr1(&[5f64, 4.0, 1.0, 3.0, 2.0]);
	/// assert_eq!(floats.min_by(|a, b| a.partial_cmp(b).unwrap()), Ok(&1.0));
	/// ```
	fn min_by<F>(&self, compare: F) -> Result<&A, SelectError>
	where
		F: FnMut(&A, &A) -> Ordering;
	/// Selects the minimum element with a key extraction function.
	///
	/// # Errors
	///
	/// [`SelectError::NotFound`] when the array is empty.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_select::{Select1Ext, ndarray::arr1};
	///
	/// let v = arr1(&[-5i32, 4, 1, -3, 2]);
	/// assert_eq!(v.min_by_key(|a| a.abs()), Ok(&1));
	/// ```
	fn min_by_key<K, F>(&self, f: F) -> Result<&A, SelectError>
	where
		K: Ord,
		F: FnMut(&A) -> K;

	/// Selects the maximum element.
	///
	/// Single linear scan; among equal maxima the first in iteration order is
	/// returned, see [`min`](Select1Ext::min).
	///
	/// # Errors
	///
	/// [`SelectError::NotFound`] when the array is empty.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_select::{Select1Ext, ndarray::arr1};
	///
	/// let v = arr1(&[-5, 4, 1, -3, 2]);
	/// assert_eq!(v.max(), Ok(&4));
	/// ```
	fn max(&self) -> Result<&A, SelectError>
	where
		A: Ord;
	/// Selects the maximum element with a comparator function.
	///
	/// # Errors
	///
	/// [`SelectError::NotFound`] when the array is empty.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_select::{Select1Ext, ndarray::arr1};
	///
	/// let floats = arr1(&[5f64, 4.0, 1.0, 3.0, 2.0]);
	/// assert_eq!(floats.max_by(|a, b| a.partial_cmp(b).unwrap()), Ok(&5.0));
	/// ```
	fn max_by<F>(&self, compare: F) -> Result<&A, SelectError>
	where
		F: FnMut(&A, &A) -> Ordering;
	/// Selects the maximum element with a key extraction function.
	///
	/// # Errors
	///
	/// [`SelectError::NotFound`] when the array is empty.
	fn max_by_key<K, F>(&self, f: F) -> Result<&A, SelectError>
	where
		K: Ord,
		F: FnMut(&A) -> K;

	/// Selects the `k`-th distinct minimum, cloned out of a sorted working
	/// copy.
	///
	/// Duplicates count once: `kth_min(1)` is the minimum and `kth_min(2)` the
	/// smallest value greater than it, however often either occurs. Two
	/// elements are the same distinct value exactly when the order puts
	/// neither before the other; structural equality is not consulted.
	///
	/// # Current Implementation
	///
	/// Clones the array into a working copy, sorts it ascending with
	/// [`merge_sort_by`](Select1Ext::merge_sort_by) and scans forwards
	/// counting distinct values, *O*(*n* log *n*). The input is left
	/// untouched.
	///
	/// # Errors
	///
	/// [`SelectError::NotFound`] when the array is empty, `k == 0`, or fewer
	/// than `k` distinct values exist.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_select::{Select1Ext, SelectError, ndarray::arr1};
	///
	/// let v = arr1(&[1, 2, 2, 3, 4, 5, 6, 6, 8]);
	/// assert_eq!(v.kth_min(1), Ok(1));
	/// assert_eq!(v.kth_min(3), Ok(3));
	///
	/// let v = arr1(&[1, 1, 2, 2, 3]);
	/// assert_eq!(v.kth_min(4), Err(SelectError::NotFound));
	/// ```
	#[cfg(feature = "alloc")]
	fn kth_min(&self, k: usize) -> Result<A, SelectError>
	where
		A: Clone + Ord;
	/// Selects the `k`-th distinct minimum with a comparator function.
	///
	/// See [`kth_min`](Select1Ext::kth_min); distinct values are grouped by
	/// the comparator returning [`Ordering::Equal`].
	///
	/// # Errors
	///
	/// [`SelectError::NotFound`] when the array is empty, `k == 0`, or fewer
	/// than `k` distinct values exist.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_select::{Select1Ext, ndarray::arr1};
	///
	/// let v = arr1(&[1, 2, 2, 3]);
	///
	/// // Reversing the order selects from the other end.
	/// assert_eq!(v.kth_min_by(2, |a, b| b.cmp(a)), Ok(2));
	/// ```
	#[cfg(feature = "alloc")]
	fn kth_min_by<F>(&self, k: usize, compare: F) -> Result<A, SelectError>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering;
	/// Selects the `k`-th distinct minimum with a key extraction function.
	///
	/// # Errors
	///
	/// [`SelectError::NotFound`] when the array is empty, `k == 0`, or fewer
	/// than `k` distinct keys exist.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_select::{Select1Ext, ndarray::arr1};
	///
	/// let v = arr1(&[-1i32, 1, -2, 3]);
	/// assert_eq!(v.kth_min_by_key(2, |a| a.abs()), Ok(-2));
	/// ```
	#[cfg(feature = "alloc")]
	fn kth_min_by_key<K, F>(&self, k: usize, f: F) -> Result<A, SelectError>
	where
		A: Clone,
		K: Ord,
		F: FnMut(&A) -> K;

	/// Selects the `k`-th distinct maximum, cloned out of a sorted working
	/// copy.
	///
	/// The mirror image of [`kth_min`](Select1Ext::kth_min): the same
	/// ascending working copy is scanned backwards.
	///
	/// # Errors
	///
	/// [`SelectError::NotFound`] when the array is empty, `k == 0`, or fewer
	/// than `k` distinct values exist.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_select::{Select1Ext, ndarray::arr1};
	///
	/// let v = arr1(&[1, 2, 2, 3, 4, 5, 6, 6, 8]);
	/// assert_eq!(v.kth_max(1), Ok(8));
	/// assert_eq!(v.kth_max(2), Ok(6));
	/// ```
	#[cfg(feature = "alloc")]
	fn kth_max(&self, k: usize) -> Result<A, SelectError>
	where
		A: Clone + Ord;
	/// Selects the `k`-th distinct maximum with a comparator function.
	///
	/// # Errors
	///
	/// [`SelectError::NotFound`] when the array is empty, `k == 0`, or fewer
	/// than `k` distinct values exist.
	#[cfg(feature = "alloc")]
	fn kth_max_by<F>(&self, k: usize, compare: F) -> Result<A, SelectError>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering;
	/// Selects the `k`-th distinct maximum with a key extraction function.
	///
	/// # Errors
	///
	/// [`SelectError::NotFound`] when the array is empty, `k == 0`, or fewer
	/// than `k` distinct keys exist.
	#[cfg(feature = "alloc")]
	fn kth_max_by_key<K, F>(&self, k: usize, f: F) -> Result<A, SelectError>
	where
		A: Clone,
		K: Ord,
		F: FnMut(&A) -> K;

	/// Collects every element between `low` and `high` inclusive into a new
	/// array.
	///
	/// Input iteration order and duplicates are preserved; the bounds need not
	/// be elements themselves. The input is left untouched.
	///
	/// # Errors
	///
	/// [`SelectError::NotFound`] when the array is empty or no element lies
	/// within the bounds.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_select::{Select1Ext, SelectError, ndarray::arr1};
	///
	/// let v = arr1(&[1, 5, 5, 7, 9]);
	/// assert_eq!(v.range(&5, &7), Ok(arr1(&[5, 5, 7])));
	///
	/// let v = arr1(&[1, 2, 3]);
	/// assert_eq!(v.range(&10, &20), Err(SelectError::NotFound));
	/// ```
	#[cfg(feature = "alloc")]
	fn range(&self, low: &A, high: &A) -> Result<Array1<A>, SelectError>
	where
		A: Clone + Ord;
	/// Collects every element between `low` and `high` inclusive under a
	/// comparator function.
	///
	/// # Errors
	///
	/// [`SelectError::NotFound`] when the array is empty or no element lies
	/// within the bounds.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_select::{Select1Ext, ndarray::arr1};
	///
	/// let v = arr1(&[1, 5, 5, 7, 9]);
	///
	/// // Under the reversed order the bounds swap roles.
	/// assert_eq!(v.range_by(&7, &5, |a, b| b.cmp(a)), Ok(arr1(&[5, 5, 7])));
	/// ```
	#[cfg(feature = "alloc")]
	fn range_by<F>(&self, low: &A, high: &A, compare: F) -> Result<Array1<A>, SelectError>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering;
	/// Collects every element whose key lies between the keys of `low` and
	/// `high` inclusive.
	///
	/// # Errors
	///
	/// [`SelectError::NotFound`] when the array is empty or no element lies
	/// within the bounds.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_select::{Select1Ext, ndarray::arr1};
	///
	/// let v = arr1(&[-6i32, 2, -3, 8]);
	/// assert_eq!(v.range_by_key(&3, &6, |a| a.abs()), Ok(arr1(&[-6, -3])));
	/// ```
	#[cfg(feature = "alloc")]
	fn range_by_key<K, F>(&self, low: &A, high: &A, f: F) -> Result<Array1<A>, SelectError>
	where
		A: Clone,
		K: Ord,
		F: FnMut(&A) -> K;

	/// Selects the smallest element greater than or equal to `key`.
	///
	/// `key` itself need not be an element; single linear scan.
	///
	/// # Errors
	///
	/// [`SelectError::NotFound`] when the array is empty or no element is
	/// greater than or equal to `key`.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_select::{Select1Ext, SelectError, ndarray::arr1};
	///
	/// let v = arr1(&[1, 4, 7, 10]);
	/// assert_eq!(v.ceiling(&5), Ok(&7));
	/// assert_eq!(v.ceiling(&7), Ok(&7));
	/// assert_eq!(v.ceiling(&11), Err(SelectError::NotFound));
	/// ```
	fn ceiling(&self, key: &A) -> Result<&A, SelectError>
	where
		A: Ord;
	/// Selects the smallest element greater than or equal to `key` under a
	/// comparator function.
	///
	/// # Errors
	///
	/// [`SelectError::NotFound`] when the array is empty or no element is
	/// greater than or equal to `key` under `compare`.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_select::{Select1Ext, ndarray::arr1};
	///
	/// let v = arr1(&[1, 4, 7, 10]);
	///
	/// // Under the reversed order the ceiling turns into the floor.
	/// assert_eq!(v.ceiling_by(&5, |a, b| b.cmp(a)), Ok(&4));
	/// ```
	fn ceiling_by<F>(&self, key: &A, compare: F) -> Result<&A, SelectError>
	where
		F: FnMut(&A, &A) -> Ordering;
	/// Selects the element whose key is the smallest greater than or equal to
	/// the key of `key`.
	///
	/// # Errors
	///
	/// [`SelectError::NotFound`] when the array is empty or no element
	/// qualifies.
	fn ceiling_by_key<K, F>(&self, key: &A, f: F) -> Result<&A, SelectError>
	where
		K: Ord,
		F: FnMut(&A) -> K;

	/// Selects the largest element less than or equal to `key`.
	///
	/// The mirror image of [`ceiling`](Select1Ext::ceiling).
	///
	/// # Errors
	///
	/// [`SelectError::NotFound`] when the array is empty or no element is
	/// less than or equal to `key`.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_select::{Select1Ext, SelectError, ndarray::arr1};
	///
	/// let v = arr1(&[1, 4, 7, 10]);
	/// assert_eq!(v.floor(&5), Ok(&4));
	/// assert_eq!(v.floor(&0), Err(SelectError::NotFound));
	/// ```
	fn floor(&self, key: &A) -> Result<&A, SelectError>
	where
		A: Ord;
	/// Selects the largest element less than or equal to `key` under a
	/// comparator function.
	///
	/// # Errors
	///
	/// [`SelectError::NotFound`] when the array is empty or no element is
	/// less than or equal to `key` under `compare`.
	fn floor_by<F>(&self, key: &A, compare: F) -> Result<&A, SelectError>
	where
		F: FnMut(&A, &A) -> Ordering;
	/// Selects the element whose key is the largest less than or equal to the
	/// key of `key`.
	///
	/// # Errors
	///
	/// [`SelectError::NotFound`] when the array is empty or no element
	/// qualifies.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_select::{Select1Ext, ndarray::arr1};
	///
	/// let v = arr1(&[-7i32, -2, 3]);
	/// assert_eq!(v.floor_by_key(&-4, |a| a.abs()), Ok(&3));
	/// ```
	fn floor_by_key<K, F>(&self, key: &A, f: F) -> Result<&A, SelectError>
	where
		K: Ord,
		F: FnMut(&A) -> K;

	/// Sorts the array.
	///
	/// This sort is stable (i.e., does not reorder equal elements) and
	/// *O*(*n* log *n*) worst-case.
	///
	/// # Current Implementation
	///
	/// Classic top-down [merge sort]: the active range is split at its
	/// midpoint, both halves are sorted recursively and merged through an
	/// auxiliary buffer of clones. The buffer is allocated once per call and
	/// reused by every merge.
	///
	/// [merge sort]: https://en.wikipedia.org/wiki/Merge_sort
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_select::{Select1Ext, ndarray::arr1};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.merge_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	#[cfg(feature = "alloc")]
	fn merge_sort(&mut self)
	where
		A: Clone + Ord,
		S: DataMut;
	/// Sorts the array with a comparator function.
	///
	/// This sort is stable (i.e., does not reorder equal elements) and
	/// *O*(*n* log *n*) worst-case, see [`merge_sort`](Select1Ext::merge_sort).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_select::{Select1Ext, ndarray::arr1};
	///
	/// let mut v = arr1(&[5, 4, 1, 3, 2]);
	/// v.merge_sort_by(|a, b| a.cmp(b));
	/// assert!(v == arr1(&[1, 2, 3, 4, 5]));
	///
	/// // reverse sorting
	/// v.merge_sort_by(|a, b| b.cmp(a));
	/// assert!(v == arr1(&[5, 4, 3, 2, 1]));
	/// ```
	#[cfg(feature = "alloc")]
	fn merge_sort_by<F>(&mut self, compare: F)
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Sorts the array with a key extraction function.
	///
	/// This sort is stable (i.e., does not reorder equal elements) and
	/// *O*(*mn* log *n*) worst-case, where the key function is *O*(*m*).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_select::{Select1Ext, ndarray::arr1};
	///
	/// let mut v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// v.merge_sort_by_key(|k| k.abs());
	/// assert!(v == arr1(&[1, 2, -3, 4, -5]));
	/// ```
	#[cfg(feature = "alloc")]
	fn merge_sort_by_key<K, F>(&mut self, f: F)
	where
		A: Clone,
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut;

	/// Checks if the elements of this array are sorted.
	///
	/// That is, for each element `a` and its following element `b`, `a <= b`
	/// must hold. If the array yields exactly zero or one element, `true` is
	/// returned. Two consecutive incomparable elements (e.g., [`f64::NAN`])
	/// make the array count as unsorted.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_select::{Select1Ext, ndarray::arr1};
	///
	/// let empty: [i32; 0] = [];
	///
	/// assert!(arr1(&[1, 2, 2, 9]).is_sorted());
	/// assert!(!arr1(&[1, 3, 2, 4]).is_sorted());
	/// assert!(arr1(&empty).is_sorted());
	/// assert!(!arr1(&[0.0, 1.0, f32::NAN]).is_sorted());
	/// ```
	#[must_use]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd;
	/// Checks if the elements of this array are sorted using the given
	/// comparator function, see [`is_sorted`](Select1Ext::is_sorted).
	#[must_use]
	fn is_sorted_by<F>(&self, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>;
	/// Checks if the elements of this array are sorted using the given key
	/// extraction function.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_select::{Select1Ext, ndarray::arr1};
	///
	/// assert!(arr1(&["c", "bb", "aaa"]).is_sorted_by_key(|s| s.len()));
	/// ```
	#[must_use]
	fn is_sorted_by_key<F, K>(&self, f: F) -> bool
	where
		F: FnMut(&A) -> K,
		K: PartialOrd;
}

impl<A, S> Select1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn min(&self) -> Result<&A, SelectError>
	where
		A: Ord,
	{
		min(self.view(), A::lt)
	}
	#[inline]
	fn min_by<F>(&self, mut compare: F) -> Result<&A, SelectError>
	where
		F: FnMut(&A, &A) -> Ordering,
	{
		min(self.view(), |a: &A, b: &A| compare(a, b) == Less)
	}
	#[inline]
	fn min_by_key<K, F>(&self, mut f: F) -> Result<&A, SelectError>
	where
		K: Ord,
		F: FnMut(&A) -> K,
	{
		min(self.view(), |a: &A, b: &A| f(a).lt(&f(b)))
	}

	#[inline]
	fn max(&self) -> Result<&A, SelectError>
	where
		A: Ord,
	{
		max(self.view(), A::lt)
	}
	#[inline]
	fn max_by<F>(&self, mut compare: F) -> Result<&A, SelectError>
	where
		F: FnMut(&A, &A) -> Ordering,
	{
		max(self.view(), |a: &A, b: &A| compare(a, b) == Less)
	}
	#[inline]
	fn max_by_key<K, F>(&self, mut f: F) -> Result<&A, SelectError>
	where
		K: Ord,
		F: FnMut(&A) -> K,
	{
		max(self.view(), |a: &A, b: &A| f(a).lt(&f(b)))
	}

	#[cfg(feature = "alloc")]
	#[inline]
	fn kth_min(&self, k: usize) -> Result<A, SelectError>
	where
		A: Clone + Ord,
	{
		kth_min(self.view(), k, A::lt)
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn kth_min_by<F>(&self, k: usize, mut compare: F) -> Result<A, SelectError>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
	{
		kth_min(self.view(), k, |a: &A, b: &A| compare(a, b) == Less)
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn kth_min_by_key<K, F>(&self, k: usize, mut f: F) -> Result<A, SelectError>
	where
		A: Clone,
		K: Ord,
		F: FnMut(&A) -> K,
	{
		kth_min(self.view(), k, |a: &A, b: &A| f(a).lt(&f(b)))
	}

	#[cfg(feature = "alloc")]
	#[inline]
	fn kth_max(&self, k: usize) -> Result<A, SelectError>
	where
		A: Clone + Ord,
	{
		kth_max(self.view(), k, A::lt)
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn kth_max_by<F>(&self, k: usize, mut compare: F) -> Result<A, SelectError>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
	{
		kth_max(self.view(), k, |a: &A, b: &A| compare(a, b) == Less)
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn kth_max_by_key<K, F>(&self, k: usize, mut f: F) -> Result<A, SelectError>
	where
		A: Clone,
		K: Ord,
		F: FnMut(&A) -> K,
	{
		kth_max(self.view(), k, |a: &A, b: &A| f(a).lt(&f(b)))
	}

	#[cfg(feature = "alloc")]
	#[inline]
	fn range(&self, low: &A, high: &A) -> Result<Array1<A>, SelectError>
	where
		A: Clone + Ord,
	{
		range(self.view(), low, high, A::lt)
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn range_by<F>(&self, low: &A, high: &A, mut compare: F) -> Result<Array1<A>, SelectError>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
	{
		range(self.view(), low, high, |a: &A, b: &A| compare(a, b) == Less)
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn range_by_key<K, F>(&self, low: &A, high: &A, mut f: F) -> Result<Array1<A>, SelectError>
	where
		A: Clone,
		K: Ord,
		F: FnMut(&A) -> K,
	{
		range(self.view(), low, high, |a: &A, b: &A| f(a).lt(&f(b)))
	}

	#[inline]
	fn ceiling(&self, key: &A) -> Result<&A, SelectError>
	where
		A: Ord,
	{
		ceiling(self.view(), key, A::lt)
	}
	#[inline]
	fn ceiling_by<F>(&self, key: &A, mut compare: F) -> Result<&A, SelectError>
	where
		F: FnMut(&A, &A) -> Ordering,
	{
		ceiling(self.view(), key, |a: &A, b: &A| compare(a, b) == Less)
	}
	#[inline]
	fn ceiling_by_key<K, F>(&self, key: &A, mut f: F) -> Result<&A, SelectError>
	where
		K: Ord,
		F: FnMut(&A) -> K,
	{
		ceiling(self.view(), key, |a: &A, b: &A| f(a).lt(&f(b)))
	}

	#[inline]
	fn floor(&self, key: &A) -> Result<&A, SelectError>
	where
		A: Ord,
	{
		floor(self.view(), key, A::lt)
	}
	#[inline]
	fn floor_by<F>(&self, key: &A, mut compare: F) -> Result<&A, SelectError>
	where
		F: FnMut(&A, &A) -> Ordering,
	{
		floor(self.view(), key, |a: &A, b: &A| compare(a, b) == Less)
	}
	#[inline]
	fn floor_by_key<K, F>(&self, key: &A, mut f: F) -> Result<&A, SelectError>
	where
		K: Ord,
		F: FnMut(&A) -> K,
	{
		floor(self.view(), key, |a: &A, b: &A| f(a).lt(&f(b)))
	}

	#[cfg(feature = "alloc")]
	#[inline]
	fn merge_sort(&mut self)
	where
		A: Clone + Ord,
		S: DataMut,
	{
		merge_sort(self.view_mut(), A::lt);
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn merge_sort_by<F>(&mut self, mut compare: F)
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		merge_sort(self.view_mut(), |a: &A, b: &A| compare(a, b) == Less);
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn merge_sort_by_key<K, F>(&mut self, mut f: F)
	where
		A: Clone,
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		merge_sort(self.view_mut(), |a: &A, b: &A| f(a).lt(&f(b)));
	}

	#[inline]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd,
	{
		is_sorted(self.view(), |a, b| a.partial_cmp(b))
	}
	#[inline]
	fn is_sorted_by<F>(&self, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>,
	{
		is_sorted(self.view(), compare)
	}
	#[inline]
	fn is_sorted_by_key<F, K>(&self, mut f: F) -> bool
	where
		F: FnMut(&A) -> K,
		K: PartialOrd,
	{
		is_sorted(self.view(), |a, b| f(a).partial_cmp(&f(b)))
	}
}
