#![cfg(feature = "alloc")]

use crate::error::SelectError;
use crate::merge_sort::merge_sort;
use ndarray::{Array1, ArrayView1, s};

/// Selects the `k`-th distinct minimum of `v` under `is_less`.
///
/// Clones `v` into a working copy, sorts it ascending with [`merge_sort`] and
/// scans the copy forwards counting distinct values. Two elements count as one
/// distinct value exactly when `is_less` orders neither before the other.
pub fn kth_min<T, F>(v: ArrayView1<'_, T>, k: usize, mut is_less: F) -> Result<T, SelectError>
where
	T: Clone,
	F: FnMut(&T, &T) -> bool,
{
	let sorted = sorted_copy(v, k, &mut is_less)?;
	nth_distinct(sorted.iter(), k, &mut is_less)
		.cloned()
		.ok_or(SelectError::NotFound)
}

/// Selects the `k`-th distinct maximum of `v` under `is_less`.
///
/// Same sorted working copy as [`kth_min`], scanned backwards through a
/// reversed view.
pub fn kth_max<T, F>(v: ArrayView1<'_, T>, k: usize, mut is_less: F) -> Result<T, SelectError>
where
	T: Clone,
	F: FnMut(&T, &T) -> bool,
{
	let sorted = sorted_copy(v, k, &mut is_less)?;
	nth_distinct(sorted.slice(s![..;-1]).into_iter(), k, &mut is_less)
		.cloned()
		.ok_or(SelectError::NotFound)
}

/// Clones `v` into an owned array sorted ascending by `is_less`.
///
/// Reports [`SelectError::NotFound`] up front for an empty view or `k == 0`.
fn sorted_copy<T, F>(
	v: ArrayView1<'_, T>,
	k: usize,
	is_less: &mut F,
) -> Result<Array1<T>, SelectError>
where
	T: Clone,
	F: FnMut(&T, &T) -> bool,
{
	if v.is_empty() || k == 0 {
		return Err(SelectError::NotFound);
	}
	trace!(len = v.len(), k, "k-selection over sorted copy");
	let mut copy = v.to_owned();
	merge_sort(copy.view_mut(), &mut *is_less);
	Ok(copy)
}

/// Walks a sorted sequence and returns the element at which the distinct-value
/// counter first reaches `k`, or [`None`] when fewer than `k` distinct values
/// exist. `k == 1` short-circuits to the first element.
fn nth_distinct<'a, T, I, F>(mut iter: I, k: usize, is_less: &mut F) -> Option<&'a T>
where
	I: Iterator<Item = &'a T>,
	F: FnMut(&T, &T) -> bool,
{
	let mut prev = iter.next()?;
	if k == 1 {
		return Some(prev);
	}
	let mut distinct = 1;
	for item in iter {
		if is_less(prev, item) || is_less(item, prev) {
			distinct += 1;
			if distinct == k {
				return Some(item);
			}
		}
		prev = item;
	}
	None
}

#[cfg(test)]
mod test {
	use super::{kth_max, kth_min};
	use crate::error::SelectError;
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	#[test]
	fn distinct_selection() {
		let v = arr1(&[1, 2, 2, 3, 4, 5, 6, 6, 8]);
		assert_eq!(kth_min(v.view(), 3, i32::lt), Ok(3));
		assert_eq!(kth_max(v.view(), 2, i32::lt), Ok(6));
	}

	#[test]
	fn first_and_last() {
		let v = arr1(&[4, 2, 9, 2]);
		assert_eq!(kth_min(v.view(), 1, i32::lt), Ok(2));
		assert_eq!(kth_max(v.view(), 1, i32::lt), Ok(9));
	}

	#[test]
	fn beyond_distinct_count() {
		let v = arr1(&[1, 1, 2, 2, 3]);
		assert_eq!(kth_min(v.view(), 4, i32::lt), Err(SelectError::NotFound));
		assert_eq!(kth_max(v.view(), 4, i32::lt), Err(SelectError::NotFound));
	}

	#[test]
	fn zero_k_and_empty_input() {
		let v = arr1(&[1, 2, 3]);
		assert_eq!(kth_min(v.view(), 0, i32::lt), Err(SelectError::NotFound));
		let empty = Array1::<i32>::from_vec(Vec::new());
		assert_eq!(kth_max(empty.view(), 1, i32::lt), Err(SelectError::NotFound));
	}

	#[test]
	fn groups_by_comparator_not_by_equality() {
		// A case-insensitive comparator groups "a" and "A" as one value.
		let v = arr1(&["a", "A", "b"]);
		let ci = |a: &&str, b: &&str| {
			a.to_ascii_lowercase().lt(&b.to_ascii_lowercase())
		};
		assert_eq!(kth_min(v.view(), 2, ci), Ok("b"));
		assert_eq!(kth_min(v.view(), 3, ci), Err(SelectError::NotFound));
	}

	#[test]
	fn input_unchanged() {
		let v = arr1(&[3, 1, 2, 1]);
		let before = v.clone();
		kth_min(v.view(), 2, i32::lt).unwrap();
		kth_max(v.view(), 2, i32::lt).unwrap();
		assert_eq!(v, before);
	}

	#[quickcheck]
	fn first_minimum_is_minimum(xs: Vec<i32>) {
		let v = Array1::from_vec(xs);
		assert_eq!(
			kth_min(v.view(), 1, i32::lt).ok(),
			crate::extremum::min(v.view(), i32::lt).ok().copied(),
		);
		assert_eq!(
			kth_max(v.view(), 1, i32::lt).ok(),
			crate::extremum::max(v.view(), i32::lt).ok().copied(),
		);
	}

	#[quickcheck]
	fn kth_of_distinct_count_exists(xs: Vec<i32>) {
		let mut distinct = xs.clone();
		distinct.sort();
		distinct.dedup();
		let v = Array1::from_vec(xs);
		let count = distinct.len();
		if count > 0 {
			assert_eq!(kth_min(v.view(), count, i32::lt), Ok(distinct[count - 1]));
			assert_eq!(kth_max(v.view(), count, i32::lt), Ok(distinct[0]));
		}
		assert_eq!(
			kth_min(v.view(), count + 1, i32::lt),
			Err(SelectError::NotFound),
		);
	}
}
