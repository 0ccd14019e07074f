#![cfg(feature = "alloc")]

use ndarray::{ArrayViewMut1, s};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Sorts `v` with a classic top-down merge sort, which is stable and
/// *O*(*n* log *n*) worst-case.
///
/// The auxiliary buffer is allocated once per call and reused by every merge,
/// holding a clone of the active range while the merged order is written back,
/// hence the `Clone` bound and *O*(*n*) auxiliary space.
pub fn merge_sort<T, F>(mut v: ArrayViewMut1<'_, T>, mut is_less: F)
where
	T: Clone,
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	if len < 2 {
		return;
	}
	trace!(len, "merge sort");
	let mut buf = Vec::with_capacity(len);
	sort_range(&mut v, &mut buf, 0, len - 1, &mut is_less);
}

/// Recursively sorts the inclusive range `v[left..=right]`.
///
/// Splits at the midpoint, sorts both halves, then merges them. Base case is
/// the single-element range `left == right`.
fn sort_range<T, F>(
	v: &mut ArrayViewMut1<'_, T>,
	buf: &mut Vec<T>,
	left: usize,
	right: usize,
	is_less: &mut F,
) where
	T: Clone,
	F: FnMut(&T, &T) -> bool,
{
	if right == left {
		return;
	}
	let mid = left + (right - left) / 2;
	sort_range(v, buf, left, mid, is_less);
	sort_range(v, buf, mid + 1, right, is_less);
	merge(v, buf, left, mid, right, is_less);
}

/// Merges the sorted runs `v[left..=mid]` and `v[mid + 1..=right]` in place.
///
/// The active range is cloned into `buf` and merged back into `v`. An element
/// of the right run is taken only when strictly less than the left run's
/// current element; on ties the left element goes first, keeping the merge
/// stable.
fn merge<T, F>(
	v: &mut ArrayViewMut1<'_, T>,
	buf: &mut Vec<T>,
	left: usize,
	mid: usize,
	right: usize,
	is_less: &mut F,
) where
	T: Clone,
	F: FnMut(&T, &T) -> bool,
{
	buf.clear();
	buf.extend(v.slice(s![left..=right]).iter().cloned());
	// First index of the right run within `buf`.
	let split = mid - left + 1;
	let (mut i, mut j) = (0, split);
	for slot in left..=right {
		let take_right = j < buf.len() && (i == split || is_less(&buf[j], &buf[i]));
		let next = if take_right {
			j += 1;
			&buf[j - 1]
		} else {
			i += 1;
			&buf[i - 1]
		};
		v[slot] = next.clone();
	}
}

#[cfg(test)]
mod test {
	use super::merge_sort;
	use crate::sorted::is_sorted;
	use core::cmp::Ordering;
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;
	use rand::seq::SliceRandom;

	#[derive(Debug, Clone, Copy)]
	struct Item {
		index: usize,
		value: u32,
	}

	impl Eq for Item {}

	impl PartialEq for Item {
		fn eq(&self, other: &Self) -> bool {
			self.value == other.value
		}
	}

	impl Ord for Item {
		fn cmp(&self, other: &Self) -> Ordering {
			self.value.cmp(&other.value)
		}
	}

	impl PartialOrd for Item {
		fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
			Some(self.cmp(other))
		}
	}

	impl From<(usize, u32)> for Item {
		fn from((index, value): (usize, u32)) -> Self {
			Self { index, value }
		}
	}

	#[quickcheck]
	fn stably_sorted(xs: Vec<u32>) {
		let xs = xs
			.into_iter()
			.enumerate()
			.map(Item::from)
			.collect::<Vec<Item>>();
		let mut sorted = xs.clone();
		sorted.sort();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		merge_sort(array.view_mut(), &mut Item::lt);
		for (a, s) in array.iter().zip(&sorted) {
			assert_eq!(a.index, s.index);
			assert_eq!(a.value, s.value);
		}
	}

	#[quickcheck]
	fn sorts_like_std(xs: Vec<i32>) {
		let mut expected = xs.clone();
		expected.sort();
		let mut array = Array1::from_vec(xs);
		merge_sort(array.view_mut(), &mut i32::lt);
		assert_eq!(array, Array1::from_vec(expected));
	}

	#[quickcheck]
	fn sorted_input_is_identity(mut xs: Vec<i32>) {
		xs.sort();
		let mut array = Array1::from_vec(xs.clone());
		merge_sort(array.view_mut(), &mut i32::lt);
		assert_eq!(array, Array1::from_vec(xs));
		assert!(is_sorted(array.view(), |a, b| a.partial_cmp(b)));
	}

	#[test]
	fn shuffled_round_trip() {
		let mut xs = (0..100).collect::<Vec<i32>>();
		xs.shuffle(&mut rand::rng());
		let mut array = Array1::from_vec(xs);
		merge_sort(array.view_mut(), &mut i32::lt);
		assert_eq!(array, Array1::from_iter(0..100));
	}

	#[test]
	fn short_views() {
		let mut empty = Array1::<i32>::from_vec(Vec::new());
		merge_sort(empty.view_mut(), &mut i32::lt);
		assert_eq!(empty.len(), 0);

		let mut single = arr1(&[3]);
		merge_sort(single.view_mut(), &mut i32::lt);
		assert_eq!(single, arr1(&[3]));
	}

	#[test]
	fn non_contiguous_column() {
		let mut m = ndarray::arr2(&[[9, 1], [4, 2], [7, 3], [1, 4]]);
		merge_sort(m.column_mut(0), &mut i32::lt);
		assert_eq!(m, ndarray::arr2(&[[1, 1], [4, 2], [7, 3], [9, 4]]));
	}
}
