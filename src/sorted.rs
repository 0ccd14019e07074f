use core::cmp::Ordering::{self, Greater};
use ndarray::ArrayView1;

/// Checks whether the elements of `v` are sorted under `compare`.
///
/// Requires `compare(a, b)` to not be [`Greater`] for each element `a` and its
/// following element `b`; an incomparable pair counts as unsorted. Views of
/// zero or one element are sorted.
pub fn is_sorted<T, F>(v: ArrayView1<'_, T>, mut compare: F) -> bool
where
	F: FnMut(&T, &T) -> Option<Ordering>,
{
	let mut iter = v.into_iter();
	let Some(mut prev) = iter.next() else {
		return true;
	};
	for item in iter {
		if compare(prev, item).is_none_or(|ordering| ordering == Greater) {
			return false;
		}
		prev = item;
	}
	true
}

#[cfg(test)]
mod test {
	use super::is_sorted;
	use ndarray::{Array1, arr1};

	#[test]
	fn sorted_runs() {
		assert!(is_sorted(arr1(&[1, 2, 2, 9]).view(), |a, b| a.partial_cmp(b)));
		assert!(!is_sorted(arr1(&[1, 3, 2, 4]).view(), |a, b| a.partial_cmp(b)));
		assert!(is_sorted(arr1(&[0]).view(), |a, b| a.partial_cmp(b)));
		let empty = Array1::<i32>::from_vec(Vec::new());
		assert!(is_sorted(empty.view(), |a, b| a.partial_cmp(b)));
	}

	#[test]
	fn incomparable_is_unsorted() {
		let v = arr1(&[0.0, 1.0, f32::NAN]);
		assert!(!is_sorted(v.view(), |a, b| a.partial_cmp(b)));
	}
}
