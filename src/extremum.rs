use crate::error::SelectError;
use ndarray::ArrayView1;

/// Returns the minimum element of `v` under `is_less`.
///
/// Single forward scan. Only a strictly lesser element replaces the running
/// minimum, so among equal extrema the first in iteration order wins.
pub fn min<'a, T, F>(v: ArrayView1<'a, T>, mut is_less: F) -> Result<&'a T, SelectError>
where
	F: FnMut(&T, &T) -> bool,
{
	let mut iter = v.into_iter();
	let mut min = iter.next().ok_or(SelectError::NotFound)?;
	for item in iter {
		if is_less(item, min) {
			min = item;
		}
	}
	Ok(min)
}

/// Returns the maximum element of `v` under `is_less`.
///
/// Single forward scan; first of equal maxima wins, see [`min`].
pub fn max<'a, T, F>(v: ArrayView1<'a, T>, mut is_less: F) -> Result<&'a T, SelectError>
where
	F: FnMut(&T, &T) -> bool,
{
	let mut iter = v.into_iter();
	let mut max = iter.next().ok_or(SelectError::NotFound)?;
	for item in iter {
		if is_less(max, item) {
			max = item;
		}
	}
	Ok(max)
}

#[cfg(test)]
mod test {
	use super::{max, min};
	use crate::error::SelectError;
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	#[test]
	fn empty_input() {
		let v = Array1::<i32>::from_vec(Vec::new());
		assert_eq!(min(v.view(), i32::lt), Err(SelectError::NotFound));
		assert_eq!(max(v.view(), i32::lt), Err(SelectError::NotFound));
	}

	#[test]
	fn single_element() {
		let v = arr1(&[7]);
		assert_eq!(min(v.view(), i32::lt), Ok(&7));
		assert_eq!(max(v.view(), i32::lt), Ok(&7));
	}

	#[test]
	fn first_of_equal_extrema_wins() {
		// Comparing on value only, the index tells the winner apart.
		let v = arr1(&[(5, 0), (2, 1), (2, 2), (5, 3)]);
		let by_value = |a: &(i32, i32), b: &(i32, i32)| a.0 < b.0;
		assert_eq!(min(v.view(), by_value), Ok(&(2, 1)));
		assert_eq!(max(v.view(), by_value), Ok(&(5, 0)));
	}

	#[quickcheck]
	fn bounds_every_element(xs: Vec<i32>) {
		if xs.is_empty() {
			return;
		}
		let v = Array1::from_vec(xs);
		let min = *min(v.view(), i32::lt).unwrap();
		let max = *max(v.view(), i32::lt).unwrap();
		for x in &v {
			assert!(min <= *x && *x <= max);
		}
	}

	#[quickcheck]
	fn agrees_with_iterator_extrema(xs: Vec<i32>) {
		let v = Array1::from_vec(xs);
		assert_eq!(min(v.view(), i32::lt).ok(), v.iter().min());
		assert_eq!(max(v.view(), i32::lt).ok(), v.iter().max());
	}
}
