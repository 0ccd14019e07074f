use crate::error::SelectError;
use ndarray::ArrayView1;

/// Returns the smallest element of `v` that is greater than or equal to `key`
/// under `is_less`.
///
/// Single forward scan tracking the best candidate so far; a qualifying
/// element replaces the candidate when it is less than or equal to it. `key`
/// itself need not be an element of `v`.
pub fn ceiling<'a, T, F>(
	v: ArrayView1<'a, T>,
	key: &T,
	mut is_less: F,
) -> Result<&'a T, SelectError>
where
	F: FnMut(&T, &T) -> bool,
{
	let mut bound: Option<&T> = None;
	for item in v.into_iter() {
		if is_less(item, key) {
			continue;
		}
		match bound {
			Some(best) if !is_less(best, item) => bound = Some(item),
			None => bound = Some(item),
			_ => {}
		}
	}
	bound.ok_or(SelectError::NotFound)
}

/// Returns the largest element of `v` that is less than or equal to `key`
/// under `is_less`.
///
/// Symmetric to [`ceiling`].
pub fn floor<'a, T, F>(v: ArrayView1<'a, T>, key: &T, mut is_less: F) -> Result<&'a T, SelectError>
where
	F: FnMut(&T, &T) -> bool,
{
	let mut bound: Option<&T> = None;
	for item in v.into_iter() {
		if is_less(key, item) {
			continue;
		}
		match bound {
			Some(best) if !is_less(item, best) => bound = Some(item),
			None => bound = Some(item),
			_ => {}
		}
	}
	bound.ok_or(SelectError::NotFound)
}

#[cfg(test)]
mod test {
	use super::{ceiling, floor};
	use crate::error::SelectError;
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	#[test]
	fn between_elements() {
		let v = arr1(&[1, 4, 7, 10]);
		assert_eq!(ceiling(v.view(), &5, i32::lt), Ok(&7));
		assert_eq!(floor(v.view(), &5, i32::lt), Ok(&4));
	}

	#[test]
	fn key_is_a_member() {
		let v = arr1(&[10, 1, 7, 4]);
		assert_eq!(ceiling(v.view(), &7, i32::lt), Ok(&7));
		assert_eq!(floor(v.view(), &7, i32::lt), Ok(&7));
	}

	#[test]
	fn no_qualifying_element() {
		let v = arr1(&[1, 2, 3]);
		assert_eq!(ceiling(v.view(), &4, i32::lt), Err(SelectError::NotFound));
		assert_eq!(floor(v.view(), &0, i32::lt), Err(SelectError::NotFound));
	}

	#[test]
	fn empty_input() {
		let v = Array1::<i32>::from_vec(Vec::new());
		assert_eq!(ceiling(v.view(), &0, i32::lt), Err(SelectError::NotFound));
		assert_eq!(floor(v.view(), &0, i32::lt), Err(SelectError::NotFound));
	}

	#[quickcheck]
	fn ceiling_is_min_of_qualifying(xs: Vec<i16>, key: i16) {
		let v = Array1::from_vec(xs);
		let expected = v.iter().filter(|x| **x >= key).min();
		assert_eq!(ceiling(v.view(), &key, i16::lt).ok(), expected);
	}

	#[quickcheck]
	fn floor_is_max_of_qualifying(xs: Vec<i16>, key: i16) {
		let v = Array1::from_vec(xs);
		let expected = v.iter().filter(|x| **x <= key).max();
		assert_eq!(floor(v.view(), &key, i16::lt).ok(), expected);
	}
}
