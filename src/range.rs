#![cfg(feature = "alloc")]

use crate::error::SelectError;
use ndarray::{Array1, ArrayView1};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Collects every element of `v` between `low` and `high` inclusive under
/// `is_less` into a newly allocated array.
///
/// Input iteration order and duplicates are preserved; the bounds themselves
/// need not be elements of `v`. Reports [`SelectError::NotFound`] when `v` is
/// empty or no element qualifies.
pub fn range<T, F>(
	v: ArrayView1<'_, T>,
	low: &T,
	high: &T,
	mut is_less: F,
) -> Result<Array1<T>, SelectError>
where
	T: Clone,
	F: FnMut(&T, &T) -> bool,
{
	if v.is_empty() {
		return Err(SelectError::NotFound);
	}
	let mut hits = Vec::new();
	for item in v.into_iter() {
		if !is_less(item, low) && !is_less(high, item) {
			hits.push(item.clone());
		}
	}
	trace!(len = v.len(), hits = hits.len(), "range scan");
	if hits.is_empty() {
		return Err(SelectError::NotFound);
	}
	Ok(Array1::from_vec(hits))
}
