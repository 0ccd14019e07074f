use thiserror::Error;

/// Failure of a selection operation.
///
/// Selections are pure, deterministic computations with no transient failure
/// modes; an error is reported synchronously to the immediate caller and
/// retrying cannot succeed. How to proceed is up to the caller, e.g., an empty
/// range selection usually just means no data in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
	/// An input collection or comparator is absent or unusable.
	///
	/// Checked before anything else in the failure contract. The typed
	/// interface discharges the check statically, as references and generic
	/// closures cannot be absent, so the methods of
	/// [`Select1Ext`](crate::Select1Ext) only ever report [`NotFound`]. The
	/// variant remains available to callers layering dynamic argument
	/// validation on top of the trait.
	///
	/// [`NotFound`]: Self::NotFound
	#[error("input collection or comparator is absent")]
	InvalidArgument,
	/// No element satisfies the selection.
	///
	/// Reported for an empty input, for k-selection with `k == 0` or `k`
	/// exceeding the number of distinct values, and for range/ceiling/floor
	/// queries no element qualifies for.
	#[error("no element satisfies the selection")]
	NotFound,
}

#[cfg(test)]
mod test {
	use super::SelectError;

	#[test]
	fn displays() {
		assert_eq!(
			SelectError::InvalidArgument.to_string(),
			"input collection or comparator is absent",
		);
		assert_eq!(
			SelectError::NotFound.to_string(),
			"no element satisfies the selection",
		);
	}
}
