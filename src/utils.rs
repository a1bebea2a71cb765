//! Crate-internal helpers shared by the container implementations.

/// The index of the lower-middle element of a sorted sequence of length
/// `len`, or `None` if the sequence is empty.
pub(crate) fn median_index(len: usize) -> Option<usize> {
	len.checked_sub(1).map(|last| last / 2)
}

/// The position of the first element of `values` equal to `value`.
pub(crate) fn first_position<I>(values: &[I], value: I) -> Option<usize>
where
	I: PartialEq + Copy,
{
	values.iter().position(|x| *x == value)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn median_index_tests() {
		assert_eq!(median_index(0), None);
		assert_eq!(median_index(1), Some(0));
		assert_eq!(median_index(2), Some(0));
		assert_eq!(median_index(3), Some(1));
		assert_eq!(median_index(4), Some(1));
		assert_eq!(median_index(5), Some(2));
		assert_eq!(median_index(usize::MAX), Some((usize::MAX - 1) / 2));
	}

	#[test]
	fn first_position_tests() {
		assert_eq!(first_position(&[], 4), None);
		assert_eq!(first_position(&[1, 4, 4], 4), Some(1));
		assert_eq!(first_position(&[1, 4, 4], 5), None);
	}
}
