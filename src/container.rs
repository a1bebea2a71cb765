//! A module containing the [`IntegerContainer`] and [`MedianContainer`]
//! traits.
//!
//! [`IntegerContainer`] is the base capability set (adding and deleting
//! values) and [`MedianContainer`] extends it with median queries. Both
//! [`SequenceContainer`] and [`SortedContainer`] implement both traits so
//! code generic over either trait can use them interchangeably.
//!
//! [`SequenceContainer`]: crate::SequenceContainer
//! [`SortedContainer`]: crate::SortedContainer

use crate::IntegerType;

/// A mutable multiset of integers which remembers the order its values
/// were added in.
pub trait IntegerContainer<I>
where
	I: IntegerType,
{
	/// Adds `value` to the back of the container and returns the number
	/// of values in the container after the addition.
	///
	/// # Examples
	/// ```
	/// use integer_container::{IntegerContainer, SequenceContainer};
	///
	/// let mut container = SequenceContainer::new();
	///
	/// assert_eq!(container.add(10), 1);
	/// assert_eq!(container.add(100), 2);
	/// ```
	fn add(&mut self, value: I) -> usize;

	/// Removes the earliest added value equal to `value` from the
	/// container, keeping the relative order of the remaining values.
	///
	/// Returns `true` if a value was removed and `false` if `value` was
	/// not present, in which case the container is left unchanged.
	///
	/// # Examples
	/// ```
	/// use integer_container::{IntegerContainer, SequenceContainer};
	///
	/// let mut container = SequenceContainer::from_slice([10, 100]);
	///
	/// assert_eq!(container.delete(20), false);
	/// assert_eq!(container.delete(10), true);
	/// assert_eq!(container.delete(10), false);
	/// ```
	fn delete(&mut self, value: I) -> bool;

	/// Returns the number of values in the container.
	fn len(&self) -> usize;

	/// Returns `true` if the container holds no values.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// An [`IntegerContainer`] which can also answer median queries.
pub trait MedianContainer<I>: IntegerContainer<I>
where
	I: IntegerType,
{
	/// Returns the median of the values in the container, or `None` if
	/// the container is empty.
	///
	/// The median is the value at index `(len - 1) / 2` of the values
	/// sorted in ascending order, so when the container holds an even
	/// number of values the lower of the two middle values is returned.
	///
	/// The order the values were added in is not affected.
	///
	/// # Examples
	/// ```
	/// use integer_container::{MedianContainer, SortedContainer};
	///
	/// let container = SortedContainer::from_slice([4, 1, 3, 2]);
	///
	/// assert_eq!(container.median(), Some(2));
	/// assert_eq!(SortedContainer::<i32>::new().median(), None);
	/// ```
	fn median(&self) -> Option<I>;
}
