//! A module containing [`SequenceContainer`].

use alloc::vec::Vec;
use core::slice::Iter as SliceIter;

use itertools::Itertools;
use smallvec::SmallVec;
use tracing::trace;

use crate::utils::{first_position, median_index};
use crate::{IntegerContainer, IntegerType, MedianContainer};

/// How many values [`SequenceContainer::median()`] can select between
/// before its scratch buffer spills onto the heap.
const SCRATCH_INLINE: usize = 32;

/// An insertion-ordered multiset of integers based on a single [`Vec`].
///
/// `I` is the generic type parameter for the integer type stored in the
/// container.
///
/// Adding is amortised `O(1)`, while deleting and median queries are
/// `O(n)`. If you make many median queries see [`SortedContainer`]
/// instead.
///
/// # Examples
/// ```
/// use integer_container::{
/// 	IntegerContainer, MedianContainer, SequenceContainer,
/// };
///
/// let mut container = SequenceContainer::new();
///
/// assert_eq!(container.add(10), 1);
/// assert_eq!(container.add(20), 2);
/// assert_eq!(container.add(30), 3);
/// assert_eq!(container.add(40), 4);
/// assert_eq!(container.add(40), 5);
///
/// assert_eq!(container.median(), Some(30));
///
/// assert_eq!(container.delete(30), true);
/// assert_eq!(container.median(), Some(20));
///
/// // insertion order is kept
/// assert_eq!(
/// 	container.iter().copied().collect::<Vec<_>>(),
/// 	[10, 20, 40, 40]
/// );
/// ```
///
/// [`SortedContainer`]: crate::SortedContainer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceContainer<I> {
	pub(crate) values: Vec<I>,
}

impl<I> SequenceContainer<I>
where
	I: IntegerType,
{
	/// Returns `true` if the container holds at least one value equal to
	/// `value`.
	///
	/// # Examples
	/// ```
	/// use integer_container::SequenceContainer;
	///
	/// let container = SequenceContainer::from_slice([3, 5]);
	///
	/// assert_eq!(container.contains(5), true);
	/// assert_eq!(container.contains(4), false);
	/// ```
	pub fn contains(&self, value: I) -> bool {
		self.values.contains(&value)
	}

	/// Returns a copy of the values in the container sorted in ascending
	/// order.
	///
	/// # Examples
	/// ```
	/// use integer_container::SequenceContainer;
	///
	/// let container = SequenceContainer::from_slice([3, 1, 2, 1]);
	///
	/// assert_eq!(container.to_sorted_vec(), [1, 1, 2, 3]);
	/// ```
	pub fn to_sorted_vec(&self) -> Vec<I> {
		self.values.iter().copied().sorted_unstable().collect()
	}

	/// Makes a new [`SequenceContainer`] by adding each value of the given
	/// array in order.
	///
	/// # Examples
	/// ```
	/// use integer_container::SequenceContainer;
	///
	/// let container = SequenceContainer::from_slice([1, 2, 2]);
	///
	/// assert_eq!(container.len(), 3);
	/// ```
	pub fn from_slice<const N: usize>(slice: [I; N]) -> SequenceContainer<I> {
		let mut container = SequenceContainer::new();
		for value in slice {
			container.add(value);
		}
		return container;
	}
}

impl<I> SequenceContainer<I> {
	/// Makes a new, empty [`SequenceContainer`].
	///
	/// # Examples
	/// ```
	/// use integer_container::SequenceContainer;
	///
	/// let container: SequenceContainer<i32> = SequenceContainer::new();
	/// ```
	pub fn new() -> Self {
		SequenceContainer { values: Vec::new() }
	}
	/// Returns the number of values in the container.
	pub fn len(&self) -> usize {
		self.values.len()
	}
	/// Returns `true` if the container holds no values.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
	/// Returns an iterator over the values in the container in the order
	/// they were added.
	pub fn iter(&self) -> SliceIter<'_, I> {
		self.values.iter()
	}
	/// Removes every value from the container.
	pub fn clear(&mut self) {
		trace!(len = self.values.len(), "cleared container");
		self.values.clear();
	}
}

impl<I> IntegerContainer<I> for SequenceContainer<I>
where
	I: IntegerType,
{
	fn add(&mut self, value: I) -> usize {
		self.values.push(value);
		trace!(value = ?value, len = self.values.len(), "added value");
		self.values.len()
	}

	fn delete(&mut self, value: I) -> bool {
		match first_position(&self.values, value) {
			Some(index) => {
				self.values.remove(index);
				trace!(value = ?value, index, len = self.values.len(), "deleted value");
				true
			}
			None => {
				trace!(value = ?value, "value to delete not present");
				false
			}
		}
	}

	fn len(&self) -> usize {
		self.values.len()
	}
}

impl<I> MedianContainer<I> for SequenceContainer<I>
where
	I: IntegerType,
{
	fn median(&self) -> Option<I> {
		let index = median_index(self.values.len())?;

		//select on a scratch copy so the insertion order survives
		let mut scratch: SmallVec<[I; SCRATCH_INLINE]> =
			self.values.iter().copied().collect();
		let (_, median, _) = scratch.select_nth_unstable(index);

		Some(*median)
	}
}

// Trait Impls ==========================

impl<I> Default for SequenceContainer<I> {
	fn default() -> Self {
		SequenceContainer::new()
	}
}

impl<I> FromIterator<I> for SequenceContainer<I>
where
	I: IntegerType,
{
	fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
		let mut container = SequenceContainer::new();
		container.extend(iter);
		container
	}
}

impl<I> Extend<I> for SequenceContainer<I>
where
	I: IntegerType,
{
	fn extend<T: IntoIterator<Item = I>>(&mut self, iter: T) {
		for value in iter {
			self.add(value);
		}
	}
}

impl<I> IntoIterator for SequenceContainer<I> {
	type Item = I;
	type IntoIter = IntoIter<I>;
	fn into_iter(self) -> Self::IntoIter {
		return IntoIter {
			inner: self.values.into_iter(),
		};
	}
}

impl<'a, I> IntoIterator for &'a SequenceContainer<I> {
	type Item = &'a I;
	type IntoIter = SliceIter<'a, I>;
	fn into_iter(self) -> Self::IntoIter {
		self.values.iter()
	}
}

/// An owning iterator over the values of a [`SequenceContainer`] in the
/// order they were added.
///
/// This `struct` is created by the [`into_iter`] method on
/// [`SequenceContainer`] (provided by the [`IntoIterator`] trait). See
/// its documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
pub struct IntoIter<I> {
	inner: alloc::vec::IntoIter<I>,
}
impl<I> Iterator for IntoIter<I> {
	type Item = I;
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next()
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}
impl<I> DoubleEndedIterator for IntoIter<I> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.next_back()
	}
}
impl<I> ExactSizeIterator for IntoIter<I> {}

#[cfg(feature = "serde")]
mod serde {
	use core::marker::PhantomData;

	use serde::de::{SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::{IntegerContainer, IntegerType, SequenceContainer};

	impl<I> Serialize for SequenceContainer<I>
	where
		I: Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut seq = serializer.serialize_seq(Some(self.len()))?;
			for value in self.iter() {
				seq.serialize_element(value)?;
			}
			seq.end()
		}
	}

	impl<'de, I> Deserialize<'de> for SequenceContainer<I>
	where
		I: IntegerType + Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_seq(SequenceContainerVisitor {
				i: PhantomData,
			})
		}
	}

	struct SequenceContainerVisitor<I> {
		i: PhantomData<I>,
	}

	impl<'de, I> Visitor<'de> for SequenceContainerVisitor<I>
	where
		I: IntegerType + Deserialize<'de>,
	{
		type Value = SequenceContainer<I>;

		fn expecting(
			&self,
			formatter: &mut core::fmt::Formatter,
		) -> core::fmt::Result {
			formatter.write_str("a SequenceContainer")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let mut container = SequenceContainer::new();
			while let Some(value) = access.next_element()? {
				container.add(value);
			}
			Ok(container)
		}
	}
}
