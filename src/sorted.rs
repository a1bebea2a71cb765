//! A module containing [`SortedContainer`].
//!
//! [`SortedContainer`] trades slower additions for constant-time median
//! queries by keeping a sorted shadow of its values alongside the
//! insertion-ordered ones.

use alloc::vec::Vec;
use core::slice::Iter as SliceIter;

use itertools::Itertools;
use tracing::trace;

use crate::sequence::IntoIter;
use crate::utils::{first_position, median_index};
use crate::{IntegerContainer, IntegerType, MedianContainer, SequenceContainer};

/// An insertion-ordered multiset of integers which also keeps its values
/// in sorted order.
///
/// `I` is the generic type parameter for the integer type stored in the
/// container.
///
/// Adding and deleting are `O(n)` (deleting a value which isn't present is
/// `O(log n)`), median queries are `O(1)`.
///
/// # Examples
/// ```
/// use integer_container::{
/// 	IntegerContainer, MedianContainer, SortedContainer,
/// };
///
/// let mut container = SortedContainer::new();
///
/// container.add(4);
/// container.add(1);
/// container.add(3);
/// container.add(2);
///
/// assert_eq!(container.sorted(), [1, 2, 3, 4]);
/// assert_eq!(container.median(), Some(2));
///
/// container.delete(1);
///
/// assert_eq!(container.median(), Some(3));
/// assert_eq!(
/// 	container.iter().copied().collect::<Vec<_>>(),
/// 	[4, 3, 2]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedContainer<I> {
	values: Vec<I>,
	//always a sorted permutation of `values`
	sorted: Vec<I>,
}

impl<I> SortedContainer<I>
where
	I: IntegerType,
{
	/// Returns `true` if the container holds at least one value equal to
	/// `value`.
	///
	/// # Examples
	/// ```
	/// use integer_container::SortedContainer;
	///
	/// let container = SortedContainer::from_slice([3, 5]);
	///
	/// assert_eq!(container.contains(5), true);
	/// assert_eq!(container.contains(4), false);
	/// ```
	pub fn contains(&self, value: I) -> bool {
		self.sorted.binary_search(&value).is_ok()
	}

	/// See [`SequenceContainer::from_slice()`] for more details.
	pub fn from_slice<const N: usize>(slice: [I; N]) -> SortedContainer<I> {
		let mut container = SortedContainer::new();
		for value in slice {
			container.add(value);
		}
		return container;
	}
}

impl<I> SortedContainer<I> {
	/// Makes a new, empty [`SortedContainer`].
	///
	/// # Examples
	/// ```
	/// use integer_container::SortedContainer;
	///
	/// let container: SortedContainer<u8> = SortedContainer::new();
	/// ```
	pub fn new() -> Self {
		SortedContainer {
			values: Vec::new(),
			sorted: Vec::new(),
		}
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
	/// Returns the values in the container sorted in ascending order.
	pub fn sorted(&self) -> &[I] {
		&self.sorted
	}
	/// Removes every value from the container.
	pub fn clear(&mut self) {
		trace!(len = self.values.len(), "cleared container");
		self.values.clear();
		self.sorted.clear();
	}
}

impl<I> IntegerContainer<I> for SortedContainer<I>
where
	I: IntegerType,
{
	fn add(&mut self, value: I) -> usize {
		//after any equal values so equal runs stay stable
		let sorted_index = self.sorted.partition_point(|x| *x <= value);
		self.sorted.insert(sorted_index, value);
		self.values.push(value);

		trace!(value = ?value, len = self.values.len(), "added value");
		self.values.len()
	}

	fn delete(&mut self, value: I) -> bool {
		let Ok(sorted_index) = self.sorted.binary_search(&value) else {
			trace!(value = ?value, "value to delete not present");
			return false;
		};
		let Some(index) = first_position(&self.values, value) else {
			return false;
		};

		self.values.remove(index);
		self.sorted.remove(sorted_index);

		trace!(value = ?value, index, len = self.values.len(), "deleted value");
		true
	}

	fn len(&self) -> usize {
		self.values.len()
	}
}

impl<I> MedianContainer<I> for SortedContainer<I>
where
	I: IntegerType,
{
	fn median(&self) -> Option<I> {
		let index = median_index(self.sorted.len())?;
		self.sorted.get(index).copied()
	}
}

// Trait Impls ==========================

impl<I> Default for SortedContainer<I> {
	fn default() -> Self {
		SortedContainer::new()
	}
}

impl<I> FromIterator<I> for SortedContainer<I>
where
	I: IntegerType,
{
	fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
		let values: Vec<I> = iter.into_iter().collect();
		let sorted = values.iter().copied().sorted().collect();
		SortedContainer { values, sorted }
	}
}

impl<I> Extend<I> for SortedContainer<I>
where
	I: IntegerType,
{
	fn extend<T: IntoIterator<Item = I>>(&mut self, iter: T) {
		for value in iter {
			self.add(value);
		}
	}
}

impl<I> IntoIterator for SortedContainer<I> {
	type Item = I;
	type IntoIter = IntoIter<I>;
	fn into_iter(self) -> Self::IntoIter {
		SequenceContainer::from(self).into_iter()
	}
}

impl<'a, I> IntoIterator for &'a SortedContainer<I> {
	type Item = &'a I;
	type IntoIter = SliceIter<'a, I>;
	fn into_iter(self) -> Self::IntoIter {
		self.values.iter()
	}
}

impl<I> From<SequenceContainer<I>> for SortedContainer<I>
where
	I: IntegerType,
{
	fn from(container: SequenceContainer<I>) -> Self {
		container.values.into_iter().collect()
	}
}

impl<I> From<SortedContainer<I>> for SequenceContainer<I> {
	fn from(container: SortedContainer<I>) -> Self {
		SequenceContainer {
			values: container.values,
		}
	}
}

#[cfg(feature = "serde")]
mod serde {
	use core::marker::PhantomData;

	use serde::de::{SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::{IntegerContainer, IntegerType, SortedContainer};

	impl<I> Serialize for SortedContainer<I>
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

	impl<'de, I> Deserialize<'de> for SortedContainer<I>
	where
		I: IntegerType + Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_seq(SortedContainerVisitor {
				i: PhantomData,
			})
		}
	}

	struct SortedContainerVisitor<I> {
		i: PhantomData<I>,
	}

	impl<'de, I> Visitor<'de> for SortedContainerVisitor<I>
	where
		I: IntegerType + Deserialize<'de>,
	{
		type Value = SortedContainer<I>;

		fn expecting(
			&self,
			formatter: &mut core::fmt::Formatter,
		) -> core::fmt::Result {
			formatter.write_str("a SortedContainer")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let mut container = SortedContainer::new();
			while let Some(value) = access.next_element()? {
				container.add(value);
			}
			Ok(container)
		}
	}
}

#[cfg(test)]
mod tests {
	use alloc::vec::Vec;

	use pretty_assertions::assert_eq;

	use super::*;

	fn basic() -> SortedContainer<i32> {
		SortedContainer::from_slice([40, 10, 30, 20, 40])
	}

	fn contents<I: IntegerType>(container: &SortedContainer<I>) -> Vec<I> {
		container.iter().copied().collect()
	}

	fn assert_shadow_consistent<I: IntegerType>(container: &SortedContainer<I>) {
		let mut expected = contents(container);
		expected.sort();
		assert_eq!(container.sorted(), expected.as_slice());
	}

	#[test]
	fn add_keeps_both_orders() {
		let mut container = SortedContainer::new();
		assert_eq!(container.add(3), 1);
		assert_eq!(container.add(1), 2);
		assert_eq!(container.add(3), 3);
		assert_eq!(container.add(2), 4);
		assert_eq!(contents(&container), [3, 1, 3, 2]);
		assert_eq!(container.sorted(), [1, 2, 3, 3]);
	}

	#[test]
	fn delete_tests() {
		assert_delete(basic(), 20, true, [40, 10, 30, 40]);
		assert_delete(basic(), 40, true, [10, 30, 20, 40]);
		assert_delete(basic(), 25, false, [40, 10, 30, 20, 40]);
		assert_delete(SortedContainer::new(), 0, false, []);
	}
	fn assert_delete<const N: usize>(
		mut before: SortedContainer<i32>,
		to_delete: i32,
		result: bool,
		after: [i32; N],
	) {
		assert_eq!(before.delete(to_delete), result);
		assert_eq!(before, SortedContainer::from_slice(after));
		assert_shadow_consistent(&before);
	}

	#[test]
	fn delete_in_random_order() {
		let mut container = SortedContainer::from_slice([10, 20, 30, 40, 40]);
		assert_eq!(container.delete(30), true);
		assert_eq!(container.delete(30), false);
		assert_eq!(container.delete(10), true);
		assert_eq!(container.delete(10), false);
		assert_eq!(container.delete(40), true);
		assert_eq!(container.delete(40), true);
		assert_eq!(container.delete(40), false);
		assert_eq!(container.delete(20), true);
		assert_eq!(container.delete(20), false);
		assert!(container.is_empty());
		assert!(container.sorted().is_empty());
	}

	#[test]
	fn median_tests() {
		assert_eq!(SortedContainer::<i32>::new().median(), None);
		assert_eq!(basic().median(), Some(30));
		assert_eq!(SortedContainer::from_slice([1, 2, 3, 4]).median(), Some(2));
		assert_eq!(
			SortedContainer::from_slice([i8::MAX, i8::MIN]).median(),
			Some(i8::MIN)
		);
	}

	#[test]
	fn conversions_keep_insertion_order() {
		let sequence = SequenceContainer::from_slice([5, 3, 9, 3]);
		let sorted = SortedContainer::from(sequence.clone());
		assert_eq!(contents(&sorted), [5, 3, 9, 3]);
		assert_eq!(sorted.sorted(), [3, 3, 5, 9]);
		assert_eq!(SequenceContainer::from(sorted.clone()), sequence);
		assert_eq!(sorted.into_iter().collect::<Vec<_>>(), [5, 3, 9, 3]);
	}

	#[test]
	fn collection_surface() {
		let mut container: SortedContainer<u64> =
			[8, 2, 4].into_iter().collect();
		assert_shadow_consistent(&container);
		assert_eq!(container.contains(2), true);
		assert_eq!(container.contains(3), false);

		container.extend([1, 9]);
		assert_eq!(contents(&container), [8, 2, 4, 1, 9]);
		assert_eq!(container.sorted(), [1, 2, 4, 8, 9]);
		assert_eq!((&container).into_iter().count(), 5);

		container.clear();
		assert_eq!(container, SortedContainer::default());
	}

	// xorshift so the interleaving is deterministic
	fn next(state: &mut u32) -> u32 {
		*state ^= *state << 13;
		*state ^= *state >> 17;
		*state ^= *state << 5;
		*state
	}

	#[test]
	fn agrees_with_sequence_container() {
		let mut state = 0x2545_f491;
		let mut sequence = SequenceContainer::new();
		let mut sorted = SortedContainer::new();

		for _ in 0..2000 {
			let value = (next(&mut state) % 16) as i16 - 8;
			match next(&mut state) % 3 {
				0 => assert_eq!(sequence.add(value), sorted.add(value)),
				1 => assert_eq!(sequence.delete(value), sorted.delete(value)),
				_ => assert_eq!(sequence.median(), sorted.median()),
			}
			assert_eq!(sequence.median(), sorted.median());
			assert_eq!(contents(&sorted), sequence.iter().copied().collect::<Vec<_>>());
		}
		assert_shadow_consistent(&sorted);
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serde_rebuilds_sorted_shadow() {
		let json = serde_json::to_string(&basic()).unwrap();
		assert_eq!(json, "[40,10,30,20,40]");

		let container: SortedContainer<i32> =
			serde_json::from_str("[3,1,2]").unwrap();
		assert_eq!(contents(&container), [3, 1, 2]);
		assert_eq!(container.sorted(), [1, 2, 3]);
	}
}
