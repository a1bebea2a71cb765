//! This crate provides [`SequenceContainer`] and [`SortedContainer`],
//! Data Structures for storing a multiset of integers which support
//! adding values, deleting values and querying the median.
//!
//! ## Example using the base capabilities
//!
//! ```rust
//! use integer_container::{IntegerContainer, SequenceContainer};
//!
//! let mut container = SequenceContainer::new();
//!
//! assert_eq!(container.add(10), 1);
//! assert_eq!(container.add(10), 2);
//! assert_eq!(container.add(100), 3);
//!
//! assert_eq!(container.delete(10), true);
//! assert_eq!(container.delete(10), true);
//! assert_eq!(container.delete(10), false);
//! ```
//!
//! ## Example using the median capability generically
//!
//! ```rust
//! use integer_container::{
//! 	MedianContainer, SequenceContainer, SortedContainer,
//! };
//!
//! fn add_all<C: MedianContainer<i32>>(container: &mut C, values: &[i32]) {
//! 	for value in values {
//! 		container.add(*value);
//! 	}
//! }
//!
//! let mut sequence = SequenceContainer::new();
//! let mut sorted = SortedContainer::new();
//!
//! add_all(&mut sequence, &[1, 2, 3, 4]);
//! add_all(&mut sorted, &[1, 2, 3, 4]);
//!
//! assert_eq!(sequence.median(), Some(2));
//! assert_eq!(sorted.median(), Some(2));
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Capabilities
//!
//! The containers are split into two capability sets, modelled as traits.
//! [`IntegerContainer`] can only add and delete values whereas
//! [`MedianContainer`] can also answer median queries. Every container in
//! this crate implements both.
//!
//! ### Insertion Order
//!
//! Containers remember the order in which their values were added.
//! Deleting a value removes the earliest added value equal to it and
//! leaves the order of every other value untouched. Iterating a container
//! yields its values in insertion order.
//!
//! ### Median
//!
//! The median of a container holding `n` values is the value at index
//! `(n - 1) / 2` of its values sorted in ascending order. This means that
//! for an even number of values the lower of the two middle values is the
//! median, for example the median of `[1, 2, 3, 4]` is `2` and not `3` or
//! `2.5`. The median of an empty container is `None`.
//!
//! ### Choosing a Container
//!
//! | container             | add          | delete | median |
//! | --------------------- | ------------ | ------ | ------ |
//! | [`SequenceContainer`] | O(1) amort.  | O(n)   | O(n)   |
//! | [`SortedContainer`]   | O(n)         | O(n)   | O(1)   |
//!
//! # Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for both
//!   containers as sequences of values in insertion order.

#![no_std]
#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::needless_return)]

extern crate alloc;

pub(crate) mod utils;

pub mod container;
pub mod integer;
pub mod sequence;
pub mod sorted;

pub use crate::container::{IntegerContainer, MedianContainer};
pub use crate::integer::IntegerType;
pub use crate::sequence::SequenceContainer;
pub use crate::sorted::SortedContainer;
