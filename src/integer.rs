//! A module containing the [`IntegerType`] trait and trait impls for the
//! primitive integer datatypes.

use core::fmt::Debug;

/// The marker trait for valid element types of the containers in this
/// crate, it is implemented for all of the primitive integer datatypes so
/// you shouldn't need to implement this yourself.
pub trait IntegerType: Ord + Copy + Debug {}

macro_rules! integer_type {
    () => {};
	($ident:ident, $($t:tt)*) => {
		impl IntegerType for $ident {}

        integer_type!($($t)*);
	};
}

integer_type!(
	u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize,
);
