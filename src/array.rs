//! Fixed-size arrays.

use core::fmt;
use core::hash::Hash;

/// Trait for fixed size arrays.
///
/// Every slot of an `Array` always holds an initialized value; containers
/// built on it overwrite slots instead of constructing and destroying them.
pub trait Array {
    /// The array’s element type
    type Item;

    /// The smallest index type that can represent the length of the array.
    type Index: Index;

    /// Returns number of element the array can hold
    fn capacity() -> usize;

    /// Creates an array whose slot `i` holds `f(i)`.
    fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> Self::Item;

    /// Converts the array to immutable slice
    fn as_slice(&self) -> &[Self::Item];

    /// Converts the array to mutable slice
    fn as_mut_slice(&mut self) -> &mut [Self::Item];
}

/// Unsigned integer used to store positions inside an [`Array`].
pub trait Index: Copy + Default + Eq + Hash + fmt::Debug {
    /// Widens the index to `usize`.
    fn to_usize(self) -> usize;

    /// Narrows `ix` to the index type.
    ///
    /// `ix` must fit; positions handed to this function never exceed the
    /// length of the array the index type was selected for.
    fn from_usize(ix: usize) -> Self;
}

macro_rules! index_impl {
    ($($ty:ty),*) => {
        $(
            impl Index for $ty {
                #[inline(always)]
                fn to_usize(self) -> usize {
                    self as usize
                }

                #[inline(always)]
                fn from_usize(ix: usize) -> Self {
                    debug_assert!(ix <= <$ty>::MAX as usize);
                    ix as $ty
                }
            }
        )*
    };
}

index_impl!(u8, u16, u32, usize);

/// Bit width of the smallest unsigned integer that represents `[0, max]`.
///
/// ```
/// use inplace::smallest_unsigned_width;
///
/// assert_eq!(smallest_unsigned_width(255), 8);
/// assert_eq!(smallest_unsigned_width(256), 16);
/// assert_eq!(smallest_unsigned_width(u64::MAX), 64);
/// ```
pub const fn smallest_unsigned_width(max: u64) -> u32 {
    if max <= u8::MAX as u64 {
        8
    } else if max <= u16::MAX as u64 {
        16
    } else if max <= u32::MAX as u64 {
        32
    } else {
        64
    }
}

/// A length known at compile time.
pub struct Capacity<const N: usize>;

/// Selects the narrowest [`Index`] able to represent `0..=N`.
///
/// Implemented for every length from 1 to 1024, and beyond that for the
/// powers of two up to 2<sup>20</sup> and for `u16::MAX`.
pub trait SmallestIndex {
    /// The selected index type.
    type Index: Index;
}

macro_rules! smallest_index_impl {
    ($ix:ty => $($n:expr),* $(,)?) => {
        $(
            impl SmallestIndex for Capacity<{ $n }> {
                type Index = $ix;
            }
        )*
    };
}

// Every length `hundreds * 100 + tens * 10 + units` for the given digits.
macro_rules! smallest_index_digits {
    (@units $ix:ty, $h:literal, $t:literal, [$($u:literal)*]) => {
        smallest_index_impl!($ix => $($h * 100 + $t * 10 + $u),*);
    };
    (@tens $ix:ty, $h:literal, [$($t:literal)*], $u:tt) => {
        $( smallest_index_digits!(@units $ix, $h, $t, $u); )*
    };
    ($ix:ty => [$($h:literal)*] $t:tt $u:tt) => {
        $( smallest_index_digits!(@tens $ix, $h, $t, $u); )*
    };
}

// 1..=255
smallest_index_digits!(@units u8, 0, 0, [1 2 3 4 5 6 7 8 9]);
smallest_index_digits!(@tens u8, 0, [1 2 3 4 5 6 7 8 9], [0 1 2 3 4 5 6 7 8 9]);
smallest_index_digits!(u8 => [1] [0 1 2 3 4 5 6 7 8 9] [0 1 2 3 4 5 6 7 8 9]);
smallest_index_digits!(u8 => [2] [0 1 2 3 4] [0 1 2 3 4 5 6 7 8 9]);
smallest_index_digits!(@units u8, 2, 5, [0 1 2 3 4 5]);

// 256..=1024
smallest_index_digits!(@units u16, 2, 5, [6 7 8 9]);
smallest_index_digits!(@tens u16, 2, [6 7 8 9], [0 1 2 3 4 5 6 7 8 9]);
smallest_index_digits!(u16 => [3 4 5 6 7 8 9] [0 1 2 3 4 5 6 7 8 9] [0 1 2 3 4 5 6 7 8 9]);
smallest_index_digits!(u16 => [10] [0 1] [0 1 2 3 4 5 6 7 8 9]);
smallest_index_digits!(@units u16, 10, 2, [0 1 2 3 4]);

smallest_index_impl!(u16 =>
    2048, 4096, 8192, 16384, 32768, 65535,
);
smallest_index_impl!(u32 =>
    65536, 1 << 17, 1 << 18, 1 << 19, 1 << 20,
);

impl<T, const N: usize> Array for [T; N]
where
    Capacity<N>: SmallestIndex,
{
    type Item = T;
    type Index = <Capacity<N> as SmallestIndex>::Index;

    #[inline(always)]
    fn capacity() -> usize {
        N
    }

    #[inline]
    fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        core::array::from_fn(f)
    }

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        self
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

#[cfg(feature = "use_generic_array")]
mod generic_impl {
    use super::Array;
    use generic_array::sequence::GenericSequence;
    use generic_array::typenum::Unsigned;
    use generic_array::{ArrayLength, GenericArray};

    impl<T, N> Array for GenericArray<T, N>
    where
        N: ArrayLength<T>,
    {
        type Item = T;

        type Index = usize;

        #[inline(always)]
        fn capacity() -> usize {
            N::to_usize()
        }

        #[inline]
        fn from_fn<F>(f: F) -> Self
        where
            F: FnMut(usize) -> T,
        {
            <Self as GenericSequence<T>>::generate(f)
        }

        #[inline(always)]
        fn as_slice(&self) -> &[T] {
            GenericArray::as_slice(self)
        }

        #[inline(always)]
        fn as_mut_slice(&mut self) -> &mut [T] {
            GenericArray::as_mut_slice(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::size_of;

    fn index_width<A: Array>() -> u32 {
        (size_of::<A::Index>() * 8) as u32
    }

    #[test]
    fn index_type_is_the_narrowest_that_fits() {
        macro_rules! check {
            ($($n:expr),*) => {
                $(
                    assert_eq!(
                        index_width::<[u64; $n]>(),
                        smallest_unsigned_width($n as u64),
                        "length {}",
                        $n
                    );
                )*
            };
        }

        check!(1, 5, 11, 32, 64, 255, 256, 1024, 65535, 65536, 1 << 20);
    }

    #[test]
    fn every_small_length_has_an_index() {
        macro_rules! check {
            ($($n:expr),*) => {
                $(
                    assert_eq!(
                        index_width::<[u8; $n]>(),
                        smallest_unsigned_width($n as u64),
                        "length {}",
                        $n
                    );
                    assert_eq!(<[u8; $n] as Array>::capacity(), $n);
                )*
            };
        }

        check!(9, 10, 35, 37, 42, 99, 100, 199, 200, 249, 250, 254, 257, 259, 260, 299);
        check!(300, 513, 999, 1000, 1019, 1020, 1023);
    }

    #[test]
    fn index_type_does_not_depend_on_element() {
        assert_eq!(index_width::<[u8; 300 - 44]>(), index_width::<[(); 256]>());
    }

    #[test]
    fn width_boundaries() {
        assert_eq!(smallest_unsigned_width(0), 8);
        assert_eq!(smallest_unsigned_width(u8::MAX as u64), 8);
        assert_eq!(smallest_unsigned_width(u8::MAX as u64 + 1), 16);
        assert_eq!(smallest_unsigned_width(u16::MAX as u64), 16);
        assert_eq!(smallest_unsigned_width(u16::MAX as u64 + 1), 32);
        assert_eq!(smallest_unsigned_width(u32::MAX as u64), 32);
        assert_eq!(smallest_unsigned_width(u32::MAX as u64 + 1), 64);
    }

    #[test]
    fn from_fn_fills_every_slot() {
        let xs = <[usize; 7] as Array>::from_fn(|i| i * i);
        assert_eq!(xs.as_slice(), &[0, 1, 4, 9, 16, 25, 36]);
        assert_eq!(<[usize; 7] as Array>::capacity(), 7);
    }

    #[test]
    fn index_round_trip() {
        assert_eq!(<u8 as Index>::from_usize(200).to_usize(), 200);
        assert_eq!(<u16 as Index>::from_usize(40_000).to_usize(), 40_000);
        assert_eq!(<usize as Index>::from_usize(usize::MAX).to_usize(), usize::MAX);
    }
}
