use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

/// An unsigned integer type used as physical storage for a run of bits.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`. The bit at offset `k` of a
/// word is `(word >> k) & 1`.
pub trait Word:
    Copy
    + Eq
    + Hash
    + Debug
    + Default
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
    + Shl<usize, Output = Self>
    + Shr<usize, Output = Self>
{
    /// Number of bit positions packed per word.
    const BITS: usize;
    /// A word with every bit unset.
    const ZERO: Self;
    /// A word with every bit set.
    const ONES: Self;
    /// A word with only the lowest bit set.
    const ONE: Self;
}

macro_rules! impl_word {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Word for $ty {
                const BITS: usize = <$ty>::BITS as usize;
                const ZERO: Self = 0;
                const ONES: Self = <$ty>::MAX;
                const ONE: Self = 1;
            }
        )+
    };
}

impl_word!(u8, u16, u32, u64);

/// Number of words needed to store `bit_count` bits in words of type `W`.
///
/// # Examples
/// ```
/// use packed_bitarray::word_count;
///
/// assert_eq!(word_count::<u32>(0), 0);
/// assert_eq!(word_count::<u32>(7), 1);
/// assert_eq!(word_count::<u32>(32), 1);
/// assert_eq!(word_count::<u32>(33), 2);
/// assert_eq!(word_count::<u8>(17), 3);
/// ```
pub const fn word_count<W: Word>(bit_count: usize) -> usize {
    bit_count.div_ceil(W::BITS)
}

/// Splits a bit position into `(word_index, bit_offset)`.
#[inline]
pub(crate) const fn locate<W: Word>(position: usize) -> (usize, usize) {
    (position / W::BITS, position % W::BITS)
}

/// Mask with the lowest `width` bits set.
#[inline]
pub(crate) fn low_mask<W: Word>(width: usize) -> W {
    if width >= W::BITS {
        // shift by the full width would overflow
        W::ONES
    } else if width == 0 {
        W::ZERO
    } else {
        W::ONES >> (W::BITS - width)
    }
}

// The helpers below operate on an already validated (word, offset) pair.

#[inline]
pub(crate) fn set_bit<W: Word>(word: &mut W, offset: usize) {
    *word |= W::ONE << offset;
}

#[inline]
pub(crate) fn clear_bit<W: Word>(word: &mut W, offset: usize) {
    *word &= !(W::ONE << offset);
}

#[inline]
pub(crate) fn flip_bit<W: Word>(word: &mut W, offset: usize) {
    *word ^= W::ONE << offset;
}

#[inline]
pub(crate) fn test_bit<W: Word>(word: W, offset: usize) -> bool {
    (word >> offset) & W::ONE != W::ZERO
}
