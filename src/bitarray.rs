use crate::error::BitArrayError;
use crate::word::{Word, clear_bit, flip_bit, locate, low_mask, set_bit, test_bit, word_count};
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{Debug, Display, Formatter, Write};
use core::iter::{FusedIterator, Iterator};
use core::ops::Index;
use core::str::FromStr;
use tracing::{debug, trace};

/// A fixed-capacity array of bits packed into words of type `W`.
///
/// `capacity` is chosen at construction and never changes. Storage is exactly
/// [`word_count`] words; bit position `p` lives at offset `p % W::BITS` of
/// word `p / W::BITS`.
///
/// Padding bits in the last word are kept unset by every operation.
///
/// # Examples
/// ```
/// use packed_bitarray::PackedBitArray;
///
/// let mut bits = PackedBitArray::<u32>::new(7);
/// bits.set_all(true);
/// assert_eq!(bits.render(), "1111111");
/// bits.flip_all();
/// bits.set(0, true).unwrap();
/// bits.set(5, true).unwrap();
/// bits.flip(3).unwrap();
/// assert_eq!(bits.render(), "1001010");
/// assert_eq!(bits.get(3), Ok(true));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PackedBitArray<W: Word = u32> {
    words: Vec<W>,
    capacity: usize,
}

impl<W: Word> PackedBitArray<W> {
    /// Creates a new array of `capacity` bits, all unset.
    ///
    /// # Examples
    /// ```
    /// use packed_bitarray::PackedBitArray;
    ///
    /// let bits = PackedBitArray::<u32>::new(40);
    /// assert_eq!(bits.capacity(), 40);
    /// assert_eq!(bits.as_words(), &[0, 0]);
    /// ```
    pub fn new(capacity: usize) -> Self {
        let words = vec![W::ZERO; word_count::<W>(capacity)];
        debug!(capacity, words = words.len(), "allocated packed bit array");
        Self { words, capacity }
    }

    /// Number of addressable bit positions.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Same as [`capacity`](Self::capacity).
    #[inline]
    pub fn len(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the array has no addressable positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// The packed storage words, lowest positions first.
    #[inline]
    pub fn as_words(&self) -> &[W] {
        &self.words
    }

    /// Sets the bit at `position` to `value`.
    ///
    /// # Errors
    /// Returns [`BitArrayError::OutOfRange`] if `position >= capacity`. The
    /// array is left untouched in that case.
    ///
    /// # Examples
    /// ```
    /// use packed_bitarray::{BitArrayError, PackedBitArray};
    ///
    /// let mut bits = PackedBitArray::<u32>::new(4);
    /// bits.set(2, true).unwrap();
    /// assert_eq!(bits.render(), "0010");
    /// assert_eq!(
    ///     bits.set(4, true),
    ///     Err(BitArrayError::OutOfRange { position: 4, capacity: 4 })
    /// );
    /// ```
    pub fn set(&mut self, position: usize, value: bool) -> Result<(), BitArrayError> {
        let (word_idx, offset) = self.locate(position)?;
        if value {
            set_bit(&mut self.words[word_idx], offset);
        } else {
            clear_bit(&mut self.words[word_idx], offset);
        }
        Ok(())
    }

    /// Sets every bit to `value`.
    pub fn set_all(&mut self, value: bool) {
        trace!(capacity = self.capacity, value, "set all bits");
        let fill = if value { W::ONES } else { W::ZERO };
        self.words.fill(fill);
        self.clear_padding();
    }

    /// Clears the bit at `position`.
    ///
    /// # Errors
    /// Returns [`BitArrayError::OutOfRange`] if `position >= capacity`.
    #[inline]
    pub fn reset(&mut self, position: usize) -> Result<(), BitArrayError> {
        self.set(position, false)
    }

    /// Clears every bit.
    #[inline]
    pub fn reset_all(&mut self) {
        self.set_all(false);
    }

    /// Toggles the bit at `position`.
    ///
    /// # Errors
    /// Returns [`BitArrayError::OutOfRange`] if `position >= capacity`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitarray::PackedBitArray;
    ///
    /// let mut bits = PackedBitArray::<u8>::new(3);
    /// bits.flip(1).unwrap();
    /// assert_eq!(bits.get(1), Ok(true));
    /// bits.flip(1).unwrap();
    /// assert_eq!(bits.get(1), Ok(false));
    /// ```
    pub fn flip(&mut self, position: usize) -> Result<(), BitArrayError> {
        let (word_idx, offset) = self.locate(position)?;
        flip_bit(&mut self.words[word_idx], offset);
        Ok(())
    }

    /// Toggles every bit.
    ///
    /// # Examples
    /// ```
    /// use packed_bitarray::PackedBitArray;
    ///
    /// let mut bits: PackedBitArray = "0110".parse().unwrap();
    /// bits.flip_all();
    /// assert_eq!(bits.render(), "1001");
    /// ```
    pub fn flip_all(&mut self) {
        trace!(capacity = self.capacity, "flip all bits");
        for word in &mut self.words {
            *word ^= W::ONES;
        }
        self.clear_padding();
    }

    /// Returns the value of the bit at `position`.
    ///
    /// # Errors
    /// Returns [`BitArrayError::OutOfRange`] if `position >= capacity`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitarray::{BitArrayError, PackedBitArray};
    ///
    /// let bits: PackedBitArray = "101".parse().unwrap();
    /// assert_eq!(bits.get(0), Ok(true));
    /// assert_eq!(bits.get(1), Ok(false));
    /// assert!(matches!(bits.get(3), Err(BitArrayError::OutOfRange { .. })));
    /// ```
    #[inline]
    pub fn get(&self, position: usize) -> Result<bool, BitArrayError> {
        let (word_idx, offset) = self.locate(position)?;
        Ok(test_bit(self.words[word_idx], offset))
    }

    /// Renders the array as `capacity` characters of `'0'` and `'1'`, position
    /// 0 first.
    ///
    /// # Examples
    /// ```
    /// use packed_bitarray::PackedBitArray;
    ///
    /// let mut bits = PackedBitArray::<u32>::new(7);
    /// assert_eq!(bits.render(), "0000000");
    /// bits.set(0, true).unwrap();
    /// assert_eq!(bits.render(), "1000000");
    /// ```
    pub fn render(&self) -> String {
        self.iter().map(bit_char).collect()
    }

    /// Returns an iterator over all bits as `bool`, position 0 first.
    ///
    /// The iterator yields exactly `capacity` items.
    #[inline]
    pub fn iter(&self) -> Iter<'_, W> {
        Iter {
            words: &self.words,
            position: 0,
            capacity: self.capacity,
        }
    }

    fn locate(&self, position: usize) -> Result<(usize, usize), BitArrayError> {
        if position >= self.capacity {
            debug!(position, capacity = self.capacity, "bit position out of range");
            return Err(BitArrayError::OutOfRange {
                position,
                capacity: self.capacity,
            });
        }
        Ok(locate::<W>(position))
    }

    fn clear_padding(&mut self) {
        let bits_in_last = self.capacity % W::BITS;
        if bits_in_last != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= low_mask::<W>(bits_in_last);
            }
        }
    }

    fn push_bit(&mut self, value: bool) {
        let (word_idx, offset) = locate::<W>(self.capacity);
        if word_idx == self.words.len() {
            self.words.push(W::ZERO);
        }
        if value {
            set_bit(&mut self.words[word_idx], offset);
        }
        self.capacity += 1;
    }
}

#[inline]
fn bit_char(bit: bool) -> char {
    if bit { '1' } else { '0' }
}

impl<W: Word> Default for PackedBitArray<W> {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Panics if `position >= capacity`. Use [`PackedBitArray::get`] for a
/// checked read.
impl<W: Word> Index<usize> for PackedBitArray<W> {
    type Output = bool;

    fn index(&self, position: usize) -> &bool {
        match self.get(position) {
            Ok(true) => &true,
            Ok(false) => &false,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<W: Word> Display for PackedBitArray<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for bit in self {
            f.write_char(bit_char(bit))?;
        }
        Ok(())
    }
}

impl<W: Word> Debug for PackedBitArray<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "PackedBitArray<{}>[{}] LSB -> ",
            core::any::type_name::<W>(),
            self.capacity
        )?;
        for (i, bit) in self.iter().enumerate() {
            if i % W::BITS == 0 {
                if i != 0 {
                    write!(f, " ")?;
                }
                write!(f, "{i}: ")?;
            }
            f.write_char(bit_char(bit))?;
        }
        write!(f, " <- MSB")
    }
}

/// Parses a string of `'0'` and `'1'`, position 0 first. The resulting
/// capacity is the number of characters.
impl<W: Word> FromStr for PackedBitArray<W> {
    type Err = BitArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = Self {
            words: Vec::with_capacity(word_count::<W>(s.len())),
            capacity: 0,
        };
        for (index, found) in s.chars().enumerate() {
            match found {
                '0' => bits.push_bit(false),
                '1' => bits.push_bit(true),
                _ => return Err(BitArrayError::InvalidDigit { index, found }),
            }
        }
        Ok(bits)
    }
}

/// Collects bits in order; the capacity is the number of items yielded.
impl<W: Word> FromIterator<bool> for PackedBitArray<W> {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let mut bits = Self {
            words: Vec::new(),
            capacity: 0,
        };
        for bit in iter {
            bits.push_bit(bit);
        }
        bits
    }
}

impl<'a, W: Word> IntoIterator for &'a PackedBitArray<W> {
    type Item = bool;
    type IntoIter = Iter<'a, W>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over all bits of a [`PackedBitArray`] as `bool` values.
///
/// Returned by [`PackedBitArray::iter()`].
#[derive(Clone, Copy)]
pub struct Iter<'a, W: Word> {
    words: &'a [W],
    position: usize,
    capacity: usize,
}

impl<W: Word> Iterator for Iter<'_, W> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.capacity {
            return None;
        }
        let (word_idx, offset) = locate::<W>(self.position);
        self.position += 1;
        Some(test_bit(self.words[word_idx], offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.capacity - self.position;
        (remaining, Some(remaining))
    }
}

impl<W: Word> ExactSizeIterator for Iter<'_, W> {}

impl<W: Word> FusedIterator for Iter<'_, W> {}
