use crate::error::{QrError, Result};

/// Append-only bit sequence, MSB first within each byte
///
/// `bytes.len()` is always `ceil(len / 8)` and the unused low bits of the
/// last byte stay zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bytes: Vec<u8>,
    len: usize,
}

impl BitBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self {
            bytes: Vec::with_capacity(32),
            len: 0,
        }
    }

    /// Create a buffer holding whole bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            len: bytes.len() * 8,
        }
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no bits have been appended
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes needed to hold the bits
    pub fn size_in_bytes(&self) -> usize {
        (self.len + 7) >> 3
    }

    /// Backing bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Read bit `index`
    pub fn get(&self, index: usize) -> Result<bool> {
        if index >= self.len {
            return Err(QrError::BitIndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.bit(index))
    }

    fn bit(&self, index: usize) -> bool {
        (self.bytes[index >> 3] >> (7 - (index & 0x7))) & 1 == 1
    }

    /// Append a single bit
    pub fn append_bit(&mut self, bit: bool) {
        let used = self.len & 0x7;
        if used == 0 {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[self.len >> 3] |= 1 << (7 - used);
        }
        self.len += 1;
    }

    /// Append the `count` low bits of `value`, most significant first
    pub fn append_bits(&mut self, value: u32, count: usize) -> Result<()> {
        if count > 32 {
            return Err(QrError::BitCountOutOfRange(count));
        }
        let mut left = count;
        while left > 0 {
            if self.len & 0x7 == 0 && left >= 8 {
                // Byte aligned: copy a whole byte at once
                self.bytes.push((value >> (left - 8)) as u8);
                self.len += 8;
                left -= 8;
            } else {
                self.append_bit((value >> (left - 1)) & 1 == 1);
                left -= 1;
            }
        }
        Ok(())
    }

    /// Append every bit of another buffer
    pub fn append_buffer(&mut self, other: &BitBuffer) {
        if self.len & 0x7 == 0 && other.len & 0x7 == 0 {
            self.bytes.extend_from_slice(&other.bytes);
            self.len += other.len;
        } else {
            self.extend(other.iter());
        }
    }

    /// Iterate bits in order
    pub fn iter(&self) -> Bits<'_> {
        Bits {
            buffer: self,
            front: 0,
        }
    }
}

impl Extend<bool> for BitBuffer {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for bit in iter {
            self.append_bit(bit);
        }
    }
}

impl FromIterator<bool> for BitBuffer {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut buffer = BitBuffer::new();
        buffer.extend(iter);
        buffer
    }
}

impl<'a> IntoIterator for &'a BitBuffer {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over the bits of a [`BitBuffer`]
#[derive(Debug, Clone)]
pub struct Bits<'a> {
    buffer: &'a BitBuffer,
    front: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.front >= self.buffer.len {
            return None;
        }
        let bit = self.buffer.bit(self.front);
        self.front += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.buffer.len - self.front;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Bits<'_> {}
