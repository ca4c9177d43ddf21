use std::fmt;
use std::fmt::Write as _;

/// Growable sequence of bits, packed into bytes in MSB-first order
pub struct Bitstring {
    /// packed bit storage, the last byte may be partially used
    bytes: Vec<u8>,
    /// number of valid bits in `bytes`
    bit_len: usize,
}

impl Bitstring {
    pub fn new() -> Bitstring {
        Bitstring {
            bytes: Vec::new(),
            bit_len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.bit_len
    }

    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    pub fn push_bit(&mut self, bit: bool) {
        let offset = self.bit_len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last_index = self.bytes.len() - 1;
            self.bytes[last_index] |= 0b1000_0000_u8 >> offset;
        }
        self.bit_len += 1;
    }

    /// Append a codeword given as a string of '0' and '1' characters.
    pub fn push_codeword(&mut self, codeword: &str) {
        for bit in codeword.chars() {
            self.push_bit(bit == '1');
        }
    }

    /// Read the bit at `index`. Panics when `index` is out of bounds.
    pub fn bit(&self, index: usize) -> bool {
        assert!(index < self.bit_len, "bit index {} out of bounds", index);
        self.bytes[index / 8] & (0b1000_0000_u8 >> (index % 8)) > 0
    }

    pub fn iter(&self) -> Bits<'_> {
        Bits {
            bitstring: self,
            index: 0,
        }
    }

    /// Shorten the sequence to `bit_len` bits; a no-op when already shorter.
    /// Bits past the new end are cleared so the packed bytes stay canonical.
    pub fn truncate(&mut self, bit_len: usize) {
        if bit_len >= self.bit_len {
            return;
        }
        self.bit_len = bit_len;
        self.bytes.truncate(bit_len.div_ceil(8));
        let used = bit_len % 8;
        if used != 0 {
            if let Some(last) = self.bytes.last_mut() {
                *last &= !(0xFF_u8 >> used);
            }
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Bitstring {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Bits<'a> {
    bitstring: &'a Bitstring,
    index: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.index >= self.bitstring.bit_len {
            return None;
        }
        let bit = self.bitstring.bit(self.index);
        self.index += 1;
        Some(bit)
    }
}

impl fmt::Display for Bitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_char(if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}
