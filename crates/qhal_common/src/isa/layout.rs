//! Bit layout of the 64-bit wire word.
//!
//! ```text
//!  63        52 51            36 35            20 19      10 9        0
//! +------------+----------------+----------------+----------+----------+
//! |   opcode   |      arg1      |      arg0      |  qubit1  |  qubit0  |
//! +------------+----------------+----------------+----------+----------+
//! ```

use core::fmt;

/// One field of the wire word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordField {
    Opcode,
    Arg1,
    Arg0,
    Qubit1,
    Qubit0,
}

impl WordField {
    /// All fields, most significant first.
    pub const ALL: [WordField; 5] = [
        WordField::Opcode,
        WordField::Arg1,
        WordField::Arg0,
        WordField::Qubit1,
        WordField::Qubit0,
    ];

    /// Position of the field's least significant bit.
    pub const fn shift(self) -> u32 {
        match self {
            WordField::Opcode => 52,
            WordField::Arg1 => 36,
            WordField::Arg0 => 20,
            WordField::Qubit1 => 10,
            WordField::Qubit0 => 0,
        }
    }

    pub const fn width(self) -> u32 {
        match self {
            WordField::Opcode => 12,
            WordField::Arg1 | WordField::Arg0 => 16,
            WordField::Qubit1 | WordField::Qubit0 => 10,
        }
    }

    /// Largest value the field can hold.
    pub const fn max_value(self) -> u64 {
        (1 << self.width()) - 1
    }

    /// In-word mask covering the field.
    pub const fn mask(self) -> u64 {
        self.max_value() << self.shift()
    }

    /// Most significant bit position of the field.
    pub const fn high_bit(self) -> u32 {
        self.shift() + self.width() - 1
    }

    #[inline(always)]
    pub const fn extract(self, word: u64) -> u64 {
        (word & self.mask()) >> self.shift()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WordField::Opcode => "opcode",
            WordField::Arg1 => "arg1",
            WordField::Arg0 => "arg0",
            WordField::Qubit1 => "qubit1",
            WordField::Qubit0 => "qubit0",
        }
    }
}

impl fmt::Display for WordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

pub const OPCODE_MASK: u64 = WordField::Opcode.mask();
pub const ARG1_MASK: u64 = WordField::Arg1.mask();
pub const ARG0_MASK: u64 = WordField::Arg0.mask();
pub const QUBIT1_MASK: u64 = WordField::Qubit1.mask();
pub const QUBIT0_MASK: u64 = WordField::Qubit0.mask();

/// Exclusive upper bound on a qubit index.
pub const QUBIT_LIMIT: u16 = 1 << 10;

// Fields tile the word exactly.
const _: () = assert!(
    OPCODE_MASK ^ ARG1_MASK ^ ARG0_MASK ^ QUBIT1_MASK ^ QUBIT0_MASK == u64::MAX
        && OPCODE_MASK | ARG1_MASK | ARG0_MASK | QUBIT1_MASK | QUBIT0_MASK == u64::MAX
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_match_wire_format() {
        assert_eq!(OPCODE_MASK, 0xFFF0_0000_0000_0000);
        assert_eq!(ARG1_MASK, 0x000F_FFF0_0000_0000);
        assert_eq!(ARG0_MASK, 0x0000_000F_FFF0_0000);
        assert_eq!(QUBIT1_MASK, 0x0000_0000_000F_FC00);
        assert_eq!(QUBIT0_MASK, 0x3FF);
    }

    #[test]
    fn bit_ranges() {
        let ranges: Vec<(u32, u32)> = WordField::ALL
            .iter()
            .map(|f| (f.high_bit(), f.shift()))
            .collect();
        assert_eq!(ranges, vec![(63, 52), (51, 36), (35, 20), (19, 10), (9, 0)]);
    }

    #[test]
    fn extract_isolates_fields() {
        let word = 0xABC1_2345_6789_ABCD;
        assert_eq!(WordField::Opcode.extract(word), 0xABC);
        assert_eq!(WordField::Arg1.extract(word), 0x1234);
        assert_eq!(WordField::Arg0.extract(word), 0x5678);
        assert_eq!(WordField::Qubit1.extract(word), 0x9AB >> 2);
        assert_eq!(WordField::Qubit0.extract(word), 0x3CD);
    }
}
