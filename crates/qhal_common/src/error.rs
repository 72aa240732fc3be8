use core::fmt;

use crate::isa::WordField;

/// Errors raised while building, encoding or decoding a command.
///
/// All of them are local and synchronous; the codec never retries and never
/// returns a partially decoded command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// A value supplied where an opcode is required does not name a
    /// registered opcode.
    InvalidOpcodeType,
    /// More than two arguments were supplied.
    InvalidArgumentCount(usize),
    /// More than two qubit indices were supplied.
    InvalidQubitCount(usize),
    /// The opcode field of a wire word matches no registered opcode.
    UnknownOpcode(u16),
    /// A value does not fit the bit width of its wire field.
    ValueOutOfRange { field: WordField, value: u32 },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidOpcodeType => write!(f, "not a registered opcode"),
            CodecError::InvalidArgumentCount(n) => {
                write!(f, "expected at most 2 arguments, got {n}")
            }
            CodecError::InvalidQubitCount(n) => {
                write!(f, "expected at most 2 qubit indices, got {n}")
            }
            CodecError::UnknownOpcode(code) => write!(f, "unknown opcode 0x{code:03X}"),
            CodecError::ValueOutOfRange { field, value } => write!(
                f,
                "value {value} does not fit the {}-bit {field} field",
                field.width()
            ),
        }
    }
}

impl core::error::Error for CodecError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            CodecError::UnknownOpcode(0x9).to_string(),
            "unknown opcode 0x009"
        );
        assert_eq!(
            CodecError::ValueOutOfRange {
                field: WordField::Qubit1,
                value: 1024
            }
            .to_string(),
            "value 1024 does not fit the 10-bit qubit1 field"
        );
        assert_eq!(
            CodecError::InvalidArgumentCount(3).to_string(),
            "expected at most 2 arguments, got 3"
        );
    }
}
