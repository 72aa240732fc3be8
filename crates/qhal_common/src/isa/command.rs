//! The logical instruction and its wire-word codec.

use core::fmt;

use super::layout::{QUBIT_LIMIT, WordField};
use super::opcode::Opcode;
use crate::error::CodecError;

/// One logical instruction: an opcode, two 16-bit arguments and two 10-bit
/// qubit indices.
///
/// Equality is structural over all five fields. Omitted arguments and qubit
/// indices are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Command {
    opcode: Opcode,
    args: [u16; 2],
    qubits: [u16; 2],
}

impl Command {
    /// Builds a command, padding missing arguments and qubits with zero.
    ///
    /// Qubit indices are checked against their 10-bit field here rather than
    /// being allowed to bleed into `qubit1`/`arg0` at encode time.
    ///
    /// A second qubit index on a single-arity opcode is accepted and encoded,
    /// but [`Command::from_binary`] reconstructs it as zero.
    ///
    /// # Errors
    ///
    /// * [`CodecError::InvalidArgumentCount`] for more than two arguments
    /// * [`CodecError::InvalidQubitCount`] for more than two qubit indices
    /// * [`CodecError::ValueOutOfRange`] for a qubit index of 1024 or more
    pub fn new(opcode: Opcode, args: &[u16], qubits: &[u16]) -> Result<Self, CodecError> {
        if args.len() > 2 {
            return Err(CodecError::InvalidArgumentCount(args.len()));
        }
        if qubits.len() > 2 {
            return Err(CodecError::InvalidQubitCount(qubits.len()));
        }

        let mut packed_args = [0u16; 2];
        packed_args[..args.len()].copy_from_slice(args);

        let mut packed_qubits = [0u16; 2];
        let fields = [WordField::Qubit0, WordField::Qubit1];
        for ((slot, &qubit), field) in packed_qubits.iter_mut().zip(qubits).zip(fields) {
            if qubit >= QUBIT_LIMIT {
                return Err(CodecError::ValueOutOfRange {
                    field,
                    value: qubit.into(),
                });
            }
            *slot = qubit;
        }

        Ok(Self {
            opcode,
            args: packed_args,
            qubits: packed_qubits,
        })
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// `[arg0, arg1]`
    pub fn args(&self) -> [u16; 2] {
        self.args
    }

    /// `[qubit0, qubit1]`
    pub fn qubits(&self) -> [u16; 2] {
        self.qubits
    }

    /// Packs the command into its 64-bit wire word.
    ///
    /// `qubit1` is written regardless of the opcode's arity.
    pub fn to_binary(&self) -> u64 {
        (u64::from(self.opcode.encoded_value()) << WordField::Opcode.shift())
            | (u64::from(self.args[1]) << WordField::Arg1.shift())
            | (u64::from(self.args[0]) << WordField::Arg0.shift())
            | (u64::from(self.qubits[1]) << WordField::Qubit1.shift())
            | (u64::from(self.qubits[0]) << WordField::Qubit0.shift())
    }

    /// Reconstructs a command from a wire word.
    ///
    /// The 12-bit opcode field must match a registered opcode exactly. The
    /// `qubit1` field is only read for dual-arity opcodes; for single-arity
    /// ones it comes back as zero whatever the word contains.
    pub fn from_binary(word: u64) -> Result<Self, CodecError> {
        let code = WordField::Opcode.extract(word) as u16;
        let opcode = Opcode::from_encoded(code).ok_or(CodecError::UnknownOpcode(code))?;

        let qubit1 = if opcode.is_dual() {
            WordField::Qubit1.extract(word) as u16
        } else {
            0
        };

        Ok(Self {
            opcode,
            args: [
                WordField::Arg0.extract(word) as u16,
                WordField::Arg1.extract(word) as u16,
            ],
            qubits: [WordField::Qubit0.extract(word) as u16, qubit1],
        })
    }
}

impl From<Opcode> for Command {
    fn from(opcode: Opcode) -> Self {
        Self {
            opcode,
            args: [0; 2],
            qubits: [0; 2],
        }
    }
}

impl From<Command> for u64 {
    fn from(command: Command) -> Self {
        command.to_binary()
    }
}

impl TryFrom<u64> for Command {
    type Error = CodecError;

    fn try_from(word: u64) -> Result<Self, Self::Error> {
        Self::from_binary(word)
    }
}

/// Assembly form: `NAME [arg0 arg1] q<qubit0> [q<qubit1>]`.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opcode)?;
        if self.opcode.has_param() || self.args != [0, 0] {
            write!(f, " {} {}", self.args[0], self.args[1])?;
        }
        write!(f, " q{}", self.qubits[0])?;
        if self.opcode.is_dual() || self.qubits[1] != 0 {
            write!(f, " q{}", self.qubits[1])?;
        }
        Ok(())
    }
}
