//! Instruction set of the HAL wire protocol.
//!
//! The registry of opcodes, the bit layout of the 64-bit wire word and the
//! [`Command`] value that moves between the two.

pub mod command;
pub mod layout;
pub mod opcode;

pub use command::Command;
pub use layout::{
    ARG0_MASK, ARG1_MASK, OPCODE_MASK, QUBIT_LIMIT, QUBIT0_MASK, QUBIT1_MASK, WordField,
};
pub use opcode::{Arity, Opcode, Parametricity};
