//! Pass-throughs for callers still on the string-keyed interface.
//!
//! Both functions are deprecated at compile time and log a warning on every
//! call. They carry no logic of their own beyond reshaping arguments and
//! results.

use log::warn;

use crate::error::CodecError;
use crate::isa::{Command, Opcode};

/// `(opcode name, "SINGLE" | "DUAL", [arg0, arg1], [qubit0, qubit1])`
pub type UnpackedCommand = (&'static str, &'static str, [u16; 2], [u16; 2]);

/// Looks up `name` exactly as registered, builds the command and returns its
/// wire word.
#[deprecated(since = "0.1.0", note = "build a `Command` and call `to_binary`")]
pub fn command_creator(name: &str, args: &[u16], qubits: &[u16]) -> Result<u64, CodecError> {
    warn!("command_creator is deprecated, build a Command and call to_binary instead");
    let opcode = Opcode::from_name(name).ok_or(CodecError::InvalidOpcodeType)?;
    Ok(Command::new(opcode, args, qubits)?.to_binary())
}

/// Decodes `word` and returns it in the legacy tuple shape.
#[deprecated(since = "0.1.0", note = "use `Command::from_binary`")]
pub fn command_unpacker(word: u64) -> Result<UnpackedCommand, CodecError> {
    warn!("command_unpacker is deprecated, use Command::from_binary instead");
    let command = Command::from_binary(word)?;
    let opcode = command.opcode();
    Ok((
        opcode.name(),
        opcode.arity().as_str(),
        command.args(),
        command.qubits(),
    ))
}
