//! Instruction codec shared by everything that talks to the quantum HAL.
//!
//! This crate defines the closed set of hardware operations, the 64-bit wire
//! word that carries one instruction to control hardware or a simulator, and
//! the pure functions that translate between the two. Nothing here performs
//! I/O, so it builds without `std` and can be linked into firmware as well
//! as host tools.

#![cfg_attr(not(test), no_std)]

/// Error taxonomy for command construction and wire decoding.
///
/// Every failure is returned synchronously to the caller; the codec keeps no
/// state and has nothing to recover.
pub mod error;

/// Opcode registry, wire-word layout and the command codec.
///
/// The registry is a compile-time table whose integrity (raw-code ceiling,
/// unique encoded values, unique names) is asserted during const evaluation.
pub mod isa;

/// String-keyed wrappers kept for callers that predate [`isa::Command`].
pub mod legacy;

pub use error::CodecError;
pub use isa::{Arity, Command, Opcode, Parametricity, WordField};
