//! Closed registry of hardware operations understood by the HAL.
//!
//! Every opcode owns a 10-bit raw code plus two classification flags that are
//! folded into its 12-bit encoded value: bit 10 marks a parametric operation
//! and bit 11 marks a dual-operand operation. The encoded value is what
//! travels in the top 12 bits of a wire word, so the table below must stay
//! bit-exact with the firmware and simulators that consume it.

use core::fmt;
use core::str::FromStr;

use crate::error::CodecError;

/// Encoded-value flag set on operations that carry runtime arguments.
pub const PARAM_FLAG: u16 = 0x400;

/// Encoded-value flag set on operations that address two operands.
pub const DUAL_FLAG: u16 = 0x800;

/// Exclusive upper bound on raw codes. Anything at or above this would
/// overlap the flag bits.
pub const RAW_CODE_LIMIT: u16 = 0x400;

/// Number of operands an opcode addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    Single,
    Dual,
}

impl Arity {
    /// Returns the tag used by the string-keyed legacy interface.
    pub fn as_str(&self) -> &'static str {
        match self {
            Arity::Single => "SINGLE",
            Arity::Dual => "DUAL",
        }
    }
}

/// Whether an opcode consumes its argument fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parametricity {
    Const,
    Param,
}

impl Parametricity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Parametricity::Const => "CONST",
            Parametricity::Param => "PARAM",
        }
    }
}

use Arity::{Dual, Single};
use Parametricity::{Const, Param};

/// A registered hardware operation.
///
/// Values of this type can only be obtained from the associated constants
/// (`Opcode::CNOT`, ...), from [`Opcode::ALL`], or through one of the lookup
/// functions, so holding an `Opcode` proves it belongs to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opcode {
    name: &'static str,
    raw_code: u16,
    arity: Arity,
    parametricity: Parametricity,
}

impl Opcode {
    /// Defines a registry entry. Evaluated in const context, so a raw code
    /// that overlaps the flag bits fails the build.
    const fn define(
        name: &'static str,
        raw_code: u16,
        arity: Arity,
        parametricity: Parametricity,
    ) -> Self {
        assert!(
            raw_code < RAW_CODE_LIMIT,
            "opcode raw code overlaps the arity/parametricity flag bits"
        );
        Self {
            name,
            raw_code,
            arity,
            parametricity,
        }
    }

    // Session and paging control
    pub const NOP: Opcode = Opcode::define("NOP", 0, Single, Const);
    pub const START_SESSION: Opcode = Opcode::define("START_SESSION", 1, Single, Const);
    pub const END_SESSION: Opcode = Opcode::define("END_SESSION", 2, Single, Const);
    pub const PAGE_SET_QUBIT_0: Opcode = Opcode::define("PAGE_SET_QUBIT_0", 3, Single, Const);
    pub const PAGE_SET_QUBIT_1: Opcode = Opcode::define("PAGE_SET_QUBIT_1", 4, Single, Const);
    pub const STATE_PREPARATION_ALL: Opcode =
        Opcode::define("STATE_PREPARATION_ALL", 5, Single, Const);
    pub const STATE_PREPARATION: Opcode = Opcode::define("STATE_PREPARATION", 6, Single, Const);
    pub const QUBIT_MEASURE: Opcode = Opcode::define("QUBIT_MEASURE", 7, Single, Param);
    /// Dual even though the second operand is a row selector rather than a
    /// qubit. Firmware relies on this classification.
    pub const REQUEST_METADATA: Opcode = Opcode::define("REQUEST_METADATA", 8, Dual, Param);

    // Rotations
    pub const RX: Opcode = Opcode::define("RX", 10, Single, Param);
    pub const RY: Opcode = Opcode::define("RY", 11, Single, Param);
    pub const RZ: Opcode = Opcode::define("RZ", 12, Single, Param);
    pub const R: Opcode = Opcode::define("R", 13, Single, Param);

    // Paulis
    pub const PAULI_X: Opcode = Opcode::define("PAULI_X", 20, Single, Const);
    pub const PAULI_Y: Opcode = Opcode::define("PAULI_Y", 21, Single, Const);
    pub const PAULI_Z: Opcode = Opcode::define("PAULI_Z", 22, Single, Const);

    // Fixed single-qubit gates
    pub const H: Opcode = Opcode::define("H", 30, Single, Const);
    pub const PHASE: Opcode = Opcode::define("PHASE", 31, Single, Param);
    pub const T: Opcode = Opcode::define("T", 32, Single, Const);
    pub const S: Opcode = Opcode::define("S", 33, Single, Const);
    pub const X: Opcode = Opcode::define("X", 34, Single, Const);
    pub const Y: Opcode = Opcode::define("Y", 35, Single, Const);
    pub const Z: Opcode = Opcode::define("Z", 36, Single, Const);
    pub const INVT: Opcode = Opcode::define("INVT", 37, Single, Const);
    pub const INVS: Opcode = Opcode::define("INVS", 38, Single, Const);
    pub const SX: Opcode = Opcode::define("SX", 39, Single, Const);
    pub const SY: Opcode = Opcode::define("SY", 40, Single, Const);
    pub const PIXY: Opcode = Opcode::define("PIXY", 41, Single, Param);
    pub const PIYZ: Opcode = Opcode::define("PIYZ", 42, Single, Param);
    pub const PIZX: Opcode = Opcode::define("PIZX", 43, Single, Param);
    pub const SQRT_X: Opcode = Opcode::define("SQRT_X", 44, Single, Const);

    // Control flow
    pub const FOR_START: Opcode = Opcode::define("FOR_START", 50, Single, Param);
    pub const FOR_END: Opcode = Opcode::define("FOR_END", 51, Single, Param);
    pub const IF: Opcode = Opcode::define("IF", 52, Single, Param);
    pub const WHILE: Opcode = Opcode::define("WHILE", 53, Single, Param);

    // Two-qubit gates
    pub const CNOT: Opcode = Opcode::define("CNOT", 60, Dual, Const);
    pub const SWAP: Opcode = Opcode::define("SWAP", 61, Dual, Const);
    pub const PSWAP: Opcode = Opcode::define("PSWAP", 62, Dual, Param);
    pub const RZZ: Opcode = Opcode::define("RZZ", 63, Dual, Param);
    pub const RXX: Opcode = Opcode::define("RXX", 64, Dual, Param);

    pub const ID: Opcode = Opcode::define("ID", 1000, Single, Const);

    /// Every registered opcode, in raw-code order.
    pub const ALL: [Opcode; 41] = [
        Opcode::NOP,
        Opcode::START_SESSION,
        Opcode::END_SESSION,
        Opcode::PAGE_SET_QUBIT_0,
        Opcode::PAGE_SET_QUBIT_1,
        Opcode::STATE_PREPARATION_ALL,
        Opcode::STATE_PREPARATION,
        Opcode::QUBIT_MEASURE,
        Opcode::REQUEST_METADATA,
        Opcode::RX,
        Opcode::RY,
        Opcode::RZ,
        Opcode::R,
        Opcode::PAULI_X,
        Opcode::PAULI_Y,
        Opcode::PAULI_Z,
        Opcode::H,
        Opcode::PHASE,
        Opcode::T,
        Opcode::S,
        Opcode::X,
        Opcode::Y,
        Opcode::Z,
        Opcode::INVT,
        Opcode::INVS,
        Opcode::SX,
        Opcode::SY,
        Opcode::PIXY,
        Opcode::PIYZ,
        Opcode::PIZX,
        Opcode::SQRT_X,
        Opcode::FOR_START,
        Opcode::FOR_END,
        Opcode::IF,
        Opcode::WHILE,
        Opcode::CNOT,
        Opcode::SWAP,
        Opcode::PSWAP,
        Opcode::RZZ,
        Opcode::RXX,
        Opcode::ID,
    ];

    /// The registry name, e.g. `"CNOT"`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The 10-bit code without classification flags.
    pub const fn raw_code(&self) -> u16 {
        self.raw_code
    }

    pub const fn arity(&self) -> Arity {
        self.arity
    }

    pub const fn parametricity(&self) -> Parametricity {
        self.parametricity
    }

    /// Returns the 12-bit value written into the top of a wire word.
    pub const fn encoded_value(&self) -> u16 {
        let mut value = self.raw_code;
        if matches!(self.parametricity, Param) {
            value |= PARAM_FLAG;
        }
        if matches!(self.arity, Dual) {
            value |= DUAL_FLAG;
        }
        value
    }

    #[inline(always)]
    pub const fn is_dual(&self) -> bool {
        self.encoded_value() & DUAL_FLAG != 0
    }

    #[inline(always)]
    pub const fn has_param(&self) -> bool {
        self.encoded_value() & PARAM_FLAG != 0
    }

    /// Finds the opcode whose encoded value equals `code` exactly.
    pub fn from_encoded(code: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.encoded_value() == code)
    }

    /// Finds an opcode by its exact (case-sensitive) registry name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.name == name)
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

// Registry must stay collision free: no shared encoded values, no shared names.
const _: () = {
    let all = &Opcode::ALL;
    let mut i = 0;
    while i < all.len() {
        let mut j = i + 1;
        while j < all.len() {
            assert!(
                all[i].encoded_value() != all[j].encoded_value(),
                "two opcodes share an encoded value"
            );
            assert!(!str_eq(all[i].name, all[j].name), "two opcodes share a name");
            j += 1;
        }
        i += 1;
    }
};

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name)
    }
}

/// Case-insensitive mnemonic lookup, used by assemblers.
impl FromStr for Opcode {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name.eq_ignore_ascii_case(s))
            .ok_or(CodecError::InvalidOpcodeType)
    }
}

impl TryFrom<u16> for Opcode {
    type Error = CodecError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::from_encoded(code).ok_or(CodecError::UnknownOpcode(code))
    }
}
