//! Parser for the textual assembly form of HAL commands.
//!
//! One command per line:
//!
//! ```text
//! # comment
//! CNOT q2, q5
//! RX 1000 0 q3      ; arguments are bare integers, qubits carry a `q`
//! REQUEST_METADATA 0x2 1 q0 q0
//! ```
//!
//! Mnemonics are case-insensitive. Operands are separated by whitespace,
//! commas, or both. Arguments and qubits may appear in any order; they are
//! assigned to `arg0`/`arg1` and `qubit0`/`qubit1` in the order they occur.

use anyhow::{Context, Result, anyhow};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::{char, digit1, hex_digit1, space0, space1},
    combinator::{all_consuming, map, map_res, recognize},
    multi::many0,
    sequence::{preceded, tuple},
};
use qhal_common::{Command, Opcode};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operand {
    Arg(u16),
    Qubit(u16),
}

fn mnemonic(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)
}

fn number(input: &str) -> IResult<&str, u16> {
    alt((
        map_res(preceded(tag_no_case("0x"), hex_digit1), |hex: &str| {
            u16::from_str_radix(hex, 16)
        }),
        map_res(digit1, |dec: &str| dec.parse::<u16>()),
    ))(input)
}

fn operand(input: &str) -> IResult<&str, Operand> {
    alt((
        map(
            preceded(tag_no_case("q"), map_res(digit1, |idx: &str| idx.parse::<u16>())),
            Operand::Qubit,
        ),
        map(number, Operand::Arg),
    ))(input)
}

fn separator(input: &str) -> IResult<&str, &str> {
    alt((recognize(tuple((space0, char(','), space0))), space1))(input)
}

fn instruction(input: &str) -> IResult<&str, (&str, Vec<Operand>)> {
    let (input, (_, name, operands, _)) = tuple((
        space0,
        mnemonic,
        many0(preceded(separator, operand)),
        space0,
    ))(input)?;
    Ok((input, (name, operands)))
}

fn strip_comment(line: &str) -> &str {
    match line.find(['#', ';']) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Parses one line. Returns `Ok(None)` for blank and comment-only lines.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let code = strip_comment(line);
    if code.trim().is_empty() {
        return Ok(None);
    }

    let (_, (name, operands)) = all_consuming(instruction)(code)
        .map_err(|e| anyhow!("malformed instruction `{}`: {}", code.trim(), e))?;

    let opcode: Opcode = name
        .parse()
        .with_context(|| format!("unknown mnemonic `{name}`"))?;

    let mut args = Vec::with_capacity(2);
    let mut qubits = Vec::with_capacity(2);
    for operand in operands {
        match operand {
            Operand::Arg(value) => args.push(value),
            Operand::Qubit(index) => qubits.push(index),
        }
    }

    let command = Command::new(opcode, &args, &qubits)
        .with_context(|| format!("invalid operands for {opcode}"))?;
    Ok(Some(command))
}

/// Parses a whole listing. Errors name the 1-based line they occurred on.
pub fn parse_program(source: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        if let Some(command) = parse_line(line).with_context(|| format!("line {}", idx + 1))? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Loads and parses an assembly file.
pub fn load_program<P: AsRef<Path>>(path: P) -> Result<Vec<Command>> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to open assembly file {}", path.display()))?;
    let commands = parse_program(&source)?;
    log::debug!("parsed {} commands from {}", commands.len(), path.display());
    Ok(commands)
}

/// Renders commands back into assembly, one per line.
pub fn format_program(commands: &[Command]) -> String {
    commands.iter().map(|command| format!("{command}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use qhal_common::{CodecError, WordField};
    use rstest::rstest;

    #[rstest]
    #[case("CNOT q2 q5", Opcode::CNOT, [0, 0], [2, 5])]
    #[case("cnot q2,q5", Opcode::CNOT, [0, 0], [2, 5])]
    #[case("  RX 1000 0 q3  ", Opcode::RX, [1000, 0], [3, 0])]
    #[case("RX q3, 1000", Opcode::RX, [1000, 0], [3, 0])]
    #[case("REQUEST_METADATA 0x2 0X1 q0 q0", Opcode::REQUEST_METADATA, [2, 1], [0, 0])]
    #[case("H q7 # trailing comment", Opcode::H, [0, 0], [7, 0])]
    #[case("end_session", Opcode::END_SESSION, [0, 0], [0, 0])]
    #[case("FOR_START 65535 q1023", Opcode::FOR_START, [65535, 0], [1023, 0])]
    fn parses_instructions(
        #[case] line: &str,
        #[case] opcode: Opcode,
        #[case] args: [u16; 2],
        #[case] qubits: [u16; 2],
    ) {
        let command = parse_line(line).unwrap().unwrap();
        assert_eq!(command, Command::new(opcode, &args, &qubits).unwrap());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("# only a comment")]
    #[case("; another comment")]
    fn skips_blank_lines(#[case] line: &str) {
        assert!(parse_line(line).unwrap().is_none());
    }

    #[rstest]
    #[case("TOFFOLI q0 q1 q2")]
    #[case("CNOT q0 q1 q2")]
    #[case("RX 1 2 3 q0")]
    #[case("RX 70000 q0")]
    #[case("H q0 extra")]
    #[case("H q1024")]
    fn rejects_bad_lines(#[case] line: &str) {
        assert!(parse_line(line).is_err());
    }

    #[test]
    fn codec_errors_stay_reachable() {
        let err = parse_line("H q1024").unwrap_err();
        assert_eq!(
            err.downcast_ref::<CodecError>(),
            Some(&CodecError::ValueOutOfRange {
                field: WordField::Qubit0,
                value: 1024
            })
        );
        let err = parse_line("FOO q1").unwrap_err();
        assert_eq!(
            err.downcast_ref::<CodecError>(),
            Some(&CodecError::InvalidOpcodeType)
        );
    }

    #[test]
    fn reports_line_numbers() {
        let err = parse_program("H q0\n\nCNOT q0 q1 q2\n").unwrap_err();
        assert_eq!(err.to_string(), "line 3");
    }

    #[test]
    fn listing_round_trips() {
        let commands = vec![
            Command::new(Opcode::START_SESSION, &[], &[]).unwrap(),
            Command::new(Opcode::CNOT, &[], &[2, 5]).unwrap(),
            Command::new(Opcode::RX, &[1000], &[3]).unwrap(),
            Command::new(Opcode::RZZ, &[12, 34], &[1, 2]).unwrap(),
            Command::new(Opcode::X, &[4, 0], &[9]).unwrap(),
            Command::new(Opcode::END_SESSION, &[], &[]).unwrap(),
        ];
        let listing = format_program(&commands);
        assert_eq!(parse_program(&listing).unwrap(), commands);
    }
}
