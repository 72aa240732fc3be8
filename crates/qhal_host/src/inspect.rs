//! Human-readable views of the opcode registry and of single wire words.

use anyhow::{Context, Result};
use qhal_common::{Command, Opcode, WordField};

/// Parses a word given in decimal or with a `0x` prefix.
pub fn parse_word(text: &str) -> Result<u64> {
    let text = text.trim().replace('_', "");
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse::<u64>(),
    };
    parsed.with_context(|| format!("`{text}` is not a 64-bit word"))
}

/// One line per field: name, bit range, value.
pub fn field_report(word: u64) -> Vec<String> {
    WordField::ALL
        .iter()
        .map(|field| {
            let value = field.extract(word);
            format!(
                "{:<7} [{:2}..{:2}]  {:>5}  (0x{:X})",
                field,
                field.high_bit(),
                field.shift(),
                value,
                value
            )
        })
        .collect()
}

pub fn explain(text: &str) -> Result<()> {
    let word = parse_word(text)?;
    println!("Word: 0x{word:016X} ({word})");
    for line in field_report(word) {
        println!("  {line}");
    }
    match Command::from_binary(word) {
        Ok(command) => {
            let opcode = command.opcode();
            println!(
                "Decoded: {command}  ({}, {})",
                opcode.arity().as_str(),
                opcode.parametricity().as_str()
            );
            if !opcode.is_dual() && WordField::Qubit1.extract(word) != 0 {
                println!("Note: qubit1 is ignored for single-arity opcodes");
            }
        }
        Err(err) => println!("Decoded: error: {err}"),
    }
    Ok(())
}

/// The registry as a table.
pub fn opcode_table() -> Vec<String> {
    let mut rows = vec![format!(
        "{:<22} {:>4}  {:>7}  {:<6}  {:<5}",
        "NAME", "RAW", "ENCODED", "ARITY", "PARAM"
    )];
    rows.extend(Opcode::ALL.iter().map(|op| {
        format!(
            "{:<22} {:>4}  0x{:03X}    {:<6}  {:<5}",
            op,
            op.raw_code(),
            op.encoded_value(),
            op.arity().as_str(),
            op.parametricity().as_str()
        )
    }));
    rows
}

pub fn list_opcodes() {
    for row in opcode_table() {
        println!("{row}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_words() {
        assert_eq!(parse_word("0x83C0000000001402").unwrap(), 0x83C0_0000_0000_1402);
        assert_eq!(parse_word("0x83C0_0000_0000_1402").unwrap(), 0x83C0_0000_0000_1402);
        assert_eq!(parse_word("42").unwrap(), 42);
        assert!(parse_word("0xZZ").is_err());
        assert!(parse_word("-1").is_err());
    }

    #[test]
    fn reports_every_field() {
        let word = Command::new(Opcode::CNOT, &[], &[2, 5]).unwrap().to_binary();
        let report = field_report(word);
        assert_eq!(report.len(), 5);
        assert!(report[0].starts_with("opcode  [63..52]   2108  (0x83C)"));
        assert!(report[3].contains("5  (0x5)"));
        assert!(report[4].contains("2  (0x2)"));
    }

    #[test]
    fn table_lists_registry() {
        let table = opcode_table();
        assert_eq!(table.len(), Opcode::ALL.len() + 1);
        assert!(table.iter().any(|row| row.starts_with("CNOT") && row.contains("0x83C")));
    }
}
