//! Conversion between assembly listings and word files.

use anyhow::Result;
use qhal_io::{loader, parser};

/// Assembles a listing into a word file.
pub fn assemble(input: &str, output: &str) -> Result<()> {
    let commands = parser::load_program(input)?;
    let words = loader::encode_commands(&commands);
    loader::write_word_file(output, &words)?;
    println!("Assembled {} commands from {} into {}", words.len(), input, output);
    Ok(())
}

/// Prints the listing for a word file, optionally with the raw words.
pub fn disassemble(input: &str, show_words: bool) -> Result<()> {
    let words = loader::load_word_file(input)?;
    let commands = loader::decode_words(&words)?;

    for (word, command) in words.iter().zip(&commands) {
        if show_words {
            println!("0x{word:016X}  {command}");
        } else {
            println!("{command}");
        }
    }
    log::info!("disassembled {} words from {}", words.len(), input);
    Ok(())
}
