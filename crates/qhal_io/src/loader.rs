//! Binary word files.
//!
//! A word file is a flat sequence of 64-bit wire words stored little-endian,
//! with no header and no framing.

use anyhow::{Context, Result, bail};
use bitvec::prelude::*;
use qhal_common::Command;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Size of one wire word on disk.
pub const WORD_BYTES: usize = 8;

/// Reads every word from `reader`.
///
/// Fails if the stream ends partway through a word.
pub fn read_words<R: Read>(mut reader: R) -> Result<Vec<u64>> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.len() % WORD_BYTES != 0 {
        bail!(
            "word stream is {} bytes long, not a multiple of {}",
            buffer.len(),
            WORD_BYTES
        );
    }

    // Lsb0 bit order over little-endian bytes, matching the on-disk layout
    let bits = BitVec::<u8, Lsb0>::from_vec(buffer);
    let words = bits
        .chunks_exact(WORD_BYTES * 8)
        .map(|chunk| chunk.load_le::<u64>())
        .collect();
    Ok(words)
}

/// Loads a word file from disk.
pub fn load_word_file<P: AsRef<Path>>(path: P) -> Result<Vec<u64>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open word file {}", path.display()))?;
    let words = read_words(BufReader::new(file))
        .with_context(|| format!("Failed to read word file {}", path.display()))?;
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

pub fn write_words<W: Write>(mut writer: W, words: &[u64]) -> Result<()> {
    for word in words {
        writer.write_all(&word.to_le_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_word_file<P: AsRef<Path>>(path: P, words: &[u64]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create word file {}", path.display()))?;
    write_words(BufWriter::new(file), words)?;
    log::debug!("wrote {} words to {}", words.len(), path.display());
    Ok(())
}

/// Decodes a word stream, naming the first word that fails.
pub fn decode_words(words: &[u64]) -> Result<Vec<Command>> {
    words
        .iter()
        .enumerate()
        .map(|(idx, &word)| {
            Command::from_binary(word).with_context(|| format!("word {idx} (0x{word:016X})"))
        })
        .collect()
}

/// Encodes commands into wire words.
pub fn encode_commands(commands: &[Command]) -> Vec<u64> {
    commands.iter().map(Command::to_binary).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use qhal_common::{CodecError, Opcode};
    use std::io::Cursor;

    #[test]
    fn words_are_little_endian() {
        let mut bytes = Vec::new();
        write_words(&mut bytes, &[0x0123_4567_89AB_CDEF, 1]).unwrap();
        assert_eq!(
            bytes,
            vec![
                0xEF, 0xCD, 0xAB, 0x89, 0x67, 0x45, 0x23, 0x01, //
                0x01, 0, 0, 0, 0, 0, 0, 0,
            ]
        );
        assert_eq!(
            read_words(Cursor::new(bytes)).unwrap(),
            vec![0x0123_4567_89AB_CDEF, 1]
        );
    }

    #[test]
    fn empty_stream_has_no_words() {
        assert!(read_words(Cursor::new(Vec::new())).unwrap().is_empty());
    }

    #[test]
    fn truncated_stream_is_rejected() {
        let err = read_words(Cursor::new(vec![0u8; 12])).unwrap_err();
        assert!(err.to_string().contains("not a multiple of 8"));
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join(format!("qhal_io_words_{}.bin", std::process::id()));
        let commands = vec![
            Command::new(Opcode::CNOT, &[], &[2, 5]).unwrap(),
            Command::new(Opcode::PSWAP, &[300, 2], &[7, 8]).unwrap(),
            Command::new(Opcode::QUBIT_MEASURE, &[1], &[1023]).unwrap(),
        ];
        write_word_file(&path, &encode_commands(&commands)).unwrap();
        let words = load_word_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(decode_words(&words).unwrap(), commands);
    }

    #[test]
    fn decode_names_bad_word() {
        let good = Command::new(Opcode::H, &[], &[1]).unwrap().to_binary();
        let err = decode_words(&[good, good, 9 << 52]).unwrap_err();
        assert_eq!(err.to_string(), "word 2 (0x0090000000000000)");
        assert_eq!(
            err.downcast_ref::<CodecError>(),
            Some(&CodecError::UnknownOpcode(9))
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_word_file("/nonexistent/qhal/words.bin").is_err());
    }
}
