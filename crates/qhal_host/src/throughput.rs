use crate::stats::LatencyStats;
use anyhow::{Result, bail};
use qhal_common::Command;
use qhal_io::loader;
use rayon::prelude::*;
use std::time::Instant;

// Sequential latency sampling is capped so huge files stay quick.
const LATENCY_SAMPLES: usize = 100_000;

/// Decodes and re-encodes a word, returning whether the word survived.
///
/// Single-arity words with a non-zero qubit1 field legitimately come back
/// different, so the comparison masks that field for them.
fn round_trip(word: u64) -> bool {
    match Command::from_binary(word) {
        Ok(command) => {
            let expected = if command.opcode().is_dual() {
                word
            } else {
                word & !qhal_common::isa::QUBIT1_MASK
            };
            command.to_binary() == expected
        }
        Err(_) => false,
    }
}

pub fn run_benchmark(input: &str, rounds: usize) -> Result<()> {
    if rounds == 0 {
        bail!("--rounds must be at least 1");
    }
    println!("Loading words from {}...", input);
    let start_load = Instant::now();
    let words = loader::load_word_file(input)?;
    println!("Loaded {} words in {:?}.", words.len(), start_load.elapsed());
    if words.is_empty() {
        bail!("{} contains no words", input);
    }

    println!("Starting Benchmark (Parallel - Rayon, {} rounds)...", rounds);
    let start_bench = Instant::now();

    let mut intact = 0;
    for _ in 0..rounds {
        intact = words.par_iter().filter(|&&word| round_trip(word)).count();
    }

    let seconds = start_bench.elapsed().as_secs_f64();
    let total = words.len() * rounds;
    let throughput = total as f64 / seconds;

    println!("Results");
    println!("Time: {:.4} s", seconds);
    println!("Throughput: {:.2} words/s", throughput);
    println!("Intact: {}/{}", intact, words.len());

    let mut stats = LatencyStats::new();
    for &word in words.iter().take(LATENCY_SAMPLES) {
        let start = Instant::now();
        let ok = round_trip(word);
        stats.update(start.elapsed().as_nanos() as u64);
        if !ok {
            log::warn!("word 0x{word:016X} did not survive a round trip");
        }
    }
    stats.print_report();

    if intact != words.len() {
        bail!("{} of {} words failed to round-trip", words.len() - intact, words.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qhal_common::Opcode;

    #[test]
    fn round_trip_checks() {
        let cnot = Command::new(Opcode::CNOT, &[], &[2, 5]).unwrap().to_binary();
        let h_with_second = Command::new(Opcode::H, &[], &[4, 7]).unwrap().to_binary();
        assert!(round_trip(cnot));
        assert!(round_trip(h_with_second));
        assert!(!round_trip(9 << 52));
    }
}
