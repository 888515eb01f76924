use std::io;

use crate::{pack_words, Isaac, Seed, Stream, BLOCK_SIZE};

#[test]
#[ignore]
fn bench() {
    // Measure round and stream throughput.
    // Run with `cargo test bench --release -- --ignored --nocapture`
    use std::time::Instant;

    const ITERS: usize = 1_000_000;

    let seed = Seed::from_bytes(std::array::from_fn(|i| (i * 7) as u8));
    let mut durs = [0, 0, 0];
    let mut checksum = 0u8;

    let mut engine = Isaac::new(&seed);
    let start = Instant::now();
    for _ in 0..ITERS {
        checksum ^= engine.round()[0] as u8;
    }
    durs[0] += start.elapsed().as_nanos();

    let mut engine = Isaac::new(&seed);
    let start = Instant::now();
    for _ in 0..ITERS {
        checksum ^= pack_words(&engine.round())[0];
    }
    durs[1] += start.elapsed().as_nanos();

    let mut stream = Stream::new(Isaac::new(&seed), io::sink());
    let start = Instant::now();
    for _ in 0..ITERS {
        checksum ^= stream.next_block()[BLOCK_SIZE - 1];
    }
    durs[2] += start.elapsed().as_nanos();

    let gigs = ((ITERS * BLOCK_SIZE) as f64) / ((1 << 30) as f64);
    let secs = |dur: u128| dur as f64 / 1_000_000_000.0;

    println!("\nThroughputs (checksum {checksum:#04x}):");
    println!("  rounds: {:.3} GB/s", gigs / secs(durs[0]));
    println!("  packed: {:.3} GB/s", gigs / secs(durs[1]));
    println!("  stream: {:.3} GB/s", gigs / secs(durs[2]));
    println!("\nRatios");
    println!(" (packed / rounds): {:.3}", durs[1] as f64 / durs[0] as f64);
}
