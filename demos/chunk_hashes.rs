//! Hashes every chunk of a file, then re-checks whole chunks by random access.
//!
//! Run with:
//!     cargo run --example chunk_hashes -- /path/to/file [chunk_size]

use std::env;

use chunkfile::{ChunkedFileReader, HashConfig, ReaderConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());
    let chunk_size = match env::args().nth(2) {
        Some(size) => size.parse()?,
        None => 64 * 1024,
    };

    let config = ReaderConfig::new(chunk_size)?.with_hash_config(HashConfig::enabled());
    let mut reader = ChunkedFileReader::with_config(&path, config)?;

    println!("Hashing file: {}", path);
    println!(
        "File size: {} bytes, {} chunks of {} bytes\n",
        reader.file_size(),
        reader.chunk_count(),
        reader.chunk_size()
    );

    let mut hashes = Vec::new();
    for chunk in reader.chunks() {
        let chunk = chunk?;
        if let Some(hash) = chunk.hash() {
            println!(
                "Chunk {:>6}: offset={:>10}, len={:>8}, hash={}",
                hashes.len(),
                chunk.offset(),
                chunk.len(),
                hash.to_hex()
            );
            hashes.push(hash);
        }
    }

    let mut mismatches = 0;
    for index in 0..reader.whole_chunk_count() {
        let chunk = reader.read_at(index)?;
        if chunk.hash() != hashes.get(index as usize).copied() {
            println!("Chunk {} differs on re-read", index);
            mismatches += 1;
        }
    }

    println!(
        "\nVerified {} whole chunks by random access, {} mismatches",
        reader.whole_chunk_count(),
        mismatches
    );

    reader.dispose()?;
    Ok(())
}
