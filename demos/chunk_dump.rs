//! Dumps a file chunk by chunk as text or hex.
//!
//! Run with:
//!     cargo run --example chunk_dump -- --fname /path/to/file --csiz 64 -x

use std::path::PathBuf;

use clap::Parser;

use chunkfile::{ChunkedFileReader, DEFAULT_CHUNK_SIZE};

#[derive(Parser, Debug)]
#[command(about = "Print a file one fixed-size chunk at a time")]
struct Args {
    /// File to read
    #[arg(long)]
    fname: PathBuf,

    /// Chunk size in bytes
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    csiz: usize,

    /// Render chunk contents as hex instead of text
    #[arg(short = 'x')]
    hex: bool,
}

/// `0x..` tokens, 16 per line.
fn to_hex(data: &[u8]) -> String {
    data.chunks(16)
        .map(|line| {
            line.iter()
                .map(|b| format!("0x{:02x}", b))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut reader = ChunkedFileReader::open(&args.fname, args.csiz)?;
    let file_size = reader.file_size();
    println!("filesize {}", file_size);

    reader.for_each(|chunk, progress| {
        let text = if args.hex {
            to_hex(chunk.data())
        } else {
            String::from_utf8_lossy(chunk.data()).into_owned()
        };
        println!("===============================");
        println!("remaining {}", progress.remaining);
        println!("currently at pos {} of {}", progress.position, file_size);
        println!("===============================");
        println!("{}", text);
    })?;

    reader.dispose()?;
    Ok(())
}
