#![no_main]

use std::io::Write;

use chunkfile::{ChunkedFileReader, HashConfig, ReaderConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, Vec<u8>)| {
    let (size_seed, data) = input;
    let chunk_size = usize::from(size_seed) + 1;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&data).unwrap();
    file.flush().unwrap();

    let config = ReaderConfig::new(chunk_size)
        .unwrap()
        .with_hash_config(HashConfig::enabled());
    let mut reader = ChunkedFileReader::with_config(file.path(), config).unwrap();
    let chunks: Vec<_> = reader.chunks().collect::<Result<_, _>>().unwrap();

    // Verify: ceil(F/C) chunks, every one full except the last
    assert_eq!(chunks.len(), data.len().div_ceil(chunk_size));
    if let Some((last, rest)) = chunks.split_last() {
        assert!(rest.iter().all(|c| c.len() == chunk_size));
        assert!(!last.is_empty() && last.len() <= chunk_size);
    }

    // Verify: offsets are contiguous and bytes match the input
    let mut expected_offset = 0u64;
    for chunk in &chunks {
        assert_eq!(chunk.offset(), expected_offset);
        let start = expected_offset as usize;
        assert_eq!(chunk.data()[..], data[start..start + chunk.len()]);
        expected_offset = chunk.end();
    }
    assert_eq!(expected_offset, data.len() as u64);
    assert_eq!(reader.remaining_bytes(), 0);

    // Verify: random access agrees with the sequential pass, hashes included
    for index in 0..reader.whole_chunk_count() {
        let chunk = reader.read_at(index).unwrap();
        assert_eq!(chunk, chunks[index as usize]);
        assert_eq!(chunk.hash(), chunks[index as usize].hash());
    }

    reader.dispose().unwrap();
    assert!(reader.next_chunk().is_err());
});
