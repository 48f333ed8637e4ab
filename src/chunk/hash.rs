//! Chunk digest type.

use std::fmt;

/// A 32-byte BLAKE3 digest of a chunk's bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChunkHash([u8; ChunkHash::SIZE]);

impl ChunkHash {
    /// The size of the digest in bytes.
    pub const SIZE: usize = 32;

    /// Wraps raw digest bytes.
    pub const fn new(bytes: [u8; Self::SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns the digest bytes.
    pub fn as_bytes(&self) -> &[u8; Self::SIZE] {
        &self.0
    }

    /// Returns the digest as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Parses a 64-character hex string.
    ///
    /// Returns `None` for any other length or a non-hex character.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        let digits = hex_str.as_bytes();
        if digits.len() != Self::SIZE * 2 {
            return None;
        }
        let mut bytes = [0u8; Self::SIZE];
        for (byte, pair) in bytes.iter_mut().zip(digits.chunks_exact(2)) {
            *byte = (nibble(pair[0])? << 4) | nibble(pair[1])?;
        }
        Some(Self(bytes))
    }
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl TryFrom<&[u8]> for ChunkHash {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        <[u8; Self::SIZE]>::try_from(slice).map(Self)
    }
}

impl AsRef<[u8]> for ChunkHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ChunkHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_slice() {
        let bytes = vec![9u8; 32];
        let hash = ChunkHash::try_from(bytes.as_slice()).unwrap();
        assert_eq!(hash.as_bytes(), &[9u8; 32]);

        assert!(ChunkHash::try_from(&[0u8; 31][..]).is_err());
        assert!(ChunkHash::try_from(&[0u8; 33][..]).is_err());
    }

    #[test]
    fn test_to_hex() {
        let mut bytes = [0u8; 32];
        bytes[..4].copy_from_slice(&[0x01, 0x23, 0xAB, 0xEF]);
        let hex = ChunkHash::new(bytes).to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.starts_with("0123abef0000"));
    }

    #[test]
    fn test_from_hex() {
        let hash = ChunkHash::new([0xC3; 32]);
        assert_eq!(ChunkHash::from_hex(&hash.to_hex()), Some(hash));
        assert_eq!(ChunkHash::from_hex(&"C3".repeat(32)), Some(hash));
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(ChunkHash::from_hex("abcd").is_none());
        assert!(ChunkHash::from_hex(&"zz".repeat(32)).is_none());
        // 64 bytes but not 64 ASCII digits
        assert!(ChunkHash::from_hex(&"é".repeat(32)).is_none());
    }
}
