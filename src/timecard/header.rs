//! Fixed-size header block stored hex-encoded on the first line of the file.

use crate::errors::{AppError, AppResult};
use std::fmt;

/// Byte length of a v1 header: size (1) + version (4) + count (4).
pub const V1_HEADER_SIZE: u8 = 9;

/// Packed 0.0.1
pub const V1_VERSION: u32 = 0x0000_0001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub size: u8,
    pub version: u32,
    pub count: u32,
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self {
            size: V1_HEADER_SIZE,
            version: V1_VERSION,
            count: 0,
        }
    }

    /// Little-endian binary layout rendered as lowercase hex.
    pub fn marshal(&self) -> String {
        let mut buf = Vec::with_capacity(V1_HEADER_SIZE as usize);
        buf.push(self.size);
        buf.extend_from_slice(&self.version.to_le_bytes());
        buf.extend_from_slice(&self.count.to_le_bytes());
        hex::encode(buf)
    }

    pub fn unmarshal(text: &str) -> AppResult<Self> {
        let decoded = hex::decode(text.trim())
            .map_err(|e| AppError::Format(format!("invalid header encoding: {e}")))?;

        if decoded.len() < V1_HEADER_SIZE as usize {
            return Err(AppError::Format(
                "insufficient data, cannot form header".into(),
            ));
        }

        let word = |at: usize| {
            u32::from_le_bytes([
                decoded[at],
                decoded[at + 1],
                decoded[at + 2],
                decoded[at + 3],
            ])
        };

        Ok(Self {
            size: decoded[0],
            version: word(1),
            count: word(5),
        })
    }

    pub fn format_version(&self) -> FormatVersion {
        FormatVersion::from(self.version)
    }
}

/// Packed version: 8 bits major, 8 bits minor, 16 bits patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u16,
}

impl From<u32> for FormatVersion {
    fn from(packed: u32) -> Self {
        Self {
            major: (packed >> 24) as u8,
            minor: (packed >> 16) as u8,
            patch: packed as u16,
        }
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_header_encodes_to_eighteen_hex_chars() {
        let h = Header::new();
        assert_eq!(h.marshal(), "090100000000000000");
        assert_eq!(h.marshal().len(), 18);
    }

    #[test]
    fn header_survives_marshal_unmarshal() {
        let h = Header {
            size: V1_HEADER_SIZE,
            version: 0x0102_0003,
            count: 70_000,
        };
        assert_eq!(Header::unmarshal(&h.marshal()).unwrap(), h);
    }

    #[test]
    fn count_is_little_endian() {
        let h = Header {
            count: 2,
            ..Header::new()
        };
        assert_eq!(h.marshal(), "090100000002000000");
    }

    #[test]
    fn short_header_is_a_format_error() {
        // 8 bytes only
        let err = Header::unmarshal("0901000000020000").unwrap_err();
        assert!(matches!(err, AppError::Format(_)));
    }

    #[test]
    fn bad_hex_is_a_format_error() {
        let err = Header::unmarshal("zz0100000000000000").unwrap_err();
        assert!(matches!(err, AppError::Format(_)));
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let h = Header::unmarshal("090100000003000000ffff").unwrap();
        assert_eq!(h.count, 3);
    }

    #[test]
    fn version_unpacks_major_minor_patch() {
        assert_eq!(Header::new().format_version().to_string(), "0.0.1");
        let v = FormatVersion::from(0x0203_0010);
        assert_eq!((v.major, v.minor, v.patch), (2, 3, 16));
    }
}
