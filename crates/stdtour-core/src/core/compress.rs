//! Gzip compression
//!
//! Output is a single gzip member at the best compression level and
//! decodes with any standard gzip reader.

use crate::error::CompressError;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::io::{Read, Write};

/// Gzip-compress `data`
pub fn compress_data(data: &[u8]) -> Result<Vec<u8>, CompressError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data).map_err(CompressError::Encode)?;
    encoder.finish().map_err(CompressError::Encode)
}

/// Decode a gzip stream produced by [`compress_data`] (or any gzip writer)
pub fn decompress_data(data: &[u8]) -> Result<Vec<u8>, CompressError> {
    let mut decoder = GzDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out).map_err(CompressError::Decode)?;
    Ok(out)
}

/// Compressed size divided by original size; 0.0 for empty input
pub fn compression_ratio(original_len: usize, compressed_len: usize) -> f64 {
    if original_len == 0 {
        return 0.0;
    }
    compressed_len as f64 / original_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let original = b"This is some sample data to compress.";
        let compressed = compress_data(original).expect("compression should succeed");
        let decompressed = decompress_data(&compressed).expect("decompression should succeed");
        assert_eq!(decompressed, original);
    }

    #[test]
    fn test_round_trip_empty_and_binary() {
        for input in [Vec::new(), (0u8..=255).collect::<Vec<u8>>()] {
            let compressed = compress_data(&input).expect("compression should succeed");
            assert_eq!(decompress_data(&compressed).expect("valid gzip"), input);
        }
    }

    #[test]
    fn test_repetitive_input_shrinks() {
        let original = b"Test data".repeat(100);
        let compressed = compress_data(&original).expect("compression should succeed");
        assert!(compressed.len() < original.len());
    }

    #[test]
    fn test_output_has_gzip_magic() {
        let compressed = compress_data(b"hello").expect("compression should succeed");
        assert_eq!(&compressed[..2], &[0x1f, 0x8b]);
    }

    #[test]
    fn test_decompress_rejects_garbage() {
        let result = decompress_data(b"definitely not gzip");
        assert!(matches!(result, Err(CompressError::Decode(_))));
    }

    #[test]
    fn test_compression_ratio() {
        assert_eq!(compression_ratio(0, 20), 0.0);
        assert_eq!(compression_ratio(200, 50), 0.25);
    }
}
