//! Data URL codec
//!
//! Pure conversion between `data:<mime>;base64,<payload>` strings and
//! raw (bytes, MIME) pairs, used to turn a captured frame into a
//! multipart upload part.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Error, Result};

/// Raw image bytes tagged with their declared MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Decodes a base64 data URL into bytes plus MIME type. An empty MIME
/// header falls back to `image/jpeg`.
pub fn decode_data_url(data_url: &str) -> Result<DecodedImage> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| Error::InvalidDataUrl("missing data: scheme".to_string()))?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::InvalidDataUrl("missing payload separator".to_string()))?;

    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| Error::InvalidDataUrl("payload is not base64".to_string()))?;
    let mime = if mime.is_empty() { "image/jpeg" } else { mime };

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| Error::InvalidDataUrl(e.to_string()))?;

    Ok(DecodedImage {
        mime: mime.to_string(),
        bytes,
    })
}

/// Encodes bytes plus MIME type back into a base64 data URL.
pub fn encode_data_url(image: &DecodedImage) -> String {
    format!("data:{};base64,{}", image.mime, STANDARD.encode(&image.bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // Decode
    // =============================================

    #[test]
    fn test_decode_jpeg_data_url() {
        let decoded = decode_data_url("data:image/jpeg;base64,aGVsbG8=").expect("decode failed");
        assert_eq!(decoded.mime, "image/jpeg");
        assert_eq!(decoded.bytes, b"hello");
    }

    #[test]
    fn test_decode_png_data_url() {
        let decoded = decode_data_url("data:image/png;base64,iVBORw0KGgo=").expect("decode failed");
        assert_eq!(decoded.mime, "image/png");
        assert_eq!(
            decoded.bytes,
            [0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a]
        );
    }

    #[test]
    fn test_decode_empty_mime_defaults_to_jpeg() {
        let decoded = decode_data_url("data:;base64,aGVsbG8=").expect("decode failed");
        assert_eq!(decoded.mime, "image/jpeg");
    }

    #[test]
    fn test_decode_rejects_missing_scheme() {
        let result = decode_data_url("not a data url");
        assert!(matches!(result, Err(Error::InvalidDataUrl(_))));
    }

    #[test]
    fn test_decode_rejects_missing_separator() {
        let result = decode_data_url("data:image/jpeg;base64");
        assert!(matches!(result, Err(Error::InvalidDataUrl(_))));
    }

    #[test]
    fn test_decode_rejects_non_base64_payload_marker() {
        let result = decode_data_url("data:image/png,rawbytes");
        assert!(matches!(result, Err(Error::InvalidDataUrl(_))));
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let result = decode_data_url("data:image/png;base64,!!!!");
        assert!(matches!(result, Err(Error::InvalidDataUrl(_))));
    }

    #[test]
    fn test_decode_empty_payload() {
        let decoded = decode_data_url("data:image/png;base64,").expect("decode failed");
        assert!(decoded.bytes.is_empty());
    }

    // =============================================
    // Round trip
    // =============================================

    #[test]
    fn test_round_trip_preserves_bytes_and_mime() {
        let original = DecodedImage {
            mime: "image/webp".to_string(),
            bytes: vec![0x00, 0x01, 0x02, 0xfa, 0xff, 0x7f],
        };

        let decoded = decode_data_url(&encode_data_url(&original)).expect("round trip failed");
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_encode_shape() {
        let image = DecodedImage {
            mime: "image/jpeg".to_string(),
            bytes: b"hello".to_vec(),
        };
        assert_eq!(encode_data_url(&image), "data:image/jpeg;base64,aGVsbG8=");
    }
}
