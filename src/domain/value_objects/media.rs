//! Opaque generated media

/// Raw bytes returned by a generative-media service
///
/// The payload is never decoded; it is handed to the browser as-is together
/// with a content type guessed from its leading bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct MediaAsset {
    bytes: Vec<u8>,
}

impl MediaAsset {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Best-effort content type for an image payload
    pub fn image_content_type(&self) -> &'static str {
        let b = self.bytes.as_slice();
        if b.starts_with(b"\x89PNG\r\n\x1a\n") {
            "image/png"
        } else if b.starts_with(&[0xFF, 0xD8, 0xFF]) {
            "image/jpeg"
        } else if b.starts_with(b"GIF8") {
            "image/gif"
        } else if b.len() >= 12 && &b[0..4] == b"RIFF" && &b[8..12] == b"WEBP" {
            "image/webp"
        } else {
            "application/octet-stream"
        }
    }

    /// Best-effort content type for an audio payload, WAV when unknown
    pub fn audio_content_type(&self) -> &'static str {
        let b = self.bytes.as_slice();
        if b.starts_with(b"fLaC") {
            "audio/flac"
        } else if b.starts_with(b"ID3") || b.starts_with(&[0xFF, 0xFB]) {
            "audio/mpeg"
        } else if b.starts_with(b"OggS") {
            "audio/ogg"
        } else {
            "audio/wav"
        }
    }
}

impl std::fmt::Debug for MediaAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaAsset")
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniffs_image_types() {
        assert_eq!(
            MediaAsset::new(b"\x89PNG\r\n\x1a\nrest".to_vec()).image_content_type(),
            "image/png"
        );
        assert_eq!(
            MediaAsset::new(vec![0xFF, 0xD8, 0xFF, 0xE0]).image_content_type(),
            "image/jpeg"
        );
        assert_eq!(
            MediaAsset::new(b"RIFF\0\0\0\0WEBPVP8 ".to_vec()).image_content_type(),
            "image/webp"
        );
        assert_eq!(
            MediaAsset::new(b"not an image".to_vec()).image_content_type(),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_audio_defaults_to_wav() {
        assert_eq!(MediaAsset::new(b"fLaC....".to_vec()).audio_content_type(), "audio/flac");
        assert_eq!(MediaAsset::new(b"RIFF....WAVE".to_vec()).audio_content_type(), "audio/wav");
        assert_eq!(MediaAsset::new(Vec::new()).audio_content_type(), "audio/wav");
    }
}
