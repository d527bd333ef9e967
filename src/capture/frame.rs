//! Captured still-image artifact.

/// An immutable JPEG artifact produced by the frame capturer.
///
/// The ordinal records the frame's position within an enrollment
/// sequence; it is the only ordering information the submission client
/// has, so it must match capture order.
#[derive(Clone)]
pub struct CaptureFrame {
    jpeg: Vec<u8>,
    ordinal: u32,
}

impl CaptureFrame {
    /// Creates a frame from encoded JPEG bytes.
    pub fn new(jpeg: Vec<u8>, ordinal: u32) -> Self {
        Self { jpeg, ordinal }
    }

    /// Returns the encoded JPEG bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.jpeg
    }

    /// Consumes the frame, returning the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.jpeg
    }

    /// Returns the frame's position within its capture sequence.
    #[inline]
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    /// Returns the artifact file name used on the wire.
    pub fn file_name(&self) -> String {
        format!("frame{}.jpg", self.ordinal)
    }

    /// Returns the encoded size in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.jpeg.len()
    }

    /// Returns true when the frame carries no data.
    pub fn is_empty(&self) -> bool {
        self.jpeg.is_empty()
    }
}

impl std::fmt::Debug for CaptureFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureFrame")
            .field("ordinal", &self.ordinal)
            .field("jpeg_bytes", &self.jpeg.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_follows_ordinal() {
        let frame = CaptureFrame::new(vec![0xFF, 0xD8], 3);
        assert_eq!(frame.file_name(), "frame3.jpg");
        assert_eq!(frame.ordinal(), 3);
        assert_eq!(frame.len(), 2);
    }
}
