//! Record layouts for structured buffers

use super::buffer_error::{BufferError, BufferResult};

/// Size of one scalar in bytes
pub const FLOAT_BYTE_LENGTH: usize = std::mem::size_of::<f32>();

/// Ordered sub-range widths composing one record
///
/// A layout of `[3, 3, 1]` describes records of seven floats: a 3-float
/// attribute, another 3-float attribute and a single float. All derived
/// sizes are computed once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    ranges: Vec<usize>,
    size: usize,
    byte_length: usize,
    byte_ranges: Vec<usize>,
    byte_offsets: Vec<usize>,
}

impl Layout {
    /// Create a layout from sub-range widths, in floats
    pub fn new(ranges: impl Into<Vec<usize>>) -> BufferResult<Self> {
        let ranges = ranges.into();
        if ranges.is_empty() || ranges.contains(&0) {
            return Err(BufferError::InvalidLayout(ranges));
        }

        // Once the record byte length fits, every per-range width and offset does too
        let byte_length = ranges
            .iter()
            .try_fold(0usize, |sum, &width| sum.checked_add(width))
            .and_then(|size| size.checked_mul(FLOAT_BYTE_LENGTH));
        let Some(byte_length) = byte_length else {
            return Err(BufferError::InvalidLayout(ranges));
        };

        let size = byte_length / FLOAT_BYTE_LENGTH;
        let byte_ranges = ranges.iter().map(|width| width * FLOAT_BYTE_LENGTH).collect();
        let byte_offsets = ranges
            .iter()
            .scan(0, |offset, width| {
                let start = *offset;
                *offset += width * FLOAT_BYTE_LENGTH;
                Some(start)
            })
            .collect();

        Ok(Self { ranges, size, byte_length, byte_ranges, byte_offsets })
    }

    /// Sub-range widths, in floats
    pub fn ranges(&self) -> &[usize] {
        &self.ranges
    }

    /// Floats per record
    pub fn size(&self) -> usize {
        self.size
    }

    /// Bytes per record; the stride for attribute pointers
    pub fn byte_length(&self) -> usize {
        self.byte_length
    }

    /// Byte width of each sub-range
    pub fn byte_ranges(&self) -> &[usize] {
        &self.byte_ranges
    }

    /// Byte offset of each sub-range from the start of a record
    pub fn byte_offsets(&self) -> &[usize] {
        &self.byte_offsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_arithmetic() {
        let layout = Layout::new([1, 2, 3]).unwrap();
        assert_eq!(layout.size(), 6);
        assert_eq!(layout.byte_length(), 24);
        assert_eq!(layout.byte_ranges(), &[4, 8, 12]);
        assert_eq!(layout.byte_offsets(), &[0, 4, 12]);
    }

    #[test]
    fn test_empty_or_zero_width_rejected() {
        assert_eq!(Layout::new(Vec::new()), Err(BufferError::InvalidLayout(Vec::new())));
        assert!(Layout::new([3, 0, 1]).is_err());
    }

    #[test]
    fn test_oversized_layout_rejected() {
        assert_eq!(
            Layout::new([usize::MAX, 1]),
            Err(BufferError::InvalidLayout(vec![usize::MAX, 1]))
        );
        assert!(Layout::new([usize::MAX / 2]).is_err());
        assert!(Layout::new([usize::MAX / FLOAT_BYTE_LENGTH]).is_ok());
    }
}
