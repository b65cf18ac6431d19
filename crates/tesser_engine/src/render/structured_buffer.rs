//! Structured float buffer for bulk upload
//!
//! A fixed-capacity staging area of records that all share one [`Layout`].
//! The driver refills it every frame: [`rewind`](StructuredBuffer::rewind)
//! marks the start of a frame, appends overwrite from slot zero, and the
//! filled region is handed to the graphics device as bytes.

use log::trace;

use super::buffer_error::{BufferError, BufferResult};
use super::layout::{Layout, FLOAT_BYTE_LENGTH};

/// Fixed-capacity buffer of fixed-layout float records
#[derive(Debug, Clone)]
pub struct StructuredBuffer {
    layout: Layout,
    capacity: usize,
    byte_capacity: usize,
    data: Vec<f32>,
    cursor: usize,
    active_entries: usize,
}

impl StructuredBuffer {
    /// Allocate room for exactly `capacity` records
    pub fn new(capacity: usize, layout: Layout) -> BufferResult<Self> {
        if capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }
        let byte_capacity = capacity.checked_mul(layout.byte_length()).ok_or(
            BufferError::CapacityTooLarge { capacity, byte_length: layout.byte_length() },
        )?;
        Ok(Self {
            data: vec![0.0; byte_capacity / FLOAT_BYTE_LENGTH],
            layout,
            capacity,
            byte_capacity,
            cursor: 0,
            active_entries: 0,
        })
    }

    /// Layout shared by every record
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Capacity in records
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Capacity in bytes
    pub fn byte_capacity(&self) -> usize {
        self.byte_capacity
    }

    /// Records written since the accounting last restarted
    ///
    /// Not reset by [`rewind`](Self::rewind) itself; the first append after
    /// a rewind restarts the count.
    pub fn active_entries(&self) -> usize {
        self.active_entries
    }

    /// Slot the next append writes to
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether every slot has been written since the last rewind
    pub fn is_full(&self) -> bool {
        self.cursor == self.capacity
    }

    /// Copy one record into the next slot
    pub fn append(&mut self, record: &[f32]) -> BufferResult<()> {
        let size = self.layout.size();
        if record.len() != size {
            return Err(BufferError::InvalidEntryLayout { given: record.len(), expected: size });
        }
        if self.is_full() {
            return Err(BufferError::Overflow { capacity: self.capacity });
        }

        if self.cursor == 0 {
            self.active_entries = 0;
        }
        let start = self.cursor * size;
        self.data[start..start + size].copy_from_slice(record);
        self.cursor += 1;
        self.active_entries += 1;
        Ok(())
    }

    /// Append every record of an iterator, stopping at the first error
    pub fn extend<'a, I>(&mut self, records: I) -> BufferResult<usize>
    where
        I: IntoIterator<Item = &'a [f32]>,
    {
        let mut written = 0;
        for record in records {
            self.append(record)?;
            written += 1;
        }
        Ok(written)
    }

    /// Move the write cursor back to the first slot
    ///
    /// Written bytes are kept. Returns the number of bytes written before
    /// rewinding.
    pub fn rewind(&mut self) -> usize {
        let written = self.cursor * self.layout.byte_length();
        trace!("Rewinding structured buffer after {} bytes", written);
        self.cursor = 0;
        written
    }

    /// Read one float of a record
    pub fn get(&self, entry: usize, sub_index: usize) -> Option<f32> {
        if entry >= self.capacity || sub_index >= self.layout.size() {
            return None;
        }
        Some(self.data[entry * self.layout.size() + sub_index])
    }

    /// All floats of one record
    pub fn entry(&self, entry: usize) -> Option<&[f32]> {
        let size = self.layout.size();
        self.data.get(entry * size..(entry + 1) * size)
    }

    /// Floats of the records counted as active
    pub fn active_floats(&self) -> &[f32] {
        &self.data[..self.active_entries * self.layout.size()]
    }

    /// Bytes of the records counted as active, ready for upload
    pub fn filled_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.active_floats())
    }

    /// Floats written since the last rewind
    pub fn written_floats(&self) -> &[f32] {
        &self.data[..self.cursor * self.layout.size()]
    }

    /// Bytes written since the last rewind
    ///
    /// Unlike [`filled_bytes`](Self::filled_bytes) this is empty right after
    /// a rewind, so a frame that writes nothing uploads nothing.
    pub fn written_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.written_floats())
    }

    /// The whole backing store as bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Bytes of the active region
    pub fn filled_byte_length(&self) -> usize {
        self.active_entries * self.layout.size() * FLOAT_BYTE_LENGTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: [f32; 6] = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0];

    fn buffer() -> StructuredBuffer {
        StructuredBuffer::new(10, Layout::new([1, 2, 3]).unwrap()).unwrap()
    }

    #[test]
    fn test_capacity() {
        let buffer = buffer();
        assert_eq!(buffer.capacity(), 10);
        assert_eq!(buffer.byte_capacity(), 10 * 4 * 6);
        assert_eq!(buffer.active_entries(), 0);
        assert_eq!(buffer.as_bytes().len(), 240);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let layout = Layout::new([1]).unwrap();
        assert_eq!(StructuredBuffer::new(0, layout).unwrap_err(), BufferError::ZeroCapacity);
    }

    #[test]
    fn test_rewinding_does_not_change_capacity() {
        let mut buffer = buffer();
        buffer.append(&RECORD).unwrap();
        assert_eq!(buffer.active_entries(), 1);
        assert_eq!(buffer.rewind(), 24);
        assert_eq!(buffer.active_entries(), 1);
        assert_eq!(buffer.capacity(), 10);
        assert_eq!(buffer.byte_capacity(), 240);
    }

    #[test]
    fn test_rewinding_does_not_reset_active_entry_count() {
        let mut buffer = buffer();
        for _ in 0..3 {
            buffer.append(&RECORD).unwrap();
        }
        assert_eq!(buffer.active_entries(), 3);
        buffer.rewind();
        assert_eq!(buffer.active_entries(), 3);
        buffer.append(&RECORD).unwrap();
        assert_eq!(buffer.active_entries(), 1);
    }

    #[test]
    fn test_rewind_keeps_bytes() {
        let mut buffer = buffer();
        buffer.append(&RECORD).unwrap();
        buffer.append(&[9.0; 6]).unwrap();
        buffer.rewind();
        buffer.append(&[7.0; 6]).unwrap();

        assert_eq!(buffer.entry(0).unwrap(), &[7.0; 6]);
        assert_eq!(buffer.get(1, 5), Some(9.0));
        assert_eq!(buffer.active_floats(), &[7.0; 6]);
    }

    #[test]
    fn test_invalid_entry_add() {
        let mut buffer = buffer();
        buffer.append(&RECORD).unwrap();
        assert_eq!(
            buffer.append(&[1.0, 5.0, 6.0]),
            Err(BufferError::InvalidEntryLayout { given: 3, expected: 6 })
        );
        assert_eq!(buffer.active_entries(), 1);
        assert_eq!(buffer.cursor(), 1);
    }

    #[test]
    fn test_filling() {
        let mut buffer = buffer();
        for i in 0..10 {
            buffer.append(&RECORD).unwrap();
            assert_eq!(buffer.active_entries(), i + 1);
        }
        assert!(buffer.is_full());
    }

    #[test]
    fn test_overflow() {
        let mut buffer = buffer();
        for _ in 0..10 {
            buffer.append(&RECORD).unwrap();
        }
        assert_eq!(buffer.append(&RECORD), Err(BufferError::Overflow { capacity: 10 }));
        assert_eq!(buffer.active_entries(), 10);

        buffer.rewind();
        assert!(buffer.append(&RECORD).is_ok());
    }

    #[test]
    fn test_malformed_record_checked_before_overflow() {
        let mut buffer = StructuredBuffer::new(1, Layout::new([2]).unwrap()).unwrap();
        buffer.append(&[1.0, 2.0]).unwrap();
        assert!(matches!(buffer.append(&[1.0]), Err(BufferError::InvalidEntryLayout { .. })));
    }

    #[test]
    fn test_written_bytes_follow_cursor() {
        let mut buffer = buffer();
        buffer.append(&RECORD).unwrap();
        buffer.append(&RECORD).unwrap();
        assert_eq!(buffer.written_bytes().len(), 48);

        buffer.rewind();
        assert!(buffer.written_bytes().is_empty());
        assert_eq!(buffer.filled_bytes().len(), 48);

        buffer.append(&[5.0; 6]).unwrap();
        assert_eq!(buffer.written_floats(), &[5.0; 6]);
    }

    #[test]
    fn test_oversized_capacity_rejected() {
        let layout = Layout::new([4]).unwrap();
        assert_eq!(
            StructuredBuffer::new(usize::MAX, layout).unwrap_err(),
            BufferError::CapacityTooLarge { capacity: usize::MAX, byte_length: 16 }
        );
    }

    #[test]
    fn test_filled_bytes_view() {
        let mut buffer = StructuredBuffer::new(4, Layout::new([2]).unwrap()).unwrap();
        let written = buffer.extend([[1.0f32, 2.0].as_slice(), [3.0, 4.0].as_slice()]).unwrap();
        assert_eq!(written, 2);
        assert_eq!(buffer.filled_byte_length(), 16);

        let bytes = buffer.filled_bytes();
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[4..8], &2.0f32.to_ne_bytes());
    }
}
