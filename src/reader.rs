//! Little-endian binary stream reader
//!
//! Shared cursor for the MDL and VTX decoders: fixed-width scalar reads,
//! fixed-length and offset-addressed ASCII strings, non-consuming peeks,
//! and scoped position save/restore.

use std::io::{Cursor, Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};
use glam::Vec3;

use crate::error::{Error, Result};

/// Cursor over a seekable little-endian byte source.
///
/// The total stream length is captured once at construction and used to
/// bounds-check skips and to validate declared file sizes. Reads past the
/// end of the stream fail with [`Error::TruncatedInput`]; the reader never
/// zero-pads or auto-extends.
pub struct BinReader<R: Read + Seek> {
    inner: R,
    len: u64,
}

impl<'a> BinReader<Cursor<&'a [u8]>> {
    /// Create a reader over an in-memory buffer, positioned at the start.
    pub fn from_bytes(data: &'a [u8]) -> Self {
        Self {
            inner: Cursor::new(data),
            len: data.len() as u64,
        }
    }
}

impl<R: Read + Seek> BinReader<R> {
    /// Create a reader from a Read + Seek source, positioned at the start.
    ///
    /// # Errors
    /// Returns an error if the source cannot be seeked to measure its length.
    pub fn new(mut inner: R) -> Result<Self> {
        let len = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(0))?;
        Ok(Self { inner, len })
    }

    /// Total length of the underlying stream in bytes.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Whether the underlying stream is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current cursor position.
    pub fn position(&mut self) -> Result<u64> {
        Ok(self.inner.stream_position()?)
    }

    /// Move the cursor to an absolute position.
    pub fn seek_to(&mut self, pos: u64) -> Result<()> {
        self.inner.seek(SeekFrom::Start(pos))?;
        Ok(())
    }

    /// Advance the cursor by `n` bytes without interpreting them.
    ///
    /// Skips are bounds-checked against the stream length, so skipping past
    /// the end fails instead of leaving the cursor dangling.
    pub fn skip(&mut self, n: u64) -> Result<()> {
        let offset = self.position()?;
        if offset.saturating_add(n) > self.len {
            return Err(Error::TruncatedInput {
                offset,
                needed: n as usize,
            });
        }
        self.inner.seek(SeekFrom::Current(n as i64))?;
        Ok(())
    }

    /// Run `f` with the cursor temporarily moved to `pos`.
    ///
    /// The original position is restored on both success and failure, so
    /// callers can follow offsets without desynchronizing the main read.
    pub fn with_position<T>(
        &mut self,
        pos: u64,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let saved = self.position()?;
        self.inner.seek(SeekFrom::Start(pos))?;
        let result = f(self);
        self.inner.seek(SeekFrom::Start(saved))?;
        result
    }

    fn map_read_err(err: std::io::Error, offset: u64, needed: usize) -> Error {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Error::TruncatedInput { offset, needed }
        } else {
            Error::Io(err)
        }
    }

    /// Read exactly `n` bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        let offset = self.position()?;
        let mut buf = vec![0u8; n];
        self.inner
            .read_exact(&mut buf)
            .map_err(|e| Self::map_read_err(e, offset, n))?;
        Ok(buf)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let offset = self.position()?;
        self.inner
            .read_u8()
            .map_err(|e| Self::map_read_err(e, offset, 1))
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        let offset = self.position()?;
        self.inner
            .read_i8()
            .map_err(|e| Self::map_read_err(e, offset, 1))
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let offset = self.position()?;
        self.inner
            .read_u16::<LittleEndian>()
            .map_err(|e| Self::map_read_err(e, offset, 2))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let offset = self.position()?;
        self.inner
            .read_u32::<LittleEndian>()
            .map_err(|e| Self::map_read_err(e, offset, 4))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let offset = self.position()?;
        self.inner
            .read_i32::<LittleEndian>()
            .map_err(|e| Self::map_read_err(e, offset, 4))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        let offset = self.position()?;
        self.inner
            .read_f32::<LittleEndian>()
            .map_err(|e| Self::map_read_err(e, offset, 4))
    }

    /// Read a 4-byte magic tag.
    pub fn read_fourcc(&mut self) -> Result<[u8; 4]> {
        let offset = self.position()?;
        let mut tag = [0u8; 4];
        self.inner
            .read_exact(&mut tag)
            .map_err(|e| Self::map_read_err(e, offset, 4))?;
        Ok(tag)
    }

    /// Read three consecutive f32 as a vector.
    pub fn read_vec3(&mut self) -> Result<Vec3> {
        Ok(Vec3::new(
            self.read_f32()?,
            self.read_f32()?,
            self.read_f32()?,
        ))
    }

    /// Read two consecutive u32.
    pub fn read_u32_pair(&mut self) -> Result<(u32, u32)> {
        Ok((self.read_u32()?, self.read_u32()?))
    }

    /// Read `n` consecutive i32 values.
    pub fn read_i32_vec(&mut self, n: usize) -> Result<Vec<i32>> {
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            values.push(self.read_i32()?);
        }
        Ok(values)
    }

    /// Read exactly `n` bytes as an ASCII string, truncated at the first NUL.
    ///
    /// The cursor always advances by `n`, regardless of where the NUL falls.
    ///
    /// # Errors
    /// Fails with [`Error::InvalidAscii`] if any byte before the NUL is
    /// outside the ASCII range.
    pub fn read_fixed_ascii(&mut self, n: usize) -> Result<String> {
        let offset = self.position()?;
        let bytes = self.read_bytes(n)?;
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(n);
        let text = &bytes[..end];
        if !text.is_ascii() {
            return Err(Error::InvalidAscii { offset });
        }
        String::from_utf8(text.to_vec()).map_err(|_| Error::InvalidAscii { offset })
    }

    /// Read a NUL-terminated ASCII string, consuming the terminator.
    pub fn read_cstring(&mut self) -> Result<String> {
        let offset = self.position()?;
        let mut bytes = Vec::new();
        loop {
            let b = self.read_u8()?;
            if b == 0 {
                break;
            }
            if !b.is_ascii() {
                return Err(Error::InvalidAscii { offset });
            }
            bytes.push(b);
        }
        String::from_utf8(bytes).map_err(|_| Error::InvalidAscii { offset })
    }

    /// Read a string stored out-of-line from the fixed record.
    ///
    /// Consumes a 4-byte offset relative to `base` (the start of the record
    /// being decoded). A zero offset yields an empty string without any
    /// seek. Otherwise the NUL-terminated string at `base + offset` is read
    /// under a scoped position, leaving the cursor just past the offset
    /// field.
    pub fn read_offset_string(&mut self, base: u64) -> Result<String> {
        let offset = self.read_i32()?;
        if offset == 0 {
            return Ok(String::new());
        }
        let target = base.saturating_add_signed(i64::from(offset));
        self.with_position(target, Self::read_cstring)
    }

    /// Read the next 4-byte tag without advancing the cursor.
    pub fn peek_fourcc(&mut self) -> Result<[u8; 4]> {
        let pos = self.position()?;
        self.with_position(pos, Self::read_fourcc)
    }

    /// Read the next u32 without advancing the cursor.
    pub fn peek_u32(&mut self) -> Result<u32> {
        let pos = self.position()?;
        self.with_position(pos, Self::read_u32)
    }

    /// Read the next i32 without advancing the cursor.
    pub fn peek_i32(&mut self) -> Result<i32> {
        let pos = self.position()?;
        self.with_position(pos, Self::read_i32)
    }

    /// Read the next two u32 without advancing the cursor.
    pub fn peek_u32_pair(&mut self) -> Result<(u32, u32)> {
        let pos = self.position()?;
        self.with_position(pos, Self::read_u32_pair)
    }
}
