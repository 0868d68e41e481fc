//! VTX strip mesh companion format
//!
//! VTX files carry the hardware-optimized triangle strip data for a
//! studio model, one file per renderer target (`.dx80.vtx`, `.dx90.vtx`,
//! `.sw.vtx`). Unlike the studio header there is no magic tag: the file
//! opens with a bare little-endian version integer, 6 or 7. Both versions
//! share the same 36-byte header; they diverge in the strip and strip
//! group records the header points at.

mod reader;

pub use reader::{parse_vtx_bytes, parse_vtx_bytes_with_session, read_vtx};

use std::io::{Read, Seek};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::reader::BinReader;
use crate::session::ParseSession;

/// Minimum supported VTX version
pub const MIN_VERSION: i32 = 6;

/// Maximum supported VTX version
pub const MAX_VERSION: i32 = 7;

/// Size of the fixed VTX header
pub const HEADER_SIZE: usize = 36;

/// Strip layout families behind the shared header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VtxVariant {
    /// Version 6 strip records.
    V6,
    /// Version 7 strip records (current `OPTIMIZED_MODEL_FILE_VERSION`).
    V7,
}

impl VtxVariant {
    /// Map a VTX version tag to its strip layout.
    ///
    /// # Errors
    /// Fails with [`Error::UnsupportedVtxVersion`] for any tag other than
    /// 6 or 7; there is no fallback layout to guess with.
    pub fn from_version(version: i32) -> Result<Self> {
        match version {
            6 => Ok(VtxVariant::V6),
            7 => Ok(VtxVariant::V7),
            _ => Err(Error::UnsupportedVtxVersion { version }),
        }
    }
}

/// Decoded VTX file header.
///
/// Offsets are byte offsets from the start of the file, exposed exactly
/// as stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VtxHeader {
    /// Format version (6 or 7).
    pub version: i32,
    /// Vertex cache size the strips were optimized for.
    pub vertex_cache_size: i32,
    /// Maximum bones referenced per strip.
    pub max_bones_per_strip: u16,
    /// Maximum bones referenced per triangle.
    pub max_bones_per_tri: u16,
    /// Maximum bones referenced per vertex.
    pub max_bones_per_vertex: i32,
    /// Checksum; matches the paired studio header's checksum.
    pub checksum: i32,
    /// Number of LODs, mirrored in every model record.
    pub lod_count: i32,
    /// Byte offset of the material replacement list array.
    pub material_replacement_list_offset: i32,
    /// Number of body parts.
    pub body_part_count: i32,
    /// Byte offset of the body part array.
    pub body_part_offset: i32,
}

impl VtxHeader {
    /// Decode a VTX header from the start of `reader`.
    ///
    /// The leading version tag is probed without consuming so the full
    /// header read starts back at the top of the stream, and the tag is
    /// recorded into `session` before anything else is decoded.
    ///
    /// # Errors
    /// Fails with [`Error::UnsupportedVtxVersion`] for unknown version
    /// tags and [`Error::TruncatedInput`] when the stream ends mid-field.
    pub fn read<R: Read + Seek>(
        reader: &mut BinReader<R>,
        session: &mut ParseSession,
    ) -> Result<Self> {
        let probe = reader.peek_i32()?;
        session.set_vtx_version(probe);
        let variant = VtxVariant::from_version(probe)?;
        tracing::debug!("decoding VTX header v{probe} ({variant:?} strip records)");

        Ok(Self {
            version: reader.read_i32()?,
            vertex_cache_size: reader.read_i32()?,
            max_bones_per_strip: reader.read_u16()?,
            max_bones_per_tri: reader.read_u16()?,
            max_bones_per_vertex: reader.read_i32()?,
            checksum: reader.read_i32()?,
            lod_count: reader.read_i32()?,
            material_replacement_list_offset: reader.read_i32()?,
            body_part_count: reader.read_i32()?,
            body_part_offset: reader.read_i32()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_dispatch() {
        assert_eq!(VtxVariant::from_version(MIN_VERSION).unwrap(), VtxVariant::V6);
        assert_eq!(VtxVariant::from_version(MAX_VERSION).unwrap(), VtxVariant::V7);
        for version in [-1, 0, 5, 8, 49] {
            assert!(matches!(
                VtxVariant::from_version(version),
                Err(Error::UnsupportedVtxVersion { version: v }) if v == version
            ));
        }
    }
}
