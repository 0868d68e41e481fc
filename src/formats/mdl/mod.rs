//! Studio model (MDL) header format
//!
//! Every compiled studio model leads with a fixed-layout header naming the
//! sub-tables (bones, sequences, textures, body parts, ...) that the rest
//! of the file stores by count and byte offset. The layout drifted across
//! engine branches without ever becoming self-describing, so decoding is
//! driven by the version number that follows the IDST magic: each version
//! family reads a byte-exact field sequence of its own.

mod flags;
mod header;
mod reader;

pub use flags::StudioFlags;
pub use header::{MdlHeader, SubTableRef};
pub use reader::{
    is_mdl_bytes, parse_mdl_bytes, parse_mdl_bytes_with_session, read_mdl,
};

use crate::error::{Error, Result};

/// IDST magic bytes
pub const MAGIC: [u8; 4] = [b'I', b'D', b'S', b'T'];

/// Length of the inline model name field
pub const NAME_LENGTH: usize = 64;

/// Minimum supported studio header version
pub const MIN_VERSION: u32 = 36;

/// Maximum supported studio header version
pub const MAX_VERSION: u32 = 52;

/// Marker for the optional 20-byte vendor extension block found in some
/// v44-era headers. The block's contents are opaque; decoding only needs
/// to recognize it and step over it.
pub const VENDOR_EXTENSION_TAG: u32 = 1_279_345_491;

/// Header layout families across studio versions.
///
/// Versions between the named ones reuse the nearest older layout, e.g.
/// 45-48 read like 44 and 50-51 read like 49.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MdlVariant {
    /// 2003-era layout (version 36).
    V36,
    /// HL2 retail through the Episodes (versions 44-48).
    V44,
    /// Orange Box and later mainline titles (versions 49-51).
    V49,
    /// CS:GO / Dota 2 branch (version 52).
    V52,
}

impl MdlVariant {
    /// Map a studio version number to its header layout.
    ///
    /// # Errors
    /// Fails with [`Error::UnsupportedMdlVersion`] for versions with no
    /// known layout. Version 53 exists in the wild but diverges from the
    /// v52 layout, so it is rejected rather than misparsed.
    pub fn from_version(version: u32) -> Result<Self> {
        match version {
            36 => Ok(MdlVariant::V36),
            44..=48 => Ok(MdlVariant::V44),
            49..=51 => Ok(MdlVariant::V49),
            52 => Ok(MdlVariant::V52),
            _ => Err(Error::UnsupportedMdlVersion { version }),
        }
    }

    /// Whether this layout validates the declared file size against the
    /// actual stream length.
    #[must_use]
    pub fn checks_file_size(self) -> bool {
        matches!(self, MdlVariant::V49 | MdlVariant::V52)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_dispatch() {
        assert_eq!(MdlVariant::from_version(MIN_VERSION).unwrap(), MdlVariant::V36);
        assert_eq!(MdlVariant::from_version(44).unwrap(), MdlVariant::V44);
        assert_eq!(MdlVariant::from_version(47).unwrap(), MdlVariant::V44);
        assert_eq!(MdlVariant::from_version(48).unwrap(), MdlVariant::V44);
        assert_eq!(MdlVariant::from_version(49).unwrap(), MdlVariant::V49);
        assert_eq!(MdlVariant::from_version(51).unwrap(), MdlVariant::V49);
        assert_eq!(MdlVariant::from_version(MAX_VERSION).unwrap(), MdlVariant::V52);
    }

    #[test]
    fn test_unknown_versions_are_rejected() {
        for version in [0, 35, 37, 43, 53, 54] {
            assert!(matches!(
                MdlVariant::from_version(version),
                Err(Error::UnsupportedMdlVersion { version: v }) if v == version
            ));
        }
    }

    #[test]
    fn test_file_size_check_scope() {
        assert!(!MdlVariant::V36.checks_file_size());
        assert!(!MdlVariant::V44.checks_file_size());
        assert!(MdlVariant::V49.checks_file_size());
        assert!(MdlVariant::V52.checks_file_size());
    }
}
