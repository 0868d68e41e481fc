//! Error types for `MacSource`

use thiserror::Error;

/// The error type for `MacSource` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== MDL Format Errors ====================
    /// The file is not a studio model (missing IDST magic).
    #[error("invalid MDL magic: expected IDST, found {0:?}")]
    InvalidMdlMagic([u8; 4]),

    /// The studio header version has no known layout.
    #[error("unsupported MDL version: {version} (supported: 36, 44-52)")]
    UnsupportedMdlVersion {
        /// The version number found in the file.
        version: u32,
    },

    /// The header's declared file size disagrees with the stream length.
    ///
    /// Only checked for version 49 and later headers.
    #[error("file size mismatch: header declares {declared} bytes, stream has {actual}")]
    FileSizeMismatch {
        /// The file size recorded in the header.
        declared: u32,
        /// The actual length of the byte stream.
        actual: u64,
    },

    // ==================== VTX Format Errors ====================
    /// The VTX version tag has no known layout.
    #[error("unsupported VTX version: {version} (supported: 6, 7)")]
    UnsupportedVtxVersion {
        /// The version number found in the file.
        version: i32,
    },

    // ==================== Stream Errors ====================
    /// The stream ended before the current field could be read in full.
    #[error("truncated input: {needed} more bytes required at offset {offset}")]
    TruncatedInput {
        /// Stream offset where the read began.
        offset: u64,
        /// Number of bytes the read required.
        needed: usize,
    },

    /// A header string contains a byte outside the ASCII range.
    #[error("invalid ASCII byte in string at offset {offset}")]
    InvalidAscii {
        /// Stream offset of the offending string field.
        offset: u64,
    },

    // ==================== File System Errors ====================
    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),
}

// Add conversion from walkdir::Error
impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `MacSource` operations.
pub type Result<T> = std::result::Result<T, Error>;
