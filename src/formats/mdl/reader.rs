//! Studio header reading and parsing

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{MdlHeader, MAGIC};
use crate::error::Result;
use crate::reader::BinReader;
use crate::session::ParseSession;

/// Read a studio header from a .mdl file on disk.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, otherwise
/// any error [`parse_mdl_bytes`] can produce.
///
/// [`Error::Io`]: crate::Error::Io
pub fn read_mdl<P: AsRef<Path>>(path: P) -> Result<MdlHeader> {
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    parse_mdl_bytes(&buffer)
}

/// Parse a studio header from bytes, using a throwaway session.
///
/// # Errors
///
/// Returns [`Error::InvalidMdlMagic`] if the data does not start with the
/// IDST tag, [`Error::UnsupportedMdlVersion`] for unknown versions,
/// [`Error::FileSizeMismatch`] when a v49+ header disagrees with the
/// buffer length, and [`Error::TruncatedInput`] for short data.
///
/// [`Error::InvalidMdlMagic`]: crate::Error::InvalidMdlMagic
/// [`Error::UnsupportedMdlVersion`]: crate::Error::UnsupportedMdlVersion
/// [`Error::FileSizeMismatch`]: crate::Error::FileSizeMismatch
/// [`Error::TruncatedInput`]: crate::Error::TruncatedInput
pub fn parse_mdl_bytes(data: &[u8]) -> Result<MdlHeader> {
    let mut session = ParseSession::new();
    parse_mdl_bytes_with_session(data, &mut session)
}

/// Parse a studio header from bytes, recording into the caller's session.
///
/// Use this form when the same model's companion files will be decoded
/// afterwards; their readers consult the studio version recorded here.
///
/// # Errors
/// Same as [`parse_mdl_bytes`].
pub fn parse_mdl_bytes_with_session(
    data: &[u8],
    session: &mut ParseSession,
) -> Result<MdlHeader> {
    let mut reader = BinReader::from_bytes(data);
    MdlHeader::read(&mut reader, session)
}

/// Whether `data` starts with the studio model magic tag.
#[must_use]
pub fn is_mdl_bytes(data: &[u8]) -> bool {
    data.len() >= MAGIC.len() && data[..MAGIC.len()] == MAGIC
}
