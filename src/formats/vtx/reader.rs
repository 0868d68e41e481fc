//! VTX header reading and parsing

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::VtxHeader;
use crate::error::Result;
use crate::reader::BinReader;
use crate::session::ParseSession;

/// Read a VTX header from a .vtx file on disk.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, otherwise
/// any error [`parse_vtx_bytes`] can produce.
///
/// [`Error::Io`]: crate::Error::Io
pub fn read_vtx<P: AsRef<Path>>(path: P) -> Result<VtxHeader> {
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    parse_vtx_bytes(&buffer)
}

/// Parse a VTX header from bytes, using a throwaway session.
///
/// # Errors
///
/// Returns [`Error::UnsupportedVtxVersion`] if the leading tag is not 6
/// or 7, and [`Error::TruncatedInput`] for short data.
///
/// [`Error::UnsupportedVtxVersion`]: crate::Error::UnsupportedVtxVersion
/// [`Error::TruncatedInput`]: crate::Error::TruncatedInput
pub fn parse_vtx_bytes(data: &[u8]) -> Result<VtxHeader> {
    let mut session = ParseSession::new();
    parse_vtx_bytes_with_session(data, &mut session)
}

/// Parse a VTX header from bytes, recording into the caller's session.
///
/// Pass the session that decoded the paired .mdl file: strip records past
/// the header differ under studio version 49+, so downstream readers need
/// both versions in one place.
///
/// # Errors
/// Same as [`parse_vtx_bytes`].
pub fn parse_vtx_bytes_with_session(
    data: &[u8],
    session: &mut ParseSession,
) -> Result<VtxHeader> {
    let mut reader = BinReader::from_bytes(data);
    VtxHeader::read(&mut reader, session)
}
