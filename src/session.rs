//! Per-parse diagnostic context
//!
//! Version numbers decoded from one file of a model bundle are needed when
//! decoding its companions: VTX strip layouts differ under studio version
//! 49+, so the strip readers consult the MDL version recorded here. Each
//! parse (or each MDL + companion bundle) gets its own session, so
//! concurrent decodes share nothing and need no locks.

use serde::Serialize;

/// Diagnostic and cross-file metadata collected during a parse session.
///
/// Create one per model bundle and pass it to every decode call for that
/// bundle. Decoders record the versions they encounter; later decoders and
/// downstream sub-table readers may read them back.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ParseSession {
    mdl_version: Option<u32>,
    vtx_version: Option<i32>,
}

impl ParseSession {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the studio header version for this session.
    pub fn set_mdl_version(&mut self, version: u32) {
        self.mdl_version = Some(version);
    }

    /// The studio header version decoded in this session, if any.
    #[must_use]
    pub fn mdl_version(&self) -> Option<u32> {
        self.mdl_version
    }

    /// Record the VTX version for this session.
    pub fn set_vtx_version(&mut self, version: i32) {
        self.vtx_version = Some(version);
    }

    /// The VTX version decoded in this session, if any.
    #[must_use]
    pub fn vtx_version(&self) -> Option<i32> {
        self.vtx_version
    }
}
