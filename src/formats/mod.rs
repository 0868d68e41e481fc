//! File format handlers for Source engine model files

pub mod mdl;
pub mod vtx;

// Re-export the record types and entry points for convenience
pub use mdl::{
    MdlHeader, MdlVariant, StudioFlags, SubTableRef, is_mdl_bytes, parse_mdl_bytes,
    parse_mdl_bytes_with_session, read_mdl,
};
pub use vtx::{VtxHeader, VtxVariant, parse_vtx_bytes, parse_vtx_bytes_with_session, read_vtx};
