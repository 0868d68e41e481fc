//! # MacSource
//!
//! A pure-Rust library for decoding Source engine studio model headers.
//!
//! ## Supported Formats
//!
//! - **MDL** - Studio model headers, versions 36 and 44 through 52
//! - **VTX** - Strip mesh companion headers, versions 6 and 7
//!
//! ## Quick Start
//!
//! ### Reading an MDL Header
//!
//! ```no_run
//! use macsource::formats::mdl::read_mdl;
//!
//! let header = read_mdl("models/gman.mdl")?;
//! println!("{} (version {})", header.name, header.version);
//! # Ok::<(), macsource::Error>(())
//! ```
//!
//! ### Scanning a Content Tree
//!
//! ```no_run
//! use macsource::scan::scan_directory;
//!
//! let report = scan_directory("game/hl2/models")?;
//! println!(
//!     "decoded {} of {} files",
//!     report.models.len(),
//!     report.scanned
//! );
//! # Ok::<(), macsource::Error>(())
//! ```
//!
//! ### Using the Prelude
//!
//! The prelude provides convenient access to commonly used types:
//!
//! ```
//! use macsource::prelude::*;
//!
//! // Now you have access to:
//! // - MdlHeader, VtxHeader, StudioFlags
//! // - BinReader, ParseSession
//! // - scan_directory, ScanReport
//! // - Error, Result, and more
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `macsource` command-line binary

pub mod error;
pub mod formats;
pub mod reader;
pub mod scan;
pub mod session;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::reader::BinReader;
    pub use crate::session::ParseSession;

    pub use crate::formats::mdl::{
        is_mdl_bytes, parse_mdl_bytes, parse_mdl_bytes_with_session, read_mdl, MdlHeader,
        MdlVariant, StudioFlags, SubTableRef,
    };
    pub use crate::formats::vtx::{
        parse_vtx_bytes, parse_vtx_bytes_with_session, read_vtx, VtxHeader, VtxVariant,
    };

    // Batch scanning exports
    pub use crate::scan::{
        find_model_files, scan_directory, scan_files, ModelFileKind, ModelSummary, ScanReport,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
