//! # cgvault
//!
//! Folder and version management for CG assets on a shared studio
//! filesystem. Projects and assets are discovered on the share; jobs and
//! sequential `v001`, `v002`, ... versions are created on demand, each
//! version owning a fixed set of sub-folders for scenes, textures,
//! exports, archives, scripts and notes. Building a version snapshots the
//! open scene, exports geometry and textures through the host application
//! and writes a notes record; loading offers the choice between continuing
//! on a version and branching the next one from it.
//!
//! ## Modules
//!
//! - [`util`] - Errors
//! - [`store`] - The directory-backed version store
//! - [`host`] - Trait seam to the 3D scene host
//! - [`build`] - The build flow and notes records
//! - [`flow`] - The load / version-up flow
//! - [`ui`] - View-model for selector-driven front-ends
//! - [`settings`] - Persistent tool settings
//!
//! ## Example
//!
//! ```ignore
//! use cgvault::prelude::*;
//!
//! let vault = Vault::new("//core/ripley");
//! for project in vault.projects() {
//!     println!("{project}");
//! }
//! ```

pub mod build;
pub mod flow;
pub mod host;
pub mod settings;
pub mod store;
pub mod ui;
pub mod util;

// Re-export commonly used types
pub use store::{Vault, VaultLayout, Version, VersionRef};
pub use util::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::build::{run_build, BuildReport, NoProgress, NotesRecord, Progress};
    pub use crate::flow::{begin_load, LoadOutcome, LoadPrompt};
    pub use crate::host::SceneHost;
    pub use crate::settings::Settings;
    pub use crate::store::{Vault, VaultLayout, Version, VersionRef, CREATE_JOB_SENTINEL};
    pub use crate::ui::{Controls, Selection, VaultViewModel};
    pub use crate::util::{Error, Result};
}
