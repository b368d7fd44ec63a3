//! The load / version-up flow.
//!
//! Loading a built version asks the artist whether to continue on the
//! current scene or branch a new version from it:
//!
//! `Idle -> (user picks Load) -> ConfirmChoice{CreateNext, LoadCurrent} -> Idle`
//!
//! "Version up" duplicates through the scene host - open the previous
//! snapshot, rename it in memory to the new version's name, rebuild - not
//! by copying files on disk.

use std::path::PathBuf;

use tracing::warn;

use crate::build::{run_build, BuildReport, Progress};
use crate::host::SceneHost;
use crate::store::{Vault, Version, VersionRef};
use crate::util::{Error, Result};

/// The confirm-choice state: holds everything the presentation layer needs
/// to phrase the question, and resolves to one of the two outcomes.
#[derive(Debug)]
pub struct LoadPrompt<'a> {
    vault: &'a Vault,
    target: VersionRef,
    artist: String,
    /// Version the artist selected.
    pub current: Version,
    /// Version a `create_next` resolution would produce.
    pub next: Version,
}

/// Terminal state of one pass through the flow.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The selected version's scene was opened.
    Opened(PathBuf),
    /// The selected version's scene was already the open scene; nothing
    /// happened beyond a warning.
    AlreadyOpen(PathBuf),
    /// A new version was branched from the selected one and built.
    VersionedUp {
        target: VersionRef,
        report: BuildReport,
    },
}

/// Enter the flow for `target`. Fails without touching any state when the
/// artist name is empty.
pub fn begin_load<'a>(
    vault: &'a Vault,
    target: VersionRef,
    artist: &str,
) -> Result<LoadPrompt<'a>> {
    if artist.trim().is_empty() {
        return Err(Error::EmptyArtistName);
    }
    let next = vault.next_version(&target.project, &target.asset, &target.job);
    Ok(LoadPrompt {
        current: target.version,
        next,
        vault,
        target,
        artist: artist.to_string(),
    })
}

impl LoadPrompt<'_> {
    /// Resolve with "continue working from the current version": open its
    /// scene file unless it is already the open scene.
    pub fn load_current(self, host: &mut dyn SceneHost) -> Result<LoadOutcome> {
        let scene_file = self.vault.scene_file(&self.target);
        if host.current_scene_path().as_deref() == Some(scene_file.as_path()) {
            warn!("The file is already loaded.");
            return Ok(LoadOutcome::AlreadyOpen(scene_file));
        }
        host.open_scene(&scene_file, true)?;
        Ok(LoadOutcome::Opened(scene_file))
    }

    /// Resolve with "branch a new version": create the next version
    /// folder, open the previous snapshot, carry it over under the new
    /// name, and rebuild against the new version.
    pub fn create_next(
        self,
        host: &mut dyn SceneHost,
        progress: &mut dyn Progress,
    ) -> Result<LoadOutcome> {
        let previous_scene = self.vault.scene_file(&self.target);

        let new_version = self.vault.create_version(
            &self.target.project,
            &self.target.asset,
            &self.target.job,
        )?;
        let new_target = self.target.at(new_version);

        host.open_scene(&previous_scene, true)?;
        host.rename_scene(&self.vault.scene_file(&new_target))?;

        let report = run_build(self.vault, host, &new_target, &self.artist, progress)?;
        Ok(LoadOutcome::VersionedUp {
            target: new_target,
            report,
        })
    }
}
