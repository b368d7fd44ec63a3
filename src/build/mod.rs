//! The build flow: materialize a version from the open scene.
//!
//! A build saves the scene snapshot into the version's scene folder,
//! exports every mesh as OBJ (skipping ones already exported), copies the
//! referenced texture files in and repoints the scene at the copies, then
//! writes a notes record. Scene save always runs first, unconditionally;
//! missing meshes or textures downgrade their phase to a warning. Any
//! unexpected I/O failure aborts mid-way with no rollback - a half-built
//! version keeps whatever was written before the failure.

mod notes;

pub use notes::NotesRecord;

use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::host::SceneHost;
use crate::store::{Vault, VersionRef};
use crate::util::{Error, Result};

/// Progress sink for the long export loops. The loops run to completion on
/// the calling thread; there is no cancellation.
pub trait Progress {
    /// A phase with `total` steps is starting.
    fn begin(&mut self, label: &str, total: usize) {
        let _ = (label, total);
    }

    /// One step of the current phase finished.
    fn advance(&mut self) {}

    /// The current phase is done.
    fn end(&mut self) {}
}

/// Sink that ignores all progress.
pub struct NoProgress;

impl Progress for NoProgress {}

/// What a build run did, so the caller can report and refresh listings.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub scene_file: PathBuf,
    pub meshes_exported: Vec<String>,
    pub meshes_skipped: Vec<String>,
    pub textures_copied: Vec<PathBuf>,
    pub notes_file: PathBuf,
}

/// Run the build flow against `target`.
///
/// Precondition: `artist` must be non-empty; nothing happens otherwise.
/// Postcondition: the caller refreshes its version listing so built state
/// and control enablement update.
pub fn run_build(
    vault: &Vault,
    host: &mut dyn SceneHost,
    target: &VersionRef,
    artist: &str,
    progress: &mut dyn Progress,
) -> Result<BuildReport> {
    if artist.trim().is_empty() {
        return Err(Error::EmptyArtistName);
    }

    let mut report = BuildReport::default();

    save_scene(vault, host, target, &mut report, progress)?;
    export_meshes(vault, host, target, &mut report, progress)?;
    export_textures(vault, host, target, &mut report, progress)?;
    write_notes(vault, host, target, artist, &mut report)?;

    Ok(report)
}

/// Rename the in-memory scene to the version's snapshot name and persist
/// it. Always the first step.
fn save_scene(
    vault: &Vault,
    host: &mut dyn SceneHost,
    target: &VersionRef,
    report: &mut BuildReport,
    progress: &mut dyn Progress,
) -> Result<()> {
    let scene_file = vault.scene_file(target);
    progress.begin("Saving Scene File", 1);
    debug!("saving scene as {}", scene_file.display());
    host.rename_scene(&scene_file)?;
    host.save_scene()?;
    progress.advance();
    progress.end();
    report.scene_file = scene_file;
    Ok(())
}

/// Export every scene mesh to `<exports>/<mesh>.obj`, skipping files that
/// already exist, then sweep the exporter's auxiliary `.mtl` files.
fn export_meshes(
    vault: &Vault,
    host: &mut dyn SceneHost,
    target: &VersionRef,
    report: &mut BuildReport,
    progress: &mut dyn Progress,
) -> Result<()> {
    let meshes = host.mesh_names();
    if meshes.is_empty() {
        warn!("There is no geometry in the scene.");
        return Ok(());
    }

    let exports_dir = vault.exports_dir(target);
    progress.begin("Exporting Geo", meshes.len());
    for mesh in meshes {
        let obj_path = exports_dir.join(format!("{mesh}.obj"));
        if obj_path.exists() {
            // Re-running a build never overwrites an existing export.
            debug!("skipping existing export {}", obj_path.display());
            report.meshes_skipped.push(mesh);
        } else {
            host.export_mesh_obj(&mesh, &obj_path)?;
            report.meshes_exported.push(mesh);
        }
        progress.advance();
    }
    progress.end();

    // Only geometry is retained; drop whatever material descriptions the
    // exporter produced.
    for entry in fs::read_dir(&exports_dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "mtl") {
            debug!("removing material file {}", path.display());
            fs::remove_file(&path)?;
        }
    }

    Ok(())
}

/// Copy every referenced texture file into the version's texture folder
/// (overwriting by name), then repoint all texture references at it.
fn export_textures(
    vault: &Vault,
    host: &mut dyn SceneHost,
    target: &VersionRef,
    report: &mut BuildReport,
    progress: &mut dyn Progress,
) -> Result<()> {
    let texture_names = host.texture_names();
    if texture_names.is_empty() {
        warn!("There are no textures in your scene.");
        return Ok(());
    }

    let textures_dir = vault.textures_dir(target);
    let files = host.texture_files()?;
    progress.begin("Exporting Texture", files.len());
    for file in files {
        if file.exists() {
            let Some(name) = file.file_name() else {
                progress.advance();
                continue;
            };
            let dest = textures_dir.join(name);
            fs::copy(&file, &dest)?;
            report.textures_copied.push(dest);
        }
        progress.advance();
    }
    progress.end();

    for texture in &texture_names {
        host.repath_texture(texture, &textures_dir)?;
    }

    Ok(())
}

/// Write the notes record. The texture list is re-read from the
/// destination folder, so it reflects everything present after the copy.
fn write_notes(
    vault: &Vault,
    host: &mut dyn SceneHost,
    target: &VersionRef,
    artist: &str,
    report: &mut BuildReport,
) -> Result<()> {
    let mut texture_listing: Vec<String> = match fs::read_dir(vault.textures_dir(target)) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(_) => Vec::new(),
    };
    texture_listing.sort();

    let notes_file = vault.notes_file(target);
    let record = NotesRecord::now(artist, host.mesh_names(), texture_listing);
    record.write_to(&notes_file)?;
    report.notes_file = notes_file;
    Ok(())
}
