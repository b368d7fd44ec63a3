//! Seam to the 3D scene host application.
//!
//! The vault never touches scene data directly; everything it needs from
//! the host - the current scene, mesh and texture inventories, exporters -
//! goes through [`SceneHost`]. A production implementation wraps the host's
//! command layer; tests drive the flows with a scripted fake.

use std::path::{Path, PathBuf};

use crate::util::Result;

/// Typed access to the host application's scene and export services.
///
/// Methods that mutate scene state take `&mut self`; the host runs
/// everything on its single UI thread, so no call here suspends or
/// overlaps another.
pub trait SceneHost {
    /// Path of the currently open scene, if it has ever been saved.
    fn current_scene_path(&self) -> Option<PathBuf>;

    /// Rename the in-memory scene. No disk write happens until
    /// [`save_scene`](Self::save_scene).
    fn rename_scene(&mut self, path: &Path) -> Result<()>;

    /// Persist the scene under its current name.
    fn save_scene(&mut self) -> Result<()>;

    /// Open a scene file, discarding unsaved changes when `force` is set.
    fn open_scene(&mut self, path: &Path, force: bool) -> Result<()>;

    /// Names of every mesh in the scene.
    fn mesh_names(&self) -> Vec<String>;

    /// Export one mesh as OBJ to the given path. The host exporter may
    /// drop auxiliary material files (`.mtl`) next to the target.
    fn export_mesh_obj(&mut self, mesh: &str, path: &Path) -> Result<()>;

    /// Names of every file-texture reference in the scene.
    fn texture_names(&self) -> Vec<String>;

    /// On-disk paths of all referenced texture files, resolved through the
    /// host's path-editor service.
    fn texture_files(&self) -> Result<Vec<PathBuf>>;

    /// Repoint one texture reference at a new directory. This mutates the
    /// open scene in place; the artist sees the change immediately.
    fn repath_texture(&mut self, texture: &str, dir: &Path) -> Result<()>;
}
