//! The on-disk naming convention for the studio file server.
//!
//! Every path in the vault follows
//! `<root>/<project>/09_CG_RnD/CG_Assets/<asset>/<job>/v<NNN>/...`.
//! All convention strings live here; nothing else in the crate concatenates
//! them by hand.

use std::path::{Path, PathBuf};

use super::Version;

/// Marker subdirectory that qualifies a root entry as a project.
pub const RND_MARKER: &str = "09_CG_RnD";

/// Asset root under the R&D marker.
pub const ASSETS_SUBDIR: &str = "CG_Assets";

/// Reserved template folder, hidden from project listings.
pub const TEMPLATE_PROJECT: &str = "rev_template";

/// Scene snapshots for a version.
pub const SCENE_SUBDIR: &str = "maya_files";
/// Copied texture files for a version.
pub const TEXTURES_SUBDIR: &str = "textures";
/// Painting archives for a version.
pub const ARCHIVES_SUBDIR: &str = "mari_archives";
/// Exported geometry for a version.
pub const EXPORTS_SUBDIR: &str = "exports";
/// Per-version scripts.
pub const SCRIPTS_SUBDIR: &str = "scripts";
/// Human-readable build records.
pub const NOTES_SUBDIR: &str = "notes";

/// The fixed sub-folder set scaffolded inside every version.
pub const VERSION_SUBDIRS: [&str; 6] = [
    SCENE_SUBDIR,
    TEXTURES_SUBDIR,
    ARCHIVES_SUBDIR,
    EXPORTS_SUBDIR,
    SCRIPTS_SUBDIR,
    NOTES_SUBDIR,
];

/// Derives every convention path from a single root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultLayout {
    root: PathBuf,
}

impl VaultLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn project_dir(&self, project: &str) -> PathBuf {
        self.root.join(project)
    }

    /// `<project>/09_CG_RnD` - presence marks a root entry as a project.
    pub fn rnd_dir(&self, project: &str) -> PathBuf {
        self.project_dir(project).join(RND_MARKER)
    }

    /// `<project>/09_CG_RnD/CG_Assets` - where a project's assets live.
    pub fn assets_dir(&self, project: &str) -> PathBuf {
        self.rnd_dir(project).join(ASSETS_SUBDIR)
    }

    pub fn asset_dir(&self, project: &str, asset: &str) -> PathBuf {
        self.assets_dir(project).join(asset)
    }

    pub fn job_dir(&self, project: &str, asset: &str, job: &str) -> PathBuf {
        self.asset_dir(project, asset).join(job)
    }

    pub fn version_dir(&self, project: &str, asset: &str, job: &str, version: Version) -> PathBuf {
        self.job_dir(project, asset, job).join(version.label())
    }

    pub fn version_subdir(
        &self,
        project: &str,
        asset: &str,
        job: &str,
        version: Version,
        subdir: &str,
    ) -> PathBuf {
        self.version_dir(project, asset, job, version).join(subdir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_path_assembly() {
        let layout = VaultLayout::new("/srv/ripley");
        let dir = layout.version_dir("Gravity", "Station", "modeling", Version::new(3));
        assert_eq!(
            dir,
            PathBuf::from("/srv/ripley/Gravity/09_CG_RnD/CG_Assets/Station/modeling/v003")
        );
    }

    #[test]
    fn test_subdir_paths() {
        let layout = VaultLayout::new("/srv/ripley");
        let scenes =
            layout.version_subdir("Gravity", "Station", "modeling", Version::FIRST, SCENE_SUBDIR);
        assert!(scenes.ends_with("modeling/v001/maya_files"));
    }

    #[test]
    fn test_subdir_set() {
        assert_eq!(VERSION_SUBDIRS.len(), 6);
        assert!(VERSION_SUBDIRS.contains(&"exports"));
        assert!(VERSION_SUBDIRS.contains(&"notes"));
    }
}
