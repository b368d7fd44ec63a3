//! The Asset Version Store.
//!
//! A convention-based directory scheme on a shared filesystem, organized as
//! project -> asset -> job -> version. Projects and assets are created
//! outside this tool and only discovered; jobs and versions are created
//! here and never deleted or renamed. There is no in-memory cache: every
//! query re-scans the directory tree, so concurrent artist sessions always
//! see current state (but see [`Version`] on the numbering race).

mod layout;
mod version;

pub use layout::{
    VaultLayout, ARCHIVES_SUBDIR, ASSETS_SUBDIR, EXPORTS_SUBDIR, NOTES_SUBDIR, RND_MARKER,
    SCENE_SUBDIR, SCRIPTS_SUBDIR, TEMPLATE_PROJECT, TEXTURES_SUBDIR, VERSION_SUBDIRS,
};
pub use version::Version;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::util::{Error, Result};

/// Synthetic entry appended to every job listing; selecting it switches the
/// presentation layer into the job-creation flow.
pub const CREATE_JOB_SENTINEL: &str = "Create New Job";

/// Default extension for scene snapshots.
pub const DEFAULT_SCENE_EXT: &str = "mb";

/// Default extension for notes records.
pub const DEFAULT_NOTES_EXT: &str = "rtf";

/// Fully qualified selection of one version in the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRef {
    pub project: String,
    pub asset: String,
    pub job: String,
    pub version: Version,
}

impl VersionRef {
    pub fn new(
        project: impl Into<String>,
        asset: impl Into<String>,
        job: impl Into<String>,
        version: Version,
    ) -> Self {
        Self {
            project: project.into(),
            asset: asset.into(),
            job: job.into(),
            version,
        }
    }

    /// Same job, different version.
    pub fn at(&self, version: Version) -> Self {
        Self {
            version,
            ..self.clone()
        }
    }
}

impl fmt::Display for VersionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.project, self.asset, self.job, self.version
        )
    }
}

/// Filesystem-backed store for the project/asset/job/version hierarchy.
///
/// Holds no UI references and performs no locking; the directory tree is
/// the single source of truth.
#[derive(Debug, Clone)]
pub struct Vault {
    layout: VaultLayout,
    scene_ext: String,
    notes_ext: String,
}

impl Vault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            layout: VaultLayout::new(root),
            scene_ext: DEFAULT_SCENE_EXT.to_string(),
            notes_ext: DEFAULT_NOTES_EXT.to_string(),
        }
    }

    pub fn with_scene_ext(mut self, ext: impl Into<String>) -> Self {
        self.scene_ext = ext.into();
        self
    }

    pub fn with_notes_ext(mut self, ext: impl Into<String>) -> Self {
        self.notes_ext = ext.into();
        self
    }

    pub fn layout(&self) -> &VaultLayout {
        &self.layout
    }

    /// Probe for the share actually being mounted. `projects()` stays
    /// silent on an unreachable root; callers that want to warn about
    /// connectivity check this separately.
    pub fn root_reachable(&self) -> bool {
        self.layout.root().is_dir()
    }

    /// Every immediate subdirectory of the root that carries the R&D
    /// marker, excluding the reserved template. Unreachable root yields an
    /// empty list.
    pub fn projects(&self) -> Vec<String> {
        let mut projects: Vec<String> = list_entries(self.layout.root())
            .into_iter()
            .filter(|name| name != TEMPLATE_PROJECT)
            .filter(|name| self.layout.rnd_dir(name).is_dir())
            .collect();
        projects.sort();
        projects
    }

    /// True when the project's `CG_Assets` root exists. Its absence is a
    /// recoverable, user-visible condition, not an error.
    pub fn has_asset_root(&self, project: &str) -> bool {
        self.layout.assets_dir(project).is_dir()
    }

    /// Immediate entries of the project's asset root; empty if it does not
    /// exist yet.
    pub fn assets(&self, project: &str) -> Vec<String> {
        let mut assets = list_entries(&self.layout.assets_dir(project));
        assets.sort();
        assets
    }

    /// Immediate entries of the asset directory, with the
    /// [`CREATE_JOB_SENTINEL`] appended last - always, even when the asset
    /// directory is missing.
    pub fn jobs(&self, project: &str, asset: &str) -> Vec<String> {
        let mut jobs = list_entries(&self.layout.asset_dir(project, asset));
        jobs.sort();
        jobs.push(CREATE_JOB_SENTINEL.to_string());
        jobs
    }

    /// Create `<asset>/<job>/v001` with the standard sub-folder set.
    pub fn create_job(&self, project: &str, asset: &str, job: &str) -> Result<()> {
        if job.trim().is_empty() {
            return Err(Error::EmptyJobName);
        }
        let job_dir = self.layout.job_dir(project, asset, job);
        if job_dir.exists() {
            return Err(Error::JobExists {
                asset: asset.to_string(),
                job: job.to_string(),
            });
        }
        debug!(job = %job, "creating job directory {}", job_dir.display());
        fs::create_dir_all(&job_dir)?;
        self.scaffold_version(&job_dir.join(Version::FIRST.label()))?;
        Ok(())
    }

    /// Entry names of the job directory, sorted. Version folders sort in
    /// creation order thanks to the zero-padded labels.
    pub fn versions(&self, project: &str, asset: &str, job: &str) -> Vec<String> {
        let mut versions = list_entries(&self.layout.job_dir(project, asset, job));
        versions.sort();
        versions
    }

    /// Number of entries in the job directory. The version count *is* this
    /// number; gaps or stray files skew it, as they did in the original
    /// studio convention.
    pub fn version_count(&self, project: &str, asset: &str, job: &str) -> usize {
        self.versions(project, asset, job).len()
    }

    /// The highest-numbered version, derived from the entry count rather
    /// than parsed from folder names. `None` for a job with no versions.
    pub fn current_version(&self, project: &str, asset: &str, job: &str) -> Option<Version> {
        match self.version_count(project, asset, job) {
            0 => None,
            n => Some(Version::new(n as u32)),
        }
    }

    /// The version a `create_version` call would produce: `count + 1`.
    ///
    /// Two sessions computing this against the same job at the same time
    /// get the same answer; the second `create_version` then fails on the
    /// existing directory.
    pub fn next_version(&self, project: &str, asset: &str, job: &str) -> Version {
        Version::new(self.version_count(project, asset, job) as u32 + 1)
    }

    /// Create the next sequential version folder with the standard
    /// sub-folder set and return it.
    pub fn create_version(&self, project: &str, asset: &str, job: &str) -> Result<Version> {
        let next = self.next_version(project, asset, job);
        let dir = self.layout.version_dir(project, asset, job, next);
        debug!("creating version directory {}", dir.display());
        self.scaffold_version(&dir)?;
        Ok(next)
    }

    /// True iff the version's scene-files folder is non-empty. A missing
    /// folder counts as not built.
    pub fn is_built(&self, target: &VersionRef) -> bool {
        match fs::read_dir(self.scene_dir(target)) {
            Ok(mut entries) => entries.next().is_some(),
            Err(_) => false,
        }
    }

    pub fn scene_dir(&self, target: &VersionRef) -> PathBuf {
        self.version_subdir(target, SCENE_SUBDIR)
    }

    pub fn textures_dir(&self, target: &VersionRef) -> PathBuf {
        self.version_subdir(target, TEXTURES_SUBDIR)
    }

    pub fn exports_dir(&self, target: &VersionRef) -> PathBuf {
        self.version_subdir(target, EXPORTS_SUBDIR)
    }

    pub fn notes_dir(&self, target: &VersionRef) -> PathBuf {
        self.version_subdir(target, NOTES_SUBDIR)
    }

    pub fn version_subdir(&self, target: &VersionRef, subdir: &str) -> PathBuf {
        self.layout.version_subdir(
            &target.project,
            &target.asset,
            &target.job,
            target.version,
            subdir,
        )
    }

    /// `<scene dir>/<job>_<vNNN>.<scene ext>` - one scene snapshot per
    /// version.
    pub fn scene_file(&self, target: &VersionRef) -> PathBuf {
        self.scene_dir(target)
            .join(format!("{}_{}.{}", target.job, target.version, self.scene_ext))
    }

    /// `<notes dir>/<job>_<vNNN>.<notes ext>`.
    pub fn notes_file(&self, target: &VersionRef) -> PathBuf {
        self.notes_dir(target)
            .join(format!("{}_{}.{}", target.job, target.version, self.notes_ext))
    }

    fn scaffold_version(&self, dir: &Path) -> Result<()> {
        // Plain create_dir: a collision with another session surfaces as
        // an AlreadyExists I/O error instead of silently merging.
        fs::create_dir(dir)?;
        for sub in VERSION_SUBDIRS {
            fs::create_dir(dir.join(sub))?;
        }
        Ok(())
    }
}

/// Entry names of a directory; empty for a missing or unreadable one.
fn list_entries(dir: &Path) -> Vec<String> {
    match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn vault_with_asset() -> (TempDir, Vault) {
        let tmp = TempDir::new().unwrap();
        let vault = Vault::new(tmp.path());
        fs::create_dir_all(vault.layout().asset_dir("Gravity", "Station")).unwrap();
        (tmp, vault)
    }

    #[test]
    fn test_projects_require_marker_and_skip_template() {
        let tmp = TempDir::new().unwrap();
        let vault = Vault::new(tmp.path());
        fs::create_dir_all(tmp.path().join("ProjectX").join(RND_MARKER)).unwrap();
        fs::create_dir_all(tmp.path().join(TEMPLATE_PROJECT).join(RND_MARKER)).unwrap();
        fs::create_dir_all(tmp.path().join("NotAProject")).unwrap();

        assert_eq!(vault.projects(), vec!["ProjectX".to_string()]);
    }

    #[test]
    fn test_projects_silent_on_unreachable_root() {
        let vault = Vault::new("/definitely/not/mounted/anywhere");
        assert!(!vault.root_reachable());
        assert!(vault.projects().is_empty());
    }

    #[test]
    fn test_jobs_sentinel_always_last() {
        let (_tmp, vault) = vault_with_asset();
        assert_eq!(
            vault.jobs("Gravity", "Station"),
            vec![CREATE_JOB_SENTINEL.to_string()]
        );

        vault.create_job("Gravity", "Station", "modeling").unwrap();
        let jobs = vault.jobs("Gravity", "Station");
        assert_eq!(jobs, vec!["modeling".to_string(), CREATE_JOB_SENTINEL.to_string()]);
    }

    #[test]
    fn test_create_job_scaffolds_first_version() {
        let (_tmp, vault) = vault_with_asset();
        vault.create_job("Gravity", "Station", "modeling").unwrap();

        let v1 = vault
            .layout()
            .version_dir("Gravity", "Station", "modeling", Version::FIRST);
        assert!(v1.is_dir());
        for sub in VERSION_SUBDIRS {
            assert!(v1.join(sub).is_dir(), "missing sub-folder {sub}");
        }
    }

    #[test]
    fn test_create_job_validations() {
        let (_tmp, vault) = vault_with_asset();
        assert!(matches!(
            vault.create_job("Gravity", "Station", "  "),
            Err(Error::EmptyJobName)
        ));

        vault.create_job("Gravity", "Station", "modeling").unwrap();
        assert!(matches!(
            vault.create_job("Gravity", "Station", "modeling"),
            Err(Error::JobExists { .. })
        ));
    }

    #[test]
    fn test_version_numbering_follows_count() {
        let (_tmp, vault) = vault_with_asset();
        vault.create_job("Gravity", "Station", "modeling").unwrap();

        assert_eq!(
            vault.current_version("Gravity", "Station", "modeling"),
            Some(Version::FIRST)
        );
        assert_eq!(
            vault.next_version("Gravity", "Station", "modeling").label(),
            "v002"
        );

        let v2 = vault.create_version("Gravity", "Station", "modeling").unwrap();
        assert_eq!(v2.label(), "v002");
        assert_eq!(vault.version_count("Gravity", "Station", "modeling"), 2);
    }

    #[test]
    fn test_create_version_without_job_fails() {
        let (_tmp, vault) = vault_with_asset();
        assert!(matches!(
            vault.create_version("Gravity", "Station", "nope"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_is_built_tracks_scene_folder() {
        let (_tmp, vault) = vault_with_asset();
        vault.create_job("Gravity", "Station", "modeling").unwrap();
        let target = VersionRef::new("Gravity", "Station", "modeling", Version::FIRST);

        assert!(!vault.is_built(&target));
        fs::write(vault.scene_file(&target), b"scene").unwrap();
        assert!(vault.is_built(&target));

        // Missing version folder counts as not built.
        let ghost = target.at(Version::new(9));
        assert!(!vault.is_built(&ghost));
    }

    #[test]
    fn test_snapshot_file_names() {
        let vault = Vault::new("/srv/ripley");
        let target = VersionRef::new("Gravity", "Station", "modeling", Version::new(3));
        assert!(vault
            .scene_file(&target)
            .ends_with("modeling/v003/maya_files/modeling_v003.mb"));
        assert!(vault
            .notes_file(&target)
            .ends_with("modeling/v003/notes/modeling_v003.rtf"));

        let vault = Vault::new("/srv/ripley").with_scene_ext("ma").with_notes_ext("txt");
        assert!(vault.scene_file(&target).ends_with("modeling_v003.ma"));
        assert!(vault.notes_file(&target).ends_with("modeling_v003.txt"));
    }
}
