//! View-model for the selector-driven presentation layer.
//!
//! The selectors populate strictly in dependency order: projects, then
//! assets, then jobs, then versions. [`VaultViewModel`] owns the option
//! lists, the current selection and the control enablement flags; the
//! store itself knows nothing about any of this. A toolkit front-end binds
//! widgets to these fields and calls the `select_*` methods from its
//! change handlers.

use tracing::warn;

use crate::store::{Vault, Version, VersionRef, CREATE_JOB_SENTINEL};
use crate::util::Result;

/// Current selection, one level per selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub project: Option<String>,
    pub asset: Option<String>,
    pub job: Option<String>,
    pub version: Option<String>,
}

/// Enablement flags for every control the workflow drives.
///
/// `build` and `load` are mutually exclusive: a version that has a scene
/// snapshot loads, one that does not builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub assets: bool,
    pub jobs: bool,
    pub job_create: bool,
    pub versions: bool,
    pub version_create: bool,
    pub artist: bool,
    pub build: bool,
    pub load: bool,
}

/// Presentation state over one [`Vault`].
#[derive(Debug)]
pub struct VaultViewModel {
    vault: Vault,
    pub projects: Vec<String>,
    pub assets: Vec<String>,
    pub jobs: Vec<String>,
    pub versions: Vec<String>,
    pub selection: Selection,
    pub controls: Controls,
    /// Non-blocking warning for the user, e.g. a missing asset root.
    pub warning: Option<String>,
}

impl VaultViewModel {
    /// Build the view-model and run the initial populate chain.
    pub fn new(vault: Vault) -> Self {
        let mut vm = Self {
            vault,
            projects: Vec::new(),
            assets: Vec::new(),
            jobs: Vec::new(),
            versions: Vec::new(),
            selection: Selection::default(),
            controls: Controls::default(),
            warning: None,
        };
        vm.populate_projects();
        vm
    }

    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    /// The fully qualified version selection, when every selector holds a
    /// real (non-sentinel, well-formed) value.
    pub fn current_target(&self) -> Option<VersionRef> {
        let project = self.selection.project.as_deref()?;
        let asset = self.selection.asset.as_deref()?;
        let job = self.selection.job.as_deref()?;
        if job == CREATE_JOB_SENTINEL {
            return None;
        }
        let version = Version::parse(self.selection.version.as_deref()?).ok()?;
        Some(VersionRef::new(project, asset, job, version))
    }

    pub fn populate_projects(&mut self) {
        self.projects = self.vault.projects();
        self.selection.project = self.projects.first().cloned();
        self.populate_assets();
    }

    pub fn select_project(&mut self, project: &str) {
        self.selection.project = Some(project.to_string());
        self.populate_assets();
    }

    pub fn populate_assets(&mut self) {
        self.assets.clear();
        self.jobs.clear();
        self.versions.clear();
        self.selection.asset = None;
        self.selection.job = None;
        self.selection.version = None;
        self.warning = None;

        let Some(project) = self.selection.project.clone() else {
            self.controls = Controls::default();
            return;
        };

        if !self.vault.has_asset_root(&project) {
            self.controls = Controls::default();
            let message = format!(
                "Missing directory. For example, there should be a directory path of \
                 {}/<Project Name>/09_CG_RnD/CG_Assets/",
                self.vault.layout().root().display()
            );
            warn!("{message}");
            self.warning = Some(message);
            return;
        }

        self.controls.assets = true;
        self.controls.jobs = true;
        self.controls.versions = true;
        self.controls.version_create = true;
        self.controls.artist = true;

        self.assets = self.vault.assets(&project);
        self.selection.asset = self.assets.first().cloned();
        self.populate_jobs();
    }

    pub fn select_asset(&mut self, asset: &str) {
        self.selection.asset = Some(asset.to_string());
        self.populate_jobs();
    }

    pub fn populate_jobs(&mut self) {
        self.jobs.clear();
        self.versions.clear();
        self.selection.job = None;
        self.selection.version = None;

        let (Some(project), Some(asset)) =
            (self.selection.project.clone(), self.selection.asset.clone())
        else {
            return;
        };

        self.jobs = self.vault.jobs(&project, &asset);
        self.selection.job = self.jobs.first().cloned();
        self.populate_versions();
    }

    pub fn select_job(&mut self, job: &str) {
        self.selection.job = Some(job.to_string());
        self.populate_versions();
    }

    /// Refresh the version list for the selected job, auto-select the
    /// current (highest-numbered) version and derive control enablement.
    /// Also the post-build refresh hook.
    pub fn populate_versions(&mut self) {
        self.versions.clear();
        self.selection.version = None;

        let (Some(project), Some(asset), Some(job)) = (
            self.selection.project.clone(),
            self.selection.asset.clone(),
            self.selection.job.clone(),
        ) else {
            return;
        };

        if job == CREATE_JOB_SENTINEL {
            self.controls.job_create = true;
            self.controls.versions = false;
            self.controls.version_create = false;
            self.controls.build = false;
            self.controls.load = false;
            return;
        }

        self.controls.job_create = false;
        self.controls.versions = true;
        self.controls.version_create = true;

        self.versions = self.vault.versions(&project, &asset, &job);
        self.selection.version = self
            .vault
            .current_version(&project, &asset, &job)
            .map(|v| v.label());
        self.update_build_load();
    }

    /// Change handler for the version selector.
    pub fn select_version(&mut self, version: &str) {
        self.selection.version = Some(version.to_string());
        self.update_build_load();
    }

    fn update_build_load(&mut self) {
        match self.current_target() {
            Some(target) => {
                let built = self.vault.is_built(&target);
                self.controls.build = !built;
                self.controls.load = built;
            }
            None => {
                self.controls.build = false;
                self.controls.load = false;
            }
        }
    }

    /// Create a job under the selected asset, then re-populate with the
    /// new job selected.
    pub fn create_job(&mut self, name: &str) -> Result<()> {
        let (Some(project), Some(asset)) =
            (self.selection.project.clone(), self.selection.asset.clone())
        else {
            warn!("create_job with no asset selected");
            return Ok(());
        };
        self.vault.create_job(&project, &asset, name)?;
        self.populate_jobs();
        self.select_job(name);
        Ok(())
    }

    /// Create the next version for the selected job, then re-populate with
    /// it selected.
    pub fn create_version(&mut self) -> Result<Option<Version>> {
        let Some(target) = self.current_target() else {
            warn!("create_version with no job selected");
            return Ok(None);
        };
        let version = self
            .vault
            .create_version(&target.project, &target.asset, &target.job)?;
        self.populate_versions();
        self.select_version(&version.label());
        Ok(Some(version))
    }
}
