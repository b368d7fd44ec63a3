//! Shared fixtures: a seeded vault root and a scripted scene host.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use cgvault::host::SceneHost;
use cgvault::store::{Vault, Version, VersionRef};
use cgvault::util::{Error, Result};

pub const PROJECT: &str = "Gravity";
pub const ASSET: &str = "Station";
pub const JOB: &str = "modeling";

/// Temp root with one project and one asset scaffolded.
pub fn seeded_vault() -> (TempDir, Vault) {
    let tmp = TempDir::new().expect("temp dir");
    let vault = Vault::new(tmp.path());
    fs::create_dir_all(vault.layout().asset_dir(PROJECT, ASSET)).expect("asset dir");
    (tmp, vault)
}

/// Seeded vault plus a freshly created job; returns its v001 reference.
pub fn seeded_job() -> (TempDir, Vault, VersionRef) {
    let (tmp, vault) = seeded_vault();
    vault.create_job(PROJECT, ASSET, JOB).expect("create job");
    let target = VersionRef::new(PROJECT, ASSET, JOB, Version::FIRST);
    (tmp, vault, target)
}

/// Scripted in-memory scene host.
///
/// Mimics the parts of the host contract the flows depend on: an OBJ
/// export that drops a `.mtl` next to the geometry, a scene that is
/// renamed in memory and only written on save, and texture references
/// resolved to real files under the temp root.
pub struct FakeHost {
    pub scene_path: Option<PathBuf>,
    pub meshes: Vec<String>,
    /// Texture reference name and the file it resolves to.
    pub textures: Vec<(String, PathBuf)>,
    /// Every path the scene was saved under.
    pub saved: Vec<PathBuf>,
    /// Every path opened, with the force flag.
    pub opened: Vec<(PathBuf, bool)>,
    /// Every repath call, in order.
    pub repathed: Vec<(String, PathBuf)>,
    /// Emit a `.mtl` sibling on OBJ export, like the host exporter does.
    pub emit_mtl: bool,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            scene_path: None,
            meshes: Vec::new(),
            textures: Vec::new(),
            saved: Vec::new(),
            opened: Vec::new(),
            repathed: Vec::new(),
            emit_mtl: true,
        }
    }

    pub fn with_meshes(mut self, names: &[&str]) -> Self {
        self.meshes = names.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Register a texture reference backed by a real file.
    pub fn add_texture(&mut self, name: &str, file: PathBuf, contents: &[u8]) {
        fs::write(&file, contents).expect("texture file");
        self.textures.push((name.to_string(), file));
    }

    /// Register a texture reference whose resolved file does not exist.
    pub fn add_missing_texture(&mut self, name: &str, file: PathBuf) {
        self.textures.push((name.to_string(), file));
    }
}

impl SceneHost for FakeHost {
    fn current_scene_path(&self) -> Option<PathBuf> {
        self.scene_path.clone()
    }

    fn rename_scene(&mut self, path: &Path) -> Result<()> {
        self.scene_path = Some(path.to_path_buf());
        Ok(())
    }

    fn save_scene(&mut self) -> Result<()> {
        let path = self
            .scene_path
            .clone()
            .ok_or_else(|| Error::host("scene has no name"))?;
        fs::write(&path, b"fake scene data")?;
        self.saved.push(path);
        Ok(())
    }

    fn open_scene(&mut self, path: &Path, force: bool) -> Result<()> {
        if !path.exists() {
            return Err(Error::SceneFileNotFound(path.to_path_buf()));
        }
        self.scene_path = Some(path.to_path_buf());
        self.opened.push((path.to_path_buf(), force));
        Ok(())
    }

    fn mesh_names(&self) -> Vec<String> {
        self.meshes.clone()
    }

    fn export_mesh_obj(&mut self, mesh: &str, path: &Path) -> Result<()> {
        fs::write(path, format!("# OBJ export of {mesh}\n"))?;
        if self.emit_mtl {
            fs::write(path.with_extension("mtl"), b"newmtl default\n")?;
        }
        Ok(())
    }

    fn texture_names(&self) -> Vec<String> {
        self.textures.iter().map(|(name, _)| name.clone()).collect()
    }

    fn texture_files(&self) -> Result<Vec<PathBuf>> {
        Ok(self.textures.iter().map(|(_, file)| file.clone()).collect())
    }

    fn repath_texture(&mut self, texture: &str, dir: &Path) -> Result<()> {
        self.repathed.push((texture.to_string(), dir.to_path_buf()));
        Ok(())
    }
}
