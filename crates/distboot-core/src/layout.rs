use std::env;
use std::path::{Component, Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::BootstrapConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Install,
    Uninstall,
}

impl Flow {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Install => "install",
            Self::Uninstall => "uninstall",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    install_dir: PathBuf,
    conda_exe: String,
    payload_archive: String,
}

impl InstallLayout {
    pub fn new(install_dir: impl Into<PathBuf>, config: &BootstrapConfig) -> Self {
        Self {
            install_dir: install_dir.into(),
            conda_exe: config.conda_exe.clone(),
            payload_archive: config.payload_archive.clone(),
        }
    }

    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    pub fn conda_exe_path(&self) -> PathBuf {
        self.install_dir.join(&self.conda_exe)
    }

    pub fn payload_archive_path(&self) -> PathBuf {
        self.install_dir.join(&self.payload_archive)
    }

    // The name "base" is fixed by the payload layout produced at packaging
    // time.
    pub fn base_path(&self) -> PathBuf {
        self.install_dir.join("base")
    }

    pub fn pkgs_dir(&self) -> PathBuf {
        self.base_path().join("pkgs")
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.base_path()
            .join("conda-meta")
            .join("initial-state.explicit.txt")
    }

    pub fn log_file_path(&self, flow: Flow) -> PathBuf {
        let leaf = self
            .install_dir
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("distboot");
        env::temp_dir().join(format!("{}_{}.log", leaf, flow.as_str()))
    }
}

// Must not touch the filesystem: a nonexistent install dir surfaces later as
// a missing-executable prerequisite failure, never here.
pub fn resolve_install_dir_from(exe_path: &Path, cwd: &Path) -> Result<PathBuf> {
    let parent = exe_path
        .parent()
        .ok_or_else(|| anyhow!("executable path has no parent: {}", exe_path.display()))?;

    let absolute = if parent.as_os_str().is_empty() {
        cwd.to_path_buf()
    } else if parent.is_absolute() {
        parent.to_path_buf()
    } else {
        cwd.join(parent)
    };

    Ok(normalize_lexically(&absolute))
}

pub fn resolve_install_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("failed to locate the running executable")?;
    let cwd = env::current_dir().context("failed to read the current directory")?;
    resolve_install_dir_from(&exe, &cwd)
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component.as_os_str());
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
