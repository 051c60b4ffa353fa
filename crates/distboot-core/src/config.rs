use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BootstrapConfig {
    #[serde(default = "default_conda_exe")]
    pub conda_exe: String,
    #[serde(default = "default_payload_archive")]
    pub payload_archive: String,
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_true")]
    pub register_envs: bool,
    #[serde(default = "default_true")]
    pub remove_menus: bool,
}

fn default_conda_exe() -> String {
    "_conda.exe".to_string()
}

fn default_payload_archive() -> String {
    "payload.tar.gz".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            conda_exe: default_conda_exe(),
            payload_archive: default_payload_archive(),
            debug: false,
            register_envs: true,
            remove_menus: true,
        }
    }
}

impl BootstrapConfig {
    pub const FILE_NAME: &'static str = "bootstrap.toml";

    pub fn default_path(install_dir: &Path) -> PathBuf {
        install_dir.join(Self::FILE_NAME)
    }

    pub fn parse(input: &str) -> anyhow::Result<Self> {
        toml::from_str(input).context("failed to parse bootstrap config")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read bootstrap config: {}", path.display()))?;
        Self::parse(&raw)
            .with_context(|| format!("invalid bootstrap config: {}", path.display()))
    }

    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        match fs::read_to_string(path) {
            Ok(raw) => Self::parse(&raw)
                .with_context(|| format!("invalid bootstrap config: {}", path.display())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err)
                .with_context(|| format!("failed to read bootstrap config: {}", path.display())),
        }
    }
}
