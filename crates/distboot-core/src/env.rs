use crate::{BootstrapConfig, InstallLayout};

pub fn conda_env(layout: &InstallLayout, config: &BootstrapConfig) -> Vec<(String, String)> {
    vec![
        (
            "CONDA_ROOT_PREFIX".to_string(),
            layout.base_path().display().to_string(),
        ),
        (
            "CONDA_PKGS_DIRS".to_string(),
            layout.pkgs_dir().display().to_string(),
        ),
        (
            "CONDA_PROTECT_FROZEN_ENVS".to_string(),
            "false".to_string(),
        ),
        ("CONDA_SAFETY_CHECKS".to_string(), "disabled".to_string()),
        ("CONDA_EXTRA_SAFETY_CHECKS".to_string(), "no".to_string()),
        (
            "CONDA_REGISTER_ENVS".to_string(),
            if config.register_envs { "true" } else { "false" }.to_string(),
        ),
    ]
}
