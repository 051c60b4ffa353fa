mod config;
mod env;
mod layout;

pub use config::BootstrapConfig;
pub use env::conda_env;
pub use layout::{resolve_install_dir, resolve_install_dir_from, Flow, InstallLayout};
