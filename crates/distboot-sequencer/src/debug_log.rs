use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use distboot_core::{BootstrapConfig, Flow, InstallLayout};

// Log writes are best-effort and never fail the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugLog {
    path: Option<PathBuf>,
}

impl DebugLog {
    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn enabled(&self) -> bool {
        self.path.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn section(&self, title: &str) {
        self.append(format!("== {title}\n").as_bytes());
    }

    pub fn output(&self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        self.append(bytes);
        if !bytes.ends_with(b"\n") {
            self.append(b"\n");
        }
    }

    pub fn error(&self, message: &str) {
        eprintln!("distboot: {message}");
        self.record_error(message);
    }

    // A failing step in a non-debug deployment stays silent on the console.
    pub fn record_error(&self, message: &str) {
        self.append(format!("ERROR: {message}\n").as_bytes());
    }

    pub fn dump(&self) {
        let Some(path) = &self.path else {
            return;
        };
        match self.replay() {
            Some(contents) => {
                eprintln!("--- {} ---", path.display());
                eprint!("{contents}");
                eprintln!("--- end of log ---");
            }
            None => eprintln!("distboot: could not read log {}", path.display()),
        }
    }

    pub(crate) fn replay(&self) -> Option<String> {
        let path = self.path.as_deref()?;
        fs::read(path)
            .ok()
            .map(|contents| String::from_utf8_lossy(&contents).into_owned())
    }

    fn append(&self, bytes: &[u8]) {
        let Some(path) = &self.path else {
            return;
        };
        let file = OpenOptions::new().create(true).append(true).open(path);
        if let Ok(mut file) = file {
            let _ = file.write_all(bytes);
        }
    }
}

pub fn debug_log_for(layout: &InstallLayout, config: &BootstrapConfig, flow: Flow) -> DebugLog {
    if config.debug {
        DebugLog::to_file(layout.log_file_path(flow))
    } else {
        DebugLog::disabled()
    }
}
