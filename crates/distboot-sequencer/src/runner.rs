use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use crate::{DebugLog, SequencerFailure};

// One blocking invocation per sequencer step; the environment configuration
// is applied per child, never exported into this process.
pub struct CondaRunner<'a> {
    exe: PathBuf,
    env: Vec<(String, String)>,
    log: &'a DebugLog,
}

impl<'a> CondaRunner<'a> {
    pub fn new(exe: impl Into<PathBuf>, env: Vec<(String, String)>, log: &'a DebugLog) -> Self {
        Self {
            exe: exe.into(),
            env,
            log,
        }
    }

    pub fn run(&self, step: &str, args: &[OsString], stdin_file: Option<&Path>) -> Result<()> {
        self.log.section(&format!(
            "{step}: {} {}",
            self.exe.display(),
            render_args(args)
        ));

        let mut command = Command::new(&self.exe);
        command.args(args);
        for (key, value) in &self.env {
            command.env(key, value);
        }
        match stdin_file {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open {} for streaming", path.display()))?;
                command.stdin(Stdio::from(file));
            }
            None => {
                command.stdin(Stdio::null());
            }
        }

        let output = command.output().with_context(|| {
            format!("failed to start '{}' for step '{step}'", self.exe.display())
        })?;
        self.log.output(&output.stdout);
        self.log.output(&output.stderr);

        if output.status.success() {
            return Ok(());
        }

        // A child killed by a signal has no code.
        let code = output.status.code().unwrap_or(1);
        let failure =
            SequencerFailure::new(code, format!("step '{step}' failed with exit code {code}"));
        self.log.record_error(failure.message());
        Err(failure.into())
    }
}

fn render_args(args: &[OsString]) -> String {
    args.iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
