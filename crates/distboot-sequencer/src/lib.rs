mod debug_log;
mod failure;
mod install;
mod prereq;
mod runner;
mod uninstall;

pub use debug_log::{debug_log_for, DebugLog};
pub use failure::{
    exit_code_for, SequencerFailure, EXIT_BASE_MISSING, EXIT_CONDA_EXE_MISSING,
    EXIT_PAYLOAD_MISSING,
};
pub use install::run_install;
pub use prereq::{require_dir, require_file};
pub use runner::CondaRunner;
pub use uninstall::run_uninstall;
