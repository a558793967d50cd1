use std::process::ExitCode;

use tricolor_engine::device::{GpuInit, SetupError};
use tricolor_engine::logging::{init_logging, LoggingConfig};
use tricolor_engine::window::{Runtime, RuntimeConfig};

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());
    log::debug!("tricolor {}", env!("CARGO_PKG_VERSION"));

    match Runtime::run(RuntimeConfig::default(), GpuInit::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(SetupError::Unavailable) = SetupError::find(&err) {
                // The user-facing alert; everything else was already logged.
                eprintln!("{}", SetupError::Unavailable);
            }
            ExitCode::FAILURE
        }
    }
}
