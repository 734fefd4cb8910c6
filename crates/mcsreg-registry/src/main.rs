//! mcsreg command line.
//!
//! Usage: `mcsreg-registry [config.yaml] [check <uid> <label>]`
//! - loads the config (default `mcsreg.yaml`) and initializes the registry
//! - prints the registry status as JSON
//! - optionally checks whether `uid` may use `label`

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use mcsreg_core::error::{McsError, Result};
use mcsreg_registry::{config, global, BackendResolver, FileConfig, McsRegistry, StaticDirectory};

fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "mcsreg failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = args.first().map(String::as_str).unwrap_or("mcsreg.yaml");

    let cfg = config::load_from_file(path)?;
    let directory = Arc::new(StaticDirectory::from_config(&cfg.directory));
    let resolver = Arc::new(BackendResolver::with_builtins(directory));
    let registry = Arc::new(McsRegistry::new(Arc::new(FileConfig::new(path)), resolver));
    global::install(Arc::clone(&registry))?;

    registry.init()?;

    let status = serde_json::to_string_pretty(&registry.status())
        .map_err(|e| McsError::Internal(format!("status encode failed: {e}")))?;
    println!("{status}");

    let code = match args.get(1..) {
        Some([cmd, uid, label]) if cmd == "check" => {
            let uid: u32 = uid
                .parse()
                .map_err(|_| McsError::Config(format!("invalid uid: {uid}")))?;
            match registry.check_label(uid, Some(label)) {
                Ok(()) => {
                    tracing::info!(uid, %label, "label allowed");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    tracing::warn!(uid, %label, error = %e, "label denied");
                    ExitCode::from(2)
                }
            }
        }
        Some([]) | None => ExitCode::SUCCESS,
        Some(other) => {
            return Err(McsError::Config(format!(
                "unexpected arguments: {}",
                other.join(" ")
            )))
        }
    };

    registry.fini();
    Ok(code)
}
