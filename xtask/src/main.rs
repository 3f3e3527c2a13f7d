//! Workspace maintenance commands (`cargo xtask`).
//!
//! The `xtask` binary owns the theme asset build and the theme conformance
//! gate so the repository can expose stable entrypoints through Cargo
//! aliases instead of ad hoc scripts.

mod conformance;
mod error;
mod themes;

use error::XtaskError;
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let root = workspace_root();
    let mut args = env::args().skip(1);

    let Some(cmd) = args.next() else {
        print_usage();
        return ExitCode::from(2);
    };

    let result = match cmd.as_str() {
        "build-themes" => themes::build_themes(&root),
        "check-themes" => conformance::check_themes(&root),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(XtaskError::validation(format!(
            "unknown xtask command: {other}"
        ))),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("xtask lives under workspace root")
        .to_path_buf()
}

fn print_usage() {
    eprintln!(
        "Usage: cargo xtask <command>\n\
         \n\
         Commands:\n\
           build-themes    Assemble themes/dist from the token source layers\n\
           check-themes    Validate theme layers against themes/theme-contract.toml\n"
    );
}
