use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

mod app;
mod audio;
mod binding;
mod config;
mod error;
mod library;
mod logging;
mod mpris;
mod player;
mod runtime;
mod ui;

fn main() -> ExitCode {
    let mut print_config = false;
    let mut paths: Vec<PathBuf> = Vec::new();
    for arg in env::args_os().skip(1) {
        if arg == "--print-config" {
            print_config = true;
        } else {
            paths.push(PathBuf::from(arg));
        }
    }

    let result = if print_config {
        runtime::print_config()
    } else {
        runtime::run(&paths)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("playdeck: {e}");
            ExitCode::FAILURE
        }
    }
}
