//! Fireasy command line
//!
//! | Command | Description |
//! |---------|-------------|
//! | `fireasy providers` | List linked providers, deployers and types |
//! | `fireasy check [--config PATH]` | Boot and resolve every data instance |

// Force-link fireasy-providers to ensure linkme registrations are included
extern crate fireasy_providers;

use std::process::ExitCode;

use clap::Parser;
use fireasy::cli::{Cli, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
