// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Version | Init | Submit
//!                     |
//!           Err --> "Error: ..." on stderr, exit_status(err)
//! ```

use std::path::Path;
use std::process::ExitCode;

use odc_client::cli::{self, Command};
use odc_client::cmd::init::run_init;
use odc_client::cmd::submit::run_submit;
use odc_client::error::exit_status;
use odc_client::logging::init_logging;
use odc_client::net::SftpTransport;
use odc_client::tools::ToolContext;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let _log_guard = match init_logging(&cli.global.to_log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(cli).await
}

async fn dispatch_command(cli: cli::Cli) -> ExitCode {
    let work_dir = Path::new(".");
    let ctx = ToolContext::new(cli.global.dry);

    let result = match cli.command {
        Command::Version => {
            handle_version_command();
            Ok(())
        }
        Command::Init(args) => args
            .into_options(work_dir)
            .and_then(|options| run_init(&options))
            .map(|_| ()),
        Command::Submit(args) => {
            let options = args.into_options(work_dir);
            run_submit(&options, &ctx, &SftpTransport::new())
                .await
                .map(|report| {
                    tracing::debug!(uploads = report.uploads.len(), "submission finished");
                })
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_status(&e))
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}
