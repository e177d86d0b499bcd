// SPDX-FileCopyrightText: 2025 2025 Contributors to the OPAL Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Initialises an OPAL engine and logs every message it produces.
//!
//! ```text
//! cargo run --example message_loop -- --prefix pc --prefix sip --idle-limit 10
//! ```

mod common;

use std::time::Duration;

use clap::Parser;
use opal::{Error, FunctionName, Prefix};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(version, about = "Poll an OPAL engine for messages")]
struct Opts {
    #[command(flatten)]
    engine: common::EngineArgs,

    /// Milliseconds to wait for each message.
    #[arg(long, default_value_t = 1000)]
    timeout_ms: u64,

    /// Stop after this many consecutive polls without a message (0 = never).
    #[arg(long, default_value_t = 0)]
    idle_limit: u32,

    /// Print the constant table and exit.
    #[arg(long)]
    list_constants: bool,
}

fn main() -> Result<(), Error> {
    common::setup_logging();
    let opts = Opts::parse();

    if opts.list_constants {
        println!("API version: {}", opal::API_VERSION);
        for function in FunctionName::VARIANTS {
            println!("function: {function}");
        }
        for prefix in Prefix::iter() {
            println!("prefix: {prefix:?} = {prefix}");
        }
        println!("all prefixes: {}", Prefix::all_str());
        return Ok(());
    }

    let instance = opts.engine.initialise()?;
    info!("OPAL engine running, API version {}", instance.version());

    let timeout = Duration::from_millis(opts.timeout_ms);
    let mut idle = 0;
    loop {
        match instance.get_message(timeout) {
            Ok(message) => {
                idle = 0;
                info!("Message {:?}", message);
            }
            Err(Error::NoMessage) => {
                idle += 1;
                if opts.idle_limit != 0 && idle >= opts.idle_limit {
                    info!("No message after {} polls, stopping", idle);
                    break;
                }
            }
            Err(err) => {
                warn!("Polling failed: {}", err);
                break;
            }
        }
    }

    instance.shutdown()
}
