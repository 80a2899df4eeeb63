/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


use clap::ArgMatches;
use log::{info, Level};
use merle_core::options::{ExecutionStrategy, KernelOptions};

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub strategy:       ExecutionStrategy,
    pub print_stats:    bool,
    pub override_files: bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            strategy:       ExecutionStrategy::Vectorized,
            print_stats:    false,
            override_files: false
        }
    }

    pub fn kernel_options(&self) -> KernelOptions {
        KernelOptions::from_strategy(self.strategy)
    }
}

fn flag(options: &ArgMatches, id: &str) -> bool {
    options.get_flag(id)
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if flag(options, "scalar") {
        info!("Using scalar kernels");
        cmd_options.strategy = ExecutionStrategy::Scalar;
    }
    if flag(options, "stats") {
        cmd_options.print_stats = true;
    }
    if flag(options, "yes") {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if flag(options, "debug") {
        Level::Debug
    } else if flag(options, "trace") {
        Level::Trace
    } else if flag(options, "info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(reason) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {reason}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
