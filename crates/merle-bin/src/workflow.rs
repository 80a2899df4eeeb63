/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


use std::ffi::OsStr;
use std::path::Path;

use clap::ArgMatches;
use log::{debug, info, warn};
use merle_image::errors::ImageErrors;
use merle_image::pipelines::Pipeline;

use crate::cmd_parsers::fill_args;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::cmd_parsers::operations::parse_options;
use crate::file_io::{read_buffer, write_buffer};
use crate::serde::Statistics;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), ImageErrors> {
    info!("Creating workflows from input");

    let in_file = args
        .get_raw("in")
        .and_then(|mut values| values.next())
        .ok_or(ImageErrors::GenericStr("No input file given"))?;
    let out_file = args.get_raw("out").and_then(|mut values| values.next());

    if let Some(out_file) = out_file {
        verify_file_paths(in_file, out_file, cmd_opts)?;
    }

    let mut buffer = read_buffer(in_file, cmd_opts.kernel_options())?;

    let mut workflow = Pipeline::new();
    add_operations(args, &mut workflow)?;

    debug!("Running {:?}", workflow.names());
    workflow.execute(&mut buffer)?;

    if cmd_opts.print_stats {
        let statistics = Statistics::new(in_file.to_os_string(), &buffer);
        let json = serde_json::to_string_pretty(&statistics)
            .map_err(|e| ImageErrors::GenericString(e.to_string()))?;
        println!("{json}");
    }

    match out_file {
        Some(out_file) => write_buffer(out_file, &buffer)?,
        None => warn!("No output file given, result discarded")
    }
    Ok(())
}

fn add_operations(args: &ArgMatches, workflow: &mut Pipeline) -> Result<(), ImageErrors> {
    for argument in fill_args(args) {
        parse_options(workflow, &argument, args).map_err(ImageErrors::GenericString)?;
    }
    Ok(())
}

fn verify_file_paths(input: &OsStr, output: &OsStr, cmd_opts: &CmdOptions) -> Result<(), ImageErrors> {
    if input == output {
        return Err(ImageErrors::GenericString(format!(
            "Cannot use {input:?} as both input and output"
        )));
    }
    if Path::new(output).exists() && !cmd_opts.override_files {
        return Err(ImageErrors::GenericString(format!(
            "Output {output:?} exists, pass --yes to overwrite it"
        )));
    }
    Ok(())
}
