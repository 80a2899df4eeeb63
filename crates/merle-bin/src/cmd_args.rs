/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("merle")
        .about("Run planar pixel kernels over an image, in the order they are given")
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read data from")
            .long("input")
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the data to"))
        .arg(Arg::new("yes")
            .short('y')
            .long("yes")
            .action(ArgAction::SetTrue)
            .help("Overwrite the output file if it exists"))
        .arg(Arg::new("scalar")
            .long("scalar")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Run the portable scalar kernels instead of the vectorized ones")
            .long_help("Both strategies produce identical bytes, this exists for testing and benchmarking"))
        .arg(Arg::new("stats")
            .long("stats")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Print statistics of the processed image as json"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the processing options"))
        .args(add_operations())
        .args(add_filters())
}

#[rustfmt::skip]
fn add_operations() -> [Arg; 15] {
    [
        Arg::new("invert")
            .long("invert")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Invert red, green and blue"),
        Arg::new("grayscale")
            .long("grayscale")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Replace red, green and blue with their average"),
        Arg::new("sepia")
            .long("sepia")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Apply a sepia tone"),
        Arg::new("premultiply")
            .long("premultiply")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Multiply color channels by alpha"),
        Arg::new("exposure")
            .long("exposure")
            .help_heading("OPERATIONS")
            .help("Adjust exposure by the given number of stops")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f32)),
        Arg::new("brightness")
            .long("brightness")
            .help_heading("OPERATIONS")
            .help("Adjust brightness, 1.0 leaves the image unchanged")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f32)),
        Arg::new("contrast")
            .long("contrast")
            .help_heading("OPERATIONS")
            .help("Scale contrast around mid gray, 1.0 leaves the image unchanged")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f32)),
        Arg::new("opacity")
            .long("opacity")
            .help_heading("OPERATIONS")
            .help("Scale alpha by the given factor")
            .value_parser(value_parser!(f32)),
        Arg::new("saturation")
            .long("saturation")
            .help_heading("OPERATIONS")
            .help("Adjust saturation, -1.0 is fully gray, 0.0 leaves the image unchanged")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f32)),
        Arg::new("vibrance")
            .long("vibrance")
            .help_heading("OPERATIONS")
            .help("Adjust vibrance")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f32)),
        Arg::new("hue")
            .long("hue")
            .help_heading("OPERATIONS")
            .help("Rotate hue by the given angle in degrees")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f32)),
        Arg::new("threshold")
            .long("threshold")
            .help_heading("OPERATIONS")
            .help("Set pixels with a luma at least this value to white, others to black")
            .value_parser(value_parser!(f32)),
        Arg::new("levels")
            .long("levels")
            .help_heading("OPERATIONS")
            .help("Scale red, green, blue and alpha by four factors")
            .num_args(4)
            .value_names(["R", "G", "B", "A"])
            .value_parser(value_parser!(f32)),
        Arg::new("clear")
            .long("clear")
            .help_heading("OPERATIONS")
            .help("Fill the image with a color")
            .num_args(4)
            .value_names(["R", "G", "B", "A"])
            .value_parser(value_parser!(u8)),
        Arg::new("swizzle")
            .long("swizzle")
            .help_heading("OPERATIONS")
            .help("Rearrange channels, e.g bgra swaps red and blue")
            .value_name("ORDER")
    ]
}

#[rustfmt::skip]
fn add_filters() -> [Arg; 5] {
    [
        Arg::new("box-blur")
            .long("box-blur")
            .help_heading("FILTERS")
            .help("Average every pixel with its neighbours within the radius")
            .value_name("RADIUS")
            .value_parser(value_parser!(usize)),
        Arg::new("gaussian-blur")
            .long("gaussian-blur")
            .help_heading("FILTERS")
            .help("Gaussian blur with a radius and a sigma")
            .num_args(2)
            .value_names(["RADIUS", "SIGMA"])
            .value_parser(value_parser!(f32)),
        Arg::new("sharpen")
            .long("sharpen")
            .action(ArgAction::SetTrue)
            .help_heading("FILTERS")
            .help("Sharpen with a 3x3 laplacian kernel"),
        Arg::new("convolve")
            .long("convolve")
            .help_heading("FILTERS")
            .help("Convolve with a square kernel, weights in row major order")
            .long_help("Convolve every channel with a square kernel, the number of weights must be an odd square (1, 9, 25 ...)")
            .num_args(1..)
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f32)),
        Arg::new("sobel")
            .long("sobel")
            .action(ArgAction::SetTrue)
            .help_heading("FILTERS")
            .help("Replace red, green and blue with their gradient magnitude")
    ]
}
