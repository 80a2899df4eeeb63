/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use merle_core::color::PackedColor;
use merle_core::options::KernelOptions;
use merle_image::buffer::PixelBuffer;

use crate::{sample_path, TestEntry};

fn run_scenarios(options: KernelOptions) {
    let file = sample_path().join("scenarios.json");

    let json_file = read(file).unwrap();

    let entries: Vec<TestEntry> = serde_json::from_slice(&json_file).unwrap();

    let mut error = false;
    let mut failed = Vec::new();

    for entry in &entries {
        let mut buffer =
            PixelBuffer::from_color(entry.width, entry.height, PackedColor::from_array(entry.fill))
                .unwrap();
        buffer.set_options(options);

        entry.pipeline().execute(&mut buffer).unwrap();

        for probe in &entry.probes {
            let found = buffer.get_pixel(probe.x, probe.y);
            let expected = Some(PackedColor::from_array(probe.color));

            if found != expected {
                error = true;
                failed.push(entry.name.clone());
                // report error
                eprintln!(
                    "Pixel mismatch for scenario {:?} at ({},{})\nExpected {:?} but found {:?}\nConfig:{:#?}\n",
                    entry.name, probe.x, probe.y, expected, found, entry
                );
            }
        }
    }
    if error {
        panic!("Errors found while running scenarios\n {failed:#?}");
    }
}

#[test]
fn scenarios_scalar() {
    run_scenarios(KernelOptions::new_scalar());
}

#[test]
fn scenarios_fast() {
    run_scenarios(KernelOptions::new_fast());
}
