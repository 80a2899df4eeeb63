/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use merle_core::color::PackedColor;
use merle_core::component::Component;
use merle_image::buffer::PixelBuffer;
use merle_image::pipelines::Pipeline;
use merle_image::traits::OperationsTrait;
use merle_procs::brighten::Brightness;
use merle_procs::clear::Clear;
use merle_procs::color_matrix::Sepia;
use merle_procs::contrast::Contrast;
use merle_procs::duplicate_channel::DuplicateChannel;
use merle_procs::exposure::Exposure;
use merle_procs::gaussian_blur::GaussianBlur;
use merle_procs::grayscale::Grayscale;
use merle_procs::invert::Invert;
use merle_procs::levels::RgbaLevels;
use merle_procs::opacity::Opacity;
use merle_procs::premul_alpha::PremultiplyAlpha;
use merle_procs::saturation::Saturation;
use merle_procs::swizzle::Swizzle;
use merle_procs::threshold::LuminanceThreshold;
use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_128;

mod parity;
mod scenarios;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonComponent {
    R,
    G,
    B,
    A
}

impl JsonComponent {
    pub fn to_component(self) -> Component {
        match self {
            Self::R => Component::Red,
            Self::G => Component::Green,
            Self::B => Component::Blue,
            Self::A => Component::Alpha
        }
    }
}

/// One step of a scenario, as written in the json file
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum JsonOperation {
    Invert,
    Grayscale,
    Sepia,
    PremultiplyAlpha,
    Exposure { value: f32 },
    Brightness { value: f32 },
    Contrast { value: f32 },
    Opacity { value: f32 },
    Saturation { value: f32 },
    Threshold { value: f32 },
    Levels { value: [f32; 4] },
    Clear { color: [u8; 4] },
    Swizzle { sources: [JsonComponent; 4] },
    Duplicate { source: JsonComponent, destination: JsonComponent },
    GaussianBlur { radius: usize, sigma: f32 }
}

impl JsonOperation {
    pub fn to_operation(&self) -> Box<dyn OperationsTrait> {
        match self {
            Self::Invert => Box::new(Invert::new()),
            Self::Grayscale => Box::new(Grayscale::new()),
            Self::Sepia => Box::new(Sepia::new()),
            Self::PremultiplyAlpha => Box::new(PremultiplyAlpha::new()),
            Self::Exposure { value } => Box::new(Exposure::new(*value)),
            Self::Brightness { value } => Box::new(Brightness::new(*value)),
            Self::Contrast { value } => Box::new(Contrast::new(*value)),
            Self::Opacity { value } => Box::new(Opacity::new(*value)),
            Self::Saturation { value } => Box::new(Saturation::new(*value)),
            Self::Threshold { value } => Box::new(LuminanceThreshold::new(*value)),
            Self::Levels { value: [r, g, b, a] } => Box::new(RgbaLevels::new(*r, *g, *b, *a)),
            Self::Clear { color } => Box::new(Clear::new(PackedColor::from_array(*color))),
            Self::Swizzle { sources } => Box::new(Swizzle::new(sources.map(JsonComponent::to_component))),
            Self::Duplicate {
                source,
                destination
            } => Box::new(DuplicateChannel::new(
                source.to_component(),
                destination.to_component()
            )),
            Self::GaussianBlur { radius, sigma } => Box::new(GaussianBlur::new(*radius, *sigma))
        }
    }
}

/// A pixel the scenario expects after all operations ran
#[derive(Clone, Debug, Deserialize)]
pub struct Probe {
    pub x:     usize,
    pub y:     usize,
    pub color: [u8; 4]
}

#[derive(Clone, Debug, Deserialize)]
pub struct TestEntry {
    pub name:       String,
    pub width:      usize,
    pub height:     usize,
    pub fill:       [u8; 4],
    pub operations: Vec<JsonOperation>,
    pub probes:     Vec<Probe>,
    pub comment:    Option<String>
}

impl TestEntry {
    pub fn pipeline(&self) -> Pipeline<'static> {
        let mut pipeline = Pipeline::new();

        for operation in &self.operations {
            pipeline.chain_operations(operation.to_operation());
        }
        pipeline
    }
}

pub fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests")
}

fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}
