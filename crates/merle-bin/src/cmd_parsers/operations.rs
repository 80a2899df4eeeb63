/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


use clap::ArgMatches;
use log::debug;
use merle_core::color::PackedColor;
use merle_core::component::Component;
use merle_core::geometry::Degrees;
use merle_image::pipelines::Pipeline;
use merle_procs::box_blur::BoxBlur;
use merle_procs::brighten::Brightness;
use merle_procs::clear::Clear;
use merle_procs::color_matrix::Sepia;
use merle_procs::contrast::Contrast;
use merle_procs::convolve::Convolve;
use merle_procs::exposure::Exposure;
use merle_procs::gaussian_blur::GaussianBlur;
use merle_procs::grayscale::Grayscale;
use merle_procs::hue::Hue;
use merle_procs::invert::Invert;
use merle_procs::levels::RgbaLevels;
use merle_procs::opacity::Opacity;
use merle_procs::premul_alpha::PremultiplyAlpha;
use merle_procs::saturation::{Saturation, Vibrance};
use merle_procs::sobel::Sobel;
use merle_procs::swizzle::Swizzle;
use merle_procs::threshold::LuminanceThreshold;

const SHARPEN: [f32; 9] = [0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0];

fn one<T: Copy + Send + Sync + 'static>(args: &ArgMatches, argument: &str) -> Result<T, String> {
    args.get_one::<T>(argument)
        .copied()
        .ok_or_else(|| format!("Missing value for {argument}"))
}

fn many<T: Copy + Send + Sync + 'static>(
    args: &ArgMatches, argument: &str
) -> Result<Vec<T>, String> {
    args.get_many::<T>(argument)
        .map(|values| values.copied().collect())
        .ok_or_else(|| format!("Missing values for {argument}"))
}

fn parse_swizzle(order: &str) -> Result<[Component; 4], String> {
    let mut sources = Component::ALL;

    if order.len() != 4 {
        return Err(format!(
            "Swizzle order {order:?} should name exactly four channels"
        ));
    }
    for (source, name) in sources.iter_mut().zip(order.chars()) {
        *source = match name.to_ascii_lowercase() {
            'r' => Component::Red,
            'g' => Component::Green,
            'b' => Component::Blue,
            'a' => Component::Alpha,
            _ => return Err(format!("Unknown channel {name:?} in swizzle order {order:?}"))
        };
    }
    Ok(sources)
}

/// Smallest odd side whose square is the number of weights
fn kernel_side(length: usize) -> Result<usize, String> {
    (1..=length)
        .step_by(2)
        .find(|side| side * side >= length)
        .filter(|side| side * side == length)
        .ok_or_else(|| format!("{length} weights do not make an odd square kernel"))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_options(
    workflow: &mut Pipeline, argument: &str, args: &ArgMatches
) -> Result<(), String> {
    match argument {
        "invert" => {
            workflow.chain_operations(Box::new(Invert::new()));
        }
        "grayscale" => {
            workflow.chain_operations(Box::new(Grayscale::new()));
        }
        "sepia" => {
            workflow.chain_operations(Box::new(Sepia::new()));
        }
        "premultiply" => {
            workflow.chain_operations(Box::new(PremultiplyAlpha::new()));
        }
        "exposure" => {
            workflow.chain_operations(Box::new(Exposure::new(one(args, argument)?)));
        }
        "brightness" => {
            workflow.chain_operations(Box::new(Brightness::new(one(args, argument)?)));
        }
        "contrast" => {
            workflow.chain_operations(Box::new(Contrast::new(one(args, argument)?)));
        }
        "opacity" => {
            workflow.chain_operations(Box::new(Opacity::new(one(args, argument)?)));
        }
        "saturation" => {
            workflow.chain_operations(Box::new(Saturation::new(one(args, argument)?)));
        }
        "vibrance" => {
            workflow.chain_operations(Box::new(Vibrance::new(one(args, argument)?)));
        }
        "hue" => {
            let degrees = Degrees(one(args, argument)?);
            workflow.chain_operations(Box::new(Hue::new(degrees)));
        }
        "threshold" => {
            workflow.chain_operations(Box::new(LuminanceThreshold::new(one(args, argument)?)));
        }
        "levels" => {
            let levels = many::<f32>(args, argument)?;
            let [r, g, b, a] = levels[..] else {
                return Err(format!("Expected four levels, found {}", levels.len()));
            };
            workflow.chain_operations(Box::new(RgbaLevels::new(r, g, b, a)));
        }
        "clear" => {
            let color = many::<u8>(args, argument)?;
            let [r, g, b, a] = color[..] else {
                return Err(format!("Expected four color values, found {}", color.len()));
            };
            workflow.chain_operations(Box::new(Clear::new(PackedColor::new(r, g, b, a))));
        }
        "swizzle" => {
            let order = args
                .get_one::<String>(argument)
                .ok_or_else(|| "Missing swizzle order".to_string())?;
            workflow.chain_operations(Box::new(Swizzle::new(parse_swizzle(order)?)));
        }
        "box-blur" => {
            workflow.chain_operations(Box::new(BoxBlur::new(one(args, argument)?)));
        }
        "gaussian-blur" => {
            let values = many::<f32>(args, argument)?;
            let [radius, sigma] = values[..] else {
                return Err(format!("Expected a radius and a sigma, found {values:?}"));
            };
            if radius.is_nan() || radius < 0.0 {
                return Err(format!("Invalid blur radius {radius}"));
            }
            workflow.chain_operations(Box::new(GaussianBlur::new(radius as usize, sigma)));
        }
        "sharpen" => {
            workflow.chain_operations(Box::new(Convolve::new(SHARPEN.to_vec(), 3)));
        }
        "convolve" => {
            let weights = many::<f32>(args, argument)?;
            let side = kernel_side(weights.len())?;
            workflow.chain_operations(Box::new(Convolve::new(weights, side)));
        }
        "sobel" => {
            for component in Component::COLOR {
                workflow.chain_operations(Box::new(Sobel::new(component, component)));
            }
        }
        _ => return Ok(())
    }
    debug!("Added {argument} operation");

    Ok(())
}
