/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the merle crates
//!
//! This crate provides the small set of types every other
//! crate in the workspace speaks in
//!
//! It currently contains
//!
//! - Channel addressing ([`Component`](component::Component)) and channel masks
//! - The packed, interleaved boundary color ([`PackedColor`](color::PackedColor))
//! - Integer geometry and angle wrappers
//! - Kernel options, which select between the scalar and vectorized strategies
//! - The byte/unit conversion helpers all kernels round through
//! - A logging shim that forwards to the `log` crate when enabled
//!
//! # Features
//!  - `std`: Enables runtime cpu feature detection, without it we rely on
//!     compile time target features.
//!
//!  - `log`: Forward the logging macros to the `log` crate
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]

pub mod color;
pub mod component;
pub mod geometry;
pub mod log;
pub mod options;
pub mod serde;
pub mod utils;
