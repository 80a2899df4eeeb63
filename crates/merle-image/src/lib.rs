/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A planar RGBA pixel buffer
//!
//! This crate provides the storage every kernel in `merle-procs` reads and
//! writes, the conversion to and from the interleaved layout used by decoders
//! and displays, error types, and the operation plumbing.
//!
//! # Features
//! - `sse41`: Compile SSE4.1 variants of the interleave/deinterleave routines
//! - `log`: Trace operations through the `log` crate
//! - `serde-support`: Serialize the small value types of `merle-core`
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]

pub extern crate merle_core;

pub mod buffer;
pub mod codec;
pub mod errors;
pub mod pipelines;
pub mod traits;
