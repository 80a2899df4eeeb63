/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Pipelines, ordered operation chains
//!
//! Operations generally do not commute, a pipeline runs them in the exact
//! order they were chained.
use std::time::Instant;

use merle_core::log::trace;

use crate::buffer::PixelBuffer;
use crate::errors::ImageErrors;
use crate::traits::OperationsTrait;

/// An ordered list of operations applied to one buffer
///
/// Operations that borrow other buffers tie the pipeline to those borrows.
///
/// # Example
/// ```no_run
/// use merle_image::buffer::PixelBuffer;
/// use merle_image::pipelines::Pipeline;
///
/// let mut buffer = PixelBuffer::from_dimensions(100, 100).unwrap();
/// let mut pipeline = Pipeline::new();
/// // pipeline.chain_operations(Box::new(...));
/// pipeline.execute(&mut buffer).unwrap();
/// ```
#[derive(Default)]
pub struct Pipeline<'a> {
    operations: Vec<Box<dyn OperationsTrait + 'a>>
}

impl<'a> Pipeline<'a> {
    /// Create a new, empty pipeline
    pub fn new() -> Pipeline<'a> {
        Pipeline { operations: vec![] }
    }

    /// Add a new operation to the end of the chain.
    ///
    /// This is used as a way to chain multiple operations in a builder
    /// pattern style
    pub fn chain_operations(&mut self, operation: Box<dyn OperationsTrait + 'a>) -> &mut Pipeline<'a> {
        self.operations.push(operation);
        self
    }

    /// Number of chained operations
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Names of the chained operations, in execution order
    pub fn names(&self) -> Vec<&'static str> {
        self.operations.iter().map(|x| x.name()).collect()
    }

    /// Run every operation on `buffer`, in order
    ///
    /// # Errors
    /// The first failing operation stops the pipeline, operations before it
    /// have already been applied.
    pub fn execute(&self, buffer: &mut PixelBuffer) -> Result<(), ImageErrors> {
        for operation in &self.operations {
            let operation_name = operation.name();

            let start = Instant::now();

            operation.execute(buffer)?;

            let stop = Instant::now();

            trace!(
                "Finished running `{operation_name}` in {} ms",
                (stop - start).as_millis()
            );
        }
        Ok(())
    }
}
