/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Kernel execution options
//!
//! Every kernel has a portable scalar implementation and a vectorized one,
//! both produce byte identical results. Which one runs is decided by the
//! [`KernelOptions`] attached to the buffer being written to, there is no
//! process wide state, so two buffers with different options can be
//! processed side by side.

/// Which implementation family kernels should run
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ExecutionStrategy {
    /// Portable code, no intrinsics
    Scalar,
    /// Platform specific intrinsics where the cpu supports them,
    /// falls back to scalar code otherwise
    #[default]
    Vectorized
}

fn scalar_flags() -> KernelFlags {
    KernelFlags {
        use_unsafe: false,
        use_sse2:   false,
        use_sse41:  false
    }
}

fn fast_flags() -> KernelFlags {
    KernelFlags {
        use_unsafe: true,
        use_sse2:   true,
        use_sse41:  true
    }
}

/// Boolean switches for individual instruction sets
///
/// NOTE: When you extend this, add true or false to
/// all functions above that return a `KernelFlags`
#[derive(Copy, Debug, Clone, Eq, PartialEq)]
struct KernelFlags {
    /// Whether we may use unsafe platform specific intrinsics at all
    ///
    /// Turning this off also turns off every instruction set below
    use_unsafe: bool,
    /// Whether we should use SSE2.
    use_sse2:   bool,
    /// Whether we should use sse4.1 instructions where possible.
    use_sse41:  bool
}

/// Options influencing how kernels execute
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KernelOptions {
    strategy: ExecutionStrategy,
    flags:    KernelFlags
}

impl Default for KernelOptions {
    fn default() -> Self {
        KernelOptions::new_fast()
    }
}

/// Initializers
impl KernelOptions {
    /// Options that force the portable scalar implementation of every kernel
    pub fn new_scalar() -> KernelOptions {
        KernelOptions {
            strategy: ExecutionStrategy::Scalar,
            flags:    scalar_flags()
        }
    }

    /// Options enabling every vectorized path the running cpu supports
    ///
    /// This is the default.
    pub fn new_fast() -> KernelOptions {
        KernelOptions {
            strategy: ExecutionStrategy::Vectorized,
            flags:    fast_flags()
        }
    }

    /// Options for the given strategy, with the matching flag preset
    pub fn from_strategy(strategy: ExecutionStrategy) -> KernelOptions {
        match strategy {
            ExecutionStrategy::Scalar => KernelOptions::new_scalar(),
            ExecutionStrategy::Vectorized => KernelOptions::new_fast()
        }
    }
}

impl KernelOptions {
    pub const fn get_strategy(&self) -> ExecutionStrategy {
        self.strategy
    }

    /// Change the strategy, keeping individual instruction set flags
    #[must_use]
    pub fn set_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Allow or forbid the use of unsafe intrinsics
    #[must_use]
    pub fn set_use_unsafe(mut self, yes: bool) -> Self {
        self.flags.use_unsafe = yes;
        self
    }

    #[must_use]
    pub fn set_use_sse2(mut self, yes: bool) -> Self {
        self.flags.use_sse2 = yes;
        self
    }

    #[must_use]
    pub fn set_use_sse41(mut self, yes: bool) -> Self {
        self.flags.use_sse41 = yes;
        self
    }

    /// Return true if kernels should take a vectorized path at all
    pub fn is_vectorized(&self) -> bool {
        self.strategy == ExecutionStrategy::Vectorized && self.flags.use_unsafe
    }
}

/// Intrinsics support
///
/// These routines are compiled depending
/// on the platform they are used, if compiled for a platform
/// it doesn't support,(e.g sse4.1 on Arm), it will always return `false`
impl KernelOptions {
    /// Use SSE 2 code paths where possible
    ///
    /// This checks for existence of SSE2 first and returns
    /// false if it's not present
    #[allow(unreachable_code)]
    pub fn use_sse2(&self) -> bool {
        // options says no
        if !(self.is_vectorized() && self.flags.use_sse2) {
            return false;
        }

        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        {
            // where we can do runtime check if feature is present
            #[cfg(feature = "std")]
            {
                if is_x86_feature_detected!("sse2") {
                    return true;
                }
            }
            // where we can't do runtime check if feature is present
            // check if the compile feature had it enabled
            #[cfg(all(not(feature = "std"), target_feature = "sse2"))]
            {
                return true;
            }
        }
        // everything failed return false
        false
    }

    /// Use SSE4 paths where possible
    ///
    /// This also checks for sse 4.1 support and returns false if it
    /// is not present
    #[allow(unreachable_code)]
    pub fn use_sse41(&self) -> bool {
        // options says no
        if !(self.is_vectorized() && self.flags.use_sse41) {
            return false;
        }

        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        {
            // where we can do runtime check if feature is present
            #[cfg(feature = "std")]
            {
                if is_x86_feature_detected!("sse4.1") {
                    return true;
                }
            }
            // where we can't do runtime check if feature is present
            // check if the compile feature had it enabled
            #[cfg(all(not(feature = "std"), target_feature = "sse4.1"))]
            {
                return true;
            }
        }
        // everything failed return false
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::options::{ExecutionStrategy, KernelOptions};

    #[test]
    fn scalar_never_vectorizes() {
        let options = KernelOptions::new_scalar();

        assert_eq!(options.get_strategy(), ExecutionStrategy::Scalar);
        assert!(!options.use_sse2());
        assert!(!options.use_sse41());
    }

    #[test]
    fn strategy_overrides_flags() {
        let options = KernelOptions::new_fast().set_strategy(ExecutionStrategy::Scalar);
        assert!(!options.is_vectorized());
        assert!(!options.use_sse41());
    }

    #[test]
    fn unsafe_switch_disables_everything() {
        let options = KernelOptions::new_fast().set_use_unsafe(false);
        assert!(!options.use_sse2());
        assert!(!options.use_sse41());
    }
}
