// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by all point-set operations.

use thiserror::Error;

/// An argument failed validation.
///
/// This is the only error kind in the crate. It is raised before any
/// mutation takes place, so a failed call leaves the set unchanged.
/// Duplicate inserts, empty-tree nearest queries, and empty range results
/// are normal outcomes, not errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid argument: {0}")]
pub struct InvalidArgument(pub(crate) &'static str);

impl InvalidArgument {
    /// Why the argument was rejected.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        self.0
    }
}

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, InvalidArgument>;
