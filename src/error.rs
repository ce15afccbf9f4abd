/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is dual-licensed under either the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree or the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree. You may select, at your option, one of the
 * above-listed licenses.
 */

use std::convert::Infallible;

use thiserror::Error;

/// Errors that can originate from this crate.
///
/// Both kinds signal a caller contract violation in the `depth` argument of
/// [`flats`](crate::flats). They surface on the first pull of the produced
/// sequence that has an element to hand out, never at construction time, and
/// once yielded the sequence is exhausted.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum FlatsError {
    /// The depth argument is neither an integer nor positive infinity.
    /// Finite floating-point values are rejected even when integral; a depth
    /// of `2.5` is never rounded or truncated to `2`.
    #[error("depth must be an integer or infinity")]
    DepthType,

    /// The depth argument is an integer of the right type but negative.
    #[error("depth must be a non-negative integer or infinity")]
    DepthValue,
}

impl From<Infallible> for FlatsError {
    fn from(error: Infallible) -> Self {
        match error {}
    }
}
