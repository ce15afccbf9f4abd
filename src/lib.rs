/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is dual-licensed under either the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree or the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree. You may select, at your option, one of the
 * above-listed licenses.
 */

#![deny(warnings, missing_docs, clippy::all, rustdoc::broken_intra_doc_links)]

//! Flattening of nested instances of container types.
//!
//! [`flats`] takes a collection whose elements may themselves be containers,
//! nested to arbitrary depth and with no requirement that siblings share a
//! kind, and lazily produces the flat sequence of values visited by a
//! depth-first, left-to-right traversal. A configurable depth limit bounds
//! how many levels of nesting are unwrapped; whatever remains at the cutoff
//! passes through unchanged.
//!
//! Values are modeled by the heterogeneous [`Value`] enum. Classification as
//! container or leaf is behavioral: ordered sequences, unordered sets, text
//! (element-wise as characters), byte sequences, and arithmetic ranges are
//! all containers, and user-defined types opt in through the [`Container`]
//! or [`Indexed`] traits.
//!
//! ```
//! use flats::Value;
//! use flats::flats;
//!
//! let nested = vec![Value::seq([1, 2, 3]), Value::seq([4, 5, 6, 7])];
//! let flat = flats(nested, 1).collect::<Result<Vec<_>, _>>().unwrap();
//! assert_eq!(flat, (1..=7).map(Value::Int).collect::<Vec<_>>());
//! ```

mod depth;
mod error;
mod flatten;
mod value;

pub use crate::depth::Depth;
pub use crate::error::FlatsError;
pub use crate::flatten::Flats;
pub use crate::flatten::flats;
pub use crate::value::Container;
pub use crate::value::Elements;
pub use crate::value::Indexed;
pub use crate::value::Value;
