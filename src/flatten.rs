/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is dual-licensed under either the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree or the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree. You may select, at your option, one of the
 * above-listed licenses.
 */

use std::iter::FusedIterator;

use smallvec::SmallVec;

use crate::depth::Depth;
use crate::error::FlatsError;
use crate::value::Elements;
use crate::value::Value;

/// Flattens a collection of possibly nested [Value]s into a lazy, depth-first,
/// left-to-right sequence of the values encountered during traversal.
///
/// `depth` bounds how many levels of container nesting are unwrapped before
/// elements pass through uninspected, container or not:
///
/// | depth               | effect                                              |
/// |---------------------|-----------------------------------------------------|
/// | `0`                 | no descent; the root's elements, unmodified         |
/// | `1`                 | unwrap exactly one level of nesting                 |
/// | `n > 1`             | unwrap up to `n` levels, stopping early at leaves   |
/// | `Depth::Infinite`   | unwrap every level until leaves are reached         |
///
/// Anything accepted where a [Depth] is expected works: `Depth` values,
/// integer literals, or `f64::INFINITY`. An invalid depth (a negative
/// integer, or a float other than positive infinity) is reported as an error
/// by the first pull that has an element to hand out; it is never rounded or
/// clamped. `Depth::default()` is one level, sufficient to flatten a list of
/// lists into a list.
///
/// ```
/// use flats::Depth;
/// use flats::Value;
/// use flats::flats;
///
/// let root = vec![
///     Value::seq([Value::seq([1, 2]), Value::from(3)]),
///     Value::seq([4, 5, 6, 7]),
/// ];
///
/// let flat = flats(root.clone(), 2).collect::<Result<Vec<_>, _>>().unwrap();
/// assert_eq!(flat, (1..=7).map(Value::Int).collect::<Vec<_>>());
///
/// let once = flats(root, Depth::default()).collect::<Result<Vec<_>, _>>().unwrap();
/// assert_eq!(once[0], Value::seq([1, 2]));
/// assert_eq!(once[1], Value::Int(3));
/// ```
///
/// The nested containers need not share a kind; text flattens to its
/// characters:
///
/// ```
/// use flats::Value;
/// use flats::flats;
///
/// let words = vec![Value::from("abc"), Value::from("xyz")];
/// let chars = flats(words, 1).collect::<Result<Vec<_>, _>>().unwrap();
/// assert_eq!(chars, "abcxyz".chars().map(Value::Char).collect::<Vec<_>>());
/// ```
pub fn flats<R, D>(root: R, depth: D) -> Flats<R::IntoIter>
where
    R: IntoIterator<Item = Value>,
    D: TryInto<Depth>,
    FlatsError: From<D::Error>,
{
    Flats {
        depth: depth.try_into().map_err(FlatsError::from),
        root: root.into_iter(),
        stack: SmallVec::new(),
        done: false,
    }
}

/// Iterator returned by [flats].
///
/// Single-pass and fused: once exhausted, or once an error has been yielded,
/// every further pull returns `None`. Traversal state lives in an explicit
/// frame stack rather than on the native call stack, so arbitrarily deep
/// nesting costs heap, not stack.
pub struct Flats<I> {
    depth: Result<Depth, FlatsError>,
    root: I,
    stack: SmallVec<[Frame; 8]>,
    done: bool,
}

/// An open container: its remaining elements and the unwrap budget that
/// applies to each of them.
struct Frame {
    elements: Elements,
    remaining: Depth,
}

impl<I> Iterator for Flats<I>
where
    I: Iterator<Item = Value>,
{
    type Item = Result<Value, FlatsError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            // Innermost open container first; the root level is reached only
            // once every frame above it has drained.
            let (value, budget) = match self.stack.last_mut() {
                Some(frame) => match frame.elements.next() {
                    Some(value) => (value, frame.remaining),
                    None => {
                        self.stack.pop();
                        continue;
                    }
                },
                None => match self.root.next() {
                    Some(value) => {
                        // Depth validity is checked once an element must be
                        // handled, so an invalid depth over an empty root
                        // still produces an empty sequence.
                        match &self.depth {
                            Ok(depth) => (value, *depth),
                            Err(error) => {
                                self.done = true;
                                return Some(Err(error.clone()));
                            }
                        }
                    }
                    None => {
                        self.done = true;
                        return None;
                    }
                },
            };
            if budget == Depth::Finite(0) {
                return Some(Ok(value));
            }
            match value.into_elements() {
                Ok(elements) => self.stack.push(Frame {
                    elements,
                    remaining: budget.child(),
                }),
                Err(leaf) => return Some(Ok(leaf)),
            }
        }
    }
}

impl<I> FusedIterator for Flats<I> where I: Iterator<Item = Value> {}
