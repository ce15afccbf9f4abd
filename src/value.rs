/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is dual-licensed under either the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree or the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree. You may select, at your option, one of the
 * above-listed licenses.
 */

//! See the [Value] documentation.

use std::fmt;
use std::ops::Range;
use std::vec;

use quickcheck::Arbitrary;
use quickcheck::Gen;

/// A value in a nested structure: either an opaque leaf or a container of
/// further values.
///
/// Classification is a capability, not a surface property. Text iterates as
/// its characters and byte sequences iterate as integers, so both are
/// containers rather than atomic leaves, and user-defined types become
/// containers by implementing [Container] (ordered iteration) or [Indexed]
/// (positional lookup).
#[derive(Debug)]
pub enum Value {
    /// Integer leaf. Also produced element-wise by [Value::Bytes] and
    /// [Value::Range] containers.
    Int(i64),
    /// Double-precision floating-point leaf.
    Double(f64),
    /// Boolean leaf.
    Bool(bool),
    /// Single-character leaf, as produced by flattening text.
    Char(char),
    /// Ordered sequence of nested values.
    Seq(Vec<Value>),
    /// Unordered collection of nested values. Iteration follows stored
    /// order, but consumers may rely on content only.
    Set(Vec<Value>),
    /// Text, treated as a container of its characters.
    Text(String),
    /// Byte sequence, treated as a container of integer leaves.
    Bytes(Vec<u8>),
    /// Arithmetic range, treated as a container of integer leaves.
    Range(Range<i64>),
    /// User-defined container.
    Custom(Box<dyn Container>),
}

/// Capability that makes a user-defined type a container: ordered iteration
/// over its immediate elements.
///
/// Types that can only answer positional lookups should implement [Indexed]
/// instead and pick this trait up through the blanket impl.
pub trait Container: fmt::Debug {
    /// Consumes the container, lazily producing its immediate elements from
    /// left to right. The sequence may be unbounded.
    fn into_elements(self: Box<Self>) -> Box<dyn Iterator<Item = Value>>;

    /// Clones the container behind a trait object.
    fn clone_box(&self) -> Box<dyn Container>;
}

/// Positional-access fallback for types without a native iteration
/// capability: supporting lookup at position 0 is all it takes to be treated
/// as a container.
///
/// Elements are `get(0), get(1), ...` up to the first `None`, so the
/// produced sequence may be unbounded.
pub trait Indexed {
    /// Returns the element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<Value>;
}

impl<T> Container for T
where
    T: Indexed + Clone + fmt::Debug + 'static,
{
    fn into_elements(self: Box<Self>) -> Box<dyn Iterator<Item = Value>> {
        Box::new((0..).map_while(move |index| self.get(index)))
    }

    fn clone_box(&self) -> Box<dyn Container> {
        Box::new(self.clone())
    }
}

impl Value {
    /// Builds an ordered sequence out of anything convertible to values.
    pub fn seq<I>(items: I) -> Value
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Builds an unordered collection out of anything convertible to values.
    pub fn set<I>(items: I) -> Value
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Set(items.into_iter().map(Into::into).collect())
    }

    /// Wraps a user-defined container.
    pub fn custom<C: Container + 'static>(container: C) -> Value {
        Value::Custom(Box::new(container))
    }

    /// The classification predicate: whether this value holds an ordered
    /// sequence of further elements.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Value::Seq(_)
                | Value::Set(_)
                | Value::Text(_)
                | Value::Bytes(_)
                | Value::Range(_)
                | Value::Custom(_)
        )
    }

    /// Consumes a container value, returning an iterator over its immediate
    /// elements. Leaf values are handed back unchanged.
    pub fn into_elements(self) -> Result<Elements, Value> {
        match self {
            Value::Seq(items) | Value::Set(items) => Ok(Elements(Inner::Seq(items.into_iter()))),
            Value::Text(text) => Ok(Elements(Inner::Text { buf: text, pos: 0 })),
            Value::Bytes(bytes) => Ok(Elements(Inner::Bytes(bytes.into_iter()))),
            Value::Range(range) => Ok(Elements(Inner::Range(range))),
            Value::Custom(container) => Ok(Elements(Inner::Custom(container.into_elements()))),
            leaf => Err(leaf),
        }
    }
}

/// Iterator over a container's immediate elements, as produced by
/// [Value::into_elements].
pub struct Elements(Inner);

enum Inner {
    Seq(vec::IntoIter<Value>),
    Text { buf: String, pos: usize },
    Bytes(vec::IntoIter<u8>),
    Range(Range<i64>),
    Custom(Box<dyn Iterator<Item = Value>>),
}

impl Iterator for Elements {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        match &mut self.0 {
            Inner::Seq(iter) => iter.next(),
            Inner::Text { buf, pos } => {
                let ch = buf[*pos..].chars().next()?;
                *pos += ch.len_utf8();
                Some(Value::Char(ch))
            }
            Inner::Bytes(iter) => iter.next().map(|byte| Value::Int(byte.into())),
            Inner::Range(range) => range.next().map(Value::Int),
            Inner::Custom(iter) => iter.next(),
        }
    }
}

impl fmt::Debug for Elements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad("Elements(..)")
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Int(n) => Value::Int(*n),
            Value::Double(d) => Value::Double(*d),
            Value::Bool(b) => Value::Bool(*b),
            Value::Char(c) => Value::Char(*c),
            Value::Seq(items) => Value::Seq(items.clone()),
            Value::Set(items) => Value::Set(items.clone()),
            Value::Text(text) => Value::Text(text.clone()),
            Value::Bytes(bytes) => Value::Bytes(bytes.clone()),
            Value::Range(range) => Value::Range(range.clone()),
            Value::Custom(container) => Value::Custom(container.clone_box()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Range(a), Value::Range(b)) => a == b,
            // Custom containers have no identity beyond their elements.
            (Value::Custom(a), Value::Custom(b)) => a
                .clone_box()
                .into_elements()
                .eq(b.clone_box().into_elements()),
            _ => false,
        }
    }
}

macro_rules! from_int_types {
    ( $( $t:ty ),* ) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Int(value as i64)
                }
            }
        )*
    };
}

from_int_types!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Double(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<'a> From<&'a str> for Value {
    fn from(value: &'a str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Seq(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<Range<i64>> for Value {
    fn from(value: Range<i64>) -> Self {
        Value::Range(value)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Seq(iter.into_iter().map(Into::into).collect())
    }
}

impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        arbitrary_nested(g, 3)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Value>> {
        match self {
            Value::Int(n) => Box::new(n.shrink().map(Value::Int)),
            Value::Double(d) => Box::new(d.shrink().map(Value::Double)),
            Value::Bool(b) => Box::new(b.shrink().map(Value::Bool)),
            Value::Char(c) => Box::new(c.shrink().map(Value::Char)),
            Value::Seq(items) => Box::new(items.shrink().map(Value::Seq)),
            Value::Set(items) => Box::new(items.shrink().map(Value::Set)),
            Value::Text(text) => Box::new(text.shrink().map(Value::Text)),
            Value::Bytes(bytes) => Box::new(bytes.shrink().map(Value::Bytes)),
            Value::Range(_) | Value::Custom(_) => quickcheck::empty_shrinker(),
        }
    }
}

fn arbitrary_nested(g: &mut Gen, depth: usize) -> Value {
    let kinds: &[&str] = if depth == 0 {
        &["int", "double", "bool", "char"]
    } else {
        &[
            "int", "double", "bool", "char", "seq", "set", "text", "bytes", "range",
        ]
    };
    match *g.choose(kinds).unwrap() {
        "int" => Value::Int(i64::arbitrary(g)),
        "double" => {
            // NaN would break the structural equality the properties rely on.
            let d = f64::arbitrary(g);
            Value::Double(if d.is_nan() { 0.0 } else { d })
        }
        "bool" => Value::Bool(bool::arbitrary(g)),
        "char" => Value::Char(char::arbitrary(g)),
        "seq" => Value::Seq(arbitrary_elements(g, depth - 1)),
        "set" => Value::Set(arbitrary_elements(g, depth - 1)),
        "text" => Value::Text(String::arbitrary(g)),
        "bytes" => Value::Bytes(Vec::arbitrary(g)),
        "range" => {
            let start = i64::arbitrary(g) % 64;
            let len = u8::arbitrary(g) % 8;
            Value::Range(start..start + i64::from(len))
        }
        _ => unreachable!(),
    }
}

fn arbitrary_elements(g: &mut Gen, depth: usize) -> Vec<Value> {
    let len = usize::arbitrary(g) % 4;
    (0..len).map(|_| arbitrary_nested(g, depth)).collect()
}
