/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is dual-licensed under either the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree or the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree. You may select, at your option, one of the
 * above-listed licenses.
 */

use crate::error::FlatsError;

/// Bound on how many levels of container nesting a traversal descends before
/// elements are yielded as-is, container or not.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Depth {
    /// Unwrap at most this many levels. `Finite(0)` yields the root's
    /// immediate elements unmodified.
    Finite(u64),
    /// Unwrap every level until a non-container value is reached.
    Infinite,
}

impl Depth {
    /// Budget that applies to the elements of a container entered with this
    /// budget.
    pub(crate) fn child(self) -> Depth {
        match self {
            Depth::Finite(n) => Depth::Finite(n.saturating_sub(1)),
            Depth::Infinite => Depth::Infinite,
        }
    }
}

impl Default for Depth {
    /// One level of unwrapping, which is sufficient to flatten a list of
    /// lists into a list.
    fn default() -> Self {
        Depth::Finite(1)
    }
}

macro_rules! depth_from_unsigned {
    ( $( $t:ty ),* ) => {
        $(
            impl From<$t> for Depth {
                fn from(value: $t) -> Self {
                    Depth::Finite(value.into())
                }
            }
        )*
    };
}

depth_from_unsigned!(u8, u16, u32);

impl From<u64> for Depth {
    fn from(value: u64) -> Self {
        Depth::Finite(value)
    }
}

impl From<usize> for Depth {
    fn from(value: usize) -> Self {
        Depth::Finite(value as u64)
    }
}

macro_rules! depth_try_from_signed {
    ( $( $t:ty ),* ) => {
        $(
            impl TryFrom<$t> for Depth {
                type Error = FlatsError;

                fn try_from(value: $t) -> Result<Self, FlatsError> {
                    if value < 0 {
                        Err(FlatsError::DepthValue)
                    } else {
                        Ok(Depth::Finite(value as u64))
                    }
                }
            }
        )*
    };
}

depth_try_from_signed!(i8, i16, i32, i64, isize);

macro_rules! depth_try_from_float {
    ( $( $t:ty ),* ) => {
        $(
            impl TryFrom<$t> for Depth {
                type Error = FlatsError;

                // Only positive infinity names a valid depth. A finite float
                // is the wrong type even when integral, so it gets the type
                // error rather than the value error, negative or not.
                fn try_from(value: $t) -> Result<Self, FlatsError> {
                    if value == <$t>::INFINITY {
                        Ok(Depth::Infinite)
                    } else {
                        Err(FlatsError::DepthType)
                    }
                }
            }
        )*
    };
}

depth_try_from_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_level() {
        assert_eq!(Depth::default(), Depth::Finite(1));
    }

    #[test]
    fn from_unsigned() {
        assert_eq!(Depth::from(0u8), Depth::Finite(0));
        assert_eq!(Depth::from(3u32), Depth::Finite(3));
        assert_eq!(Depth::from(7usize), Depth::Finite(7));
    }

    #[test]
    fn try_from_signed() {
        assert_eq!(Depth::try_from(0i64), Ok(Depth::Finite(0)));
        assert_eq!(Depth::try_from(2i32), Ok(Depth::Finite(2)));
        assert_eq!(Depth::try_from(-1i64), Err(FlatsError::DepthValue));
        assert_eq!(Depth::try_from(i8::MIN), Err(FlatsError::DepthValue));
    }

    #[test]
    fn try_from_float() {
        assert_eq!(Depth::try_from(f64::INFINITY), Ok(Depth::Infinite));
        assert_eq!(Depth::try_from(f32::INFINITY), Ok(Depth::Infinite));
        assert_eq!(Depth::try_from(2.5f64), Err(FlatsError::DepthType));
        assert_eq!(Depth::try_from(2.0f64), Err(FlatsError::DepthType));
        assert_eq!(Depth::try_from(-2.5f64), Err(FlatsError::DepthType));
        assert_eq!(Depth::try_from(f64::NAN), Err(FlatsError::DepthType));
        assert_eq!(Depth::try_from(f64::NEG_INFINITY), Err(FlatsError::DepthType));
    }

    #[test]
    fn child_budget() {
        assert_eq!(Depth::Finite(2).child(), Depth::Finite(1));
        assert_eq!(Depth::Finite(1).child(), Depth::Finite(0));
        assert_eq!(Depth::Infinite.child(), Depth::Infinite);
    }
}
