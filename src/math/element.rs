use std::fmt;

use num_traits::{NumAssign, ToPrimitive};

/// Numeric element types a strided vector can hold.
///
/// Implemented for every type that supports in-place arithmetic and can be
/// widened to `f64` for printing: all primitive integers, `f32` and `f64`.
pub trait Element: Copy + NumAssign + ToPrimitive + fmt::Debug {}

impl<T> Element for T where T: Copy + NumAssign + ToPrimitive + fmt::Debug {}
