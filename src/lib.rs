//! strided-vector: lightweight strided vectors over contiguous numeric memory.
//!
//! A vector is a `(size, stride, storage)` triple where logical element `i`
//! lives at physical slot `i * stride`. The same arithmetic and copy routines
//! run over owned dense buffers (`Vector`), sub-slices of a larger buffer and
//! caller-supplied arrays (`VectorView`, `VectorViewMut`).
//!
//! Ownership is carried by the type: only `Vector` owns memory and can be
//! released, while views borrow their storage and cannot outlive it.
pub mod config;
pub mod error;
pub mod math;

pub use config::PrintOptions;
pub use error::{Result, VectorError};
pub use math::{
    format_exp, view_array, view_array_mut, Element, Strided, StridedMut, Vector, VectorView,
    VectorViewMut,
};
