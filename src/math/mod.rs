//! Strided vector types and the operations shared between them.
//!
//! `Vector` owns a dense stride-1 buffer; `VectorView` and `VectorViewMut`
//! borrow storage owned elsewhere and may carry any stride >= 1. All three
//! implement `Strided`, and the writable ones `StridedMut`, so copy and
//! arithmetic routines accept any mix of owners and views.
pub mod element;
pub mod format;
pub mod strided;
pub mod vector;
pub mod view;

pub use element::Element;
pub use format::format_exp;
pub use strided::{Iter, Strided, StridedMut};
pub use vector::Vector;
pub use view::{view_array, view_array_mut, VectorView, VectorViewMut};
