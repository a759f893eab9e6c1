use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

use crate::error::{Result, VectorError};
use crate::math::element::Element;
use crate::math::strided::{Strided, StridedMut};

/// Owning, stride-1 vector.
///
/// Storage is released exactly once: by [`Vector::release`] or on drop.
/// Views taken from it borrow the storage and cannot outlive it.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Element> Vector<T> {
    /// Allocate `n` elements with stride 1.
    ///
    /// The initial contents are unspecified; use [`Vector::calloc`] when they
    /// must be zero.
    pub fn alloc(n: usize) -> Result<Self> {
        log::trace!("allocating vector of {} elements", n);
        Self::filled(n, T::zero())
    }

    /// Allocate `n` elements, all equal to zero.
    pub fn calloc(n: usize) -> Result<Self> {
        log::trace!("allocating zeroed vector of {} elements", n);
        Self::filled(n, T::zero())
    }

    fn filled(n: usize, value: T) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(n).map_err(|source| {
            log::debug!("allocation of {} elements failed: {}", n, source);
            VectorError::Allocation { len: n, source }
        })?;
        data.resize(n, value);
        Ok(Self { data })
    }

    /// Free the storage. Releasing an empty vector is a no-op.
    pub fn release(self) {
        if !self.data.is_empty() {
            log::trace!("releasing vector of {} elements", self.data.len());
        }
        drop(self.data);
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T: Element> Strided for Vector<T> {
    type Elem = T;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn stride(&self) -> usize {
        1
    }

    fn storage(&self) -> &[T] {
        &self.data
    }
}

impl<T: Element> StridedMut for Vector<T> {
    fn storage_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.data
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}
