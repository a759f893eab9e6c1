//! Borrowed vectors over storage owned elsewhere.
//!
//! A view never owns memory and has no release operation; the borrow checker
//! ties it to the buffer it aliases. Writes through a `VectorViewMut` are
//! visible through the owner once the view is gone.
use crate::error::{Result, VectorError};
use crate::math::element::Element;
use crate::math::strided::{Strided, StridedMut};

/// Read-only strided view. Copying the descriptor does not copy the data.
#[derive(Debug, Clone, Copy)]
pub struct VectorView<'a, T> {
    storage: &'a [T],
    size: usize,
    stride: usize,
}

/// Mutable strided view.
#[derive(Debug)]
pub struct VectorViewMut<'a, T> {
    storage: &'a mut [T],
    size: usize,
    stride: usize,
}

/// Stride-1 view over the first `n` elements of `base`.
pub fn view_array<T: Element>(base: &[T], n: usize) -> VectorView<'_, T> {
    VectorView::from_parts(&base[..n], n, 1)
}

/// Mutable stride-1 view over the first `n` elements of `base`.
pub fn view_array_mut<T: Element>(base: &mut [T], n: usize) -> VectorViewMut<'_, T> {
    VectorViewMut::from_parts(&mut base[..n], n, 1)
}

/// Storage elements needed to hold `size` logical elements `stride` apart.
pub(crate) fn required_storage(size: usize, stride: usize) -> usize {
    match size {
        0 => 0,
        _ => (size - 1).saturating_mul(stride).saturating_add(1),
    }
}

fn check_layout(available: usize, size: usize, stride: usize) -> Result<()> {
    if stride == 0 {
        return Err(VectorError::ZeroStride);
    }
    let required = required_storage(size, stride);
    if required > available {
        return Err(VectorError::StorageTooShort {
            required,
            available,
        });
    }
    Ok(())
}

// An empty view may start one past the end of its parent.
pub(crate) fn offset_storage<T>(storage: &[T], offset: usize, stride: usize) -> &[T] {
    let start = (offset * stride).min(storage.len());
    &storage[start..]
}

pub(crate) fn offset_storage_mut<T>(storage: &mut [T], offset: usize, stride: usize) -> &mut [T] {
    let start = (offset * stride).min(storage.len());
    &mut storage[start..]
}

impl<'a, T: Element> VectorView<'a, T> {
    /// View `size` elements of `storage`, `stride` slots apart.
    pub fn with_stride(storage: &'a [T], size: usize, stride: usize) -> Result<Self> {
        check_layout(storage.len(), size, stride)?;
        Ok(Self::from_parts(storage, size, stride))
    }

    pub(crate) fn from_parts(storage: &'a [T], size: usize, stride: usize) -> Self {
        debug_assert!(stride >= 1);
        debug_assert!(required_storage(size, stride) <= storage.len());
        Self {
            storage,
            size,
            stride,
        }
    }

    /// Like [`Strided::subvector`], but the result keeps the original borrow.
    pub fn into_subvector(self, offset: usize, n: usize) -> VectorView<'a, T> {
        debug_assert!(offset + n <= self.size);
        VectorView::from_parts(
            offset_storage(self.storage, offset, self.stride),
            n,
            self.stride,
        )
    }
}

impl<'a, T: Element> VectorViewMut<'a, T> {
    pub fn with_stride(storage: &'a mut [T], size: usize, stride: usize) -> Result<Self> {
        check_layout(storage.len(), size, stride)?;
        Ok(Self::from_parts(storage, size, stride))
    }

    pub(crate) fn from_parts(storage: &'a mut [T], size: usize, stride: usize) -> Self {
        debug_assert!(stride >= 1);
        debug_assert!(required_storage(size, stride) <= storage.len());
        Self {
            storage,
            size,
            stride,
        }
    }

    pub fn into_subvector_mut(self, offset: usize, n: usize) -> VectorViewMut<'a, T> {
        debug_assert!(offset + n <= self.size);
        let stride = self.stride;
        VectorViewMut::from_parts(offset_storage_mut(self.storage, offset, stride), n, stride)
    }

    /// Shorter-lived mutable view of the same elements.
    pub fn reborrow(&mut self) -> VectorViewMut<'_, T> {
        VectorViewMut::from_parts(&mut *self.storage, self.size, self.stride)
    }

    pub fn into_view(self) -> VectorView<'a, T> {
        VectorView::from_parts(self.storage, self.size, self.stride)
    }
}

impl<'a, T: Element> Strided for VectorView<'a, T> {
    type Elem = T;

    fn len(&self) -> usize {
        self.size
    }

    fn stride(&self) -> usize {
        self.stride
    }

    fn storage(&self) -> &[T] {
        self.storage
    }
}

impl<'a, T: Element> Strided for VectorViewMut<'a, T> {
    type Elem = T;

    fn len(&self) -> usize {
        self.size
    }

    fn stride(&self) -> usize {
        self.stride
    }

    fn storage(&self) -> &[T] {
        &self.storage[..]
    }
}

impl<'a, T: Element> StridedMut for VectorViewMut<'a, T> {
    fn storage_mut(&mut self) -> &mut [T] {
        &mut self.storage[..]
    }
}

impl<'a, T: Element> From<&'a [T]> for VectorView<'a, T> {
    fn from(value: &'a [T]) -> Self {
        view_array(value, value.len())
    }
}

impl<'a, T: Element> From<&'a mut [T]> for VectorViewMut<'a, T> {
    fn from(value: &'a mut [T]) -> Self {
        let n = value.len();
        view_array_mut(value, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_stride_rejects_zero_stride() {
        let data = [1.0f32; 4];
        let err = VectorView::with_stride(&data, 2, 0).unwrap_err();
        assert!(matches!(err, VectorError::ZeroStride));
    }

    #[test]
    fn test_with_stride_rejects_short_storage() {
        let mut data = [0u16; 6];
        let err = VectorViewMut::with_stride(&mut data, 3, 3).unwrap_err();
        match err {
            VectorError::StorageTooShort {
                required,
                available,
            } => {
                assert_eq!(required, 7);
                assert_eq!(available, 6);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_with_stride_accepts_minimal_storage() {
        let data = [1, 2, 3, 4, 5, 6, 7];
        let v = VectorView::with_stride(&data, 3, 3).unwrap();
        assert_eq!(v.to_vec(), vec![1, 4, 7]);

        let empty = VectorView::with_stride(&data[..0], 0, 5).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_subvector_composes_stride() {
        let data: Vec<i64> = (0..12).collect();
        let v = VectorView::with_stride(&data, 6, 2).unwrap();
        let sub = v.into_subvector(2, 3);
        assert_eq!(sub.stride(), 2);
        assert_eq!(sub.to_vec(), vec![4, 6, 8]);

        let inner = sub.into_subvector(1, 2);
        assert_eq!(inner.to_vec(), vec![6, 8]);
    }

    #[test]
    fn test_empty_subvector_at_end() {
        let data = [1, 2, 3, 4, 5];
        let v = VectorView::with_stride(&data, 3, 2).unwrap();
        let tail = v.subvector(3, 0);
        assert!(tail.is_empty());
        assert_eq!(tail.to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn test_view_array_mut_writes_through() {
        let mut buffer = [1.0, 2.0, 3.0, 4.0];
        {
            let mut view = view_array_mut(&mut buffer, 3);
            view.scale(10.0);
        }
        assert_eq!(buffer, [10.0, 20.0, 30.0, 4.0]);
    }

    #[test]
    fn test_reborrow_then_reuse() {
        let mut buffer = [0u32; 4];
        let mut view = VectorViewMut::from(&mut buffer[..]);
        view.reborrow().set_all(3);
        view.subvector_mut(1, 2).add_constant(1);
        assert_eq!(view.into_view().to_vec(), vec![3, 4, 4, 3]);
    }
}
