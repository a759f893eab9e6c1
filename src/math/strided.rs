use std::io::{self, Write};
use std::iter::{Copied, StepBy, Take};
use std::slice;

use num_traits::{Float, ToPrimitive};

use crate::config::PrintOptions;
use crate::math::element::Element;
use crate::math::format::format_exp;
use crate::math::view::{offset_storage, offset_storage_mut, view_array, view_array_mut};
use crate::math::{VectorView, VectorViewMut};

/// Iterator over the logical elements of a strided vector, in index order.
pub type Iter<'a, T> = Take<StepBy<Copied<slice::Iter<'a, T>>>>;

/// Read access to a `(size, stride, storage)` triple.
///
/// Logical element `i` lives at `storage()[i * stride()]`. Indices and operand
/// sizes are trusted: they are only checked by debug assertions.
pub trait Strided {
    type Elem: Element;

    /// Number of logical elements.
    fn len(&self) -> usize;

    /// Physical distance between consecutive logical elements, always >= 1.
    fn stride(&self) -> usize;

    /// Backing storage starting at logical element 0.
    fn storage(&self) -> &[Self::Elem];

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn get(&self, i: usize) -> Self::Elem {
        debug_assert!(
            i < self.len(),
            "index {} out of range for vector of length {}",
            i,
            self.len()
        );
        self.storage()[i * self.stride()]
    }

    fn iter(&self) -> Iter<'_, Self::Elem> {
        self.storage()
            .iter()
            .copied()
            .step_by(self.stride())
            .take(self.len())
    }

    fn to_vec(&self) -> Vec<Self::Elem> {
        self.iter().collect()
    }

    /// True if any element is NaN. Stops at the first match.
    fn any_is_nan(&self) -> bool
    where
        Self::Elem: Float,
    {
        self.iter().any(|value| value.is_nan())
    }

    /// Borrow the whole vector as a read-only view.
    fn as_view(&self) -> VectorView<'_, Self::Elem> {
        VectorView::from_parts(self.storage(), self.len(), self.stride())
    }

    /// View of `n` elements starting at logical index `offset`.
    ///
    /// The view inherits this vector's stride.
    fn subvector(&self, offset: usize, n: usize) -> VectorView<'_, Self::Elem> {
        debug_assert!(
            offset + n <= self.len(),
            "subvector {}..{} out of range for vector of length {}",
            offset,
            offset + n,
            self.len()
        );
        let stride = self.stride();
        VectorView::from_parts(offset_storage(self.storage(), offset, stride), n, stride)
    }

    /// Copy every element into the front of `dest`, which must hold at least
    /// `len()` elements.
    fn copy_to_slice(&self, dest: &mut [Self::Elem]) {
        let n = self.len();
        view_array_mut(dest, n).copy_from(self);
    }

    /// Write every element in `%e` notation followed by a single space, then a
    /// newline, to stdout.
    fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_formatted(&mut handle, &PrintOptions::default())
    }

    fn write_formatted<W>(&self, writer: &mut W, options: &PrintOptions) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        let len = self.len();
        for (i, value) in self.iter().enumerate() {
            let value = value.to_f64().unwrap_or(f64::NAN);
            writer.write_all(format_exp(value, options.precision).as_bytes())?;
            if options.trailing_separator || i + 1 != len {
                writer.write_all(options.separator.as_bytes())?;
            }
        }
        writer.write_all(options.line_terminator.as_bytes())
    }
}

/// Write access on top of [`Strided`]: element stores, copies and in-place
/// elementwise arithmetic.
pub trait StridedMut: Strided {
    fn storage_mut(&mut self) -> &mut [Self::Elem];

    #[inline]
    fn set(&mut self, i: usize, x: Self::Elem) {
        debug_assert!(
            i < self.len(),
            "index {} out of range for vector of length {}",
            i,
            self.len()
        );
        let stride = self.stride();
        self.storage_mut()[i * stride] = x;
    }

    fn set_all(&mut self, x: Self::Elem) {
        for_each_mut(self, |a| *a = x);
    }

    fn as_view_mut(&mut self) -> VectorViewMut<'_, Self::Elem> {
        let (len, stride) = (self.len(), self.stride());
        VectorViewMut::from_parts(self.storage_mut(), len, stride)
    }

    /// Mutable view of `n` elements starting at logical index `offset`.
    ///
    /// Writes through the view land in this vector's storage.
    fn subvector_mut(&mut self, offset: usize, n: usize) -> VectorViewMut<'_, Self::Elem> {
        debug_assert!(
            offset + n <= self.len(),
            "subvector {}..{} out of range for vector of length {}",
            offset,
            offset + n,
            self.len()
        );
        let stride = self.stride();
        VectorViewMut::from_parts(
            offset_storage_mut(self.storage_mut(), offset, stride),
            n,
            stride,
        )
    }

    /// Copy `len` elements of `src`, starting at `src_offset`, into this
    /// vector starting at `dest_offset`.
    ///
    /// Both positions advance together. Unit-stride operands take a single
    /// slice copy; any other stride combination copies element by element.
    fn copy_range_from<S>(&mut self, dest_offset: usize, src: &S, src_offset: usize, len: usize)
    where
        S: Strided<Elem = Self::Elem> + ?Sized,
    {
        debug_assert!(
            dest_offset + len <= self.len(),
            "destination range out of bounds"
        );
        debug_assert!(src_offset + len <= src.len(), "source range out of bounds");

        if self.stride() == 1 && src.stride() == 1 {
            log::trace!("contiguous copy of {} elements", len);
            self.storage_mut()[dest_offset..dest_offset + len]
                .copy_from_slice(&src.storage()[src_offset..src_offset + len]);
        } else {
            log::trace!(
                "strided copy of {} elements (dest stride {}, src stride {})",
                len,
                self.stride(),
                src.stride()
            );
            for i in 0..len {
                self.set(dest_offset + i, src.get(src_offset + i));
            }
        }
    }

    /// Copy all `len()` elements from a source of the same size.
    fn copy_from<S>(&mut self, src: &S)
    where
        S: Strided<Elem = Self::Elem> + ?Sized,
    {
        let len = self.len();
        self.copy_range_from(0, src, 0, len);
    }

    /// Copy from a flat buffer holding at least `len()` elements.
    fn copy_from_slice(&mut self, src: &[Self::Elem]) {
        let len = self.len();
        self.copy_from(&view_array(src, len));
    }

    fn scale(&mut self, x: Self::Elem) {
        for_each_mut(self, |a| *a *= x);
    }

    fn add_constant(&mut self, x: Self::Elem) {
        for_each_mut(self, |a| *a += x);
    }

    fn add<S>(&mut self, other: &S)
    where
        S: Strided<Elem = Self::Elem> + ?Sized,
    {
        zip_mut(self, other, |a, b| *a += b);
    }

    fn subtract<S>(&mut self, other: &S)
    where
        S: Strided<Elem = Self::Elem> + ?Sized,
    {
        zip_mut(self, other, |a, b| *a -= b);
    }

    fn multiply<S>(&mut self, other: &S)
    where
        S: Strided<Elem = Self::Elem> + ?Sized,
    {
        zip_mut(self, other, |a, b| *a *= b);
    }

    /// Elementwise division. Division by zero behaves as it does for `Elem`.
    fn divide<S>(&mut self, other: &S)
    where
        S: Strided<Elem = Self::Elem> + ?Sized,
    {
        zip_mut(self, other, |a, b| *a /= b);
    }
}

fn for_each_mut<V, F>(dest: &mut V, f: F)
where
    V: StridedMut + ?Sized,
    F: FnMut(&mut V::Elem),
{
    let (len, stride) = (dest.len(), dest.stride());
    dest.storage_mut()
        .iter_mut()
        .step_by(stride)
        .take(len)
        .for_each(f);
}

fn zip_mut<V, S, F>(dest: &mut V, other: &S, mut f: F)
where
    V: StridedMut + ?Sized,
    S: Strided<Elem = V::Elem> + ?Sized,
    F: FnMut(&mut V::Elem, V::Elem),
{
    let (len, stride) = (dest.len(), dest.stride());
    debug_assert!(
        other.len() >= len,
        "operand of length {} shorter than vector of length {}",
        other.len(),
        len
    );
    dest.storage_mut()
        .iter_mut()
        .step_by(stride)
        .take(len)
        .zip(other.iter())
        .for_each(|(a, b)| f(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector;

    #[test]
    fn test_get_set_respect_stride() {
        let mut data = [0i32; 7];
        let mut v = VectorViewMut::with_stride(&mut data, 4, 2).unwrap();
        for i in 0..4 {
            v.set(i, (i as i32 + 1) * 10);
        }
        assert_eq!(v.to_vec(), vec![10, 20, 30, 40]);
        assert_eq!(data, [10, 0, 20, 0, 30, 0, 40]);
    }

    #[test]
    fn test_iter_stops_at_len() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let v = VectorView::with_stride(&data, 2, 2).unwrap();
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![1.0, 3.0]);
    }

    #[test]
    fn test_strided_copy_advances_source() {
        let src_data = [1, 100, 2, 200, 3, 300, 4, 400];
        let src = VectorView::with_stride(&src_data, 4, 2).unwrap();
        let mut dest = Vector::<i32>::calloc(5).unwrap();

        dest.copy_range_from(1, &src, 1, 3);

        assert_eq!(dest.to_vec(), vec![0, 2, 3, 4, 0]);
    }

    #[test]
    fn test_contiguous_copy_uses_offsets() {
        let src = Vector::from_vec(vec![1, 2, 3, 4, 5]);
        let mut dest = Vector::<i32>::calloc(5).unwrap();

        dest.copy_range_from(2, &src, 0, 3);

        assert_eq!(dest.to_vec(), vec![0, 0, 1, 2, 3]);
    }

    #[test]
    fn test_zero_length_copy_is_noop() {
        let src = Vector::from_vec(vec![9, 9]);
        let mut dest = Vector::from_vec(vec![1, 2]);
        dest.copy_range_from(2, &src, 2, 0);
        assert_eq!(dest.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_write_formatted_without_trailing_separator() {
        let v = Vector::from_vec(vec![1.0f64, -2.0]);
        let options = PrintOptions {
            trailing_separator: false,
            ..PrintOptions::new(2, ", ")
        };
        let mut out = Vec::new();
        v.write_formatted(&mut out, &options).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1.00e+00, -2.00e+00\n");
    }
}
