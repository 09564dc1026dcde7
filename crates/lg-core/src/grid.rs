use crate::Error;

/// Owned 2D row-major sample container.
///
/// `pitch` is the distance, in elements, between adjacent row starts. It is
/// always `>= width`; grids created or resized here use `pitch == width`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid<T> {
    width: usize,
    height: usize,
    pitch: usize,
    data: Vec<T>,
}

/// Single-channel float grid, the working type of every filter.
pub type Gray = SampleGrid<f32>;

impl<T> Default for SampleGrid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SampleGrid<T> {
    /// Empty 0x0 grid. Filters reshape it on first use.
    pub const fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            pitch: 0,
            data: Vec::new(),
        }
    }

    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, Error> {
        Self::from_vec_with_pitch(width, height, width, data)
    }

    pub fn from_vec_with_pitch(
        width: usize,
        height: usize,
        pitch: usize,
        data: Vec<T>,
    ) -> Result<Self, Error> {
        if pitch < width {
            return Err(Error::InvalidStride);
        }

        let expected = pitch.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pitch,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pitch(&self) -> usize {
        self.pitch
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn same_dims<U>(&self, other: &SampleGrid<U>) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Backing storage, including pitch padding.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn row(&self, y: usize) -> &[T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.pitch;
        &self.data[start..start + self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.pitch;
        &mut self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.pitch + x)
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get_mut(y * self.pitch + x)
    }

    /// Checked lookup with signed coordinates, for neighbour offsets that
    /// may step off the grid.
    pub fn get_signed(&self, x: isize, y: isize) -> Option<&T> {
        if x < 0 || y < 0 {
            return None;
        }
        self.get(x as usize, y as usize)
    }

    /// Returns a sample reference without bounds checks.
    ///
    /// # Safety
    /// Caller must guarantee `x < self.width()` and `y < self.height()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, x: usize, y: usize) -> &T {
        debug_assert!(
            x < self.width && y < self.height,
            "unchecked access ({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        // SAFETY: Caller guarantees `x < width` and `y < height`. With
        // `pitch >= width` and `data.len() == pitch * height` the index is in
        // bounds.
        unsafe { self.data.get_unchecked(y * self.pitch + x) }
    }

    /// Returns a mutable sample reference without bounds checks.
    ///
    /// # Safety
    /// Caller must guarantee `x < self.width()` and `y < self.height()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, x: usize, y: usize) -> &mut T {
        debug_assert!(
            x < self.width && y < self.height,
            "unchecked access ({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        // SAFETY: See `get_unchecked`.
        unsafe { self.data.get_unchecked_mut(y * self.pitch + x) }
    }

    pub fn as_view(&self) -> GridView<'_, T> {
        GridView {
            width: self.width,
            height: self.height,
            stride: self.pitch,
            data: &self.data,
        }
    }
}

impl<T: Clone + Default> SampleGrid<T> {
    pub fn with_size(width: usize, height: usize) -> Result<Self, Error> {
        let mut grid = Self::new();
        grid.resize(width, height)?;
        Ok(grid)
    }

    /// Reallocates to `width x height`, zero-filled, discarding all samples.
    ///
    /// Fails with [`Error::EmptyDimensions`] if either dimension is zero; the
    /// grid is left untouched in that case.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyDimensions);
        }
        let len = width.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: self.data.len(),
        })?;

        self.reshape(width, height, len);
        Ok(())
    }

    /// Reshapes to the dimensions of `other` and zero-fills. Unlike
    /// [`SampleGrid::resize`] this also accepts an empty `other`.
    pub fn match_dims<U>(&mut self, other: &SampleGrid<U>) {
        self.reshape(other.width, other.height, other.width * other.height);
    }

    fn reshape(&mut self, width: usize, height: usize, len: usize) {
        self.data.clear();
        self.data.resize(len, T::default());
        self.width = width;
        self.height = height;
        self.pitch = width;
    }
}

/// Borrowed strided view, used to read host-owned buffers in place.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a, T> {
    width: usize,
    height: usize,
    stride: usize,
    data: &'a [T],
}

impl<'a, T> GridView<'a, T> {
    pub fn from_slice(
        width: usize,
        height: usize,
        stride: usize,
        data: &'a [T],
    ) -> Result<Self, Error> {
        if stride < width {
            return Err(Error::InvalidStride);
        }

        let min_len = min_required_len(width, height, stride).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() < min_len {
            return Err(Error::SizeMismatch {
                expected: min_len,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn row(&self, y: usize) -> &'a [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.stride + x)
    }

    pub fn is_contiguous(&self) -> bool {
        self.stride == self.width
    }
}

// The last row only needs `width` elements, so host buffers that drop the
// trailing row padding are accepted.
fn min_required_len(width: usize, height: usize, stride: usize) -> Option<usize> {
    if width == 0 || height == 0 {
        return Some(0);
    }

    let rows_before_last = height.checked_sub(1)?;
    let base = rows_before_last.checked_mul(stride)?;
    base.checked_add(width)
}

/// Copies an 8-bit view into a tightly packed float grid.
pub fn to_f32(view: &GridView<'_, u8>) -> Gray {
    let mut data = Vec::with_capacity(view.width() * view.height());
    for y in 0..view.height() {
        data.extend(view.row(y).iter().map(|&px| px as f32));
    }

    SampleGrid {
        width: view.width(),
        height: view.height(),
        pitch: view.width(),
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::{Gray, GridView, SampleGrid, to_f32};
    use crate::Error;

    #[test]
    fn resize_rejects_zero_and_keeps_contents() {
        let mut g = Gray::from_vec(2, 1, vec![1.0, 2.0]).expect("valid grid");

        assert_eq!(g.resize(0, 4), Err(Error::EmptyDimensions));
        assert_eq!(g.resize(3, 0), Err(Error::EmptyDimensions));
        assert_eq!(g.width(), 2);
        assert_eq!(g.data(), &[1.0, 2.0]);
    }

    #[test]
    fn resize_zero_fills_every_time() {
        let mut g = Gray::with_size(3, 2).expect("non-empty");
        assert_eq!(g.pitch(), 3);
        assert!(g.data().iter().all(|&v| v == 0.0));

        *g.get_mut(1, 1).expect("in bounds") = 7.0;
        g.resize(3, 2).expect("non-empty");
        assert!(g.data().iter().all(|&v| v == 0.0));

        g.resize(4, 5).expect("non-empty");
        assert_eq!((g.width(), g.height(), g.data().len()), (4, 5, 20));
    }

    #[test]
    fn checked_and_unchecked_access_agree() {
        let g = SampleGrid::from_vec(3, 2, vec![1u8, 2, 3, 4, 5, 6]).expect("valid grid");

        assert_eq!(g.get(2, 1), Some(&6));
        assert_eq!(g.get(3, 0), None);
        assert_eq!(g.get(0, 2), None);
        assert_eq!(g.get_signed(-1, 0), None);
        assert_eq!(g.get_signed(1, 1), Some(&5));

        for y in 0..g.height() {
            for x in 0..g.width() {
                // SAFETY: loop bounds are the grid dimensions.
                let raw = unsafe { *g.get_unchecked(x, y) };
                assert_eq!(Some(&raw), g.get(x, y));
            }
        }
    }

    #[test]
    fn pitch_padding_is_skipped() {
        let g = SampleGrid::from_vec_with_pitch(2, 2, 3, vec![1u8, 2, 99, 3, 4, 98])
            .expect("valid grid");

        assert_eq!(g.row(0), &[1, 2]);
        assert_eq!(g.row(1), &[3, 4]);
        assert_eq!(g.get(1, 1), Some(&4));
        assert_eq!(
            SampleGrid::from_vec_with_pitch(3, 1, 2, vec![0u8; 3]),
            Err(Error::InvalidStride)
        );
    }

    #[test]
    fn match_dims_accepts_empty() {
        let src = Gray::with_size(4, 3).expect("non-empty");
        let mut out = Gray::new();
        out.match_dims(&src);
        assert!(out.same_dims(&src));

        out.match_dims(&Gray::new());
        assert!(out.is_empty());
        assert!(out.data().is_empty());
    }

    #[test]
    fn strided_view_converts_to_f32() {
        let data = vec![1u8, 2, 3, 99, 4, 5, 6];
        let view = GridView::from_slice(3, 2, 4, &data).expect("valid view");

        assert!(!view.is_contiguous());
        assert_eq!(view.row(1), &[4, 5, 6]);

        let g = to_f32(&view);
        assert_eq!(g.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(g.pitch(), 3);
    }

    #[test]
    fn view_rejects_short_buffer() {
        let data = vec![0u8; 6];
        assert_eq!(
            GridView::from_slice(3, 2, 4, &data).err(),
            Some(Error::SizeMismatch {
                expected: 7,
                actual: 6
            })
        );
    }
}
