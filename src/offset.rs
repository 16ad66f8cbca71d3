//! Arrays whose axes start at arbitrary lower bounds.
//!
//! An [`OffsetArray2`] relabels the coordinates of an [`Array2`] so that the
//! first element sits at a chosen `base`, which may be negative. Storage and
//! iteration order are those of the wrapped array; rebasing is a coordinate
//! translation, never a copy.

use super::{Array2, Array3, Dims2, Dims3};

/// A rank-2 array indexed by `(isize, isize)` coordinates starting at `base`.
///
/// ```
/// use fixedrank::{Array2, OffsetArray2};
/// let a = OffsetArray2::new((-1, -1), Array2::from_fn(3, 3, |(i, j)| i * 3 + j));
/// assert_eq!(a[(-1, -1)], 0);
/// assert_eq!(a[(0, 0)], 4);
/// assert_eq!(a[(1, 1)], 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OffsetArray2<T> {
    base: (isize, isize),
    inner: Array2<T>,
}

impl<T> OffsetArray2<T> {
    /// Relabels `inner` so that its `(0, 0)` element sits at `base`.
    pub fn new(base: (isize, isize), inner: Array2<T>) -> Self {
        OffsetArray2 {base, inner}
    }

    /// Constructs an array of the given extents from a function of the
    /// rebased coordinate.
    pub fn from_fn(
        base: (isize, isize),
        rows: usize,
        cols: usize,
        mut f: impl FnMut((isize, isize)) -> T,
    ) -> Self {
        let inner = Array2::from_fn(rows, cols, |index| {
            f((base.0 + index.0 as isize, base.1 + index.1 as isize))
        });
        OffsetArray2 {base, inner}
    }

    /// The smallest valid coordinate.
    pub fn base(&self) -> (isize, isize) { self.base }

    pub fn dims(&self) -> Dims2 { self.inner.dims() }
    pub fn len(&self) -> usize { self.inner.len() }
    pub fn is_empty(&self) -> bool { self.inner.is_empty() }

    /// The inclusive lower and exclusive upper corners of the valid region.
    pub fn bounds(&self) -> ((isize, isize), (isize, isize)) {
        let dims = self.inner.dims();
        (self.base, (self.base.0 + dims.rows as isize, self.base.1 + dims.cols as isize))
    }

    /// Tests whether `index` is in the valid region.
    pub fn contains(&self, index: (isize, isize)) -> bool {
        self.checked_rebase(index).is_some()
    }

    /// Converts `index` to the zero-based coordinates of the wrapped array.
    ///
    /// Panics if `index` is outside the valid region.
    pub fn rebase(&self, index: (isize, isize)) -> (usize, usize) {
        match self.checked_rebase(index) {
            Some(rebased) => rebased,
            None => panic!("Index {:?} is out of bounds for {:?}", index, self.bounds()),
        }
    }

    /// [`rebase()`] without the panic.
    ///
    /// [`rebase()`]: Self::rebase()
    pub fn checked_rebase(&self, index: (isize, isize)) -> Option<(usize, usize)> {
        let i = usize::try_from(index.0.checked_sub(self.base.0)?).ok()?;
        let j = usize::try_from(index.1.checked_sub(self.base.1)?).ok()?;
        if self.inner.dims().contains((i, j)) { Some((i, j)) } else { None }
    }

    /// The inverse of [`rebase()`]: the rebased coordinate of a zero-based
    /// coordinate of the wrapped array.
    ///
    /// [`rebase()`]: Self::rebase()
    pub fn unrebase(&self, index: (usize, usize)) -> (isize, isize) {
        (self.base.0 + index.0 as isize, self.base.1 + index.1 as isize)
    }

    /// The element at `index`, if it is in the valid region.
    pub fn get(&self, index: (isize, isize)) -> Option<&T> {
        let rebased = self.checked_rebase(index)?;
        self.inner.get(rebased)
    }

    /// The element at `index`, mutably, if it is in the valid region.
    pub fn get_mut(&mut self, index: (isize, isize)) -> Option<&mut T> {
        let rebased = self.checked_rebase(index)?;
        self.inner.get_mut(rebased)
    }

    /// The `(coordinate, element)` pairs in row-major order, with rebased
    /// coordinates.
    pub fn indexed(&self) -> impl DoubleEndedIterator<Item = ((isize, isize), &T)> + '_ {
        let base = self.base;
        self.inner.indexed().map(move |(index, item)| {
            ((base.0 + index.0 as isize, base.1 + index.1 as isize), item)
        })
    }

    /// The wrapped zero-based array.
    pub fn inner(&self) -> &Array2<T> { &self.inner }

    /// Discards the origin, returning the wrapped zero-based array.
    pub fn into_inner(self) -> Array2<T> { self.inner }
}

impl<T> std::ops::Index<(isize, isize)> for OffsetArray2<T> {
    type Output = T;
    fn index(&self, index: (isize, isize)) -> &T { &self.inner[self.rebase(index)] }
}

impl<T> std::ops::IndexMut<(isize, isize)> for OffsetArray2<T> {
    fn index_mut(&mut self, index: (isize, isize)) -> &mut T {
        let rebased = self.rebase(index);
        &mut self.inner[rebased]
    }
}

// ----------------------------------------------------------------------------

/// A rank-3 array indexed by `(isize, isize, isize)` coordinates starting at
/// `base`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OffsetArray3<T> {
    base: (isize, isize, isize),
    inner: Array3<T>,
}

impl<T> OffsetArray3<T> {
    /// Relabels `inner` so that its `(0, 0, 0)` element sits at `base`.
    pub fn new(base: (isize, isize, isize), inner: Array3<T>) -> Self {
        OffsetArray3 {base, inner}
    }

    /// Constructs an array of the given extents from a function of the
    /// rebased coordinate.
    pub fn from_fn(
        base: (isize, isize, isize),
        planes: usize,
        rows: usize,
        cols: usize,
        mut f: impl FnMut((isize, isize, isize)) -> T,
    ) -> Self {
        let inner = Array3::from_fn(planes, rows, cols, |index| {
            f((
                base.0 + index.0 as isize,
                base.1 + index.1 as isize,
                base.2 + index.2 as isize,
            ))
        });
        OffsetArray3 {base, inner}
    }

    /// The smallest valid coordinate.
    pub fn base(&self) -> (isize, isize, isize) { self.base }

    pub fn dims(&self) -> Dims3 { self.inner.dims() }
    pub fn len(&self) -> usize { self.inner.len() }
    pub fn is_empty(&self) -> bool { self.inner.is_empty() }

    /// The inclusive lower and exclusive upper corners of the valid region.
    pub fn bounds(&self) -> ((isize, isize, isize), (isize, isize, isize)) {
        let dims = self.inner.dims();
        (
            self.base,
            (
                self.base.0 + dims.planes as isize,
                self.base.1 + dims.rows as isize,
                self.base.2 + dims.cols as isize,
            ),
        )
    }

    /// Tests whether `index` is in the valid region.
    pub fn contains(&self, index: (isize, isize, isize)) -> bool {
        self.checked_rebase(index).is_some()
    }

    /// Converts `index` to the zero-based coordinates of the wrapped array.
    ///
    /// Panics if `index` is outside the valid region.
    pub fn rebase(&self, index: (isize, isize, isize)) -> (usize, usize, usize) {
        match self.checked_rebase(index) {
            Some(rebased) => rebased,
            None => panic!("Index {:?} is out of bounds for {:?}", index, self.bounds()),
        }
    }

    /// [`rebase()`] without the panic.
    ///
    /// [`rebase()`]: Self::rebase()
    pub fn checked_rebase(&self, index: (isize, isize, isize)) -> Option<(usize, usize, usize)> {
        let p = usize::try_from(index.0.checked_sub(self.base.0)?).ok()?;
        let r = usize::try_from(index.1.checked_sub(self.base.1)?).ok()?;
        let c = usize::try_from(index.2.checked_sub(self.base.2)?).ok()?;
        if self.inner.dims().contains((p, r, c)) { Some((p, r, c)) } else { None }
    }

    /// The inverse of [`rebase()`]: the rebased coordinate of a zero-based
    /// coordinate of the wrapped array.
    ///
    /// [`rebase()`]: Self::rebase()
    pub fn unrebase(&self, index: (usize, usize, usize)) -> (isize, isize, isize) {
        (
            self.base.0 + index.0 as isize,
            self.base.1 + index.1 as isize,
            self.base.2 + index.2 as isize,
        )
    }

    /// The element at `index`, if it is in the valid region.
    pub fn get(&self, index: (isize, isize, isize)) -> Option<&T> {
        let rebased = self.checked_rebase(index)?;
        self.inner.get(rebased)
    }

    /// The element at `index`, mutably, if it is in the valid region.
    pub fn get_mut(&mut self, index: (isize, isize, isize)) -> Option<&mut T> {
        let rebased = self.checked_rebase(index)?;
        self.inner.get_mut(rebased)
    }

    /// The `(coordinate, element)` pairs in row-major order, with rebased
    /// coordinates.
    pub fn indexed(&self) -> impl DoubleEndedIterator<Item = ((isize, isize, isize), &T)> + '_ {
        let base = self.base;
        self.inner.indexed().map(move |(index, item)| {
            (
                (
                    base.0 + index.0 as isize,
                    base.1 + index.1 as isize,
                    base.2 + index.2 as isize,
                ),
                item,
            )
        })
    }

    /// The wrapped zero-based array.
    pub fn inner(&self) -> &Array3<T> { &self.inner }

    /// Discards the origin, returning the wrapped zero-based array.
    pub fn into_inner(self) -> Array3<T> { self.inner }
}

impl<T> std::ops::Index<(isize, isize, isize)> for OffsetArray3<T> {
    type Output = T;
    fn index(&self, index: (isize, isize, isize)) -> &T { &self.inner[self.rebase(index)] }
}

impl<T> std::ops::IndexMut<(isize, isize, isize)> for OffsetArray3<T> {
    fn index_mut(&mut self, index: (isize, isize, isize)) -> &mut T {
        let rebased = self.rebase(index);
        &mut self.inner[rebased]
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn centred() -> OffsetArray2<i32> {
        OffsetArray2::from_fn((-2, -2), 5, 5, |(i, j)| (10 * i + j) as i32)
    }

    #[test]
    fn rebase_round_trips() {
        let a = centred();
        for (index, _) in a.indexed() {
            assert_eq!(a.unrebase(a.rebase(index)), index);
        }
    }

    #[test]
    fn bounds_and_containment() {
        let a = centred();
        assert_eq!(a.bounds(), ((-2, -2), (3, 3)));
        assert!(a.contains((-2, -2)));
        assert!(a.contains((2, 2)));
        assert!(!a.contains((3, 0)));
        assert!(!a.contains((0, -3)));
    }

    #[test]
    fn negative_coordinates_read_and_write() {
        let mut a = centred();
        assert_eq!(a[(-2, -2)], -22);
        assert_eq!(a[(0, 0)], 0);
        a[(-1, 2)] = 99;
        assert_eq!(a.get((-1, 2)), Some(&99));
        assert_eq!(a.get((5, 5)), None);
    }

    #[test]
    #[should_panic]
    fn out_of_region_panics() {
        let a = centred();
        let _ = a[(3, 3)];
    }

    #[test]
    fn indexed_yields_rebased_coordinates() {
        let a = OffsetArray2::from_fn((1, 1), 2, 2, |(i, j)| (i, j));
        let pairs: Vec<_> = a.indexed().map(|(index, _)| index).collect();
        assert_eq!(pairs, [(1, 1), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn rank3_rebasing() {
        let a = OffsetArray3::from_fn((-1, 0, 1), 2, 2, 2, |index| index);
        assert_eq!(a[(-1, 0, 1)], (-1, 0, 1));
        assert_eq!(a[(0, 1, 2)], (0, 1, 2));
        assert_eq!(a.rebase((0, 1, 2)), (1, 1, 1));
        assert_eq!(a.into_inner().len(), 8);
    }
}
