//! Dense owning arrays of rank 2 and rank 3.

use num_traits::Zero;

use super::{Dims2, Dims3, ArrayView2, ArrayView3, Window2, Window3, Indexed2, Indexed3};

/// A dense rank-2 array of `T`s.
///
/// The elements are stored in a [`Box<[T]>`] in row-major order; the wrapper
/// makes the storage look like a two-dimensional collection, with coordinate
/// indexing, enumeration and equality. Conversion between coordinates and
/// flat positions is delegated to [`Dims2`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array2<T> {
    dims: Dims2,
    items: Box<[T]>,
}

impl<T> Array2<T> {
    fn new_inner(dims: Dims2, items: Box<[T]>) -> Self {
        assert_eq!(
            dims.len(), items.len(),
            "Extents {:?} require {} items but {} were supplied", dims, dims.len(), items.len(),
        );
        Array2 {dims, items}
    }

    /// Constructs a `rows` by `cols` array given its elements in row-major
    /// order.
    ///
    /// Panics if the number of elements disagrees with the extents.
    ///
    /// ```
    /// use fixedrank::Array2;
    /// let a = Array2::new(2, 3, [1, 2, 3, 4, 5, 6]);
    /// assert_eq!(a[(0, 0)], 1);
    /// assert_eq!(a[(1, 2)], 6);
    /// ```
    pub fn new(rows: usize, cols: usize, items: impl Into<Box<[T]>>) -> Self {
        Self::new_inner(Dims2::new(rows, cols), items.into())
    }

    /// Constructs a `rows` by `cols` array from a function of the coordinate.
    ///
    /// ```
    /// use fixedrank::Array2;
    /// let a = Array2::from_fn(2, 2, |(i, j)| i == j);
    /// assert_eq!(a.as_slice(), [true, false, false, true]);
    /// ```
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut((usize, usize)) -> T) -> Self {
        let dims = Dims2::new(rows, cols);
        let mut items = Vec::with_capacity(dims.len());
        for index in dims.indices() { items.push(f(index)); }
        Self::new_inner(dims, items.into())
    }

    /// Constructs a `rows` by `cols` array filled with clones of `elem`.
    pub fn from_elem(rows: usize, cols: usize, elem: T) -> Self where T: Clone {
        let dims = Dims2::new(rows, cols);
        Self::new_inner(dims, vec![elem; dims.len()].into())
    }

    /// Constructs a `rows` by `cols` array of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self where T: Zero + Clone {
        Self::from_elem(rows, cols, T::zero())
    }

    /// The array with no elements at all.
    pub fn empty() -> Self {
        Array2 {dims: Dims2::EMPTY, items: Vec::new().into_boxed_slice()}
    }

    pub fn dims(&self) -> Dims2 { self.dims }
    pub fn rows(&self) -> usize { self.dims.rows }
    pub fn cols(&self) -> usize { self.dims.cols }
    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// The element at `index`, if it is in range.
    pub fn get(&self, index: (usize, usize)) -> Option<&T> {
        let flat = self.dims.checked_flatten(index)?;
        Some(&self.items[flat])
    }

    /// The element at `index`, mutably, if it is in range.
    pub fn get_mut(&mut self, index: (usize, usize)) -> Option<&mut T> {
        let flat = self.dims.checked_flatten(index)?;
        Some(&mut self.items[flat])
    }

    /// Row `row` as a slice. Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[T] { self.view().row(row) }

    /// The elements in row-major order.
    pub fn as_slice(&self) -> &[T] { &self.items }

    /// The elements in row-major order, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.items }

    /// Returns the raw element store.
    pub fn to_raw(self) -> Box<[T]> { self.items }

    /// The elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.items.iter() }

    /// The elements in row-major order, mutably.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> { self.items.iter_mut() }

    /// The `(coordinate, element)` pairs in row-major order.
    ///
    /// ```
    /// use fixedrank::Array2;
    /// let a = Array2::new(2, 2, ["a", "b", "c", "d"]);
    /// let pairs: Vec<_> = a.indexed().collect();
    /// assert_eq!(pairs, [
    ///     ((0, 0), &"a"), ((0, 1), &"b"),
    ///     ((1, 0), &"c"), ((1, 1), &"d"),
    /// ]);
    /// ```
    pub fn indexed(&self) -> Indexed2<'_, T> { Indexed2::new(self.dims, &self.items) }

    /// A read-only view of the whole array.
    pub fn view(&self) -> ArrayView2<'_, T> { ArrayView2::from_parts(self.dims, &self.items) }

    /// A read-only view of the rectangular sub-range of extents `dims` whose
    /// smallest coordinate is `origin`.
    pub fn window(&self, origin: (usize, usize), dims: Dims2) -> Window2<'_, T> {
        self.view().window(origin, dims)
    }

    /// An array of the same extents whose elements are computed by `f`.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Array2<U> {
        let items: Vec<U> = self.items.iter().map(f).collect();
        Array2::new_inner(self.dims, items.into())
    }

    /// Overwrites every element with a clone of `value`.
    pub fn fill(&mut self, value: T) where T: Clone {
        for item in self.items.iter_mut() { *item = value.clone(); }
    }

    /// Exchanges the elements at coordinates `a` and `b`.
    ///
    /// Panics if either coordinate is out of bounds.
    pub fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        let fa = self.dims.flatten(a);
        let fb = self.dims.flatten(b);
        self.items.swap(fa, fb);
    }
}

impl<T> Default for Array2<T> {
    fn default() -> Self { Self::empty() }
}

impl<T> std::convert::AsRef<[T]> for Array2<T> {
    fn as_ref(&self) -> &[T] { &self.items }
}

impl<T> std::convert::AsMut<[T]> for Array2<T> {
    fn as_mut(&mut self) -> &mut [T] { &mut self.items }
}

impl<T> std::ops::Index<(usize, usize)> for Array2<T> {
    type Output = T;
    #[inline(always)]
    fn index(&self, index: (usize, usize)) -> &T { &self.items[self.dims.flatten(index)] }
}

impl<T> std::ops::IndexMut<(usize, usize)> for Array2<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut T {
        &mut self.items[self.dims.flatten(index)]
    }
}

impl<'a, T: PartialEq> PartialEq<ArrayView2<'a, T>> for Array2<T> {
    fn eq(&self, other: &ArrayView2<'a, T>) -> bool {
        self.dims == other.dims() && self.as_slice() == other.as_slice()
    }
}

impl<'a, T: PartialEq> PartialEq<Array2<T>> for ArrayView2<'a, T> {
    fn eq(&self, other: &Array2<T>) -> bool {
        self.dims() == other.dims && self.as_slice() == other.as_slice()
    }
}

impl<T> IntoIterator for Array2<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter { self.items.into_vec().into_iter() }
}

impl<'a, T> IntoIterator for &'a Array2<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

impl<'a, T> IntoIterator for &'a mut Array2<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.items.iter_mut() }
}

// ----------------------------------------------------------------------------

/// A dense rank-3 array of `T`s.
///
/// As [`Array2`], but indexed by `(plane, row, col)`, with conversion
/// arithmetic delegated to [`Dims3`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array3<T> {
    dims: Dims3,
    items: Box<[T]>,
}

impl<T> Array3<T> {
    fn new_inner(dims: Dims3, items: Box<[T]>) -> Self {
        assert_eq!(
            dims.len(), items.len(),
            "Extents {:?} require {} items but {} were supplied", dims, dims.len(), items.len(),
        );
        Array3 {dims, items}
    }

    /// Constructs a `planes` by `rows` by `cols` array given its elements in
    /// row-major order.
    ///
    /// Panics if the number of elements disagrees with the extents.
    ///
    /// ```
    /// use fixedrank::Array3;
    /// let a = Array3::new(2, 2, 2, [1, 2, 3, 4, 5, 6, 7, 8]);
    /// assert_eq!(a[(1, 0, 1)], 6);
    /// ```
    pub fn new(planes: usize, rows: usize, cols: usize, items: impl Into<Box<[T]>>) -> Self {
        Self::new_inner(Dims3::new(planes, rows, cols), items.into())
    }

    /// Constructs a `planes` by `rows` by `cols` array from a function of the
    /// coordinate.
    pub fn from_fn(
        planes: usize,
        rows: usize,
        cols: usize,
        mut f: impl FnMut((usize, usize, usize)) -> T,
    ) -> Self {
        let dims = Dims3::new(planes, rows, cols);
        let mut items = Vec::with_capacity(dims.len());
        for index in dims.indices() { items.push(f(index)); }
        Self::new_inner(dims, items.into())
    }

    /// Constructs a `planes` by `rows` by `cols` array filled with clones of
    /// `elem`.
    pub fn from_elem(planes: usize, rows: usize, cols: usize, elem: T) -> Self where T: Clone {
        let dims = Dims3::new(planes, rows, cols);
        Self::new_inner(dims, vec![elem; dims.len()].into())
    }

    /// Constructs a `planes` by `rows` by `cols` array of zeros.
    pub fn zeros(planes: usize, rows: usize, cols: usize) -> Self where T: Zero + Clone {
        Self::from_elem(planes, rows, cols, T::zero())
    }

    /// The array with no elements at all.
    pub fn empty() -> Self {
        Array3 {dims: Dims3::EMPTY, items: Vec::new().into_boxed_slice()}
    }

    pub fn dims(&self) -> Dims3 { self.dims }
    pub fn planes(&self) -> usize { self.dims.planes }
    pub fn rows(&self) -> usize { self.dims.rows }
    pub fn cols(&self) -> usize { self.dims.cols }
    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// The element at `index`, if it is in range.
    pub fn get(&self, index: (usize, usize, usize)) -> Option<&T> {
        let flat = self.dims.checked_flatten(index)?;
        Some(&self.items[flat])
    }

    /// The element at `index`, mutably, if it is in range.
    pub fn get_mut(&mut self, index: (usize, usize, usize)) -> Option<&mut T> {
        let flat = self.dims.checked_flatten(index)?;
        Some(&mut self.items[flat])
    }

    /// Plane `plane` as a rank-2 view. Panics if `plane` is out of bounds.
    pub fn plane(&self, plane: usize) -> ArrayView2<'_, T> { self.view().plane(plane) }

    /// The elements in row-major order.
    pub fn as_slice(&self) -> &[T] { &self.items }

    /// The elements in row-major order, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.items }

    /// Returns the raw element store.
    pub fn to_raw(self) -> Box<[T]> { self.items }

    /// The elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.items.iter() }

    /// The elements in row-major order, mutably.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> { self.items.iter_mut() }

    /// The `(coordinate, element)` pairs in row-major order.
    pub fn indexed(&self) -> Indexed3<'_, T> { Indexed3::new(self.dims, &self.items) }

    /// A read-only view of the whole array.
    pub fn view(&self) -> ArrayView3<'_, T> { ArrayView3::from_parts(self.dims, &self.items) }

    /// A read-only view of the cuboid sub-range of extents `dims` whose
    /// smallest coordinate is `origin`.
    pub fn window(&self, origin: (usize, usize, usize), dims: Dims3) -> Window3<'_, T> {
        self.view().window(origin, dims)
    }

    /// An array of the same extents whose elements are computed by `f`.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Array3<U> {
        let items: Vec<U> = self.items.iter().map(f).collect();
        Array3::new_inner(self.dims, items.into())
    }

    /// Overwrites every element with a clone of `value`.
    pub fn fill(&mut self, value: T) where T: Clone {
        for item in self.items.iter_mut() { *item = value.clone(); }
    }

    /// Exchanges the elements at coordinates `a` and `b`.
    ///
    /// Panics if either coordinate is out of bounds.
    pub fn swap(&mut self, a: (usize, usize, usize), b: (usize, usize, usize)) {
        let fa = self.dims.flatten(a);
        let fb = self.dims.flatten(b);
        self.items.swap(fa, fb);
    }
}

impl<T> Default for Array3<T> {
    fn default() -> Self { Self::empty() }
}

impl<T> std::convert::AsRef<[T]> for Array3<T> {
    fn as_ref(&self) -> &[T] { &self.items }
}

impl<T> std::convert::AsMut<[T]> for Array3<T> {
    fn as_mut(&mut self) -> &mut [T] { &mut self.items }
}

impl<T> std::ops::Index<(usize, usize, usize)> for Array3<T> {
    type Output = T;
    #[inline(always)]
    fn index(&self, index: (usize, usize, usize)) -> &T {
        &self.items[self.dims.flatten(index)]
    }
}

impl<T> std::ops::IndexMut<(usize, usize, usize)> for Array3<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: (usize, usize, usize)) -> &mut T {
        &mut self.items[self.dims.flatten(index)]
    }
}

impl<'a, T: PartialEq> PartialEq<ArrayView3<'a, T>> for Array3<T> {
    fn eq(&self, other: &ArrayView3<'a, T>) -> bool {
        self.dims == other.dims() && self.as_slice() == other.as_slice()
    }
}

impl<'a, T: PartialEq> PartialEq<Array3<T>> for ArrayView3<'a, T> {
    fn eq(&self, other: &Array3<T>) -> bool {
        self.dims() == other.dims && self.as_slice() == other.as_slice()
    }
}

impl<T> IntoIterator for Array3<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter { self.items.into_vec().into_iter() }
}

impl<'a, T> IntoIterator for &'a Array3<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

impl<'a, T> IntoIterator for &'a mut Array3<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.items.iter_mut() }
}

// ----------------------------------------------------------------------------
