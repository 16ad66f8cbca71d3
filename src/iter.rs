//! Enumerators over coordinates and elements.
//!
//! Each iterator here keeps its cursor state explicitly, so that it can run
//! forwards and backwards over the same range. [`Indices2`] and friends track
//! a pair of flat positions and decode them on demand with
//! [`Dims2::unflatten()`]; the window enumerators instead carry coordinate
//! cursors and move them with [`Dims2::step_forward()`], since a sub-range
//! has no flat representation of its own.

use std::iter::FusedIterator;

use super::{Dims2, Dims3, Window2, Window3};

/// Yields the coordinates of a [`Dims2`] in row-major order.
///
/// This is the return type of [`Dims2::indices()`].
#[derive(Debug, Copy, Clone)]
pub struct Indices2 {
    dims: Dims2,
    front: usize,
    back: usize,
}

impl Indices2 {
    pub(crate) fn new(dims: Dims2) -> Self {
        Indices2 {dims, front: 0, back: dims.len()}
    }
}

impl Iterator for Indices2 {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }
        let index = self.dims.unflatten(self.front);
        self.front += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Indices2 {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }
        self.back -= 1;
        Some(self.dims.unflatten(self.back))
    }
}

impl ExactSizeIterator for Indices2 {}
impl FusedIterator for Indices2 {}

// ----------------------------------------------------------------------------

/// Yields the coordinates of a [`Dims3`] in row-major order.
///
/// This is the return type of [`Dims3::indices()`].
#[derive(Debug, Copy, Clone)]
pub struct Indices3 {
    dims: Dims3,
    front: usize,
    back: usize,
}

impl Indices3 {
    pub(crate) fn new(dims: Dims3) -> Self {
        Indices3 {dims, front: 0, back: dims.len()}
    }
}

impl Iterator for Indices3 {
    type Item = (usize, usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }
        let index = self.dims.unflatten(self.front);
        self.front += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Indices3 {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }
        self.back -= 1;
        Some(self.dims.unflatten(self.back))
    }
}

impl ExactSizeIterator for Indices3 {}
impl FusedIterator for Indices3 {}

// ----------------------------------------------------------------------------

/// Yields `(coordinate, element)` pairs in row-major order.
///
/// This is the return type of [`Array2::indexed()`].
///
/// [`Array2::indexed()`]: super::Array2::indexed()
#[derive(Debug)]
pub struct Indexed2<'a, T> {
    dims: Dims2,
    front: usize,
    back: usize,
    items: &'a [T],
}

impl<'a, T> Indexed2<'a, T> {
    pub(crate) fn new(dims: Dims2, items: &'a [T]) -> Self {
        assert_eq!(dims.len(), items.len());
        Indexed2 {dims, front: 0, back: items.len(), items}
    }
}

impl<'a, T> Iterator for Indexed2<'a, T> {
    type Item = ((usize, usize), &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }
        let index = self.dims.unflatten(self.front);
        let item = &self.items[self.front];
        self.front += 1;
        Some((index, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Indexed2<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }
        self.back -= 1;
        Some((self.dims.unflatten(self.back), &self.items[self.back]))
    }
}

impl<'a, T> ExactSizeIterator for Indexed2<'a, T> {}
impl<'a, T> FusedIterator for Indexed2<'a, T> {}

// ----------------------------------------------------------------------------

/// Yields `(coordinate, element)` pairs in row-major order.
///
/// This is the return type of [`Array3::indexed()`].
///
/// [`Array3::indexed()`]: super::Array3::indexed()
#[derive(Debug)]
pub struct Indexed3<'a, T> {
    dims: Dims3,
    front: usize,
    back: usize,
    items: &'a [T],
}

impl<'a, T> Indexed3<'a, T> {
    pub(crate) fn new(dims: Dims3, items: &'a [T]) -> Self {
        assert_eq!(dims.len(), items.len());
        Indexed3 {dims, front: 0, back: items.len(), items}
    }
}

impl<'a, T> Iterator for Indexed3<'a, T> {
    type Item = ((usize, usize, usize), &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }
        let index = self.dims.unflatten(self.front);
        let item = &self.items[self.front];
        self.front += 1;
        Some((index, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Indexed3<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }
        self.back -= 1;
        Some((self.dims.unflatten(self.back), &self.items[self.back]))
    }
}

impl<'a, T> ExactSizeIterator for Indexed3<'a, T> {}
impl<'a, T> FusedIterator for Indexed3<'a, T> {}

// ----------------------------------------------------------------------------

/// Yields the elements of a [`Window2`] in row-major order.
///
/// Both cursors are coordinates in the window's local space, moved with the
/// carry/borrow arithmetic of [`Dims2::step_forward()`]; no division happens
/// per item.
#[derive(Debug)]
pub struct WindowIter2<'a, T> {
    window: Window2<'a, T>,
    front: (usize, usize),
    back: (usize, usize),
    remaining: usize,
}

impl<'a, T> WindowIter2<'a, T> {
    pub(crate) fn new(window: Window2<'a, T>) -> Self {
        let back = window.dims().last_index().unwrap_or((0, 0));
        WindowIter2 {window, front: (0, 0), back, remaining: window.dims().len()}
    }
}

impl<'a, T> Iterator for WindowIter2<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 { return None; }
        let item = self.window.at(self.front);
        self.remaining -= 1;
        if self.remaining > 0 { self.window.dims().step_forward(&mut self.front); }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for WindowIter2<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 { return None; }
        let item = self.window.at(self.back);
        self.remaining -= 1;
        if self.remaining > 0 { self.window.dims().step_back(&mut self.back); }
        Some(item)
    }
}

impl<'a, T> ExactSizeIterator for WindowIter2<'a, T> {}
impl<'a, T> FusedIterator for WindowIter2<'a, T> {}

// ----------------------------------------------------------------------------

/// Yields the elements of a [`Window3`] in row-major order.
#[derive(Debug)]
pub struct WindowIter3<'a, T> {
    window: Window3<'a, T>,
    front: (usize, usize, usize),
    back: (usize, usize, usize),
    remaining: usize,
}

impl<'a, T> WindowIter3<'a, T> {
    pub(crate) fn new(window: Window3<'a, T>) -> Self {
        let back = window.dims().last_index().unwrap_or((0, 0, 0));
        WindowIter3 {window, front: (0, 0, 0), back, remaining: window.dims().len()}
    }
}

impl<'a, T> Iterator for WindowIter3<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 { return None; }
        let item = self.window.at(self.front);
        self.remaining -= 1;
        if self.remaining > 0 { self.window.dims().step_forward(&mut self.front); }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for WindowIter3<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 { return None; }
        let item = self.window.at(self.back);
        self.remaining -= 1;
        if self.remaining > 0 { self.window.dims().step_back(&mut self.back); }
        Some(item)
    }
}

impl<'a, T> ExactSizeIterator for WindowIter3<'a, T> {}
impl<'a, T> FusedIterator for WindowIter3<'a, T> {}

// ----------------------------------------------------------------------------
