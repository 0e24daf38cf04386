//! # Buffer Cursor
//!
//! A `(vertex, index)` position inside a [`GeometryBuffer`](crate::GeometryBuffer).
//! Cursors double as sizes: capacities are computed by adding and scaling
//! the cursor cost of each primitive before anything is allocated.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// Position (or size) in vertex and index slots.
///
/// # Example
///
/// ```rust
/// use mesh_builder::Cursor;
///
/// let quad = Cursor::new(4, 6);
/// assert_eq!(quad * 2 + Cursor::new(3, 3), Cursor::new(11, 15));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    /// Number of vertex (point and normal) slots.
    pub vertex: usize,
    /// Number of index slots, three per triangle.
    pub index: usize,
}

impl Cursor {
    /// The beginning of every buffer.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a cursor from explicit counts.
    #[inline]
    pub const fn new(vertex: usize, index: usize) -> Self {
        Self { vertex, index }
    }

    /// Number of whole triangles covered by the index count.
    #[inline]
    pub const fn triangle_count(&self) -> usize {
        self.index / 3
    }
}

impl Add for Cursor {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.vertex + rhs.vertex, self.index + rhs.index)
    }
}

impl AddAssign for Cursor {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.vertex += rhs.vertex;
        self.index += rhs.index;
    }
}

impl Mul<usize> for Cursor {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: usize) -> Self {
        Self::new(self.vertex * rhs, self.index * rhs)
    }
}

impl Sum for Cursor {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_add() {
        let a = Cursor::new(4, 6);
        let b = Cursor::new(3, 3);
        assert_eq!(a + b, Cursor::new(7, 9));
    }

    #[test]
    fn test_cursor_add_assign() {
        let mut a = Cursor::ZERO;
        a += Cursor::new(2, 0);
        a += Cursor::new(1, 3);
        assert_eq!(a, Cursor::new(3, 3));
    }

    #[test]
    fn test_cursor_scale() {
        assert_eq!(Cursor::new(4, 6) * 8, Cursor::new(32, 48));
        assert_eq!(Cursor::new(4, 6) * 0, Cursor::ZERO);
    }

    #[test]
    fn test_cursor_sum() {
        let total: Cursor = (1..=3).map(|n| Cursor::new(n, n * 3)).sum();
        assert_eq!(total, Cursor::new(6, 18));
    }

    #[test]
    fn test_cursor_triangle_count() {
        assert_eq!(Cursor::new(4, 6).triangle_count(), 2);
    }
}
