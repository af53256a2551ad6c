use std::ops::{Add, Sub};

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Integer rectangle with an inclusive minimum corner and an exclusive
/// maximum corner.
#[derive(
    Copy, Clone, Default, Eq, PartialEq, Hash, Debug, Serialize, Deserialize,
)]
pub struct Rect {
    p0: [i32; 2],
    p1: [i32; 2],
}

impl Rect {
    /// Create a new rectangle. If p1 has components that are smaller than
    /// p0's, the corresponding range is clamped to zero.
    pub fn new(p0: impl Into<[i32; 2]>, p1: impl Into<[i32; 2]>) -> Self {
        let (p0, p1) = (p0.into(), p1.into());
        Rect {
            p0,
            p1: [p0[0].max(p1[0]), p0[1].max(p1[1])],
        }
    }

    /// Rectangle of given size at origin.
    pub fn sized(dim: impl Into<[i32; 2]>) -> Self {
        Rect::new([0, 0], dim)
    }

    pub fn min(&self) -> [i32; 2] {
        self.p0
    }

    pub fn max(&self) -> [i32; 2] {
        self.p1
    }

    pub fn dim(&self) -> [i32; 2] {
        [self.p1[0] - self.p0[0], self.p1[1] - self.p0[1]]
    }

    pub fn width(&self) -> i32 {
        self.dim()[0]
    }

    pub fn height(&self) -> i32 {
        self.dim()[1]
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub fn len(&self) -> usize {
        (self.width() * self.height()) as usize
    }

    pub fn contains(&self, p: impl Into<[i32; 2]>) -> bool {
        let [x, y] = p.into();
        (self.p0[0]..self.p1[0]).contains(&x)
            && (self.p0[1]..self.p1[1]).contains(&y)
    }

    pub fn intersection(&self, rhs: &Self) -> Self {
        Rect::new(
            [self.p0[0].max(rhs.p0[0]), self.p0[1].max(rhs.p0[1])],
            [self.p1[0].min(rhs.p1[0]), self.p1[1].min(rhs.p1[1])],
        )
    }

    pub fn grow(
        &self,
        lower: impl Into<[i32; 2]>,
        upper: impl Into<[i32; 2]>,
    ) -> Self {
        let (lower, upper) = (lower.into(), upper.into());
        Rect::new(
            [self.p0[0] - lower[0], self.p0[1] - lower[1]],
            [self.p1[0] + upper[0], self.p1[1] + upper[1]],
        )
    }

    /// Convenience method, `grow` with the signs flipped.
    pub fn shrink(
        &self,
        lower: impl Into<[i32; 2]>,
        upper: impl Into<[i32; 2]>,
    ) -> Self {
        let (lower, upper) = (lower.into(), upper.into());
        self.grow([-lower[0], -lower[1]], [-upper[0], -upper[1]])
    }

    /// Split the rectangle along one axis.
    ///
    /// `plane` should have exactly one non-zero component. A positive
    /// component cuts that far from the minimum edge, a negative one that far
    /// from the maximum edge. The part containing the minimum corner is
    /// returned first.
    pub fn split(&self, plane: impl Into<[i32; 2]>) -> [Self; 2] {
        let plane = plane.into();
        let mut cut = self.p1;
        for i in 0..2 {
            if plane[i] > 0 {
                cut[i] = (self.p0[i] + plane[i]).min(self.p1[i]);
            } else if plane[i] < 0 {
                cut[i] = (self.p1[i] + plane[i]).max(self.p0[i]);
            }
        }

        let mut second_min = self.p0;
        for i in 0..2 {
            if plane[i] != 0 {
                second_min[i] = cut[i];
            }
        }

        [Rect::new(self.p0, cut), Rect::new(second_min, self.p1)]
    }

    /// Row-major index of a point inside the rectangle.
    pub fn idx(&self, p: impl Into<[i32; 2]>) -> usize {
        let [x, y] = p.into();
        debug_assert!(self.contains([x, y]));
        ((y - self.p0[1]) * self.width() + (x - self.p0[0])) as usize
    }

    /// Point for a row-major index.
    pub fn get(&self, n: usize) -> [i32; 2] {
        let w = self.width().max(1) as usize;
        [self.p0[0] + (n % w) as i32, self.p0[1] + (n / w) as i32]
    }
}

impl<E: Into<[i32; 2]>> Add<E> for Rect {
    type Output = Rect;

    fn add(self, rhs: E) -> Self::Output {
        let [x, y] = rhs.into();
        Rect {
            p0: [self.p0[0] + x, self.p0[1] + y],
            p1: [self.p1[0] + x, self.p1[1] + y],
        }
    }
}

impl<E: Into<[i32; 2]>> Sub<E> for Rect {
    type Output = Rect;

    fn sub(self, rhs: E) -> Self::Output {
        let [x, y] = rhs.into();
        self + [-x, -y]
    }
}

impl IntoIterator for Rect {
    type Item = [i32; 2];
    type IntoIter = RectIter;

    fn into_iter(self) -> Self::IntoIter {
        RectIter { rect: self, n: 0 }
    }
}

pub struct RectIter {
    rect: Rect,
    n: usize,
}

impl Iterator for RectIter {
    type Item = [i32; 2];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rect.is_empty() || self.n >= self.rect.len() {
            return None;
        }
        let ret = self.rect.get(self.n);
        self.n += 1;
        Some(ret)
    }
}

/// Convert array-like things into glam vectors.
pub fn v2(p: impl Into<[i32; 2]>) -> IVec2 {
    IVec2::from(p.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split() {
        let r = Rect::sized([10, 4]);
        assert_eq!(
            r.split([3, 0]),
            [Rect::new([0, 0], [3, 4]), Rect::new([3, 0], [10, 4])]
        );
        assert_eq!(
            r.split([0, -1]),
            [Rect::new([0, 0], [10, 3]), Rect::new([0, 3], [10, 4])]
        );
        // Oversized split leaves an empty remainder.
        let [a, b] = r.split([20, 0]);
        assert_eq!(a, r);
        assert!(b.is_empty());
    }

    #[test]
    fn iteration_is_row_major() {
        let r = Rect::new([1, 1], [3, 3]);
        let points: Vec<[i32; 2]> = r.into_iter().collect();
        assert_eq!(points, vec![[1, 1], [2, 1], [1, 2], [2, 2]]);
        for (i, p) in r.into_iter().enumerate() {
            assert_eq!(r.idx(p), i);
        }
    }

    #[test]
    fn degenerate() {
        let r = Rect::new([5, 5], [0, 0]);
        assert!(r.is_empty());
        assert_eq!(r.into_iter().count(), 0);
        assert!(
            Rect::sized([4, 4])
                .intersection(&(Rect::sized([2, 2]) + [10, 10]))
                .is_empty()
        );
    }

    #[test]
    fn shrink_and_grow() {
        let r = Rect::sized([10, 10]);
        assert_eq!(r.shrink([1, 1], [1, 1]), Rect::new([1, 1], [9, 9]));
        assert_eq!(r.shrink([1, 1], [1, 1]).grow([1, 1], [1, 1]), r);
    }
}
