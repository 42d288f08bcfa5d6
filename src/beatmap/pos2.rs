use std::fmt;
use std::ops;

/// Simple (x, y) coordinate / vector
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Pos2 {
    /// Position on the x-axis.
    pub x: f64,
    /// Position on the y-axis.
    pub y: f64,
}

impl Pos2 {
    /// Return the null vector.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Return the position's length.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Return the dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> f64 {
        (self.x * other.x) + (self.y * other.y)
    }

    /// Return the z-component of the cross product,
    /// i.e. the determinant of the two vectors.
    #[inline]
    pub fn cross(&self, other: Self) -> f64 {
        (self.x * other.y) - (self.y * other.x)
    }

    /// Return the distance to another position.
    #[inline]
    pub fn distance(&self, other: Self) -> f64 {
        (*self - other).length()
    }
}

impl ops::Sub<Pos2> for Pos2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl ops::Mul<f64> for Pos2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl fmt::Debug for Pos2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
