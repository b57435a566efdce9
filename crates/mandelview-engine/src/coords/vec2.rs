use core::ops::{Add, AddAssign};

/// 2D vector of `f32` components.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Squared length, `x² + y²`.
    #[inline]
    pub fn dot_self(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_self_is_squared_length() {
        assert_eq!(Vec2::new(3.0, 4.0).dot_self(), 25.0);
    }

    #[test]
    fn add_assign_accumulates() {
        let mut v = Vec2::zero();
        v += Vec2::new(0.5, -0.25);
        v += Vec2::new(0.5, -0.25);
        assert_eq!(v, Vec2::new(1.0, -0.5));
    }
}
