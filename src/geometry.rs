//! Point and line value types shared by every exported function.

use std::fmt;
use std::ops::Add;
use std::os::raw::c_int;

/// A 2D point with integer coordinates.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[repr(C)]
pub struct geomval_point_t {
    pub x: c_int,
    pub y: c_int,
}

/// A line segment between two points.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[repr(C)]
pub struct geomval_line_t {
    pub begin: geomval_point_t,
    pub end: geomval_point_t,
}

impl geomval_point_t {
    pub const ORIGIN: Self = Self::new(0, 0);
    pub const UNIT: Self = Self::new(1, 1);

    pub const fn new(x: c_int, y: c_int) -> Self {
        Self { x, y }
    }

    /// Overwrites both coordinates.
    pub fn set(&mut self, x: c_int, y: c_int) {
        self.x = x;
        self.y = y;
    }

    /// Component-wise sum. Overflow wraps in two's complement in every build profile.
    pub const fn wrapping_add(self, other: Self) -> Self {
        Self {
            x: self.x.wrapping_add(other.x),
            y: self.y.wrapping_add(other.y),
        }
    }
}

impl Add for geomval_point_t {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.wrapping_add(other)
    }
}

impl From<(c_int, c_int)> for geomval_point_t {
    fn from((x, y): (c_int, c_int)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for geomval_point_t {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point[x={}, y={}]", self.x, self.y)
    }
}

impl geomval_line_t {
    /// From the origin to `(1, 1)`. No C accessor is exported for it.
    pub const UNIT: Self = Self::new(geomval_point_t::ORIGIN, geomval_point_t::UNIT);

    pub const fn new(begin: geomval_point_t, end: geomval_point_t) -> Self {
        Self { begin, end }
    }
}

impl fmt::Display for geomval_line_t {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line[begin={}, end={}]", self.begin, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_have_expected_coordinates() {
        assert_eq!(geomval_point_t::ORIGIN, geomval_point_t::new(0, 0));
        assert_eq!(geomval_point_t::UNIT, geomval_point_t::new(1, 1));
        assert_eq!(geomval_line_t::UNIT.begin, geomval_point_t::ORIGIN);
        assert_eq!(geomval_line_t::UNIT.end, geomval_point_t::UNIT);
        assert_eq!(geomval_point_t::default(), geomval_point_t::ORIGIN);
    }

    #[test]
    fn add_sums_components() {
        let sum = geomval_point_t::new(3, -7) + geomval_point_t::new(10, 2);
        assert_eq!(sum, geomval_point_t::new(13, -5));
    }

    #[test]
    fn add_wraps_on_overflow() {
        let sum = geomval_point_t::new(c_int::MAX, c_int::MIN) + geomval_point_t::new(1, -1);
        assert_eq!(sum, geomval_point_t::new(c_int::MIN, c_int::MAX));
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut point = geomval_point_t::new(42, -42);
        point.set(5, 6);
        assert_eq!(point, geomval_point_t::new(5, 6));
        point.set(5, 6);
        assert_eq!(point, geomval_point_t::new(5, 6));
    }

    #[test]
    fn display_formats() {
        assert_eq!(geomval_point_t::new(3, 4).to_string(), "Point[x=3, y=4]");
        assert_eq!(geomval_point_t::new(-1, 0).to_string(), "Point[x=-1, y=0]");
        assert_eq!(
            geomval_line_t::UNIT.to_string(),
            "Line[begin=Point[x=0, y=0], end=Point[x=1, y=1]]"
        );
    }

    #[test]
    fn from_tuple() {
        assert_eq!(geomval_point_t::from((8, 9)), geomval_point_t::new(8, 9));
    }
}
