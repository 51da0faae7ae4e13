use std::ops::{Add, Neg, Sub};

/// A signed board displacement.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    #[inline]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn l1(self) -> i8 {
        self.x.abs() + self.y.abs()
    }

    /// True iff this displacement is one of the 8 knight leaps.
    #[inline]
    pub fn is_knight_step(self) -> bool {
        let (ax, ay) = (self.x.abs(), self.y.abs());
        (ax == 1 && ay == 2) || (ax == 2 && ay == 1)
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Coord {
    type Output = Coord;

    #[inline]
    fn neg(self) -> Coord {
        Coord::new(-self.x, -self.y)
    }
}

/// The 8 knight leaps, in the order edges are registered during graph construction.
///
/// Counter-clockwise from `(2, 1)`; from a corner the `(2, 1)` edge is registered before `(1, 2)`.
pub const KNIGHT_STEPS: [Coord; 8] = [
    Coord { x: 2, y: 1 },
    Coord { x: 1, y: 2 },
    Coord { x: -1, y: 2 },
    Coord { x: -2, y: 1 },
    Coord { x: -2, y: -1 },
    Coord { x: -1, y: -2 },
    Coord { x: 1, y: -2 },
    Coord { x: 2, y: -1 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_steps_are_distinct_and_closed_under_negation() {
        for (i, a) in KNIGHT_STEPS.iter().enumerate() {
            assert!(a.is_knight_step());
            assert_eq!(a.l1(), 3);
            assert!(KNIGHT_STEPS.contains(&-*a));
            for b in &KNIGHT_STEPS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn non_knight_displacements_are_rejected() {
        for c in [
            Coord::new(0, 0),
            Coord::new(1, 1),
            Coord::new(2, 2),
            Coord::new(0, 3),
            Coord::new(3, 0),
            Coord::new(1, 0),
        ] {
            assert!(!c.is_knight_step(), "{c:?}");
        }
    }
}
