//! Battlefield grid coordinates.
//!
//! The battlefield is a square of [`MAP_SIZE`] cells per side. A [`GridPos`]
//! can only be built for a cell inside it, so a unit's position is always
//! on the map.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkirmishError};

/// Edge length of the battlefield in cells.
pub const MAP_SIZE: i32 = 10;

/// Check whether a single coordinate lies in `[0, MAP_SIZE)`.
#[inline]
#[must_use]
pub const fn in_bounds(coord: i32) -> bool {
    coord >= 0 && coord < MAP_SIZE
}

/// A cell on the battlefield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPos {
    x: i32,
    y: i32,
}

impl GridPos {
    /// The top-left cell.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a position, rejecting coordinates outside the battlefield.
    ///
    /// # Example
    ///
    /// ```
    /// use skirmish_core::grid::GridPos;
    ///
    /// assert!(GridPos::new(9, 0).is_ok());
    /// assert!(GridPos::new(10, 0).is_err());
    /// ```
    pub fn new(x: i32, y: i32) -> Result<Self> {
        if in_bounds(x) && in_bounds(y) {
            Ok(Self { x, y })
        } else {
            Err(SkirmishError::OutOfBounds {
                x,
                y,
                size: MAP_SIZE,
            })
        }
    }

    /// X coordinate.
    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    /// Y coordinate.
    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Chebyshev distance: the larger of the two axis deltas.
    ///
    /// A unit with range `r` reaches every cell within this distance, so
    /// diagonal neighbours count as distance 1.
    #[must_use]
    pub const fn chebyshev_distance(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        if dx > dy {
            dx
        } else {
            dy
        }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_half_open() {
        assert!(in_bounds(0));
        assert!(in_bounds(MAP_SIZE - 1));
        assert!(!in_bounds(MAP_SIZE));
        assert!(!in_bounds(-1));
    }

    #[test]
    fn test_new_rejects_out_of_bounds() {
        assert_eq!(
            GridPos::new(-1, 3),
            Err(SkirmishError::OutOfBounds {
                x: -1,
                y: 3,
                size: MAP_SIZE
            })
        );
        assert!(GridPos::new(3, MAP_SIZE).is_err());
        assert_eq!(GridPos::new(0, 0), Ok(GridPos::ORIGIN));
    }

    #[test]
    fn test_chebyshev_distance() {
        let origin = GridPos::ORIGIN;
        let diag = GridPos::new(6, 6).unwrap();
        let skew = GridPos::new(3, 7).unwrap();

        assert_eq!(origin.chebyshev_distance(diag), 6);
        assert_eq!(origin.chebyshev_distance(skew), 7);
        assert_eq!(diag.chebyshev_distance(origin), 6);
        assert_eq!(skew.chebyshev_distance(skew), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(GridPos::new(2, 5).unwrap().to_string(), "(2, 5)");
    }
}
