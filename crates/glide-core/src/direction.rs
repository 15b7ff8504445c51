//! Navigation directions.

use crate::error::UnknownDirection;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

const UP_ANGLE: f64 = 3.0 * FRAC_PI_2;

/// One of the four cardinal navigation directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward smaller y
    Up,
    /// Toward larger y
    Down,
    /// Toward smaller x
    Left,
    /// Toward larger x
    Right,
}

impl Direction {
    /// All directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Canonical angle in radians, screen coordinates (+y down).
    ///
    /// Right = 0, Down = π/2, Left = π, Up = 3π/2.
    #[must_use]
    pub const fn angle(self) -> f64 {
        match self {
            Self::Right => 0.0,
            Self::Down => FRAC_PI_2,
            Self::Left => PI,
            Self::Up => UP_ANGLE,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|direction| s.trim().eq_ignore_ascii_case(&direction.to_string()))
            .ok_or_else(|| UnknownDirection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_angles() {
        assert_eq!(Direction::Right.angle(), 0.0);
        assert_eq!(Direction::Down.angle(), FRAC_PI_2);
        assert_eq!(Direction::Left.angle(), PI);
        assert_eq!(Direction::Up.angle(), 3.0 * FRAC_PI_2);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Direction::Left).unwrap();
        assert_eq!(json, "\"left\"");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!(" right ".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!(
            "forward".parse::<Direction>(),
            Err(UnknownDirection("forward".into()))
        );
    }
}
