//! 2D integer points and compass directions.
//!
//! Coordinates follow the puzzle-input convention: `x` grows to the right,
//! `y` grows downward, so "north" is `-y`.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use thiserror::Error;

/// A 2D integer point, also used as a displacement vector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const NORTH: Self = Self::new(0, -1);
    pub const SOUTH: Self = Self::new(0, 1);
    pub const EAST: Self = Self::new(1, 0);
    pub const WEST: Self = Self::new(-1, 0);
    pub const NORTH_EAST: Self = Self::new(1, -1);
    pub const SOUTH_EAST: Self = Self::new(1, 1);
    pub const SOUTH_WEST: Self = Self::new(-1, 1);
    pub const NORTH_WEST: Self = Self::new(-1, -1);

    /// Cardinal unit vectors, clockwise from north.
    pub const CARDINAL_4: [Self; 4] = [Self::NORTH, Self::EAST, Self::SOUTH, Self::WEST];

    /// Cardinal and diagonal unit vectors, clockwise from north.
    pub const CARDINAL_8: [Self; 8] = [
        Self::NORTH,
        Self::NORTH_EAST,
        Self::EAST,
        Self::SOUTH_EAST,
        Self::SOUTH,
        Self::SOUTH_WEST,
        Self::WEST,
        Self::NORTH_WEST,
    ];

    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Taxicab distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Self) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    #[inline]
    pub fn manhattan_from_origin(self) -> u64 {
        self.manhattan(Self::ORIGIN)
    }

    /// Rotate 90° counter-clockwise (as seen on screen) around the origin.
    #[inline]
    pub const fn rotate_left(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Rotate 90° clockwise (as seen on screen) around the origin.
    #[inline]
    pub const fn rotate_right(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Heading after a left turn. Exact for the cardinal unit vectors.
    #[inline]
    pub const fn turn_left(self) -> Self {
        self.rotate_left()
    }

    /// Heading after a right turn. Exact for the cardinal unit vectors.
    #[inline]
    pub const fn turn_right(self) -> Self {
        self.rotate_right()
    }

    /// Opposite heading.
    #[inline]
    pub const fn reverse(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// The four orthogonal neighbours, in N, S, E, W order.
    #[inline]
    pub fn neighbors_4(self) -> [Self; 4] {
        [
            self + Self::NORTH,
            self + Self::SOUTH,
            self + Self::EAST,
            self + Self::WEST,
        ]
    }

    /// All eight neighbours, clockwise from north.
    #[inline]
    pub fn neighbors_8(self) -> [Self; 8] {
        Self::CARDINAL_8.map(|d| self + d)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.reverse()
    }
}

impl Mul<i64> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not a direction: {0:?}")]
pub struct ParseDirectionError(pub char);

/// One of the four compass headings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Clockwise from north.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Unit vector for this heading.
    pub const fn delta(self) -> Point {
        match self {
            Self::North => Point::NORTH,
            Self::East => Point::EAST,
            Self::South => Point::SOUTH,
            Self::West => Point::WEST,
        }
    }

    pub const fn turn_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::East => Self::North,
            Self::South => Self::East,
            Self::West => Self::South,
        }
    }

    pub const fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    pub const fn reverse(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}

impl From<Direction> for Point {
    fn from(dir: Direction) -> Self {
        dir.delta()
    }
}

/// Accepts compass letters, `UDLR` and arrow characters.
impl TryFrom<char> for Direction {
    type Error = ParseDirectionError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'N' | 'U' | '^' => Ok(Self::North),
            'S' | 'D' | 'v' => Ok(Self::South),
            'E' | 'R' | '>' => Ok(Self::East),
            'W' | 'L' | '<' => Ok(Self::West),
            other => Err(ParseDirectionError(other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        };
        write!(f, "{c}")
    }
}
