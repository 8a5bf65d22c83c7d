//! Dense rectangular grid addressed by [`Point`].

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use thiserror::Error;

use super::point::Point;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid cell {0:?} at {1}")]
    InvalidCell(char, Point),
}

/// Row-major grid of `width * height` cells.
///
/// `(0, 0)` is the top-left cell; `x` indexes columns and `y` rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Default + Clone> Grid<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, T::default())
    }
}

impl<T: Clone> Grid<T> {
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for x in 0..self.width {
            for y in 0..self.height {
                cells.push(self.cells[y * self.width + x].clone());
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

impl<T> Grid<T> {
    /// Build from rows of equal length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);

        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: cols.len(),
                });
            }
            cells.extend(cols);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse a block of text, one row per non-empty line.
    ///
    /// `map_char` returns `None` for characters that are not valid cells.
    ///
    /// ```
    /// use advent_solutions::utils::{Grid, Point};
    ///
    /// let grid = Grid::parse("#.\n.#", |c| Some(c == '#')).unwrap();
    /// assert_eq!(grid.count(|&on| on), 2);
    /// assert_eq!(grid[Point::new(1, 1)], true);
    /// ```
    pub fn parse<F>(input: &str, mut map_char: F) -> Result<Self, GridError>
    where
        F: FnMut(char) -> Option<T>,
    {
        let rows = input
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(y, line)| {
                line.chars()
                    .enumerate()
                    .map(|(x, c)| {
                        map_char(c).ok_or(GridError::InvalidCell(c, Point::new(x as i64, y as i64)))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index_of(&self, p: Point) -> Option<usize> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    #[inline]
    fn point_of(&self, index: usize) -> Point {
        Point::new((index % self.width) as i64, (index / self.width) as i64)
    }

    pub fn contains(&self, p: Point) -> bool {
        self.index_of(p).is_some()
    }

    pub fn get(&self, p: Point) -> Option<&T> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        self.index_of(p).map(|i| &mut self.cells[i])
    }

    /// Replace the cell at `p`, returning the old value. `None` if out of bounds.
    pub fn set(&mut self, p: Point, value: T) -> Option<T> {
        self.get_mut(p).map(|cell| std::mem::replace(cell, value))
    }

    /// First cell in row-major order matching `pred`.
    pub fn find<F>(&self, mut pred: F) -> Option<Point>
    where
        F: FnMut(&T) -> bool,
    {
        self.cells
            .iter()
            .position(|c| pred(c))
            .map(|i| self.point_of(i))
    }

    pub fn find_all<F>(&self, mut pred: F) -> Vec<Point>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|(_, c)| pred(c))
            .map(|(p, _)| p)
            .collect()
    }

    pub fn count<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.cells.iter().filter(|c| pred(c)).count()
    }

    /// Every coordinate, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.cells.len()).map(|i| self.point_of(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, c)| (self.point_of(i), c))
    }

    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Orthogonal neighbours of `p` that lie inside the grid.
    pub fn neighbors_4(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(|&n| self.contains(n))
    }

    /// Orthogonal and diagonal neighbours of `p` that lie inside the grid.
    pub fn neighbors_8(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_8().into_iter().filter(|&n| self.contains(n))
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    /// Panics if `p` is outside the grid.
    fn index(&self, p: Point) -> &T {
        match self.index_of(p) {
            Some(i) => &self.cells[i],
            None => panic!("{p} is outside a {}x{} grid", self.width, self.height),
        }
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, p: Point) -> &mut T {
        match self.index_of(p) {
            Some(i) => &mut self.cells[i],
            None => panic!("{p} is outside a {}x{} grid", self.width, self.height),
        }
    }
}

impl FromStr for Grid<char> {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, Some)
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width.max(1)).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
#..
.#.
..S
";

    #[test]
    fn test_parse_and_display() {
        let grid: Grid<char> = SAMPLE.parse().unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid[Point::new(2, 2)], 'S');
        assert_eq!(grid.to_string(), SAMPLE.trim_end());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Grid::<char>::from_str("###\n##\n").unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_invalid_cell_reports_position() {
        let err = Grid::parse(".#\n.x", |c| match c {
            '.' => Some(false),
            '#' => Some(true),
            _ => None,
        })
        .unwrap_err();
        assert_eq!(err, GridError::InvalidCell('x', Point::new(1, 1)));
    }

    #[test]
    fn test_bounds() {
        let mut grid = Grid::<u8>::new(4, 2);
        assert!(grid.contains(Point::new(3, 1)));
        assert!(!grid.contains(Point::new(4, 0)));
        assert!(!grid.contains(Point::new(-1, 0)));
        assert_eq!(grid.get(Point::new(0, 2)), None);

        assert_eq!(grid.set(Point::new(1, 1), 9), Some(0));
        assert_eq!(grid.set(Point::new(1, 1), 7), Some(9));
        assert_eq!(grid.set(Point::new(9, 9), 1), None);
        *grid.get_mut(Point::new(0, 0)).unwrap() += 2;
        assert_eq!(grid.count(|&v| v > 0), 2);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_index_out_of_bounds_panics() {
        let grid = Grid::filled(2, 2, 'a');
        let _cell = grid[Point::new(2, 0)];
    }

    #[test]
    fn test_neighbor_filtering() {
        let grid = Grid::filled(3, 3, ());
        let corner = Point::new(0, 0);
        assert_eq!(grid.neighbors_4(corner).count(), 2);
        assert_eq!(grid.neighbors_8(corner).count(), 3);
        assert_eq!(grid.neighbors_4(Point::new(1, 0)).count(), 3);
        assert_eq!(grid.neighbors_8(Point::new(1, 1)).count(), 8);
    }

    #[test]
    fn test_search_helpers() {
        let grid: Grid<char> = SAMPLE.parse().unwrap();
        assert_eq!(grid.find(|&c| c == 'S'), Some(Point::new(2, 2)));
        assert_eq!(grid.find(|&c| c == 'Z'), None);
        assert_eq!(
            grid.find_all(|&c| c == '#'),
            vec![Point::new(0, 0), Point::new(1, 1)]
        );
        assert_eq!(grid.points().count(), 9);
        assert_eq!(grid.points().nth(4), Some(Point::new(1, 1)));
    }

    #[test]
    fn test_map_and_transpose() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let doubled = grid.map(|v| v * 2);
        assert_eq!(doubled[Point::new(2, 1)], 12);

        let t = grid.transpose();
        assert_eq!((t.width(), t.height()), (2, 3));
        assert_eq!(t[Point::new(1, 0)], 4);
        assert_eq!(t[Point::new(0, 2)], 3);
        assert_eq!(t.transpose(), grid);
    }

    #[test]
    fn test_empty_grid() {
        let grid: Grid<char> = "".parse().unwrap();
        assert_eq!((grid.width(), grid.height()), (0, 0));
        assert_eq!(grid.to_string(), "");
        assert_eq!(grid.points().count(), 0);
    }
}
