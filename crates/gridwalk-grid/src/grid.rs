//! The [`Grid`] model: walls, endpoints and 4-connected adjacency.

use gridwalk_core::{Cell, Direction, GridError};
use smallvec::SmallVec;

/// Open neighbours of a cell, in [`Direction::ALL`] order.
pub type Neighbors = SmallVec<[Cell; 4]>;

/// A `width × height` grid of open and walled cells with optional start and
/// end markers.
///
/// Cell `(x, y)` is in bounds when `0 <= x < width` and `0 <= y < height`.
/// Walls are stored row-major in a flat buffer.
///
/// # Invariants
///
/// - `start != end` whenever both are set.
/// - Neither endpoint is ever a wall cell.
/// - Out-of-bounds cells always answer [`is_wall`](Grid::is_wall) with `true`.
///
/// # Examples
///
/// ```
/// use gridwalk_grid::Grid;
/// use gridwalk_core::Cell;
///
/// let mut grid = Grid::new(3, 3).unwrap();
/// assert!(grid.set_start(0, 0));
/// assert!(grid.set_end(2, 2));
/// assert!(grid.set_wall(1, 0));
/// assert!(!grid.set_wall(0, 0)); // start is protected
///
/// // Right is walled, so only "down" remains from the corner.
/// assert_eq!(grid.neighbors(0, 0).as_slice(), &[Cell::new(0, 1)]);
/// assert!(grid.is_wall(-1, 0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    walls: Vec<bool>,
    start: Option<Cell>,
    end: Option<Cell>,
}

impl Grid {
    /// Maximum size of either dimension.
    pub const MAX_DIM: u32 = u16::MAX as u32;

    /// Create an empty grid (no walls, no endpoints).
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds [`Self::MAX_DIM`].
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            width,
            height,
            walls: vec![false; (width as usize) * (height as usize)],
            start: None,
            end: None,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells, `width * height`.
    pub fn cell_count(&self) -> usize {
        self.walls.len()
    }

    /// Start cell, if set.
    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    /// End cell, if set.
    pub fn end(&self) -> Option<Cell> {
        self.end
    }

    /// Whether `(x, y)` lies inside the grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Row-major index of an in-bounds cell.
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    fn is_endpoint(&self, cell: Cell) -> bool {
        self.start == Some(cell) || self.end == Some(cell)
    }

    /// Mark `(x, y)` impassable.
    ///
    /// Returns `false` without mutating if the cell is out of bounds or is
    /// the current start or end.
    pub fn set_wall(&mut self, x: i32, y: i32) -> bool {
        let Some(i) = self.index(x, y) else {
            return false;
        };
        if self.is_endpoint(Cell::new(x, y)) {
            return false;
        }
        self.walls[i] = true;
        true
    }

    /// Clear the wall flag at `(x, y)`. Returns `false` only if out of bounds.
    pub fn remove_wall(&mut self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.walls[i] = false;
                true
            }
            None => false,
        }
    }

    /// Place the start marker at `(x, y)`.
    ///
    /// Fails if the cell is out of bounds, a wall, or the current end.
    pub fn set_start(&mut self, x: i32, y: i32) -> bool {
        let cell = Cell::new(x, y);
        if self.is_wall(x, y) || self.end == Some(cell) {
            return false;
        }
        self.start = Some(cell);
        true
    }

    /// Place the end marker at `(x, y)`.
    ///
    /// Fails if the cell is out of bounds, a wall, or the current start.
    pub fn set_end(&mut self, x: i32, y: i32) -> bool {
        let cell = Cell::new(x, y);
        if self.is_wall(x, y) || self.start == Some(cell) {
            return false;
        }
        self.end = Some(cell);
        true
    }

    /// Remove the start marker.
    pub fn clear_start(&mut self) {
        self.start = None;
    }

    /// Remove the end marker.
    pub fn clear_end(&mut self) {
        self.end = None;
    }

    /// Whether `(x, y)` is impassable. Always `true` outside the grid.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(i) => self.walls[i],
            None => true,
        }
    }

    /// Open, in-bounds cells adjacent to `(x, y)`, ordered right, down,
    /// left, up.
    pub fn neighbors(&self, x: i32, y: i32) -> Neighbors {
        let origin = Cell::new(x, y);
        Direction::ALL
            .iter()
            .map(|&dir| origin.step(dir))
            .filter(|n| !self.is_wall(n.x, n.y))
            .collect()
    }

    /// Whether both start and end are set.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Number of walled in-bounds cells.
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    /// Iterate over walled in-bounds cells in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = Cell> + '_ {
        let w = self.width as usize;
        self.walls
            .iter()
            .enumerate()
            .filter(|&(_, &wall)| wall)
            .map(move |(i, _)| Cell::new((i % w) as i32, (i / w) as i32))
    }

    /// Clear all walls and both endpoints. Dimensions are unchanged.
    pub fn reset(&mut self) {
        self.walls.fill(false);
        self.start = None;
        self.end = None;
    }
}
