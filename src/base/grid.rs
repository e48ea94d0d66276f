//! Toroidal age grid.
//!
//! The grid stores one age value per cell: `0` means dead, `1..=max_age`
//! means alive for that many consecutive generations. Edges wrap around in
//! both directions, so every cell has exactly eight neighbors.

use rand::Rng;

/// A two-dimensional grid of cell ages with wrap-around edges.
///
/// Cells are stored row-major in a flat buffer. The grid itself enforces no
/// age cap; the engine applies the cap when it writes new generations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an all-dead grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Create a grid by Bernoulli-sampling each cell independently.
    ///
    /// Cells drawn alive start at age 1. `probability` must already be
    /// validated to lie in `[0, 1]`.
    pub fn random<R: Rng>(width: usize, height: usize, probability: f64, rng: &mut R) -> Self {
        let cells = (0..width * height)
            .map(|_| if rng.random_bool(probability) { 1 } else { 0 })
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build a grid from explicit rows of ages.
    ///
    /// Intended for seeding known patterns in tests and demos.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or the rows have unequal lengths.
    pub fn from_rows(rows: &[Vec<u8>]) -> Self {
        assert!(!rows.is_empty(), "Grid requires at least one row");
        let width = rows[0].len();
        assert!(width > 0, "Grid requires at least one column");
        assert!(
            rows.iter().all(|row| row.len() == width),
            "All grid rows must have the same length"
        );

        let cells = rows.iter().flatten().copied().collect();
        Self {
            width,
            height: rows.len(),
            cells,
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.height && col < self.width);
        row * self.width + col
    }

    /// Age of the cell at `(row, col)`; `0` means dead.
    pub fn age(&self, row: usize, col: usize) -> u8 {
        self.cells[self.index(row, col)]
    }

    /// Overwrite the age of the cell at `(row, col)`.
    pub fn set_age(&mut self, row: usize, col: usize, age: u8) {
        let idx = self.index(row, col);
        self.cells[idx] = age;
    }

    /// Whether the cell at `(row, col)` is alive.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.age(row, col) > 0
    }

    /// Number of live cells, recomputed by a full scan.
    ///
    /// Intentionally not cached: the population count is defined as the scan
    /// result, and the grid is small enough that O(width * height) per call
    /// is acceptable.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&age| age > 0).count()
    }

    /// Count live cells among the eight toroidal neighbors of `(row, col)`.
    ///
    /// Wrap-around uses explicit modulo arithmetic with the dimension added
    /// first, so the index never underflows at row/column zero.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for dr in 0..3 {
            for dc in 0..3 {
                if dr == 1 && dc == 1 {
                    continue;
                }
                let r = (row + self.height + dr - 1) % self.height;
                let c = (col + self.width + dc - 1) % self.width;
                if self.cells[r * self.width + c] > 0 {
                    count += 1;
                }
            }
        }
        count
    }

    /// Iterate over rows as age slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width)
    }

    /// The full cell buffer in row-major order.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(5, 4);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&[vec![0, 1, 0], vec![2, 0, 3]]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.age(0, 1), 1);
        assert_eq!(grid.age(1, 0), 2);
        assert_eq!(grid.age(1, 2), 3);
        assert_eq!(grid.population(), 3);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_from_rows_ragged_panics() {
        Grid::from_rows(&[vec![0, 1], vec![0]]);
    }

    #[test]
    fn test_set_age_and_population() {
        let mut grid = Grid::new(3, 3);
        grid.set_age(1, 1, 4);
        grid.set_age(2, 0, 1);
        assert!(grid.is_alive(1, 1));
        assert!(!grid.is_alive(0, 0));
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn test_random_extremes() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let empty = Grid::random(10, 10, 0.0, &mut rng);
        assert_eq!(empty.population(), 0);

        let full = Grid::random(10, 10, 1.0, &mut rng);
        assert_eq!(full.population(), 100);
        assert!(full.cells().iter().all(|&age| age == 1));
    }

    #[test]
    fn test_live_neighbors_interior() {
        let grid = Grid::from_rows(&[
            vec![0, 1, 0, 0],
            vec![0, 1, 1, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]);
        assert_eq!(grid.live_neighbors(1, 1), 2);
        assert_eq!(grid.live_neighbors(2, 2), 2);
        assert_eq!(grid.live_neighbors(3, 3), 0);
    }

    #[test]
    fn test_live_neighbors_wraps_diagonally() {
        // Only the far corner is alive; (0, 0) must see it across both edges.
        let mut grid = Grid::new(4, 4);
        grid.set_age(3, 3, 1);
        assert_eq!(grid.live_neighbors(0, 0), 1);
    }

    #[test]
    fn test_live_neighbors_wraps_edges() {
        let mut grid = Grid::new(4, 4);
        grid.set_age(3, 0, 1); // vertical wrap onto (0, 0)
        grid.set_age(0, 3, 1); // horizontal wrap onto (0, 0)
        assert_eq!(grid.live_neighbors(0, 0), 2);
    }

    #[test]
    fn test_rows_iteration() {
        let grid = Grid::from_rows(&[vec![1, 0], vec![0, 2]]);
        let rows: Vec<&[u8]> = grid.rows().collect();
        assert_eq!(rows, vec![&[1, 0][..], &[0, 2][..]]);
    }
}
