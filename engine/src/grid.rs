/*!
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* Cells outside the grid do not exist: a neighbor that would fall off an edge
* simply doesn't count.
*/

/// Double-buffered cell matrices, indexed `[x][y]`.
///
/// `current` is the authoritative generation; `next` is scratch space that is
/// fully overwritten by [`GridState::step`] and then swapped in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridState {
    width: usize,
    height: usize,
    current: Vec<Vec<bool>>,
    next: Vec<Vec<bool>>,
}

impl GridState {
    /// Allocate an all-dead grid of `width` columns and `height` rows.
    pub fn new(width: usize, height: usize) -> Self {
        GridState {
            width,
            height,
            current: vec![vec![false; height]; width],
            next: vec![vec![false; height]; width],
        }
    }

    /// Build a grid from rows of `#` (alive) and `.` (dead), top row first.
    ///
    /// Any character other than `#` is dead. Rows shorter than the widest one
    /// are padded with dead cells.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let mut grid = GridState::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                grid.current[x][y] = ch == '#';
            }
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The authoritative generation, `current[x][y]`.
    pub fn current(&self) -> &[Vec<bool>] {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut [Vec<bool>] {
        &mut self.current
    }

    /// Exchange the roles of `current` and `next` without copying cells.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Advance the grid by one generation.
    ///
    /// Every cell of `next` is computed from `current` alone before the swap,
    /// so a half-written generation is never observable.
    pub fn step(&mut self) {
        for x in 0..self.width {
            for y in 0..self.height {
                let alive_neighbors = self.live_neighbors(x, y);
                let is_alive = self.current[x][y];

                // Apply Game of Life rules
                self.next[x][y] = match (is_alive, alive_neighbors) {
                    (true, 2..=3) => true, // Survives
                    (false, 3) => true,    // Becomes alive
                    _ => false,            // Dies or remains dead
                };
            }
        }
        self.swap();
    }

    /// Count the live cells among the Moore neighbors of `(x, y)`.
    pub fn live_neighbors(&self, x: usize, y: usize) -> usize {
        let mut count = 0;

        for dx in [-1isize, 0, 1] {
            for dy in [-1isize, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                    continue;
                };
                if nx < self.width && ny < self.height && self.current[nx][ny] {
                    count += 1;
                }
            }
        }

        count
    }

    /// Number of live cells in `current`, by full scan.
    pub fn live_count(&self) -> usize {
        self.current
            .iter()
            .map(|column| column.iter().filter(|&&alive| alive).count())
            .sum()
    }

    /// Render `current` back into the `#`/`.` row notation used by [`GridState::from_rows`].
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| if self.current[x][y] { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}
