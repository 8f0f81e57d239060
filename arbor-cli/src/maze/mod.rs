//! Rectangular mazes carved with Kruskal's algorithm.
//!
//! A [`Grid`] is a graph whose vertices are rooms and whose edges are the
//! walls between orthogonally adjacent rooms. Carving draws one random
//! weight per wall from a seeded [`SmallRng`] and asks for a minimum
//! spanning forest under those weights; the selected walls are the ones to
//! knock down. The grid itself is never modified, so one grid can be carved
//! repeatedly with different seeds.

use std::collections::HashSet;

use arbor_core::{Edge, Graph, GraphError};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, instrument};

/// A cell of the grid, addressed by row and column.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Room {
    /// Zero-based row, counted from the top.
    pub row: usize,
    /// Zero-based column, counted from the left.
    pub col: usize,
}

/// The wall separating two adjacent rooms.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Wall {
    room1: Room,
    room2: Room,
    ordinal: usize,
}

impl Wall {
    /// Position of the wall in the grid's wall sequence.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }
}

impl Edge<Room> for Wall {
    fn vertex1(&self) -> &Room {
        &self.room1
    }

    fn vertex2(&self) -> &Room {
        &self.room2
    }

    // Every wall is equally thick; carving supplies its own weights.
    fn weight(&self) -> f64 {
        1.0
    }
}

/// Errors raised while building or carving a maze.
#[derive(Debug, Error)]
pub enum MazeError {
    /// One of the grid dimensions was zero.
    #[error("maze dimensions must be positive, got {width}x{height}")]
    EmptyGrid {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
    },
    /// The underlying graph rejected the grid or the carve.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A rectangular grid of rooms with every wall standing.
#[derive(Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    graph: Graph<Room, Wall>,
}

impl Grid {
    /// Builds a `width` by `height` grid.
    ///
    /// # Errors
    /// Returns [`MazeError::EmptyGrid`] when either dimension is zero.
    ///
    /// # Examples
    /// ```
    /// use arbor_cli::maze::Grid;
    ///
    /// let grid = Grid::new(3, 2)?;
    /// assert_eq!(grid.rooms().len(), 6);
    /// assert_eq!(grid.walls().len(), 7);
    /// # Ok::<(), arbor_cli::maze::MazeError>(())
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::EmptyGrid { width, height });
        }

        let rooms: Vec<Room> = (0..height)
            .flat_map(|row| (0..width).map(move |col| Room { row, col }))
            .collect();
        let mut walls = Vec::new();
        for room in &rooms {
            let neighbours = [
                (room.col + 1 < width).then(|| Room {
                    row: room.row,
                    col: room.col + 1,
                }),
                (room.row + 1 < height).then(|| Room {
                    row: room.row + 1,
                    col: room.col,
                }),
            ];
            for neighbour in neighbours.into_iter().flatten() {
                walls.push(Wall {
                    room1: *room,
                    room2: neighbour,
                    ordinal: walls.len(),
                });
            }
        }

        let graph = Graph::new(rooms, walls)?;
        Ok(Self {
            width,
            height,
            graph,
        })
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Rooms in row-major order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        self.graph.vertices()
    }

    /// Every wall of the grid, each listed once.
    #[must_use]
    pub fn walls(&self) -> &[Wall] {
        self.graph.edges()
    }

    /// Carves a perfect maze: every room reachable from every other by
    /// exactly one route.
    ///
    /// The same `seed` always yields the same maze.
    ///
    /// # Errors
    /// Returns [`MazeError::Graph`] if the spanning-tree computation fails.
    #[instrument(
        name = "maze.carve",
        err,
        skip(self),
        fields(width = self.width, height = self.height),
    )]
    pub fn carve(&self, seed: u64) -> Result<Maze<'_>, MazeError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let weights: Vec<f64> = self.walls().iter().map(|_| rng.r#gen::<f64>()).collect();
        let tree = self
            .graph
            .minimum_spanning_forest_by(|wall| weights[wall.ordinal])?;

        let removed: HashSet<Wall> = tree.edges().iter().map(|wall| **wall).collect();
        let passages = removed
            .iter()
            .map(|wall| passage(wall.room1, wall.room2))
            .collect();
        debug!(removed = removed.len(), "maze carved");
        Ok(Maze {
            grid: self,
            removed,
            passages,
        })
    }
}

/// A grid with a set of walls knocked down.
#[derive(Debug)]
pub struct Maze<'g> {
    grid: &'g Grid,
    removed: HashSet<Wall>,
    passages: HashSet<(Room, Room)>,
}

fn passage(a: Room, b: Room) -> (Room, Room) {
    if a <= b { (a, b) } else { (b, a) }
}

impl Maze<'_> {
    /// Walls removed by carving.
    #[must_use]
    pub fn removed_walls(&self) -> &HashSet<Wall> {
        &self.removed
    }

    /// Returns `true` when no wall separates `a` from `b`.
    #[must_use]
    pub fn is_open(&self, a: Room, b: Room) -> bool {
        self.passages.contains(&passage(a, b))
    }

    /// Draws the maze with `+`, `-` and `|`.
    ///
    /// # Examples
    /// ```
    /// use arbor_cli::maze::Grid;
    ///
    /// let grid = Grid::new(2, 1)?;
    /// let maze = grid.carve(7)?;
    /// assert_eq!(maze.render(), "+---+---+\n|       |\n+---+---+\n");
    /// # Ok::<(), arbor_cli::maze::MazeError>(())
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let (width, height) = (self.grid.width, self.grid.height);
        let mut out = String::new();
        out.push_str(&"+---".repeat(width));
        out.push_str("+\n");

        for row in 0..height {
            out.push('|');
            for col in 0..width {
                out.push_str("   ");
                let here = Room { row, col };
                let east = Room { row, col: col + 1 };
                let open = col + 1 < width && self.is_open(here, east);
                out.push(if open { ' ' } else { '|' });
            }
            out.push('\n');

            out.push('+');
            for col in 0..width {
                let here = Room { row, col };
                let south = Room { row: row + 1, col };
                let open = row + 1 < height && self.is_open(here, south);
                out.push_str(if open { "   " } else { "---" });
                out.push('+');
            }
            out.push('\n');
        }
        out
    }
}
