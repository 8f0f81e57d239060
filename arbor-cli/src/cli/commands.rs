//! Command implementations and argument parsing for the arbor CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use arbor_core::{Edge, GraphError};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use crate::maze::{Grid, MazeError};

use super::graph_file::{EdgeRecord, GraphFile};

const DEFAULT_MAZE_SIDE: usize = 8;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "arbor",
    about = "Spanning trees, shortest paths and mazes over weighted graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute a minimum spanning tree of a JSON graph file.
    Mst(MstArgs),
    /// Compute a shortest path between two vertices of a JSON graph file.
    Path(PathArgs),
    /// Carve a random maze with Kruskal's algorithm.
    Maze(MazeArgs),
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstArgs {
    /// Path to the JSON graph file.
    pub path: PathBuf,

    /// Return a spanning forest instead of failing on disconnected graphs.
    #[arg(long)]
    pub forest: bool,
}

/// Options accepted by the `path` command.
#[derive(Debug, Args, Clone)]
pub struct PathArgs {
    /// Path to the JSON graph file.
    pub path: PathBuf,

    /// Vertex the path starts from.
    #[arg(long)]
    pub from: String,

    /// Vertex the path ends at.
    #[arg(long)]
    pub to: String,
}

/// Options accepted by the `maze` command.
#[derive(Debug, Args, Clone)]
pub struct MazeArgs {
    /// Number of columns.
    #[arg(long, default_value_t = DEFAULT_MAZE_SIDE)]
    pub width: usize,

    /// Number of rows.
    #[arg(long, default_value_t = DEFAULT_MAZE_SIDE)]
    pub height: usize,

    /// Seed for the wall weights; drawn at random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The graph file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph file is not a valid JSON graph document.
    #[error("failed to parse `{path}`: {source}")]
    Parse {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying decoding error.
        #[source]
        source: serde_json::Error,
    },
    /// Graph construction or a graph query failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Maze construction failed.
    #[error(transparent)]
    Maze(#[from] MazeError),
}

impl CliError {
    /// Stable code of the underlying graph error, if there is one.
    #[must_use]
    pub fn graph_code(&self) -> Option<&'static str> {
        match self {
            Self::Graph(err) | Self::Maze(MazeError::Graph(err)) => Some(err.code().as_str()),
            _ => None,
        }
    }
}

/// Spanning tree (or forest) selected by the `mst` command.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeSummary {
    /// Accepted edges in acceptance order.
    pub edges: Vec<EdgeRecord>,
    /// Sum of the accepted edge weights.
    pub total_weight: f64,
    /// Connected components spanned.
    pub components: usize,
}

/// Route found by the `path` command.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSummary {
    /// Vertices from start to end, inclusive.
    pub vertices: Vec<String>,
    /// Sum of the traversed edge weights.
    pub total_weight: f64,
}

/// Maze carved by the `maze` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeSummary {
    /// Seed that reproduces the maze.
    pub seed: u64,
    /// Number of walls knocked down.
    pub removed_walls: usize,
    /// ASCII drawing of the maze.
    pub rendered: String,
}

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Output of `mst`.
    Tree(TreeSummary),
    /// Output of `path`.
    Path(PathSummary),
    /// Output of `maze`.
    Maze(MazeSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the input or running the query fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, Command, CommandOutput, PathArgs, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(
///     file.path(),
///     r#"{"vertices": ["a", "b", "c"],
///         "edges": [{"from": "a", "to": "b", "weight": 1.0},
///                   {"from": "b", "to": "c", "weight": 2.0},
///                   {"from": "a", "to": "c", "weight": 5.0}]}"#,
/// )?;
/// let cli = Cli {
///     command: Command::Path(PathArgs {
///         path: file.path().to_path_buf(),
///         from: "a".into(),
///         to: "c".into(),
///     }),
/// };
/// let CommandOutput::Path(summary) = run_cli(cli)? else {
///     unreachable!("path command yields a path");
/// };
/// assert_eq!(summary.vertices, ["a", "b", "c"]);
/// assert_eq!(summary.total_weight, 3.0);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<CommandOutput, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Mst(args) => {
            span.record("command", field::display("mst"));
            run_mst(args).map(CommandOutput::Tree)
        }
        Command::Path(args) => {
            span.record("command", field::display("path"));
            run_path(args).map(CommandOutput::Path)
        }
        Command::Maze(args) => {
            span.record("command", field::display("maze"));
            run_maze(args).map(CommandOutput::Maze)
        }
    }
}

#[instrument(name = "cli.mst", err, skip(args), fields(path = %args.path.display(), forest = args.forest))]
pub(super) fn run_mst(args: MstArgs) -> Result<TreeSummary, CliError> {
    let graph = GraphFile::load(&args.path)?.into_graph()?;
    let forest = if args.forest {
        graph.minimum_spanning_forest()?
    } else {
        graph.find_minimum_spanning_tree()?
    };
    info!(
        edges = forest.len(),
        components = forest.component_count(),
        "spanning tree computed"
    );
    Ok(TreeSummary {
        total_weight: forest.total_weight(),
        components: forest.component_count(),
        edges: forest.into_edges().into_iter().cloned().collect(),
    })
}

#[instrument(name = "cli.path", err, skip(args), fields(path = %args.path.display()))]
pub(super) fn run_path(args: PathArgs) -> Result<PathSummary, CliError> {
    let graph = GraphFile::load(&args.path)?.into_graph()?;
    let route = graph.find_shortest_path_between(&args.from, &args.to)?;
    info!(hops = route.len(), "shortest path computed");
    Ok(PathSummary {
        vertices: route.vertices().into_iter().cloned().collect(),
        total_weight: route.total_weight(),
    })
}

#[instrument(name = "cli.maze", err, skip(args), fields(seed = field::Empty))]
pub(super) fn run_maze(args: MazeArgs) -> Result<MazeSummary, CliError> {
    let seed = args.seed.unwrap_or_else(rand::random);
    Span::current().record("seed", seed);
    let grid = Grid::new(args.width, args.height)?;
    let maze = grid.carve(seed)?;
    info!(
        width = grid.width(),
        height = grid.height(),
        "maze carved"
    );
    Ok(MazeSummary {
        seed,
        removed_walls: maze.removed_walls().len(),
        rendered: maze.render(),
    })
}

/// Renders `output` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{CommandOutput, PathSummary, render_output};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let output = CommandOutput::Path(PathSummary {
///     vertices: vec!["a".into(), "b".into()],
///     total_weight: 1.5,
/// });
/// let mut buffer = Vec::new();
/// render_output(&output, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "total weight: 1.5\na -> b\n");
/// # Ok(())
/// # }
/// ```
pub fn render_output(output: &CommandOutput, mut writer: impl Write) -> io::Result<()> {
    match output {
        CommandOutput::Tree(tree) => {
            writeln!(writer, "total weight: {}", tree.total_weight)?;
            writeln!(writer, "components: {}", tree.components)?;
            for edge in &tree.edges {
                writeln!(
                    writer,
                    "{}\t{}\t{}",
                    edge.vertex1(),
                    edge.vertex2(),
                    edge.weight()
                )?;
            }
        }
        CommandOutput::Path(path) => {
            writeln!(writer, "total weight: {}", path.total_weight)?;
            writeln!(writer, "{}", path.vertices.join(" -> "))?;
        }
        CommandOutput::Maze(maze) => {
            writeln!(writer, "seed: {}", maze.seed)?;
            write!(writer, "{}", maze.rendered)?;
        }
    }
    Ok(())
}
