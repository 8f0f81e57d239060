//! Command-line interface orchestration for arbor.
//!
//! Three commands are offered: `mst` and `path` load a JSON graph file and
//! run the spanning-tree or shortest-path query over it, while `maze` carves
//! a random rectangular maze.

mod commands;
mod graph_file;

pub use commands::{
    Cli, CliError, Command, CommandOutput, MazeArgs, MazeSummary, MstArgs, PathArgs, PathSummary,
    TreeSummary, render_output, run_cli,
};
pub use graph_file::{EdgeRecord, GraphFile};
