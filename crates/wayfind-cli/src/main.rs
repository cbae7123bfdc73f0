use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wayfind_cli::commands::{
    check::handle_check_command, dijkstra::handle_dijkstra_command, maze::handle_maze_command,
    route::handle_route_command, verify::handle_verify_command, CommandContext, GraphKind,
};
use wayfind_cli::output::OutputFormat;
use wayfind_cli::terminal::ColorPalette;
use wayfind_lib::VertexId;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest paths with Dijkstra and A*")]
struct Cli {
    /// Format of the graph file passed with --graph.
    #[arg(long, global = true, value_enum, default_value_t = GraphKind::Coordinate)]
    kind: GraphKind,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Narrate the search on stderr as it runs.
    #[arg(long, global = true)]
    trace: bool,

    /// Pause after every search step while tracing (milliseconds).
    #[arg(long, global = true, default_value_t = 0)]
    frame_delay_ms: u64,

    /// Disable ANSI colors.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the distance from one vertex to every other vertex.
    Dijkstra {
        /// Graph file.
        #[arg(long)]
        graph: PathBuf,
        /// Source vertex id.
        #[arg(long)]
        source: VertexId,
    },
    /// Find a shortest path between two vertices with A*.
    Route {
        /// Graph file.
        #[arg(long)]
        graph: PathBuf,
        /// Source vertex id.
        #[arg(long = "from")]
        from: VertexId,
        /// Goal vertex id.
        #[arg(long = "to")]
        to: VertexId,
    },
    /// Check that the graph heuristic is consistent.
    Check {
        /// Graph file.
        #[arg(long)]
        graph: PathBuf,
        /// Only check towards this goal.
        #[arg(long)]
        goal: Option<VertexId>,
    },
    /// Compare A* against Dijkstra on vertex pairs of the graph.
    Verify {
        /// Graph file.
        #[arg(long)]
        graph: PathBuf,
        /// Check every pair even on large graphs.
        #[arg(long)]
        all: bool,
    },
    /// Generate, solve and draw a random maze.
    Maze {
        #[arg(long, default_value_t = 21)]
        width: usize,
        #[arg(long, default_value_t = 11)]
        height: usize,
        /// Seed for the generator; the same seed gives the same maze.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Also write the maze to this file in the maze graph format.
        #[arg(long)]
        save: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let ctx = CommandContext {
        kind: cli.kind,
        format: cli.format,
        palette: ColorPalette::for_flag(cli.no_color),
        trace: cli.trace,
        frame_delay: Duration::from_millis(cli.frame_delay_ms),
    };

    match cli.command {
        Command::Dijkstra { graph, source } => handle_dijkstra_command(&ctx, &graph, source),
        Command::Route { graph, from, to } => handle_route_command(&ctx, &graph, from, to),
        Command::Check { graph, goal } => handle_check_command(&ctx, &graph, goal),
        Command::Verify { graph, all } => handle_verify_command(&ctx, &graph, all),
        Command::Maze {
            width,
            height,
            seed,
            save,
        } => handle_maze_command(&ctx, width, height, seed, save.as_deref()),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
