//! Command-line front end for the Dungeonwright dungeon editor.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use dw_core::{CellPos, Color, Direction};
use dw_edit::ToolKind;

#[derive(Parser)]
#[command(
    name = "dw",
    about = "Dungeonwright: edit tile dungeons from the command line",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log edits and history activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty world file
    Init {
        /// World file to create
        file: PathBuf,

        /// Display name of the world
        #[arg(short, long)]
        name: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show counts, bounds and counters of a world
    Info {
        /// World file
        file: PathBuf,
    },

    /// List rooms with their member counts
    Rooms {
        /// World file
        file: PathBuf,
    },

    /// Run a drawing gesture and save the result
    Draw {
        /// Tool to draw with
        tool: DrawTool,

        /// World file
        file: PathBuf,

        #[command(flatten)]
        gesture: GestureArgs,

        /// Color for the new geometry (#rrggbb)
        #[arg(short, long)]
        color: Option<Color>,

        /// Room to select before drawing (floor tool)
        #[arg(short, long)]
        room: Option<String>,
    },

    /// Run an eraser gesture and save the result
    Erase {
        /// What to erase
        target: EraseTarget,

        /// World file
        file: PathBuf,

        #[command(flatten)]
        gesture: GestureArgs,
    },

    /// Change the state of one door
    Door {
        /// World file
        file: PathBuf,

        /// Cell the door belongs to (x,y,z)
        #[arg(long, allow_hyphen_values = true)]
        at: CellPos,

        /// Side of the cell (north, south, east, west)
        #[arg(short, long)]
        edge: Direction,

        /// What to do with the door
        #[arg(value_enum)]
        action: DoorAction,
    },

    /// Manage rooms
    Room {
        #[command(subcommand)]
        command: RoomCommand,
    },
}

#[derive(clap::Args)]
struct GestureArgs {
    /// Anchor cell (x,y,z)
    #[arg(long, allow_hyphen_values = true)]
    from: CellPos,

    /// Release cell (x,y,z); defaults to the anchor
    #[arg(long, allow_hyphen_values = true)]
    to: Option<CellPos>,

    /// Edge of the anchor cell (north, south, east, west)
    #[arg(short, long)]
    edge: Option<Direction>,
}

#[derive(Subcommand)]
enum RoomCommand {
    /// Create an empty room
    New {
        /// World file
        file: PathBuf,
        /// Room name
        name: String,
    },
    /// Make a room current for the floor tool
    Select {
        /// World file
        file: PathBuf,
        /// Room id
        id: String,
    },
    /// Delete a room (its geometry stays)
    Delete {
        /// World file
        file: PathBuf,
        /// Room id
        id: String,
    },
    /// Rename a room
    Rename {
        /// World file
        file: PathBuf,
        /// Room id
        id: String,
        /// New name
        name: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DrawTool {
    Wall,
    Floor,
    Door,
    Room,
}

impl From<DrawTool> for ToolKind {
    fn from(tool: DrawTool) -> Self {
        match tool {
            DrawTool::Wall => ToolKind::Wall,
            DrawTool::Floor => ToolKind::Floor,
            DrawTool::Door => ToolKind::Door,
            DrawTool::Room => ToolKind::Room,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum EraseTarget {
    Wall,
    Floor,
    Door,
}

impl From<EraseTarget> for ToolKind {
    fn from(target: EraseTarget) -> Self {
        match target {
            EraseTarget::Wall => ToolKind::EraseWall,
            EraseTarget::Floor => ToolKind::EraseFloor,
            EraseTarget::Door => ToolKind::EraseDoor,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DoorAction {
    Toggle,
    Lock,
    Unlock,
    Cycle,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(level)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Init { file, name, force } => commands::init::run(&file, name.as_deref(), force),
        Commands::Info { file } => commands::info::run(&file),
        Commands::Rooms { file } => commands::rooms::run(&file),
        Commands::Draw {
            tool,
            file,
            gesture,
            color,
            room,
        } => commands::draw::run(
            &file,
            tool.into(),
            &gesture.into(),
            color,
            room.as_deref(),
        ),
        Commands::Erase {
            target,
            file,
            gesture,
        } => commands::draw::run(&file, target.into(), &gesture.into(), None, None),
        Commands::Door {
            file,
            at,
            edge,
            action,
        } => commands::door::run(&file, at.edge(edge), action.into()),
        Commands::Room { command } => match command {
            RoomCommand::New { file, name } => commands::room::create(&file, &name),
            RoomCommand::Select { file, id } => commands::room::select(&file, &id),
            RoomCommand::Delete { file, id } => commands::room::delete(&file, &id),
            RoomCommand::Rename { file, id, name } => commands::room::rename(&file, &id, &name),
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

impl From<GestureArgs> for commands::draw::Stroke {
    fn from(args: GestureArgs) -> Self {
        Self {
            from: args.from,
            to: args.to.unwrap_or(args.from),
            edge: args.edge,
        }
    }
}

impl From<DoorAction> for commands::door::Action {
    fn from(action: DoorAction) -> Self {
        match action {
            DoorAction::Toggle => Self::Toggle,
            DoorAction::Lock => Self::Lock,
            DoorAction::Unlock => Self::Unlock,
            DoorAction::Cycle => Self::Cycle,
        }
    }
}
