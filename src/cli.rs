use clap::Parser;

/// Command-line interface.
///
/// The two source locations and the table-position selector are fixed
/// constants in `rolecheck`; the CLI only controls output verbosity.
#[derive(Parser)]
#[command(name = "rolediff")]
#[command(version)]
#[command(
    about = "Compare predefined RBAC roles between the Customer Portal docs and rbac-config",
    long_about = None
)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}
