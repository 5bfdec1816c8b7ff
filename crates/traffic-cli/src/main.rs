use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use traffic_cli::{LaunchArgs, commands};

#[derive(Parser)]
#[command(name = "traffic")]
#[command(author, version, long_about = None)]
#[command(
    about = "Open a URL in a titled Chrome app window",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    launch: LaunchArgs,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completion scripts
    #[command(after_help = "SUPPORTED SHELLS:\n  \
        bash, zsh, fish, powershell, elvish\n\n\
        INSTALLATION:\n  \
        bash:  traffic completion --shell bash >> ~/.bashrc\n  \
        zsh:   traffic completion --shell zsh > \"${fpath[1]}/_traffic\"\n  \
        fish:  traffic completion --shell fish > ~/.config/fish/completions/traffic.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Completion { shell }) => {
            commands::completion::execute(shell, &mut Cli::command())
        }
        None => commands::launch::execute(cli.launch),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("traffic=debug,traffic_cli=debug,traffic_core=debug,traffic_browser=debug")
    } else {
        EnvFilter::new("traffic=info,traffic_cli=info,traffic_core=info,traffic_browser=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
