use std::path::PathBuf;

mod add;
mod list;
mod menu;
mod terminal;
mod update;

use add::Add;
use clap::ArgAction;
use dispatcher::{Config, Store};
use list::List;
use menu::Menu;
use update::Update;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path of the data file (overrides the configuration)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = load_config();
        let path = self
            .file
            .unwrap_or_else(|| config.data_file().to_path_buf());
        let store = Store::open(path, config.capacity());

        self.command
            .unwrap_or_else(|| Command::Menu(Menu::default()))
            .run(store)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Loads `dispatcher.toml` from the working directory, falling back to the
/// defaults when it is absent or unreadable.
fn load_config() -> Config {
    let path = std::path::Path::new("dispatcher.toml");
    Config::load(path).unwrap_or_else(|e| {
        tracing::debug!("Failed to load config: {e}");
        Config::default()
    })
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Run the interactive menu (default)
    Menu(Menu),

    /// Record a new emergency
    Add(Add),

    /// Update the status of a recorded emergency
    Update(Update),

    /// List recorded emergencies
    List(List),
}

impl Command {
    fn run(self, store: Store) -> anyhow::Result<()> {
        match self {
            Self::Menu(command) => command.run(store),
            Self::Add(command) => command.run(store),
            Self::Update(command) => command.run(store),
            Self::List(command) => command.run(&store),
        }
    }
}
