mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::settings::SettingsSubcommand;
use papa_core::resolver::Direction;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "papa",
    about = "Project Papa — dagelijkse zwangerschapsgids voor aanstaande vaders",
    version,
    propagate_version = true
)]
struct Cli {
    /// Data root (default: existing .papa/ upward from cwd, else home dir)
    #[arg(long, global = true, env = "PAPA_HOME")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the onboarding questionnaire
    Setup {
        /// Overwrite an existing profile
        #[arg(long)]
        force: bool,

        /// Due date (YYYY-MM-DD); providing this skips the interactive flow
        #[arg(long)]
        due_date: Option<String>,

        /// What you usually call her
        #[arg(long)]
        partner_name: Option<String>,

        /// first_clueless | veteran | first_warned
        #[arg(long)]
        first_time: Option<String>,

        /// normal_again | money | good_father | freedom | everything
        #[arg(long)]
        biggest_worry: Option<String>,

        /// agree_nod | hide | chocolate | figuring_out
        #[arg(long)]
        hormonal_approach: Option<String>,

        /// spreadsheet | go_with_flow | balanced
        #[arg(long)]
        planning_style: Option<String>,

        /// Baby name (empty for "de kleine")
        #[arg(long)]
        baby_name: Option<String>,

        /// Your name (empty for "maat")
        #[arg(long)]
        user_name: Option<String>,
    },

    /// Show today's content
    Today,

    /// Show a specific day (1-based)
    Day { number: u32 },

    /// Go one day forward
    Next,

    /// Go one day back
    Prev,

    /// Show profile and progress summary
    Status,

    /// View or edit the saved profile
    Settings {
        #[command(subcommand)]
        subcommand: SettingsSubcommand,
    },

    /// Delete the profile and start over
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Launch the web app
    Ui {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "0")]
        port: u16,

        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Ui { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Setup {
            force,
            due_date,
            partner_name,
            first_time,
            biggest_worry,
            hormonal_approach,
            planning_style,
            baby_name,
            user_name,
        } => cmd::setup::run(
            &root,
            cmd::setup::SetupArgs {
                force,
                due_date,
                partner_name,
                first_time,
                biggest_worry,
                hormonal_approach,
                planning_style,
                baby_name,
                user_name,
            },
            cli.json,
        ),
        Commands::Today => cmd::today::run(&root, cli.json),
        Commands::Day { number } => cmd::day::run(&root, number, cli.json),
        Commands::Next => cmd::nav::run(&root, Direction::Forward, cli.json),
        Commands::Prev => cmd::nav::run(&root, Direction::Back, cli.json),
        Commands::Status => cmd::status::run(&root, cli.json),
        Commands::Settings { subcommand } => cmd::settings::run(&root, subcommand, cli.json),
        Commands::Reset { yes } => cmd::reset::run(&root, yes),
        Commands::Ui { port, no_open } => cmd::ui::run(&root, port, no_open),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
