use anyhow::Result;
use clap::{Parser, Subcommand};

use studesk::auth::Session;
use studesk::cli::{
    handle_attendance_command, handle_export_command, handle_grades_command,
    handle_homework_command, handle_reports_command, AttendanceArgs, ExportArgs, GradesArgs,
    HomeworkCommands, ReportsArgs,
};
use studesk::config::{paths::StudeskPaths, settings::Settings};
use studesk::data::Dataset;

#[derive(Parser)]
#[command(
    name = "studesk",
    author = "Saad Ahmed",
    version,
    about = "Terminal-based student dashboard",
    long_about = "Studesk is a terminal-based student dashboard. It renders \
                  attendance, grades, homework, and reports through an \
                  interactive TUI and a set of CLI subcommands, with \
                  month-by-month navigation, filtering, and search."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// Show attendance records for a month
    Attendance(AttendanceArgs),

    /// Show grades for a month
    Grades(GradesArgs),

    /// Homework commands
    #[command(subcommand, alias = "hw")]
    Homework(HomeworkCommands),

    /// Browse generated reports
    Reports(ReportsArgs),

    /// Export records as CSV, JSON, or YAML
    Export(ExportArgs),

    /// Sign in (any non-empty credentials are accepted)
    Login {
        /// Name to sign in with (defaults to the configured student name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Sign out and clear the session
    Logout,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = StudeskPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Regenerate the dataset for this run
    let data = Dataset::for_today();

    match cli.command {
        Some(Commands::Tui) => {
            studesk::tui::run_tui(settings, &paths, data)?;
        }
        Some(Commands::Attendance(args)) => {
            handle_attendance_command(&data, args)?;
        }
        Some(Commands::Grades(args)) => {
            handle_grades_command(&data, args)?;
        }
        Some(Commands::Homework(cmd)) => {
            handle_homework_command(&data, cmd)?;
        }
        Some(Commands::Reports(args)) => {
            handle_reports_command(&data, args)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&data, args)?;
        }
        Some(Commands::Login { name }) => {
            let name = name.unwrap_or_else(|| settings.student_name.clone());
            let password = rpassword::prompt_password("Password: ")?;
            let session = Session::login(&paths, &name, &password)?;
            println!("Signed in as {}.", session.student_name);
        }
        Some(Commands::Logout) => {
            Session::logout(&paths)?;
            println!("Signed out.");
        }
        Some(Commands::Config) => {
            println!("Studesk Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            println!("Settings:");
            println!("  Student: {} <{}>", settings.student_name, settings.email);
            println!("  Grade level: {}", settings.grade_level);
            println!("  Theme: {:?}", settings.theme);
            println!("  Email digest: {:?}", settings.email_digest);
            println!(
                "  Signed in: {}",
                if Session::is_authenticated(&paths) {
                    "yes"
                } else {
                    "no"
                }
            );
        }
        None => {
            println!("Studesk - Terminal-based student dashboard");
            println!();
            println!("Run 'studesk --help' for usage information.");
            println!("Run 'studesk tui' to launch the interactive dashboard.");
        }
    }

    Ok(())
}
