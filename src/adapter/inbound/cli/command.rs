//! Command-line interface definitions.
//!
//! Defines the CLI structure for the servicebay operator tool using `clap`.
//! Every subcommand works against the database named by the configuration
//! file or the `--database` override.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Vehicle service records for dealership service centers
#[derive(Parser, Debug)]
#[command(name = "servicebay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file (optional)
    #[arg(short, long, global = true, default_value = "servicebay.toml")]
    pub config: PathBuf,

    /// Database file, overriding the configuration
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the database, apply the schema and ensure the admin account
    Init,

    /// Manage service records
    #[command(subcommand)]
    Record(RecordCommand),

    /// Manage mechanics
    #[command(subcommand)]
    Mechanic(MechanicCommand),

    /// Manage appointments
    #[command(subcommand)]
    Appointment(AppointmentCommand),

    /// Assign mechanics to appointments
    #[command(subcommand)]
    Assignment(AssignmentCommand),

    /// Export service records to CSV
    #[command(subcommand)]
    Export(ExportCommand),

    /// Counts, dashboard metrics and vehicle summaries
    #[command(subcommand)]
    Report(ReportCommand),

    /// Manage user accounts
    #[command(subcommand)]
    User(UserCommand),

    /// Check a username and password
    Login(LoginArgs),
}

/// Subcommands for `servicebay record`.
#[derive(Subcommand, Debug)]
pub enum RecordCommand {
    /// Add a service record
    Add(RecordArgs),
    /// List a vehicle's service records, newest first
    List(VinArg),
    /// Replace every field of an existing record
    Update(RecordUpdateArgs),
}

/// Subcommands for `servicebay mechanic`.
#[derive(Subcommand, Debug)]
pub enum MechanicCommand {
    /// Add a mechanic
    Add(MechanicArgs),
    /// List mechanics by name
    List(MechanicListArgs),
    /// Replace a mechanic's name, skill and active flag
    Update(MechanicUpdateArgs),
    /// Delete a mechanic (assignments keep the dangling id)
    Delete(IdArg),
}

/// Subcommands for `servicebay appointment`.
#[derive(Subcommand, Debug)]
pub enum AppointmentCommand {
    /// Book an appointment
    Add(AppointmentArgs),
    /// List a vehicle's appointments, latest first
    List(VinArg),
}

/// Subcommands for `servicebay assignment`.
#[derive(Subcommand, Debug)]
pub enum AssignmentCommand {
    /// Assign a mechanic to an appointment
    Add(AssignmentArgs),
    /// List a mechanic's assignments, latest first
    List(MechanicIdArg),
    /// Mark an assignment as completed
    Complete(AssignmentCompleteArgs),
}

/// Subcommands for `servicebay export`.
#[derive(Subcommand, Debug)]
pub enum ExportCommand {
    /// Export one vehicle's service history
    History(ExportHistoryArgs),
    /// Export every service record
    All(OutputArg),
}

/// Subcommands for `servicebay report`.
#[derive(Subcommand, Debug)]
pub enum ReportCommand {
    /// Count service records within a date range
    Count(DateRangeArgs),
    /// Show dashboard counters and recent service records
    Dashboard(DashboardArgs),
    /// One row per vehicle with last and next service
    Vehicles(VehicleReportArgs),
}

/// Subcommands for `servicebay user`.
#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Create a user account
    Add(CredentialArgs),
    /// Change a user's password
    Passwd(CredentialArgs),
}

/// A single vehicle identification number.
#[derive(Args, Debug)]
pub struct VinArg {
    /// Vehicle identification number (matched exactly)
    pub vin: String,
}

/// A single row id.
#[derive(Args, Debug)]
pub struct IdArg {
    /// Row id
    pub id: i32,
}

/// A mechanic id.
#[derive(Args, Debug)]
pub struct MechanicIdArg {
    /// Mechanic id
    pub mechanic_id: i32,
}

/// Fields of a service record.
#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Vehicle identification number
    #[arg(long)]
    pub vin: String,

    /// Customer name
    #[arg(long)]
    pub customer: String,

    /// Service date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Work performed
    #[arg(long)]
    pub description: String,

    /// Mechanic who did the work
    #[arg(long)]
    pub mechanic: String,
}

/// Arguments for `record update`.
#[derive(Args, Debug)]
pub struct RecordUpdateArgs {
    /// Id of the record to replace
    pub id: i32,

    #[command(flatten)]
    pub record: RecordArgs,
}

/// Fields of a mechanic.
#[derive(Args, Debug)]
pub struct MechanicArgs {
    /// Full name
    pub name: String,

    /// Specialty, e.g. "Engine" or "Brakes"
    #[arg(long)]
    pub skill: String,

    /// Record the mechanic as inactive
    #[arg(long)]
    pub inactive: bool,
}

/// Arguments for `mechanic list`.
#[derive(Args, Debug)]
pub struct MechanicListArgs {
    /// Only list active mechanics
    #[arg(long)]
    pub active: bool,
}

/// Arguments for `mechanic update`.
#[derive(Args, Debug)]
pub struct MechanicUpdateArgs {
    /// Id of the mechanic to replace
    pub id: i32,

    #[command(flatten)]
    pub mechanic: MechanicArgs,
}

/// Fields of an appointment.
#[derive(Args, Debug)]
pub struct AppointmentArgs {
    /// Vehicle identification number
    #[arg(long)]
    pub vin: String,

    /// Customer name
    #[arg(long)]
    pub customer: String,

    /// Date and time, e.g. 2025-09-20T09:00:00
    #[arg(long)]
    pub at: String,

    /// Status text (scheduled, in_progress, done, cancelled)
    #[arg(long, default_value = "scheduled")]
    pub status: String,
}

/// Fields of an assignment.
#[derive(Args, Debug)]
pub struct AssignmentArgs {
    /// Appointment id
    #[arg(long)]
    pub appointment: i32,

    /// Mechanic id
    #[arg(long)]
    pub mechanic: i32,

    /// Assignment time (defaults to now)
    #[arg(long)]
    pub at: Option<String>,
}

/// Arguments for `assignment complete`.
#[derive(Args, Debug)]
pub struct AssignmentCompleteArgs {
    /// Assignment id
    pub id: i32,

    /// Completion time (defaults to now)
    #[arg(long)]
    pub at: Option<String>,
}

/// Destination of a CSV export.
#[derive(Args, Debug)]
pub struct OutputArg {
    /// Output file (defaults to a file in the configured export directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `export history`.
#[derive(Args, Debug)]
pub struct ExportHistoryArgs {
    /// Vehicle identification number
    pub vin: String,

    #[command(flatten)]
    pub output: OutputArg,
}

/// Inclusive date range; both ends default to the current calendar year.
#[derive(Args, Debug)]
pub struct DateRangeArgs {
    /// First day, YYYY-MM-DD
    #[arg(long)]
    pub from: Option<String>,

    /// Last day, YYYY-MM-DD
    #[arg(long)]
    pub to: Option<String>,
}

/// Arguments for `report dashboard`.
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Number of recent service records to show
    #[arg(long, default_value = "5")]
    pub recent: i64,
}

/// Filters for `report vehicles`.
#[derive(Args, Debug)]
pub struct VehicleReportArgs {
    /// Substring of the VIN
    #[arg(long)]
    pub vin: Option<String>,

    /// Earliest last-service date, YYYY-MM-DD
    #[arg(long)]
    pub from: Option<String>,

    /// Latest last-service date, YYYY-MM-DD
    #[arg(long)]
    pub to: Option<String>,

    /// Substring of the mechanic's name, case-insensitive
    #[arg(long)]
    pub mechanic: Option<String>,

    /// Only vehicles that are due for service
    #[arg(long)]
    pub due: bool,
}

/// A username with an optional password.
#[derive(Args, Debug)]
pub struct CredentialArgs {
    /// Username
    pub username: String,

    /// Password (prompted for when omitted)
    #[arg(long)]
    pub password: Option<String>,
}

/// Arguments for `login`.
#[derive(Args, Debug)]
pub struct LoginArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "servicebay");
    }

    // Tests for global options

    #[test]
    fn test_global_defaults() {
        let cli = Cli::try_parse_from(["servicebay", "init"]).unwrap();
        assert!(matches!(cli.command, Commands::Init));
        assert_eq!(cli.config, PathBuf::from("servicebay.toml"));
        assert!(cli.database.is_none());
        assert!(cli.log_level.is_none());
        assert!(!cli.json_logs);
        assert!(!cli.json);
        assert!(!cli.quiet);
        assert!(matches!(cli.color, ColorChoice::Auto));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "servicebay",
            "report",
            "dashboard",
            "--database",
            "shop.db",
            "--json",
            "-q",
            "--color",
            "never",
        ])
        .unwrap();
        assert_eq!(cli.database, Some(PathBuf::from("shop.db")));
        assert!(cli.json);
        assert!(cli.quiet);
        assert!(matches!(cli.color, ColorChoice::Never));
    }

    // Tests for subcommand parsing

    #[test]
    fn test_record_add_date_is_optional() {
        let cli = Cli::try_parse_from([
            "servicebay",
            "record",
            "add",
            "--vin",
            "JT123TESTVIN00001",
            "--customer",
            "John Doe",
            "--description",
            "Oil change",
            "--mechanic",
            "A. Mechanic",
        ])
        .unwrap();
        match cli.command {
            Commands::Record(RecordCommand::Add(args)) => {
                assert_eq!(args.vin, "JT123TESTVIN00001");
                assert!(args.date.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_record_update_takes_id_and_fields() {
        let cli = Cli::try_parse_from([
            "servicebay",
            "record",
            "update",
            "7",
            "--vin",
            "V",
            "--customer",
            "C",
            "--date",
            "2025-01-01",
            "--description",
            "D",
            "--mechanic",
            "M",
        ])
        .unwrap();
        match cli.command {
            Commands::Record(RecordCommand::Update(args)) => {
                assert_eq!(args.id, 7);
                assert_eq!(args.record.date.as_deref(), Some("2025-01-01"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_appointment_status_defaults_to_scheduled() {
        let cli = Cli::try_parse_from([
            "servicebay",
            "appointment",
            "add",
            "--vin",
            "V",
            "--customer",
            "C",
            "--at",
            "2025-09-20T09:00:00",
        ])
        .unwrap();
        match cli.command {
            Commands::Appointment(AppointmentCommand::Add(args)) => {
                assert_eq!(args.status, "scheduled");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_mechanic_add_is_active_unless_flagged() {
        let cli =
            Cli::try_parse_from(["servicebay", "mechanic", "add", "Jane", "--skill", "Engine"])
                .unwrap();
        match cli.command {
            Commands::Mechanic(MechanicCommand::Add(args)) => assert!(!args.inactive),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_report_vehicles_filters() {
        let cli = Cli::try_parse_from([
            "servicebay",
            "report",
            "vehicles",
            "--vin",
            "JT",
            "--mechanic",
            "jane",
            "--due",
        ])
        .unwrap();
        match cli.command {
            Commands::Report(ReportCommand::Vehicles(args)) => {
                assert_eq!(args.vin.as_deref(), Some("JT"));
                assert_eq!(args.mechanic.as_deref(), Some("jane"));
                assert!(args.due);
                assert!(args.from.is_none() && args.to.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_login_password_is_optional() {
        let cli = Cli::try_parse_from(["servicebay", "login", "admin"]).unwrap();
        match cli.command {
            Commands::Login(args) => {
                assert_eq!(args.credentials.username, "admin");
                assert!(args.credentials.password.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        let result = Cli::try_parse_from(["servicebay", "mechanic", "delete", "seven"]);
        assert!(result.is_err());
    }
}
