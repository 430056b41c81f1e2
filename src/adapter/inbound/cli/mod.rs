//! CLI module graph.

pub mod appointment;
pub mod command;
pub mod export;
pub mod init;
pub mod mechanic;
pub mod output;
pub mod record;
pub mod report;
pub mod session;
pub mod user;

use command::{
    AppointmentCommand, AssignmentCommand, Commands, ExportCommand, MechanicCommand,
    RecordCommand, ReportCommand, UserCommand,
};
use session::Session;

use crate::error::Result;

/// Run one parsed command against the session's database.
pub fn execute(session: &Session, command: Commands) -> Result<()> {
    match command {
        Commands::Init => init::execute(session),
        Commands::Record(command) => match command {
            RecordCommand::Add(args) => record::execute_add(session, args),
            RecordCommand::List(args) => record::execute_list(session, args),
            RecordCommand::Update(args) => record::execute_update(session, args),
        },
        Commands::Mechanic(command) => match command {
            MechanicCommand::Add(args) => mechanic::execute_add(session, args),
            MechanicCommand::List(args) => mechanic::execute_list(session, args),
            MechanicCommand::Update(args) => mechanic::execute_update(session, args),
            MechanicCommand::Delete(args) => mechanic::execute_delete(session, args),
        },
        Commands::Appointment(command) => match command {
            AppointmentCommand::Add(args) => appointment::execute_add(session, args),
            AppointmentCommand::List(args) => appointment::execute_list(session, args),
        },
        Commands::Assignment(command) => match command {
            AssignmentCommand::Add(args) => appointment::execute_assign(session, args),
            AssignmentCommand::List(args) => appointment::execute_assignments(session, args),
            AssignmentCommand::Complete(args) => appointment::execute_complete(session, args),
        },
        Commands::Export(command) => match command {
            ExportCommand::History(args) => export::execute_history(session, args),
            ExportCommand::All(args) => export::execute_all(session, args),
        },
        Commands::Report(command) => match command {
            ReportCommand::Count(args) => report::execute_count(session, args),
            ReportCommand::Dashboard(args) => report::execute_dashboard(session, args),
            ReportCommand::Vehicles(args) => report::execute_vehicles(session, args),
        },
        Commands::User(command) => match command {
            UserCommand::Add(args) => user::execute_add(session, args),
            UserCommand::Passwd(args) => user::execute_passwd(session, args),
        },
        Commands::Login(args) => user::execute_login(session, args),
    }
}
