//! CLI argument definitions for the dispatch workflow.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dispatch-studio",
    version,
    about = "Hospital ambulance dispatch workflow over flat data files",
    long_about = "Manage the hospital ambulance-dispatch workflow.\n\n\
                  Every dataset is a flat comma-delimited file in the data directory,\n\
                  rewritten in full after each change. Subcommands mirror the staff\n\
                  workflows: hospital management, patient records, user accounts,\n\
                  dispatch requests, emergency cases, and symptom triage."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the dispatch data files.
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = ".",
        global = true
    )]
    pub data_dir: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow patient-identifying values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate credentials and show the workflow the role routes to.
    Login(LoginArgs),

    /// Hospital directory management (admin workflow).
    #[command(subcommand)]
    Hospitals(HospitalCommand),

    /// Patient record workflows (receptionist, doctor, nurse).
    #[command(subcommand)]
    Patients(PatientCommand),

    /// User account administration (IT support workflow).
    #[command(subcommand)]
    Users(UserCommand),

    /// Ambulance dispatch queue (dispatcher workflow).
    #[command(subcommand)]
    Dispatch(DispatchCommand),

    /// Emergency case coordination (coordinator workflow).
    #[command(subcommand)]
    Emergency(EmergencyCommand),

    /// Classify symptoms and recommend transport, writing a dispatch report.
    Triage(TriageArgs),

    /// List the datasets this tool manages.
    Datasets,
}

#[derive(Parser)]
pub struct LoginArgs {
    pub username: String,
    pub password: String,
}

#[derive(Subcommand)]
pub enum HospitalCommand {
    /// Show the hospital directory.
    List,
    /// Add a hospital. All fields are required.
    Add {
        name: String,
        location: String,
        ambulances: String,
    },
    /// Replace a hospital row. Row indices are as shown by `list`.
    Update {
        row: usize,
        name: String,
        location: String,
        ambulances: String,
    },
    /// Remove a hospital row.
    Remove { row: usize },
}

#[derive(Subcommand)]
pub enum PatientCommand {
    /// Show all patient records.
    List,
    /// Register a patient. Diagnosis, prescription, and status start empty.
    Intake {
        name: String,
        age: u32,
        symptoms: String,
        contact: String,
    },
    /// Record diagnosis and prescription for a patient row.
    Diagnose {
        row: usize,
        diagnosis: String,
        prescription: String,
    },
    /// Update the status column of a patient row.
    SetStatus { row: usize, status: String },
    /// Find the first record whose name or symptoms contain the term.
    Search { term: String },
}

#[derive(Subcommand)]
pub enum UserCommand {
    /// Show all user accounts (first file line included, as stored).
    List,
    /// Add an account. The role value is stored as given; only login
    /// rejects roles outside the known set.
    Add {
        username: String,
        password: String,
        role: String,
    },
    /// Replace an account row.
    Update {
        row: usize,
        username: String,
        password: String,
        role: String,
    },
    /// Remove an account row.
    Remove { row: usize },
}

#[derive(Subcommand)]
pub enum DispatchCommand {
    /// Show the dispatch queue.
    List,
    /// Mark a request Dispatched.
    Send { row: usize },
    /// Mark a request Cancelled.
    Cancel { row: usize },
}

#[derive(Subcommand)]
pub enum EmergencyCommand {
    /// Show emergency cases, seeding the sample file on first use.
    List,
    /// Mark a case Resources Assigned.
    Assign { row: usize },
    /// Mark a case Closed.
    Close { row: usize },
}

#[derive(Parser)]
pub struct TriageArgs {
    pub name: String,
    pub age: u32,
    pub contact: String,
    pub symptoms: String,

    /// Report file path (default: <DATA_DIR>/dispatch_report.txt).
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Print the outcome as JSON instead of labeled lines.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
