//! Dispatch workflow CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use dispatch_cli::cli::{
    Cli, Command, DispatchCommand, EmergencyCommand, HospitalCommand, LogFormatArg, LogLevelArg,
    PatientCommand, UserCommand,
};
use dispatch_cli::commands;
use dispatch_cli::logging::{LogConfig, LogFormat, init_logging};
use dispatch_cli::summary::{print_datasets, print_table};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let data_dir = cli.data_dir.as_path();
    match &cli.command {
        Command::Login(args) => {
            let role = commands::login(data_dir, &args.username, &args.password)?;
            println!("Login successful. Role: {role}");
            println!("Routes to: {}", role.workflow());
        }
        Command::Hospitals(command) => match command {
            HospitalCommand::List => print_table(&commands::hospital_list(data_dir)),
            HospitalCommand::Add {
                name,
                location,
                ambulances,
            } => {
                let rows = commands::hospital_add(data_dir, name, location, ambulances)?;
                println!("Hospital added ({rows} on file).");
            }
            HospitalCommand::Update {
                row,
                name,
                location,
                ambulances,
            } => {
                commands::hospital_update(data_dir, *row, name, location, ambulances)?;
                println!("Hospital updated.");
            }
            HospitalCommand::Remove { row } => {
                let removed = commands::hospital_remove(data_dir, *row)?;
                println!(
                    "Removed {}.",
                    removed.first().map(String::as_str).unwrap_or_default()
                );
            }
        },
        Command::Patients(command) => match command {
            PatientCommand::List => print_table(&commands::patient_list(data_dir)),
            PatientCommand::Intake {
                name,
                age,
                symptoms,
                contact,
            } => {
                let rows = commands::patient_intake(data_dir, name, *age, symptoms, contact)?;
                println!("Patient registered ({rows} on file).");
            }
            PatientCommand::Diagnose {
                row,
                diagnosis,
                prescription,
            } => {
                commands::patient_diagnose(data_dir, *row, diagnosis, prescription)?;
                println!("Record updated.");
            }
            PatientCommand::SetStatus { row, status } => {
                commands::patient_set_status(data_dir, *row, status)?;
                println!("Patient status updated.");
            }
            PatientCommand::Search { term } => {
                match commands::patient_search(data_dir, term) {
                    Some((row, record)) => {
                        println!("Match at row {row}: {}", record.join(", "));
                    }
                    None => println!("No matching records found."),
                }
            }
        },
        Command::Users(command) => match command {
            UserCommand::List => print_table(&commands::user_list(data_dir)),
            UserCommand::Add {
                username,
                password,
                role,
            } => {
                let rows = commands::user_add(data_dir, username, password, role)?;
                println!("User added ({rows} on file).");
            }
            UserCommand::Update {
                row,
                username,
                password,
                role,
            } => {
                commands::user_update(data_dir, *row, username, password, role)?;
                println!("User updated.");
            }
            UserCommand::Remove { row } => {
                commands::user_remove(data_dir, *row)?;
                println!("User removed.");
            }
        },
        Command::Dispatch(command) => match command {
            DispatchCommand::List => print_table(&commands::dispatch_list(data_dir)),
            DispatchCommand::Send { row } => {
                commands::dispatch_send(data_dir, *row)?;
                println!("Ambulance dispatched.");
            }
            DispatchCommand::Cancel { row } => {
                commands::dispatch_cancel(data_dir, *row)?;
                println!("Dispatch cancelled.");
            }
        },
        Command::Emergency(command) => match command {
            EmergencyCommand::List => print_table(&commands::emergency_list(data_dir)?),
            EmergencyCommand::Assign { row } => {
                commands::emergency_assign(data_dir, *row)?;
                println!("Resources assigned.");
            }
            EmergencyCommand::Close { row } => {
                commands::emergency_close(data_dir, *row)?;
                println!("Emergency case closed.");
            }
        },
        Command::Triage(args) => {
            let outcome = commands::run_triage(data_dir, args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&outcome.report)?);
            } else {
                println!("{}", outcome.report.analysis);
                println!("Final Recommendation: {}", outcome.report.recommendation);
                println!("Report written to {}", outcome.report_path.display());
            }
        }
        Command::Datasets => print_datasets(),
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
