//! Store-backed workflow operations behind each subcommand.
//!
//! Every mutation follows the same cycle: load the dataset file, validate
//! the operation's required fields, mutate in memory, persist the whole
//! file. Results come back as values; printing stays in `main`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use dispatch_auth::AccountDirectory;
use dispatch_model::dataset::{dispatch_requests, emergency_cases, patients};
use dispatch_model::{Dataset, Role};
use dispatch_store::{Table, ensure_seeded, require_non_empty};
use dispatch_triage::DispatchReport;

use crate::cli::TriageArgs;
use crate::logging::redact_value;

/// Status stamped on a dispatch request when an ambulance is sent.
pub const STATUS_DISPATCHED: &str = "Dispatched";
/// Status stamped on a dispatch request when it is withdrawn.
pub const STATUS_CANCELLED: &str = "Cancelled";
/// Status stamped on an emergency case when resources are assigned.
pub const STATUS_RESOURCES_ASSIGNED: &str = "Resources Assigned";
/// Status stamped on an emergency case when it is closed.
pub const STATUS_CLOSED: &str = "Closed";

/// Default report file name inside the data directory.
pub const REPORT_FILE: &str = "dispatch_report.txt";

fn dataset_path(data_dir: &Path, dataset: Dataset) -> PathBuf {
    data_dir.join(dataset.file_name())
}

fn load(data_dir: &Path, dataset: Dataset) -> Table {
    Table::load(&dataset_path(data_dir, dataset), dataset.columns())
}

fn persist(table: &Table, data_dir: &Path, dataset: Dataset) -> Result<()> {
    table
        .persist(&dataset_path(data_dir, dataset))
        .with_context(|| format!("save {dataset}"))
}

// ---------------------------------------------------------------------------
// Login

pub fn login(data_dir: &Path, username: &str, password: &str) -> Result<Role> {
    let path = dataset_path(data_dir, Dataset::Users);
    let directory = AccountDirectory::load(&path)?;
    let role = directory.authenticate(username, password)?;
    info!(user = username, %role, "login successful");
    Ok(role)
}

// ---------------------------------------------------------------------------
// Hospitals (admin workflow)

pub fn hospital_list(data_dir: &Path) -> Table {
    load(data_dir, Dataset::Hospitals)
}

pub fn hospital_add(
    data_dir: &Path,
    name: &str,
    location: &str,
    ambulances: &str,
) -> Result<usize> {
    require_non_empty([
        ("Hospital Name", name),
        ("Location", location),
        ("Ambulances", ambulances),
    ])?;
    let mut table = load(data_dir, Dataset::Hospitals);
    table.append(vec![name.into(), location.into(), ambulances.into()]);
    persist(&table, data_dir, Dataset::Hospitals)?;
    info!(rows = table.len(), "hospital added");
    Ok(table.len())
}

pub fn hospital_update(
    data_dir: &Path,
    row: usize,
    name: &str,
    location: &str,
    ambulances: &str,
) -> Result<()> {
    require_non_empty([
        ("Hospital Name", name),
        ("Location", location),
        ("Ambulances", ambulances),
    ])?;
    let mut table = load(data_dir, Dataset::Hospitals);
    table.update_at(
        row,
        &[
            (0, name.to_string()),
            (1, location.to_string()),
            (2, ambulances.to_string()),
        ],
    )?;
    persist(&table, data_dir, Dataset::Hospitals)?;
    info!(row, "hospital updated");
    Ok(())
}

pub fn hospital_remove(data_dir: &Path, row: usize) -> Result<Vec<String>> {
    let mut table = load(data_dir, Dataset::Hospitals);
    let removed = table.remove_at(row)?;
    persist(&table, data_dir, Dataset::Hospitals)?;
    info!(row, rows = table.len(), "hospital removed");
    Ok(removed)
}

// ---------------------------------------------------------------------------
// Patients (receptionist, doctor, nurse workflows)

pub fn patient_list(data_dir: &Path) -> Table {
    load(data_dir, Dataset::Patients)
}

/// Register a patient. The record carries the full seven-column schema;
/// diagnosis, prescription, and status are filled in by later workflows.
pub fn patient_intake(
    data_dir: &Path,
    name: &str,
    age: u32,
    symptoms: &str,
    contact: &str,
) -> Result<usize> {
    require_non_empty([("Name", name), ("Symptoms", symptoms), ("Contact", contact)])?;
    let mut table = load(data_dir, Dataset::Patients);
    let mut record = vec![
        name.to_string(),
        age.to_string(),
        symptoms.to_string(),
        contact.to_string(),
    ];
    record.resize(Dataset::Patients.columns().len(), String::new());
    table.append(record);
    persist(&table, data_dir, Dataset::Patients)?;
    info!(patient = redact_value(name), rows = table.len(), "patient registered");
    Ok(table.len())
}

pub fn patient_diagnose(
    data_dir: &Path,
    row: usize,
    diagnosis: &str,
    prescription: &str,
) -> Result<()> {
    require_non_empty([("Diagnosis", diagnosis), ("Prescription", prescription)])?;
    let mut table = load(data_dir, Dataset::Patients);
    table.update_at(
        row,
        &[
            (patients::DIAGNOSIS, diagnosis.to_string()),
            (patients::PRESCRIPTION, prescription.to_string()),
        ],
    )?;
    persist(&table, data_dir, Dataset::Patients)?;
    info!(row, "patient record updated");
    Ok(())
}

pub fn patient_set_status(data_dir: &Path, row: usize, status: &str) -> Result<()> {
    require_non_empty([("Status", status)])?;
    let mut table = load(data_dir, Dataset::Patients);
    table.update_at(row, &[(patients::STATUS, status.to_string())])?;
    persist(&table, data_dir, Dataset::Patients)?;
    info!(row, status, "patient status updated");
    Ok(())
}

/// First record whose name or symptoms contain the term, case-insensitively.
pub fn patient_search(data_dir: &Path, term: &str) -> Option<(usize, Vec<String>)> {
    let table = load(data_dir, Dataset::Patients);
    let row = table.search(term, &[patients::NAME, patients::SYMPTOMS])?;
    debug!(row, "search hit");
    Some((row, table.rows[row].clone()))
}

// ---------------------------------------------------------------------------
// Users (IT support workflow)

pub fn user_list(data_dir: &Path) -> Table {
    load(data_dir, Dataset::Users)
}

pub fn user_add(data_dir: &Path, username: &str, password: &str, role: &str) -> Result<usize> {
    require_non_empty([("Username", username), ("Password", password), ("Role", role)])?;
    let mut table = load(data_dir, Dataset::Users);
    table.append(vec![username.into(), password.into(), role.into()]);
    persist(&table, data_dir, Dataset::Users)?;
    info!(user = username, rows = table.len(), "account added");
    Ok(table.len())
}

pub fn user_update(
    data_dir: &Path,
    row: usize,
    username: &str,
    password: &str,
    role: &str,
) -> Result<()> {
    require_non_empty([("Username", username), ("Password", password), ("Role", role)])?;
    let mut table = load(data_dir, Dataset::Users);
    table.update_at(
        row,
        &[
            (0, username.to_string()),
            (1, password.to_string()),
            (2, role.to_string()),
        ],
    )?;
    persist(&table, data_dir, Dataset::Users)?;
    info!(row, user = username, "account updated");
    Ok(())
}

pub fn user_remove(data_dir: &Path, row: usize) -> Result<Vec<String>> {
    let mut table = load(data_dir, Dataset::Users);
    let removed = table.remove_at(row)?;
    persist(&table, data_dir, Dataset::Users)?;
    info!(row, rows = table.len(), "account removed");
    Ok(removed)
}

// ---------------------------------------------------------------------------
// Dispatch queue (dispatcher workflow)

pub fn dispatch_list(data_dir: &Path) -> Table {
    load(data_dir, Dataset::DispatchRequests)
}

pub fn dispatch_send(data_dir: &Path, row: usize) -> Result<()> {
    set_dispatch_status(data_dir, row, STATUS_DISPATCHED)
}

pub fn dispatch_cancel(data_dir: &Path, row: usize) -> Result<()> {
    set_dispatch_status(data_dir, row, STATUS_CANCELLED)
}

fn set_dispatch_status(data_dir: &Path, row: usize, status: &str) -> Result<()> {
    let mut table = load(data_dir, Dataset::DispatchRequests);
    table.update_at(row, &[(dispatch_requests::STATUS, status.to_string())])?;
    persist(&table, data_dir, Dataset::DispatchRequests)?;
    info!(row, status, "dispatch request updated");
    Ok(())
}

// ---------------------------------------------------------------------------
// Emergency cases (coordinator workflow)

/// Show emergency cases. The sample file is created on first use and never
/// overwritten afterwards.
pub fn emergency_list(data_dir: &Path) -> Result<Table> {
    seed_emergencies(data_dir)?;
    Ok(load(data_dir, Dataset::EmergencyCases))
}

pub fn emergency_assign(data_dir: &Path, row: usize) -> Result<()> {
    set_emergency_status(data_dir, row, STATUS_RESOURCES_ASSIGNED)
}

pub fn emergency_close(data_dir: &Path, row: usize) -> Result<()> {
    set_emergency_status(data_dir, row, STATUS_CLOSED)
}

fn set_emergency_status(data_dir: &Path, row: usize, status: &str) -> Result<()> {
    seed_emergencies(data_dir)?;
    let mut table = load(data_dir, Dataset::EmergencyCases);
    table.update_at(row, &[(emergency_cases::STATUS, status.to_string())])?;
    persist(&table, data_dir, Dataset::EmergencyCases)?;
    info!(row, status, "emergency case updated");
    Ok(())
}

fn seed_emergencies(data_dir: &Path) -> Result<()> {
    let dataset = Dataset::EmergencyCases;
    let created = ensure_seeded(
        &dataset_path(data_dir, dataset),
        dataset.columns(),
        dataset.seed_rows(),
    )
    .context("seed emergency cases")?;
    if created {
        info!("created sample emergency cases file");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Triage wizard (dispatcher workflow)

/// Outcome of the triage wizard: the assembled report and where it landed.
#[derive(Debug)]
pub struct TriageOutcome {
    pub report: DispatchReport,
    pub report_path: PathBuf,
}

pub fn run_triage(data_dir: &Path, args: &TriageArgs) -> Result<TriageOutcome> {
    require_non_empty([
        ("Name", args.name.as_str()),
        ("Contact", args.contact.as_str()),
        ("Symptoms", args.symptoms.as_str()),
    ])?;
    let report = DispatchReport::assess(&args.name, args.age, &args.contact, &args.symptoms);
    debug!(
        patient = redact_value(&args.name),
        tier = ?report.tier,
        "triage assessed"
    );
    let report_path = args
        .report
        .clone()
        .unwrap_or_else(|| data_dir.join(REPORT_FILE));
    report.write(&report_path)?;
    Ok(TriageOutcome {
        report,
        report_path,
    })
}
