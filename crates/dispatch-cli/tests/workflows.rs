//! End-to-end workflow behavior through the command layer.

use std::fs;
use std::path::Path;

use dispatch_cli::commands;
use dispatch_model::Role;
use tempfile::TempDir;

fn data_dir() -> TempDir {
    TempDir::new().expect("tempdir")
}

#[test]
fn hospital_lifecycle() {
    let dir = data_dir();
    let root = dir.path();

    commands::hospital_add(root, "City General", "Downtown", "4").expect("add");
    commands::hospital_add(root, "St. Mary", "Riverside", "2").expect("add");
    commands::hospital_update(root, 1, "St. Mary", "Riverside", "3").expect("update");

    let table = commands::hospital_list(root);
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[1], vec!["St. Mary", "Riverside", "3"]);

    let removed = commands::hospital_remove(root, 0).expect("remove");
    assert_eq!(removed[0], "City General");
    assert_eq!(commands::hospital_list(root).len(), 1);
}

#[test]
fn hospital_add_rejects_blank_fields() {
    let dir = data_dir();
    let error = commands::hospital_add(dir.path(), "City General", " ", "4").unwrap_err();
    assert!(error.to_string().contains("Location"));
    assert!(commands::hospital_list(dir.path()).is_empty());
}

#[test]
fn patient_lifecycle_pads_then_fills_columns() {
    let dir = data_dir();
    let root = dir.path();

    commands::patient_intake(root, "Jane Smith", 62, "dizziness", "555-0199").expect("intake");
    let table = commands::patient_list(root);
    assert_eq!(table.len(), 1);
    assert_eq!(
        table.rows[0],
        vec!["Jane Smith", "62", "dizziness", "555-0199", "", "", ""]
    );

    commands::patient_diagnose(root, 0, "Vertigo", "Rest and fluids").expect("diagnose");
    commands::patient_set_status(root, 0, "Admitted").expect("set status");

    let table = commands::patient_list(root);
    assert_eq!(
        table.rows[0],
        vec![
            "Jane Smith",
            "62",
            "dizziness",
            "555-0199",
            "Vertigo",
            "Rest and fluids",
            "Admitted"
        ]
    );
}

#[test]
fn patient_search_matches_name_or_symptoms() {
    let dir = data_dir();
    let root = dir.path();
    commands::patient_intake(root, "Jane Smith", 62, "dizziness", "555-0199").expect("intake");
    commands::patient_intake(root, "Ali Khan", 30, "sore throat", "555-0200").expect("intake");

    let (row, record) = commands::patient_search(root, "THROAT").expect("hit");
    assert_eq!(row, 1);
    assert_eq!(record[0], "Ali Khan");
    assert!(commands::patient_search(root, "fracture").is_none());
    // Contact is not a searched column.
    assert!(commands::patient_search(root, "555-0200").is_none());
}

#[test]
fn mutating_an_invalid_row_reports_out_of_range() {
    let dir = data_dir();
    let error = commands::patient_set_status(dir.path(), 3, "Admitted").unwrap_err();
    assert!(error.to_string().contains("out of range"));
}

fn seed_accounts(root: &Path) {
    fs::write(
        root.join("user_accounts.csv"),
        "Username,Password,Role\namara,secret,admin\n",
    )
    .expect("seed accounts");
}

#[test]
fn account_administration_feeds_login() {
    let dir = data_dir();
    let root = dir.path();
    seed_accounts(root);

    commands::user_add(root, "lee", "hunter2", "dispatcher").expect("add");
    assert_eq!(commands::login(root, "lee", "hunter2").expect("login"), Role::Dispatcher);

    commands::user_update(root, 2, "lee", "hunter3", "doctor").expect("update");
    assert!(commands::login(root, "lee", "hunter2").is_err());
    assert_eq!(commands::login(root, "lee", "hunter3").expect("login"), Role::Doctor);

    commands::user_remove(root, 2).expect("remove");
    assert!(commands::login(root, "lee", "hunter3").is_err());
    // The header line shows up in the administration listing, as stored.
    let table = commands::user_list(root);
    assert_eq!(table.rows[0][0], "Username");
}

#[test]
fn login_without_accounts_file_is_blocked() {
    let dir = data_dir();
    let error = commands::login(dir.path(), "amara", "secret").unwrap_err();
    assert!(error.to_string().contains("not found"));
}

#[test]
fn dispatch_queue_status_transitions() {
    let dir = data_dir();
    let root = dir.path();
    fs::write(
        root.join("dispatch_requests.csv"),
        "Jane Smith,456 Elm St,Difficulty Breathing,Pending\n\
         Bob Johnson,789 Pine St,Fracture,Pending\n",
    )
    .expect("seed queue");

    commands::dispatch_send(root, 0).expect("send");
    commands::dispatch_cancel(root, 1).expect("cancel");

    let table = commands::dispatch_list(root);
    assert_eq!(table.rows[0][3], "Dispatched");
    assert_eq!(table.rows[1][3], "Cancelled");
}

#[test]
fn emergency_cases_seed_once_then_track_status() {
    let dir = data_dir();
    let root = dir.path();

    let table = commands::emergency_list(root).expect("list seeds");
    // Header line plus five sample cases.
    assert_eq!(table.len(), 6);
    assert_eq!(table.rows[0][0], "Patient Name");
    assert_eq!(table.rows[1][4], "Pending");

    commands::emergency_assign(root, 1).expect("assign");
    commands::emergency_close(root, 2).expect("close");

    let table = commands::emergency_list(root).expect("list again");
    assert_eq!(table.len(), 6);
    assert_eq!(table.rows[1][4], "Resources Assigned");
    assert_eq!(table.rows[2][4], "Closed");
}

#[test]
fn triage_writes_the_report_into_the_data_dir() {
    let dir = data_dir();
    let root = dir.path();

    let args = dispatch_cli::cli::TriageArgs {
        name: "Jane Smith".into(),
        age: 62,
        contact: "555-0199".into(),
        symptoms: "sudden chest pain".into(),
        report: None,
        json: false,
    };
    let outcome = commands::run_triage(root, &args).expect("triage");
    assert_eq!(outcome.report_path, root.join("dispatch_report.txt"));

    let content = fs::read_to_string(&outcome.report_path).expect("read report");
    assert!(content.starts_with("Dispatch Report:\n"));
    assert!(content.contains("Analysis Result: Critical Condition\n"));
    assert!(content.contains("Final Recommendation: Advanced Life Support Ambulance\n"));
}
