use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cli(home: &TempDir, today: &str) -> Command {
    let mut cmd = Command::cargo_bin("sales_pace_cli").unwrap();
    cmd.env("SALES_PACE_HOME", home.path())
        .env("SALES_PACE_TODAY", today)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn insert_then_show_reports_progress() {
    let home = TempDir::new().unwrap();

    cli(&home, "2025-10-18")
        .args(["insert", "1500", "500"])
        .assert()
        .success()
        .stdout(contains("Sales inserted for 2025-10-18."))
        .stdout(contains("Data: Sábado, 18 de outubro de 2025"))
        .stdout(contains("Valor Acumulado: R$ 2,000.00"));

    cli(&home, "2025-10-18")
        .arg("show")
        .assert()
        .success()
        .stdout(contains("Progresso: 4.00%"));

    let csv = std::fs::read_to_string(home.path().join("vendas_diarias.csv")).unwrap();
    assert!(csv.contains("2025-10-18,1500,500,2000"));
}

#[test]
fn insert_outside_year_fails_without_writing() {
    let home = TempDir::new().unwrap();
    cli(&home, "2025-06-01").arg("show").assert().success();
    let before = std::fs::read(home.path().join("vendas_diarias.csv")).unwrap();

    cli(&home, "2026-01-02")
        .args(["insert", "10", "10"])
        .assert()
        .failure()
        .stderr(contains("Error: Out of range"));

    let after = std::fs::read(home.path().join("vendas_diarias.csv")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn update_rejects_day_zero() {
    let home = TempDir::new().unwrap();
    cli(&home, "2025-06-01")
        .args(["update", "0", "1", "1"])
        .assert()
        .failure()
        .stderr(contains("day 0 is outside 1..=365"));
}

#[test]
fn malformed_ledger_is_reported() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("vendas_diarias.csv"),
        "Date,Vendas Produtos Físicos,Vendas Produtos Digitais,Total Vendas\n2025-01-01,1,1,3\n",
    )
    .unwrap();
    cli(&home, "2025-06-01")
        .arg("show")
        .assert()
        .failure()
        .stderr(contains("Storage error"));
}

#[test]
fn invalid_range_in_config_is_fatal() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.json"),
        r#"{"annual_target": 1000.0, "range_start": "2025-12-31", "range_end": "2025-01-01"}"#,
    )
    .unwrap();
    cli(&home, "2025-06-01")
        .arg("config")
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
