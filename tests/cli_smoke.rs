use std::process::Command;

use stock_grid::StockRecord;

#[test]
fn help_displays_overview() {
    let binary = env!("CARGO_BIN_EXE_stock-grid");
    let output = Command::new(binary)
        .arg("--help")
        .output()
        .expect("invoke stock-grid --help");

    assert!(output.status.success(), "help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Synthetic stock browser"),
        "expected overview text in help output"
    );
}

#[test]
fn generate_emits_one_json_record_per_line() {
    let binary = env!("CARGO_BIN_EXE_stock-grid");
    let output = Command::new(binary)
        .args(["generate", "--count", "5", "--seed", "7"])
        .output()
        .expect("invoke stock-grid generate");

    assert!(output.status.success(), "generate should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let records: Vec<StockRecord> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("valid record"))
        .collect();
    assert_eq!(records.len(), 5);
}

#[test]
fn browse_prints_summary_for_active_filters() {
    let binary = env!("CARGO_BIN_EXE_stock-grid");
    let output = Command::new(binary)
        .args([
            "browse",
            "--count",
            "30",
            "--seed",
            "11",
            "--delay-ms",
            "0",
            "--sector",
            "technology",
            "--select",
            "0",
        ])
        .output()
        .expect("invoke stock-grid browse");

    assert!(output.status.success(), "browse should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Financial Stocks Table"));
    assert!(stdout.contains("of 30 stocks"));
    assert!(stdout.contains("Sectors: Technology"));
    assert!(stdout.contains("Selected 1/3"));
}
