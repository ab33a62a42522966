use crate::config::Config;
use crate::constants::SUMMARY;
use crate::services::{GoogleSheets, SheetValues};

/// Validate configuration and perform one probe read against the summary tab.
pub async fn run() {
    println!("🔍 Checking sheetbridge configuration...\n");

    let config = match Config::from_env() {
        Ok(config) => {
            println!("✅ Configuration loaded");
            println!("   📄 Spreadsheet: {}", config.spreadsheet_id);
            config
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let sheets = match GoogleSheets::connect(&config).await {
        Ok(client) => {
            println!("✅ Service-account credentials accepted");
            client
        }
        Err(e) => {
            eprintln!("❌ Credential check failed: {}", e);
            std::process::exit(1);
        }
    };

    match sheets.get_values(SUMMARY.read_range).await {
        Ok(rows) => {
            println!(
                "✅ Probe read of {} returned {} row(s)",
                SUMMARY.read_range,
                rows.len()
            );
            println!("\n🎉 Ready to serve.");
        }
        Err(e) => {
            eprintln!("❌ Probe read of {} failed: {}", SUMMARY.read_range, e);
            eprintln!("   Check spreadsheet sharing for the service account.");
            std::process::exit(1);
        }
    }
}
