use crate::config::Config;
use crate::server;
use crate::services::GoogleSheets;
use std::sync::Arc;

pub async fn run(port_flag: Option<u16>) {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("   Set GOOGLE_CREDENTIALS and GOOGLE_SHEET_ID before serving.");
            std::process::exit(1);
        }
    };

    let port = port_flag.unwrap_or(config.port);
    println!("🚀 Starting sheetbridge on port {}", port);
    println!("📄 Spreadsheet: {}", config.spreadsheet_id);

    // Built once; every request shares this handle
    let sheets = match GoogleSheets::connect(&config).await {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("❌ Failed to build Google Sheets client: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server::serve(sheets, port).await {
        eprintln!("❌ Server error: {}", e);
        std::process::exit(1);
    }
}
