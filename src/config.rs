//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. The defaults reproduce the constants the service
//! has always shipped with, down to the bundled credential file and the
//! development port.

use std::env;

/// Path of the service-account key file, relative to the working directory
const DEFAULT_CREDENTIALS_PATH: &str = "service-account-backend.json";

/// ID of the spreadsheet that holds the quotes
const DEFAULT_SPREADSHEET_ID: &str = "1gk914WMZp1mHDRoQWjItrPIBDMhTeIzltYaPEhJpBd0";

/// Worksheet (tab) with one quote per row
const DEFAULT_WORKSHEET: &str = "quotes";

/// Google Sheets API endpoint
const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Spreadsheet backend configuration
    pub sheets: SheetsConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Spreadsheet backend configuration
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    /// Path to the service-account key JSON file
    pub credentials_path: String,
    /// ID of the spreadsheet to open
    pub spreadsheet_id: String,
    /// Name of the worksheet to read
    pub worksheet: String,
    /// Base URL of the Sheets API (overridden in tests)
    pub api_base_url: String,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(5000),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            sheets: SheetsConfig {
                credentials_path: env::var("SERVICE_ACCOUNT_PATH")
                    .unwrap_or_else(|_| DEFAULT_CREDENTIALS_PATH.to_string()),
                spreadsheet_id: env::var("SPREADSHEET_ID")
                    .unwrap_or_else(|_| DEFAULT_SPREADSHEET_ID.to_string()),
                worksheet: env::var("WORKSHEET")
                    .unwrap_or_else(|_| DEFAULT_WORKSHEET.to_string()),
                api_base_url: env::var("SHEETS_API_URL")
                    .unwrap_or_else(|_| DEFAULT_SHEETS_API_URL.to_string()),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
