//! Authenticated Google Sheets client
//!
//! A client is built fresh for every request from the service account key
//! on disk. Nothing is cached or shared between requests.

use google_sheets4::{hyper, hyper_rustls, oauth2, Sheets};
use std::fmt::Debug;
use thiserror::Error;

use crate::config::SheetsConfig;
use crate::sheets::records::{records_from_rows, QuoteRecord};

/// OAuth scopes requested for every Sheets call
const SCOPES: [&str; 2] = [
    "https://spreadsheets.google.com/feeds",
    "https://www.googleapis.com/auth/drive",
];

type Connector = hyper_rustls::HttpsConnector<hyper::client::HttpConnector>;

/// Errors raised while authenticating to or reading from Google Sheets
#[derive(Error, Debug)]
pub enum SheetsError {
    /// Building the shared HTTP client failed
    #[error("Failed to build HTTP client: {0}")]
    Http(std::io::Error),
    /// The service account key file could not be read or parsed
    #[error("Failed to read service account key at {path}: {source}")]
    Credentials {
        /// Path the key was expected at
        path: String,
        /// Underlying read or parse failure
        source: std::io::Error,
    },
    /// Building the OAuth authenticator failed
    #[error("Failed to build Google authenticator: {0}")]
    Auth(std::io::Error),
    /// The Sheets API rejected or failed the request
    #[error("Google Sheets request failed: {0}")]
    Api(#[from] google_sheets4::Error),
}

/// A Sheets hub bound to one spreadsheet and worksheet
pub struct SheetsClient {
    hub: Sheets<Connector>,
    spreadsheet_id: String,
    worksheet: String,
}

impl Debug for SheetsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SheetsClient {{ spreadsheet_id: {:?}, worksheet: {:?} }}",
            self.spreadsheet_id, self.worksheet
        )
    }
}

impl SheetsClient {
    /// Authenticate with the configured service account key and return a
    /// client bound to the configured spreadsheet and worksheet
    pub async fn connect(config: &SheetsConfig) -> Result<Self, SheetsError> {
        let client = http_client().map_err(SheetsError::Http)?;

        let key = oauth2::read_service_account_key(&config.credentials_path)
            .await
            .map_err(|source| SheetsError::Credentials {
                path: config.credentials_path.clone(),
                source,
            })?;

        let auth = oauth2::ServiceAccountAuthenticator::with_client(key, client.clone())
            .build()
            .await
            .map_err(SheetsError::Auth)?;

        let mut hub = Sheets::new(client, auth);
        let base = config.api_base_url.trim_end_matches('/');
        hub.base_url(format!("{base}/"));
        hub.root_url(format!("{base}/"));

        Ok(SheetsClient {
            hub,
            spreadsheet_id: config.spreadsheet_id.clone(),
            worksheet: config.worksheet.clone(),
        })
    }

    /// Fetch every row of the worksheet and convert to header-keyed records
    pub async fn fetch_records(&self) -> Result<Vec<QuoteRecord>, SheetsError> {
        let range = worksheet_range(&self.worksheet);
        let (_, value_range) = self
            .hub
            .spreadsheets()
            .values_get(&self.spreadsheet_id, &range)
            .add_scope(SCOPES[0])
            .add_scope(SCOPES[1])
            .doit()
            .await?;

        let rows = value_range.values.unwrap_or_default();
        Ok(records_from_rows(rows))
    }
}

/// Hyper client shared by the authenticator and the Sheets hub.
/// `https_or_http` keeps plain-HTTP endpoints usable when the API base URL
/// is overridden. Fails only when the system root store cannot be loaded.
fn http_client() -> Result<hyper::Client<Connector>, std::io::Error> {
    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()?
        .https_or_http()
        .enable_http1()
        .build();

    Ok(hyper::Client::builder().build(connector))
}

/// Quote a worksheet title for A1 notation. A bare title covers the whole
/// worksheet; embedded single quotes are doubled per A1 rules.
fn worksheet_range(worksheet: &str) -> String {
    format!("'{}'", worksheet.replace('\'', "''"))
}
