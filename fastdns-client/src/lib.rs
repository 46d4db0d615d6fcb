//! # fastdns-client
//!
//! Client library for the FastDNS hosting provider's REST API
//! (`https://fastdns.fv.ee`).
//!
//! The client exchanges a raw account token for a short-lived session
//! credential, then drives the domain and record endpoints through one
//! dispatch pipeline: bearer header on every call, JSON bodies for writes,
//! and the provider's two failure shapes folded into a single error type.
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fastdns_client::{CreateRecordRequest, FastDnsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = FastDnsClient::new();
//!     client.auth("account-api-token").await?;
//!
//!     for domain in client.list_domains().await? {
//!         println!("{} (id {})", domain.name, domain.id);
//!     }
//!
//!     let record = client
//!         .create_record(1, &CreateRecordRequest::new("www", "A", "203.0.113.10", 3600))
//!         .await?;
//!     println!("created record {}", record.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, FastDnsError>`](FastDnsError):
//!
//! - [`FastDnsError::NotAuthenticated`] — an operation ran before
//!   [`FastDnsClient::auth`]; raised locally, nothing is sent.
//! - [`FastDnsError::Auth`] — the login exchange was rejected.
//! - [`FastDnsError::Api`] — an authenticated call came back with
//!   status >= 400, normalized to one `{code, message}` pair.
//! - [`FastDnsError::Network`] / [`FastDnsError::Timeout`] — the request
//!   never completed.
//!
//! The client retries nothing and caches nothing; every call is a single
//! request against the live API.

mod client;
mod error;
mod http_client;
mod types;

// Re-export error types
pub use error::{FastDnsError, Result};

// Re-export the client and its API base
pub use client::{FASTDNS_API_BASE, FastDnsClient};

// Re-export the data model
pub use types::{
    CreateRecordRequest, DnsRecord, Domain, MailService, Session, UpdateRecordRequest,
};
