//! Shared helpers for the live API test-suite.

#![allow(dead_code)]

use std::env;

use fastdns_client::{CreateRecordRequest, DnsRecord, FastDnsClient};

/// Skip the test when the given environment variables are missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Assert that a `Result` is `Ok` and unwrap it, failing the test otherwise.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Unique record name so aborted runs do not collide with each other.
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// Test context: an authenticated client plus the domain under test.
pub struct TestContext {
    pub client: FastDnsClient,
    pub domain: String,
}

impl TestContext {
    /// Build a context from `FASTDNS_TOKEN` / `FASTDNS_TEST_DOMAIN`.
    pub async fn from_env() -> Option<Self> {
        let token = env::var("FASTDNS_TOKEN").ok()?;
        let domain = env::var("FASTDNS_TEST_DOMAIN").ok()?;

        let mut client = FastDnsClient::new();
        client.auth(&token).await.ok()?;

        Some(Self { client, domain })
    }

    /// Resolve the domain under test to its id.
    pub async fn find_domain_id(&self) -> Option<u64> {
        let domains = self.client.list_domains().await.ok()?;
        domains
            .into_iter()
            .find(|domain| domain.name == self.domain)
            .map(|domain| domain.id)
    }

    /// Create a disposable TXT record for CRUD tests.
    pub async fn create_test_record(&self, domain_id: u64) -> Option<DnsRecord> {
        let request =
            CreateRecordRequest::new(generate_test_record_name(), "TXT", "integration-test", 600);
        self.client.create_record(domain_id, &request).await.ok()
    }

    /// Delete a record, ignoring failures (cleanup path).
    pub async fn cleanup_record(&self, domain_id: u64, record_id: &str) {
        let _ = self.client.delete_record(domain_id, record_id).await;
    }

    /// Delete every leftover `_test-` record on the domain.
    pub async fn cleanup_all_test_records(&self, domain_id: u64) {
        if let Ok(records) = self.client.list_records(domain_id).await {
            for record in records {
                if record.name.contains("_test-") {
                    let _ = self.client.delete_record(domain_id, &record.id).await;
                }
            }
        }
    }
}
