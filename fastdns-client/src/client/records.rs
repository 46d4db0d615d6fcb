//! DNS record and account operations.

use serde_json::Value;

use crate::error::Result;
use crate::types::{CreateRecordRequest, DnsRecord, UpdateRecordBody, UpdateRecordRequest};

use super::FastDnsClient;

impl FastDnsClient {
    /// List all records of a domain.
    pub async fn list_records(&self, domain_id: u64) -> Result<Vec<DnsRecord>> {
        self.get(&format!("/api/domains/{domain_id}/records")).await
    }

    /// Fetch a single record.
    pub async fn get_record(&self, domain_id: u64, record_id: &str) -> Result<DnsRecord> {
        self.get(&format!("/api/domains/{domain_id}/records/{record_id}"))
            .await
    }

    /// Create a record. The request serializes into the body as-is,
    /// including the defaulted secondary fields.
    pub async fn create_record(
        &self,
        domain_id: u64,
        request: &CreateRecordRequest,
    ) -> Result<DnsRecord> {
        self.post(&format!("/api/domains/{domain_id}/records"), request)
            .await
    }

    /// Update a record. Only `content` and `name` go on the wire — the
    /// provider answers a duplicate-record conflict when the body includes
    /// any of the remaining fields, so they are accepted but never sent.
    pub async fn update_record(
        &self,
        domain_id: u64,
        record_id: &str,
        request: &UpdateRecordRequest,
    ) -> Result<DnsRecord> {
        self.put(
            &format!("/api/domains/{domain_id}/records/{record_id}"),
            &UpdateRecordBody::from(request),
        )
        .await
    }

    /// Delete a record.
    pub async fn delete_record(&self, domain_id: u64, record_id: &str) -> Result<()> {
        self.delete(&format!("/api/domains/{domain_id}/records/{record_id}"))
            .await
    }

    /// Fetch account information for the authenticated user.
    ///
    /// The account schema is undocumented upstream; the parsed JSON is
    /// returned as-is.
    pub async fn user_info(&self) -> Result<Value> {
        self.get("/api/me").await
    }
}
