//! Domain operations.

use serde::Serialize;

use crate::error::Result;
use crate::types::{Domain, MailService};

use super::FastDnsClient;

impl FastDnsClient {
    /// List all domains on the account.
    pub async fn list_domains(&self) -> Result<Vec<Domain>> {
        self.get("/api/domains").await
    }

    /// Fetch a domain by its numeric id.
    pub async fn get_domain(&self, domain_id: u64) -> Result<Domain> {
        self.get(&format!("/api/domains/{domain_id}")).await
    }

    /// Fetch a domain by name.
    pub async fn get_domain_by_name(&self, name: &str) -> Result<Domain> {
        self.get(&format!("/api/domains/{name}/name")).await
    }

    /// Create a domain pointing at `ip`, with mail handled by
    /// `mail_service` ([`MailService::Main`] unless the account uses an
    /// external backend).
    pub async fn create_domain(
        &self,
        name: &str,
        ip: &str,
        mail_service: MailService,
    ) -> Result<Domain> {
        #[derive(Serialize)]
        struct CreateDomainBody<'a> {
            name: &'a str,
            ip: &'a str,
            mail_service: u8,
        }

        let body = CreateDomainBody {
            name,
            ip,
            mail_service: mail_service.code(),
        };
        self.post("/api/domains", &body).await
    }

    /// Update a domain's `required` flag. The provider does not document
    /// the field; the value is passed through untouched.
    pub async fn update_domain(&self, domain_id: u64, required: i64) -> Result<Domain> {
        #[derive(Serialize)]
        struct UpdateDomainBody {
            required: i64,
        }

        self.put(
            &format!("/api/domains/{domain_id}"),
            &UpdateDomainBody { required },
        )
        .await
    }

    /// Delete a domain.
    pub async fn delete_domain(&self, domain_id: u64) -> Result<()> {
        self.delete(&format!("/api/domains/{domain_id}")).await
    }
}
