//! Contacts service: the lead funnel

use chrono::Utc;
use validator::Validate;

use crate::{
    error::AppResult,
    models::contact::{ContactRequest, ContactStatus, CreateContactRequest},
    repository::Repository,
};

#[derive(Clone)]
pub struct ContactsService {
    repository: Repository,
}

impl ContactsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Record a contact form submission with status `new`.
    /// Identical submissions create separate records.
    pub async fn submit(&self, data: &CreateContactRequest) -> AppResult<ContactRequest> {
        data.validate()?;
        let contact = self.repository.contacts.create(data).await?;
        tracing::info!(contact_id = contact.id, service = %contact.service_type, "Contact request received");
        Ok(contact)
    }

    pub async fn list(&self, status: Option<ContactStatus>) -> AppResult<Vec<ContactRequest>> {
        self.repository.contacts.list(status).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<ContactRequest> {
        self.repository.contacts.get_by_id(id).await
    }

    pub async fn update_status(&self, id: i32, status: ContactStatus) -> AppResult<ContactRequest> {
        let responded_at = status.response_timestamp(Utc::now());
        let contact = self
            .repository
            .contacts
            .update_status(id, status, responded_at)
            .await?;
        tracing::info!(contact_id = id, status = %status, "Contact status updated");
        Ok(contact)
    }
}
