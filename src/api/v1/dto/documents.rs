/*
 * Responsibility
 * - Documents の request/response DTO
 */
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateDocumentRequest {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl CreateDocumentRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("title is required");
        }
        if self.title.len() > 256 {
            return Err("title must be <= 256 chars");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub title: String,
    pub body: String,
    pub owner: String,
}
