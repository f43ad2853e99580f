use serde::Serialize;

/// Body of a 201 response: the id the store generated
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}
