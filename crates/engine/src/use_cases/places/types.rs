//! Input types for place use cases.

use placely_domain::UserId;

/// Fields for a place that does not exist yet.
///
/// The address is still unresolved; the create use case turns it into
/// coordinates before anything is persisted.
#[derive(Debug, Clone)]
pub struct PlaceDraft {
    pub title: String,
    pub description: String,
    pub address: String,
    pub image_url: Option<String>,
    pub creator: UserId,
}
