use super::{Record, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: RecordId,
    pub name: String,
    pub author_id: RecordId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_id: Option<RecordId>,
}

impl Book {
    pub fn new(id: RecordId, name: impl Into<String>, author_id: RecordId) -> Self {
        Self {
            id,
            name: name.into(),
            author_id,
            publisher_id: None,
        }
    }

    pub fn with_publisher(mut self, publisher_id: Option<RecordId>) -> Self {
        self.publisher_id = publisher_id;
        self
    }

    pub fn is_by(&self, author_id: RecordId) -> bool {
        self.author_id == author_id
    }

    pub fn is_published_by(&self, publisher_id: RecordId) -> bool {
        self.publisher_id == Some(publisher_id)
    }
}

impl Record for Book {
    fn id(&self) -> RecordId {
        self.id
    }
}
