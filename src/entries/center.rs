use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An organizational partition (a farm or site) under which entries are grouped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostCenter {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl CostCenter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
