//! Stage Entity
//!
//! A board column. Stages are configured per project; the board only reads
//! them.

use serde::{Deserialize, Serialize};
use super::entity::{Entity, StageId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub id: StageId,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    /// Position within the project's stage list (for ordering)
    #[serde(default)]
    pub position: i32,
}

impl Stage {
    pub fn new(id: impl Into<StageId>, name: impl Into<String>, position: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: None,
            position,
        }
    }
}

impl Entity for Stage {
    type Id = StageId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
