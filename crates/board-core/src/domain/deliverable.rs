//! Deliverable Entity
//!
//! Deliverables hold back-references to the tasks that feed them.

use serde::{Deserialize, Serialize};
use super::entity::{DeliverableId, Entity, ItemId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deliverable {
    pub id: DeliverableId,
    pub name: String,
    #[serde(default)]
    pub linked_tasks: Vec<ItemId>,
}

impl Deliverable {
    pub fn new(id: impl Into<DeliverableId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            linked_tasks: Vec::new(),
        }
    }

    pub fn with_tasks<I, T>(mut self, tasks: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ItemId>,
    {
        self.linked_tasks = tasks.into_iter().map(Into::into).collect();
        self
    }
}

impl Entity for Deliverable {
    type Id = DeliverableId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
