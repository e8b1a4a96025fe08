//! Domain Layer
//!
//! Board entities. This layer has NO external dependencies (except serde for serialization).

mod entity;
mod work_item;
mod stage;
mod deliverable;
mod project;

pub use entity::{find_by_id, find_by_id_mut, position_by_id, DeliverableId, Entity, ItemId, MediaId, MemberId, ProjectId, StageId};
pub use work_item::{WorkItem, WorkItemKind};
pub use stage::Stage;
pub use deliverable::Deliverable;
pub use project::{Member, Project};
