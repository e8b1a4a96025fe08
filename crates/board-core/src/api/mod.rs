//! Remote API Layer
//!
//! Collaborator contract, partial-update payloads and the in-memory backend.

mod traits;
mod patch;
mod memory;

pub use traits::{ApiError, ApiResult, BoardApi};
pub use patch::{DeliverablePatch, WorkItemPatch};
pub use memory::{ApiCall, InMemoryApi};
