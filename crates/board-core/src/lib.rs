//! Board Core
//!
//! Framework-agnostic interaction core for a kanban-style work item board:
//! - domain: work items, stages, deliverables, project context
//! - api: the narrow REST contract the board consumes
//! - store / drag / resolver / layout: cache, drag state machine, move
//!   classification and column partitioning
//! - board: the facade a UI drives

pub mod api;
pub mod board;
pub mod config;
pub mod domain;
pub mod drag;
pub mod layout;
pub mod mutation;
pub mod notice;
pub mod resolver;
pub mod store;


pub use api::{ApiError, ApiResult, BoardApi, DeliverablePatch, WorkItemPatch};
pub use board::{fetch_snapshot, Board, BoardSnapshot, SettleAction};
pub use config::{BoardConfig, ConfigError};
pub use drag::{DragController, DragSession, DropRequest};
pub use layout::{BoardLayout, ColumnView, PanelView};
pub use mutation::{MutationOutcome, PendingMutation, RemoteCall};
pub use notice::{Notice, NoticeLevel, Notices};
pub use resolver::{DropTarget, IgnoreReason, MovePlan, MoveResolver, UNPLACED_PANEL_ID};
pub use store::{FetchState, FetchTicket, WorkItemStore};
