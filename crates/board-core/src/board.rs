//! Board Facade
//!
//! Ties the store, drag controller, resolver and notices together. Every
//! operation is split into a synchronous half (optimistic patch, returns a
//! [`PendingMutation`]) and an async half (`PendingMutation::send`) so a UI
//! can update immediately inside an event handler and await the network
//! afterwards. Feed the result back through [`Board::settle`].

use log::{debug, info};

use crate::api::{ApiResult, BoardApi, WorkItemPatch};
use crate::config::BoardConfig;
use crate::domain::{find_by_id_mut, Deliverable, ItemId, MediaId, Project, ProjectId, Stage, WorkItem};
use crate::drag::{DragController, DragSession};
use crate::layout::BoardLayout;
use crate::mutation::{Echo, MutationOutcome, PendingMutation, RemoteCall};
use crate::notice::Notices;
use crate::resolver::MoveResolver;
use crate::store::{FetchState, FetchTicket, WorkItemStore};

/// Everything loaded on mount / refresh
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub project: Project,
    pub items: Vec<WorkItem>,
    pub deliverables: Vec<Deliverable>,
}

/// Load project, work items and deliverables
pub async fn fetch_snapshot<A: BoardApi + ?Sized>(api: &A, project_id: &ProjectId) -> ApiResult<BoardSnapshot> {
    let project = api.get_project(project_id).await?;
    let items = api.list_work_items(project_id).await?;
    let deliverables = api.list_deliverables(project_id).await?;
    Ok(BoardSnapshot {
        project,
        items,
        deliverables,
    })
}

/// What the caller should do after settling a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleAction {
    Nothing,
    Refetch,
}

#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    project: Option<Project>,
    /// Project stages in display order
    stages: Vec<Stage>,
    store: WorkItemStore,
    deliverables: Vec<Deliverable>,
    drag: DragController,
    notices: Notices,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            project: None,
            stages: Vec::new(),
            store: WorkItemStore::new(),
            deliverables: Vec::new(),
            drag: DragController::new(),
            notices: Notices::new(),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn project_id(&self) -> &ProjectId {
        &self.config.project_id
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn items(&self) -> &[WorkItem] {
        self.store.get()
    }

    pub fn item(&self, id: &ItemId) -> Option<&WorkItem> {
        self.store.find(id)
    }

    pub fn store(&self) -> &WorkItemStore {
        &self.store
    }

    pub fn fetch_state(&self) -> &FetchState {
        self.store.fetch_state()
    }

    pub fn deliverables(&self) -> &[Deliverable] {
        &self.deliverables
    }

    pub fn session(&self) -> &DragSession {
        self.drag.session()
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub fn dismiss_notice(&mut self, id: u64) {
        self.notices.dismiss(id);
    }

    pub fn layout(&self) -> BoardLayout {
        BoardLayout::build(&self.stages, self.store.get(), self.drag.session())
    }

    // ========================
    // Refresh
    // ========================

    pub fn begin_refresh(&mut self) -> FetchTicket {
        self.store.begin_fetch()
    }

    /// Land a snapshot. Superseded tickets are ignored; failures keep the
    /// previous data and leave the store in `FetchState::Failed`.
    pub fn finish_refresh(&mut self, ticket: FetchTicket, result: ApiResult<BoardSnapshot>) {
        match result {
            Ok(snapshot) => {
                if self.store.finish_fetch(ticket, Ok(snapshot.items)) {
                    self.stages = snapshot.project.ordered_stages();
                    self.project = Some(snapshot.project);
                    self.deliverables = snapshot.deliverables;
                }
            }
            Err(e) => {
                self.store.finish_fetch(ticket, Err(e));
            }
        }
    }

    /// Fetch and land a snapshot in one step
    pub async fn refresh<A: BoardApi + ?Sized>(&mut self, api: &A) {
        let ticket = self.begin_refresh();
        let result = fetch_snapshot(api, &self.config.project_id).await;
        self.finish_refresh(ticket, result);
    }

    // ========================
    // Drag session
    // ========================

    pub fn drag_start(&mut self, item_id: &ItemId) -> bool {
        self.drag.on_drag_start(item_id, &self.store)
    }

    pub fn drag_over(&mut self, target_id: Option<String>) {
        self.drag.on_drag_over(target_id);
    }

    pub fn drag_cancel(&mut self) {
        self.drag.on_drag_cancel();
    }

    /// Finish the drag: resolve, patch optimistically, return remote work
    pub fn drag_end(&mut self, source: ItemId, target: Option<String>) -> Option<PendingMutation> {
        let request = self.drag.on_drag_end(source, target)?;
        let plan = MoveResolver::new(&self.stages, self.store.get(), &self.deliverables)
            .resolve(&request.source, &request.target);
        plan.apply_optimistic(&mut self.store, &mut self.deliverables);
        if !plan.is_remote() {
            return None;
        }
        info!("{}", plan);
        Some(PendingMutation::new(
            self.config.project_id.clone(),
            plan.to_string(),
            plan.remote_calls(),
        ))
    }

    // ========================
    // Other mutations
    // ========================

    /// Remove an item locally and queue the delete. Missing items are a no-op.
    pub fn remove_item(&mut self, item_id: &ItemId) -> Option<PendingMutation> {
        self.store.remove(item_id)?;
        self.store.invalidate();
        Some(
            PendingMutation::new(
                self.config.project_id.clone(),
                format!("delete {}", item_id),
                vec![RemoteCall::DeleteItem { id: item_id.clone() }],
            )
            .structural(),
        )
    }

    /// Replace the media linked to an item
    pub fn set_linked_media(&mut self, item_id: &ItemId, media: Vec<MediaId>) -> Option<PendingMutation> {
        let patch = WorkItemPatch::linked_media(media);
        if !self.store.patch(item_id, &patch) {
            return None;
        }
        Some(PendingMutation::new(
            self.config.project_id.clone(),
            format!("relink media on {}", item_id),
            vec![RemoteCall::PatchItem {
                id: item_id.clone(),
                patch,
            }],
        ))
    }

    /// Reconcile server echoes and surface failures as notices
    pub fn settle(&mut self, outcome: MutationOutcome) -> SettleAction {
        let failed = !outcome.is_success();
        for echo in outcome.echoes {
            match echo {
                // an item deleted meanwhile must not come back
                Echo::Item(item) => {
                    if self.store.find(&item.id).is_some() {
                        self.store.upsert(item);
                    }
                }
                Echo::Deliverable(deliverable) => {
                    if let Some(existing) = find_by_id_mut(&mut self.deliverables, &deliverable.id) {
                        *existing = deliverable;
                    }
                }
                Echo::Deleted(id) => debug!("{} deleted remotely", id),
            }
        }

        for failure in &outcome.failures {
            self.notices.error(format!("Could not {}: {}", failure.call.describe(), failure.error));
        }
        if outcome.structural && !failed {
            self.notices.info(format!("Finished: {}", outcome.label));
        }

        if outcome.structural || (failed && self.config.refetch_on_mutation_failure) {
            self.store.invalidate();
            SettleAction::Refetch
        } else {
            SettleAction::Nothing
        }
    }
}
