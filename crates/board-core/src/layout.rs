//! Column/Panel Layout
//!
//! Partitions the work item list into one bucket per stage plus the
//! unplaced bucket. Pure function of (stages, items, drag session).

use std::collections::HashMap;

use log::warn;

use crate::domain::{ItemId, Stage, StageId, WorkItem};
use crate::drag::DragSession;
use crate::resolver::UNPLACED_PANEL_ID;

/// One stage column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnView {
    pub stage: Stage,
    pub items: Vec<WorkItem>,
    pub is_drop_target: bool,
}

/// The unplaced ("my items") panel
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelView {
    pub items: Vec<WorkItem>,
    pub is_drop_target: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardLayout {
    pub columns: Vec<ColumnView>,
    pub unplaced: PanelView,
}

impl BoardLayout {
    /// `stages` must already be in display order
    pub fn build(stages: &[Stage], items: &[WorkItem], session: &DragSession) -> Self {
        let mut buckets: HashMap<&StageId, Vec<WorkItem>> =
            stages.iter().map(|s| (&s.id, Vec::new())).collect();
        let mut unplaced = Vec::new();

        for item in items {
            match item.stage_id.as_ref().and_then(|id| buckets.get_mut(id)) {
                Some(bucket) => bucket.push(item.clone()),
                None => {
                    if let Some(stage_id) = &item.stage_id {
                        warn!("item {} references unknown stage {}", item.id, stage_id);
                    }
                    unplaced.push(item.clone());
                }
            }
        }

        let columns = stages
            .iter()
            .map(|stage| ColumnView {
                stage: stage.clone(),
                items: buckets.remove(&stage.id).unwrap_or_default(),
                is_drop_target: session.is_over(stage.id.as_str()),
            })
            .collect();

        Self {
            columns,
            unplaced: PanelView {
                items: unplaced,
                is_drop_target: session.is_over(UNPLACED_PANEL_ID),
            },
        }
    }

    /// All item ids, columns first then the panel
    pub fn flatten(&self) -> Vec<ItemId> {
        self.columns
            .iter()
            .flat_map(|c| c.items.iter())
            .chain(self.unplaced.items.iter())
            .map(|i| i.id.clone())
            .collect()
    }

    pub fn column(&self, stage_id: &StageId) -> Option<&ColumnView> {
        self.columns.iter().find(|c| &c.stage.id == stage_id)
    }

    pub fn item_count(&self) -> usize {
        self.columns.iter().map(|c| c.items.len()).sum::<usize>() + self.unplaced.items.len()
    }
}
