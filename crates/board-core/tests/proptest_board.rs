//! Property tests over generated item lists
//!
//! Stage ids are drawn from known stages, an unknown stage and null.

use board_core::domain::{ItemId, Project, Stage, StageId, WorkItem};
use board_core::{Board, BoardConfig, BoardLayout, BoardSnapshot, DragSession, MoveResolver, WorkItemStore};
use proptest::prelude::*;
use proptest::sample::Index;
use proptest::test_runner::Config;

fn stages() -> Vec<Stage> {
    vec![Stage::new("s1", "Draft", 0), Stage::new("s2", "Review", 1)]
}

fn stage_ref() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![Just(None), Just(Some("s1")), Just(Some("s2")), Just(Some("gone"))]
}

fn item_list() -> impl Strategy<Value = Vec<WorkItem>> {
    prop::collection::vec(stage_ref(), 0..8).prop_map(|refs| {
        refs.into_iter()
            .enumerate()
            .map(|(i, stage)| {
                let item = WorkItem::new(format!("t{}", i), format!("Item {}", i));
                match stage {
                    Some(s) => item.in_stage(s),
                    None => item,
                }
            })
            .collect()
    })
}

fn placements(items: &[WorkItem]) -> Vec<(ItemId, Option<StageId>)> {
    let mut pairs: Vec<_> = items.iter().map(|i| (i.id.clone(), i.stage_id.clone())).collect();
    pairs.sort();
    pairs
}

fn loaded_board(items: Vec<WorkItem>) -> Board {
    let mut project = Project::new("p1", "Launch film");
    project.stages = stages();
    let mut board = Board::new(BoardConfig {
        project_id: "p1".into(),
        ..Default::default()
    });
    let ticket = board.begin_refresh();
    board.finish_refresh(
        ticket,
        Ok(BoardSnapshot {
            project,
            items,
            deliverables: Vec::new(),
        }),
    );
    board
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn partition_then_flatten_keeps_every_item_once(items in item_list()) {
        let layout = BoardLayout::build(&stages(), &items, &DragSession::default());

        let mut flat = layout.flatten();
        flat.sort();
        let mut input: Vec<ItemId> = items.iter().map(|i| i.id.clone()).collect();
        input.sort();
        prop_assert_eq!(flat, input);
        prop_assert_eq!(layout.item_count(), items.len());
    }

    #[test]
    fn item_drop_keeps_column_sets_and_stage_ids(
        items in item_list(),
        source in any::<Index>(),
        target in any::<Index>(),
    ) {
        prop_assume!(!items.is_empty());
        let source = items[source.index(items.len())].clone();
        let target = items[target.index(items.len())].clone();

        let plan = MoveResolver::new(&stages(), &items, &[]).resolve(&source.id, target.id.as_str());
        prop_assert!(!plan.is_remote());

        let mut store = WorkItemStore::with_items(items.clone());
        plan.apply_optimistic(&mut store, &mut []);

        prop_assert_eq!(placements(store.get()), placements(&items));
        for stage in [Some("s1"), Some("s2"), Some("gone"), None] {
            let stage: Option<StageId> = stage.map(StageId::from);
            let column = |list: &[WorkItem]| {
                let mut ids: Vec<ItemId> =
                    list.iter().filter(|i| i.stage_id == stage).map(|i| i.id.clone()).collect();
                ids.sort();
                ids
            };
            prop_assert_eq!(column(store.get()), column(&items));
        }
    }

    #[test]
    fn cross_column_item_drop_changes_nothing(
        items in item_list(),
        source in any::<Index>(),
        target in any::<Index>(),
    ) {
        prop_assume!(!items.is_empty());
        let source = items[source.index(items.len())].clone();
        let target = items[target.index(items.len())].clone();
        prop_assume!(source.stage_id != target.stage_id);

        let mut board = loaded_board(items.clone());
        prop_assert!(board.drag_start(&source.id));
        board.drag_over(Some(target.id.to_string()));
        let pending = board.drag_end(source.id.clone(), Some(target.id.to_string()));

        prop_assert!(pending.is_none());
        prop_assert_eq!(board.items(), &items[..]);
    }
}
