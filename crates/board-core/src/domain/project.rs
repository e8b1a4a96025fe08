//! Project Context
//!
//! Read-only context for the board: ordered stages and the member directory.

use serde::{Deserialize, Serialize};
use super::entity::{find_by_id, Entity, MemberId, ProjectId};
use super::stage::Stage;
use super::work_item::WorkItem;

/// A project member (directory entry used to render assignees)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Member {
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_url: None,
        }
    }

    /// Up to two uppercase initials, for avatar placeholders
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub stages: Vec<Stage>,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Project {
    pub fn new(id: impl Into<ProjectId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stages: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Stages sorted by position; equal positions keep backend order
    pub fn ordered_stages(&self) -> Vec<Stage> {
        let mut stages = self.stages.clone();
        stages.sort_by_key(|s| s.position);
        stages
    }

    pub fn member(&self, id: &MemberId) -> Option<&Member> {
        find_by_id(&self.members, id)
    }

    pub fn in_charge_of(&self, item: &WorkItem) -> Option<&Member> {
        item.in_charge.as_ref().and_then(|id| self.member(id))
    }

    /// Assignee directory entries; unknown member ids are skipped
    pub fn assignees_of(&self, item: &WorkItem) -> Vec<&Member> {
        item.assignees.iter().filter_map(|id| self.member(id)).collect()
    }
}

impl Entity for Member {
    type Id = MemberId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Entity for Project {
    type Id = ProjectId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        let mut p = Project::new("p1", "Launch film");
        p.stages = vec![
            Stage::new("s2", "Review", 2),
            Stage::new("s1", "Draft", 1),
            Stage::new("s3", "Done", 2),
        ];
        p.members = vec![Member::new("m1", "ada lovelace"), Member::new("m2", "Grace")];
        p
    }

    #[test]
    fn test_ordered_stages_is_stable() {
        let ids: Vec<_> = project().ordered_stages().into_iter().map(|s| s.id.to_string()).collect();
        assert_eq!(ids, vec!["s1", "s2", "s3"]);
    }

    #[test]
    fn test_assignees_skip_unknown_members() {
        let p = project();
        let mut item = WorkItem::new("t1", "Cut");
        item.in_charge = Some(MemberId::from("m2"));
        item.assignees = vec![MemberId::from("m1"), MemberId::from("ghost")];

        assert_eq!(p.in_charge_of(&item).map(|m| m.name.as_str()), Some("Grace"));
        let names: Vec<_> = p.assignees_of(&item).iter().map(|m| m.name.clone()).collect();
        assert_eq!(names, vec!["ada lovelace"]);
    }

    #[test]
    fn test_member_initials() {
        assert_eq!(Member::new("m1", "ada lovelace").initials(), "AL");
        assert_eq!(Member::new("m2", "Grace").initials(), "G");
        assert_eq!(Member::new("m3", "").initials(), "");
    }
}
