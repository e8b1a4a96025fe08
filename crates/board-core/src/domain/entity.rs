//! Domain Layer - Core Entity Trait
//!
//! Identifier newtypes and the basic contract shared by board entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash + fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Linear lookup by id in an entity list
pub fn find_by_id<'a, E: Entity>(list: &'a [E], id: &E::Id) -> Option<&'a E> {
    list.iter().find(|e| e.id() == id)
}

pub fn find_by_id_mut<'a, E: Entity>(list: &'a mut [E], id: &E::Id) -> Option<&'a mut E> {
    list.iter_mut().find(|e| e.id() == id)
}

pub fn position_by_id<E: Entity>(list: &[E], id: &E::Id) -> Option<usize> {
    list.iter().position(|e| e.id() == id)
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Project identifier
    ProjectId
);
string_id!(
    /// Stage (board column) identifier
    StageId
);
string_id!(
    /// Task / work item identifier
    ItemId
);
string_id!(
    /// Deliverable identifier
    DeliverableId
);
string_id!(
    /// Project member identifier
    MemberId
);
string_id!(
    /// Media asset identifier
    MediaId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_as_bare_string() {
        let id = ItemId::new("t1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"t1\"");
        let back: ItemId = serde_json::from_str("\"t1\"").unwrap();
        assert_eq!(back, id);
    }

    #[derive(Clone)]
    struct Row(ItemId);

    impl Entity for Row {
        type Id = ItemId;

        fn id(&self) -> &ItemId {
            &self.0
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let mut rows = vec![Row("a".into()), Row("b".into())];
        assert_eq!(position_by_id(&rows, &"b".into()), Some(1));
        assert!(find_by_id(&rows, &"c".into()).is_none());
        find_by_id_mut(&mut rows, &"a".into()).unwrap().0 = "z".into();
        assert_eq!(find_by_id(&rows, &"z".into()).map(|r| r.0.as_str()), Some("z"));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(StageId::from("s1").to_string(), "s1");
    }
}
