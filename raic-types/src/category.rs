use derive_more::Deref;
use serde::{Deserialize, Serialize, Serializer};

pub type CategoryId = u64;

/// A category as it exists in the destination store. A `parent` of `0` on the
/// wire means top level.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CategoryNode {
    pub id: CategoryId,
    pub name: String,
    #[serde(rename = "parent", default, with = "parent_serde")]
    pub parent_id: Option<CategoryId>,
}

/// Breadcrumb names, root first.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Deref)]
pub struct CategoryPath(Vec<String>);

impl CategoryPath {
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl<S: Into<String>> FromIterator<S> for CategoryPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Categories every product of a department is attached to, plus the parent
/// used for the first source category that has no match in the store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct InitialCategorySet {
    pub ids: Vec<CategoryId>,
    pub dynamic_parent_id: CategoryId,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CategoryRef {
    pub id: CategoryId,
}

/// Ordered set of category ids attached to a new product. Insertion keeps the
/// first position of an id and ignores repeats.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedCategorySet {
    ids: Vec<CategoryId>,
}

impl ResolvedCategorySet {
    pub fn from_initial(initial: &InitialCategorySet) -> Self {
        let mut set = Self::default();
        for id in &initial.ids {
            set.insert(*id);
        }
        set
    }

    /// Returns `false` when the id was already present.
    pub fn insert(&mut self, id: CategoryId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn contains(&self, id: CategoryId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[CategoryId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn refs(&self) -> impl Iterator<Item = CategoryRef> + '_ {
        self.ids.iter().map(|id| CategoryRef { id: *id })
    }
}

impl Serialize for ResolvedCategorySet {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(self.refs())
    }
}

mod parent_serde {
    use super::CategoryId;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(parent: &Option<CategoryId>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_u64(parent.unwrap_or(0))
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<CategoryId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<CategoryId>::deserialize(d)?.filter(|id| *id != 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_parent_is_top_level() {
        let node: CategoryNode =
            serde_json::from_str(r#"{"id": 15, "name": "Uncategorized", "parent": 0}"#).unwrap();
        assert_eq!(node.parent_id, None);
        let node: CategoryNode =
            serde_json::from_str(r#"{"id": 16, "name": "Vestidos", "parent": 15}"#).unwrap();
        assert_eq!(node.parent_id, Some(15));
    }

    #[test]
    fn resolved_set_keeps_first_position() {
        let mut set = ResolvedCategorySet::from_initial(&InitialCategorySet {
            ids: vec![183, 145, 183],
            dynamic_parent_id: 145,
        });
        assert!(set.insert(10));
        assert!(!set.insert(145));
        assert_eq!(set.ids(), &[183, 145, 10]);
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            r#"[{"id":183},{"id":145},{"id":10}]"#
        );
    }
}
