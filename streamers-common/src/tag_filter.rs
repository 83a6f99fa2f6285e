use std::collections::BTreeSet;

/// Anything that carries a set of tag ids and can be filtered by them.
pub trait Tagged {
    fn tag_ids(&self) -> &BTreeSet<String>;
}

/// Whether `tags` contains every selected tag id.
///
/// An empty selection matches everything.
pub fn matches_tags(tags: &BTreeSet<String>, selected: &BTreeSet<String>) -> bool {
    selected.is_subset(tags)
}

/// Keep the items whose tag set is a superset of `selected`, in their original order.
///
/// Selected tags combine with AND: an item must carry all of them. The result
/// is recomputed from scratch on every call.
pub fn filter_by_tags<T: Tagged + Clone>(items: &[T], selected: &BTreeSet<String>) -> Vec<T> {
    if selected.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| matches_tags(item.tag_ids(), selected))
        .cloned()
        .collect()
}
