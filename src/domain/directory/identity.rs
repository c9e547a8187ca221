//! Stable list identity for members.
//!
//! Rows are keyed by the server id when present, otherwise by email.
//! Members with neither fall back to their position. Keys are unique within
//! one list: repeated identities get an occurrence suffix.

use std::collections::{HashMap, HashSet};
use std::fmt;

use super::Member;

/// Rendering key for one member row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberKey(String);

impl MemberKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn base_key(member: &Member, position: usize) -> String {
    if let Some(id) = member.id.as_deref().filter(|s| !s.is_empty()) {
        return format!("id:{}", id);
    }
    if let Some(email) = member.email.as_deref().filter(|s| !s.is_empty()) {
        return format!("email:{}", email.trim().to_lowercase());
    }
    format!("pos:{}", position)
}

/// Assigns one unique key per member, in list order.
///
/// A suffixed key never shadows a key emitted earlier, including a raw id
/// that already ends in `#n`.
pub fn assign_keys(members: &[Member]) -> Vec<MemberKey> {
    let mut emitted: HashSet<String> = HashSet::new();

    members
        .iter()
        .enumerate()
        .map(|(position, member)| {
            let base = base_key(member, position);
            let mut key = base.clone();
            let mut occurrence = 1;
            while emitted.contains(&key) {
                occurrence += 1;
                key = format!("{}#{}", base, occurrence);
            }
            emitted.insert(key.clone());
            MemberKey(key)
        })
        .collect()
}

/// How a freshly fetched list differs from the one it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    /// Same members, same order, same content.
    Unchanged,
    /// Same keyed members with identical content, in a different order.
    Reordered,
    /// Members were inserted, removed or edited.
    Changed,
}

impl ListChange {
    /// Compares two member lists by key and content.
    pub fn between(previous: &[Member], next: &[Member]) -> Self {
        if previous == next {
            return ListChange::Unchanged;
        }
        if previous.len() != next.len() {
            return ListChange::Changed;
        }

        let before: HashMap<MemberKey, &Member> = assign_keys(previous)
            .into_iter()
            .zip(previous.iter())
            .collect();

        let same_members = assign_keys(next)
            .into_iter()
            .zip(next.iter())
            .all(|(key, member)| before.get(&key).is_some_and(|old| *old == member));

        if same_members {
            ListChange::Reordered
        } else {
            ListChange::Changed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(members: &[Member]) -> Vec<String> {
        assign_keys(members)
            .into_iter()
            .map(|k| k.as_str().to_string())
            .collect()
    }

    #[test]
    fn id_wins_over_email() {
        let members = vec![Member::named("A").with_id("42").with_email("a@b.c")];
        assert_eq!(keys(&members), vec!["id:42"]);
    }

    #[test]
    fn email_is_case_insensitive() {
        let members = vec![Member::named("A").with_email("Ada@Example.COM")];
        assert_eq!(keys(&members), vec!["email:ada@example.com"]);
    }

    #[test]
    fn anonymous_members_fall_back_to_position() {
        let members = vec![Member::default(), Member::named("B")];
        assert_eq!(keys(&members), vec!["pos:0", "pos:1"]);
    }

    #[test]
    fn duplicate_identities_get_suffixes() {
        let members = vec![
            Member::named("A").with_email("x@y.z"),
            Member::named("B").with_email("x@y.z"),
            Member::named("C").with_email("x@y.z"),
        ];
        assert_eq!(
            keys(&members),
            vec!["email:x@y.z", "email:x@y.z#2", "email:x@y.z#3"]
        );
    }

    #[test]
    fn suffixes_skip_ids_already_in_the_list() {
        let members = vec![
            Member::named("A").with_id("x"),
            Member::named("B").with_id("x"),
            Member::named("C").with_id("x#2"),
        ];
        let assigned = keys(&members);
        assert_eq!(assigned, vec!["id:x", "id:x#2", "id:x#2#2"]);

        let unique: std::collections::HashSet<&String> = assigned.iter().collect();
        assert_eq!(unique.len(), members.len());
    }

    #[test]
    fn identical_lists_are_unchanged() {
        let list = vec![Member::named("A").with_email("a@b.c")];
        assert_eq!(ListChange::between(&list, &list.clone()), ListChange::Unchanged);
    }

    #[test]
    fn swapped_members_are_reordered() {
        let a = Member::named("A").with_email("a@x.io");
        let b = Member::named("B").with_email("b@x.io");
        assert_eq!(
            ListChange::between(&[a.clone(), b.clone()], &[b, a]),
            ListChange::Reordered
        );
    }

    #[test]
    fn insertion_is_a_change() {
        let a = Member::named("A").with_email("a@x.io");
        let b = Member::named("B").with_email("b@x.io");
        assert_eq!(ListChange::between(&[a.clone()], &[b, a]), ListChange::Changed);
    }

    #[test]
    fn edited_content_under_same_key_is_a_change() {
        let before = Member::named("A").with_email("a@x.io");
        let after = Member::named("Alice").with_email("a@x.io");
        assert_eq!(ListChange::between(&[before], &[after]), ListChange::Changed);
    }
}
