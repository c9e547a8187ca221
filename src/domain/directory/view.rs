//! Display projection of the directory.
//!
//! Fallback values are substituted here and nowhere else; the underlying
//! `Member` keeps raw absence.

use super::{assign_keys, Member, MemberKey};

pub const PLACEHOLDER_PHOTO_URL: &str = "https://via.placeholder.com/50";
pub const UNKNOWN_NAME: &str = "Unknown";
pub const NO_EMAIL: &str = "No email";
pub const NOT_AVAILABLE: &str = "N/A";
pub const EMPTY_DIRECTORY_MESSAGE: &str = "No users found";
pub const DIRECTORY_TITLE: &str = "Users";

fn or_fallback<'a>(value: &'a Option<String>, fallback: &'static str) -> &'a str {
    match value.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => fallback,
    }
}

/// One member with every field resolved for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberView<'a> {
    pub photo_url: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub phone_number: &'a str,
    pub gender: &'a str,
}

impl<'a> MemberView<'a> {
    pub fn of(member: &'a Member) -> Self {
        Self {
            photo_url: or_fallback(&member.photo_url, PLACEHOLDER_PHOTO_URL),
            name: or_fallback(&member.display_name, UNKNOWN_NAME),
            email: or_fallback(&member.email, NO_EMAIL),
            phone_number: or_fallback(&member.phone_number, NOT_AVAILABLE),
            gender: or_fallback(&member.gender, NOT_AVAILABLE),
        }
    }
}

/// A keyed list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRow<'a> {
    pub key: MemberKey,
    pub view: MemberView<'a>,
}

/// What the directory screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryView<'a> {
    /// First fetch has not resolved yet.
    Loading,
    /// Fetch resolved to nothing.
    Empty {
        count_label: String,
        refreshing: bool,
        message: &'static str,
    },
    List {
        count_label: String,
        refreshing: bool,
        rows: Vec<MemberRow<'a>>,
    },
}

impl<'a> DirectoryView<'a> {
    /// Builds the view for a settled or refreshing member list.
    pub fn ready(members: &'a [Member], refreshing: bool) -> Self {
        let count_label = format!("{} members", members.len());

        if members.is_empty() {
            return DirectoryView::Empty {
                count_label,
                refreshing,
                message: EMPTY_DIRECTORY_MESSAGE,
            };
        }

        let rows = assign_keys(members)
            .into_iter()
            .zip(members.iter())
            .map(|(key, member)| MemberRow {
                key,
                view: MemberView::of(member),
            })
            .collect();

        DirectoryView::List {
            count_label,
            refreshing,
            rows,
        }
    }

    pub fn title(&self) -> &'static str {
        DIRECTORY_TITLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_only_member_gets_every_other_fallback() {
        let member = Member::named("A");
        let view = MemberView::of(&member);
        assert_eq!(
            view,
            MemberView {
                photo_url: PLACEHOLDER_PHOTO_URL,
                name: "A",
                email: "No email",
                phone_number: "N/A",
                gender: "N/A",
            }
        );
    }

    #[test]
    fn empty_strings_render_as_fallbacks() {
        let member = Member {
            display_name: Some(String::new()),
            email: Some(String::new()),
            ..Default::default()
        };
        let view = MemberView::of(&member);
        assert_eq!(view.name, "Unknown");
        assert_eq!(view.email, "No email");
    }

    #[test]
    fn fallbacks_are_not_written_back() {
        let member = Member::default();
        let _ = MemberView::of(&member);
        assert_eq!(member, Member::default());
    }

    #[test]
    fn empty_list_renders_placeholder_message() {
        match DirectoryView::ready(&[], false) {
            DirectoryView::Empty {
                count_label,
                message,
                ..
            } => {
                assert_eq!(count_label, "0 members");
                assert_eq!(message, "No users found");
            }
            other => panic!("expected empty view, got {:?}", other),
        }
    }

    #[test]
    fn rows_follow_member_order_with_keys() {
        let members = vec![
            Member::named("A").with_email("a@x.io"),
            Member::named("B"),
        ];
        match DirectoryView::ready(&members, true) {
            DirectoryView::List {
                count_label,
                refreshing,
                rows,
            } => {
                assert_eq!(count_label, "2 members");
                assert!(refreshing);
                assert_eq!(rows[0].key.as_str(), "email:a@x.io");
                assert_eq!(rows[1].key.as_str(), "pos:1");
                assert_eq!(rows[1].view.name, "B");
            }
            other => panic!("expected list view, got {:?}", other),
        }
    }
}
