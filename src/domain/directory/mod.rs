//! Directory domain - member records, list identity, screen state and
//! the display projection.

mod identity;
mod member;
mod normalize;
mod state;
mod view;

pub use identity::{assign_keys, ListChange, MemberKey};
pub use member::Member;
pub use normalize::{normalize_collection, COLLECTION_FIELD};
pub use state::{DirectoryPhase, DirectoryState, FetchTicket, FetchTrigger};
pub use view::{
    DirectoryView, MemberRow, MemberView, DIRECTORY_TITLE, EMPTY_DIRECTORY_MESSAGE, NOT_AVAILABLE,
    NO_EMAIL, PLACEHOLDER_PHOTO_URL, UNKNOWN_NAME,
};
