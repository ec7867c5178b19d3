//! Local form state for the two input panels.
//!
//! Drafts live here, not in the store: a form only hands a finished value
//! (a new friend, a balance delta) back to the controller on submit.

pub mod add_friend;
pub mod split_bill;

pub use add_friend::{AddFriendDraft, AddFriendField};
pub use split_bill::{Payer, SplitBillDraft, SplitBillField};
