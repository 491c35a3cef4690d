//! Named, user-triggerable actions and the registry that owns them.
//!
//! Every operation the player exposes to the user is an [`Action`]: a stable
//! string id, a label, an optional icon, and an effective keyboard shortcut.
//! The [`ActionRegistry`] materializes actions lazily from the compiled-in
//! [`catalog`], bulk-loads user-authored commands from the persisted store,
//! and keeps every live action's shortcut reconciled with the shortcut
//! store's overrides.

mod action;
pub mod catalog;
mod registry;

#[cfg(test)]
mod test_registry;

pub use action::{Action, ActionKind};
pub use registry::ActionRegistry;
