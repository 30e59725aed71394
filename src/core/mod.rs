//! Core module - the organizer and its domain types

mod guard;
mod naming;
mod organizer;
mod types;

pub(crate) use organizer::{Organizer, OrganizerOptions};
#[cfg(test)]
pub(crate) use types::Action;
pub(crate) use types::{ActionKind, OrganizerLists, RunReport};
