//! Users domain module (profiles and subscription lists).
//!
//! This crate contains the user record and its rules, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod user;

pub use user::{CreateUser, User, UserKey, UserPatch};
