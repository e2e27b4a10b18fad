//! Use-case services over the durable store.
//!
//! # Responsibility
//! - Own the mutable task/section/people collections for the process.
//! - Funnel every mutation through one method surface, persisting after each.
//!
//! # Invariants
//! - Single-writer by construction: mutations take `&mut self`, views read
//!   snapshots by reference, so every read observes the latest completed
//!   mutation.
//! - Services never surface a storage failure; see `store::DurableStore`.

pub mod people;
pub mod task_store;
