//! taskflow - Task State Reconciliation and View Projection
//!
//! The core of a personal task tracker: it owns the canonical in-memory
//! collections of tasks and categories, applies create/toggle/delete
//! operations against asynchronous backing stores, and derives the
//! filtered, sorted, and counted views a presentation layer renders.
//!
//! # Core Concepts
//!
//! - **Stores**: async CRUD adapters over the task and category
//!   collections, with injectable simulated latency and outage failures
//! - **Engine**: the single writer of the canonical snapshot; mutations
//!   go store-first and the snapshot only ever adopts store responses
//! - **Projection**: pure filtered/sorted task lists plus per-category
//!   incomplete counts, recomputed from any snapshot
//!
//! # Module Organization
//!
//! - `error`: error types and result alias
//! - `model`: task and category records, drafts, patches, wire shape
//! - `latency`: injectable per-operation delay profile
//! - `store`: store traits and in-memory implementations
//! - `engine`: the reconciliation engine and its snapshot
//! - `projection`: pure view derivation
//! - `seed`: default category pack and demo tasks

pub mod engine;
pub mod error;
pub mod latency;
pub mod model;
pub mod projection;
pub mod seed;
pub mod store;

pub use engine::{Engine, Snapshot};
pub use error::{Error, Result};
pub use latency::LatencyProfile;
pub use model::{Category, CategoryDraft, CategoryPatch, Task, TaskDraft, TaskId, TaskPatch};
pub use projection::{project, ActiveCategory, Projection, TaskCounts};
pub use store::{CategoryStore, MemoryCategoryStore, MemoryTaskStore, TaskStore};
