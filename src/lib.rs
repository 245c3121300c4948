//! Taskflow: task and project tracking with durable local snapshots.
//!
//! This crate provides the state layer of a small productivity tool: an
//! ordered task collection with status filtering, statistics and a recent
//! activity view, plus a project collection with palette colours and
//! schedules. Each collection is mirrored to a key-value backend after every
//! mutation.
//!
//! # Architecture
//!
//! Taskflow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, directory)
//!
//! # Modules
//!
//! - [`task`]: Task creation, editing, filtering and statistics
//! - [`project`]: Project creation and lifecycle status
//! - [`storage`]: Versioned snapshots and persistence adapters
//! - [`config`]: Collection keys and view limits

pub mod config;
pub mod project;
pub mod storage;
pub mod task;
mod text;
