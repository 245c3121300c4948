//! Project tracking.
//!
//! Projects are named containers of descriptive metadata. They are not
//! linked to tasks. A [`services::ProjectStore`] owns the collection and
//! persists it after every mutation, exactly as the task store does.

pub mod domain;
pub mod services;
