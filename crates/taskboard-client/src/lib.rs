//! Taskboard Client Core
//!
//! Layered architecture:
//! - domain: Task/user entities and the client error taxonomy
//! - session: Credential store abstraction
//! - remote: Remote collaborator traits and the HTTP transport
//! - sync: Optimistic task-list synchronizer
//! - auth: Signup/signin flows

pub mod auth;
pub mod domain;
pub mod remote;
pub mod session;
pub mod sync;
