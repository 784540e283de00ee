//! Tasklist: the state and derived-view core of a deadline task list.
//!
//! This crate keeps an ordered list of tasks, validates new entries,
//! computes how much time is left until each deadline, orders the list on
//! request, and round-trips it through a key/value store. Rendering and
//! storage are reached through ports so the core runs the same in a browser
//! host, on the desktop, or in tests.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure values and rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and presentation
//! - **Adapters**: Concrete implementations of ports (memory, file, HTML)
//!
//! # Modules
//!
//! - [`task`]: Task entity, validation, time-left labels, and the list service

pub mod task;
