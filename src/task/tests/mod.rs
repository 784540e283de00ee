//! Unit tests for the task module.
//!
//! Tests are organised by concept: domain values, time-left labels,
//! validation rules, adapters, and the list service (both against real
//! in-memory adapters and against mocked ports).

mod time_left_tests;
