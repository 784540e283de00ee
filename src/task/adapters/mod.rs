//! Adapter implementations for task list ports.
//!
//! - [`memory`]: key/value storage standing in for browser session storage
//! - [`file`]: one JSON document per namespace on disk
//! - [`html`]: list markup rendered from a template
//! - [`clock`]: a clock driven by the host instead of the system time

pub mod clock;
pub mod codec;
pub mod file;
pub mod html;
pub mod memory;
