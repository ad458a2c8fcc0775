//! CLI command implementations.

pub(crate) mod devices;
