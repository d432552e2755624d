//! Adapters connecting the core to the outside world.

pub mod http;
