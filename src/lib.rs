//! itunes-lookup library: resolve an app-store identifier to its bundle id.

pub mod http;
pub mod lookup;
