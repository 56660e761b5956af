//! Logging infrastructure: the [`Log`] trait and its console and in-memory
//! backends.

mod logger;
mod memory;
mod subscriber;
mod types;

pub use logger::Logger;
pub use memory::{LogEntry, MemoryLog};
pub use subscriber::init_subscriber;
pub use types::{Log, PackageEntry, PackageStatus};
