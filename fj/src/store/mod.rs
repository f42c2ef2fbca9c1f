//! Journey persistence
//!
//! A [`Storage`] is a flat key/value seam (a file per key on disk, or a map in
//! memory). [`JourneyStore`] keeps the live [`Journey`](crate::Journey) and
//! reads/writes it under a single key.

mod error;
mod journey_store;
mod storage;

pub use error::StoreError;
pub use journey_store::{JourneyStore, RestoreReport};
pub use storage::{FileStorage, MemoryStorage, Storage};
