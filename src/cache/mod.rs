mod entry;
mod store;

pub use entry::CacheEntry;
pub use store::ResponseCache;
