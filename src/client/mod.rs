use std::sync::Arc;

use crate::fetcher::CachingFetcher;

mod impls;

/// Long-lived facade over the upstream API: one credential gate, one cache.
///
/// Clones share the same credential and cache.
#[derive(Clone)]
pub struct FotmobClient {
    fetcher: Arc<CachingFetcher>,
}
