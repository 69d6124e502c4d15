pub(crate) mod eager_bootstrap;
pub(crate) mod test_support;
