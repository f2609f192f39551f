pub mod client;
pub mod endpoints;
pub mod proxy;
pub mod retry;

pub use client::ApiClient;
pub use proxy::ProxyDescriptor;
pub use retry::{classify, FailureClass, RetryPolicy};
