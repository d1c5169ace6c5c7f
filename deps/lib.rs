pub use backtrace;
pub use base64;
pub use chrono;
pub use futures;
pub use http;
pub use hyper;
pub use serde;
pub use serde_json;
pub use serde_urlencoded;
pub use tokio;
pub use tracing;
pub use url;
