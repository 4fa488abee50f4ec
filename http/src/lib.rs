//! # Callapi HTTP
//!
//! A default, `reqwest`-backed provider for the callapi orchestration
//! layer.
//!
//! Descriptor factories build an [`HttpRequestSpec`] per call; the
//! [`HttpProvider`] turns it into an HTTP request and shapes the response
//! to the data-plus-metadata convention the default hooks consume:
//!
//! - 2xx response → `Ok({ data: <body>, status: <code> })`
//! - non-2xx response → `Err({ data: <body>, status: <code> })`
//! - transport failure → `Err(<error display string>)` (no `data` field)
//!
//! ## Example
//!
//! ```
//! use callapi_http::{HttpMethod, HttpProvider, HttpRequestSpec};
//!
//! let provider = HttpProvider::new().with_base_url("https://api.example.com");
//!
//! let spec = HttpRequestSpec::get("/users/42")
//!     .with_header("accept", "application/json");
//! assert_eq!(spec.method, HttpMethod::Get);
//! # let _ = provider;
//! ```

/// The reqwest-backed provider.
pub mod provider;

/// Request specifications understood by the provider.
pub mod spec;

pub use provider::HttpProvider;
pub use spec::{HttpMethod, HttpRequestSpec};
