//! Transport seam between the gateway and backend services
//!
//! The gateway only sees [`RpcClient`]: one call in, either a JSON result
//! or a [`CallError`] out. The HTTP bridge is the production transport;
//! the loopback runs services in-process and can reproduce every known
//! wire mangling of the fault record.

mod client;
mod error;
mod http;
mod loopback;

pub use client::RpcClient;
pub use error::CallError;
pub use http::HttpRpc;
pub use loopback::{FaultEncoding, LoopbackRpc};
