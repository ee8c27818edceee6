//! Service-side half of the arena fault pipeline
//!
//! Backend services register [`RpcHandler`]s on a [`Dispatcher`]; every
//! failure leaving a handler is translated into the canonical fault
//! record before the transport serializes it, so nothing framework- or
//! bug-specific ever reaches the wire.

mod dispatch;
mod error;
mod serve;
mod translate;

pub use dispatch::{Dispatcher, RpcHandler, handler_fn};
pub use error::{DomainFault, DomainPayload, RaisedError};
pub use serve::rpc_router;
pub use translate::translate;
