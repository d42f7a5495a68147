pub mod request_id;

pub use request_id::{CorrelationId, CorrelationIdExt, RequestIdMiddleware};
