//! Payment and refund flows.

pub mod payflow;
pub mod refundflow;

pub use payflow::PayFlow;
pub use refundflow::RefundFlow;
