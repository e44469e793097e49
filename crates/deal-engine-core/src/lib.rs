pub mod deal;
pub mod error;
pub mod finance;
pub mod lease;
pub mod quote;
pub mod types;
pub mod validate;

pub use error::DealEngineError;
pub use types::*;

/// Standard result type for fallible deal-engine operations.
///
/// The payment calculators themselves are infallible by design; this is
/// used by validation and serialization surfaces.
pub type DealResult<T> = Result<T, DealEngineError>;
