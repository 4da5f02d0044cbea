//! XML parsing and deserialization

pub mod validation;
pub mod xml;

// # Streaming Parser Module (Week 13+)
// 
// Future streaming parser implementation for large scenario files:
// ```rust,ignore
// #[cfg(feature = "streaming")]
// pub mod streaming;
// ```
