//! 应用层

mod conversions;
mod dto;
mod service;

pub use conversions::*;
pub use dto::*;
pub use service::*;
