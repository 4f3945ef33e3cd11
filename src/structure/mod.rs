//! Types to represent HCL attributes and blocks.

mod attribute;
mod block;

pub use attribute::Attribute;
pub use block::{Block, BlockBuilder};
