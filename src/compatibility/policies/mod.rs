mod item_resolution;
mod message_classification;

pub use item_resolution::{ItemResolution, ItemResolver};
pub use message_classification::{LineStatus, MessageClassification};
