//! Graph representation and construction module

pub mod builder;
pub mod compressed;
pub mod store;

pub use builder::GraphBuilder;
pub use compressed::SortedAdjacency;
pub use store::{GraphStore, PresenceIndex};
