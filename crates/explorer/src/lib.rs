//! Client-side building blocks for browsing topologies registered with a
//! Heron tracker: selector parsing, the listing data model, the tracker HTTP
//! client and table rendering.

pub mod context;
pub mod directories;
pub mod prelude;
pub mod selector;
pub mod settings;
pub mod table;
pub mod topology;
pub mod tracker;

pub use selector::Selector;
pub use topology::{ClusterTopologies, TopologyListing};
