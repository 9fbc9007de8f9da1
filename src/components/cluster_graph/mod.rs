//! One force-directed cluster diagram: graph data model, fetch, color
//! scale, simulation state, SVG binding, and the component tying them
//! together.

mod component;
mod error;
pub mod fetch;
pub mod scale;
pub mod state;
pub mod svg;
mod types;

pub use component::{ClusterGraph, DiagramConfig, SURFACE_SIZE};
pub use error::GraphError;
pub use types::{ClusterId, Graph, GraphLink, GraphNode};
