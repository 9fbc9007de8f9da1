use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong between requesting a graph document and
/// having its primitives bound into the page.
#[derive(Debug, Error)]
pub enum GraphError {
	#[error("fetching {url} failed: {reason}")]
	Fetch { url: String, reason: String },

	#[error("fetching {url} returned HTTP {status}")]
	Status { url: String, status: u16 },

	#[error("invalid graph document: {0}")]
	Parse(#[from] serde_json::Error),

	#[error("link {link} {end} references node {index}, but the document has {nodes} nodes")]
	DanglingEndpoint {
		link: usize,
		end: &'static str,
		index: usize,
		nodes: usize,
	},

	#[error("no element with id \"{0}\" in the page")]
	MissingContainer(String),

	#[error("DOM operation failed: {0}")]
	Dom(String),
}

pub(crate) fn js_err(value: JsValue) -> GraphError {
	GraphError::Dom(format!("{value:?}"))
}
