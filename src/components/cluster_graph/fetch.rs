//! Loading graph documents over the browser fetch API.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::error::{GraphError, js_err};
use super::types::Graph;

/// GET `url` and decode the body as a graph document.
///
/// Network failures, non-2xx statuses, parse failures and dangling link
/// endpoints all come back as [`GraphError`] so callers can surface them
/// instead of leaving an empty canvas.
pub async fn load_graph(url: &str) -> Result<Graph, GraphError> {
	let window = web_sys::window().ok_or_else(|| GraphError::Dom("no window".into()))?;
	let response = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(|e| GraphError::Fetch {
			url: url.into(),
			reason: format!("{e:?}"),
		})?;
	let response: Response = response.dyn_into().map_err(|_| GraphError::Fetch {
		url: url.into(),
		reason: "not a Response".into(),
	})?;

	if !response.ok() {
		return Err(GraphError::Status {
			url: url.into(),
			status: response.status(),
		});
	}

	let body = JsFuture::from(response.text().map_err(js_err)?)
		.await
		.map_err(js_err)?;
	let body = body
		.as_string()
		.ok_or_else(|| GraphError::Dom("response body is not text".into()))?;

	let graph = Graph::from_json(&body)?;
	log::debug!(
		"loaded {url}: {} nodes, {} links",
		graph.nodes.len(),
		graph.links.len()
	);
	Ok(graph)
}
