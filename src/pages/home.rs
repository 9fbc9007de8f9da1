use leptos::prelude::*;

use crate::components::cluster_graph::{ClusterGraph, DiagramConfig};

/// The six diagrams on the page: three datasets, each shown as the raw
/// similarity graph and as the spectrally clustered one.
const DIAGRAMS: &[DiagramConfig] = &[
	DiagramConfig {
		container_id: "noisy_moons_graph",
		resource_url: "/static/noisy_moons_graph.json",
		title: "Noisy moons",
	},
	DiagramConfig {
		container_id: "noisy_moons_graph_clusters",
		resource_url: "/static/noisy_moons_graph_clusters.json",
		title: "Noisy moons, spectral clusters",
	},
	DiagramConfig {
		container_id: "proteome_epsilon_graph",
		resource_url: "/static/proteome_epsilon_graph.json",
		title: "Proteome similarity, epsilon graph",
	},
	DiagramConfig {
		container_id: "proteome_epsilon_graph_clusters",
		resource_url: "/static/proteome_epsilon_graph_clusters.json",
		title: "Proteome similarity, spectral clusters",
	},
	DiagramConfig {
		container_id: "nneighbors_graph",
		resource_url: "/static/nneighbors_graph.json",
		title: "Nearest neighbours",
	},
	DiagramConfig {
		container_id: "nneighbors_graph_clusters",
		// The artifact pipeline emits this one with a doubled suffix.
		resource_url: "/static/nneighbors_graph_clusters_graph.json",
		title: "Nearest neighbours, spectral clusters",
	},
];

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<main class="diagram-gallery">
			<h1>"Spectral clustering graphs"</h1>
			<p class="subtitle">
				"Precomputed cluster graphs, laid out live in the browser. Drag nodes to reposition them."
			</p>
			{DIAGRAMS
				.iter()
				.map(|config| view! { <ClusterGraph config=config.clone() /> })
				.collect_view()}
		</main>
	}
}
