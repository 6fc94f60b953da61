//! WebAssembly bindings for a browser host.
//!
//! The host owns rendering and the network call; this facade owns the graph.
//! Values cross the boundary as plain JS objects via `serde-wasm-bindgen`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use crate::editor::{add_edge, edit_node, EdgeInput};
use crate::generator::{append_random_edges, regenerate_nodes, GeneratorConfig};
use crate::models::{GraphSnapshot, NodeAttributes};
use crate::overlay::{clear_overlay, Palette, SolverResponse};
use crate::session::{RequestId, SolveOutcome, SolveSession};

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// An editable EVRP instance graph.
#[wasm_bindgen]
pub struct EvrpGraph {
    graph: crate::models::GraphModel,
    config: GeneratorConfig,
    session: SolveSession,
    rng: StdRng,
}

#[wasm_bindgen]
impl EvrpGraph {
    /// Creates an empty graph. A `seed` makes generation reproducible.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            graph: crate::models::GraphModel::new(),
            config: GeneratorConfig::default(),
            session: SolveSession::new(Default::default(), Palette::default()),
            rng,
        }
    }

    /// Replaces all nodes with a random set and clears the edges.
    #[wasm_bindgen(js_name = generateNodes)]
    pub fn generate_nodes(&mut self, customers: usize, stations: usize) -> usize {
        regenerate_nodes(
            &mut self.graph,
            customers,
            stations,
            &self.config,
            &mut self.rng,
        )
    }

    /// Appends random edges over the current nodes.
    #[wasm_bindgen(js_name = generateEdges)]
    pub fn generate_edges(&mut self) -> usize {
        append_random_edges(&mut self.graph, &self.config, &mut self.rng)
    }

    /// Adds a manually entered edge; throws with a user-facing message on bad input.
    #[wasm_bindgen(js_name = addEdge)]
    pub fn add_edge(&mut self, source: &str, target: &str, distance: &str) -> Result<String, JsValue> {
        add_edge(&mut self.graph, &EdgeInput::new(source, target, distance))
            .map(|added| added.id)
            .map_err(to_js_error)
    }

    /// Replaces a node's attributes (`{type, ...}` object).
    #[wasm_bindgen(js_name = editNode)]
    pub fn edit_node(&mut self, id: &str, attributes: JsValue) -> Result<(), JsValue> {
        let attributes: NodeAttributes =
            serde_wasm_bindgen::from_value(attributes).map_err(to_js_error)?;
        edit_node(&mut self.graph, id, attributes)
            .map(|_| ())
            .map_err(to_js_error)
    }

    /// The raw `{nodes, edges}` graph, for rendering or file download.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&GraphSnapshot::from_graph(&self.graph)).map_err(to_js_error)
    }

    /// Exports a solver request; returns `{id, request}`.
    #[wasm_bindgen(js_name = beginSolve)]
    pub fn begin_solve(&mut self, label: Option<String>) -> Result<JsValue, JsValue> {
        let pending = self.session.begin(&self.graph, label.as_deref());
        let request = serde_wasm_bindgen::to_value(&pending.request).map_err(to_js_error)?;
        let out = js_sys::Object::new();
        js_sys::Reflect::set(&out, &"id".into(), &JsValue::from(pending.id.get()))?;
        js_sys::Reflect::set(&out, &"request".into(), &request)?;
        Ok(out.into())
    }

    /// Applies the solver's JSON answer to request `id`.
    ///
    /// Returns `true` if the overlay was replaced, `false` if the answer was
    /// stale or no request was issued.
    #[wasm_bindgen(js_name = completeSolve)]
    pub fn complete_solve(&mut self, id: u64, body: &str) -> Result<bool, JsValue> {
        let response = SolverResponse::from_json(body).map_err(to_js_error)?;
        let outcome = self
            .session
            .complete(&mut self.graph, RequestId::from_raw(id), &response);
        Ok(matches!(outcome, SolveOutcome::Applied(_)))
    }

    /// Removes the solved routes. Returns how many overlay edges were removed.
    #[wasm_bindgen(js_name = clearOverlay)]
    pub fn clear_overlay(&mut self) -> usize {
        clear_overlay(&mut self.graph)
    }
}
