pub mod config;
pub mod connection;
pub mod layout;
pub mod measure;
pub mod model;

#[cfg(feature = "cli")]
pub mod cli;

use wasm_bindgen::prelude::*;

use config::Config;
use connection::ConnectionManager;
use model::MindMapContent;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{LayoutConfig, SubtreeSpacing, load_config};
pub use connection::{ConnectError, DuplicatePolicy, EdgeDefaults};
pub use layout::{Arrangement, FitView, LayoutEngine, LevelMap, UnreachablePolicy};
pub use model::{Edge, Node, Position};

/// Initialize logging and panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = console_log::init_with_level(log::Level::Debug);
        console_error_panic_hook::set_once();
    }
}

fn options_config(options: Option<String>) -> Result<Config, String> {
    match options {
        Some(raw) => Config::from_json(&raw).map_err(|e| e.to_string()),
        None => Ok(Config::default()),
    }
}

/// Arrange a saved mind map. Takes `{ nodes, edges, version }` JSON and
/// returns `{ nodes, levels, fitView }` JSON.
#[wasm_bindgen(js_name = "autoLayout")]
pub fn auto_layout(content: &str, options: Option<String>) -> Result<String, String> {
    let config = options_config(options)?;
    let content = MindMapContent::from_json(content).map_err(|e| e.to_string())?;

    let arrangement = config.layout_engine().arrange(&content.nodes, &content.edges);
    serde_json::to_string(&arrangement).map_err(|e| e.to_string())
}

/// Build a styled edge between two nodes, as JSON.
#[wasm_bindgen(js_name = "createEdge")]
pub fn create_edge(source: &str, target: &str, options: Option<String>) -> Result<String, String> {
    let config = options_config(options)?;
    let edge = config
        .connection_manager()
        .create_edge(source, target)
        .map_err(|e| e.to_string())?;
    serde_json::to_string(&edge).map_err(|e| e.to_string())
}

/// Connection gesture state for one editor view.
#[wasm_bindgen]
pub struct ConnectionSession {
    manager: ConnectionManager,
}

impl Default for ConnectionSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ConnectionSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            manager: ConnectionManager::default(),
        }
    }

    /// Session with edge defaults from a JSON config.
    #[wasm_bindgen(js_name = "withOptions")]
    pub fn with_options(options: &str) -> Result<ConnectionSession, String> {
        let config = Config::from_json(options).map_err(|e| e.to_string())?;
        Ok(Self {
            manager: config.connection_manager(),
        })
    }

    pub fn begin(&mut self, node_id: &str) {
        self.manager.begin_connection(node_id);
    }

    #[wasm_bindgen(getter, js_name = "connectingFrom")]
    pub fn connecting_from(&self) -> Option<String> {
        self.manager.connecting_from().map(str::to_string)
    }

    pub fn clear(&mut self) {
        self.manager.clear();
    }

    /// Finish the gesture on `target`. Returns the new edge JSON, or
    /// undefined when no gesture was in flight.
    pub fn complete(&mut self, target: &str) -> Result<Option<String>, String> {
        match self.manager.complete_connection(target) {
            None => Ok(None),
            Some(Ok(edge)) => serde_json::to_string(&edge)
                .map(Some)
                .map_err(|e| e.to_string()),
            Some(Err(e)) => Err(e.to_string()),
        }
    }
}
