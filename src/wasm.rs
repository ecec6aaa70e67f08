//! WebAssembly bindings for JavaScript/TypeScript host UIs.
//!
//! # Usage (JavaScript/TypeScript)
//!
//! ```javascript
//! import init, { parseContent, renderContent, RenderOptions } from '@mathmix/wasm';
//!
//! await init();
//!
//! // Segments to map onto DOM nodes
//! const segments = parseContent('Giá trị $x^2$ là 4');
//! // [{ type: 'plain_text', value: 'Giá trị ' }, { type: 'math_markup', value: '...' }, ...]
//!
//! // Or a ready-made HTML fragment
//! const options = new RenderOptions();
//! options.setMathBackend('mathml');
//! const html = renderContent(source, options);
//! ```

#![cfg(feature = "wasm")]

use crate::config::Config;
use crate::normalize::normalize_formula;
use crate::parser::parse_content_with;
use crate::render::{create_renderer, MathBackend};
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in console
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Parse content into an array of `{ type, value }` segment objects.
#[wasm_bindgen(js_name = parseContent)]
pub fn parse_content(input: &str, options: Option<RenderOptions>) -> Result<JsValue, JsError> {
    let config = options.map(|o| o.to_config()).unwrap_or_default();
    let math = create_renderer(config.html.math_backend);
    let segments = parse_content_with(input, &config.parse, math.as_ref());

    serde_wasm_bindgen::to_value(&segments)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Parse content and return the segments as a JSON string.
#[wasm_bindgen(js_name = parseContentToJson)]
pub fn parse_content_to_json(input: &str) -> Result<String, JsError> {
    let segments = crate::parser::parse_content(input);

    serde_json::to_string(&segments).map_err(|e| JsError::new(&format!("JSON error: {}", e)))
}

/// Parse content and render it to an HTML string.
#[wasm_bindgen(js_name = renderContent)]
pub fn render_content(input: &str, options: Option<RenderOptions>) -> String {
    let config = options.map(|o| o.to_config()).unwrap_or_default();
    crate::render(input, Some(&config))
}

/// Apply the formula normalization rules to a single formula body.
#[wasm_bindgen(js_name = normalizeFormula)]
pub fn normalize(formula: &str) -> String {
    normalize_formula(formula)
}

/// Get the library version.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Configuration options for parsing and rendering.
#[wasm_bindgen]
#[derive(Clone)]
pub struct RenderOptions {
    math_backend: MathBackend,
    standalone: bool,
    prose_fallback: bool,
    tidy_markup_breaks: bool,
}

#[wasm_bindgen]
impl RenderOptions {
    /// Create a new options object with defaults.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let config = Config::default();
        Self {
            math_backend: config.html.math_backend,
            standalone: config.html.standalone,
            prose_fallback: config.parse.prose_fallback,
            tidy_markup_breaks: config.parse.tidy_markup_breaks,
        }
    }

    /// Set the math rendering backend: "katex", "mathjax", or "mathml".
    #[wasm_bindgen(js_name = setMathBackend)]
    pub fn set_math_backend(&mut self, backend: &str) -> Result<(), JsError> {
        self.math_backend = backend
            .parse()
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        Ok(())
    }

    /// Set whether to generate a complete HTML document.
    #[wasm_bindgen(js_name = setStandalone)]
    pub fn set_standalone(&mut self, standalone: bool) {
        self.standalone = standalone;
    }

    /// Show formulas containing accented letters as literal text.
    #[wasm_bindgen(js_name = setProseFallback)]
    pub fn set_prose_fallback(&mut self, enabled: bool) {
        self.prose_fallback = enabled;
    }

    /// Strip edge break tags and collapse long break runs in markup.
    #[wasm_bindgen(js_name = setTidyMarkupBreaks)]
    pub fn set_tidy_markup_breaks(&mut self, enabled: bool) {
        self.tidy_markup_breaks = enabled;
    }

    fn to_config(&self) -> Config {
        let mut config = Config::default();
        config.html.math_backend = self.math_backend;
        config.html.standalone = self.standalone;
        config.parse.prose_fallback = self.prose_fallback;
        config.parse.tidy_markup_breaks = self.tidy_markup_breaks;
        config
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}
