#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

// Frame state and geometry are plain math, compiled on every target so the
// host test suite can exercise them. Everything touching the DOM or GL is
// wasm32-only.

pub mod frame;
pub mod geometry;

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    pub mod buffer;
    pub mod pipeline;
    pub mod render;
    pub mod shaders;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    const CANVAS_ID: &str = "gl-canvas";

    /// Page entry point: hook the canvas up to the shader named in the
    /// `?shader=` query parameter (or the default) and start drawing.
    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = match document.get_element_by_id(CANVAS_ID) {
            Some(element) => element.dyn_into::<web_sys::HtmlCanvasElement>()?,
            None => {
                // Headless documents (e.g. the test harness page) have no
                // canvas; there is nothing to draw.
                log::warn!("no #{CANVAS_ID} element in this document, not starting");
                return Ok(());
            }
        };

        let source = selected_shader(&window);
        let result = render::start(canvas, source, &crate::geometry::QUAD_POSITIONS);
        if let Err(err) = &result {
            // Context or pipeline failure is terminal: surface the raw
            // diagnostic in a blocking alert and on the console, then halt.
            let message = err
                .as_string()
                .unwrap_or_else(|| format!("{err:?}"));
            log::error!("startup failed: {message}");
            window.alert_with_message(&message).ok();
        }
        result.map(|_running| ())
    }

    fn selected_shader(window: &web_sys::Window) -> &'static pipeline::ShaderSource {
        let requested = window
            .location()
            .search()
            .ok()
            .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
            .and_then(|params| params.get("shader"));
        match requested {
            Some(name) => shaders::by_name(&name).unwrap_or_else(|| {
                log::warn!(
                    "unknown shader {name:?}, falling back to {}",
                    shaders::DEFAULT.name
                );
                shaders::DEFAULT
            }),
            None => shaders::DEFAULT,
        }
    }
}
