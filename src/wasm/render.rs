//! Context acquisition, input wiring and the animation loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlCanvasElement, MouseEvent, WebGl2RenderingContext as GL};

use crate::frame::{FrameClock, FrameState};
use crate::geometry::vertex_count;
use crate::wasm::buffer::upload_positions;
use crate::wasm::pipeline::{Pipeline, ShaderSource};

/// Ask the canvas for a WebGL2 context. Unsupported hardware or a browser
/// without WebGL2 is terminal: the error propagates out and nothing else
/// is set up.
pub fn acquire_context(canvas: &HtmlCanvasElement) -> Result<GL, JsValue> {
    canvas
        .get_context("webgl2")?
        .ok_or_else(|| {
            JsValue::from_str(
                "Unable to initialize WebGL2. Your browser or machine may not support it.",
            )
        })?
        .dyn_into::<GL>()
        .map_err(|_| JsValue::from_str("canvas returned a non-WebGL2 context"))
}

/// Fit the drawing surface to the window and keep the shader's idea of the
/// resolution in sync. Runs once at startup and on every resize event.
fn apply_resize(gl: &GL, canvas: &HtmlCanvasElement, pipeline: &Pipeline, state: &mut FrameState) {
    let win = match window() {
        Some(win) => win,
        None => return,
    };
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as u32;
    let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as u32;

    canvas.set_width(width);
    canvas.set_height(height);
    gl.viewport(0, 0, width as i32, height as i32);
    pipeline.set_resolution(gl, width as f32, height as f32);
    state.set_viewport(width, height);
}

/// Handle to a running animation loop.
///
/// Dropping it leaves the loop running (the closures own their state);
/// [`RenderLoop::stop`] is the explicit cancellation path.
pub struct RenderLoop {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
}

impl RenderLoop {
    /// Cancel the pending animation frame and stop rescheduling.
    pub fn stop(&self) {
        if self.running.replace(false) {
            if let Some(win) = window() {
                let _ = win.cancel_animation_frame(self.raf_id.get());
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

/// Build the whole pipeline and start drawing.
///
/// Acquire context, compile + link, upload the vertex positions, do an
/// initial resize, register the resize and mousemove listeners, then kick
/// off the animation loop. Any failure before the first tick propagates
/// out and the loop is never started.
pub fn start(
    canvas: HtmlCanvasElement,
    source: &ShaderSource,
    positions: &[f32],
) -> Result<RenderLoop, JsValue> {
    let gl = acquire_context(&canvas)?;
    let pipeline = Rc::new(Pipeline::build(&gl, source)?);
    let _buffer = upload_positions(&gl, &pipeline, positions)?;
    let count = vertex_count(positions);
    log::info!("shader {} ready ({} vertices)", source.name, count);

    let state = Rc::new(RefCell::new(FrameState::new()));

    // Initial fit before the first tick.
    apply_resize(&gl, &canvas, &pipeline, &mut state.borrow_mut());

    // Refit on every window resize, no debounce.
    {
        let gl = gl.clone();
        let canvas = canvas.clone();
        let pipeline = pipeline.clone();
        let state = state.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            apply_resize(&gl, &canvas, &pipeline, &mut state.borrow_mut());
        }) as Box<dyn FnMut()>);
        window()
            .ok_or("no window")?
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
        resize_closure.forget();
    }

    // Track the cursor in canvas-local pixels, bottom-left origin. Raw last
    // sample only; the next tick picks it up.
    {
        let rect_source = canvas.clone();
        let state = state.clone();
        let mouse_closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            let rect = rect_source.get_bounding_client_rect();
            state.borrow_mut().record_mouse(
                event.client_x() as f64,
                event.client_y() as f64,
                rect.left(),
                rect.top(),
            );
        }) as Box<dyn FnMut(MouseEvent)>);
        canvas
            .add_event_listener_with_callback("mousemove", mouse_closure.as_ref().unchecked_ref())?;
        mouse_closure.forget();
    }

    let running = Rc::new(Cell::new(true));
    let raf_id = Rc::new(Cell::new(0));

    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let mut clock = FrameClock::new();
    {
        let gl = gl.clone();
        let pipeline = pipeline.clone();
        let state = state.clone();
        let running = running.clone();
        let raf_id = raf_id.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running.get() {
                return;
            }

            let now = window().unwrap().performance().unwrap().now();
            let elapsed = clock.elapsed_seconds(now);
            {
                let s = state.borrow();
                pipeline.set_time(&gl, elapsed);
                pipeline.set_mouse(&gl, s.mouse_x, s.mouse_y);
            }

            gl.clear_color(0.0, 0.0, 0.0, 1.0);
            gl.clear(GL::COLOR_BUFFER_BIT);
            gl.draw_arrays(GL::TRIANGLES, 0, count);

            // schedule next
            let id = window()
                .unwrap()
                .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref())
                .unwrap();
            raf_id.set(id);
        }) as Box<dyn FnMut()>));
    }

    let id = window()
        .ok_or("no window")?
        .request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;
    raf_id.set(id);

    Ok(RenderLoop { running, raf_id })
}
