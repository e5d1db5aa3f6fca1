//! Per-frame mutable state shared between the input handlers and the
//! render loop.
//!
//! Everything here is plain math so it also compiles (and is tested) on the
//! host. The wasm side owns one `FrameState` behind an `Rc<RefCell<_>>`;
//! the browser guarantees event callbacks and animation ticks interleave on
//! a single thread, so last-write-wins is the whole synchronisation story.

/// Values pushed into the shader uniforms once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameState {
    pub elapsed_seconds: f32,
    pub mouse_x: f32,
    pub mouse_y: f32,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl FrameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mouse sample in canvas-local coordinates.
    ///
    /// `client_*` are window-relative cursor coordinates, `origin_*` the
    /// canvas bounding-rect corner. Y is flipped to a bottom-left origin so
    /// it lines up with `gl_FragCoord` in the fragment stage.
    pub fn record_mouse(&mut self, client_x: f64, client_y: f64, origin_left: f64, origin_top: f64) {
        self.mouse_x = (client_x - origin_left) as f32;
        self.mouse_y = self.viewport_height as f32 - (client_y - origin_top) as f32;
    }

    /// Record the drawing-surface size after a resize. Idempotent.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }
}

/// Elapsed-time source for the `u_time` uniform.
///
/// The baseline is the timestamp of the first tick, so the first frame
/// always reads 0.0 and later frames are non-decreasing as long as the
/// underlying clock is (performance.now is monotonic).
#[derive(Debug, Default)]
pub struct FrameClock {
    baseline_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_seconds(&mut self, now_ms: f64) -> f32 {
        let baseline = *self.baseline_ms.get_or_insert(now_ms);
        ((now_ms - baseline) / 1000.0) as f32
    }
}
