//! One-shot upload of a static vertex position buffer.

use web_sys::{WebGl2RenderingContext as GL, WebGlBuffer};

use crate::geometry::POSITION_COMPONENTS;
use crate::wasm::pipeline::{Pipeline, PipelineError};

/// Upload a flat `[x, y, x, y, ...]` slice into a fresh GPU buffer and wire
/// it to the pipeline's position attribute: two floats per vertex, not
/// normalised, tightly packed (zero stride, zero offset).
///
/// The data is uploaded once with STATIC_DRAW and never rewritten. The
/// pipeline must already be linked and current, which `Pipeline::build`
/// guarantees.
pub fn upload_positions(
    gl: &GL,
    pipeline: &Pipeline,
    positions: &[f32],
) -> Result<WebGlBuffer, PipelineError> {
    let buffer = gl.create_buffer().ok_or(PipelineError::CreateBuffer)?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));

    // The view aliases wasm memory directly; it must not outlive this call
    // or cross an allocation.
    unsafe {
        let view = js_sys::Float32Array::view(positions);
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &view, GL::STATIC_DRAW);
    }

    gl.vertex_attrib_pointer_with_i32(
        pipeline.position_attrib(),
        POSITION_COMPONENTS,
        GL::FLOAT,
        false,
        0,
        0,
    );
    gl.enable_vertex_attrib_array(pipeline.position_attrib());

    Ok(buffer)
}
