#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::WebGl2RenderingContext as GL;

use shaderpad_wasm::geometry::{vertex_count, TRIANGLE_POSITIONS};
use shaderpad_wasm::wasm::buffer::upload_positions;
use shaderpad_wasm::wasm::pipeline::{
    compile_shader, link_program, Pipeline, PipelineError, Stage,
};
use shaderpad_wasm::wasm::shaders;

wasm_bindgen_test_configure!(run_in_browser);

/// A detached canvas is enough to obtain a live GL context.
fn test_context(width: u32, height: u32) -> GL {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: web_sys::HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
        .get_context("webgl2")
        .unwrap()
        .expect("browser without WebGL2")
        .dyn_into()
        .unwrap()
}

#[wasm_bindgen_test]
fn invalid_source_reports_compiler_log() {
    let gl = test_context(16, 16);
    let err = compile_shader(&gl, Stage::Fragment, "this is not glsl").unwrap_err();
    match err {
        PipelineError::Compile { stage, log } => {
            assert_eq!(stage, Stage::Fragment);
            assert!(!log.is_empty(), "compiler log must not be empty");
        }
        other => panic!("expected compile error, got {other}"),
    }
}

#[wasm_bindgen_test]
fn mismatched_varyings_report_linker_log() {
    let gl = test_context(16, 16);
    let vertex = compile_shader(
        &gl,
        Stage::Vertex,
        "attribute vec2 aPosition; varying vec3 vShade;
         void main() { vShade = vec3(aPosition, 0.0); gl_Position = vec4(aPosition, 0.0, 1.0); }",
    )
    .unwrap();
    let fragment = compile_shader(
        &gl,
        Stage::Fragment,
        "precision mediump float; varying vec4 vShade;
         void main() { gl_FragColor = vShade; }",
    )
    .unwrap();

    match link_program(&gl, &vertex, &fragment) {
        Err(PipelineError::Link { log }) => assert!(!log.is_empty(), "linker log must not be empty"),
        Err(other) => panic!("expected link error, got {other}"),
        Ok(_) => panic!("mismatched varyings linked successfully"),
    }
}

#[wasm_bindgen_test]
fn catalog_pipelines_build() {
    let gl = test_context(16, 16);
    for source in shaders::CATALOG {
        let pipeline = Pipeline::build(&gl, source)
            .unwrap_or_else(|err| panic!("shader {} failed: {err}", source.name));
        drop(pipeline);
    }
    assert!(Pipeline::build(&gl, &shaders::POINTER)
        .unwrap()
        .has_resolution_uniform());
}

#[wasm_bindgen_test]
fn yellow_triangle_covers_the_centre() {
    let gl = test_context(64, 64);
    gl.viewport(0, 0, 64, 64);
    let pipeline = Pipeline::build(&gl, &shaders::SOLID).unwrap();
    let _buffer = upload_positions(&gl, &pipeline, &TRIANGLE_POSITIONS).unwrap();

    gl.clear_color(0.0, 0.0, 0.0, 1.0);
    gl.clear(GL::COLOR_BUFFER_BIT);
    gl.draw_arrays(GL::TRIANGLES, 0, vertex_count(&TRIANGLE_POSITIONS));

    assert_eq!(read_pixel(&gl, 32, 32), [255, 255, 0, 255]);
    assert_eq!(read_pixel(&gl, 1, 1), [0, 0, 0, 255]);
}

fn read_pixel(gl: &GL, x: i32, y: i32) -> [u8; 4] {
    let mut px = [0u8; 4];
    gl.read_pixels_with_opt_u8_array(x, y, 1, 1, GL::RGBA, GL::UNSIGNED_BYTE, Some(&mut px))
        .unwrap();
    px
}
