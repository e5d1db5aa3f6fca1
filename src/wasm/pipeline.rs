//! Shader pipeline build: compile both stages, link, resolve the attribute
//! and uniform locations the playground shaders use.
//!
//! A program is write-once here. It is built exactly once at startup and
//! never re-attached or relinked; every failure along the way is a typed
//! error carrying the driver diagnostic verbatim, and callers must branch
//! on it before touching the handle.

use std::fmt;

use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{WebGl2RenderingContext as GL, WebGlProgram, WebGlShader, WebGlUniformLocation};

/// One shader compilation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    fn gl_enum(self) -> u32 {
        match self {
            Stage::Vertex => GL::VERTEX_SHADER,
            Stage::Fragment => GL::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Vertex => f.write_str("vertex"),
            Stage::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("could not allocate {0} shader object")]
    CreateShader(Stage),
    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: Stage, log: String },
    #[error("could not allocate program object")]
    CreateProgram,
    #[error("program failed to link: {log}")]
    Link { log: String },
    #[error("vertex attribute {0:?} not found in linked program")]
    MissingAttribute(String),
    #[error("could not allocate vertex buffer")]
    CreateBuffer,
}

impl From<PipelineError> for JsValue {
    fn from(err: PipelineError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// Immutable source pair plus the attribute name table for one pipeline.
#[derive(Debug, Clone, Copy)]
pub struct ShaderSource {
    pub name: &'static str,
    pub vertex: &'static str,
    pub fragment: &'static str,
    pub position_attribute: &'static str,
}

/// Compile one stage. On rejection the shader object is released and the
/// compiler log is returned untouched.
pub fn compile_shader(gl: &GL, stage: Stage, source: &str) -> Result<WebGlShader, PipelineError> {
    let shader = gl
        .create_shader(stage.gl_enum())
        .ok_or(PipelineError::CreateShader(stage))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(PipelineError::Compile { stage, log })
    }
}

/// Link two compiled stages. On rejection the program object is released
/// and the linker log is returned untouched.
pub fn link_program(
    gl: &GL,
    vertex: &WebGlShader,
    fragment: &WebGlShader,
) -> Result<WebGlProgram, PipelineError> {
    let program = gl.create_program().ok_or(PipelineError::CreateProgram)?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(PipelineError::Link { log })
    }
}

/// A linked program with its playground locations resolved.
pub struct Pipeline {
    program: WebGlProgram,
    position_attrib: u32,
    u_time: Option<WebGlUniformLocation>,
    u_mouse: Option<WebGlUniformLocation>,
    u_resolution: Option<WebGlUniformLocation>,
}

impl Pipeline {
    /// Compile (vertex stage first, always), link, make current, and look
    /// up locations. Location lookup needs the linked, current program.
    pub fn build(gl: &GL, source: &ShaderSource) -> Result<Self, PipelineError> {
        let vertex = compile_shader(gl, Stage::Vertex, source.vertex)?;
        let fragment = compile_shader(gl, Stage::Fragment, source.fragment)?;
        let program = link_program(gl, &vertex, &fragment)?;
        gl.use_program(Some(&program));

        let position_attrib = gl.get_attrib_location(&program, source.position_attribute);
        if position_attrib < 0 {
            return Err(PipelineError::MissingAttribute(
                source.position_attribute.to_owned(),
            ));
        }

        let u_time = gl.get_uniform_location(&program, "u_time");
        let u_mouse = gl.get_uniform_location(&program, "u_mouse");
        let u_resolution = gl.get_uniform_location(&program, "u_resolution");

        Ok(Self {
            program,
            position_attrib: position_attrib as u32,
            u_time,
            u_mouse,
            u_resolution,
        })
    }

    pub fn program(&self) -> &WebGlProgram {
        &self.program
    }

    pub fn position_attrib(&self) -> u32 {
        self.position_attrib
    }

    pub fn has_resolution_uniform(&self) -> bool {
        self.u_resolution.is_some()
    }

    // Uniform pushes are no-ops when the shader does not declare the name;
    // passing a null location is ignored by the GL.

    pub fn set_time(&self, gl: &GL, seconds: f32) {
        gl.uniform1f(self.u_time.as_ref(), seconds);
    }

    pub fn set_mouse(&self, gl: &GL, x: f32, y: f32) {
        gl.uniform2f(self.u_mouse.as_ref(), x, y);
    }

    pub fn set_resolution(&self, gl: &GL, width: f32, height: f32) {
        gl.uniform2f(self.u_resolution.as_ref(), width, height);
    }
}
