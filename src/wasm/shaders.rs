//! The playground shader catalog.
//!
//! All entries share a pass-through vertex stage: clip-space positions go
//! straight out with z=0, w=1, no transforms. The fragment stages are the
//! toy colour functions, each reading some subset of the `u_time`,
//! `u_mouse` and `u_resolution` uniforms. `u_mouse` is in pixels with a
//! bottom-left origin, matching `gl_FragCoord`.

use crate::wasm::pipeline::ShaderSource;

const PASSTHROUGH_VERTEX: &str = r#"
attribute vec2 aPosition;
void main() {
    gl_Position = vec4(aPosition, 0.0, 1.0);
}
"#;

const SOLID_FRAGMENT: &str = r#"
precision mediump float;
void main() {
    gl_FragColor = vec4(1.0, 1.0, 0.0, 1.0);
}
"#;

const LINEAR_FRAGMENT: &str = r#"
precision mediump float;
uniform vec2 u_resolution;
void main() {
    float t = gl_FragCoord.y / u_resolution.y;
    vec3 bottom = vec3(0.05, 0.05, 0.25);
    vec3 top = vec3(1.0, 0.55, 0.1);
    gl_FragColor = vec4(mix(bottom, top, t), 1.0);
}
"#;

const RADIAL_FRAGMENT: &str = r#"
precision mediump float;
uniform vec2 u_resolution;
void main() {
    vec2 uv = gl_FragCoord.xy / u_resolution;
    float d = distance(uv, vec2(0.5));
    vec3 inner = vec3(0.9, 0.9, 1.0);
    vec3 outer = vec3(0.1, 0.0, 0.3);
    gl_FragColor = vec4(mix(inner, outer, clamp(d * 2.0, 0.0, 1.0)), 1.0);
}
"#;

const BANDS_FRAGMENT: &str = r#"
precision mediump float;
uniform vec2 u_resolution;
uniform float u_time;
void main() {
    float x = gl_FragCoord.x / u_resolution.x;
    vec3 c = 0.5 + 0.5 * cos(6.2831853 * (x + u_time * 0.1) + vec3(0.0, 2.0944, 4.1888));
    gl_FragColor = vec4(c, 1.0);
}
"#;

const POINTER_FRAGMENT: &str = r#"
precision mediump float;
uniform vec2 u_resolution;
uniform vec2 u_mouse;
uniform float u_time;
void main() {
    vec2 uv = gl_FragCoord.xy / u_resolution;
    vec2 m = u_mouse / u_resolution;
    vec3 base = 0.5 + 0.5 * cos(u_time + uv.xyx + vec3(0.0, 2.0, 4.0));
    float glow = exp(-6.0 * distance(uv, m));
    gl_FragColor = vec4(base * 0.6 + vec3(glow), 1.0);
}
"#;

/// Constant yellow; also what the end-to-end readback test draws.
pub const SOLID: ShaderSource = ShaderSource {
    name: "solid",
    vertex: PASSTHROUGH_VERTEX,
    fragment: SOLID_FRAGMENT,
    position_attribute: "aPosition",
};

/// Vertical two-colour gradient.
pub const LINEAR: ShaderSource = ShaderSource {
    name: "linear",
    vertex: PASSTHROUGH_VERTEX,
    fragment: LINEAR_FRAGMENT,
    position_attribute: "aPosition",
};

/// Gradient ring around the viewport centre.
pub const RADIAL: ShaderSource = ShaderSource {
    name: "radial",
    vertex: PASSTHROUGH_VERTEX,
    fragment: RADIAL_FRAGMENT,
    position_attribute: "aPosition",
};

/// Rainbow bands scrolling with time.
pub const BANDS: ShaderSource = ShaderSource {
    name: "bands",
    vertex: PASSTHROUGH_VERTEX,
    fragment: BANDS_FRAGMENT,
    position_attribute: "aPosition",
};

/// Time-cycling palette with a glow following the cursor.
pub const POINTER: ShaderSource = ShaderSource {
    name: "pointer",
    vertex: PASSTHROUGH_VERTEX,
    fragment: POINTER_FRAGMENT,
    position_attribute: "aPosition",
};

pub const CATALOG: [&ShaderSource; 5] = [&SOLID, &LINEAR, &RADIAL, &BANDS, &POINTER];

pub const DEFAULT: &ShaderSource = &POINTER;

pub fn by_name(name: &str) -> Option<&'static ShaderSource> {
    CATALOG.iter().copied().find(|s| s.name == name)
}
