//! Fragment shader sources handed to the external VFX library, plus Rust
//! mirrors of their arithmetic so the numeric behavior is pinned by native
//! tests. The library compiles and links the GLSL itself; this crate only
//! owns the text and the declared uniforms.

/// Full-frame post effect: barrel-ish zoom driven by the Chebyshev distance
/// from center, horizontal chromatic aberration, scanline interference and a
/// 20x20 grid highlight (both fading out toward the edges), a vignette, and
/// time-seeded hash noise.
///
/// Uniforms: `src` (composed frame), `offset` (pixel offset of the quad),
/// `resolution` (render size in pixels), `time` (seconds).
pub const POST_EFFECT_SHADER: &str = r#"
precision highp float;
uniform sampler2D src;
uniform vec2 offset;
uniform vec2 resolution;
uniform float time;
out vec4 outColor;

vec4 readTex(vec2 uv) {
  vec4 c = texture(src, uv);
  return c;
}

vec2 zoom(vec2 uv, float t) {
  return (uv - 0.5) * t + 0.5;
}

float rand(vec3 p) {
  return fract(sin(dot(p, vec3(829., 4839., 432.))) * 39428.);
}

void main() {
  vec2 uv = (gl_FragCoord.xy - offset) / resolution;
  vec2 p = uv * 2.0 - 1.0;
  p.x *= resolution.x / resolution.y;

  float lx = abs(p.x);
  float ly = abs(p.y);
  float l = max(lx, ly);

  float dist = smoothstep(0.0, 1.0, l * 1.2);
  uv = zoom(uv, 0.85 + dist * 0.2);

  vec2 uvr = uv + vec2(0.0015, 0.0);
  vec2 uvb = uv - vec2(0.0015, 0.0);

  vec4 cr = readTex(uvr);
  vec4 cg = readTex(uv);
  vec4 cb = readTex(uvb);

  vec4 color = vec4(cr.r, cg.g, cb.b, 1.0);

  float deco = 0.0;
  deco += sin(uv.y * resolution.y * 0.7 + time * 100.0) *
          sin(uv.y * resolution.y * 0.3 - time * 130.0) * 0.05;

  deco += smoothstep(0.01, 0.0, min(fract(uv.x * 20.0), fract(uv.y * 20.0))) * 0.1;
  color += deco * smoothstep(1.0, 0.0, l);

  color *= 1.2 - l * 0.5;
  color += rand(vec3(p, time)) * 0.08;

  outColor = color;
}
"#;

/// Per-element shader applied to each mirrored DOM node (videos, images,
/// headings). Alpha fades out near the UV boundary so elements get soft
/// edges instead of hard rectangles.
///
/// Two quirks are kept on purpose: the three sampling UVs are identical, so
/// the RGB split has no spatial effect, and the output alpha is the plain
/// sum of the channel alphas (`/ 1.`, not `/ 3.`). See DESIGN.md.
pub const ELEMENT_SHADER: &str = r#"
precision highp float;
uniform sampler2D src;
uniform vec2 offset;
uniform vec2 resolution;
uniform float time;
uniform float id;
out vec4 outColor;

vec4 readTex(vec2 uv) {
  vec4 c = texture(src, uv);
  c.a *= smoothstep(.5, .499, abs(uv.x - .5)) * smoothstep(.5, .499, abs(uv.y - .5));
  return c;
}

void main() {
  vec2 uv = (gl_FragCoord.xy - offset) / resolution;
  vec2 uvr = uv, uvg = uv, uvb = uv;
  vec4 cr = readTex(uvr);
  vec4 cg = readTex(uvg);
  vec4 cb = readTex(uvb);
  outColor = vec4(cr.r, cg.g, cb.b, (cr.a + cg.a + cb.a) / 1.);
}
"#;

/// UV-space x offset used for the red/blue taps of the post effect. Fixed in
/// UV space, so the visible width scales with the output resolution.
pub const CHROMA_OFFSET: f32 = 0.0015;

// --- Rust mirrors of the shader math -------------------------------------
//
// These reproduce the GLSL expressions exactly (including smoothstep's
// clamp-based formula, which the element mask relies on with its reversed
// edges) so tests can pin the constants without a GPU.

/// GLSL `smoothstep`: Hermite interpolation of the clamped parameter.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// GLSL `fract`.
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Centered, aspect-corrected coordinate for a fragment at `uv`:
/// `p = uv * 2 - 1`, then `p.x *= width / height`.
pub fn centered_coord(uv: (f32, f32), resolution: (f32, f32)) -> (f32, f32) {
    let (u, v) = uv;
    ((u * 2.0 - 1.0) * (resolution.0 / resolution.1), v * 2.0 - 1.0)
}

/// Chebyshev distance from center, `max(|x|, |y|)`. Falloff contours are
/// squares, so corners and edges are treated alike.
pub fn chebyshev(p: (f32, f32)) -> f32 {
    p.0.abs().max(p.1.abs())
}

/// Zoom scale at Chebyshev distance `l`: 0.85 at the center, 1.05 once
/// `l * 1.2` saturates the smoothstep.
pub fn zoom_factor(l: f32) -> f32 {
    0.85 + smoothstep(0.0, 1.0, l * 1.2) * 0.2
}

/// Scale `uv` toward (0.5, 0.5) by factor `t`.
pub fn zoom(uv: (f32, f32), t: f32) -> (f32, f32) {
    ((uv.0 - 0.5) * t + 0.5, (uv.1 - 0.5) * t + 0.5)
}

/// Scanline interference term: the product of two vertically-moving sine
/// waves at different spatial and temporal frequencies.
pub fn scanline_term(uv_y: f32, resolution_y: f32, time: f32) -> f32 {
    (uv_y * resolution_y * 0.7 + time * 100.0).sin()
        * (uv_y * resolution_y * 0.3 - time * 130.0).sin()
        * 0.05
}

/// Grid highlight: 0.1 on the lines of a 20x20 UV grid, falling to zero
/// within 0.01 of a cell.
pub fn grid_term(uv: (f32, f32)) -> f32 {
    smoothstep(0.01, 0.0, fract(uv.0 * 20.0).min(fract(uv.1 * 20.0))) * 0.1
}

/// Attenuation applied to the decoration terms, 1 at the center and 0 from
/// the unit edge outward.
pub fn edge_attenuation(l: f32) -> f32 {
    smoothstep(1.0, 0.0, l)
}

/// Vignette multiplier `1.2 - l * 0.5`.
pub fn vignette(l: f32) -> f32 {
    1.2 - l * 0.5
}

/// GLSL `rand`: `fract(sin(dot(p, vec3(829, 4839, 432))) * 39428)`.
pub fn hash_noise(p: (f32, f32, f32)) -> f32 {
    fract((p.0 * 829.0 + p.1 * 4839.0 + p.2 * 432.0).sin() * 39428.0)
}

/// Soft rectangular mask of the element shader: per-axis
/// `smoothstep(.5, .499, |u - .5|)`, multiplied together. 1 over the
/// interior, 0 at the UV boundary, with a 0.001-wide easing band.
pub fn edge_mask(uv: (f32, f32)) -> f32 {
    smoothstep(0.5, 0.499, (uv.0 - 0.5).abs()) * smoothstep(0.5, 0.499, (uv.1 - 0.5).abs())
}

/// Output alpha of the element shader for a source texel with alpha
/// `src_alpha`: three masked channel alphas summed, divided by 1 (kept
/// unaveraged, as shipped).
pub fn element_alpha(uv: (f32, f32), src_alpha: f32) -> f32 {
    let masked = src_alpha * edge_mask(uv);
    (masked + masked + masked) / 1.0
}
