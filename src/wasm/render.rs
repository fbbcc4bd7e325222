use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlCanvasElement, HtmlVideoElement, WebGl2RenderingContext as GL, WebGlProgram, WebGlShader,
    WebGlTexture, WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::error::LedWallError;
use crate::fit::CanvasDims;
use crate::shader::{self, MaskShape, ShadeParams};

/// `HAVE_CURRENT_DATA`: the element can hand over at least one frame.
const HAVE_CURRENT_DATA: u16 = 2;

struct LedProgram {
    program: WebGlProgram,
    tex0: Option<WebGlUniformLocation>,
    resolution: Option<WebGlUniformLocation>,
    led_count: Option<WebGlUniformLocation>,
    pitch: Option<WebGlUniformLocation>,
}

impl LedProgram {
    fn new(gl: &GL, shape: MaskShape) -> Result<Self, LedWallError> {
        let vs = compile(gl, GL::VERTEX_SHADER, shader::VERTEX_SHADER)?;
        let fs = compile(gl, GL::FRAGMENT_SHADER, shape.fragment_source())?;
        let program = gl
            .create_program()
            .ok_or(LedWallError::Allocation("program"))?;
        gl.attach_shader(&program, &vs);
        gl.attach_shader(&program, &fs);
        gl.link_program(&program);
        let linked = gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        gl.delete_shader(Some(&vs));
        gl.delete_shader(Some(&fs));
        if !linked {
            let info = gl.get_program_info_log(&program).unwrap_or_default();
            gl.delete_program(Some(&program));
            return Err(LedWallError::ProgramLink(info));
        }
        Ok(Self {
            tex0: gl.get_uniform_location(&program, shader::U_TEXTURE),
            resolution: gl.get_uniform_location(&program, shader::U_RESOLUTION),
            led_count: gl.get_uniform_location(&program, shader::U_LED_COUNT),
            pitch: gl.get_uniform_location(&program, shader::U_PITCH),
            program,
        })
    }
}

fn compile(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, LedWallError> {
    let sh = gl
        .create_shader(kind)
        .ok_or(LedWallError::Allocation("shader"))?;
    gl.shader_source(&sh, source);
    gl.compile_shader(&sh);
    let ok = gl
        .get_shader_parameter(&sh, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(sh)
    } else {
        let info = gl.get_shader_info_log(&sh).unwrap_or_default();
        gl.delete_shader(Some(&sh));
        Err(LedWallError::ShaderCompile(info))
    }
}

/// WebGL2 state for drawing the LED wall: both mask programs, the quad and
/// the texture that receives video frames.
pub struct LedRenderer {
    gl: GL,
    rounded: LedProgram,
    circle: LedProgram,
    vao: WebGlVertexArrayObject,
    texture: WebGlTexture,
}

impl LedRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let gl: GL = canvas
            .get_context("webgl2")?
            .ok_or(LedWallError::ContextUnavailable)?
            .dyn_into()?;

        let rounded = LedProgram::new(&gl, MaskShape::RoundedSquare)?;
        let circle = LedProgram::new(&gl, MaskShape::Circle)?;

        let vao = gl
            .create_vertex_array()
            .ok_or(LedWallError::Allocation("vertex array"))?;
        gl.bind_vertex_array(Some(&vao));
        let vbo = gl
            .create_buffer()
            .ok_or(LedWallError::Allocation("vertex buffer"))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&vbo));
        let vertices = js_sys::Float32Array::from(&shader::QUAD_VERTICES[..]);
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &vertices, GL::STATIC_DRAW);
        let stride = 4 * std::mem::size_of::<f32>() as i32;
        gl.enable_vertex_attrib_array(shader::A_POSITION);
        gl.vertex_attrib_pointer_with_i32(shader::A_POSITION, 2, GL::FLOAT, false, stride, 0);
        gl.enable_vertex_attrib_array(shader::A_TEX_COORD);
        gl.vertex_attrib_pointer_with_i32(shader::A_TEX_COORD, 2, GL::FLOAT, false, stride, 8);
        gl.bind_vertex_array(None);

        let texture = gl
            .create_texture()
            .ok_or(LedWallError::Allocation("texture"))?;
        gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
        // point sampling keeps one flat colour per LED
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::NEAREST as i32);
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MAG_FILTER, GL::NEAREST as i32);
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, GL::CLAMP_TO_EDGE as i32);
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, GL::CLAMP_TO_EDGE as i32);

        Ok(Self {
            gl,
            rounded,
            circle,
            vao,
            texture,
        })
    }

    pub fn resize(&self, dims: CanvasDims) {
        self.gl.viewport(0, 0, dims.width as i32, dims.height as i32);
    }

    /// Clears to black and, if a frame is available, draws it through the LED mask.
    pub fn draw(&self, video: Option<&HtmlVideoElement>, params: &ShadeParams) {
        let gl = &self.gl;
        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.clear(GL::COLOR_BUFFER_BIT);

        let Some(video) = video.filter(|v| v.ready_state() >= HAVE_CURRENT_DATA) else {
            return;
        };

        gl.active_texture(GL::TEXTURE0);
        gl.bind_texture(GL::TEXTURE_2D, Some(&self.texture));
        if let Err(e) = gl.tex_image_2d_with_u32_and_u32_and_html_video_element(
            GL::TEXTURE_2D,
            0,
            GL::RGBA as i32,
            GL::RGBA,
            GL::UNSIGNED_BYTE,
            video,
        ) {
            log::warn!("video frame upload failed: {:?}", e);
            return;
        }

        let prog = match params.shape {
            MaskShape::RoundedSquare => &self.rounded,
            MaskShape::Circle => &self.circle,
        };
        gl.use_program(Some(&prog.program));
        gl.uniform1i(prog.tex0.as_ref(), 0);
        gl.uniform2f(prog.resolution.as_ref(), params.resolution[0], params.resolution[1]);
        match params.shape {
            MaskShape::RoundedSquare => {
                let [c, r] = params.grid.as_vec2();
                gl.uniform2f(prog.led_count.as_ref(), c, r);
            }
            MaskShape::Circle => {
                gl.uniform1f(prog.led_count.as_ref(), params.grid.columns() as f32);
            }
        }
        gl.uniform1f(prog.pitch.as_ref(), params.pitch.get());

        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_arrays(GL::TRIANGLES, 0, 6);
        gl.bind_vertex_array(None);
    }
}
