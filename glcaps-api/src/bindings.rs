//! The slice of the generated GL catalog this layer calls on its own: the query entry points and
//! the enum values they take. Everything else is forwarded by the generated wrappers.

mod __gl_imports {
    pub use std::os::raw;
}

pub mod types {
    #![allow(non_camel_case_types, non_snake_case, dead_code, missing_copy_implementations)]

    pub type GLenum = super::__gl_imports::raw::c_uint;
    pub type GLboolean = super::__gl_imports::raw::c_uchar;
    pub type GLint = super::__gl_imports::raw::c_int;
    pub type GLuint = super::__gl_imports::raw::c_uint;
    pub type GLfloat = super::__gl_imports::raw::c_float;
    pub type GLubyte = super::__gl_imports::raw::c_uchar;
    pub type GLint64 = i64;
}

use types::*;

#[allow(non_camel_case_types)]
pub type PFNGLGETERRORPROC = unsafe extern "system" fn() -> GLenum;
#[allow(non_camel_case_types)]
pub type PFNGLGETINTEGERVPROC = unsafe extern "system" fn(GLenum, *mut GLint);
#[allow(non_camel_case_types)]
pub type PFNGLGETINTEGER64VPROC = unsafe extern "system" fn(GLenum, *mut GLint64);
#[allow(non_camel_case_types)]
pub type PFNGLGETFLOATVPROC = unsafe extern "system" fn(GLenum, *mut GLfloat);
#[allow(non_camel_case_types)]
pub type PFNGLGETBOOLEANVPROC = unsafe extern "system" fn(GLenum, *mut GLboolean);
#[allow(non_camel_case_types)]
pub type PFNGLGETSTRINGPROC = unsafe extern "system" fn(GLenum) -> *const GLubyte;
#[allow(non_camel_case_types)]
pub type PFNGLGETSTRINGIPROC = unsafe extern "system" fn(GLenum, GLuint) -> *const GLubyte;

#[allow(dead_code, non_upper_case_globals)] pub const NO_ERROR: GLenum = 0;
#[allow(dead_code, non_upper_case_globals)] pub const INVALID_ENUM: GLenum = 0x0500;
#[allow(dead_code, non_upper_case_globals)] pub const INVALID_VALUE: GLenum = 0x0501;
#[allow(dead_code, non_upper_case_globals)] pub const INVALID_OPERATION: GLenum = 0x0502;
#[allow(dead_code, non_upper_case_globals)] pub const OUT_OF_MEMORY: GLenum = 0x0505;
#[allow(dead_code, non_upper_case_globals)] pub const FALSE: GLboolean = 0;
#[allow(dead_code, non_upper_case_globals)] pub const TRUE: GLboolean = 1;

#[allow(dead_code, non_upper_case_globals)] pub const VENDOR: GLenum = 0x1F00;
#[allow(dead_code, non_upper_case_globals)] pub const RENDERER: GLenum = 0x1F01;
#[allow(dead_code, non_upper_case_globals)] pub const VERSION: GLenum = 0x1F02;
#[allow(dead_code, non_upper_case_globals)] pub const EXTENSIONS: GLenum = 0x1F03;
#[allow(dead_code, non_upper_case_globals)] pub const SHADING_LANGUAGE_VERSION: GLenum = 0x8B8C;
#[allow(dead_code, non_upper_case_globals)] pub const NUM_EXTENSIONS: GLenum = 0x821D;
#[allow(dead_code, non_upper_case_globals)] pub const CONTEXT_FLAGS: GLenum = 0x821E;
#[allow(dead_code, non_upper_case_globals)] pub const NUM_COMPRESSED_TEXTURE_FORMATS: GLenum = 0x86A2;
#[allow(dead_code, non_upper_case_globals)] pub const COMPRESSED_TEXTURE_FORMATS: GLenum = 0x86A3;
#[allow(dead_code, non_upper_case_globals)] pub const NUM_PROGRAM_BINARY_FORMATS: GLenum = 0x87FE;
#[allow(dead_code, non_upper_case_globals)] pub const PROGRAM_BINARY_FORMATS: GLenum = 0x87FF;
#[allow(dead_code, non_upper_case_globals)] pub const SHADER_BINARY_FORMATS: GLenum = 0x8DF8;
#[allow(dead_code, non_upper_case_globals)] pub const NUM_SHADER_BINARY_FORMATS: GLenum = 0x8DF9;

#[allow(dead_code, non_upper_case_globals)] pub const MAX_TEXTURE_SIZE: GLenum = 0x0D33;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_VIEWPORT_DIMS: GLenum = 0x0D3A;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_CLIP_DISTANCES: GLenum = 0x0D32;
#[allow(dead_code, non_upper_case_globals)] pub const SUBPIXEL_BITS: GLenum = 0x0D50;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_3D_TEXTURE_SIZE: GLenum = 0x8073;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_ELEMENTS_VERTICES: GLenum = 0x80E8;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_ELEMENTS_INDICES: GLenum = 0x80E9;
#[allow(dead_code, non_upper_case_globals)] pub const ALIASED_POINT_SIZE_RANGE: GLenum = 0x846D;
#[allow(dead_code, non_upper_case_globals)] pub const ALIASED_LINE_WIDTH_RANGE: GLenum = 0x846E;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_RENDERBUFFER_SIZE: GLenum = 0x84E8;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_TEXTURE_LOD_BIAS: GLenum = 0x84FD;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_TEXTURE_MAX_ANISOTROPY_EXT: GLenum = 0x84FF;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_CUBE_MAP_TEXTURE_SIZE: GLenum = 0x851C;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_DRAW_BUFFERS: GLenum = 0x8824;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_VERTEX_ATTRIBS: GLenum = 0x8869;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_TEXTURE_IMAGE_UNITS: GLenum = 0x8872;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_ARRAY_TEXTURE_LAYERS: GLenum = 0x88FF;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_UNIFORM_BUFFER_BINDINGS: GLenum = 0x8A2F;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_UNIFORM_BLOCK_SIZE: GLenum = 0x8A30;
#[allow(dead_code, non_upper_case_globals)] pub const UNIFORM_BUFFER_OFFSET_ALIGNMENT: GLenum = 0x8A34;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_COMBINED_TEXTURE_IMAGE_UNITS: GLenum = 0x8B4D;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_COLOR_ATTACHMENTS: GLenum = 0x8CDF;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_SAMPLES: GLenum = 0x8D57;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_SERVER_WAIT_TIMEOUT: GLenum = 0x9111;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_COMPUTE_SHARED_MEMORY_SIZE: GLenum = 0x8262;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_VERTEX_ATTRIB_STRIDE: GLenum = 0x82E5;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_DEBUG_MESSAGE_LENGTH: GLenum = 0x9143;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_LABEL_LENGTH: GLenum = 0x82E8;
#[allow(dead_code, non_upper_case_globals)] pub const SHADER_STORAGE_BUFFER_OFFSET_ALIGNMENT: GLenum = 0x90DF;
#[allow(dead_code, non_upper_case_globals)] pub const MAX_SHADER_STORAGE_BUFFER_BINDINGS: GLenum = 0x90DD;
#[allow(dead_code, non_upper_case_globals)] pub const MIN_MAP_BUFFER_ALIGNMENT: GLenum = 0x90BC;
#[allow(dead_code, non_upper_case_globals)] pub const DOUBLEBUFFER: GLenum = 0x0C32;
