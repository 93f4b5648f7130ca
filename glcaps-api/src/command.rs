use crate::GlCapabilityRequirement;

/// One native symbol that can implement a logical command, and what must be present for it to be
/// considered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GlAlias {
    pub symbol_name: &'static str,
    pub requirement: GlCapabilityRequirement,
}

/// A logical command and its candidate symbols, most preferred first (core, then ARB/KHR, then
/// vendor). Never empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GlCommandDescriptor {
    pub logical_name: &'static str,
    pub aliases: &'static [GlAlias],
}

/// Expands to a `GlAlias`. `gl_alias!("glFoo")` is always available,
/// `gl_alias!("glFoo", core(3, 0))` needs desktop GL 3.0, `gl_alias!("glFoo", es(3, 0))` needs
/// GL ES 3.0 and `gl_alias!("glFooARB", ext("GL_ARB_foo"))` needs the named extension.
#[macro_export]
macro_rules! gl_alias {
    ($symbol:literal) => {
        $crate::GlAlias {
            symbol_name: $symbol,
            requirement: $crate::GlCapabilityRequirement::AlwaysAvailable,
        }
    };
    ($symbol:literal, core($major:literal, $minor:literal)) => {
        $crate::GlAlias {
            symbol_name: $symbol,
            requirement: $crate::GlCapabilityRequirement::CoreVersion($major, $minor),
        }
    };
    ($symbol:literal, es($major:literal, $minor:literal)) => {
        $crate::GlAlias {
            symbol_name: $symbol,
            requirement: $crate::GlCapabilityRequirement::EsVersion($major, $minor),
        }
    };
    ($symbol:literal, ext($extension:literal)) => {
        $crate::GlAlias {
            symbol_name: $symbol,
            requirement: $crate::GlCapabilityRequirement::NamedExtension($extension),
        }
    };
}

/// Expands to a `GlCommandDescriptor` from a logical name and a list of `gl_alias!` argument
/// groups
#[macro_export]
macro_rules! gl_command {
    ($name:literal => [$(($($alias:tt)*)),+ $(,)?]) => {
        $crate::GlCommandDescriptor {
            logical_name: $name,
            aliases: &[$($crate::gl_alias!($($alias)*)),+],
        }
    };
}

/// Commands this layer knows how to resolve. Logical names follow the generated bindings (no "gl"
/// prefix); the query entry points used by `GlCommandTableQuery` must stay in this table.
pub static GL_COMMAND_DESCRIPTORS: &[GlCommandDescriptor] = &[
    // Queries
    gl_command!("GetError" => [("glGetError")]),
    gl_command!("GetIntegerv" => [("glGetIntegerv")]),
    gl_command!("GetFloatv" => [("glGetFloatv")]),
    gl_command!("GetBooleanv" => [("glGetBooleanv")]),
    gl_command!("GetString" => [("glGetString")]),
    gl_command!("GetStringi" => [
        ("glGetStringi", core(3, 0)),
        ("glGetStringi", es(3, 0)),
    ]),
    gl_command!("GetInteger64v" => [
        ("glGetInteger64v", core(3, 2)),
        ("glGetInteger64v", es(3, 0)),
        ("glGetInteger64v", ext("GL_ARB_sync")),
        ("glGetInteger64vAPPLE", ext("GL_APPLE_sync")),
    ]),

    // Textures
    gl_command!("ActiveTexture" => [
        ("glActiveTexture", core(1, 3)),
        ("glActiveTexture", es(2, 0)),
        ("glActiveTextureARB", ext("GL_ARB_multitexture")),
    ]),
    gl_command!("TexStorage2D" => [
        ("glTexStorage2D", core(4, 2)),
        ("glTexStorage2D", es(3, 0)),
        ("glTexStorage2D", ext("GL_ARB_texture_storage")),
        ("glTexStorage2DEXT", ext("GL_EXT_texture_storage")),
    ]),

    // Buffers
    gl_command!("BindBuffer" => [
        ("glBindBuffer", core(1, 5)),
        ("glBindBuffer", es(2, 0)),
        ("glBindBufferARB", ext("GL_ARB_vertex_buffer_object")),
    ]),
    gl_command!("MapBufferRange" => [
        ("glMapBufferRange", core(3, 0)),
        ("glMapBufferRange", es(3, 0)),
        ("glMapBufferRange", ext("GL_ARB_map_buffer_range")),
        ("glMapBufferRangeEXT", ext("GL_EXT_map_buffer_range")),
    ]),
    gl_command!("BufferStorage" => [
        ("glBufferStorage", core(4, 4)),
        ("glBufferStorage", ext("GL_ARB_buffer_storage")),
        ("glBufferStorageEXT", ext("GL_EXT_buffer_storage")),
    ]),

    // Vertex arrays
    gl_command!("GenVertexArrays" => [
        ("glGenVertexArrays", core(3, 0)),
        ("glGenVertexArrays", es(3, 0)),
        ("glGenVertexArrays", ext("GL_ARB_vertex_array_object")),
        ("glGenVertexArraysAPPLE", ext("GL_APPLE_vertex_array_object")),
        ("glGenVertexArraysOES", ext("GL_OES_vertex_array_object")),
    ]),
    gl_command!("BindVertexArray" => [
        ("glBindVertexArray", core(3, 0)),
        ("glBindVertexArray", es(3, 0)),
        ("glBindVertexArray", ext("GL_ARB_vertex_array_object")),
        ("glBindVertexArrayAPPLE", ext("GL_APPLE_vertex_array_object")),
        ("glBindVertexArrayOES", ext("GL_OES_vertex_array_object")),
    ]),
    gl_command!("DeleteVertexArrays" => [
        ("glDeleteVertexArrays", core(3, 0)),
        ("glDeleteVertexArrays", es(3, 0)),
        ("glDeleteVertexArrays", ext("GL_ARB_vertex_array_object")),
        ("glDeleteVertexArraysAPPLE", ext("GL_APPLE_vertex_array_object")),
        ("glDeleteVertexArraysOES", ext("GL_OES_vertex_array_object")),
    ]),
    gl_command!("VertexAttribDivisor" => [
        ("glVertexAttribDivisor", core(3, 3)),
        ("glVertexAttribDivisor", es(3, 0)),
        ("glVertexAttribDivisorARB", ext("GL_ARB_instanced_arrays")),
        ("glVertexAttribDivisorANGLE", ext("GL_ANGLE_instanced_arrays")),
        ("glVertexAttribDivisorEXT", ext("GL_EXT_instanced_arrays")),
        ("glVertexAttribDivisorNV", ext("GL_NV_instanced_arrays")),
    ]),

    // Framebuffers
    gl_command!("GenFramebuffers" => [
        ("glGenFramebuffers", core(3, 0)),
        ("glGenFramebuffers", es(2, 0)),
        ("glGenFramebuffers", ext("GL_ARB_framebuffer_object")),
        ("glGenFramebuffersEXT", ext("GL_EXT_framebuffer_object")),
    ]),
    gl_command!("BindFramebuffer" => [
        ("glBindFramebuffer", core(3, 0)),
        ("glBindFramebuffer", es(2, 0)),
        ("glBindFramebuffer", ext("GL_ARB_framebuffer_object")),
        ("glBindFramebufferEXT", ext("GL_EXT_framebuffer_object")),
    ]),

    // Blending
    gl_command!("BlendColor" => [
        ("glBlendColor", core(1, 4)),
        ("glBlendColor", es(2, 0)),
        ("glBlendColorEXT", ext("GL_EXT_blend_color")),
    ]),
    gl_command!("BlendEquationSeparate" => [
        ("glBlendEquationSeparate", core(2, 0)),
        ("glBlendEquationSeparate", es(2, 0)),
        ("glBlendEquationSeparateEXT", ext("GL_EXT_blend_equation_separate")),
    ]),
    gl_command!("BlendFuncSeparate" => [
        ("glBlendFuncSeparate", core(1, 4)),
        ("glBlendFuncSeparate", es(2, 0)),
        ("glBlendFuncSeparateEXT", ext("GL_EXT_blend_func_separate")),
        ("glBlendFuncSeparateINGR", ext("GL_INGR_blend_func_separate")),
    ]),
    gl_command!("ClearDepthf" => [
        ("glClearDepthf", core(4, 1)),
        ("glClearDepthf", es(2, 0)),
        ("glClearDepthf", ext("GL_ARB_ES2_compatibility")),
        ("glClearDepthfOES", ext("GL_OES_single_precision")),
    ]),

    // Drawing
    gl_command!("DrawArraysInstanced" => [
        ("glDrawArraysInstanced", core(3, 1)),
        ("glDrawArraysInstanced", es(3, 0)),
        ("glDrawArraysInstancedARB", ext("GL_ARB_draw_instanced")),
        ("glDrawArraysInstancedEXT", ext("GL_EXT_draw_instanced")),
        ("glDrawArraysInstancedNV", ext("GL_NV_draw_instanced")),
        ("glDrawArraysInstancedANGLE", ext("GL_ANGLE_instanced_arrays")),
    ]),
    gl_command!("DrawElementsInstanced" => [
        ("glDrawElementsInstanced", core(3, 1)),
        ("glDrawElementsInstanced", es(3, 0)),
        ("glDrawElementsInstancedARB", ext("GL_ARB_draw_instanced")),
        ("glDrawElementsInstancedEXT", ext("GL_EXT_draw_instanced")),
        ("glDrawElementsInstancedNV", ext("GL_NV_draw_instanced")),
        ("glDrawElementsInstancedANGLE", ext("GL_ANGLE_instanced_arrays")),
    ]),
    gl_command!("MultiDrawArraysIndirect" => [
        ("glMultiDrawArraysIndirect", core(4, 3)),
        ("glMultiDrawArraysIndirect", ext("GL_ARB_multi_draw_indirect")),
        ("glMultiDrawArraysIndirectEXT", ext("GL_EXT_multi_draw_indirect")),
        ("glMultiDrawArraysIndirectAMD", ext("GL_AMD_multi_draw_indirect")),
    ]),
    gl_command!("DispatchCompute" => [
        ("glDispatchCompute", core(4, 3)),
        ("glDispatchCompute", es(3, 1)),
        ("glDispatchCompute", ext("GL_ARB_compute_shader")),
    ]),

    // Sync
    gl_command!("FenceSync" => [
        ("glFenceSync", core(3, 2)),
        ("glFenceSync", es(3, 0)),
        ("glFenceSync", ext("GL_ARB_sync")),
        ("glFenceSyncAPPLE", ext("GL_APPLE_sync")),
    ]),
    gl_command!("ClientWaitSync" => [
        ("glClientWaitSync", core(3, 2)),
        ("glClientWaitSync", es(3, 0)),
        ("glClientWaitSync", ext("GL_ARB_sync")),
        ("glClientWaitSyncAPPLE", ext("GL_APPLE_sync")),
    ]),
    gl_command!("DeleteSync" => [
        ("glDeleteSync", core(3, 2)),
        ("glDeleteSync", es(3, 0)),
        ("glDeleteSync", ext("GL_ARB_sync")),
        ("glDeleteSyncAPPLE", ext("GL_APPLE_sync")),
    ]),

    // Debugging
    gl_command!("DebugMessageCallback" => [
        ("glDebugMessageCallback", core(4, 3)),
        ("glDebugMessageCallback", es(3, 2)),
        ("glDebugMessageCallback", ext("GL_KHR_debug")),
        ("glDebugMessageCallbackKHR", ext("GL_KHR_debug")),
        ("glDebugMessageCallbackARB", ext("GL_ARB_debug_output")),
        ("glDebugMessageCallbackAMD", ext("GL_AMD_debug_output")),
    ]),
    gl_command!("ObjectLabel" => [
        ("glObjectLabel", core(4, 3)),
        ("glObjectLabel", es(3, 2)),
        ("glObjectLabel", ext("GL_KHR_debug")),
        ("glObjectLabelKHR", ext("GL_KHR_debug")),
    ]),
];

/// Find a descriptor in a table by logical name
pub fn find_command_descriptor(
    descriptors: &'static [GlCommandDescriptor],
    logical_name: &str,
) -> Option<&'static GlCommandDescriptor> {
    descriptors
        .iter()
        .find(|descriptor| descriptor.logical_name == logical_name)
}
