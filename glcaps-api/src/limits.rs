use crate::bindings;
use crate::GlCapabilityRequirement as Requirement;
use crate::GlLimitDescriptor as Limit;
use crate::GlLimitShape::*;
use crate::GlValueType::*;

const ALWAYS: Requirement = Requirement::AlwaysAvailable;

/// Implementation limits collected by `GlLimitsCollector::standard`. Names are the GL enum names
/// without the "GL_" prefix. Each limit is gated on the desktop and ES versions that introduced it.
#[rustfmt::skip]
pub static GL_LIMIT_DESCRIPTORS: &[Limit] = &[
    // Driver identification
    Limit::new("VENDOR", bindings::VENDOR, Text, ALWAYS),
    Limit::new("RENDERER", bindings::RENDERER, Text, ALWAYS),
    Limit::new("VERSION", bindings::VERSION, Text, ALWAYS),
    Limit::new("SHADING_LANGUAGE_VERSION", bindings::SHADING_LANGUAGE_VERSION, Text, Requirement::core_or_es((2, 0), (2, 0))),

    // Rasterization
    Limit::new("MAX_VIEWPORT_DIMS", bindings::MAX_VIEWPORT_DIMS, FixedArray(Integer, 2), ALWAYS),
    Limit::new("SUBPIXEL_BITS", bindings::SUBPIXEL_BITS, Scalar(Integer), ALWAYS),
    Limit::new("ALIASED_POINT_SIZE_RANGE", bindings::ALIASED_POINT_SIZE_RANGE, FixedArray(Float, 2), Requirement::core_or_es((1, 2), (2, 0))),
    Limit::new("ALIASED_LINE_WIDTH_RANGE", bindings::ALIASED_LINE_WIDTH_RANGE, FixedArray(Float, 2), Requirement::core_or_es((1, 2), (2, 0))),
    Limit::new("MAX_CLIP_DISTANCES", bindings::MAX_CLIP_DISTANCES, Scalar(Integer), Requirement::core_or_es((3, 0), (3, 2))),
    // Desktop only
    Limit::new("DOUBLEBUFFER", bindings::DOUBLEBUFFER, Scalar(Boolean), Requirement::core(1, 0)),

    // Textures
    Limit::new("MAX_TEXTURE_SIZE", bindings::MAX_TEXTURE_SIZE, Scalar(Integer), ALWAYS),
    Limit::new("MAX_3D_TEXTURE_SIZE", bindings::MAX_3D_TEXTURE_SIZE, Scalar(Integer), Requirement::core_or_es((1, 2), (3, 0))),
    Limit::new("MAX_CUBE_MAP_TEXTURE_SIZE", bindings::MAX_CUBE_MAP_TEXTURE_SIZE, Scalar(Integer), Requirement::core_or_es((1, 3), (2, 0))),
    Limit::new("MAX_ARRAY_TEXTURE_LAYERS", bindings::MAX_ARRAY_TEXTURE_LAYERS, Scalar(Integer), Requirement::core_or_es((3, 0), (3, 0))),
    Limit::new("MAX_TEXTURE_LOD_BIAS", bindings::MAX_TEXTURE_LOD_BIAS, Scalar(Float), Requirement::core_or_es((1, 4), (3, 0))),
    Limit::new("MAX_TEXTURE_MAX_ANISOTROPY_EXT", bindings::MAX_TEXTURE_MAX_ANISOTROPY_EXT, Scalar(Float), Requirement::extension("GL_EXT_texture_filter_anisotropic")),
    Limit::new("MAX_TEXTURE_IMAGE_UNITS", bindings::MAX_TEXTURE_IMAGE_UNITS, Scalar(Integer), Requirement::core_or_es((2, 0), (2, 0))),
    Limit::new("MAX_COMBINED_TEXTURE_IMAGE_UNITS", bindings::MAX_COMBINED_TEXTURE_IMAGE_UNITS, Scalar(Integer), Requirement::core_or_es((2, 0), (2, 0))),

    // Vertex input
    Limit::new("MAX_ELEMENTS_VERTICES", bindings::MAX_ELEMENTS_VERTICES, Scalar(Integer), Requirement::core_or_es((1, 2), (3, 0))),
    Limit::new("MAX_ELEMENTS_INDICES", bindings::MAX_ELEMENTS_INDICES, Scalar(Integer), Requirement::core_or_es((1, 2), (3, 0))),
    Limit::new("MAX_VERTEX_ATTRIBS", bindings::MAX_VERTEX_ATTRIBS, Scalar(Integer), Requirement::core_or_es((2, 0), (2, 0))),
    Limit::new("MAX_VERTEX_ATTRIB_STRIDE", bindings::MAX_VERTEX_ATTRIB_STRIDE, Scalar(Integer), Requirement::core_or_es((4, 4), (3, 1))),

    // Framebuffers
    Limit::new("MAX_DRAW_BUFFERS", bindings::MAX_DRAW_BUFFERS, Scalar(Integer), Requirement::core_or_es((2, 0), (3, 0))),
    Limit::new("MAX_COLOR_ATTACHMENTS", bindings::MAX_COLOR_ATTACHMENTS, Scalar(Integer), Requirement::core_or_es((3, 0), (3, 0))),
    Limit::new("MAX_RENDERBUFFER_SIZE", bindings::MAX_RENDERBUFFER_SIZE, Scalar(Integer), Requirement::core_or_es((3, 0), (2, 0))),
    Limit::new("MAX_SAMPLES", bindings::MAX_SAMPLES, Scalar(Integer), Requirement::core_or_es((3, 0), (3, 0))),

    // Buffers
    Limit::new("MAX_UNIFORM_BUFFER_BINDINGS", bindings::MAX_UNIFORM_BUFFER_BINDINGS, Scalar(Integer), Requirement::core_or_es((3, 1), (3, 0))),
    Limit::new("MAX_UNIFORM_BLOCK_SIZE", bindings::MAX_UNIFORM_BLOCK_SIZE, Scalar(Integer), Requirement::core_or_es((3, 1), (3, 0))),
    Limit::new("UNIFORM_BUFFER_OFFSET_ALIGNMENT", bindings::UNIFORM_BUFFER_OFFSET_ALIGNMENT, Scalar(Integer), Requirement::core_or_es((3, 1), (3, 0))),
    Limit::new("MIN_MAP_BUFFER_ALIGNMENT", bindings::MIN_MAP_BUFFER_ALIGNMENT, Scalar(Integer), Requirement::core(4, 2)),
    Limit::new("MAX_SHADER_STORAGE_BUFFER_BINDINGS", bindings::MAX_SHADER_STORAGE_BUFFER_BINDINGS, Scalar(Integer), Requirement::core_or_es((4, 3), (3, 1))),
    Limit::new("SHADER_STORAGE_BUFFER_OFFSET_ALIGNMENT", bindings::SHADER_STORAGE_BUFFER_OFFSET_ALIGNMENT, Scalar(Integer), Requirement::core_or_es((4, 3), (3, 1))),

    // Compute and sync
    Limit::new("MAX_COMPUTE_SHARED_MEMORY_SIZE", bindings::MAX_COMPUTE_SHARED_MEMORY_SIZE, Scalar(Integer), Requirement::core_or_es((4, 3), (3, 1))),
    Limit::new("MAX_SERVER_WAIT_TIMEOUT", bindings::MAX_SERVER_WAIT_TIMEOUT, Scalar(Integer64), Requirement::core_or_es((3, 2), (3, 0))),

    // Debug output
    Limit::new("MAX_DEBUG_MESSAGE_LENGTH", bindings::MAX_DEBUG_MESSAGE_LENGTH, Scalar(Integer), Requirement::extension("GL_KHR_debug")),
    Limit::new("MAX_LABEL_LENGTH", bindings::MAX_LABEL_LENGTH, Scalar(Integer), Requirement::extension("GL_KHR_debug")),
];

/// Find a descriptor in a table by name
pub fn find_limit_descriptor<'a>(
    descriptors: &'a [Limit],
    name: &str,
) -> Option<&'a Limit> {
    descriptors.iter().find(|descriptor| descriptor.name == name)
}
