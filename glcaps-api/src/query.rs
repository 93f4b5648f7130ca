#[cfg(feature = "serde-support")]
use serde::Serialize;

use crate::bindings;
use crate::bindings::types::*;
use crate::{GlCommandTable, GlcapsError};
use std::ffi::CStr;

pub type GlQueryResult<T> = Result<T, GlQueryError>;

/// Why a single driver query produced no value. These never abort a batch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub enum GlQueryError {
    /// glGetError reported this code after the query, i.e. GL_INVALID_ENUM for a limit the driver
    /// doesn't know about despite advertising the extension
    GlError(u32),

    /// The glGet* entry point itself could not be bound in the current context
    CommandUnavailable(&'static str),
}

impl std::error::Error for GlQueryError {}

impl std::fmt::Display for GlQueryError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match *self {
            GlQueryError::GlError(error) => write!(f, "GL error 0x{:04X}", error),
            GlQueryError::CommandUnavailable(name) => write!(f, "{} is not available", name),
        }
    }
}

/// The driver's glGet* family. Array queries fill caller-owned buffers: the first `values.len()`
/// values the driver returns for `pname` are written and any beyond that are dropped.
///
/// Implementations must never let the driver write past memory they own. For most pnames glGet*
/// returns at most 16 values, but the format lists (`GL_COMPRESSED_TEXTURE_FORMATS`,
/// `GL_PROGRAM_BINARY_FORMATS`, `GL_SHADER_BINARY_FORMATS`) return as many values as the driver
/// says through their `GL_NUM_*` query.
pub trait GlQueryPrimitive {
    fn get_integerv(
        &self,
        pname: u32,
        values: &mut [i32],
    ) -> GlQueryResult<()>;

    fn get_integer64v(
        &self,
        pname: u32,
        values: &mut [i64],
    ) -> GlQueryResult<()>;

    fn get_floatv(
        &self,
        pname: u32,
        values: &mut [f32],
    ) -> GlQueryResult<()>;

    fn get_booleanv(
        &self,
        pname: u32,
        values: &mut [bool],
    ) -> GlQueryResult<()>;

    /// None when the driver returns a null string
    fn get_string(
        &self,
        pname: u32,
    ) -> GlQueryResult<Option<String>>;

    fn get_stringi(
        &self,
        pname: u32,
        index: u32,
    ) -> GlQueryResult<Option<String>>;
}

// Fixed-size glGet* results are at most a 4x4 matrix. Queries go through a scratch buffer at
// least this big, or as big as the driver's count for the variable-length format lists.
const MAX_GET_VALUES: usize = 16;

// The pnames whose result length is set by the driver, and the pname that reports that length
fn variable_length_count_pname(pname: GLenum) -> Option<GLenum> {
    match pname {
        bindings::COMPRESSED_TEXTURE_FORMATS => Some(bindings::NUM_COMPRESSED_TEXTURE_FORMATS),
        bindings::PROGRAM_BINARY_FORMATS => Some(bindings::NUM_PROGRAM_BINARY_FORMATS),
        bindings::SHADER_BINARY_FORMATS => Some(bindings::NUM_SHADER_BINARY_FORMATS),
        _ => None,
    }
}

/// Queries the driver through the command table of the current context, checking glGetError after
/// every call.
pub struct GlCommandTableQuery<'a> {
    table: &'a GlCommandTable,
}

impl<'a> GlCommandTableQuery<'a> {
    pub fn new(table: &'a GlCommandTable) -> Self {
        GlCommandTableQuery { table }
    }

    // Safety: F must match the native signature of `logical_name`
    unsafe fn checked<F: Copy, R>(
        &self,
        logical_name: &'static str,
        invoke: impl FnOnce(F) -> R,
    ) -> GlQueryResult<R> {
        let get_error_unavailable = |_: GlcapsError| GlQueryError::CommandUnavailable("GetError");

        // Errors left over from earlier calls would otherwise be blamed on this query
        self.table
            .clear_pending_errors()
            .map_err(get_error_unavailable)?;

        let result = self
            .table
            .dispatch::<F, R>(logical_name, invoke)
            .map_err(|_| GlQueryError::CommandUnavailable(logical_name))?;

        match self.table.get_error().map_err(get_error_unavailable)? {
            bindings::NO_ERROR => Ok(result),
            error => Err(GlQueryError::GlError(error)),
        }
    }

    // Number of values the driver may write for `pname`
    fn scratch_len(
        &self,
        pname: GLenum,
        len: usize,
    ) -> GlQueryResult<usize> {
        let mut scratch_len = len.max(MAX_GET_VALUES);
        if let Some(count_pname) = variable_length_count_pname(pname) {
            let mut count = [0];
            self.get_integerv(count_pname, &mut count)?;
            scratch_len = scratch_len.max(count[0].max(0) as usize);
        }

        Ok(scratch_len)
    }
}

unsafe fn string_from_gl(ptr: *const GLubyte) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr as _).to_string_lossy().into_owned())
    }
}

impl<'a> GlQueryPrimitive for GlCommandTableQuery<'a> {
    fn get_integerv(
        &self,
        pname: u32,
        values: &mut [i32],
    ) -> GlQueryResult<()> {
        let mut scratch = vec![0 as GLint; self.scratch_len(pname, values.len())?];
        unsafe {
            self.checked::<bindings::PFNGLGETINTEGERVPROC, _>("GetIntegerv", |get_integerv| {
                get_integerv(pname, scratch.as_mut_ptr())
            })?;
        }
        values.copy_from_slice(&scratch[..values.len()]);
        Ok(())
    }

    fn get_integer64v(
        &self,
        pname: u32,
        values: &mut [i64],
    ) -> GlQueryResult<()> {
        let mut scratch = vec![0 as GLint64; self.scratch_len(pname, values.len())?];
        unsafe {
            self.checked::<bindings::PFNGLGETINTEGER64VPROC, _>(
                "GetInteger64v",
                |get_integer64v| get_integer64v(pname, scratch.as_mut_ptr()),
            )?;
        }
        values.copy_from_slice(&scratch[..values.len()]);
        Ok(())
    }

    fn get_floatv(
        &self,
        pname: u32,
        values: &mut [f32],
    ) -> GlQueryResult<()> {
        let mut scratch = vec![0.0 as GLfloat; self.scratch_len(pname, values.len())?];
        unsafe {
            self.checked::<bindings::PFNGLGETFLOATVPROC, _>("GetFloatv", |get_floatv| {
                get_floatv(pname, scratch.as_mut_ptr())
            })?;
        }
        values.copy_from_slice(&scratch[..values.len()]);
        Ok(())
    }

    fn get_booleanv(
        &self,
        pname: u32,
        values: &mut [bool],
    ) -> GlQueryResult<()> {
        let mut scratch = vec![bindings::FALSE; self.scratch_len(pname, values.len())?];
        unsafe {
            self.checked::<bindings::PFNGLGETBOOLEANVPROC, _>("GetBooleanv", |get_booleanv| {
                get_booleanv(pname, scratch.as_mut_ptr())
            })?;
        }
        for (value, scratch) in values.iter_mut().zip(scratch.iter()) {
            *value = *scratch != bindings::FALSE;
        }
        Ok(())
    }

    fn get_string(
        &self,
        pname: u32,
    ) -> GlQueryResult<Option<String>> {
        unsafe {
            let ptr = self.checked::<bindings::PFNGLGETSTRINGPROC, _>("GetString", |get_string| {
                get_string(pname)
            })?;
            Ok(string_from_gl(ptr))
        }
    }

    fn get_stringi(
        &self,
        pname: u32,
        index: u32,
    ) -> GlQueryResult<Option<String>> {
        unsafe {
            let ptr = self
                .checked::<bindings::PFNGLGETSTRINGIPROC, _>("GetStringi", |get_stringi| {
                    get_stringi(pname, index)
                })?;
            Ok(string_from_gl(ptr))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use crate::{GlCapabilitySet, GlVersion};
    use std::sync::Arc;

    fn query_table(version: &str) -> GlCommandTable {
        GlCommandTable::new(
            Arc::new(GlCapabilitySet::build(version, "")),
            fake_query_symbols(),
        )
    }

    #[test]
    fn test_checked_queries() {
        init_logging();
        install_native_driver(
            FakeDriver::default()
                .with_integers(bindings::MAX_VIEWPORT_DIMS, &[16384, 8192])
                .with_integers64(bindings::MAX_SERVER_WAIT_TIMEOUT, &[1 << 40])
                .with_floats(bindings::ALIASED_LINE_WIDTH_RANGE, &[1.0, 7.5])
                .with_booleans(bindings::DOUBLEBUFFER, &[true])
                .with_text(bindings::RENDERER, "Fake Renderer"),
        );

        let table = query_table("4.6");
        let query = GlCommandTableQuery::new(&table);

        let mut dims = [0; 2];
        query
            .get_integerv(bindings::MAX_VIEWPORT_DIMS, &mut dims)
            .unwrap();
        assert_eq!(dims, [16384, 8192]);

        let mut timeout = [0; 1];
        query
            .get_integer64v(bindings::MAX_SERVER_WAIT_TIMEOUT, &mut timeout)
            .unwrap();
        assert_eq!(timeout, [1 << 40]);

        let mut range = [0.0; 2];
        query
            .get_floatv(bindings::ALIASED_LINE_WIDTH_RANGE, &mut range)
            .unwrap();
        assert_eq!(range, [1.0, 7.5]);

        let mut double_buffered = [false];
        query
            .get_booleanv(bindings::DOUBLEBUFFER, &mut double_buffered)
            .unwrap();
        assert!(double_buffered[0]);

        assert_eq!(
            query.get_string(bindings::RENDERER),
            Ok(Some("Fake Renderer".to_string()))
        );
    }

    #[test]
    fn test_driver_error_is_reported() {
        install_native_driver(
            FakeDriver::default().with_error(bindings::MAX_SAMPLES, bindings::INVALID_OPERATION),
        );

        let table = query_table("4.6");
        let query = GlCommandTableQuery::new(&table);

        let mut value = [0];
        assert_eq!(
            query.get_integerv(bindings::MAX_SAMPLES, &mut value),
            Err(GlQueryError::GlError(bindings::INVALID_OPERATION))
        );
        assert_eq!(
            query.get_integerv(bindings::MAX_TEXTURE_SIZE, &mut value),
            Err(GlQueryError::GlError(bindings::INVALID_ENUM))
        );
        assert_eq!(
            query.get_string(bindings::VENDOR),
            Err(GlQueryError::GlError(bindings::INVALID_ENUM))
        );
    }

    #[test]
    fn test_stale_error_is_not_blamed_on_query() {
        install_native_driver(
            FakeDriver::default().with_integers(bindings::MAX_TEXTURE_SIZE, &[4096]),
        );
        set_native_error(bindings::OUT_OF_MEMORY);

        let table = query_table("4.6");
        let query = GlCommandTableQuery::new(&table);

        let mut value = [0];
        assert_eq!(
            query.get_integerv(bindings::MAX_TEXTURE_SIZE, &mut value),
            Ok(())
        );
        assert_eq!(value, [4096]);
    }

    #[test]
    fn test_driver_sized_format_list() {
        let formats: Vec<i32> = (0..40).map(|index| 0x8000 + index).collect();
        install_native_driver(
            FakeDriver::default()
                .with_integers(bindings::NUM_COMPRESSED_TEXTURE_FORMATS, &[40])
                .with_integers(bindings::COMPRESSED_TEXTURE_FORMATS, &formats),
        );

        let table = query_table("4.6");
        let query = GlCommandTableQuery::new(&table);

        // The driver writes all 40 values, only the first two are kept
        let mut first_formats = [0; 2];
        query
            .get_integerv(bindings::COMPRESSED_TEXTURE_FORMATS, &mut first_formats)
            .unwrap();
        assert_eq!(first_formats, [0x8000, 0x8001]);

        let mut all_formats = vec![0; 40];
        query
            .get_integerv(bindings::COMPRESSED_TEXTURE_FORMATS, &mut all_formats)
            .unwrap();
        assert_eq!(all_formats, formats);
    }

    #[test]
    fn test_null_string() {
        install_native_driver(FakeDriver::default().with_null_text(bindings::EXTENSIONS));

        let table = query_table("2.1");
        let query = GlCommandTableQuery::new(&table);
        assert_eq!(query.get_string(bindings::EXTENSIONS), Ok(None));
    }

    #[test]
    fn test_gated_entry_point_is_unavailable() {
        install_native_driver(
            FakeDriver::default().with_indexed_strings(bindings::EXTENSIONS, &["GL_KHR_debug"]),
        );

        // glGetStringi is exported but a 2.1 context may not use it
        let table = query_table("2.1");
        let query = GlCommandTableQuery::new(&table);
        assert_eq!(
            query.get_stringi(bindings::EXTENSIONS, 0),
            Err(GlQueryError::CommandUnavailable("GetStringi"))
        );

        let table = query_table("3.0");
        let query = GlCommandTableQuery::new(&table);
        assert_eq!(
            query.get_stringi(bindings::EXTENSIONS, 0),
            Ok(Some("GL_KHR_debug".to_string()))
        );
    }

    #[test]
    fn test_capability_set_from_native_driver() {
        install_native_driver(
            FakeDriver::default()
                .with_text(bindings::VERSION, "3.3 (Core Profile) Mesa 23.1.4")
                .with_integers(bindings::NUM_EXTENSIONS, &[2])
                .with_indexed_strings(
                    bindings::EXTENSIONS,
                    &["GL_ARB_debug_output", "GL_EXT_texture_filter_anisotropic"],
                )
                .with_integers(bindings::CONTEXT_FLAGS, &[0]),
        );

        let table = query_table("3.3");
        let capabilities = GlCapabilitySet::query(&GlCommandTableQuery::new(&table));
        assert_eq!(capabilities.version(), GlVersion::new(3, 3));
        assert!(capabilities.has_extension("GL_ARB_debug_output"));
        assert_eq!(capabilities.extension_count(), 2);
    }
}
