use crate::bindings;
use crate::bindings::types::*;
use crate::{GlQueryError, GlQueryPrimitive, GlQueryResult, GlSymbolMap};
use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};
use std::ffi::{c_void, CString};

pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}

#[derive(Clone, Debug)]
pub enum FakeValue {
    Integers(Vec<i32>),
    Integers64(Vec<i64>),
    Floats(Vec<f32>),
    Booleans(Vec<bool>),
    Text(String),
    NullText,
    Error(u32),
}

/// A scripted driver. Anything not scripted fails with GL_INVALID_ENUM, like a real driver given
/// an enum it doesn't know.
#[derive(Default)]
pub struct FakeDriver {
    values: FnvHashMap<u32, FakeValue>,
    indexed_strings: FnvHashMap<u32, Vec<String>>,
    query_count: Cell<usize>,
}

impl FakeDriver {
    fn with_value(
        mut self,
        pname: u32,
        value: FakeValue,
    ) -> Self {
        self.values.insert(pname, value);
        self
    }

    pub fn with_integers(
        self,
        pname: u32,
        values: &[i32],
    ) -> Self {
        self.with_value(pname, FakeValue::Integers(values.to_vec()))
    }

    pub fn with_integers64(
        self,
        pname: u32,
        values: &[i64],
    ) -> Self {
        self.with_value(pname, FakeValue::Integers64(values.to_vec()))
    }

    pub fn with_floats(
        self,
        pname: u32,
        values: &[f32],
    ) -> Self {
        self.with_value(pname, FakeValue::Floats(values.to_vec()))
    }

    pub fn with_booleans(
        self,
        pname: u32,
        values: &[bool],
    ) -> Self {
        self.with_value(pname, FakeValue::Booleans(values.to_vec()))
    }

    pub fn with_text(
        self,
        pname: u32,
        text: &str,
    ) -> Self {
        self.with_value(pname, FakeValue::Text(text.to_string()))
    }

    pub fn with_null_text(
        self,
        pname: u32,
    ) -> Self {
        self.with_value(pname, FakeValue::NullText)
    }

    pub fn with_error(
        self,
        pname: u32,
        error: u32,
    ) -> Self {
        self.with_value(pname, FakeValue::Error(error))
    }

    pub fn with_indexed_strings(
        mut self,
        pname: u32,
        strings: &[&str],
    ) -> Self {
        self.indexed_strings.insert(
            pname,
            strings.iter().map(|string| string.to_string()).collect(),
        );
        self
    }

    pub fn query_count(&self) -> usize {
        self.query_count.get()
    }

    fn lookup(
        &self,
        pname: u32,
    ) -> Option<&FakeValue> {
        self.query_count.set(self.query_count.get() + 1);
        self.values.get(&pname)
    }
}

fn copy_values<T: Copy>(
    source: &[T],
    destination: &mut [T],
) {
    let count = source.len().min(destination.len());
    destination[..count].copy_from_slice(&source[..count]);
}

fn unexpected(value: Option<&FakeValue>) -> GlQueryError {
    match value {
        Some(FakeValue::Error(error)) => GlQueryError::GlError(*error),
        _ => GlQueryError::GlError(bindings::INVALID_ENUM),
    }
}

impl GlQueryPrimitive for FakeDriver {
    fn get_integerv(
        &self,
        pname: u32,
        values: &mut [i32],
    ) -> GlQueryResult<()> {
        match self.lookup(pname) {
            Some(FakeValue::Integers(source)) => Ok(copy_values(source, values)),
            other => Err(unexpected(other)),
        }
    }

    fn get_integer64v(
        &self,
        pname: u32,
        values: &mut [i64],
    ) -> GlQueryResult<()> {
        match self.lookup(pname) {
            Some(FakeValue::Integers64(source)) => Ok(copy_values(source, values)),
            other => Err(unexpected(other)),
        }
    }

    fn get_floatv(
        &self,
        pname: u32,
        values: &mut [f32],
    ) -> GlQueryResult<()> {
        match self.lookup(pname) {
            Some(FakeValue::Floats(source)) => Ok(copy_values(source, values)),
            other => Err(unexpected(other)),
        }
    }

    fn get_booleanv(
        &self,
        pname: u32,
        values: &mut [bool],
    ) -> GlQueryResult<()> {
        match self.lookup(pname) {
            Some(FakeValue::Booleans(source)) => Ok(copy_values(source, values)),
            other => Err(unexpected(other)),
        }
    }

    fn get_string(
        &self,
        pname: u32,
    ) -> GlQueryResult<Option<String>> {
        match self.lookup(pname) {
            Some(FakeValue::Text(text)) => Ok(Some(text.clone())),
            Some(FakeValue::NullText) => Ok(None),
            other => Err(unexpected(other)),
        }
    }

    fn get_stringi(
        &self,
        pname: u32,
        index: u32,
    ) -> GlQueryResult<Option<String>> {
        self.query_count.set(self.query_count.get() + 1);
        self.indexed_strings
            .get(&pname)
            .and_then(|strings| strings.get(index as usize))
            .map(|string| Some(string.clone()))
            .ok_or(GlQueryError::GlError(bindings::INVALID_VALUE))
    }
}

//
// A fake native driver. The entry points below have real GL signatures and read from a per-thread
// FakeDriver, so tests running in parallel don't see each other's state.
//
thread_local! {
    static NATIVE_DRIVER: RefCell<FakeDriver> = RefCell::new(FakeDriver::default());
    static NATIVE_ERROR: Cell<GLenum> = Cell::new(bindings::NO_ERROR);
    static NATIVE_STRINGS: RefCell<Vec<CString>> = RefCell::new(Vec::default());
}

pub fn install_native_driver(driver: FakeDriver) {
    NATIVE_DRIVER.with(|native_driver| *native_driver.borrow_mut() = driver);
    NATIVE_ERROR.with(|error| error.set(bindings::NO_ERROR));
}

/// Leave an error flag set, as if an earlier unrelated call had failed
pub fn set_native_error(error: GLenum) {
    NATIVE_ERROR.with(|native_error| native_error.set(error));
}

fn record_native_error(error: GLenum) {
    NATIVE_ERROR.with(|native_error| {
        // GL keeps the first error until it is read
        if native_error.get() == bindings::NO_ERROR {
            native_error.set(error);
        }
    });
}

fn keep_native_string(text: &str) -> *const GLubyte {
    let text = CString::new(text).unwrap();
    let ptr = text.as_ptr() as *const GLubyte;
    NATIVE_STRINGS.with(|strings| strings.borrow_mut().push(text));
    ptr
}

pub extern "system" fn fake_get_error() -> GLenum {
    NATIVE_ERROR.with(|error| error.replace(bindings::NO_ERROR))
}

pub extern "system" fn fake_get_integerv(
    pname: GLenum,
    data: *mut GLint,
) {
    let result = NATIVE_DRIVER.with(|driver| match driver.borrow().lookup(pname) {
        Some(FakeValue::Integers(values)) => {
            unsafe { std::ptr::copy_nonoverlapping(values.as_ptr(), data, values.len()) };
            Ok(())
        }
        other => Err(unexpected(other)),
    });
    if let Err(GlQueryError::GlError(error)) = result {
        record_native_error(error);
    }
}

pub extern "system" fn fake_get_integer64v(
    pname: GLenum,
    data: *mut GLint64,
) {
    let result = NATIVE_DRIVER.with(|driver| match driver.borrow().lookup(pname) {
        Some(FakeValue::Integers64(values)) => {
            unsafe { std::ptr::copy_nonoverlapping(values.as_ptr(), data, values.len()) };
            Ok(())
        }
        other => Err(unexpected(other)),
    });
    if let Err(GlQueryError::GlError(error)) = result {
        record_native_error(error);
    }
}

pub extern "system" fn fake_get_floatv(
    pname: GLenum,
    data: *mut GLfloat,
) {
    let result = NATIVE_DRIVER.with(|driver| match driver.borrow().lookup(pname) {
        Some(FakeValue::Floats(values)) => {
            unsafe { std::ptr::copy_nonoverlapping(values.as_ptr(), data, values.len()) };
            Ok(())
        }
        other => Err(unexpected(other)),
    });
    if let Err(GlQueryError::GlError(error)) = result {
        record_native_error(error);
    }
}

pub extern "system" fn fake_get_booleanv(
    pname: GLenum,
    data: *mut GLboolean,
) {
    let result = NATIVE_DRIVER.with(|driver| match driver.borrow().lookup(pname) {
        Some(FakeValue::Booleans(values)) => {
            for (index, value) in values.iter().enumerate() {
                let value = if *value {
                    bindings::TRUE
                } else {
                    bindings::FALSE
                };
                unsafe { *data.add(index) = value };
            }
            Ok(())
        }
        other => Err(unexpected(other)),
    });
    if let Err(GlQueryError::GlError(error)) = result {
        record_native_error(error);
    }
}

pub extern "system" fn fake_get_string(pname: GLenum) -> *const GLubyte {
    let result = NATIVE_DRIVER.with(|driver| match driver.borrow().lookup(pname) {
        Some(FakeValue::Text(text)) => Ok(keep_native_string(text)),
        Some(FakeValue::NullText) => Ok(std::ptr::null()),
        other => Err(unexpected(other)),
    });
    match result {
        Ok(ptr) => ptr,
        Err(error) => {
            if let GlQueryError::GlError(error) = error {
                record_native_error(error);
            }
            std::ptr::null()
        }
    }
}

pub extern "system" fn fake_get_stringi(
    pname: GLenum,
    index: GLuint,
) -> *const GLubyte {
    let result = NATIVE_DRIVER.with(|driver| driver.borrow().get_stringi(pname, index));
    match result {
        Ok(Some(text)) => keep_native_string(&text),
        Ok(None) => std::ptr::null(),
        Err(error) => {
            if let GlQueryError::GlError(error) = error {
                record_native_error(error);
            }
            std::ptr::null()
        }
    }
}

/// Symbols for the fake query entry points, as a platform loader would report them
pub fn fake_query_symbols() -> GlSymbolMap {
    GlSymbolMap::new()
        .with_symbol("glGetError", fake_get_error as *const c_void)
        .with_symbol("glGetIntegerv", fake_get_integerv as *const c_void)
        .with_symbol("glGetInteger64v", fake_get_integer64v as *const c_void)
        .with_symbol("glGetFloatv", fake_get_floatv as *const c_void)
        .with_symbol("glGetBooleanv", fake_get_booleanv as *const c_void)
        .with_symbol("glGetString", fake_get_string as *const c_void)
        .with_symbol("glGetStringi", fake_get_stringi as *const c_void)
}

/// A distinct, never-called address to stand in for an entry point in resolution tests
pub fn fake_address(seed: usize) -> *const c_void {
    (0x1000 + seed * 0x10) as *const c_void
}
