use fnv::FnvHashMap;
use std::ffi::c_void;
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

/// A native function address that was successfully loaded. Never null.
///
/// Addresses are only valid for the context they were loaded from. Not `Send` or `Sync`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GlFnPtr(NonNull<c_void>);

impl GlFnPtr {
    /// Wraps an address returned by a platform loader, or returns None if the loader reported the
    /// symbol as missing.
    pub fn new(ptr: *const c_void) -> Option<GlFnPtr> {
        // wglGetProcAddress returns these instead of null on some drivers
        match ptr as isize {
            1 | 2 | 3 | -1 => None,
            _ => NonNull::new(ptr as *mut c_void).map(GlFnPtr),
        }
    }

    pub fn as_ptr(&self) -> *const c_void {
        self.0.as_ptr()
    }

    /// Reinterpret the address as a typed function pointer.
    ///
    /// # Safety
    ///
    /// `F` must be an `extern "system" fn` type whose signature matches the native function this
    /// address was loaded for.
    pub unsafe fn cast<F: Copy>(self) -> F {
        assert_eq!(
            std::mem::size_of::<F>(),
            std::mem::size_of::<*const c_void>(),
            "GlFnPtr can only be cast to a function pointer type"
        );
        std::mem::transmute_copy(&self.0.as_ptr())
    }
}

/// Looks up native entry points by symbol name for the context that is current on the calling
/// thread. Unknown names must produce None, not an error.
pub trait GlSymbolResolver {
    fn resolve_symbol(
        &self,
        symbol_name: &str,
    ) -> Option<GlFnPtr>;
}

impl<T: GlSymbolResolver + ?Sized> GlSymbolResolver for Rc<T> {
    fn resolve_symbol(
        &self,
        symbol_name: &str,
    ) -> Option<GlFnPtr> {
        (**self).resolve_symbol(symbol_name)
    }
}

impl<T: GlSymbolResolver + ?Sized> GlSymbolResolver for Arc<T> {
    fn resolve_symbol(
        &self,
        symbol_name: &str,
    ) -> Option<GlFnPtr> {
        (**self).resolve_symbol(symbol_name)
    }
}

/// Adapts a platform `get_proc_address` (wglGetProcAddress, eglGetProcAddress, glXGetProcAddress,
/// etc.) to `GlSymbolResolver`
///
/// ```ignore
/// let resolver = GlProcAddressResolver::new(|symbol| context.get_proc_address(symbol) as *const _);
/// ```
pub struct GlProcAddressResolver<F> {
    get_proc_address: F,
}

impl<F> GlProcAddressResolver<F>
where
    F: Fn(&str) -> *const c_void,
{
    pub fn new(get_proc_address: F) -> Self {
        GlProcAddressResolver { get_proc_address }
    }
}

impl<F> GlSymbolResolver for GlProcAddressResolver<F>
where
    F: Fn(&str) -> *const c_void,
{
    fn resolve_symbol(
        &self,
        symbol_name: &str,
    ) -> Option<GlFnPtr> {
        GlFnPtr::new((self.get_proc_address)(symbol_name))
    }
}

/// A fixed name -> address table. Useful for statically linked drivers and for tests.
#[derive(Default)]
pub struct GlSymbolMap {
    symbols: FnvHashMap<String, GlFnPtr>,
}

impl GlSymbolMap {
    pub fn new() -> Self {
        Default::default()
    }

    /// Null or sentinel addresses are ignored, the symbol stays unresolvable
    pub fn insert(
        &mut self,
        symbol_name: &str,
        ptr: *const c_void,
    ) {
        if let Some(ptr) = GlFnPtr::new(ptr) {
            self.symbols.insert(symbol_name.to_string(), ptr);
        }
    }

    pub fn with_symbol(
        mut self,
        symbol_name: &str,
        ptr: *const c_void,
    ) -> Self {
        self.insert(symbol_name, ptr);
        self
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl GlSymbolResolver for GlSymbolMap {
    fn resolve_symbol(
        &self,
        symbol_name: &str,
    ) -> Option<GlFnPtr> {
        self.symbols.get(symbol_name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    extern "system" fn add_one(value: i32) -> i32 {
        value + 1
    }

    #[test]
    fn test_null_and_sentinels_are_missing() {
        assert!(GlFnPtr::new(std::ptr::null()).is_none());
        assert!(GlFnPtr::new(1 as *const c_void).is_none());
        assert!(GlFnPtr::new(2 as *const c_void).is_none());
        assert!(GlFnPtr::new(3 as *const c_void).is_none());
        assert!(GlFnPtr::new(-1isize as *const c_void).is_none());
        assert!(GlFnPtr::new(add_one as *const c_void).is_some());
    }

    #[test]
    fn test_cast_calls_through() {
        let ptr = GlFnPtr::new(add_one as *const c_void).unwrap();
        let f: extern "system" fn(i32) -> i32 = unsafe { ptr.cast() };
        assert_eq!(f(41), 42);
    }

    #[test]
    fn test_proc_address_resolver() {
        let resolver = GlProcAddressResolver::new(|symbol: &str| {
            if symbol == "glAddOne" {
                add_one as *const c_void
            } else {
                std::ptr::null()
            }
        });

        assert!(resolver.resolve_symbol("glAddOne").is_some());
        assert!(resolver.resolve_symbol("glAddTwo").is_none());
    }

    #[test]
    fn test_symbol_map() {
        let map = GlSymbolMap::new()
            .with_symbol("glAddOne", add_one as *const c_void)
            .with_symbol("glMissing", std::ptr::null());

        assert_eq!(map.len(), 1);
        assert_eq!(
            map.resolve_symbol("glAddOne").map(|ptr| ptr.as_ptr()),
            Some(add_one as *const c_void)
        );
        assert!(map.resolve_symbol("glMissing").is_none());
    }
}
