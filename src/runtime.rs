//! Process-wide binding to the IL2CPP runtime's C entry points.
//!
//! The crate never links against the runtime at build time; the handful of
//! `il2cpp_*` functions it consumes are resolved once per process, either
//! from the runtime's shared library or injected directly by an embedder.

use crate::error::RuntimeError;
use libloading::{Library, Symbol};
use std::{
    ffi::{c_char, c_void, OsStr},
    sync::OnceLock,
};

/// Opaque runtime class metadata. Only ever handled by pointer.
#[repr(C)]
pub struct Il2CppClass {
    _private: [u8; 0],
}

/// Opaque runtime field metadata. Only ever handled by pointer.
#[repr(C)]
pub struct FieldInfo {
    _private: [u8; 0],
}

pub type ClassGetFieldFromNameFn =
    unsafe extern "C" fn(*mut Il2CppClass, *const c_char) -> *mut FieldInfo;
pub type FieldStaticGetValueFn = unsafe extern "C" fn(*mut FieldInfo, *mut c_void);
pub type FieldStaticSetValueFn = unsafe extern "C" fn(*mut FieldInfo, *mut c_void);
pub type GcWbarrierSetFieldFn = unsafe extern "C" fn(*mut c_void, *mut *mut c_void, *mut c_void);
pub type ValueBoxFn = unsafe extern "C" fn(*mut Il2CppClass, *mut c_void) -> *mut c_void;
pub type ObjectUnboxFn = unsafe extern "C" fn(*mut c_void) -> *mut c_void;

/// The runtime entry points consumed by generated bindings.
#[derive(Copy, Clone)]
pub struct RuntimeApi {
    pub class_get_field_from_name: ClassGetFieldFromNameFn,
    pub field_static_get_value: FieldStaticGetValueFn,
    pub field_static_set_value: FieldStaticSetValueFn,
    pub gc_wbarrier_set_field: GcWbarrierSetFieldFn,
    pub value_box: ValueBoxFn,
    pub object_unbox: ObjectUnboxFn,
}

static API: OnceLock<RuntimeApi> = OnceLock::new();

/// Installs an already-resolved entry point table. Embedders that host the
/// runtime in-process use this instead of [`load`]; tests inject fakes the
/// same way.
pub fn install(api: RuntimeApi) -> Result<(), RuntimeError> {
    API.set(api).map_err(|_| RuntimeError::AlreadyInstalled)?;
    trace_msg!("runtime API installed");
    Ok(())
}

/// Loads the runtime shared library at `path` and resolves the entry point
/// table from its exports. The library stays loaded for the rest of the
/// process; the resolved function pointers outlive any handle we could keep.
///
/// # Safety
///
/// `path` must name the IL2CPP runtime actually hosting the objects this
/// process accesses; loading an arbitrary library executes its initializers.
pub unsafe fn load(path: impl AsRef<OsStr>) -> Result<&'static RuntimeApi, RuntimeError> {
    let path = path.as_ref();
    let library =
        unsafe { Library::new(path) }.map_err(|e| RuntimeError::Load(e.to_string()))?;

    macro_rules! resolve {
        ($name:literal, $ty:ty) => {{
            let symbol: Symbol<$ty> = unsafe { library.get(concat!($name, "\0").as_bytes()) }
                .map_err(|_| RuntimeError::MissingSymbol($name.into()))?;
            trace_msg!("resolved {}", $name);
            *symbol
        }};
    }

    let api = RuntimeApi {
        class_get_field_from_name: resolve!(
            "il2cpp_class_get_field_from_name",
            ClassGetFieldFromNameFn
        ),
        field_static_get_value: resolve!("il2cpp_field_static_get_value", FieldStaticGetValueFn),
        field_static_set_value: resolve!("il2cpp_field_static_set_value", FieldStaticSetValueFn),
        gc_wbarrier_set_field: resolve!("il2cpp_gc_wbarrier_set_field", GcWbarrierSetFieldFn),
        value_box: resolve!("il2cpp_value_box", ValueBoxFn),
        object_unbox: resolve!("il2cpp_object_unbox", ObjectUnboxFn),
    };

    // Unloading would invalidate every resolved pointer; keep the library
    // mapped for the process lifetime.
    std::mem::forget(library);

    trace_msg!("loaded runtime library {:?}", path);
    install(api)?;
    Ok(self::api())
}

/// The installed entry point table.
///
/// # Panics
///
/// Panics if neither [`install`] nor [`load`] has succeeded yet.
pub fn api() -> &'static RuntimeApi {
    match API.get() {
        Some(api) => api,
        None => {
            panic!("IL2CPP runtime API is not installed, call runtime::install or runtime::load first")
        }
    }
}

/// The installed entry point table, or `None` before installation.
pub fn try_api() -> Option<&'static RuntimeApi> {
    API.get()
}
