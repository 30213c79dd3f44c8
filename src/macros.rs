//! Call-site validation for generated field accessors.

/// Validates an instance handle before a field access.
///
/// With the `runtime-null-checks` feature enabled every invocation checks
/// the handle and raises the invalid-handle error with the diagnostic in
/// [`NULL_INSTANCE_MSG`](crate::NULL_INSTANCE_MSG). The bare form checks handle
/// nullness only; the `cached` form additionally requires a live cached
/// native pointer and is only available for
/// [`UnityObjectConvertible`](crate::UnityObjectConvertible) handles — its
/// read inherits the instance-validity contract of
/// [`read_cached_ptr`](crate::read_cached_ptr).
///
/// Without the feature the macro expands to nothing, so the check and its
/// error path do not exist in the compiled artifact.
#[cfg(feature = "runtime-null-checks")]
#[macro_export]
macro_rules! field_null_check {
    ($instance:expr) => {
        if !$crate::instance::check_reference(&$instance) {
            panic!("{}", $crate::error::NULL_INSTANCE_MSG);
        }
    };
    ($instance:expr, cached) => {
        // SAFETY: generated call sites only name instances satisfying the
        // cached-pointer read contract.
        if !unsafe { $crate::instance::check_instance::<_, true>(&$instance) } {
            panic!("{}", $crate::error::NULL_INSTANCE_MSG);
        }
    };
}

/// Validates an instance handle before a field access. The
/// `runtime-null-checks` feature is disabled, so this expands to nothing and
/// field accesses are unchecked.
#[cfg(not(feature = "runtime-null-checks"))]
#[macro_export]
macro_rules! field_null_check {
    ($instance:expr) => {};
    ($instance:expr, cached) => {};
}
