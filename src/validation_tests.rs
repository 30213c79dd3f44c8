#[cfg(test)]
mod tests {
    use crate::instance::{
        check_instance, check_reference, read_cached_ptr, ObjectHandle, ReferenceType,
        UnityObjectHandle,
    };
    use std::{ffi::c_void, ptr};

    // Minimal stand-in for a `UnityEngine.Object` instance: 16 header bytes,
    // then the cached native pointer slot.
    #[repr(C, align(8))]
    struct FakeUnityObject {
        header: [usize; 2],
        cached_ptr: *mut c_void,
        payload: u64,
    }

    impl FakeUnityObject {
        fn new(cached_ptr: *mut c_void) -> Self {
            Self {
                header: [0; 2],
                cached_ptr,
                payload: 0,
            }
        }

        fn handle(&mut self) -> UnityObjectHandle {
            unsafe { UnityObjectHandle::from_raw(self as *mut Self as *mut c_void) }
        }
    }

    #[test]
    fn test_null_handle_fails_without_reading_memory() {
        let handle = UnityObjectHandle::NULL;
        // Short-circuits on handle-nullness; nothing backs offset 16 here.
        assert!(!unsafe { check_instance::<_, true>(&handle) });
        assert!(!unsafe { check_instance::<_, false>(&handle) });
        assert!(unsafe { read_cached_ptr(&handle) }.is_none());
    }

    #[test]
    fn test_live_cached_ptr_passes() {
        let mut native = 0u64;
        let mut object = FakeUnityObject::new(&mut native as *mut u64 as *mut c_void);
        let handle = object.handle();

        assert!(unsafe { check_instance::<_, true>(&handle) });
        assert_eq!(
            unsafe { read_cached_ptr(&handle) }.map(|p| p.as_ptr() as usize),
            Some(&native as *const u64 as usize)
        );
    }

    #[test]
    fn test_stale_handle_fails_despite_being_non_null() {
        // The runtime zeroes the cached pointer when the native object dies;
        // the handle itself stays structurally valid.
        let mut object = FakeUnityObject::new(ptr::null_mut());
        let handle = object.handle();

        assert!(!handle.is_null());
        assert!(!unsafe { check_instance::<_, true>(&handle) });
    }

    #[test]
    fn test_disabled_cached_check_only_consults_the_handle() {
        let mut object = FakeUnityObject::new(ptr::null_mut());
        let handle = object.handle();

        assert!(unsafe { check_instance::<_, false>(&handle) });
    }

    #[test]
    fn test_plain_reference_policy_is_nullness() {
        let mut slot = 0u64;
        let live =
            unsafe { ObjectHandle::from_raw(&mut slot as *mut u64 as *mut c_void) };

        assert!(check_reference(&live));
        assert!(!check_reference(&ObjectHandle::NULL));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut native = 0u64;
        let mut object = FakeUnityObject::new(&mut native as *mut u64 as *mut c_void);
        let handle = object.handle();

        for _ in 0..4 {
            assert!(unsafe { check_instance::<_, true>(&handle) });
        }

        object.cached_ptr = ptr::null_mut();
        let handle = object.handle();
        for _ in 0..4 {
            assert!(!unsafe { check_instance::<_, true>(&handle) });
        }
    }

    #[test]
    fn test_handles_format_null_distinctly() {
        assert_eq!(format!("{:?}", ObjectHandle::NULL), "NULL");
        let mut slot = 0u64;
        let live =
            unsafe { ObjectHandle::from_raw(&mut slot as *mut u64 as *mut c_void) };
        assert!(format!("{live:?}").starts_with("ObjectHandle("));
    }
}
