#[cfg(test)]
mod tests {
    use crate::offset::{at_offset, at_offset_const};
    use std::{ffi::c_void, ptr};

    #[test]
    fn test_resolves_base_plus_offset() {
        let mut storage = [0u8; 64];
        let base = storage.as_mut_ptr() as *mut c_void;

        assert_eq!(at_offset::<0>(base) as usize, base as usize);
        assert_eq!(at_offset::<8>(base) as usize, base as usize + 8);
        assert_eq!(at_offset::<0x10>(base) as usize, base as usize + 0x10);
        assert_eq!(at_offset::<56>(base) as usize, base as usize + 56);
    }

    #[test]
    fn test_read_only_variant_matches_mutable() {
        let storage = [0u8; 32];
        let base = storage.as_ptr() as *const c_void;

        assert_eq!(
            at_offset_const::<24>(base) as usize,
            at_offset::<24>(base as *mut c_void) as usize
        );
    }

    #[test]
    fn test_null_base_is_well_defined_arithmetic() {
        // Address computation never dereferences, so resolving against a null
        // base is legal; only the caller may not read through the result.
        let resolved = at_offset::<0x20>(ptr::null_mut());
        assert_eq!(resolved as usize, 0x20);
    }

    #[test]
    fn test_slot_reinterpretation_round_trips_a_pointer() {
        #[repr(C, align(8))]
        struct Storage([u8; 32]);
        let mut storage = Storage([0u8; 32]);
        let base = storage.0.as_mut_ptr() as *mut c_void;

        let sentinel = 0xDEAD_B00Fusize as *mut c_void;
        unsafe {
            *at_offset::<16>(base) = sentinel;
            assert_eq!(*at_offset::<16>(base), sentinel);
            assert_eq!(*at_offset_const::<16>(base), sentinel as *const c_void);
        }
    }
}
