/// Serde helper functions for skip_serializing_if

/// Skip serializing if value is zero (u64)
#[inline]
pub fn is_zero_u64(value: &u64) -> bool {
    *value == 0
}

/// Skip serializing if value is zero (usize)
#[inline]
pub fn is_zero_usize(value: &usize) -> bool {
    *value == 0
}
