use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU32, Ordering};

/// Process-wide correlation counter.
static GLOBAL_ID_COUNTER: Lazy<AtomicU32> = Lazy::new(|| AtomicU32::new(1));

/// Returns the next correlation id. Never returns 0, including after the
/// counter wraps.
#[inline]
pub fn increment_u32_id() -> u32 {
    next_nonzero_u32(&GLOBAL_ID_COUNTER)
}

/// Takes the next value from `counter`, skipping 0 on overflow.
pub fn next_nonzero_u32(counter: &AtomicU32) -> u32 {
    loop {
        let id = counter.fetch_add(1, Ordering::Relaxed);
        if id != 0 {
            return id;
        }
    }
}
