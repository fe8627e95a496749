//! C ABI for hosts that drive a universe through an opaque handle.
//!
//! A host typically calls `torus_universe_tick` once per frame, then reads the
//! packed buffer from `torus_universe_cells` and paints it. The buffer pointer
//! is only valid until the next `init` or `tick` on the same handle.
//!
//! Strategies cross the boundary as `CreationStrategy::code` values.
//!
//! Status codes returned by mutating calls:
//! - `0` success
//! - `1` null handle
//! - `2` invalid strategy code

use crate::universe::Universe;
use std::ptr;
use tracing::warn;

pub const STATUS_OK: u32 = 0;
pub const STATUS_NULL_HANDLE: u32 = 1;
pub const STATUS_INVALID_STRATEGY: u32 = 2;

/// Allocate an all-dead universe. Returns null if either dimension is zero
/// or the grid cannot be allocated.
#[no_mangle]
pub extern "C" fn torus_universe_new(width: u32, height: u32) -> *mut Universe {
    match Universe::new(width, height) {
        Ok(universe) => Box::into_raw(Box::new(universe)),
        Err(e) => {
            warn!("Rejected universe creation: {}", e);
            ptr::null_mut()
        }
    }
}

/// Release a universe created by `torus_universe_new`.
///
/// # Safety
/// `handle` must be null or a pointer returned by `torus_universe_new` that
/// has not been freed.
#[no_mangle]
pub unsafe extern "C" fn torus_universe_free(handle: *mut Universe) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Reseed with a strategy code as given by `CreationStrategy::code`.
///
/// # Safety
/// `handle` must be null or a live pointer from `torus_universe_new`.
#[no_mangle]
pub unsafe extern "C" fn torus_universe_init(handle: *mut Universe, strategy: u32) -> u32 {
    let Some(universe) = handle.as_mut() else {
        warn!("torus_universe_init called with null handle");
        return STATUS_NULL_HANDLE;
    };
    match universe.init_code(strategy) {
        Ok(()) => STATUS_OK,
        Err(e) => {
            warn!("Rejected init: {}", e);
            STATUS_INVALID_STRATEGY
        }
    }
}

/// Advance one generation.
///
/// # Safety
/// `handle` must be null or a live pointer from `torus_universe_new`.
#[no_mangle]
pub unsafe extern "C" fn torus_universe_tick(handle: *mut Universe) -> u32 {
    match handle.as_mut() {
        Some(universe) => {
            universe.tick();
            STATUS_OK
        }
        None => {
            warn!("torus_universe_tick called with null handle");
            STATUS_NULL_HANDLE
        }
    }
}

/// Borrow the packed cell buffer, writing its byte length to `out_len`.
/// Returns null (and length 0) for a null handle.
///
/// # Safety
/// `handle` must be null or a live pointer from `torus_universe_new`;
/// `out_len` must be null or valid for a write.
#[no_mangle]
pub unsafe extern "C" fn torus_universe_cells(
    handle: *const Universe,
    out_len: *mut usize,
) -> *const u8 {
    let (ptr, len) = match handle.as_ref() {
        Some(universe) => (universe.cell_ptr(), universe.cells().len()),
        None => (ptr::null(), 0),
    };
    if let Some(out_len) = out_len.as_mut() {
        *out_len = len;
    }
    ptr
}

/// # Safety
/// `handle` must be null or a live pointer from `torus_universe_new`.
#[no_mangle]
pub unsafe extern "C" fn torus_universe_width(handle: *const Universe) -> u32 {
    handle.as_ref().map_or(0, Universe::width)
}

/// # Safety
/// `handle` must be null or a live pointer from `torus_universe_new`.
#[no_mangle]
pub unsafe extern "C" fn torus_universe_height(handle: *const Universe) -> u32 {
    handle.as_ref().map_or(0, Universe::height)
}
