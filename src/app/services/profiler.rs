//! Resource profiler for strategy execution
//!
//! Tracks heap usage through a counting allocator layered over the system
//! allocator: every allocation and deallocation adjusts a live byte count,
//! and a high-water mark records the peak. [`measure`] brackets one
//! pipeline invocation with a baseline and reports the deltas, leaving the
//! pipeline's output untouched.
//!
//! The allocator is installed crate-wide via `#[global_allocator]` in
//! `lib.rs`; this module only maintains the counters.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::app::models::MemorySample;

/// Bytes currently allocated across the process
static ALLOCATED: AtomicUsize = AtomicUsize::new(0);

/// Highest live byte count observed since the last peak reset
static PEAK: AtomicUsize = AtomicUsize::new(0);

/// Byte-counting wrapper around the system allocator
pub struct TrackingAllocator;

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        ALLOCATED.fetch_sub(layout.size(), Ordering::Relaxed);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            ALLOCATED.fetch_sub(layout.size(), Ordering::Relaxed);
            record_alloc(new_size);
        }
        new_ptr
    }
}

fn record_alloc(size: usize) {
    let live = ALLOCATED.fetch_add(size, Ordering::Relaxed) + size;
    PEAK.fetch_max(live, Ordering::Relaxed);
}

/// Bytes currently allocated
pub fn current_bytes() -> usize {
    ALLOCATED.load(Ordering::Relaxed)
}

/// High-water mark since the last [`measure`] baseline
pub fn peak_bytes() -> usize {
    PEAK.load(Ordering::Relaxed)
}

/// Run one pipeline invocation under memory tracing
///
/// Rebases the peak to the current live count, invokes the pipeline, and
/// samples current and peak bytes relative to that baseline immediately
/// after it completes. The pipeline's value is returned unchanged.
pub fn measure<T>(pipeline: impl FnOnce() -> T) -> (T, MemorySample) {
    let baseline = current_bytes();
    PEAK.store(baseline, Ordering::Relaxed);

    let value = pipeline();

    let sample = MemorySample {
        current_bytes: current_bytes().saturating_sub(baseline),
        peak_bytes: peak_bytes().saturating_sub(baseline),
    };
    (value, sample)
}
