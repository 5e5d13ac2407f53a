//! Monotonic millisecond clock.
//!
//! - **`espidf`**: wraps `esp_timer_get_time()` from the ESP-IDF
//!   high-resolution timer.
//! - **host**: uses `std::time::Instant` for tests and simulation.
//!
//! The game core only sees `u32` milliseconds and compares them with
//! wrapping subtraction, so the truncation below is intended.

#[derive(Debug)]
pub struct MonotonicClock {
    #[cfg(not(feature = "espidf"))]
    start: std::time::Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(feature = "espidf"))]
            start: std::time::Instant::now(),
        }
    }

    /// Milliseconds since boot, wrapping at `u32::MAX`.
    #[cfg(feature = "espidf")]
    pub fn now_ms(&self) -> u32 {
        let us = unsafe { esp_idf_svc::sys::esp_timer_get_time() };
        (us / 1000) as u32
    }

    /// Milliseconds since the clock was created, wrapping at `u32::MAX`.
    #[cfg(not(feature = "espidf"))]
    pub fn now_ms(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }
}
