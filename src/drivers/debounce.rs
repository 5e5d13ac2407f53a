//! Polled digital-input debouncer.
//!
//! Wraps any `embedded_hal` input pin. `update()` is called once per main
//! loop tick; a new raw level becomes the stable [`value`](Debouncer::value)
//! only after it has stayed unchanged for the configured interval.
//! [`fell`](Debouncer::fell) / [`rose`](Debouncer::rose) report a stable
//! edge on the tick it happened and are cleared by the next `update()`.
//!
//! A failed pin read keeps the previous raw level.

use embedded_hal::digital::InputPin;

pub struct Debouncer<P> {
    pin: P,
    interval_ms: u32,
    raw: bool,
    raw_since_ms: u32,
    stable: bool,
    prev_stable: bool,
}

impl<P: InputPin> Debouncer<P> {
    /// Sample the pin once so the initial level is stable immediately.
    /// Lines idle high, so a failed first read assumes high.
    pub fn new(mut pin: P, interval_ms: u32, now_ms: u32) -> Self {
        let level = pin.is_high().unwrap_or(true);
        Self {
            pin,
            interval_ms,
            raw: level,
            raw_since_ms: now_ms,
            stable: level,
            prev_stable: level,
        }
    }

    pub fn update(&mut self, now_ms: u32) {
        let raw = self.pin.is_high().unwrap_or(self.raw);
        if raw != self.raw {
            self.raw = raw;
            self.raw_since_ms = now_ms;
        }

        self.prev_stable = self.stable;
        if self.raw != self.stable && now_ms.wrapping_sub(self.raw_since_ms) >= self.interval_ms {
            self.stable = self.raw;
        }
    }

    /// Debounced level (`true` = high).
    pub fn value(&self) -> bool {
        self.stable
    }

    /// Stable high → low on the last update.
    pub fn fell(&self) -> bool {
        self.prev_stable && !self.stable
    }
}
