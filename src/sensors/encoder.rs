//! Rotary encoder position tracker.
//!
//! Consumes the two *debounced* encoder lines once per tick. Only a
//! falling edge on A moves the counter: B high means clockwise (+1),
//! B low means counter-clockwise (-1). Every other combination of line
//! changes is ignored, so repeated ticks with no A edge are no-ops.

/// Signed, session-long encoder position.
#[derive(Debug, Clone, Copy)]
pub struct EncoderTracker {
    position: i32,
    last_a: bool,
}

impl Default for EncoderTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl EncoderTracker {
    /// Lines idle high (pull-ups), so the first low A reading is an edge.
    pub fn new() -> Self {
        Self {
            position: 0,
            last_a: true,
        }
    }

    /// Feed one sample of the debounced lines.
    /// Returns the step applied this tick (-1, 0, or +1).
    pub fn update(&mut self, a: bool, b: bool) -> i32 {
        let fell = self.last_a && !a;
        self.last_a = a;

        if !fell {
            return 0;
        }

        let step = if b { 1 } else { -1 };
        self.position = self.position.wrapping_add(step);
        step
    }

    pub fn position(&self) -> i32 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One detent: A falls while B holds `b`, then A returns high.
    fn detent(enc: &mut EncoderTracker, b: bool) {
        enc.update(false, b);
        enc.update(true, b);
    }

    #[test]
    fn clockwise_detent_increments() {
        let mut enc = EncoderTracker::new();
        detent(&mut enc, true);
        assert_eq!(enc.position(), 1);
    }

    #[test]
    fn counter_clockwise_detent_decrements() {
        let mut enc = EncoderTracker::new();
        detent(&mut enc, false);
        assert_eq!(enc.position(), -1);
    }

    #[test]
    fn holding_a_low_counts_once() {
        let mut enc = EncoderTracker::new();
        assert_eq!(enc.update(false, true), 1);
        assert_eq!(enc.update(false, true), 0);
        assert_eq!(enc.update(false, false), 0);
        assert_eq!(enc.position(), 1);
    }

    #[test]
    fn b_changes_alone_never_move() {
        let mut enc = EncoderTracker::new();
        for b in [true, false, true, false] {
            enc.update(true, b);
        }
        assert_eq!(enc.position(), 0);
    }

    #[test]
    fn three_up_one_down_nets_two() {
        let mut enc = EncoderTracker::new();
        for _ in 0..3 {
            detent(&mut enc, true);
        }
        // no-op ticks with B flapping while A stays high
        enc.update(true, false);
        enc.update(true, true);
        detent(&mut enc, false);
        assert_eq!(enc.position(), 2);
    }
}
