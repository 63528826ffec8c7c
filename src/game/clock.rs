use std::time::Duration;

/// Fixed-rate tick scheduling, independent of the frame rate.
///
/// Real time is fed in once per frame.  Whenever the accumulated time reaches
/// one tick period, a single tick fires and one period is taken off the
/// accumulator; any remainder carries over to the next frame.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct TickClock {
    accumulated: Duration,
}

impl TickClock {
    pub(crate) fn new() -> TickClock {
        TickClock::default()
    }

    /// Add `elapsed` to the accumulator and return whether a tick is due at
    /// the given tick `period`
    pub(crate) fn advance(&mut self, elapsed: Duration, period: Duration) -> bool {
        self.accumulated = self.accumulated.saturating_add(elapsed);
        if self.accumulated >= period {
            self.accumulated -= period;
            true
        } else {
            false
        }
    }

    pub(crate) fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(100);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn steady_frames() {
        let mut clock = TickClock::new();
        let ticks = (0..60).filter(|_| clock.advance(ms(25), PERIOD)).count();
        assert_eq!(ticks, 15);
    }

    #[test]
    fn remainder_carries_over() {
        let mut clock = TickClock::new();
        assert!(!clock.advance(ms(70), PERIOD));
        assert!(clock.advance(ms(70), PERIOD));
        // 40ms left over
        assert!(!clock.advance(ms(50), PERIOD));
        assert!(clock.advance(ms(10), PERIOD));
    }

    #[test]
    fn one_tick_per_frame() {
        let mut clock = TickClock::new();
        assert!(clock.advance(ms(250), PERIOD));
        // The backlog is worked off on later frames
        assert!(clock.advance(Duration::ZERO, PERIOD));
        assert!(!clock.advance(Duration::ZERO, PERIOD));
        assert!(clock.advance(ms(50), PERIOD));
    }

    #[test]
    fn variable_frames_same_rate() {
        let mut clock = TickClock::new();
        let frames = [ms(10), ms(33), ms(7), ms(50), ms(16), ms(84)].repeat(10);
        let ticks = frames
            .into_iter()
            .filter(|&f| clock.advance(f, PERIOD))
            .count();
        assert_eq!(ticks, 20);
    }

    #[test]
    fn reset() {
        let mut clock = TickClock::new();
        assert!(!clock.advance(ms(90), PERIOD));
        clock.reset();
        assert!(!clock.advance(ms(90), PERIOD));
    }
}
