use crate::config::FrameRate;
use std::num::NonZeroU32;

/// Monotonic millisecond tick source with a blocking sleep.
pub trait Clock {
    fn ticks_ms(&mut self) -> u64;
    fn delay_ms(&mut self, ms: u32);
}

pub struct SdlClock {
    timer: sdl2::TimerSubsystem,
}

impl SdlClock {
    pub fn new(timer: sdl2::TimerSubsystem) -> Self {
        SdlClock { timer }
    }
}

impl Clock for SdlClock {
    fn ticks_ms(&mut self) -> u64 {
        self.timer.ticks64()
    }

    fn delay_ms(&mut self, ms: u32) {
        self.timer.delay(ms);
    }
}

/// How long to sleep after a frame that took `elapsed_ms`, given the target rate.
/// Frames that overran their budget get no delay and carry no debt forward.
pub fn frame_delay_ms(elapsed_ms: u64, fps: NonZeroU32) -> u32 {
    let target_ms = u64::from(1000 / fps.get());
    target_ms.saturating_sub(elapsed_ms) as u32
}

/// Scoped guard around one loop iteration. Dropping it pads the iteration
/// to the target frame duration.
pub struct FrameRateLimiter<'a, C: Clock> {
    clock: &'a mut C,
    rate: FrameRate,
    start_ms: u64,
    is_gui_idle: bool,
}

impl<'a, C: Clock> FrameRateLimiter<'a, C> {
    pub fn new(clock: &'a mut C, rate: FrameRate) -> Self {
        let start_ms = clock.ticks_ms();
        FrameRateLimiter {
            clock,
            rate,
            start_ms,
            is_gui_idle: false,
        }
    }

    pub fn is_gui_idle_mut(&mut self) -> &mut bool {
        &mut self.is_gui_idle
    }

    pub fn is_gui_idle(&self) -> bool {
        self.is_gui_idle
    }
}

impl<C: Clock> Drop for FrameRateLimiter<'_, C> {
    fn drop(&mut self) {
        let fps = self.rate.select(self.is_gui_idle);
        let elapsed_ms = self.clock.ticks_ms().saturating_sub(self.start_ms);
        let delay = frame_delay_ms(elapsed_ms, fps);
        if delay > 0 {
            log::trace!(
                "frame took {elapsed_ms} ms, sleeping {delay} ms (target {} fps)",
                fps
            );
            self.clock.delay_ms(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeClock {
        now: u64,
        delays: Vec<u32>,
    }

    impl FakeClock {
        fn advance(&mut self, ms: u64) {
            self.now += ms;
        }
    }

    impl Clock for FakeClock {
        fn ticks_ms(&mut self) -> u64 {
            self.now
        }

        fn delay_ms(&mut self, ms: u32) {
            self.delays.push(ms);
            self.now += u64::from(ms);
        }
    }

    fn run_frame(clock: &mut FakeClock, rate: FrameRate, body_ms: u64, idle: bool) {
        let mut limiter = FrameRateLimiter::new(clock, rate);
        *limiter.is_gui_idle_mut() = idle;
        limiter.clock.advance(body_ms);
    }

    #[test]
    fn delay_uses_integer_division() {
        let fps = |v| NonZeroU32::new(v).unwrap();
        assert_eq!(frame_delay_ms(0, fps(60)), 16);
        assert_eq!(frame_delay_ms(0, fps(7)), 142);
        assert_eq!(frame_delay_ms(0, fps(5)), 200);
        assert_eq!(frame_delay_ms(10, fps(60)), 6);
        assert_eq!(frame_delay_ms(16, fps(60)), 0);
        assert_eq!(frame_delay_ms(0, fps(1500)), 0);
    }

    #[test]
    fn busy_frame_is_padded() {
        let mut clock = FakeClock::default();
        run_frame(&mut clock, FrameRate::DEFAULT, 10, false);
        assert_eq!(clock.delays, vec![6]);
        assert_eq!(clock.now, 16);
    }

    #[test]
    fn idle_frame_uses_idle_rate() {
        let mut clock = FakeClock::default();
        run_frame(&mut clock, FrameRate::DEFAULT, 30, true);
        assert_eq!(clock.delays, vec![170]);
    }

    #[test]
    fn slow_frame_does_not_sleep_or_catch_up() {
        let mut clock = FakeClock::default();
        run_frame(&mut clock, FrameRate::DEFAULT, 20, false);
        assert!(clock.delays.is_empty());

        // next frame gets its full budget again
        run_frame(&mut clock, FrameRate::DEFAULT, 4, false);
        assert_eq!(clock.delays, vec![12]);
    }

    #[test]
    fn sleep_matches_formula_for_many_rates() {
        for (busy, idle) in [(60, 5), (144, 30), (7, 3), (1000, 1)] {
            let rate = FrameRate::new(busy, idle).unwrap();
            for body in [0u64, 1, 9, 50, 400] {
                for idle_frame in [false, true] {
                    let fps = if idle_frame { idle } else { busy };
                    let expected = (1000 / fps as u64).saturating_sub(body) as u32;
                    let mut clock = FakeClock::default();
                    run_frame(&mut clock, rate, body, idle_frame);
                    let slept: u32 = clock.delays.iter().sum();
                    assert_eq!(slept, expected, "busy={busy} idle={idle} body={body}");
                }
            }
        }
    }

    #[test]
    fn guard_fires_on_early_return() {
        fn body(clock: &mut FakeClock) -> Result<(), String> {
            let limiter = FrameRateLimiter::new(clock, FrameRate::DEFAULT);
            limiter.clock.advance(1);
            if limiter.clock.now > 0 {
                return Err("bail".to_string());
            }
            Ok(())
        }

        let mut clock = FakeClock::default();
        assert!(body(&mut clock).is_err());
        assert_eq!(clock.delays, vec![15]);
    }

    #[test]
    fn idle_flag_starts_false() {
        let mut clock = FakeClock::default();
        let limiter = FrameRateLimiter::new(&mut clock, FrameRate::DEFAULT);
        assert!(!limiter.is_gui_idle());
    }
}
