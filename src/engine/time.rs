use std::time::{Duration, Instant};

/// Monotonic time source, in seconds.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Seconds since the clock was created.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Clock that only moves when told to.
#[cfg(test)]
pub struct ManualClock {
    now: std::cell::Cell<f64>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: std::cell::Cell::new(start),
        }
    }

    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// Fixed sleep between loop iterations.
pub fn delay(interval: Duration) {
    if !interval.is_zero() {
        std::thread::sleep(interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(a >= 0.0);
        assert!(b >= a);
    }

    #[test]
    fn manual_clock_advances_on_demand() {
        let clock = ManualClock::new(10.0);
        assert_eq!(clock.now(), 10.0);
        clock.advance(2.5);
        assert_eq!(clock.now(), 12.5);
    }
}
