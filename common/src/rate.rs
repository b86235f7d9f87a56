// leading-edge throttle
//
// the first call goes through, and then everything is dropped until `interval` milliseconds
// have passed since the last call that went through.  trailing calls are not replayed, which
// is fine for scroll handlers since they recompute everything from scratch anyway
//
// the clock is passed in so the gate stays independent of the browser.  a clock that runs
// backwards counts as the interval having passed, so a stale `last` can never hold the gate
// shut
#[derive(Clone, Debug)]
pub struct Throttle {
    interval: f64,
    last: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: u32) -> Self {
        Throttle {
            interval: f64::from(interval_ms),
            last: None,
        }
    }

    pub fn ready(&mut self, now: f64) -> bool {
        match self.last {
            Some(last) if now >= last && now - last < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttle_is_leading_edge() {
        let mut gate = Throttle::new(100);

        assert!(gate.ready(0.0));
        assert!(!gate.ready(10.0));
        assert!(!gate.ready(99.9));
        assert!(gate.ready(100.0));
        assert!(!gate.ready(150.0));
        assert!(gate.ready(250.0));
    }

    #[test]
    fn dropped_calls_do_not_extend_the_window() {
        let mut gate = Throttle::new(100);

        assert!(gate.ready(1000.0));
        for t in (1001..1100).step_by(7) {
            assert!(!gate.ready(f64::from(t)));
        }
        assert!(gate.ready(1100.0));
    }

    #[test]
    fn clock_jumping_back_reopens_the_gate() {
        let mut gate = Throttle::new(100);
        let start = 10_000_000.0;

        assert!(gate.ready(start));

        // an hour back, then a second per call; without the guard all of these would be
        // swallowed until the clock caught up again
        let back = start - 3_600_000.0;
        assert!(gate.ready(back));
        assert!(!gate.ready(back + 50.0));
        assert!(gate.ready(back + 1000.0));
        assert!(gate.ready(back + 2000.0));
    }
}
