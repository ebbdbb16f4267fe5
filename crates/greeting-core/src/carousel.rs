use std::time::Duration;

/// Photo carousel position, advanced on its own fixed cadence.
///
/// Deadlines are kept on the cadence grid, so a late poll advances by every
/// missed step instead of drifting.
#[derive(Clone, Debug)]
pub struct Carousel {
    index: usize,
    len: usize,
    interval: Duration,
    next_at: Duration,
}

impl Carousel {
    pub fn new(len: usize, interval: Duration, now: Duration) -> Self {
        Self {
            index: 0,
            len: len.max(1),
            interval,
            next_at: now + interval,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the new index if at least one step was taken.
    pub fn tick(&mut self, now: Duration) -> Option<usize> {
        let mut advanced = false;
        while self.next_at <= now {
            self.index = (self.index + 1) % self.len;
            self.next_at += self.interval;
            advanced = true;
        }
        advanced.then_some(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn advances_every_interval_and_wraps() {
        let mut c = Carousel::new(10, ms(3000), Duration::ZERO);
        assert_eq!(c.tick(ms(2999)), None);
        assert_eq!(c.tick(ms(3000)), Some(1));
        assert_eq!(c.tick(ms(3001)), None);
        for step in 2..=10 {
            c.tick(ms(3000 * step));
        }
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn late_poll_catches_up_without_drift() {
        let mut c = Carousel::new(10, ms(3000), Duration::ZERO);
        assert_eq!(c.tick(ms(9500)), Some(3));
        assert_eq!(c.tick(ms(11_999)), None);
        assert_eq!(c.tick(ms(12_000)), Some(4));
    }
}
