/// The two countdown counters. Programs set them and read the delay counter
/// back; the machine decrements each by exactly one per executed cycle while
/// it is above zero. How fast that is in wall-clock terms is whatever rate
/// the host paces cycles at.
#[derive(Default)]
pub struct TimerBank {
    pub delay: u8,
    pub sound: u8,
}

impl TimerBank {
    pub fn new() -> Self {
        TimerBank::default()
    }

    /// one cycle's worth of countdown; never below zero
    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_counts_down_both() {
        let mut t = TimerBank::new();
        t.delay = 2;
        t.sound = 1;
        t.tick();
        assert_eq!((t.delay, t.sound), (1, 0));
    }

    #[test]
    fn test_tick_stops_at_zero() {
        let mut t = TimerBank::new();
        t.tick();
        assert_eq!((t.delay, t.sound), (0, 0));
    }

    #[test]
    fn test_counters_are_independent() {
        let mut t = TimerBank::new();
        t.delay = 5;
        t.tick();
        assert_eq!(t.delay, 4);
        assert_eq!(t.sound, 0);
    }
}
