//! Timer-free state machines behind the typewriter and count-up effects
//!
//! The hooks in [`crate::hooks`] own the timers; these types only decide what
//! the next frame shows and when the animation is over.

use std::time::Duration;

/// Shortest interval between two count-up frames
pub const MIN_FRAME: Duration = Duration::from_millis(16);

/// Reveals a string one character at a time
#[derive(Debug, Clone, PartialEq)]
pub struct TextReveal {
    text: String,
    /// Byte offsets of every char boundary after the first char
    boundaries: Vec<usize>,
    shown: usize,
}

impl TextReveal {
    pub fn new(text: &str) -> Self {
        let boundaries = text
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        TextReveal {
            text: text.to_string(),
            boundaries,
            shown: 0,
        }
    }

    /// Grows the visible prefix by one char, or `None` once everything is shown
    pub fn tick(&mut self) -> Option<&str> {
        let end = *self.boundaries.get(self.shown)?;
        self.shown += 1;
        Some(&self.text[..end])
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.boundaries.len()
    }
}

/// Counts from zero up to a target within a duration
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: u64,
    current: u64,
    step: u64,
    interval: Duration,
}

impl CountUp {
    pub fn new(target: u64, duration: Duration) -> Self {
        let max_frames = (duration.as_millis() / MIN_FRAME.as_millis()).max(1) as u64;
        let frames = max_frames.min(target.max(1));
        let step = target.div_ceil(frames).max(1);
        let interval = (duration / frames as u32).max(MIN_FRAME);
        CountUp {
            target,
            current: 0,
            step,
            interval,
        }
    }

    /// Advances one frame; `None` once the target has been reached
    pub fn tick(&mut self) -> Option<u64> {
        if self.current >= self.target {
            return None;
        }
        self.current = (self.current + self.step).min(self.target);
        Some(self.current)
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_reveal_hi() {
        let mut reveal = TextReveal::new("Hi");
        assert!(!reveal.is_done());
        assert_eq!(reveal.tick(), Some("H"));
        assert_eq!(reveal.tick(), Some("Hi"));
        assert!(reveal.is_done());
        assert_eq!(reveal.tick(), None);
    }

    #[test]
    fn test_text_reveal_multibyte() {
        let mut reveal = TextReveal::new("₦é");
        assert_eq!(reveal.tick(), Some("₦"));
        assert_eq!(reveal.tick(), Some("₦é"));
        assert_eq!(reveal.tick(), None);
    }

    #[test]
    fn test_text_reveal_empty() {
        let mut reveal = TextReveal::new("");
        assert!(reveal.is_done());
        assert_eq!(reveal.tick(), None);
    }

    #[test]
    fn test_count_up_fifty_over_a_second() {
        let mut counter = CountUp::new(50, Duration::from_millis(1000));
        assert_eq!(counter.interval(), Duration::from_millis(20));

        let mut frames = Vec::new();
        while let Some(value) = counter.tick() {
            frames.push(value);
        }
        assert_eq!(frames.len(), 50);
        assert_eq!(frames.first(), Some(&1));
        assert_eq!(format!("{}+", counter.current()), "50+");

        // stays put once finished
        assert_eq!(counter.tick(), None);
        assert_eq!(format!("{}+", counter.current()), "50+");
    }

    #[test]
    fn test_count_up_large_target_never_overshoots() {
        let mut counter = CountUp::new(1234, Duration::from_millis(800));
        let mut ticks = 0;
        let mut last = 0;
        while let Some(value) = counter.tick() {
            assert!(value > last);
            assert!(value <= 1234);
            last = value;
            ticks += 1;
        }
        assert_eq!(last, 1234);
        assert!(ticks <= 50);
        assert!(counter.interval() >= MIN_FRAME);
    }

    #[test]
    fn test_count_up_zero_target() {
        let mut counter = CountUp::new(0, Duration::from_millis(500));
        assert!(counter.is_done());
        assert_eq!(counter.tick(), None);
        assert_eq!(counter.current(), 0);
    }
}
