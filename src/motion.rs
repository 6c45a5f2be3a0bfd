//! Entrance transitions for scroll-revealed elements.
//!
//! Everything here is plain data: the browser side only decides *when* an
//! element becomes visible, these types decide *how* it gets there.

/// One-shot visibility latch. Once an element has been seen it stays revealed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        self.revealed |= is_intersecting;
        self.revealed
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Linear delay schedule for a list of siblings, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub base: f64,
    pub step: f64,
}

impl Stagger {
    pub const fn new(base: f64, step: f64) -> Self {
        Self { base, step }
    }

    pub fn delay(&self, index: usize) -> f64 {
        self.base + self.step * index as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    FadeUp,
    FadeDown,
    SlideLeft,
    SlideRight,
    Scale,
    Pop,
    Flip,
    Grow,
}

impl Entrance {
    fn hidden_class(self) -> &'static str {
        match self {
            Self::FadeUp => "opacity-0 translate-y-8",
            Self::FadeDown => "opacity-0 -translate-y-8",
            Self::SlideLeft => "opacity-0 -translate-x-12",
            Self::SlideRight => "opacity-0 translate-x-12",
            Self::Scale => "opacity-0 scale-90",
            Self::Pop => "opacity-0 scale-0",
            Self::Flip => "opacity-0 rotate-y-90",
            Self::Grow => "scale-y-0",
        }
    }

    fn shown_class(self) -> &'static str {
        match self {
            Self::FadeUp | Self::FadeDown | Self::SlideLeft | Self::SlideRight => {
                "opacity-100 translate-x-0 translate-y-0"
            }
            Self::Scale | Self::Pop => "opacity-100 scale-100",
            Self::Flip => "opacity-100 rotate-y-0",
            Self::Grow => "scale-y-100",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub entrance: Entrance,
    /// seconds
    pub duration: f64,
    /// seconds
    pub delay: f64,
}

impl Motion {
    pub const fn new(entrance: Entrance) -> Self {
        Self {
            entrance,
            duration: 0.6,
            delay: 0.0,
        }
    }

    pub const fn duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub const fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn class(&self, visible: bool) -> String {
        let state = if visible {
            self.entrance.shown_class()
        } else {
            self.entrance.hidden_class()
        };
        format!("transition-all ease-out {state}")
    }

    pub fn style(&self) -> String {
        format!(
            "transition-duration: {:.2}s; transition-delay: {:.2}s;",
            self.duration, self.delay
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_is_one_shot() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_stagger_increases() {
        let stagger = Stagger::new(0.3, 0.1);
        let delays = (0..5).map(|i| stagger.delay(i)).collect::<Vec<_>>();
        assert!((delays[0] - 0.3).abs() < f64::EPSILON);
        assert!(delays.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_motion_class_switches_state() {
        let motion = Motion::new(Entrance::FadeUp);
        assert!(motion.class(false).contains("opacity-0"));
        assert!(motion.class(true).contains("opacity-100"));
        assert!(motion.class(true).starts_with("transition-all"));
    }

    #[test]
    fn test_motion_style() {
        let motion = Motion::new(Entrance::Scale).duration(0.5).delay(0.75);
        assert_eq!(
            motion.style(),
            "transition-duration: 0.50s; transition-delay: 0.75s;"
        );
    }
}
