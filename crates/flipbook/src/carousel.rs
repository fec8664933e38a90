//! Landing-page specialties carousel.

pub const AUTO_ADVANCE_MS: u64 = 4000;
/// Below this viewport width each slide fills the track.
pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const DESKTOP_SLIDE_PX: f64 = 350.0;
pub const SLIDE_GAP_PX: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
        self.current
    }

    /// CSS `transform` for the slide track at the current position.
    pub fn track_transform(&self, viewport_width: f64) -> String {
        let step = if viewport_width < MOBILE_BREAKPOINT {
            "(100% + 24px)".to_string()
        } else {
            format!("({DESKTOP_SLIDE_PX}px + {SLIDE_GAP_PX}px)")
        };
        format!("translateX(calc(-{} * {step}))", self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut c = Carousel::new(6);
        assert_eq!(c.prev(), 5);
        assert_eq!(c.next(), 0);
        for _ in 0..7 {
            c.next();
        }
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_empty_stays_put() {
        let mut c = Carousel::new(0);
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 0);
        assert!(c.is_empty());
    }

    #[test]
    fn test_transform() {
        let mut c = Carousel::new(6);
        c.next();
        c.next();
        assert_eq!(c.track_transform(1280.0), "translateX(calc(-2 * (350px + 24px)))");
        assert_eq!(c.track_transform(400.0), "translateX(calc(-2 * (100% + 24px)))");
    }
}
