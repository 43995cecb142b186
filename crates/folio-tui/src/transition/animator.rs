//! Slide animation for a carousel track
//!
//! The core hands out a target offset percent; this animator eases the
//! rendered offset toward it so the track slides instead of jumping.

use std::time::{Duration, Instant};

use folio_core::TransitionConfig;

use super::easing::EasingTypeExt;

#[derive(Debug, Clone, Copy)]
struct Slide {
    start: Instant,
    from: f64,
    to: f64,
}

/// Eased track offset for one carousel
#[derive(Debug, Clone)]
pub struct OffsetAnimator {
    config: TransitionConfig,
    slide: Option<Slide>,
    current: f64,
}

impl Default for OffsetAnimator {
    fn default() -> Self {
        Self::new(TransitionConfig::default())
    }
}

impl OffsetAnimator {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            slide: None,
            current: 0.0,
        }
    }

    fn is_smooth(&self) -> bool {
        self.config.enabled && self.config.duration_ms > 0
    }

    fn duration(&self) -> Duration {
        Duration::from_millis(self.config.duration_ms)
    }

    /// Frame interval while a slide is running
    pub fn tick_duration(&self) -> Duration {
        if self.config.animation_fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(1000 / u64::from(self.config.animation_fps))
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.slide.is_some()
    }

    /// Offset currently drawn
    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Offset the track is heading to
    pub fn target(&self) -> f64 {
        self.slide.map(|s| s.to).unwrap_or(self.current)
    }

    /// Place the track immediately (no animation)
    pub fn jump_to(&mut self, offset: f64) {
        self.slide = None;
        self.current = offset;
    }

    /// Start sliding from the drawn position toward `offset`
    pub fn slide_to(&mut self, offset: f64) {
        self.slide_to_at(offset, Instant::now());
    }

    pub fn slide_to_at(&mut self, offset: f64, now: Instant) {
        if !self.is_smooth() {
            self.jump_to(offset);
            return;
        }
        if (self.target() - offset).abs() < f64::EPSILON {
            return;
        }
        if (self.current - offset).abs() < f64::EPSILON {
            self.slide = None;
            return;
        }
        self.slide = Some(Slide {
            start: now,
            from: self.current,
            to: offset,
        });
    }

    /// Advance the slide and return the offset to draw
    pub fn update(&mut self) -> f64 {
        self.update_at(Instant::now())
    }

    pub fn update_at(&mut self, now: Instant) -> f64 {
        if let Some(slide) = self.slide {
            let elapsed = now.saturating_duration_since(slide.start);
            if elapsed >= self.duration() {
                self.current = slide.to;
                self.slide = None;
            } else {
                let t = elapsed.as_secs_f64() / self.duration().as_secs_f64();
                let eased = self.config.easing.apply(t);
                self.current = slide.from + (slide.to - slide.from) * eased;
            }
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::EasingType;

    fn config(duration_ms: u64) -> TransitionConfig {
        TransitionConfig {
            enabled: true,
            duration_ms,
            easing: EasingType::Linear,
            animation_fps: 50,
        }
    }

    #[test]
    fn test_disabled_jumps() {
        let mut animator = OffsetAnimator::new(TransitionConfig {
            enabled: false,
            ..config(200)
        });
        animator.slide_to(50.0);
        assert!(!animator.is_animating());
        assert_eq!(animator.current(), 50.0);
    }

    #[test]
    fn test_linear_midpoint_and_finish() {
        let mut animator = OffsetAnimator::new(config(200));
        let start = Instant::now();
        animator.slide_to_at(100.0, start);
        assert!(animator.is_animating());
        assert_eq!(animator.target(), 100.0);

        let mid = animator.update_at(start + Duration::from_millis(100));
        assert!((mid - 50.0).abs() < 1e-6);

        let end = animator.update_at(start + Duration::from_millis(250));
        assert_eq!(end, 100.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_retarget_starts_from_drawn_position() {
        let mut animator = OffsetAnimator::new(config(200));
        let start = Instant::now();
        animator.slide_to_at(100.0, start);
        animator.update_at(start + Duration::from_millis(100));

        let later = start + Duration::from_millis(100);
        animator.slide_to_at(0.0, later);
        let mid = animator.update_at(later + Duration::from_millis(100));
        assert!((mid - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_same_target_is_noop() {
        let mut animator = OffsetAnimator::new(config(200));
        animator.slide_to(0.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_tick_duration() {
        assert_eq!(OffsetAnimator::new(config(200)).tick_duration(), Duration::from_millis(20));
        let zero_fps = TransitionConfig { animation_fps: 0, ..config(200) };
        assert_eq!(OffsetAnimator::new(zero_fps).tick_duration(), Duration::from_millis(16));
    }
}
