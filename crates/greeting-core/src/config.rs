//! Tuning for every effect and the timeline, grouped per module.
//!
//! `ShowConfig::default()` reproduces the stock presentation; tests build
//! smaller variants (fewer stars, shorter intro) through the public fields.

use crate::constants::*;
use crate::error::ConfigError;
use std::ops::Range;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineConfig {
    pub intro: Duration,
    pub burst_delay: Duration,
    pub shake: Duration,
    pub final_delay: Duration,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            intro: Duration::from_millis(INTRO_DURATION_MS),
            burst_delay: Duration::from_millis(SURPRISE_BURST_DELAY_MS),
            shake: Duration::from_millis(SHAKE_DURATION_MS),
            final_delay: Duration::from_millis(SURPRISE_FINAL_DELAY_MS),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldConfig {
    pub count: usize,
    pub radius: Range<f32>,
    pub opacity: Range<f32>,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            radius: STAR_RADIUS_MIN..STAR_RADIUS_MAX,
            opacity: STAR_OPACITY_MIN..STAR_OPACITY_MAX,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FireworksConfig {
    pub burst: usize,
    pub speed_max: f32,
    pub life: i32,
    pub particle_size: f32,
}

impl Default for FireworksConfig {
    fn default() -> Self {
        Self {
            burst: BURST_PARTICLES,
            speed_max: PARTICLE_SPEED_MAX,
            life: PARTICLE_LIFE,
            particle_size: PARTICLE_SIZE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StreakConfig {
    pub count: usize,
    pub speed: Range<f32>,
    pub length: Range<f32>,
    pub line_width: f32,
    pub lifetime: Duration,
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            count: STREAK_COUNT,
            speed: STREAK_SPEED_MIN..STREAK_SPEED_MAX,
            length: STREAK_LENGTH_MIN..STREAK_LENGTH_MAX,
            line_width: STREAK_LINE_WIDTH,
            lifetime: Duration::from_millis(STREAK_LIFETIME_MS),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeartConfig {
    pub interval: Duration,
    pub animation: Duration,
    pub removal_grace: Duration,
    pub size_px: Range<f32>,
}

impl HeartConfig {
    /// Time from creation until the heart's node is removed.
    pub fn lifetime(&self) -> Duration {
        self.animation + self.removal_grace
    }
}

impl Default for HeartConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(HEART_INTERVAL_MS),
            animation: Duration::from_millis(HEART_ANIMATION_MS),
            removal_grace: Duration::from_millis(HEART_REMOVAL_GRACE_MS),
            size_px: HEART_SIZE_MIN_PX..HEART_SIZE_MAX_PX,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShowConfig {
    pub timeline: TimelineConfig,
    pub starfield: StarfieldConfig,
    pub fireworks: FireworksConfig,
    pub streaks: StreakConfig,
    pub hearts: HeartConfig,
    pub photo_count: usize,
    pub carousel_interval: Duration,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            timeline: TimelineConfig::default(),
            starfield: StarfieldConfig::default(),
            fireworks: FireworksConfig::default(),
            streaks: StreakConfig::default(),
            hearts: HeartConfig::default(),
            photo_count: PHOTO_COUNT,
            carousel_interval: Duration::from_millis(CAROUSEL_INTERVAL_MS),
        }
    }
}

fn non_empty(name: &'static str, r: &Range<f32>) -> Result<(), ConfigError> {
    if r.start < r.end {
        Ok(())
    } else {
        Err(ConfigError::EmptyRange {
            name,
            min: r.start,
            max: r.end,
        })
    }
}

fn non_zero(name: &'static str, d: Duration) -> Result<(), ConfigError> {
    if d.is_zero() {
        Err(ConfigError::Zero(name))
    } else {
        Ok(())
    }
}

impl ShowConfig {
    /// Reject values the effects cannot run with: empty sampling ranges
    /// (`gen_range` would panic) and zero intervals (spawn loops would spin).
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_empty("starfield.radius", &self.starfield.radius)?;
        non_empty("starfield.opacity", &self.starfield.opacity)?;
        non_empty("streaks.speed", &self.streaks.speed)?;
        non_empty("streaks.length", &self.streaks.length)?;
        non_empty("hearts.size_px", &self.hearts.size_px)?;
        if self.starfield.count == 0 {
            return Err(ConfigError::Zero("starfield.count"));
        }
        if self.streaks.count == 0 {
            return Err(ConfigError::Zero("streaks.count"));
        }
        if self.fireworks.burst == 0 {
            return Err(ConfigError::Zero("fireworks.burst"));
        }
        if self.fireworks.speed_max <= 0.0 {
            return Err(ConfigError::Zero("fireworks.speed_max"));
        }
        if self.fireworks.life <= 0 {
            return Err(ConfigError::Zero("fireworks.life"));
        }
        if self.photo_count == 0 {
            return Err(ConfigError::Zero("photo_count"));
        }
        non_zero("hearts.interval", self.hearts.interval)?;
        non_zero("carousel_interval", self.carousel_interval)?;
        non_zero("streaks.lifetime", self.streaks.lifetime)?;
        if self.timeline.final_delay < self.timeline.burst_delay {
            return Err(ConfigError::RevealBeforeBurst {
                burst_ms: self.timeline.burst_delay.as_millis() as u64,
                final_ms: self.timeline.final_delay.as_millis() as u64,
            });
        }
        Ok(())
    }
}
