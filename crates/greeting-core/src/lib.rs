//! Platform-free engine for the animated greeting: effect pools and their
//! step functions, the phase timeline, the heart spawner and the shared
//! viewport. The web crate drives all of it from animation frames.

pub mod assets;
pub mod audio;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod effect;
pub mod error;
pub mod fireworks;
pub mod hearts;
pub mod phase;
pub mod show;
pub mod starfield;
pub mod streaks;
pub mod surface;
pub mod timeline;
pub mod viewport;

pub use assets::{photo_set, PhotoSource};
pub use audio::{AudioGate, Playback};
pub use carousel::Carousel;
pub use config::*;
pub use effect::{Effect, EffectLoop, LoopState, SharedLoop};
pub use error::{ConfigError, EffectError};
pub use fireworks::{Fireworks, Particle};
pub use hearts::{Heart, HeartEvent, HeartId, HeartSpawner};
pub use phase::{Cue, Phase, PhaseState, Sequencer};
pub use show::{Show, ShowUpdate};
pub use starfield::{Star, Starfield};
pub use streaks::{Streak, StreakField};
pub use surface::{DrawOp, Extent, Hsla, RecordingSurface, Surface};
pub use timeline::{Timeline, TimerId};
pub use viewport::{fit_to_viewport, Subscription, Viewport};
