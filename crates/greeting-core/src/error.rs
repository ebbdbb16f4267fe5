use thiserror::Error;

/// Failure to acquire a drawing surface for an effect.
///
/// Effects treat this as "do not start": the host logs it and carries on
/// without the effect.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EffectError {
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("canvas `{0}` has no 2d context")]
    NoContext(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name}: range {min}..{max} is empty")]
    EmptyRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
    #[error("final reveal ({final_ms} ms) must not precede the burst ({burst_ms} ms)")]
    RevealBeforeBurst { burst_ms: u64, final_ms: u64 },
}
