use std::f64::consts::TAU;

/// Reshapes linear progress in `[0, 1]` into animation progress.
///
/// Every curve maps `0 -> 0` and `1 -> 1`; overshooting curves may leave the
/// unit interval in between.
#[derive(Debug, Clone, Copy)]
pub enum Easing {
    Linear,
    CubicIn,
    /// Decelerates toward completion.
    CubicOut,
    CubicInOut,
    /// Overshoots and oscillates before settling.
    ElasticOut { amplitude: f64, period: f64 },
    Custom(fn(f64) -> f64),
}

impl Easing {
    pub const DEFAULT_ELASTIC_AMPLITUDE: f64 = 1.0;
    pub const DEFAULT_ELASTIC_PERIOD: f64 = 0.3;

    #[must_use]
    pub const fn elastic_out() -> Self {
        Self::ElasticOut {
            amplitude: Self::DEFAULT_ELASTIC_AMPLITUDE,
            period: Self::DEFAULT_ELASTIC_PERIOD,
        }
    }

    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::CubicIn => t * t * t,
            Self::CubicOut => cubic_out(t),
            Self::CubicInOut => cubic_in_out(t),
            Self::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
            Self::Custom(curve) => curve(t),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::CubicInOut
    }
}

#[must_use]
pub fn cubic_out(t: f64) -> f64 {
    let u = t - 1.0;
    u * u * u + 1.0
}

#[must_use]
pub fn cubic_in_out(t: f64) -> f64 {
    let t = t * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let u = t - 2.0;
        (u * u * u + 2.0) / 2.0
    }
}

/// Elastic ease-out. Amplitudes below one are raised to one.
#[must_use]
pub fn elastic_out(t: f64, amplitude: f64, period: f64) -> f64 {
    let amplitude = amplitude.max(1.0);
    let period = period / TAU;
    let shift = (1.0 / amplitude).asin() * period;
    1.0 - amplitude * decay(t) * ((t + shift) / period).sin()
}

/// `2^(-10t)` rescaled so it is exactly 1 at `t = 0` and 0 at `t = 1`.
fn decay(t: f64) -> f64 {
    (2_f64.powf(-10.0 * t) - 0.000_976_562_5) * 1.000_977_517_106_549_4
}

/// Linear interpolation between `from` and `to`; exact at both ends.
#[must_use]
pub fn interpolate_number(from: f64, to: f64, t: f64) -> f64 {
    from * (1.0 - t) + to * t
}
