//! The six standard easing curves and their assembled interpolators.
//!
//! Each curve pairs with a type alias over [`EasingInterpolator`] so the
//! common cases read as plain constructors, e.g.
//! [`EasingPowerInterpolator::new`]. Curve parameters are validated by their
//! setters, and deserialization funnels through the same setters so a
//! round-tripped curve is always a valid one.

use std::f64::consts::PI;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::InterpolationError;
use crate::interpolation::easing::{EasingFunction, EasingInterpolator, EasingMode};
use crate::Result;

/// Power curve: `t^power`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerEasing {
    power: f32,
}

impl PowerEasing {
    /// Create the curve with the default power, 2.0.
    pub fn new() -> Self {
        Self { power: 2.0 }
    }

    /// Get the value of power. The default value is 2.0.
    pub fn power(&self) -> f32 {
        self.power
    }

    /// Set the value of power. Fails if the value is less than 0.
    pub fn set_power(&mut self, power: f32) -> Result<()> {
        if power < 0.0 {
            return Err(InterpolationError::invalid_argument("power", "less than 0"));
        }
        self.power = power;
        Ok(())
    }
}

impl Default for PowerEasing {
    fn default() -> Self {
        Self::new()
    }
}

impl EasingFunction for PowerEasing {
    fn name(&self) -> &str {
        "power"
    }

    fn ease(&self, time_ratio: f32) -> f32 {
        f64::from(time_ratio).powf(f64::from(self.power)) as f32
    }
}

impl<'de> Deserialize<'de> for PowerEasing {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            power: f32,
        }

        let raw = Raw::deserialize(deserializer)?;
        let mut easing = PowerEasing::new();
        easing.set_power(raw.power).map_err(de::Error::custom)?;
        Ok(easing)
    }
}

/// [`EasingInterpolator`] over the power curve.
pub type EasingPowerInterpolator = EasingInterpolator<PowerEasing>;

impl EasingPowerInterpolator {
    /// Create a power interpolator with the default easing mode.
    pub fn new() -> Self {
        Self::with_function(PowerEasing::new())
    }

    /// Create a power interpolator with an explicit easing mode.
    pub fn with_mode(easing_mode: EasingMode) -> Self {
        Self::with_function_and_mode(PowerEasing::new(), easing_mode)
    }

    /// Get the value of power. The default value is 2.0.
    pub fn power(&self) -> f32 {
        self.function().power()
    }

    /// Set the value of power. Fails if the value is less than 0.
    pub fn set_power(&mut self, power: f32) -> Result<()> {
        self.function_mut().set_power(power)
    }
}

/// Exponential curve: `(e^(exponent·t) - 1) / (e^exponent - 1)`, or the
/// identity when `exponent` is 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExponentialEasing {
    exponent: f32,
}

impl ExponentialEasing {
    /// Create the curve with the default exponent, 2.0.
    pub fn new() -> Self {
        Self { exponent: 2.0 }
    }

    /// Get the value of exponent. The default value is 2.0.
    pub fn exponent(&self) -> f32 {
        self.exponent
    }

    /// Set the value of exponent. Any value is accepted; 0 degenerates to
    /// the identity curve.
    pub fn set_exponent(&mut self, exponent: f32) {
        self.exponent = exponent;
    }
}

impl Default for ExponentialEasing {
    fn default() -> Self {
        Self::new()
    }
}

impl EasingFunction for ExponentialEasing {
    fn name(&self) -> &str {
        "exponential"
    }

    fn ease(&self, time_ratio: f32) -> f32 {
        if self.exponent == 0.0 {
            return time_ratio;
        }
        let rise = f64::from(self.exponent * time_ratio).exp() - 1.0;
        let span = f64::from(self.exponent).exp() - 1.0;
        (rise / span) as f32
    }
}

/// [`EasingInterpolator`] over the exponential curve.
pub type EasingExponentialInterpolator = EasingInterpolator<ExponentialEasing>;

impl EasingExponentialInterpolator {
    /// Create an exponential interpolator with the default easing mode.
    pub fn new() -> Self {
        Self::with_function(ExponentialEasing::new())
    }

    /// Create an exponential interpolator with an explicit easing mode.
    pub fn with_mode(easing_mode: EasingMode) -> Self {
        Self::with_function_and_mode(ExponentialEasing::new(), easing_mode)
    }

    /// Get the value of exponent. The default value is 2.0.
    pub fn exponent(&self) -> f32 {
        self.function().exponent()
    }

    /// Set the value of exponent.
    pub fn set_exponent(&mut self, exponent: f32) {
        self.function_mut().set_exponent(exponent);
    }
}

/// Sine curve: `1 - sin(1 - t)·π/2`.
///
/// Note that this curve does not map 0 to 0 (its value at 0 is
/// `1 - sin(1)·π/2`, about -0.32), so eased output can overshoot the
/// `from`..`to` range near the start of the timespan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SineEasing;

impl EasingFunction for SineEasing {
    fn name(&self) -> &str {
        "sine"
    }

    fn ease(&self, time_ratio: f32) -> f32 {
        (1.0 - f64::from(1.0 - time_ratio).sin() * PI / 2.0) as f32
    }
}

/// [`EasingInterpolator`] over the sine curve.
pub type EasingSineInterpolator = EasingInterpolator<SineEasing>;

impl EasingSineInterpolator {
    /// Create a sine interpolator with the default easing mode.
    pub fn new() -> Self {
        Self::with_function(SineEasing)
    }

    /// Create a sine interpolator with an explicit easing mode.
    pub fn with_mode(easing_mode: EasingMode) -> Self {
        Self::with_function_and_mode(SineEasing, easing_mode)
    }
}

/// Back curve: `t³ - t·amplitude·sin(t·π)`, dipping below 0 before rising.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackEasing {
    amplitude: f32,
}

impl BackEasing {
    /// Create the curve with the default amplitude, 1.0.
    pub fn new() -> Self {
        Self { amplitude: 1.0 }
    }

    /// Get the value of amplitude. The default value is 1.0.
    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    /// Set the value of amplitude. Fails if the value is less than 0.
    pub fn set_amplitude(&mut self, amplitude: f32) -> Result<()> {
        if amplitude < 0.0 {
            return Err(InterpolationError::invalid_argument(
                "amplitude",
                "less than 0",
            ));
        }
        self.amplitude = amplitude;
        Ok(())
    }
}

impl Default for BackEasing {
    fn default() -> Self {
        Self::new()
    }
}

impl EasingFunction for BackEasing {
    fn name(&self) -> &str {
        "back"
    }

    fn ease(&self, time_ratio: f32) -> f32 {
        let cubed = time_ratio * time_ratio * time_ratio;
        let swing = time_ratio * self.amplitude;
        (f64::from(cubed) - f64::from(swing) * (f64::from(time_ratio) * PI).sin()) as f32
    }
}

impl<'de> Deserialize<'de> for BackEasing {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            amplitude: f32,
        }

        let raw = Raw::deserialize(deserializer)?;
        let mut easing = BackEasing::new();
        easing.set_amplitude(raw.amplitude).map_err(de::Error::custom)?;
        Ok(easing)
    }
}

/// [`EasingInterpolator`] over the back curve.
pub type EasingBackInterpolator = EasingInterpolator<BackEasing>;

impl EasingBackInterpolator {
    /// Create a back interpolator with the default easing mode.
    pub fn new() -> Self {
        Self::with_function(BackEasing::new())
    }

    /// Create a back interpolator with an explicit easing mode.
    pub fn with_mode(easing_mode: EasingMode) -> Self {
        Self::with_function_and_mode(BackEasing::new(), easing_mode)
    }

    /// Get the value of amplitude. The default value is 1.0.
    pub fn amplitude(&self) -> f32 {
        self.function().amplitude()
    }

    /// Set the value of amplitude. Fails if the value is less than 0.
    pub fn set_amplitude(&mut self, amplitude: f32) -> Result<()> {
        self.function_mut().set_amplitude(amplitude)
    }
}

/// Bounce curve: a closed-form cascade of `bounce_count` parabolic bounces,
/// each `bounciness` times smaller than the one before.
///
/// The cascade takes the log of `1 - t·q` (`q` grows with both parameters),
/// so past `t = 1/q` it leaves the log's domain and yields NaN. With the
/// default parameters that boundary sits near `t = 0.087`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BounceEasing {
    bounce_count: u32,
    bounciness: f32,
}

impl BounceEasing {
    /// Create the curve with the defaults: 3 bounces, bounciness 2.0.
    pub fn new() -> Self {
        Self {
            bounce_count: 3,
            bounciness: 2.0,
        }
    }

    /// Get the count of bounces. The default value is 3.
    pub fn bounce_count(&self) -> u32 {
        self.bounce_count
    }

    /// Set the count of bounces. Fails if the value is less than 1.
    pub fn set_bounce_count(&mut self, bounce_count: u32) -> Result<()> {
        if bounce_count < 1 {
            return Err(InterpolationError::invalid_argument(
                "bounce_count",
                "less than 1",
            ));
        }
        self.bounce_count = bounce_count;
        Ok(())
    }

    /// Get the value of bounciness. The default value is 2.0.
    pub fn bounciness(&self) -> f32 {
        self.bounciness
    }

    /// Set the value of bounciness. Fails if the value is less than 1.
    pub fn set_bounciness(&mut self, bounciness: f32) -> Result<()> {
        if bounciness < 1.0 {
            return Err(InterpolationError::invalid_argument(
                "bounciness",
                "less than 1",
            ));
        }
        self.bounciness = bounciness;
        Ok(())
    }
}

impl Default for BounceEasing {
    fn default() -> Self {
        Self::new()
    }
}

impl EasingFunction for BounceEasing {
    fn name(&self) -> &str {
        "bounce"
    }

    fn ease(&self, time_ratio: f32) -> f32 {
        // A bounciness of exactly 1 would put a log base of 1 below.
        let b1: f64 = if self.bounciness == 1.0 {
            1.001
        } else {
            f64::from(self.bounciness)
        };
        let b2 = 1.0 - b1;
        let count = f64::from(self.bounce_count);

        let p = 1.0 - b1.powf(count);
        let q = ((1.0 - p) / b2 + p * 0.5) * b2;
        let f = ((-f64::from(time_ratio) * q + 1.0).ln() / b1.ln()).floor();
        let s = (1.0 - b1.powf(f)) / q;
        let e = (1.0 - b1.powf(f + 1.0)) / q;
        let m = (s + e) * 0.5;
        let r = m - s;
        let d = f64::from(time_ratio) - m;
        let a = (1.0 / b1).powf(count - f);

        ((-a / (r * r)) * (d - r) * (d + r)) as f32
    }
}

impl<'de> Deserialize<'de> for BounceEasing {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            bounce_count: u32,
            bounciness: f32,
        }

        let raw = Raw::deserialize(deserializer)?;
        let mut easing = BounceEasing::new();
        easing.set_bounce_count(raw.bounce_count).map_err(de::Error::custom)?;
        easing.set_bounciness(raw.bounciness).map_err(de::Error::custom)?;
        Ok(easing)
    }
}

/// [`EasingInterpolator`] over the bounce curve.
pub type EasingBounceInterpolator = EasingInterpolator<BounceEasing>;

impl EasingBounceInterpolator {
    /// Create a bounce interpolator with the default easing mode.
    pub fn new() -> Self {
        Self::with_function(BounceEasing::new())
    }

    /// Create a bounce interpolator with an explicit easing mode.
    pub fn with_mode(easing_mode: EasingMode) -> Self {
        Self::with_function_and_mode(BounceEasing::new(), easing_mode)
    }

    /// Get the count of bounces. The default value is 3.
    pub fn bounce_count(&self) -> u32 {
        self.function().bounce_count()
    }

    /// Set the count of bounces. Fails if the value is less than 1.
    pub fn set_bounce_count(&mut self, bounce_count: u32) -> Result<()> {
        self.function_mut().set_bounce_count(bounce_count)
    }

    /// Get the value of bounciness. The default value is 2.0.
    pub fn bounciness(&self) -> f32 {
        self.function().bounciness()
    }

    /// Set the value of bounciness. Fails if the value is less than 1.
    pub fn set_bounciness(&mut self, bounciness: f32) -> Result<()> {
        self.function_mut().set_bounciness(bounciness)
    }
}

/// Elastic curve: `(e^(springiness·t) - 1) / (e^springiness - 1)`, or the
/// identity when `springiness` is 0.
///
/// `oscillation_count` is stored and round-tripped but the formula above
/// does not consume it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElasticEasing {
    oscillation_count: u32,
    springiness: f32,
}

impl ElasticEasing {
    /// Create the curve with the defaults: 3 oscillations, springiness 3.0.
    pub fn new() -> Self {
        Self {
            oscillation_count: 3,
            springiness: 3.0,
        }
    }

    /// Get the count of oscillations. The default value is 3.
    pub fn oscillation_count(&self) -> u32 {
        self.oscillation_count
    }

    /// Set the count of oscillations.
    pub fn set_oscillation_count(&mut self, oscillation_count: u32) {
        self.oscillation_count = oscillation_count;
    }

    /// Get the value of springiness. The default value is 3.0.
    pub fn springiness(&self) -> f32 {
        self.springiness
    }

    /// Set the value of springiness. Fails if the value is less than 0.
    pub fn set_springiness(&mut self, springiness: f32) -> Result<()> {
        if springiness < 0.0 {
            return Err(InterpolationError::invalid_argument(
                "springiness",
                "less than 0",
            ));
        }
        self.springiness = springiness;
        Ok(())
    }
}

impl Default for ElasticEasing {
    fn default() -> Self {
        Self::new()
    }
}

impl EasingFunction for ElasticEasing {
    fn name(&self) -> &str {
        "elastic"
    }

    fn ease(&self, time_ratio: f32) -> f32 {
        if self.springiness == 0.0 {
            return time_ratio;
        }
        let rise = f64::from(self.springiness * time_ratio).exp() - 1.0;
        let span = f64::from(self.springiness).exp() - 1.0;
        (rise / span) as f32
    }
}

impl<'de> Deserialize<'de> for ElasticEasing {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            oscillation_count: u32,
            springiness: f32,
        }

        let raw = Raw::deserialize(deserializer)?;
        let mut easing = ElasticEasing::new();
        easing.set_oscillation_count(raw.oscillation_count);
        easing.set_springiness(raw.springiness).map_err(de::Error::custom)?;
        Ok(easing)
    }
}

/// [`EasingInterpolator`] over the elastic curve.
pub type EasingElasticInterpolator = EasingInterpolator<ElasticEasing>;

impl EasingElasticInterpolator {
    /// Create an elastic interpolator with the default easing mode.
    pub fn new() -> Self {
        Self::with_function(ElasticEasing::new())
    }

    /// Create an elastic interpolator with an explicit easing mode.
    pub fn with_mode(easing_mode: EasingMode) -> Self {
        Self::with_function_and_mode(ElasticEasing::new(), easing_mode)
    }

    /// Get the count of oscillations. The default value is 3.
    pub fn oscillation_count(&self) -> u32 {
        self.function().oscillation_count()
    }

    /// Set the count of oscillations.
    pub fn set_oscillation_count(&mut self, oscillation_count: u32) {
        self.function_mut().set_oscillation_count(oscillation_count);
    }

    /// Get the value of springiness. The default value is 3.0.
    pub fn springiness(&self) -> f32 {
        self.function().springiness()
    }

    /// Set the value of springiness. Fails if the value is less than 0.
    pub fn set_springiness(&mut self, springiness: f32) -> Result<()> {
        self.function_mut().set_springiness(springiness)
    }
}
