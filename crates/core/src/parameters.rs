use crate::ConfigurationError;

/// Physical constants of a waterwheel.
///
/// Values are in the imperial units of the classic demonstration: feet, slugs
/// and seconds. Every field must be finite and strictly positive, which is
/// checked when a [`WheelSimulation`] is built from these parameters.
///
/// [`WheelSimulation`]: crate::WheelSimulation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Parameters {
    /// Distance from the axle to each bucket (ft).
    pub radius: f64,

    /// Moment of inertia of the empty wheel (slug·ft²).
    pub wheel_inertia: f64,

    /// Viscous damping opposing rotation (ft·lbf per rad/s).
    pub damping: f64,

    /// Gravitational acceleration (ft/s²).
    pub gravity: f64,

    /// Largest mass a single bucket can hold (slug).
    pub bucket_capacity: f64,

    /// Fraction of its mass each bucket loses per second (1/s).
    pub drain_rate: f64,

    /// Peak rate at which the source fills a bucket (slug/s).
    pub fill_rate: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            radius: 1.0,
            wheel_inertia: 0.1,
            damping: 2.5,
            gravity: 10.7,
            bucket_capacity: 1.0,
            drain_rate: 0.3,
            fill_rate: 0.33,
        }
    }
}

impl Parameters {
    /// Checks that every parameter is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidParameter`] naming the first
    /// offending field.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let fields = [
            ("radius", self.radius),
            ("wheel_inertia", self.wheel_inertia),
            ("damping", self.damping),
            ("gravity", self.gravity),
            ("bucket_capacity", self.bucket_capacity),
            ("drain_rate", self.drain_rate),
            ("fill_rate", self.fill_rate),
        ];

        match fields
            .into_iter()
            .find(|&(_, value)| !(value.is_finite() && value > 0.0))
        {
            Some((name, value)) => Err(ConfigurationError::InvalidParameter { name, value }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(Parameters::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_negative_and_non_finite() {
        let zero_radius = Parameters {
            radius: 0.0,
            ..Parameters::default()
        };
        assert!(matches!(
            zero_radius.validate(),
            Err(ConfigurationError::InvalidParameter { name: "radius", .. })
        ));

        let negative_damping = Parameters {
            damping: -2.5,
            ..Parameters::default()
        };
        assert!(matches!(
            negative_damping.validate(),
            Err(ConfigurationError::InvalidParameter { name: "damping", .. })
        ));

        let nan_fill = Parameters {
            fill_rate: f64::NAN,
            ..Parameters::default()
        };
        assert!(matches!(
            nan_fill.validate(),
            Err(ConfigurationError::InvalidParameter { name: "fill_rate", .. })
        ));
    }

    #[test]
    fn reports_first_invalid_field() {
        let params = Parameters {
            gravity: f64::INFINITY,
            drain_rate: 0.0,
            ..Parameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigurationError::InvalidParameter { name: "gravity", .. })
        ));
    }
}
