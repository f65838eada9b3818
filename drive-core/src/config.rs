use core::{fmt, time::Duration};

/// Shaping applied by the drive base before powers reach the motors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DriveTuning {
    pub deadband: f64,
    pub max_output: f64,
    /// Square tank inputs (sign preserved) for finer control at low power.
    pub square_inputs: bool,
}

impl DriveTuning {
    pub const DEFAULT: Self = Self {
        deadband: 0.02,
        max_output: 1.0,
        square_inputs: true,
    };
}

impl Default for DriveTuning {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TankPower {
    pub left: f64,
    pub right: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CartesianPower {
    pub strafe: f64,
    pub forward: f64,
    pub turn: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AutonConfig {
    pub drive_time: Duration,
    /// Period of the autonomous loop.
    pub tick: Duration,
    pub tank: TankPower,
    pub cartesian: CartesianPower,
    pub tuning: DriveTuning,
}

impl AutonConfig {
    pub const DEFAULT: Self = Self {
        drive_time: Duration::from_secs(3),
        tick: Duration::from_millis(20),
        tank: TankPower {
            left: 0.5,
            right: 0.5,
        },
        cartesian: CartesianPower {
            strafe: 0.0,
            forward: 0.5,
            turn: 0.0,
        },
        tuning: DriveTuning::DEFAULT,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick.is_zero() {
            return Err(ConfigError::ZeroTick);
        }
        check_power("tank.left", self.tank.left)?;
        check_power("tank.right", self.tank.right)?;
        check_power("cartesian.strafe", self.cartesian.strafe)?;
        check_power("cartesian.forward", self.cartesian.forward)?;
        check_power("cartesian.turn", self.cartesian.turn)?;

        let DriveTuning {
            deadband,
            max_output,
            ..
        } = self.tuning;
        if !(0.0..1.0).contains(&deadband) {
            return Err(ConfigError::InvalidDeadband(deadband));
        }
        if !(max_output > 0.0 && max_output <= 1.0) {
            return Err(ConfigError::InvalidMaxOutput(max_output));
        }
        Ok(())
    }
}

impl Default for AutonConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn check_power(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFiniteValue { name });
    }
    if !(-1.0..=1.0).contains(&value) {
        return Err(ConfigError::PowerOutOfRange { name, value });
    }
    Ok(())
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    PowerOutOfRange { name: &'static str, value: f64 },
    NonFiniteValue { name: &'static str },
    ZeroTick,
    InvalidDeadband(f64),
    InvalidMaxOutput(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PowerOutOfRange { name, value } => {
                write!(f, "{name} = {value} is outside [-1, 1]")
            }
            Self::NonFiniteValue { name } => write!(f, "{name} is not a finite number"),
            Self::ZeroTick => f.write_str("loop tick must be non-zero"),
            Self::InvalidDeadband(v) => write!(f, "deadband {v} must be in [0, 1)"),
            Self::InvalidMaxOutput(v) => write!(f, "max output {v} must be in (0, 1]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(AutonConfig::default().validate(), Ok(()));
        assert_eq!(AutonConfig::DEFAULT.drive_time, Duration::from_secs(3));
    }

    #[test]
    fn zero_drive_time_is_allowed() {
        let config = AutonConfig {
            drive_time: Duration::ZERO,
            ..AutonConfig::DEFAULT
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_power() {
        let config = AutonConfig {
            tank: TankPower {
                left: 1.5,
                right: 0.5,
            },
            ..AutonConfig::DEFAULT
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PowerOutOfRange {
                name: "tank.left",
                value: 1.5
            })
        );
    }

    #[test]
    fn rejects_nan_power() {
        let config = AutonConfig {
            cartesian: CartesianPower {
                strafe: 0.0,
                forward: f64::NAN,
                turn: 0.0,
            },
            ..AutonConfig::DEFAULT
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFiniteValue {
                name: "cartesian.forward"
            })
        );
    }

    #[test]
    fn rejects_bad_tuning() {
        let mut config = AutonConfig::DEFAULT;
        config.tick = Duration::ZERO;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTick));

        config.tick = Duration::from_millis(20);
        config.tuning.deadband = 1.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDeadband(1.0)));

        config.tuning.deadband = 0.0;
        config.tuning.max_output = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidMaxOutput(0.0)));
    }

    #[test]
    fn tuning_boundaries() {
        let mut config = AutonConfig::DEFAULT;
        config.tuning.max_output = 1.0;
        assert_eq!(config.validate(), Ok(()));
        config.tuning.max_output = 1.01;
        assert_eq!(config.validate(), Err(ConfigError::InvalidMaxOutput(1.01)));

        config.tuning.max_output = 1.0;
        config.tuning.deadband = -0.1;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDeadband(-0.1)));
        config.tuning.deadband = 0.0;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_infinite_power() {
        let config = AutonConfig {
            tank: TankPower {
                left: 0.5,
                right: f64::NEG_INFINITY,
            },
            ..AutonConfig::DEFAULT
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFiniteValue { name: "tank.right" })
        );
    }

    #[test]
    fn full_power_is_allowed() {
        let config = AutonConfig {
            cartesian: CartesianPower {
                strafe: -1.0,
                forward: 1.0,
                turn: 0.0,
            },
            ..AutonConfig::DEFAULT
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = ConfigError::PowerOutOfRange {
            name: "tank.right",
            value: -2.0,
        };
        assert_eq!(err.to_string(), "tank.right = -2 is outside [-1, 1]");
    }
}
