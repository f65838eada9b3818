use core::fmt;

/// V5 motor gear cartridge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cartridge {
    /// 100 rpm
    Red,
    /// 200 rpm
    Green,
    /// 600 rpm
    Blue,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MotorKind {
    V5(Cartridge),
    Exp,
}

impl MotorKind {
    pub const V5_MAX_VOLTAGE: f64 = 12.0;
    pub const EXP_MAX_VOLTAGE: f64 = 8.0;

    pub const fn max_voltage(self) -> f64 {
        match self {
            Self::V5(_) => Self::V5_MAX_VOLTAGE,
            Self::Exp => Self::EXP_MAX_VOLTAGE,
        }
    }

    /// Maps a normalized power to a motor voltage.
    pub fn voltage_for(self, power: f64) -> f64 {
        if power.is_nan() {
            return 0.0;
        }
        power.clamp(-1.0, 1.0) * self.max_voltage()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MotorSpec {
    pub port: u8,
    pub kind: MotorKind,
    pub inverted: bool,
}

impl MotorSpec {
    pub const MIN_PORT: u8 = 1;
    pub const MAX_PORT: u8 = 21;

    pub const fn new(port: u8, kind: MotorKind, inverted: bool) -> Self {
        Self {
            port,
            kind,
            inverted,
        }
    }

    pub fn validate(&self) -> Result<(), PortError> {
        if (Self::MIN_PORT..=Self::MAX_PORT).contains(&self.port) {
            Ok(())
        } else {
            Err(PortError::OutOfRange(self.port))
        }
    }
}

/// Checks every spec and makes sure no two motors share a port.
pub fn validate_ports(specs: &[MotorSpec]) -> Result<(), PortError> {
    for (i, spec) in specs.iter().enumerate() {
        spec.validate()?;
        if specs[..i].iter().any(|other| other.port == spec.port) {
            return Err(PortError::Duplicate(spec.port));
        }
    }
    Ok(())
}

pub const LEFT_INVERTED: bool = true;
pub const RIGHT_INVERTED: bool = false;

pub const LEFT_PORT: u8 = 1;
pub const RIGHT_PORT: u8 = 2;

pub const FRONT_LEFT_PORT: u8 = 1;
pub const REAR_LEFT_PORT: u8 = 2;
pub const FRONT_RIGHT_PORT: u8 = 3;
pub const REAR_RIGHT_PORT: u8 = 4;

/// Left and right motors of a differential drive.
pub const fn differential_specs(kind: MotorKind) -> [MotorSpec; 2] {
    [
        MotorSpec::new(LEFT_PORT, kind, LEFT_INVERTED),
        MotorSpec::new(RIGHT_PORT, kind, RIGHT_INVERTED),
    ]
}

/// Front-left, rear-left, front-right and rear-right motors of a mecanum drive.
pub const fn mecanum_specs(kind: MotorKind) -> [MotorSpec; 4] {
    [
        MotorSpec::new(FRONT_LEFT_PORT, kind, LEFT_INVERTED),
        MotorSpec::new(REAR_LEFT_PORT, kind, LEFT_INVERTED),
        MotorSpec::new(FRONT_RIGHT_PORT, kind, RIGHT_INVERTED),
        MotorSpec::new(REAR_RIGHT_PORT, kind, RIGHT_INVERTED),
    ]
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PortError {
    OutOfRange(u8),
    Duplicate(u8),
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(port) => write!(f, "smart port {port} does not exist"),
            Self::Duplicate(port) => write!(f, "smart port {port} is assigned twice"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn voltage_scales_with_motor_kind() {
        assert_relative_eq!(MotorKind::V5(Cartridge::Green).voltage_for(0.5), 6.0);
        assert_relative_eq!(MotorKind::Exp.voltage_for(0.5), 4.0);
        assert_relative_eq!(MotorKind::V5(Cartridge::Blue).voltage_for(-2.0), -12.0);
        assert_eq!(MotorKind::Exp.voltage_for(f64::NAN), 0.0);
    }

    #[test]
    fn port_bounds() {
        let kind = MotorKind::V5(Cartridge::Red);
        assert_eq!(MotorSpec::new(1, kind, false).validate(), Ok(()));
        assert_eq!(MotorSpec::new(21, kind, true).validate(), Ok(()));
        assert_eq!(
            MotorSpec::new(0, kind, false).validate(),
            Err(PortError::OutOfRange(0))
        );
        assert_eq!(
            MotorSpec::new(22, kind, false).validate(),
            Err(PortError::OutOfRange(22))
        );
    }

    #[test]
    fn duplicate_ports_are_rejected() {
        let kind = MotorKind::Exp;
        let specs = [
            MotorSpec::new(1, kind, true),
            MotorSpec::new(2, kind, true),
            MotorSpec::new(1, kind, false),
        ];
        assert_eq!(validate_ports(&specs), Err(PortError::Duplicate(1)));
        assert_eq!(validate_ports(&specs[..2]), Ok(()));
    }

    #[test]
    fn differential_layout() {
        let kind = MotorKind::V5(Cartridge::Blue);
        let [left, right] = differential_specs(kind);
        assert_eq!(left, MotorSpec::new(1, kind, true));
        assert_eq!(right, MotorSpec::new(2, kind, false));
        assert_eq!(validate_ports(&differential_specs(kind)), Ok(()));
    }

    #[test]
    fn mecanum_layout() {
        let specs = mecanum_specs(MotorKind::Exp);
        let ports: Vec<u8> = specs.iter().map(|s| s.port).collect();
        let inverted: Vec<bool> = specs.iter().map(|s| s.inverted).collect();
        assert_eq!(ports, [1, 2, 3, 4]);
        // front-left, rear-left, front-right, rear-right
        assert_eq!(inverted, [true, true, false, false]);
        assert!(specs.iter().all(|s| s.kind == MotorKind::Exp));
        assert_eq!(validate_ports(&specs), Ok(()));
    }
}
