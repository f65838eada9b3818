//! Compile-time selection of drive geometry and motor hardware.
//!
//! Geometry comes from the `differential` / `mecanum` features and the motor
//! type from one of `v5-red`, `v5-green`, `v5-blue` or `exp`.

use drive_core::{
    AutonConfig, Cartridge, MotorKind, MotorSpec, PortError, kinematics,
    motor::{self, validate_ports},
};
use vexide::prelude::*;

#[cfg(all(feature = "differential", feature = "mecanum"))]
compile_error!("enable only one drive geometry: `differential` or `mecanum`");
#[cfg(not(any(feature = "differential", feature = "mecanum")))]
compile_error!("enable a drive geometry: `differential` or `mecanum`");

#[cfg(any(
    all(feature = "v5-red", any(feature = "v5-green", feature = "v5-blue", feature = "exp")),
    all(feature = "v5-green", any(feature = "v5-blue", feature = "exp")),
    all(feature = "v5-blue", feature = "exp"),
))]
compile_error!("enable only one motor type (use --no-default-features to replace `v5-green`)");
#[cfg(not(any(feature = "v5-red", feature = "v5-green", feature = "v5-blue", feature = "exp")))]
compile_error!("enable a motor type: `v5-red`, `v5-green`, `v5-blue` or `exp`");

#[cfg(feature = "v5-red")]
pub const MOTOR_KIND: MotorKind = MotorKind::V5(Cartridge::Red);
#[cfg(feature = "v5-green")]
pub const MOTOR_KIND: MotorKind = MotorKind::V5(Cartridge::Green);
#[cfg(feature = "v5-blue")]
pub const MOTOR_KIND: MotorKind = MotorKind::V5(Cartridge::Blue);
#[cfg(feature = "exp")]
pub const MOTOR_KIND: MotorKind = MotorKind::Exp;

#[cfg(feature = "differential")]
pub type SelectedDrive = DifferentialDrive;
#[cfg(feature = "mecanum")]
pub type SelectedDrive = MecanumDrive;

pub trait Drivetrain {
    /// Applies the configured autonomous power.
    fn drive(&mut self, config: &AutonConfig);
    /// Commands zero power, then holds position with the motor brakes.
    fn stop(&mut self) {
        self.coast();
        self.brake();
    }
    /// Commands zero power.
    fn coast(&mut self);
    /// Engages the motor brakes.
    fn brake(&mut self);
}

/// A motor plus the bookkeeping needed to report faults without flooding the
/// terminal every tick.
pub struct SmartMotor {
    motor: Motor,
    spec: MotorSpec,
    faulted: bool,
}

impl SmartMotor {
    pub fn new(peripherals: &mut DynamicPeripherals, spec: MotorSpec) -> Self {
        let port = peripherals
            .take_smart_port(spec.port)
            .expect("smart port already taken");
        let direction = if spec.inverted {
            Direction::Reverse
        } else {
            Direction::Forward
        };
        let motor = match spec.kind {
            MotorKind::V5(cartridge) => Motor::new(port, gearset(cartridge), direction),
            MotorKind::Exp => Motor::new_exp(port, direction),
        };
        Self {
            motor,
            spec,
            faulted: false,
        }
    }

    pub fn set_power(&mut self, power: f64) {
        let result = self.motor.set_voltage(self.spec.kind.voltage_for(power));
        self.track(result);
    }

    pub fn brake(&mut self) {
        let result = self.motor.brake(BrakeMode::Brake);
        self.track(result);
    }

    fn track<E: core::fmt::Debug>(&mut self, result: Result<(), E>) {
        match result {
            Err(err) if !self.faulted => {
                println!("motor on port {}: {:?}", self.spec.port, err);
                self.faulted = true;
            }
            Ok(()) if self.faulted => {
                println!("motor on port {}: recovered", self.spec.port);
                self.faulted = false;
            }
            _ => {}
        }
    }
}

fn gearset(cartridge: Cartridge) -> Gearset {
    match cartridge {
        Cartridge::Red => Gearset::Red,
        Cartridge::Green => Gearset::Green,
        Cartridge::Blue => Gearset::Blue,
    }
}

#[cfg(feature = "differential")]
pub struct DifferentialDrive {
    left: SmartMotor,
    right: SmartMotor,
}

#[cfg(feature = "differential")]
impl DifferentialDrive {
    pub fn new(peripherals: &mut DynamicPeripherals) -> Result<Self, PortError> {
        let specs = motor::differential_specs(MOTOR_KIND);
        validate_ports(&specs)?;
        let [left, right] = specs;
        Ok(Self {
            left: SmartMotor::new(peripherals, left),
            right: SmartMotor::new(peripherals, right),
        })
    }

    fn tank(&mut self, output: kinematics::TankOutput) {
        self.left.set_power(output.left);
        self.right.set_power(output.right);
    }
}

#[cfg(feature = "differential")]
impl Drivetrain for DifferentialDrive {
    fn drive(&mut self, config: &AutonConfig) {
        let output = kinematics::tank(config.tank.left, config.tank.right, &config.tuning);
        self.tank(output);
    }

    fn coast(&mut self) {
        self.tank(kinematics::TankOutput::STOPPED);
    }

    fn brake(&mut self) {
        self.left.brake();
        self.right.brake();
    }
}

#[cfg(feature = "mecanum")]
pub struct MecanumDrive {
    front_left: SmartMotor,
    rear_left: SmartMotor,
    front_right: SmartMotor,
    rear_right: SmartMotor,
}

#[cfg(feature = "mecanum")]
impl MecanumDrive {
    pub fn new(peripherals: &mut DynamicPeripherals) -> Result<Self, PortError> {
        let specs = motor::mecanum_specs(MOTOR_KIND);
        validate_ports(&specs)?;
        let [front_left, rear_left, front_right, rear_right] = specs;
        Ok(Self {
            front_left: SmartMotor::new(peripherals, front_left),
            rear_left: SmartMotor::new(peripherals, rear_left),
            front_right: SmartMotor::new(peripherals, front_right),
            rear_right: SmartMotor::new(peripherals, rear_right),
        })
    }

    fn wheels(&mut self, output: kinematics::MecanumOutput) {
        self.front_left.set_power(output.front_left);
        self.rear_left.set_power(output.rear_left);
        self.front_right.set_power(output.front_right);
        self.rear_right.set_power(output.rear_right);
    }
}

#[cfg(feature = "mecanum")]
impl Drivetrain for MecanumDrive {
    fn drive(&mut self, config: &AutonConfig) {
        let power = config.cartesian;
        let output = kinematics::cartesian(power.strafe, power.forward, power.turn, &config.tuning);
        self.wheels(output);
    }

    fn coast(&mut self) {
        self.wheels(kinematics::MecanumOutput::STOPPED);
    }

    fn brake(&mut self) {
        for motor in [
            &mut self.front_left,
            &mut self.rear_left,
            &mut self.front_right,
            &mut self.rear_right,
        ] {
            motor.brake();
        }
    }
}
