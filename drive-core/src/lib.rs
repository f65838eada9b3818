#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod kinematics;
pub mod motor;
pub mod routine;

pub use config::{AutonConfig, CartesianPower, ConfigError, DriveTuning, TankPower};
pub use kinematics::{MecanumOutput, TankOutput};
pub use motor::{Cartridge, MotorKind, MotorSpec, PortError};
pub use routine::{Action, Phase, Step, TimedDrive};
