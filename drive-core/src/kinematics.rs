//! Drive-base mixing for the two supported geometries.
//!
//! All inputs and outputs are normalized powers in `[-1, 1]`. Sign conventions
//! are left to the per-motor inversion flags.

use crate::config::DriveTuning;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TankOutput {
    pub left: f64,
    pub right: f64,
}

impl TankOutput {
    pub const STOPPED: Self = Self {
        left: 0.0,
        right: 0.0,
    };
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MecanumOutput {
    pub front_left: f64,
    pub front_right: f64,
    pub rear_left: f64,
    pub rear_right: f64,
}

impl MecanumOutput {
    pub const STOPPED: Self = Self {
        front_left: 0.0,
        front_right: 0.0,
        rear_left: 0.0,
        rear_right: 0.0,
    };
}

/// Zero inside `[-deadband, deadband]`, rescaled so the output still spans the
/// full range outside of it.
pub fn apply_deadband(value: f64, deadband: f64) -> f64 {
    if value.abs() <= deadband {
        0.0
    } else if value > 0.0 {
        (value - deadband) / (1.0 - deadband)
    } else {
        (value + deadband) / (1.0 - deadband)
    }
}

fn limit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

pub fn tank(left: f64, right: f64, tuning: &DriveTuning) -> TankOutput {
    let mut left = apply_deadband(limit(left), tuning.deadband);
    let mut right = apply_deadband(limit(right), tuning.deadband);

    if tuning.square_inputs {
        left *= left.abs();
        right *= right.abs();
    }

    TankOutput {
        left: left * tuning.max_output,
        right: right * tuning.max_output,
    }
}

/// Robot-relative cartesian drive: positive strafe is right, positive forward
/// is away from the driver, positive turn is clockwise.
pub fn cartesian(strafe: f64, forward: f64, turn: f64, tuning: &DriveTuning) -> MecanumOutput {
    let strafe = apply_deadband(limit(strafe), tuning.deadband);
    let forward = apply_deadband(limit(forward), tuning.deadband);
    let turn = limit(turn);

    let mut wheels = [
        strafe + forward + turn,
        -strafe + forward - turn,
        -strafe + forward + turn,
        strafe + forward - turn,
    ];
    normalize(&mut wheels);

    let [front_left, front_right, rear_left, rear_right] =
        wheels.map(|w| w * tuning.max_output);
    MecanumOutput {
        front_left,
        front_right,
        rear_left,
        rear_right,
    }
}

// scale down so that no wheel exceeds full power
fn normalize(wheels: &mut [f64]) {
    let max = wheels.iter().fold(0.0_f64, |acc, w| acc.max(w.abs()));
    if max > 1.0 {
        for w in wheels.iter_mut() {
            *w /= max;
        }
    }
}
