#![no_main]
#![no_std]
use core::{fmt, time::Duration};

use drive_core::{Action, AutonConfig, ConfigError, PortError, TimedDrive};
use vexide::{prelude::*, time::Instant};

use crate::hardware::{Drivetrain, SelectedDrive};

mod hardware;

// Tune these before competing.
const CONFIG: AutonConfig = AutonConfig {
    drive_time: Duration::from_secs(3),
    ..AutonConfig::DEFAULT
};

#[vexide::main]
async fn main(peripherals: Peripherals) {
    let mut dynamic_peripherals = DynamicPeripherals::new(peripherals);
    match Robot::new(&mut dynamic_peripherals, CONFIG) {
        Ok(robot) => robot.compete().await,
        Err(err) => {
            println!("robot init failed, staying idle: {err}");
            loop {
                sleep(Duration::from_secs(1)).await;
            }
        }
    }
}

pub enum InitError {
    Config(ConfigError),
    Port(PortError),
}

impl From<ConfigError> for InitError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<PortError> for InitError {
    fn from(err: PortError) -> Self {
        Self::Port(err)
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid config: {err}"),
            Self::Port(err) => write!(f, "invalid wiring: {err}"),
        }
    }
}

pub struct Robot {
    drivetrain: SelectedDrive,
    config: AutonConfig,
    routine: TimedDrive,
    epoch: Instant,
}

impl Robot {
    fn new(peripherals: &mut DynamicPeripherals, config: AutonConfig) -> Result<Self, InitError> {
        config.validate()?;
        let drivetrain = SelectedDrive::new(peripherals)?;
        println!(
            "robot ready: {:?} motors, drive {:?}",
            hardware::MOTOR_KIND,
            config.drive_time
        );
        Ok(Self {
            drivetrain,
            config,
            routine: TimedDrive::new(config.drive_time),
            epoch: Instant::now(),
        })
    }

    fn now(&self) -> Duration {
        Instant::now().duration_since(self.epoch)
    }
}

impl Compete for Robot {
    async fn disabled(&mut self) {
        self.routine.reset();
        self.drivetrain.brake();
    }

    async fn autonomous(&mut self) {
        self.routine.begin(self.now());
        loop {
            let step = self.routine.poll(self.now());
            match step.action() {
                Action::Drive => {
                    if step.changed {
                        println!("autonomous: driving for {:?}", self.routine.drive_time());
                    }
                    self.drivetrain.drive(&self.config);
                }
                Action::Brake => {
                    println!("autonomous: drive time elapsed, braking");
                    self.drivetrain.stop();
                }
                Action::Hold => {}
            }
            sleep(self.config.tick).await;
        }
    }

    async fn driver(&mut self) {
        self.routine.reset();
        self.drivetrain.stop();
    }
}
