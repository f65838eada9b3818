use core::time::Duration;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Driving,
    Stopped,
}

/// What the drivetrain should do on a given tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Drive,
    /// Zero power and hold with the motor brakes.
    Brake,
    /// Already braked; leave the motors alone.
    Hold,
}

/// Result of one periodic evaluation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub phase: Phase,
    /// First tick spent in `phase`.
    pub changed: bool,
}

impl Step {
    pub const fn action(&self) -> Action {
        match (self.phase, self.changed) {
            (Phase::Driving, _) => Action::Drive,
            (Phase::Stopped, true) => Action::Brake,
            (Phase::Stopped, false) => Action::Hold,
        }
    }
}

/// Drives for a fixed window starting at [`TimedDrive::begin`], then stops.
///
/// Timestamps are measured from any fixed epoch; only differences matter.
#[derive(Clone, Debug)]
pub struct TimedDrive {
    drive_time: Duration,
    stop_at: Option<Duration>,
    last: Option<Phase>,
}

impl TimedDrive {
    pub const fn new(drive_time: Duration) -> Self {
        Self {
            drive_time,
            stop_at: None,
            last: None,
        }
    }

    pub const fn drive_time(&self) -> Duration {
        self.drive_time
    }

    pub fn begin(&mut self, now: Duration) {
        self.stop_at = Some(now.saturating_add(self.drive_time));
        self.last = None;
    }

    pub fn reset(&mut self) {
        self.stop_at = None;
        self.last = None;
    }

    pub fn phase(&self, now: Duration) -> Phase {
        match self.stop_at {
            Some(stop_at) if now < stop_at => Phase::Driving,
            _ => Phase::Stopped,
        }
    }

    pub fn remaining(&self, now: Duration) -> Duration {
        self.stop_at
            .map_or(Duration::ZERO, |stop_at| stop_at.saturating_sub(now))
    }

    pub fn poll(&mut self, now: Duration) -> Step {
        let phase = self.phase(now);
        let changed = self.last != Some(phase);
        self.last = Some(phase);
        Step { phase, changed }
    }
}
