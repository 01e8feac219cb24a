//! Shot State Machine
//!
//! Tracks aiming and charging of the cue. Press/release signals drive the
//! transitions; the simulation loop only advances the charge.

use glam::Vec2;

/// Shot phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShotPhase {
    #[default]
    Idle,
    Charging,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotAction {
    Press,
    Release,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotTransition {
    pub success: bool,
    pub from: ShotPhase,
    pub to: ShotPhase,
    pub action: ShotAction,
}

/// Aim and charge state of the cue
#[derive(Debug, Clone, Default)]
pub struct ShotState {
    phase: ShotPhase,
    pub aim_angle: f32,        // radians, from the cue ball toward the target
    pub power: f32,            // charge accumulated so far
    pub target: Option<Vec2>,  // last pointer position
}

impl ShotState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ShotPhase {
        self.phase
    }

    pub fn is_charging(&self) -> bool {
        self.phase == ShotPhase::Charging
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: ShotAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition. Entering `Charging` starts from zero power.
    pub fn transition(&mut self, action: ShotAction) -> ShotTransition {
        let from = self.phase;

        match self.next_phase(action) {
            Some(to) => {
                self.phase = to;
                if action == ShotAction::Press {
                    self.power = 0.0;
                }
                ShotTransition {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => ShotTransition {
                success: false,
                from,
                to: from,
                action,
            },
        }
    }

    fn next_phase(&self, action: ShotAction) -> Option<ShotPhase> {
        match (self.phase, action) {
            (ShotPhase::Idle, ShotAction::Press) => Some(ShotPhase::Charging),
            (ShotPhase::Charging, ShotAction::Release) => Some(ShotPhase::Idle),
            _ => None,
        }
    }

    /// Point the cue from `cue_pos` toward the stored pointer target
    pub fn aim_from(&mut self, cue_pos: Vec2) {
        if let Some(target) = self.target {
            let d = target - cue_pos;
            self.aim_angle = d.y.atan2(d.x);
        }
    }

    pub fn aim_at(&mut self, cue_pos: Vec2, target: Vec2) {
        self.target = Some(target);
        self.aim_from(cue_pos);
    }

    /// Add one frame of charge, capped at `max`
    pub fn charge(&mut self, rate: f32, max: f32) {
        if self.is_charging() {
            self.power = (self.power + rate).min(max);
        }
    }

    /// Velocity the cue ball would receive if released now
    pub fn shot_velocity(&self) -> Vec2 {
        Vec2::new(self.aim_angle.cos(), self.aim_angle.sin()) * self.power
    }

    /// Finish charging. Returns the velocity for the cue ball, or `None` if no
    /// charge was in progress.
    pub fn release(&mut self) -> Option<Vec2> {
        if !self.transition(ShotAction::Release).success {
            return None;
        }
        let vel = self.shot_velocity();
        self.power = 0.0;
        Some(vel)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
