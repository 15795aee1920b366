use crate::camera::CameraPose;
use crate::constants::ANIMATION_DURATION_SEC;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorPhase {
    Idle,
    Animating,
}

/// Linear camera transition between two poses over a fixed duration.
///
/// `retarget` always starts from the pose last produced by `tick`, so a new
/// click during a transition continues from wherever the camera is.
#[derive(Clone, Debug)]
pub struct CameraAnimator {
    from: CameraPose,
    to: CameraPose,
    current: CameraPose,
    elapsed: f32,
    duration: f32,
    active: bool,
}

impl CameraAnimator {
    pub fn new(initial: CameraPose, duration: f32) -> Self {
        let duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
        Self {
            from: initial,
            to: initial,
            current: initial,
            elapsed: 0.0,
            duration,
            active: false,
        }
    }

    pub fn retarget(&mut self, destination: CameraPose) {
        self.from = self.current;
        self.to = destination;
        self.elapsed = 0.0;
        self.active = true;
        log::debug!(
            "[camera] retarget pos=({:.2},{:.2},{:.2}) target=({:.2},{:.2},{:.2})",
            destination.position.x,
            destination.position.y,
            destination.position.z,
            destination.target.x,
            destination.target.y,
            destination.target.z
        );
    }

    /// Advance by `dt_sec` and return the camera pose for this frame.
    pub fn tick(&mut self, dt_sec: f32) -> CameraPose {
        if !self.active {
            return self.current;
        }
        let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        self.elapsed = (self.elapsed + dt).min(self.duration);
        let t = self.factor();
        self.current = self.from.lerp(self.to, t);
        if t >= 1.0 {
            self.current = self.to;
            self.active = false;
        }
        self.current
    }

    /// Interpolation factor in [0,1].
    pub fn factor(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn phase(&self) -> AnimatorPhase {
        if self.active {
            AnimatorPhase::Animating
        } else {
            AnimatorPhase::Idle
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn current(&self) -> CameraPose {
        self.current
    }

    pub fn source(&self) -> CameraPose {
        self.from
    }

    pub fn destination(&self) -> CameraPose {
        self.to
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}

impl Default for CameraAnimator {
    fn default() -> Self {
        Self::new(CameraPose::DEFAULT, ANIMATION_DURATION_SEC)
    }
}
