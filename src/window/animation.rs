use crate::error::ConfigError;
use crate::window::geometry::{ModeGeometry, WindowRect};
use serde::{Deserialize, Serialize};

const SETTLE_DISTANCE: f32 = 0.5;
const SETTLE_SPEED: f32 = 0.5;
/// Larger frame gaps are split so the integration stays stable after a stall.
const MAX_STEP_SECONDS: f32 = 1.0 / 60.0;

/// Accepted stiffness range. Softer springs crawl for many seconds.
pub const STIFFNESS_RANGE: (f32, f32) = (50.0, 2000.0);
pub const MAX_DAMPING: f32 = 100.0;
/// Damping as a multiple of critical damping (`2 * sqrt(stiffness)`).
pub const DAMPING_RATIO_RANGE: (f32, f32) = (0.3, 2.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringSettings {
    pub stiffness: f32,
    pub damping: f32,
}

impl Default for SpringSettings {
    fn default() -> Self {
        Self {
            stiffness: 260.0,
            damping: 30.0,
        }
    }
}

impl SpringSettings {
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * self.stiffness.sqrt())
    }

    /// Rejects springs that would oscillate or creep instead of settling.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min_k, max_k) = STIFFNESS_RANGE;
        if !(self.stiffness.is_finite() && self.stiffness >= min_k && self.stiffness <= max_k) {
            return Err(ConfigError::invalid(
                "island_settings.spring.stiffness",
                format!("must be between {} and {}", min_k, max_k),
            ));
        }
        if !(self.damping.is_finite() && self.damping > 0.0 && self.damping <= MAX_DAMPING) {
            return Err(ConfigError::invalid(
                "island_settings.spring.damping",
                format!("must be above 0 and at most {}", MAX_DAMPING),
            ));
        }
        let (min_ratio, max_ratio) = DAMPING_RATIO_RANGE;
        let ratio = self.damping_ratio();
        if ratio < min_ratio || ratio > max_ratio {
            return Err(ConfigError::invalid(
                "island_settings.spring.damping",
                format!(
                    "damping ratio {:.2} is outside {}..={}",
                    ratio, min_ratio, max_ratio
                ),
            ));
        }
        Ok(())
    }
}

/// Animated window geometry: position, size and corner radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryFrame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub radius: f32,
}

impl GeometryFrame {
    fn to_array(self) -> [f32; 5] {
        [self.x, self.y, self.width, self.height, self.radius]
    }

    fn from_array(values: [f32; 5]) -> Self {
        Self {
            x: values[0],
            y: values[1],
            width: values[2],
            height: values[3],
            radius: values[4],
        }
    }

    pub fn rect(&self) -> WindowRect {
        WindowRect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

impl From<ModeGeometry> for GeometryFrame {
    fn from(geometry: ModeGeometry) -> Self {
        Self {
            x: geometry.rect.x,
            y: geometry.rect.y,
            width: geometry.rect.width,
            height: geometry.rect.height,
            radius: geometry.corner_radius,
        }
    }
}

/// Damped spring toward a target frame.
///
/// `retarget` keeps the current position and velocity, so a new request
/// mid-flight bends the motion instead of restarting it.
#[derive(Debug, Clone)]
pub struct SpringAnimator {
    settings: SpringSettings,
    current: [f32; 5],
    velocity: [f32; 5],
    target: [f32; 5],
    settled: bool,
}

impl SpringAnimator {
    pub fn new(settings: SpringSettings, initial: GeometryFrame) -> Self {
        let values = initial.to_array();
        Self {
            settings,
            current: values,
            velocity: [0.0; 5],
            target: values,
            settled: true,
        }
    }

    pub fn current(&self) -> GeometryFrame {
        GeometryFrame::from_array(self.current)
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn retarget(&mut self, target: GeometryFrame) {
        let target = target.to_array();
        if target == self.target && self.settled {
            return;
        }
        self.target = target;
        self.settled = false;
    }

    /// Jumps straight to `target`, dropping any motion.
    pub fn snap_to(&mut self, target: GeometryFrame) {
        self.target = target.to_array();
        self.current = self.target;
        self.velocity = [0.0; 5];
        self.settled = true;
    }

    /// Advances by `dt` seconds and returns the new frame.
    pub fn step(&mut self, dt: f32) -> GeometryFrame {
        if self.settled || !(dt > 0.0) || !dt.is_finite() {
            return self.current();
        }

        let mut remaining = dt;
        while remaining > 0.0 && !self.settled {
            let h = remaining.min(MAX_STEP_SECONDS);
            remaining -= h;
            self.integrate(h);
        }
        self.current()
    }

    fn integrate(&mut self, h: f32) {
        let SpringSettings { stiffness, damping } = self.settings;
        let mut at_rest = true;

        for i in 0..5 {
            let displacement = self.current[i] - self.target[i];
            let acceleration = -stiffness * displacement - damping * self.velocity[i];
            self.velocity[i] += acceleration * h;
            self.current[i] += self.velocity[i] * h;

            let near = (self.current[i] - self.target[i]).abs() < SETTLE_DISTANCE;
            let slow = self.velocity[i].abs() < SETTLE_SPEED;
            if !(near && slow) {
                at_rest = false;
            }
        }

        // Width, height and radius must never go negative mid-flight.
        for i in 2..5 {
            if self.current[i] < 0.0 {
                self.current[i] = 0.0;
                self.velocity[i] = self.velocity[i].max(0.0);
            }
        }

        if at_rest {
            self.current = self.target;
            self.velocity = [0.0; 5];
            self.settled = true;
        }
    }
}
