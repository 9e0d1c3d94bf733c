//! Spring physics
//!
//! A damped spring converging a scalar toward a retargetable rest value.
//! Springs have no fixed duration; they are settled once both position and
//! velocity fall inside the configured rest thresholds. Retargeting a
//! live spring keeps its velocity, so interrupted motion stays continuous.

/// Spring curve parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Spring constant; higher pulls harder toward the target
    pub stiffness: f32,
    /// Damping coefficient; higher kills oscillation sooner
    pub damping: f32,
    /// Mass of the animated value
    pub mass: f32,
    /// Velocity imparted when a transition starts (px/s)
    pub velocity: f32,
    /// Position threshold for settling (px)
    pub rest_distance: f32,
    /// Velocity threshold for settling (px/s)
    pub rest_velocity: f32,
}

impl SpringConfig {
    /// Balanced preset; settles without visible overshoot
    pub fn standard() -> Self {
        Self {
            stiffness: 170.0,
            damping: 26.0,
            mass: 1.0,
            velocity: 0.0,
            rest_distance: 0.1,
            rest_velocity: 0.1,
        }
    }

    /// Soft entrance, slight overshoot
    pub fn gentle() -> Self {
        Self {
            stiffness: 120.0,
            damping: 14.0,
            ..Self::standard()
        }
    }

    /// Fast, no bounce
    pub fn stiff() -> Self {
        Self {
            stiffness: 210.0,
            damping: 29.0,
            ..Self::standard()
        }
    }

    /// Quick with a small bounce
    pub fn snappy() -> Self {
        Self {
            stiffness: 260.0,
            damping: 20.0,
            ..Self::standard()
        }
    }

    /// Pronounced oscillation
    pub fn wobbly() -> Self {
        Self {
            stiffness: 180.0,
            damping: 12.0,
            ..Self::standard()
        }
    }

    /// Set the initial velocity (px/s)
    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// A spring-driven scalar
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Create a spring at rest at `initial`
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    /// Current position
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current velocity (px/s)
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Current rest target
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget the spring; velocity is preserved
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Override the current velocity (px/s)
    pub fn set_velocity(&mut self, velocity: f32) {
        self.velocity = velocity;
    }

    /// Whether position and velocity are both inside the rest thresholds
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.config.rest_distance
            && self.velocity.abs() < self.config.rest_velocity
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        // RK4 in substeps of at most 8 ms; a single large step diverges
        // for stiff configurations.
        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(0.008);
            self.integrate(h);
            remaining -= h;
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    /// Acceleration of the damped oscillator at (position, velocity)
    fn acceleration(&self, x: f32, v: f32) -> f32 {
        (-self.config.stiffness * (x - self.target) - self.config.damping * v) / self.config.mass
    }

    /// One RK4 step of the (position, velocity) system
    fn integrate(&mut self, h: f32) {
        let (x, v) = (self.value, self.velocity);

        let k1_x = v;
        let k1_v = self.acceleration(x, v);

        let k2_x = v + k1_v * h * 0.5;
        let k2_v = self.acceleration(x + k1_x * h * 0.5, v + k1_v * h * 0.5);

        let k3_x = v + k2_v * h * 0.5;
        let k3_v = self.acceleration(x + k2_x * h * 0.5, v + k2_v * h * 0.5);

        let k4_x = v + k3_v * h;
        let k4_v = self.acceleration(x + k3_x * h, v + k3_v * h);

        self.value = x + (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * h / 6.0;
        self.velocity = v + (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * h / 6.0;
    }
}
