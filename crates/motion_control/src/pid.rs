/// Velocity-loop PID controller for a single drive axis.
///
/// Gains and the loop time step are fixed at construction. The error history
/// (`integral`, `prev_error`) accumulates for the lifetime of the instance;
/// a clean state requires constructing a new controller.
#[derive(Debug)]
pub struct PidController {
    kp: f64,
    ki: f64,
    kd: f64,
    dt: f64,
    integral: f64,
    prev_error: f64,
}

impl PidController {
    /// `dt` is the fixed interval, in seconds, at which the caller drives
    /// the loop. A zero `dt` makes the derivative term divide by zero.
    pub fn new(kp: f64, ki: f64, kd: f64, dt: f64) -> Self {
        Self {
            kp,
            ki,
            kd,
            dt,
            integral: 0.0,
            prev_error: 0.0,
        }
    }

    /// Computes the commanded velocity for one control cycle and commits
    /// the cycle's error to the controller state.
    pub fn compute_vel(&mut self, target_vel: f64, current_vel: f64) -> f64 {
        let error = target_vel - current_vel;

        self.integral += error * self.dt;

        // Derivative uses the error from the previous cycle before the
        // current one is committed.
        let derivative = (error - self.prev_error) / self.dt;
        self.prev_error = error;

        (self.kp * error) + (self.ki * self.integral) + (self.kd * derivative)
    }
}
