pub const DEFAULT_TASK_NAME: &str = "task";

/// One task's three-point estimate.
///
/// Lines are values: the `with_*` updaters return a modified copy and leave
/// the receiver untouched. Any combination of numbers is accepted; lines
/// that violate `0 < optimistic <= nominal <= pessimistic` simply report no
/// statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateLine {
    pub task_name: String,
    pub optimistic: f64,
    pub nominal: f64,
    pub pessimistic: f64,
}

impl EstimateLine {
    pub fn new(task_name: impl Into<String>, optimistic: f64, nominal: f64, pessimistic: f64) -> Self {
        Self {
            task_name: task_name.into(),
            optimistic,
            nominal,
            pessimistic,
        }
    }

    pub fn create_default() -> Self {
        Self::new(DEFAULT_TASK_NAME, 1.0, 1.0, 1.0)
    }

    pub fn is_valid(&self) -> bool {
        0.0 < self.optimistic && self.optimistic <= self.nominal && self.nominal <= self.pessimistic
    }

    /// PERT expected value, `(O + 4N + P) / 6`.
    pub fn mu(&self) -> Option<f64> {
        if !self.is_valid() {
            return None;
        }
        Some((self.optimistic + 4.0 * self.nominal + self.pessimistic) / 6.0)
    }

    /// PERT standard deviation, `(P - O) / 6`.
    pub fn sigma(&self) -> Option<f64> {
        if !self.is_valid() {
            return None;
        }
        Some((self.pessimistic - self.optimistic) / 6.0)
    }

    pub fn with_task_name(&self, task_name: impl Into<String>) -> Self {
        Self {
            task_name: task_name.into(),
            ..self.clone()
        }
    }

    pub fn with_optimistic(&self, optimistic: f64) -> Self {
        Self {
            optimistic,
            ..self.clone()
        }
    }

    pub fn with_nominal(&self, nominal: f64) -> Self {
        Self {
            nominal,
            ..self.clone()
        }
    }

    pub fn with_pessimistic(&self, pessimistic: f64) -> Self {
        Self {
            pessimistic,
            ..self.clone()
        }
    }
}

impl Default for EstimateLine {
    fn default() -> Self {
        Self::create_default()
    }
}
