use std::sync::atomic::Ordering;
use std::sync::Arc;

use atomic_float::AtomicF64;

/// A cloneable handle onto a parameter's current value
///
/// The handle reads the value the parameter most recently rendered, so a
/// host can observe a parameter (for metering, UI feedback and so on)
/// without borrowing it.
#[derive(Clone)]
pub struct ParameterValue {
    value: Arc<AtomicF64>,
}

impl ParameterValue {
    pub(crate) fn new(initial_value: f64) -> Self {
        Self {
            value: Arc::new(AtomicF64::new(initial_value)),
        }
    }

    /// Read the current value
    pub fn get(&self) -> f64 {
        self.value.load(Ordering::Acquire)
    }

    pub(crate) fn set(&self, value: f64) {
        self.value.store(value, Ordering::Release);
    }
}
