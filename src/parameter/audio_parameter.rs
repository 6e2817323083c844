use std::sync::Arc;

use log::debug;

use crate::{AudioClock, ParameterError, Timestamp};

use super::{AutomationEvent, BlockRenderer, EventTimeline, ParameterValue, ScheduledEvent};

/// The granularity at which a parameter is evaluated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutomationRate {
    /// Evaluate every sample of the block independently (a-rate)
    PerSample,

    /// Evaluate once at the block's start time and hold that value for the
    /// whole block (k-rate)
    PerBlock,
}

/// An automatable scalar parameter of an audio node
///
/// The parameter holds a constant value until automation events are
/// scheduled against it. Each call to [`AudioParameter::tick`] renders one
/// block of values in lockstep with the clock the parameter was constructed
/// with; the host advances that clock by one block between ticks.
pub struct AudioParameter {
    clock: Arc<dyn AudioClock>,
    default_value: f64,
    value: ParameterValue,
    rate: AutomationRate,
    timeline: EventTimeline,
    renderer: BlockRenderer,
}

impl AudioParameter {
    /// Create a parameter holding `default_value` as a constant
    ///
    /// Fails with [`ParameterError::InvalidDefaultValue`] if the default is
    /// not a finite number.
    pub fn new(
        clock: Arc<dyn AudioClock>,
        default_value: f64,
        rate: AutomationRate,
    ) -> Result<Self, ParameterError> {
        if !default_value.is_finite() {
            return Err(ParameterError::InvalidDefaultValue(default_value));
        }

        Ok(Self {
            clock,
            default_value,
            value: ParameterValue::new(default_value),
            rate,
            timeline: EventTimeline::new(),
            renderer: BlockRenderer::new(),
        })
    }

    /// The value the parameter was constructed with
    pub fn default_value(&self) -> f64 {
        self.default_value
    }

    /// The evaluation granularity the parameter was constructed with
    pub fn rate(&self) -> AutomationRate {
        self.rate
    }

    /// The most recently rendered value
    pub fn value(&self) -> f64 {
        self.value.get()
    }

    /// A cloneable handle that observes the parameter's current value
    pub fn value_handle(&self) -> ParameterValue {
        self.value.clone()
    }

    /// The number of scheduled events that have not yet been retired
    pub fn pending_event_count(&self) -> usize {
        self.timeline.len()
    }

    /// Set the value immediately, cancelling all pending automation
    ///
    /// This is the destructive write: the timeline is emptied
    /// unconditionally and the parameter holds `value` as a constant until
    /// something new is scheduled.
    pub fn set_immediate(&mut self, value: f64) {
        debug!(
            "set_immediate({value}) cancelling {} pending event(s)",
            self.timeline.len()
        );

        self.timeline.clear();
        self.value.set(value);
    }

    /// Schedule an instantaneous step to `value` at `time`
    pub fn set_value_at_time(&mut self, value: f64, time: Timestamp) {
        debug!("scheduling step to {value} at {}s", time.as_seconds());

        let (anchor_value, anchor_time) = self.anchor();
        self.timeline.insert(ScheduledEvent::new(
            anchor_value,
            anchor_time,
            AutomationEvent::SetValue { value, time },
        ));
    }

    /// Schedule a linear ramp from the current anchor to `target` at
    /// `end_time`
    pub fn linear_ramp_to_value_at_time(&mut self, target: f64, end_time: Timestamp) {
        debug!(
            "scheduling linear ramp to {target} at {}s",
            end_time.as_seconds()
        );

        let (anchor_value, anchor_time) = self.anchor();
        self.timeline.insert(ScheduledEvent::new(
            anchor_value,
            anchor_time,
            AutomationEvent::LinearRamp { target, end_time },
        ));
    }

    /// Schedule an exponential ramp from the current anchor to `target` at
    /// `end_time`
    ///
    /// Exponential ramps interpolate with a constant ratio per unit time,
    /// so both endpoints must be strictly positive. Fails with
    /// [`ParameterError::InvalidRampTarget`] or
    /// [`ParameterError::InvalidRampStart`] otherwise, leaving the timeline
    /// untouched.
    pub fn exponential_ramp_to_value_at_time(
        &mut self,
        target: f64,
        end_time: Timestamp,
    ) -> Result<(), ParameterError> {
        if target <= 0.0 {
            return Err(ParameterError::InvalidRampTarget(target));
        }

        let (anchor_value, anchor_time) = self.anchor();
        if anchor_value <= 0.0 {
            return Err(ParameterError::InvalidRampStart(anchor_value));
        }

        debug!(
            "scheduling exponential ramp to {target} at {}s",
            end_time.as_seconds()
        );

        self.timeline.insert(ScheduledEvent::new(
            anchor_value,
            anchor_time,
            AutomationEvent::ExponentialRamp { target, end_time },
        ));

        Ok(())
    }

    /// Schedule an exponential approach toward `target` starting at
    /// `start_time`
    ///
    /// The value approaches the target with decay rate `1 / time_constant`
    /// and never reaches it exactly; the event stays current until the
    /// rendered value has converged onto the target (or a later event takes
    /// over), at which point the parameter holds the target as a constant.
    pub fn set_target_at_time(&mut self, target: f64, start_time: Timestamp, time_constant: f64) {
        debug!(
            "scheduling approach toward {target} from {}s with time constant {time_constant}",
            start_time.as_seconds()
        );

        let (anchor_value, anchor_time) = self.anchor();
        self.timeline.insert(ScheduledEvent::new(
            anchor_value,
            anchor_time,
            AutomationEvent::SetTarget {
                target,
                start_time,
                time_constant,
            },
        ));
    }

    /// Schedule nearest-neighbour playback of `values` stretched over
    /// `duration`, starting at `start_time`
    ///
    /// After the duration has elapsed the parameter holds the last curve
    /// point. Fails with [`ParameterError::EmptyCurve`] if `values` is
    /// empty.
    pub fn set_value_curve_at_time(
        &mut self,
        values: Vec<f64>,
        start_time: Timestamp,
        duration: Timestamp,
    ) -> Result<(), ParameterError> {
        if values.is_empty() {
            return Err(ParameterError::EmptyCurve);
        }

        debug!(
            "scheduling {}-point curve over {}s from {}s",
            values.len(),
            duration.as_seconds(),
            start_time.as_seconds()
        );

        let (anchor_value, anchor_time) = self.anchor();
        self.timeline.insert(ScheduledEvent::new(
            anchor_value,
            anchor_time,
            AutomationEvent::SetCurve {
                values,
                start_time,
                duration,
            },
        ));

        Ok(())
    }

    /// Render the block starting at the clock's current time
    ///
    /// Returns [`crate::BLOCK_SIZE`] samples, one per sample period, and
    /// leaves [`AudioParameter::value`] at the last sample of the block.
    /// Rendering never fails: with nothing scheduled the block is constant
    /// at the current value. The clock is not advanced; the host does that
    /// between ticks.
    pub fn tick(&mut self) -> &[f64] {
        let time = self.clock.current_time();
        let sample_rate = self.clock.sample_rate();

        let last_value =
            self.renderer
                .render(&mut self.timeline, self.rate, self.value.get(), time, sample_rate);

        self.value.set(last_value);
        self.renderer.values()
    }

    /// The (value, time) pair the next scheduled event evaluates from
    ///
    /// This is the terminal value and end time of the last pending event,
    /// or the current value at the clock's current time when the timeline
    /// is empty. An open-ended approach has no end time: an event
    /// scheduled behind one anchors on the approach's current value and
    /// the current time, or on the approach's own start if it has not
    /// started yet, so the curve stays continuous when the newcomer takes
    /// over.
    fn anchor(&self) -> (f64, Timestamp) {
        match self.timeline.last() {
            Some(event) => match event.end_time() {
                Some(end_time) => (event.terminal_value(), end_time),
                None => {
                    let now = self.clock.current_time();

                    if now <= event.start_time() {
                        (event.anchor_value, event.start_time())
                    } else {
                        (event.value_at(now), now)
                    }
                }
            },
            None => (self.value.get(), self.clock.current_time()),
        }
    }
}
