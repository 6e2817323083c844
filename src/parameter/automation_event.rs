use crate::Timestamp;

/// The closed set of automation curves a parameter can follow
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum AutomationEvent {
    SetValue {
        value: f64,
        time: Timestamp,
    },
    LinearRamp {
        target: f64,
        end_time: Timestamp,
    },
    ExponentialRamp {
        target: f64,
        end_time: Timestamp,
    },
    SetTarget {
        target: f64,
        start_time: Timestamp,
        time_constant: f64,
    },
    SetCurve {
        values: Vec<f64>,
        start_time: Timestamp,
        duration: Timestamp,
    },
}

/// An automation event together with the anchor it evaluates from
///
/// The anchor is the (value, time) pair in effect when the event was
/// scheduled: the terminal value and end time of the event before it on the
/// timeline, or the parameter's value and the clock time when nothing was
/// pending. Ramps interpolate from the anchor; the exponential approach
/// starts from the anchor value at its own start time.
#[derive(Clone, Debug)]
pub(crate) struct ScheduledEvent {
    pub anchor_value: f64,
    pub anchor_time: Timestamp,
    pub event: AutomationEvent,
}

impl ScheduledEvent {
    pub fn new(anchor_value: f64, anchor_time: Timestamp, event: AutomationEvent) -> Self {
        Self {
            anchor_value,
            anchor_time,
            event,
        }
    }

    /// The instant this event starts governing the parameter
    ///
    /// Ramps govern from their anchor time; the other variants carry an
    /// explicit time of their own.
    pub fn start_time(&self) -> Timestamp {
        match &self.event {
            AutomationEvent::SetValue { time, .. } => *time,
            AutomationEvent::LinearRamp { .. } | AutomationEvent::ExponentialRamp { .. } => {
                self.anchor_time
            }
            AutomationEvent::SetTarget { start_time, .. } => *start_time,
            AutomationEvent::SetCurve { start_time, .. } => *start_time,
        }
    }

    /// The instant after which this event is finished, or `None` for the
    /// open-ended exponential approach
    pub fn end_time(&self) -> Option<Timestamp> {
        match &self.event {
            AutomationEvent::SetValue { time, .. } => Some(*time),
            AutomationEvent::LinearRamp { end_time, .. }
            | AutomationEvent::ExponentialRamp { end_time, .. } => Some(*end_time),
            AutomationEvent::SetTarget { .. } => None,
            AutomationEvent::SetCurve {
                start_time,
                duration,
                ..
            } => Some(*start_time + *duration),
        }
    }

    /// The constant the parameter holds once this event has finished
    pub fn terminal_value(&self) -> f64 {
        match &self.event {
            AutomationEvent::SetValue { value, .. } => *value,
            AutomationEvent::LinearRamp { target, .. }
            | AutomationEvent::ExponentialRamp { target, .. }
            | AutomationEvent::SetTarget { target, .. } => *target,
            AutomationEvent::SetCurve { values, .. } => values[values.len() - 1],
        }
    }

    /// Evaluate the event's curve at a point in time
    ///
    /// Times outside the event's span clamp to the nearest endpoint, so the
    /// result never overshoots the approached target.
    pub fn value_at(&self, time: Timestamp) -> f64 {
        match &self.event {
            AutomationEvent::SetValue { value, .. } => *value,

            AutomationEvent::LinearRamp { target, end_time } => {
                if time >= *end_time {
                    return *target;
                }

                if time <= self.anchor_time {
                    return self.anchor_value;
                }

                let phase =
                    (time - self.anchor_time).as_seconds() / (*end_time - self.anchor_time).as_seconds();
                let value = self.anchor_value + (*target - self.anchor_value) * phase;
                clamp_to_target(value, self.anchor_value, *target)
            }

            AutomationEvent::ExponentialRamp { target, end_time } => {
                if time >= *end_time {
                    return *target;
                }

                if time <= self.anchor_time {
                    return self.anchor_value;
                }

                let phase =
                    (time - self.anchor_time).as_seconds() / (*end_time - self.anchor_time).as_seconds();
                let value = self.anchor_value * (*target / self.anchor_value).powf(phase);
                clamp_to_target(value, self.anchor_value, *target)
            }

            AutomationEvent::SetTarget {
                target,
                start_time,
                time_constant,
            } => {
                if time <= *start_time {
                    return self.anchor_value;
                }

                // a non-positive time constant degenerates to a jump
                if *time_constant <= 0.0 {
                    return *target;
                }

                let elapsed = (time - *start_time).as_seconds();
                target + (self.anchor_value - target) * (-elapsed / time_constant).exp()
            }

            AutomationEvent::SetCurve {
                values,
                start_time,
                duration,
            } => {
                if time <= *start_time {
                    return values[0];
                }

                if time >= *start_time + *duration {
                    return values[values.len() - 1];
                }

                let fraction = (time - *start_time).as_seconds() / duration.as_seconds();
                let position = fraction * (values.len() - 1) as f64;
                let index = (position.round() as usize).min(values.len() - 1);
                values[index]
            }
        }
    }
}

/// Cap a value at the target on the side it is approached from
pub(crate) fn clamp_to_target(value: f64, start: f64, target: f64) -> f64 {
    if target >= start {
        value.min(target)
    } else {
        value.max(target)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn anchored(anchor_value: f64, anchor_seconds: f64, event: AutomationEvent) -> ScheduledEvent {
        ScheduledEvent::new(anchor_value, Timestamp::from_seconds(anchor_seconds), event)
    }

    #[test]
    fn linear_ramp_interpolates_from_the_anchor() {
        let ramp = anchored(
            1.0,
            1.0,
            AutomationEvent::LinearRamp {
                target: 3.0,
                end_time: Timestamp::from_seconds(3.0),
            },
        );

        assert_relative_eq!(ramp.value_at(Timestamp::from_seconds(0.5)), 1.0);
        assert_relative_eq!(ramp.value_at(Timestamp::from_seconds(1.0)), 1.0);
        assert_relative_eq!(ramp.value_at(Timestamp::from_seconds(2.0)), 2.0);
        assert_relative_eq!(ramp.value_at(Timestamp::from_seconds(3.0)), 3.0);
        assert_relative_eq!(ramp.value_at(Timestamp::from_seconds(4.0)), 3.0);
    }

    #[test]
    fn exponential_ramp_interpolates_geometrically() {
        let ramp = anchored(
            2.0,
            0.0,
            AutomationEvent::ExponentialRamp {
                target: 8.0,
                end_time: Timestamp::from_seconds(1.0),
            },
        );

        // halfway through a 2 -> 8 ramp is the geometric mean, 4
        assert_relative_eq!(ramp.value_at(Timestamp::from_seconds(0.5)), 4.0, epsilon = 1e-9);
        assert_relative_eq!(ramp.value_at(Timestamp::from_seconds(1.0)), 8.0);
    }

    #[test]
    fn set_target_decays_toward_the_target() {
        let time_constant = 0.5;
        let event = anchored(
            1.0,
            0.0,
            AutomationEvent::SetTarget {
                target: 2.0,
                start_time: Timestamp::from_seconds(1.0),
                time_constant,
            },
        );

        assert_relative_eq!(event.value_at(Timestamp::from_seconds(0.5)), 1.0);

        let expected = 2.0 + (1.0 - 2.0) * (-1.0_f64 / time_constant).exp();
        assert_relative_eq!(
            event.value_at(Timestamp::from_seconds(2.0)),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn set_target_with_zero_time_constant_jumps() {
        let event = anchored(
            1.0,
            0.0,
            AutomationEvent::SetTarget {
                target: 5.0,
                start_time: Timestamp::from_seconds(1.0),
                time_constant: 0.0,
            },
        );

        assert_relative_eq!(event.value_at(Timestamp::from_seconds(1.5)), 5.0);
    }

    #[test]
    fn curve_uses_nearest_neighbour_lookup() {
        let event = anchored(
            0.0,
            0.0,
            AutomationEvent::SetCurve {
                values: vec![1.0, 2.0, 3.0, 4.0, 5.0],
                start_time: Timestamp::zero(),
                duration: Timestamp::from_seconds(1.0),
            },
        );

        // five points over one second: runs change at 0.125, 0.375, 0.625
        // and 0.875, so the first and last runs are half width
        assert_relative_eq!(event.value_at(Timestamp::from_seconds(0.0)), 1.0);
        assert_relative_eq!(event.value_at(Timestamp::from_seconds(0.12)), 1.0);
        assert_relative_eq!(event.value_at(Timestamp::from_seconds(0.13)), 2.0);
        assert_relative_eq!(event.value_at(Timestamp::from_seconds(0.5)), 3.0);
        assert_relative_eq!(event.value_at(Timestamp::from_seconds(0.87)), 4.0);
        assert_relative_eq!(event.value_at(Timestamp::from_seconds(0.88)), 5.0);
        assert_relative_eq!(event.value_at(Timestamp::from_seconds(2.0)), 5.0);
    }

    #[test]
    fn curve_with_a_single_point_holds_that_point() {
        let event = anchored(
            0.0,
            0.0,
            AutomationEvent::SetCurve {
                values: vec![7.0],
                start_time: Timestamp::from_seconds(1.0),
                duration: Timestamp::from_seconds(1.0),
            },
        );

        assert_relative_eq!(event.value_at(Timestamp::from_seconds(1.5)), 7.0);
        assert_relative_eq!(event.value_at(Timestamp::from_seconds(3.0)), 7.0);
    }

    #[test]
    fn descending_ramp_clamps_at_the_target() {
        let ramp = anchored(
            4.0,
            0.0,
            AutomationEvent::LinearRamp {
                target: 1.0,
                end_time: Timestamp::from_seconds(1.0),
            },
        );

        assert_relative_eq!(ramp.value_at(Timestamp::from_seconds(0.5)), 2.5);
        assert_relative_eq!(ramp.value_at(Timestamp::from_seconds(1.5)), 1.0);
    }

    #[test]
    fn event_spans() {
        let curve = anchored(
            0.0,
            0.0,
            AutomationEvent::SetCurve {
                values: vec![1.0, 2.0],
                start_time: Timestamp::from_seconds(2.0),
                duration: Timestamp::from_seconds(3.0),
            },
        );

        assert_eq!(curve.start_time(), Timestamp::from_seconds(2.0));
        assert_eq!(curve.end_time(), Some(Timestamp::from_seconds(5.0)));
        assert_relative_eq!(curve.terminal_value(), 2.0);

        let approach = anchored(
            0.0,
            0.0,
            AutomationEvent::SetTarget {
                target: 1.0,
                start_time: Timestamp::from_seconds(1.0),
                time_constant: 0.1,
            },
        );

        assert_eq!(approach.end_time(), None);
    }
}
