use crate::utility::{ArithmeticSequence, GeometricSequence};
use crate::{AutomationRate, Timestamp, BLOCK_SIZE};

use super::automation_event::clamp_to_target;
use super::{AutomationEvent, EventTimeline, ScheduledEvent};

/// The open-ended exponential approach has no end time. Once the distance
/// between the rendered value and the target falls below this threshold the
/// value is snapped to the target and the event is retired.
const SNAP_TO_TARGET: f64 = 1e-10;

/// Renders one block of parameter values per tick
///
/// At per-block rate the block is filled with a single evaluation at the
/// block's start time. At per-sample rate the block is walked in runs, one
/// run per governing event, so events can start and end in the middle of a
/// block. Within a run, ramps advance with a sequence generator seeded from
/// the closed-form value at the run's first sample.
pub(crate) struct BlockRenderer {
    value_buffer: [f64; BLOCK_SIZE],
}

impl BlockRenderer {
    pub fn new() -> Self {
        Self {
            value_buffer: [0.0; BLOCK_SIZE],
        }
    }

    /// The samples produced by the most recent render
    pub fn values(&self) -> &[f64] {
        &self.value_buffer
    }

    /// Render one block starting at `time`, returning the last sample
    pub fn render(
        &mut self,
        timeline: &mut EventTimeline,
        rate: AutomationRate,
        value: f64,
        time: Timestamp,
        sample_rate: usize,
    ) -> f64 {
        match rate {
            AutomationRate::PerBlock => self.render_per_block(timeline, value, time),
            AutomationRate::PerSample => self.render_per_sample(timeline, value, time, sample_rate),
        }
    }

    fn render_per_block(
        &mut self,
        timeline: &mut EventTimeline,
        mut value: f64,
        time: Timestamp,
    ) -> f64 {
        if let Some(terminal_value) = timeline.retire_expired(time) {
            value = terminal_value;
        }

        let mut converged_target = None;

        if let Some(event) = timeline.governing(time) {
            value = event.value_at(time);

            if let AutomationEvent::SetTarget { target, .. } = &event.event {
                if (value - target).abs() < SNAP_TO_TARGET {
                    converged_target = Some(*target);
                }
            }
        }

        if let Some(target) = converged_target {
            timeline.retire_front();
            value = target;
        }

        self.value_buffer.fill(value);
        value
    }

    fn render_per_sample(
        &mut self,
        timeline: &mut EventTimeline,
        mut value: f64,
        time: Timestamp,
        sample_rate: usize,
    ) -> f64 {
        let mut frame = 0;

        while frame < BLOCK_SIZE {
            let frame_time = time.incremented_by_samples(frame, sample_rate);

            if let Some(terminal_value) = timeline.retire_expired(frame_time) {
                value = terminal_value;
            }

            match timeline.governing(frame_time) {
                None => {
                    // constant until the next event activates or the block ends
                    let run_end =
                        frames_until(timeline.next_activation(), time, sample_rate).max(frame + 1);
                    self.value_buffer[frame..run_end].fill(value);
                    frame = run_end;
                }
                Some(event) => {
                    // an open-ended event runs until whatever supersedes it
                    let boundary = match (event.end_time(), timeline.upcoming_activation()) {
                        (Some(end_time), Some(next_start)) => Some(end_time.min(next_start)),
                        (Some(end_time), None) => Some(end_time),
                        (None, next_start) => next_start,
                    };

                    // every run covers at least one frame, so the walk
                    // advances even when a boundary has already passed
                    let run_end = frames_until(boundary, time, sample_rate).max(frame + 1);
                    let run = fill_event_run(
                        &mut self.value_buffer[frame..run_end],
                        event,
                        frame_time,
                        sample_rate,
                    );

                    value = run.last_value;
                    frame = run_end;

                    if run.converged {
                        timeline.retire_front();
                    }
                }
            }
        }

        self.value_buffer[BLOCK_SIZE - 1]
    }
}

struct RunResult {
    last_value: f64,
    converged: bool,
}

/// The frame index where a run ends: the boundary time rounded up to the
/// next sample, capped at the end of the block
fn frames_until(boundary: Option<Timestamp>, block_start: Timestamp, sample_rate: usize) -> usize {
    match boundary {
        Some(boundary) if boundary < block_start.incremented_by_samples(BLOCK_SIZE, sample_rate) => {
            let frames = (boundary - block_start).as_samples(sample_rate).ceil();
            (frames.max(0.0) as usize).min(BLOCK_SIZE)
        }
        _ => BLOCK_SIZE,
    }
}

/// Fill a run of samples governed by a single event, starting at `start`
fn fill_event_run(
    output: &mut [f64],
    event: &ScheduledEvent,
    start: Timestamp,
    sample_rate: usize,
) -> RunResult {
    match &event.event {
        AutomationEvent::SetValue { value, .. } => {
            output.fill(*value);
            RunResult {
                last_value: *value,
                converged: false,
            }
        }

        AutomationEvent::LinearRamp { target, end_time } => {
            let duration_samples = (*end_time - event.anchor_time).as_samples(sample_rate);
            let increment = (*target - event.anchor_value) / duration_samples;

            let seed = event.value_at(start);
            let mut sequence = ArithmeticSequence::new(seed, increment);

            let mut last_value = seed;
            for (index, sample) in output.iter_mut().enumerate() {
                last_value = if index == 0 {
                    seed
                } else {
                    clamp_to_target(sequence.next_value(), event.anchor_value, *target)
                };
                *sample = last_value;
            }

            RunResult {
                last_value,
                converged: false,
            }
        }

        AutomationEvent::ExponentialRamp { target, end_time } => {
            let duration_samples = (*end_time - event.anchor_time).as_samples(sample_rate);
            let ratio = (*target / event.anchor_value).powf(1.0 / duration_samples);

            let seed = event.value_at(start);
            let mut sequence = GeometricSequence::new(seed, ratio);

            let mut last_value = seed;
            for (index, sample) in output.iter_mut().enumerate() {
                last_value = if index == 0 {
                    seed
                } else {
                    clamp_to_target(sequence.next_value(), event.anchor_value, *target)
                };
                *sample = last_value;
            }

            RunResult {
                last_value,
                converged: false,
            }
        }

        AutomationEvent::SetTarget {
            target,
            time_constant,
            ..
        } => {
            if *time_constant <= 0.0 {
                output.fill(*target);
                return RunResult {
                    last_value: *target,
                    converged: true,
                };
            }

            // distance to the target decays by a constant ratio per sample
            let ratio = (-1.0 / (time_constant * sample_rate as f64)).exp();
            let seed = event.value_at(start);
            let mut distance = GeometricSequence::new(seed - target, ratio);

            let mut last_value = seed;
            let mut converged = false;

            for (index, sample) in output.iter_mut().enumerate() {
                if !converged {
                    if index > 0 {
                        last_value = target + distance.next_value();
                    }

                    if (last_value - target).abs() < SNAP_TO_TARGET {
                        last_value = *target;
                        converged = true;
                    }
                }

                *sample = last_value;
            }

            RunResult {
                last_value,
                converged,
            }
        }

        AutomationEvent::SetCurve { .. } => {
            let mut last_value = 0.0;

            for (index, sample) in output.iter_mut().enumerate() {
                let sample_time = start.incremented_by_samples(index, sample_rate);
                last_value = event.value_at(sample_time);
                *sample = last_value;
            }

            RunResult {
                last_value,
                converged: false,
            }
        }
    }
}
