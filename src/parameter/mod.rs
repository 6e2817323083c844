mod audio_parameter;
mod automation_event;
mod parameter_value;
mod renderer;
mod timeline;

pub use audio_parameter::AudioParameter;
pub use audio_parameter::AutomationRate;
pub use parameter_value::ParameterValue;

pub(crate) use automation_event::AutomationEvent;
pub(crate) use automation_event::ScheduledEvent;
pub(crate) use renderer::BlockRenderer;
pub(crate) use timeline::EventTimeline;
