//! Hilfen für Frontend-Adapter: Regler-Debounce und Effekt-Senken.

mod sinks;
mod slider_debounce;

pub use sinks::{CollectingSink, LogSink};
pub use slider_debounce::SliderDebouncer;
