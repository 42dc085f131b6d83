//! Adapter implementations for the notifier port.

pub mod recording;

pub use recording::RecordingNotifier;
