// Job recommendations: similarity scoring, selection with fallbacks, display formatting.
// Scorer and selector are pure; all catalog I/O happens in handlers before they run.

pub mod format;
pub mod handlers;
pub mod scorer;
pub mod selector;
pub mod tables;
