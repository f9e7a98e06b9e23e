pub mod animator;
pub mod clock;
pub mod config;
pub mod error;
pub mod sink;
pub mod typewriter;

pub use animator::{Animator, CancelToken};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::ConfigError;
pub use sink::{LineSink, MemorySink, TextSink};
pub use typewriter::{Phase, Step, Typewriter, Wait};
#[cfg(feature = "tui")]
pub use sink::tui::{run_interactive, TuiSink};
