pub mod terminal;
pub mod memory;
#[cfg(feature = "tui")]
pub mod tui;

pub use memory::MemorySink;
pub use terminal::LineSink;

/// The one place the animation is shown. Each call replaces what was there.
pub trait TextSink {
    fn show(&mut self, text: &str) -> anyhow::Result<()>;

    /// Redraw the last text; called between ticks. Static sinks ignore it.
    fn refresh(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

impl<T: TextSink + ?Sized> TextSink for Box<T> {
    fn show(&mut self, text: &str) -> anyhow::Result<()> {
        (**self).show(text)
    }

    fn refresh(&mut self) -> anyhow::Result<()> {
        (**self).refresh()
    }
}
