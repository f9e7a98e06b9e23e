use std::cell::RefCell;
use std::rc::Rc;
use crate::sink::TextSink;

/// Keeps every frame it was asked to show. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    frames: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<String> {
        self.frames.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.frames.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.borrow().is_empty()
    }
}

impl TextSink for MemorySink {
    fn show(&mut self, text: &str) -> anyhow::Result<()> {
        self.frames.borrow_mut().push(text.to_string());
        Ok(())
    }
}
