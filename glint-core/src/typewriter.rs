use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausedAtFull,
    Deleting,
    PausedAtEmpty,
}

/// Which pause the caller has to wait out before the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wait {
    TypeTick,
    DeleteTick,
    Hold,
    Advance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub text: String,
    pub wait: Wait,
}

/// Rotating typewriter: types a phrase, holds, deletes it, moves on. Forever.
///
/// Pure state, no timers. Every call to [`Typewriter::tick`] is one animation
/// step and reports how long to wait before the next one.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>, // per char, not per byte
    phrase_index: usize,
    char_index: usize,
    phase: Phase,
    cycles: u64,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<Vec<char>> = phrases
            .into_iter()
            .map(|p| p.as_ref().chars().collect())
            .collect();

        if phrases.is_empty() {
            return Err(ConfigError::NoPhrases);
        }
        if phrases.iter().all(|p| p.is_empty()) {
            return Err(ConfigError::AllPhrasesEmpty { count: phrases.len() });
        }

        Ok(Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            phase: Phase::Typing,
            cycles: 0,
        })
    }

    pub fn tick(&mut self) -> Step {
        match self.phase {
            Phase::Typing => self.type_char(),
            Phase::PausedAtFull | Phase::Deleting => self.delete_char(),
            Phase::PausedAtEmpty => {
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                if self.phrase_index == 0 {
                    self.cycles += 1;
                }
                self.char_index = 0;
                self.phase = Phase::Typing;
                self.type_char()
            }
        }
    }

    fn type_char(&mut self) -> Step {
        let len = self.current_len();
        if self.char_index < len {
            self.char_index += 1;
        }

        let wait = if self.char_index == len {
            self.phase = Phase::PausedAtFull;
            Wait::Hold
        } else {
            Wait::TypeTick
        };
        Step { text: self.visible_text(), wait }
    }

    fn delete_char(&mut self) -> Step {
        self.phase = Phase::Deleting;
        self.char_index = self.char_index.saturating_sub(1);

        let wait = if self.char_index == 0 {
            self.phase = Phase::PausedAtEmpty;
            Wait::Advance
        } else {
            Wait::DeleteTick
        };
        Step { text: self.visible_text(), wait }
    }

    fn current_len(&self) -> usize {
        self.phrases[self.phrase_index].len()
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True from the moment the phrase is fully typed until it is fully erased.
    pub fn is_deleting(&self) -> bool {
        matches!(self.phase, Phase::PausedAtFull | Phase::Deleting)
    }

    /// Completed passes through the whole list.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn phrases_len(&self) -> usize {
        self.phrases.len()
    }

    pub fn current_phrase(&self) -> String {
        self.phrases[self.phrase_index].iter().collect()
    }

    pub fn visible_text(&self) -> String {
        self.phrases[self.phrase_index][..self.char_index].iter().collect()
    }
}
