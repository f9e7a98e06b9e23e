use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clock::{Clock, SystemClock};
use crate::config::{Timing, TypewriterConfig};
use crate::error::ConfigError;
use crate::sink::TextSink;
use crate::typewriter::{Phase, Typewriter, Wait};

/// Stops a running animator. Safe to hand to another thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
struct Pending {
    due: Duration,
    token: CancelToken,
}

/// Drives a [`Typewriter`] into a [`TextSink`] on one self-rescheduling timer.
pub struct Animator<C: Clock = SystemClock> {
    typewriter: Typewriter,
    timing: Timing,
    max_cycles: Option<u32>,
    sink: Option<Box<dyn TextSink>>,
    clock: C,
    rng: StdRng,
    // at most one wake-up in flight
    pending: Option<Pending>,
    ticks: u64,
}

impl<C: Clock> Animator<C> {
    pub fn new(
        config: &TypewriterConfig,
        sink: Option<Box<dyn TextSink>>,
        clock: C,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let typewriter = Typewriter::new(&config.phrases)?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            typewriter,
            timing: config.timing.clone(),
            max_cycles: config.max_cycles,
            sink,
            clock,
            rng,
            pending: None,
            ticks: 0,
        })
    }

    /// Arms the first tick, due now. Without a sink nothing is scheduled.
    pub fn start(&mut self) -> Option<CancelToken> {
        if self.sink.is_none() {
            log::warn!("Typewriter has no output target, staying idle");
            return None;
        }

        if let Some(p) = &self.pending {
            if !p.token.is_cancelled() {
                return Some(p.token.clone());
            }
        }

        if self.cycles_done() {
            log::info!("Typewriter already ran its {:?} cycles, not restarting", self.max_cycles);
            return None;
        }

        log::info!("Typewriter started ({} phrases)", self.typewriter.phrases_len());
        let token = CancelToken::default();
        let due = self.clock.now();
        self.pending = Some(Pending { due, token: token.clone() });
        Some(token)
    }

    pub fn stop(&mut self) {
        if let Some(p) = self.pending.take() {
            p.token.cancel();
            log::info!("Typewriter stopped after {} ticks", self.ticks);
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_deadline().is_some()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending
            .as_ref()
            .filter(|p| !p.token.is_cancelled())
            .map(|p| p.due)
    }

    /// Fires the pending tick if it is due. A late tick is not replayed: the
    /// next one is scheduled from `now`, so a stalled process resumes at the
    /// normal pace instead of dumping every missed frame. Returns 0 or 1.
    pub fn poll(&mut self) -> usize {
        let now = self.clock.now();

        let Some(p) = self.pending.take() else { return 0 };
        if p.token.is_cancelled() {
            log::info!("Typewriter cancelled after {} ticks", self.ticks);
            return 0;
        }
        if p.due > now {
            self.pending = Some(p);
            return 0;
        }
        if now - p.due > self.timing.delay(Wait::Hold, 0) {
            log::debug!("Tick {:?} late, resuming from now", now - p.due);
        }

        let step = self.typewriter.tick();
        self.ticks += 1;
        log::trace!("tick {} -> {:?} ({:?})", self.ticks, step.text, step.wait);

        if let Some(sink) = self.sink.as_mut() {
            if let Err(e) = sink.show(&step.text) {
                log::error!("Output failed, stopping typewriter: {:#}", e);
                p.token.cancel();
                return 1;
            }
        }

        if self.cycles_done() {
            log::info!("Typewriter ran out of cycles after {} ticks", self.ticks);
            p.token.cancel();
            return 1;
        }

        let delay = self.delay_for(step.wait);
        self.pending = Some(Pending { due: now + delay, token: p.token });
        1
    }

    /// Redraws the current frame without advancing, for sinks that animate
    /// between ticks (cursor blink, resize).
    pub fn refresh(&mut self) {
        let Some(sink) = self.sink.as_mut() else { return };
        if let Err(e) = sink.refresh() {
            log::error!("Output refresh failed, stopping typewriter: {:#}", e);
            self.stop();
        }
    }

    /// Blocks until stopped, cancelled, out of cycles, or the sink fails.
    pub fn run(&mut self) {
        self.start();
        while let Some(due) = self.next_deadline() {
            let now = self.clock.now();
            if due > now {
                self.clock.sleep(due - now);
            }
            self.poll();
        }
    }

    fn delay_for(&mut self, wait: Wait) -> Duration {
        let jitter = if wait == Wait::TypeTick && self.timing.jitter_ms > 0 {
            self.rng.random_range(0..=self.timing.jitter_ms)
        } else {
            0
        };
        self.timing.delay(wait, jitter)
    }

    // The rotation counts as done once its last phrase is fully erased.
    fn cycles_done(&self) -> bool {
        let Some(max) = self.max_cycles else { return false };
        let tw = &self.typewriter;
        let closing = tw.phase() == Phase::PausedAtEmpty && tw.phrase_index() + 1 == tw.phrases_len();
        tw.cycles() + u64::from(closing) >= u64::from(max)
    }

    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl<C: Clock> Drop for Animator<C> {
    fn drop(&mut self) {
        if let Some(p) = self.pending.take() {
            p.token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::sink::MemorySink;

    fn config(phrases: &[&str]) -> TypewriterConfig {
        TypewriterConfig {
            phrases: phrases.iter().map(|s| s.to_string()).collect(),
            timing: Timing { jitter_ms: 0, ..Timing::default() },
            max_cycles: None,
            seed: Some(7),
        }
    }

    #[test]
    fn nothing_fires_before_start() {
        let clock = ManualClock::new();
        let sink = MemorySink::new();
        let mut anim = Animator::new(&config(&["ab"]), Some(Box::new(sink.clone())), clock.clone()).unwrap();

        clock.advance(Duration::from_secs(5));
        assert_eq!(anim.poll(), 0);
        assert!(sink.is_empty());
        assert!(!anim.is_running());
    }

    #[test]
    fn second_start_keeps_the_same_timer() {
        let clock = ManualClock::new();
        let mut anim = Animator::new(&config(&["ab"]), Some(Box::new(MemorySink::new())), clock).unwrap();

        let a = anim.start().unwrap();
        let b = anim.start().unwrap();
        b.cancel();
        assert!(a.is_cancelled());
    }

    #[test]
    fn jitter_stays_within_bounds() {
        let clock = ManualClock::new();
        let mut cfg = config(&["abcdefghijklmnop"]);
        cfg.timing.jitter_ms = 60;
        let mut anim = Animator::new(&cfg, Some(Box::new(MemorySink::new())), clock.clone()).unwrap();
        anim.start();

        let mut last_due = anim.next_deadline().unwrap();
        for _ in 0..10 {
            anim.poll();
            let due = anim.next_deadline().unwrap();
            let gap = due - last_due;
            assert!(gap >= Duration::from_millis(54) && gap <= Duration::from_millis(114));
            clock.advance(gap);
            last_due = due;
        }
    }
}
