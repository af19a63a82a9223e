use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealTrigger {
    /// Armed from the moment the text mounts.
    Always,
    /// Armed the first time at least `threshold` of the element is in the viewport.
    OnVisible { threshold: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    pub interval: Duration,
    pub trigger: RevealTrigger,
}

impl RevealConfig {
    pub const ALWAYS_ON: Self = Self {
        interval: Duration::from_millis(100),
        trigger: RevealTrigger::Always,
    };

    pub const ON_VISIBLE: Self = Self {
        interval: Duration::from_millis(60),
        trigger: RevealTrigger::OnVisible { threshold: 0.8 },
    };
}

/// Character-by-character reveal of a fixed string.
///
/// The owner drives it with a timer: while [`RevealState::should_schedule`] is true,
/// wait `interval` and call [`RevealState::advance`]. Each advance exposes exactly one
/// more character and the count never goes back.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealState {
    source: Vec<char>,
    revealed: usize,
    armed: bool,
    trigger: RevealTrigger,
}

impl RevealState {
    pub fn new(text: &str, trigger: RevealTrigger) -> Self {
        Self {
            source: text.chars().collect(),
            revealed: 0,
            armed: matches!(trigger, RevealTrigger::Always),
            trigger,
        }
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn is_complete(&self) -> bool {
        self.revealed == self.source.len()
    }

    /// Latches the armed flag. Returns true only on the call that armed it.
    pub fn arm(&mut self) -> bool {
        if self.armed {
            return false;
        }
        self.armed = true;
        true
    }

    /// Feeds a viewport intersection ratio. Arms once the threshold is met;
    /// every later observation is ignored, including scrolling back out.
    pub fn observe_visibility(&mut self, ratio: f64) -> bool {
        match self.trigger {
            RevealTrigger::OnVisible { threshold } if ratio >= threshold => self.arm(),
            _ => false,
        }
    }

    pub fn should_schedule(&self) -> bool {
        self.armed && !self.is_complete()
    }

    pub fn advance(&mut self) -> Option<char> {
        if !self.should_schedule() {
            return None;
        }
        let c = self.source[self.revealed];
        self.revealed += 1;
        Some(c)
    }

    pub fn visible_text(&self) -> String {
        self.source[..self.revealed].iter().collect()
    }

    pub fn cursor_visible(&self) -> bool {
        match self.trigger {
            RevealTrigger::Always => true,
            RevealTrigger::OnVisible { .. } => !self.is_complete(),
        }
    }
}

/// Timer backend for [`RevealDriver`].
pub trait RevealScheduler {
    type Handle;

    /// Starts a one-shot timer. `None` means the timer couldn't be started.
    fn schedule(&mut self, delay: Duration) -> Option<Self::Handle>;
    fn cancel(&mut self, handle: Self::Handle);
}

/// Owns a [`RevealState`] plus the one timer that advances it.
///
/// At most one tick is pending at any time. Polling again while a tick is pending does
/// nothing, so re-renders never stack timers. After [`RevealDriver::dispose`] the pending
/// tick is cancelled and nothing schedules or advances again.
#[derive(Debug)]
pub struct RevealDriver<H> {
    state: RevealState,
    interval: Duration,
    pending: Option<H>,
    disposed: bool,
}

impl<H> RevealDriver<H> {
    pub fn new(text: &str, config: RevealConfig) -> Self {
        Self {
            state: RevealState::new(text, config.trigger),
            interval: config.interval,
            pending: None,
            disposed: false,
        }
    }

    pub fn state(&self) -> &RevealState {
        &self.state
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Schedules the next tick if one is due. Returns true if a timer was started.
    pub fn poll<S>(&mut self, scheduler: &mut S) -> bool
    where
        S: RevealScheduler<Handle = H>,
    {
        if self.disposed || self.pending.is_some() || !self.state.should_schedule() {
            return false;
        }
        self.pending = scheduler.schedule(self.interval);
        self.pending.is_some()
    }

    /// Timer callback. Reveals one character unless the driver was disposed.
    pub fn tick(&mut self) -> Option<char> {
        if self.disposed {
            return None;
        }
        self.pending = None;
        self.state.advance()
    }

    pub fn observe_visibility(&mut self, ratio: f64) -> bool {
        !self.disposed && self.state.observe_visibility(ratio)
    }

    /// Cancels the pending tick and stops the driver for good.
    pub fn dispose<S>(&mut self, scheduler: &mut S)
    where
        S: RevealScheduler<Handle = H>,
    {
        self.disposed = true;
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
    }
}
