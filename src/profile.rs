use smallvec::SmallVec;

/// Next step after an image load error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FallbackStep {
    /// Retry with this source.
    Retry(String),
    /// Chain exhausted; hide the image and show the placeholder.
    GiveUp,
}

/// Ordered image sources tried on successive load failures. Index 0 is the
/// source the image started with, even when it is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallbackChain {
    sources: SmallVec<[String; 2]>,
    attempt: usize,
    placeholder_shown: bool,
}

impl FallbackChain {
    pub fn new<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
            attempt: 0,
            placeholder_shown: false,
        }
    }

    pub fn attempt(&self) -> usize {
        self.attempt
    }

    pub fn on_error(&mut self) -> FallbackStep {
        self.attempt += 1;
        match self.sources.get(self.attempt) {
            Some(src) => FallbackStep::Retry(src.clone()),
            None => {
                self.attempt = self.sources.len();
                FallbackStep::GiveUp
            }
        }
    }

    /// `true` the first time only; the placeholder is inserted once.
    pub fn take_placeholder(&mut self) -> bool {
        !std::mem::replace(&mut self.placeholder_shown, true)
    }
}
