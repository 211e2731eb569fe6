use std::fmt;

/// How a scenario ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
    /// The scenario crashed before a comparison could be made.
    Errored(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    name: String,
    verdict: Verdict,
}

impl ScenarioReport {
    pub fn new(name: impl Into<String>, verdict: Verdict) -> Self {
        Self {
            name: name.into(),
            verdict,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verdict {
            Verdict::Passed => write!(f, "Test \"{}\": PASSED", self.name),
            Verdict::Failed => write!(f, "Test \"{}\": FAILED", self.name),
            Verdict::Errored(message) => write!(
                f,
                "Test \"{}\" threw an unexpected error: {message}",
                self.name
            ),
        }
    }
}
