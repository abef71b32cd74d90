//! Decision outcomes produced by the policy layer.

use super::candidate::ExecutableCandidate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What the caller should do with an analyzed content root.
///
/// `NoCandidates` and `SetupNotFound` are valid outcomes, not errors; the
/// caller is expected to fall back to a manual choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// The top candidate is confident enough to configure without asking.
    AutoConfigure(ExecutableCandidate),
    /// At least one candidate qualified but none is confident enough;
    /// present these (at most five, best first) for a user choice.
    PromptUser(Vec<ExecutableCandidate>),
    /// No candidate reached the minimum qualifying score.
    NoCandidates,
    /// Repack content: configure this installer executable.
    ConfigureInstall(PathBuf),
    /// Repack content but no setup executable could be located.
    SetupNotFound,
}

impl Decision {
    /// Short name of the outcome variant, for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Decision::AutoConfigure(_) => "auto-configure",
            Decision::PromptUser(_) => "prompt-user",
            Decision::NoCandidates => "no-candidates",
            Decision::ConfigureInstall(_) => "configure-install",
            Decision::SetupNotFound => "setup-not-found",
        }
    }

    /// Whether the outcome requires user interaction to proceed.
    pub fn needs_user(&self) -> bool {
        matches!(
            self,
            Decision::PromptUser(_) | Decision::NoCandidates | Decision::SetupNotFound
        )
    }
}
