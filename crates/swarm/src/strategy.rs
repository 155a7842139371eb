//! Task strategy classification.
//!
//! A keyword-membership heuristic over the lower-cased task text.
//! Substring matching is deliberate and known to false-positive (the
//! word "disintegrate" contains "integrate"); the phrase lists and
//! their precedence are the contract, not an approximation of intent.

use std::fmt;

/// Phrases that indicate a task wants several specialists in sequence.
pub const COORDINATION_PHRASES: [&str; 7] = [
    "research and",
    "analyze and create",
    "find and validate",
    "calculate and explain",
    "search and summarize",
    "create and test",
    "design and implement",
];

/// Phrases that indicate a task addressed to the coordinator directly.
pub const SPECIALIST_PHRASES: [&str; 8] = [
    "coordinate",
    "orchestrate",
    "manage",
    "oversee",
    "synthesize",
    "integrate",
    "combine",
    "merge",
];

/// How a task should be routed through the swarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Multiple specialists working the task in sequence
    MultiAgentCoordination,
    /// The coordinator handles the task itself
    SpecialistDirect,
    /// Nothing matched; let the coordinator judge complexity first
    AssessComplexity,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::MultiAgentCoordination => "multi_agent_coordination",
            Strategy::SpecialistDirect => "specialist_direct",
            Strategy::AssessComplexity => "assess_complexity",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a free-text task into a routing strategy.
///
/// Total function: every input maps to exactly one strategy, no error
/// case. The coordination check strictly precedes the specialist check,
/// so a task matching both classifies as coordination.
pub fn classify(task: &str) -> Strategy {
    let lowered = task.to_lowercase();

    if COORDINATION_PHRASES.iter().any(|p| lowered.contains(p)) {
        return Strategy::MultiAgentCoordination;
    }
    if SPECIALIST_PHRASES.iter().any(|p| lowered.contains(p)) {
        return Strategy::SpecialistDirect;
    }
    Strategy::AssessComplexity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn research_and_create_is_coordination() {
        assert_eq!(
            classify("Research quantum computing and create a technical report"),
            Strategy::MultiAgentCoordination
        );
    }

    #[test]
    fn coordinate_is_specialist_direct() {
        assert_eq!(
            classify("Please coordinate the team"),
            Strategy::SpecialistDirect
        );
    }

    #[test]
    fn plain_question_assesses_complexity() {
        assert_eq!(classify("What is 2+2?"), Strategy::AssessComplexity);
    }

    #[test]
    fn coordination_wins_over_specialist() {
        // Contains both "search and summarize" and "synthesize"
        assert_eq!(
            classify("Search and summarize the papers, then synthesize a review"),
            Strategy::MultiAgentCoordination
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            classify("RESEARCH AND compare the options"),
            Strategy::MultiAgentCoordination
        );
        assert_eq!(classify("ORCHESTRATE the rollout"), Strategy::SpecialistDirect);
    }

    #[test]
    fn substring_false_positive_is_the_contract() {
        // "disintegrate" contains "integrate"; the heuristic accepts this
        assert_eq!(
            classify("Why did the comet disintegrate?"),
            Strategy::SpecialistDirect
        );
    }

    #[test]
    fn classify_is_deterministic() {
        let task = "Find and validate the dataset sources";
        let first = classify(task);
        for _ in 0..10 {
            assert_eq!(classify(task), first);
        }
    }

    #[test]
    fn empty_task_assesses_complexity() {
        assert_eq!(classify(""), Strategy::AssessComplexity);
    }

    #[test]
    fn strategy_labels() {
        assert_eq!(
            Strategy::MultiAgentCoordination.to_string(),
            "multi_agent_coordination"
        );
        assert_eq!(Strategy::SpecialistDirect.to_string(), "specialist_direct");
        assert_eq!(Strategy::AssessComplexity.to_string(), "assess_complexity");
    }
}
