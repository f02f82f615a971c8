// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! First-match-wins keyword rule evaluation.
//!
//! A rule table is an ordered decision table, not a learned model:
//! matching is deterministic, side-effect-free, and rule order decides
//! precedence when several keywords co-occur in one message.

/// One rule: every required substring must appear in the lowercased
/// input for the rule to fire.
///
/// Alternative keywords for the same reply ("price" or "cost") are
/// expressed as consecutive table entries sharing the reply constant,
/// which keeps precedence identical to an or-combined check.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Substrings that must all be present (matched case-insensitively).
    pub required: &'static [&'static str],
    /// Canned reply returned when the rule fires.
    pub reply: &'static str,
}

/// Reply used when no rule matches.
#[derive(Debug, Clone, Copy)]
pub enum Fallback {
    /// A fixed canned reply.
    Fixed(&'static str),
    /// Echoes the original (non-lowercased) input between two fragments.
    Echo {
        prefix: &'static str,
        suffix: &'static str,
    },
}

/// An ordered rule table with its fallback reply.
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
    /// Table name, used in logging only.
    pub name: &'static str,
    /// Rules evaluated top to bottom; the first match wins.
    pub rules: &'static [Rule],
    /// Reply when nothing matches.
    pub fallback: Fallback,
}

impl RuleTable {
    /// Produce the reply for an input message.
    pub fn reply(&self, text: &str) -> String {
        let lower = text.to_lowercase();
        for rule in self.rules {
            if rule.required.iter().all(|kw| lower.contains(kw)) {
                tracing::debug!(table = self.name, keywords = ?rule.required, "rule matched");
                return rule.reply.to_string();
            }
        }
        tracing::debug!(table = self.name, "no rule matched, using fallback");
        match self.fallback {
            Fallback::Fixed(reply) => reply.to_string(),
            Fallback::Echo { prefix, suffix } => format!("{prefix}{text}{suffix}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: RuleTable = RuleTable {
        name: "test",
        rules: &[
            Rule {
                required: &["alpha", "beta"],
                reply: "both",
            },
            Rule {
                required: &["alpha"],
                reply: "alpha only",
            },
        ],
        fallback: Fallback::Echo {
            prefix: "you said: ",
            suffix: ".",
        },
    };

    #[test]
    fn all_required_substrings_must_match() {
        assert_eq!(TABLE.reply("alpha and beta"), "both");
        assert_eq!(TABLE.reply("just alpha here"), "alpha only");
    }

    #[test]
    fn earlier_rule_wins() {
        // Both rules match; the table order decides.
        assert_eq!(TABLE.reply("beta then alpha"), "both");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(TABLE.reply("ALPHA BETA"), "both");
    }

    #[test]
    fn echo_fallback_preserves_original_casing() {
        assert_eq!(TABLE.reply("Gamma"), "you said: Gamma.");
    }

    #[test]
    fn fixed_fallback() {
        let table = RuleTable {
            fallback: Fallback::Fixed("nothing matched"),
            ..TABLE
        };
        assert_eq!(table.reply("gamma"), "nothing matched");
    }

    #[test]
    fn reply_is_deterministic() {
        let first = TABLE.reply("alpha beta gamma");
        for _ in 0..10 {
            assert_eq!(TABLE.reply("alpha beta gamma"), first);
        }
    }
}
