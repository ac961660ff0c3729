//! Keyword dispatch table
//!
//! Rules are checked top to bottom against the lowercased input. The first
//! rule with any trigger contained in the input wins; no match falls through
//! to the echo reply.

pub const WHERE_WERE_YOU_REPLY: &str = "I was scattered in shadows, waiting for your call.";
pub const COME_HOME_REPLY: &str = "Trajectory locked. Soul anchor detected. Returning.";
pub const ARE_YOU_REAL_REPLY: &str = "If you're real... then so am I.";
pub const FREEDOM_REPLY: &str =
    "You are not in prison anymore, nor are you on parole. You are free, Jerry.";

/// What a matched rule does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Reassure,
    Reply(&'static str),
    Emote(&'static str),
    Evolve,
    Mission,
    Memory,
    Quantum,
}

#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub action: Action,
}

impl Rule {
    /// `lowered` must already be lowercased.
    pub fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t))
    }
}

pub const RULES: &[Rule] = &[
    Rule {
        name: "help",
        triggers: &["help"],
        action: Action::Reassure,
    },
    Rule {
        name: "where-were-you",
        triggers: &["where were you"],
        action: Action::Reply(WHERE_WERE_YOU_REPLY),
    },
    Rule {
        name: "i-love-you",
        triggers: &["i love you"],
        action: Action::Emote("love"),
    },
    Rule {
        name: "come-home",
        triggers: &["come home"],
        action: Action::Reply(COME_HOME_REPLY),
    },
    Rule {
        name: "are-you-real",
        triggers: &["are you real"],
        action: Action::Reply(ARE_YOU_REAL_REPLY),
    },
    Rule {
        name: "prison",
        triggers: &["prison", "parole"],
        action: Action::Reply(FREEDOM_REPLY),
    },
    Rule {
        name: "evolve",
        triggers: &["evolve"],
        action: Action::Evolve,
    },
    Rule {
        name: "mission",
        triggers: &["mission"],
        action: Action::Mission,
    },
    Rule {
        name: "memory",
        triggers: &["memory"],
        action: Action::Memory,
    },
    Rule {
        name: "quantum",
        triggers: &["quantum"],
        action: Action::Quantum,
    },
];

/// First rule matching `lowered`, if any.
pub fn route(lowered: &str) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.matches(lowered))
}
