//! Canned chat replies.
//!
//! DESIGN
//! ======
//! Replies come from an ordered list of [`ResponseRule`]s evaluated
//! first-match-wins against the lower-cased input; when nothing matches the
//! fallback reply is used, so every input gets exactly one reply. Rule order
//! is policy: "hi" is checked before "course", so a greeting that mentions
//! courses is answered as a greeting.
//!
//! Keywords are plain substrings, not words. "this" contains "hi" and is a
//! greeting as far as the responder is concerned.

#[cfg(test)]
#[path = "responder_test.rs"]
mod responder_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReplyKind {
    Greeting,
    CourseInfo,
    Pricing,
    Contact,
    Farewell,
    Fallback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResponseRule {
    pub kind: ReplyKind,
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

impl ResponseRule {
    /// `lowered` must already be lower-cased.
    #[must_use]
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

pub const GREETING: ResponseRule = ResponseRule {
    kind: ReplyKind::Greeting,
    keywords: &["hello", "hi"],
    reply: "Hello! How can I help you today?",
};

pub const COURSE_INFO: ResponseRule = ResponseRule {
    kind: ReplyKind::CourseInfo,
    keywords: &["course"],
    reply: "We offer a wide range of courses in Web Development, Data Science, and Design. \
            You can see them all on our Courses page.",
};

pub const PRICING: ResponseRule = ResponseRule {
    kind: ReplyKind::Pricing,
    keywords: &["price", "pricing", "cost"],
    reply: "All our courses are currently free as part of our mission for quality education for all!",
};

pub const CONTACT: ResponseRule = ResponseRule {
    kind: ReplyKind::Contact,
    keywords: &["contact", "email"],
    reply: "You can contact us via the form on our Contact page or by emailing contact@sikshaconnect.org.",
};

pub const FAREWELL: ResponseRule = ResponseRule {
    kind: ReplyKind::Farewell,
    keywords: &["bye", "goodbye"],
    reply: "Goodbye! Have a great day.",
};

pub const FALLBACK_REPLY: &str =
    "I'm sorry, I didn't understand that. You can ask me about our courses, pricing, or how to contact us.";

/// The site's rules, highest priority first.
pub const DEFAULT_RULES: [ResponseRule; 5] = [GREETING, COURSE_INFO, PRICING, CONTACT, FAREWELL];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Responder {
    rules: Vec<ResponseRule>,
    fallback: &'static str,
}

impl Default for Responder {
    fn default() -> Self {
        Self::with_rules(DEFAULT_RULES.to_vec(), FALLBACK_REPLY)
    }
}

impl Responder {
    #[must_use]
    pub fn with_rules(rules: Vec<ResponseRule>, fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    #[must_use]
    pub fn rules(&self) -> &[ResponseRule] {
        &self.rules
    }

    /// First matching rule, or `None` for the fallback.
    #[must_use]
    pub fn select(&self, input: &str) -> Option<&ResponseRule> {
        let lowered = input.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    #[must_use]
    pub fn classify(&self, input: &str) -> ReplyKind {
        self.select(input).map_or(ReplyKind::Fallback, |rule| rule.kind)
    }

    #[must_use]
    pub fn respond(&self, input: &str) -> &'static str {
        self.select(input).map_or(self.fallback, |rule| rule.reply)
    }
}
