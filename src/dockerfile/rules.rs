//! Line rewrite rules for the Dockerfile template.
//!
//! Rules are checked in order against every template line; the first rule
//! whose predicate matches rewrites the line. Lines no rule matches are
//! copied verbatim.

use regex::Regex;
use std::sync::LazyLock;

/// Prefix of the generated message queue name.
pub const QUEUE_PREFIX: &str = "terra.dronepipeline.";

static MAINTAINER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^MAINTAINER").expect("Invalid maintainer regex"));

static SUBMODULE_HOME_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ENV.*submodule_home").expect("Invalid submodule_home regex"));

static QUEUE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)RABBITMQ_QUEUE").expect("Invalid queue regex"));

/// Values substituted into the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchContext {
    /// `Name <email>` of the extractor author.
    pub maintainer: String,
    /// Relative submodule folder, when the extractor is a submodule.
    pub submodule_folder: Option<String>,
    /// Sanitized, lowercased extractor name.
    pub queue_name: String,
}

/// A (predicate, rewrite) pair applied to single template lines.
pub struct LineRule {
    pub name: &'static str,
    pub matches: fn(&str, &PatchContext) -> bool,
    pub rewrite: fn(&str, &PatchContext) -> String,
}

impl std::fmt::Debug for LineRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineRule").field("name", &self.name).finish()
    }
}

/// Rewrite rules in evaluation order.
pub static RULES: &[LineRule] = &[
    LineRule {
        name: "maintainer",
        matches: |line, _| MAINTAINER_LINE.is_match(line),
        rewrite: |_, ctx| format!("MAINTAINER {}", ctx.maintainer),
    },
    LineRule {
        name: "submodule_home",
        matches: |line, ctx| ctx.submodule_folder.is_some() && SUBMODULE_HOME_LINE.is_match(line),
        rewrite: |_, ctx| {
            format!(
                "ENV submodule_home \"{}\"",
                ctx.submodule_folder.as_deref().unwrap_or_default()
            )
        },
    },
    LineRule {
        name: "rabbitmq_queue",
        matches: |line, _| QUEUE_LINE.is_match(line),
        rewrite: |line, ctx| {
            let indent = QUEUE_LINE
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map_or("", |m| m.as_str());
            format!(
                "{}RABBITMQ_QUEUE=\"{}{}\" \\",
                indent, QUEUE_PREFIX, ctx.queue_name
            )
        },
    },
];

/// Apply the first matching rule to `line`, or return it unchanged.
pub fn apply_rules<'a>(line: &'a str, ctx: &PatchContext) -> std::borrow::Cow<'a, str> {
    match RULES.iter().find(|rule| (rule.matches)(line, ctx)) {
        Some(rule) => std::borrow::Cow::Owned((rule.rewrite)(line, ctx)),
        None => std::borrow::Cow::Borrowed(line),
    }
}
