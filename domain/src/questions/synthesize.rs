//! Default question synthesis from a configuration tree
//!
//! Recognized structural patterns live in a declarative rule table rather
//! than a branch per pattern, so new patterns are data. Rules are evaluated
//! in priority order and fire on path existence alone.

use super::question::{Question, QuestionType};
use super::set::QuestionSet;
use crate::values::{ConfigTree, ValueKind};

/// How a rule determines the emitted question's type and fields
enum RuleShape {
    /// Fixed enum with a known option list and default
    Enum {
        options: &'static [&'static str],
        default: &'static str,
    },
    /// Fixed scalar type
    Fixed(QuestionType),
    /// Type inferred from the runtime kind of the value at the path
    Inferred,
}

/// One recognized structural pattern
struct PatternRule {
    path: &'static str,
    label: Option<&'static str>,
    description: Option<&'static str>,
    group: &'static str,
    shape: RuleShape,
}

/// Priority-ordered pattern table. The first two entries are the
/// historically fixed rules; the rest follow the uniform inferred shape.
const PATTERN_RULES: &[PatternRule] = &[
    PatternRule {
        path: "service.type",
        label: Some("Service Type"),
        description: Some("Kubernetes service type"),
        group: "Networking",
        shape: RuleShape::Enum {
            options: &["ClusterIP", "NodePort", "LoadBalancer"],
            default: "ClusterIP",
        },
    },
    PatternRule {
        path: "persistence.storageClass",
        label: Some("Storage Class"),
        description: Some("Storage class for persistent volumes"),
        group: "Storage",
        shape: RuleShape::Fixed(QuestionType::String),
    },
    PatternRule {
        path: "replicaCount",
        label: None,
        description: None,
        group: "Scaling",
        shape: RuleShape::Inferred,
    },
    PatternRule {
        path: "persistence.enabled",
        label: None,
        description: None,
        group: "Storage",
        shape: RuleShape::Inferred,
    },
    PatternRule {
        path: "persistence.size",
        label: None,
        description: None,
        group: "Storage",
        shape: RuleShape::Inferred,
    },
    PatternRule {
        path: "ingress.enabled",
        label: None,
        description: None,
        group: "Networking",
        shape: RuleShape::Inferred,
    },
    PatternRule {
        path: "autoscaling.enabled",
        label: None,
        description: None,
        group: "Scaling",
        shape: RuleShape::Inferred,
    },
    PatternRule {
        path: "ollama.gpu.enabled",
        label: None,
        description: None,
        group: "GPU Configuration",
        shape: RuleShape::Inferred,
    },
    PatternRule {
        path: "ollama.resources.requests.cpu",
        label: None,
        description: None,
        group: "Resources",
        shape: RuleShape::Inferred,
    },
    PatternRule {
        path: "ollama.resources.requests.memory",
        label: None,
        description: None,
        group: "Resources",
        shape: RuleShape::Inferred,
    },
    PatternRule {
        path: "observability.enabled",
        label: None,
        description: None,
        group: "Observability",
        shape: RuleShape::Inferred,
    },
];

/// Synthesize the default question set for a configuration tree.
///
/// Always emits `name` and `namespace` first, then one question per
/// pattern-table rule whose dotted path exists in the tree, preserving
/// table order.
pub fn synthesize_defaults(tree: &ConfigTree) -> QuestionSet {
    let mut questions = vec![
        Question::new("name", "Application Name")
            .with_description("Name for the application")
            .with_type(QuestionType::String)
            .required()
            .with_group("General"),
        Question::new("namespace", "Namespace")
            .with_description("Kubernetes namespace for the application")
            .with_type(QuestionType::String)
            .required()
            .with_group("General"),
    ];

    for rule in PATTERN_RULES {
        if tree.contains_path(rule.path) {
            questions.push(question_from_rule(rule, tree));
        }
    }

    QuestionSet::new(questions)
}

fn question_from_rule(rule: &PatternRule, tree: &ConfigTree) -> Question {
    let label = rule
        .label
        .map(str::to_string)
        .unwrap_or_else(|| derive_label(rule.path));

    let mut question = Question::new(rule.path, label).with_group(rule.group);
    if let Some(description) = rule.description {
        question = question.with_description(description);
    }

    match &rule.shape {
        RuleShape::Enum { options, default } => question
            .with_type(QuestionType::Enum)
            .with_options(options.iter().copied())
            .with_default((*default).to_string().into()),
        RuleShape::Fixed(question_type) => question.with_type(*question_type),
        RuleShape::Inferred => {
            let kind = tree
                .resolve(rule.path)
                .map(|value| value.inferred_type())
                .unwrap_or(ValueKind::String);
            question.with_type(match kind {
                ValueKind::Boolean => QuestionType::Boolean,
                ValueKind::Int => QuestionType::Int,
                ValueKind::String => QuestionType::String,
            })
        }
    }
}

/// Humanize the final path segment into a display label:
/// `persistence.storageClass` becomes "Storage Class".
fn derive_label(path: &str) -> String {
    let segment = path.rsplit('.').next().unwrap_or(path);
    let mut label = String::with_capacity(segment.len() + 4);
    for (i, ch) in segment.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            label.push(' ');
            label.push(ch);
        } else {
            label.push(ch);
        }
    }
    label
}
