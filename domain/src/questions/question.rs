//! Question value object

use crate::values::ConfigValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Declared type of a question's answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    String,
    Int,
    Boolean,
    Enum,
}

/// A single exposable configuration item.
///
/// `variable` is a dotted path into the configuration tree and uniquely
/// identifies the question within a set. Serialization omits unset fields
/// except `variable` and `label`, matching the questions.yaml document
/// format consumed by installer UIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub variable: String,

    pub label: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub question_type: Option<QuestionType>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<ConfigValue>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_if: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subquestions: Vec<Question>,
}

/// Structural validation failures for a question
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question variable must not be empty")]
    EmptyVariable,

    #[error("show_if on '{variable}' must be of the form key=value")]
    MalformedShowIf { variable: String },

    #[error("options on '{variable}' are only valid for enum questions")]
    OptionsWithoutEnum { variable: String },
}

impl Question {
    pub fn new(variable: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            label: label.into(),
            description: String::new(),
            question_type: None,
            required: false,
            default: None,
            group: String::new(),
            options: Vec::new(),
            show_if: None,
            subquestions: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_type(mut self, question_type: QuestionType) -> Self {
        self.question_type = Some(question_type);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, default: ConfigValue) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_show_if(mut self, show_if: impl Into<String>) -> Self {
        self.show_if = Some(show_if.into());
        self
    }

    /// Check structural well-formedness: non-empty variable, `key=value`
    /// show_if syntax, options only on enum questions. Subquestions are
    /// validated recursively. Referenced show_if variables are not checked
    /// for existence.
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.variable.trim().is_empty() {
            return Err(QuestionError::EmptyVariable);
        }

        if let Some(show_if) = &self.show_if
            && !is_well_formed_show_if(show_if)
        {
            return Err(QuestionError::MalformedShowIf {
                variable: self.variable.clone(),
            });
        }

        if !self.options.is_empty() && self.question_type != Some(QuestionType::Enum) {
            return Err(QuestionError::OptionsWithoutEnum {
                variable: self.variable.clone(),
            });
        }

        for sub in &self.subquestions {
            sub.validate()?;
        }

        Ok(())
    }
}

fn is_well_formed_show_if(expr: &str) -> bool {
    match expr.split_once('=') {
        Some((key, value)) => !key.trim().is_empty() && !value.trim().is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_produces_valid_question() {
        let q = Question::new("service.type", "Service Type")
            .with_type(QuestionType::Enum)
            .with_options(["ClusterIP", "NodePort"])
            .with_group("Networking");
        assert!(q.validate().is_ok());
        assert_eq!(q.options.len(), 2);
    }

    #[test]
    fn test_empty_variable_rejected() {
        let q = Question::new("  ", "Label");
        assert_eq!(q.validate(), Err(QuestionError::EmptyVariable));
    }

    #[test]
    fn test_show_if_well_formed() {
        let q = Question::new("gpu.count", "GPU Count").with_show_if("gpu.enabled=true");
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_show_if_missing_value_rejected() {
        for bad in ["gpu.enabled", "gpu.enabled=", "=true"] {
            let q = Question::new("gpu.count", "GPU Count").with_show_if(bad);
            assert!(q.validate().is_err(), "expected rejection for {bad:?}");
        }
    }

    #[test]
    fn test_options_require_enum_type() {
        let q = Question::new("x", "X")
            .with_type(QuestionType::String)
            .with_options(["a"]);
        assert!(matches!(
            q.validate(),
            Err(QuestionError::OptionsWithoutEnum { .. })
        ));
    }

    #[test]
    fn test_subquestions_validated_recursively() {
        let mut q = Question::new("parent", "Parent");
        q.subquestions.push(Question::new("", "Broken"));
        assert_eq!(q.validate(), Err(QuestionError::EmptyVariable));
    }

    #[test]
    fn test_serialization_omits_unset_fields() {
        let q = Question::new("name", "Application Name");
        let json = serde_json::to_value(&q).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("variable"));
        assert!(obj.contains_key("label"));
    }

    #[test]
    fn test_type_field_serialized_name() {
        let q = Question::new("name", "Name").with_type(QuestionType::Boolean);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["type"], "boolean");
    }
}
