//! Declarative content schema
//!
//! One set of field tables drives both build-time validation and the
//! `schema` export consumed by the CMS configuration, so the two can
//! never drift apart.

use serde_json::json;
use serde_yaml::Value;
use thiserror::Error;

use super::post::{CreationType, PostType, ReviewTarget};
use crate::helpers::parse_date_string;

/// A single violation found while validating a front-matter record
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldViolation {
    #[error("missing required field `{0}`")]
    MissingField(String),

    #[error("field `{field}`: expected {expected}")]
    TypeMismatch { field: String, expected: String },

    #[error("unknown postType `{0}` (expected one of: article, dev, guide, review, creation)")]
    UnknownVariant(String),

    #[error("field `{field}`: {value} is outside the range {min}..={max}")]
    RangeViolation {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Shape of a single front-matter field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Free text; `non_empty` rejects the empty string
    Text { non_empty: bool },
    /// A date-coercible string
    Date,
    /// A number constrained to an inclusive range
    Number { min: f64, max: f64 },
    /// A whole number
    Integer,
    Bool,
    /// A list of strings; a bare string is accepted as a one-element list
    TextList,
    /// A list of slugs naming other posts; existence is checked in a
    /// cross-record pass after per-file validation
    SlugList,
    /// One of a closed set of string options
    Select(&'static [&'static str]),
}

/// One field in a schema table
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn text(name: &'static str, required: bool) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Text { non_empty: false },
        required,
    }
}

const fn date(name: &'static str, required: bool) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Date,
        required,
    }
}

/// Fields common to every post type
pub const BASE_FIELDS: [FieldSpec; 7] = [
    FieldSpec {
        name: "title",
        kind: FieldKind::Text { non_empty: true },
        required: true,
    },
    date("pubDate", true),
    date("updatedDate", false),
    FieldSpec {
        name: "tags",
        kind: FieldKind::TextList,
        required: false,
    },
    text("heroImage", false),
    FieldSpec {
        name: "relatedPosts",
        kind: FieldKind::SlugList,
        required: false,
    },
    FieldSpec {
        name: "isDraft",
        kind: FieldKind::Bool,
        required: false,
    },
];

const ARTICLE_FIELDS: [FieldSpec; 1] = [text("description", true)];

const REVIEW_FIELDS: [FieldSpec; 7] = [
    text("description", false),
    FieldSpec {
        name: "target",
        kind: FieldKind::Select(&ReviewTarget::OPTIONS),
        required: false,
    },
    FieldSpec {
        name: "rating",
        kind: FieldKind::Number { min: 0.0, max: 10.0 },
        required: false,
    },
    date("reviewedAt", false),
    FieldSpec {
        name: "season",
        kind: FieldKind::Integer,
        required: false,
    },
    FieldSpec {
        name: "episodeNumber",
        kind: FieldKind::Integer,
        required: false,
    },
    text("seriesTitle", false),
];

const CREATION_FIELDS: [FieldSpec; 2] = [
    text("description", true),
    FieldSpec {
        name: "creationType",
        kind: FieldKind::Select(&CreationType::OPTIONS),
        required: true,
    },
];

/// Extra fields layered on top of the base fields for a post type
pub fn variant_fields(post_type: PostType) -> &'static [FieldSpec] {
    match post_type {
        PostType::Article | PostType::Dev | PostType::Guide => &ARTICLE_FIELDS,
        PostType::Review => &REVIEW_FIELDS,
        PostType::Creation => &CREATION_FIELDS,
    }
}

/// Check one field value against its spec
///
/// Returns `None` when the value conforms. An absent or null value is a
/// `MissingField` only when the spec requires it.
pub fn check_field(spec: &FieldSpec, value: Option<&Value>) -> Option<FieldViolation> {
    let value = match value {
        None | Some(Value::Null) => {
            if spec.required {
                return Some(FieldViolation::MissingField(spec.name.to_string()));
            }
            return None;
        }
        Some(v) => v,
    };

    match spec.kind {
        FieldKind::Text { non_empty } => match value.as_str() {
            Some(s) if non_empty && s.trim().is_empty() => Some(FieldViolation::TypeMismatch {
                field: spec.name.to_string(),
                expected: "a non-empty string".to_string(),
            }),
            Some(_) => None,
            None => Some(FieldViolation::TypeMismatch {
                field: spec.name.to_string(),
                expected: "a string".to_string(),
            }),
        },
        FieldKind::Date => match value.as_str().map(parse_date_string) {
            Some(Some(_)) => None,
            _ => Some(FieldViolation::TypeMismatch {
                field: spec.name.to_string(),
                expected: "a date such as 2024-03-15".to_string(),
            }),
        },
        FieldKind::Number { min, max } => match value.as_f64() {
            // NaN compares false against both bounds, so test containment
            Some(n) if !(n >= min && n <= max) => Some(FieldViolation::RangeViolation {
                field: spec.name.to_string(),
                value: n,
                min,
                max,
            }),
            Some(_) => None,
            None => Some(FieldViolation::TypeMismatch {
                field: spec.name.to_string(),
                expected: "a number".to_string(),
            }),
        },
        FieldKind::Integer => match value.as_i64() {
            Some(_) => None,
            None => Some(FieldViolation::TypeMismatch {
                field: spec.name.to_string(),
                expected: "an integer".to_string(),
            }),
        },
        FieldKind::Bool => match value.as_bool() {
            Some(_) => None,
            None => Some(FieldViolation::TypeMismatch {
                field: spec.name.to_string(),
                expected: "a boolean".to_string(),
            }),
        },
        FieldKind::TextList | FieldKind::SlugList => match value {
            Value::String(_) => None,
            Value::Sequence(items) => {
                if items.iter().all(|i| i.as_str().is_some()) {
                    None
                } else {
                    Some(FieldViolation::TypeMismatch {
                        field: spec.name.to_string(),
                        expected: "a list of strings".to_string(),
                    })
                }
            }
            _ => Some(FieldViolation::TypeMismatch {
                field: spec.name.to_string(),
                expected: "a list of strings".to_string(),
            }),
        },
        FieldKind::Select(options) => match value.as_str() {
            Some(s) if options.contains(&s) => None,
            _ => Some(FieldViolation::TypeMismatch {
                field: spec.name.to_string(),
                expected: format!("one of: {}", options.join(", ")),
            }),
        },
    }
}

impl FieldSpec {
    fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::Map::new();
        obj.insert("name".into(), json!(self.name));
        obj.insert("required".into(), json!(self.required));
        match self.kind {
            FieldKind::Text { non_empty } => {
                obj.insert("kind".into(), json!("text"));
                if non_empty {
                    obj.insert("nonEmpty".into(), json!(true));
                }
            }
            FieldKind::Date => {
                obj.insert("kind".into(), json!("date"));
            }
            FieldKind::Number { min, max } => {
                obj.insert("kind".into(), json!("number"));
                obj.insert("min".into(), json!(min));
                obj.insert("max".into(), json!(max));
            }
            FieldKind::Integer => {
                obj.insert("kind".into(), json!("integer"));
            }
            FieldKind::Bool => {
                obj.insert("kind".into(), json!("boolean"));
            }
            FieldKind::TextList => {
                obj.insert("kind".into(), json!("list"));
                obj.insert("item".into(), json!("text"));
            }
            FieldKind::SlugList => {
                obj.insert("kind".into(), json!("list"));
                obj.insert("item".into(), json!("reference"));
            }
            FieldKind::Select(options) => {
                obj.insert("kind".into(), json!("select"));
                obj.insert("options".into(), json!(options));
            }
        }
        serde_json::Value::Object(obj)
    }
}

/// The whole schema as JSON, for the CMS configuration to consume
pub fn schema_json() -> serde_json::Value {
    let post_types: Vec<&str> = PostType::ALL.iter().map(|t| t.as_str()).collect();
    let base: Vec<_> = BASE_FIELDS.iter().map(|f| f.to_json()).collect();
    let mut variants = serde_json::Map::new();
    for t in PostType::ALL {
        let fields: Vec<_> = variant_fields(t).iter().map(|f| f.to_json()).collect();
        variants.insert(t.as_str().to_string(), json!(fields));
    }
    json!({
        "discriminator": {
            "name": "postType",
            "kind": "select",
            "options": post_types,
        },
        "base": base,
        "variants": variants,
    })
}
