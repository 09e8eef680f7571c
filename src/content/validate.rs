//! Front-matter validation
//!
//! `validate` turns an untyped front-matter mapping into a typed
//! [`PostRecord`], or reports every violation it finds rather than
//! stopping at the first, so one failed build lists everything to fix.

use chrono::NaiveDate;
use serde_yaml::{Mapping, Value};

use super::post::{CreationType, PostRecord, PostType, PostVariant, ReviewDetails, ReviewTarget};
use super::schema::{self, FieldViolation};
use crate::helpers::parse_date_string;

/// Validate a raw front-matter mapping against the content schema
///
/// The discriminator is resolved first: an unrecognized `postType` is
/// reported alone, since no variant table can be applied to it. A known
/// tag proceeds to a full pass that collects all base and variant
/// violations together.
pub fn validate(raw: &Mapping) -> Result<PostRecord, Vec<FieldViolation>> {
    let post_type = match raw.get("postType") {
        Some(Value::String(s)) => match PostType::parse(s) {
            Some(t) => Some(t),
            None => return Err(vec![FieldViolation::UnknownVariant(s.clone())]),
        },
        Some(Value::Null) | None => None,
        Some(_) => {
            return Err(vec![FieldViolation::TypeMismatch {
                field: "postType".to_string(),
                expected: "a string".to_string(),
            }])
        }
    };

    let mut violations = Vec::new();
    if post_type.is_none() {
        violations.push(FieldViolation::MissingField("postType".to_string()));
    }
    for spec in &schema::BASE_FIELDS {
        if let Some(v) = schema::check_field(spec, raw.get(spec.name)) {
            violations.push(v);
        }
    }
    if let Some(t) = post_type {
        for spec in schema::variant_fields(t) {
            if let Some(v) = schema::check_field(spec, raw.get(spec.name)) {
                violations.push(v);
            }
        }
    }

    let post_type = match post_type {
        Some(t) if violations.is_empty() => t,
        _ => return Err(violations),
    };

    let title = str_field(raw, "title")
        .ok_or_else(|| vec![FieldViolation::MissingField("title".to_string())])?;
    let pub_date = date_field(raw, "pubDate")
        .ok_or_else(|| vec![FieldViolation::MissingField("pubDate".to_string())])?;

    let variant = match post_type {
        PostType::Article => PostVariant::Article,
        PostType::Dev => PostVariant::Dev,
        PostType::Guide => PostVariant::Guide,
        PostType::Review => {
            let target = str_field(raw, "target").and_then(|s| ReviewTarget::parse(&s));
            // Episode fields are only meaningful for a TV-episode review
            let episode = target == Some(ReviewTarget::TvEpisode);
            PostVariant::Review(ReviewDetails {
                target,
                rating: f64_field(raw, "rating"),
                reviewed_at: date_field(raw, "reviewedAt"),
                season: if episode { i64_field(raw, "season") } else { None },
                episode_number: if episode {
                    i64_field(raw, "episodeNumber")
                } else {
                    None
                },
                series_title: if episode {
                    str_field(raw, "seriesTitle")
                } else {
                    None
                },
            })
        }
        PostType::Creation => {
            let creation_type = str_field(raw, "creationType")
                .and_then(|s| CreationType::parse(&s))
                .ok_or_else(|| vec![FieldViolation::MissingField("creationType".to_string())])?;
            PostVariant::Creation { creation_type }
        }
    };

    let slug = slug::slugify(&title);
    Ok(PostRecord {
        title,
        slug,
        description: str_field(raw, "description"),
        pub_date,
        updated_date: date_field(raw, "updatedDate").unwrap_or(pub_date),
        tags: list_field(raw, "tags"),
        hero_image: str_field(raw, "heroImage"),
        related_posts: list_field(raw, "relatedPosts"),
        is_draft: raw.get("isDraft").and_then(Value::as_bool).unwrap_or(false),
        variant,
    })
}

fn str_field(raw: &Mapping, name: &str) -> Option<String> {
    raw.get(name).and_then(Value::as_str).map(String::from)
}

fn date_field(raw: &Mapping, name: &str) -> Option<NaiveDate> {
    raw.get(name).and_then(Value::as_str).and_then(parse_date_string)
}

fn f64_field(raw: &Mapping, name: &str) -> Option<f64> {
    raw.get(name).and_then(Value::as_f64)
}

fn i64_field(raw: &Mapping, name: &str) -> Option<i64> {
    raw.get(name).and_then(Value::as_i64)
}

fn list_field(raw: &Mapping, name: &str) -> Vec<String> {
    match raw.get(name) {
        Some(Value::String(s)) => vec![s.clone()],
        Some(Value::Sequence(seq)) => seq
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_valid_record_for_every_post_type() {
        for (post_type, extra) in [
            ("article", ""),
            ("dev", ""),
            ("guide", ""),
            ("review", "target: film\nrating: 8\n"),
            ("creation", "creationType: knitting\n"),
        ] {
            let raw = record(&format!(
                "title: Hello\ndescription: Desc\npubDate: 2024-03-15\npostType: {}\n{}",
                post_type, extra
            ));
            let post = validate(&raw).unwrap_or_else(|e| panic!("{}: {:?}", post_type, e));
            assert_eq!(post.title, "Hello");
            assert_eq!(post.post_type().as_str(), post_type);
        }
    }

    #[test]
    fn test_defaults_applied() {
        let raw = record("title: Hello\ndescription: D\npubDate: 2024-03-15\npostType: article\n");
        let post = validate(&raw).unwrap();
        assert_eq!(post.updated_date, post.pub_date);
        assert!(post.tags.is_empty());
        assert!(!post.is_draft);
        assert_eq!(post.slug, "hello");
    }

    #[test]
    fn test_explicit_updated_date_kept() {
        let raw = record(
            "title: Hello\ndescription: D\npubDate: 2024-03-15\nupdatedDate: 2024-04-01\npostType: article\n",
        );
        let post = validate(&raw).unwrap();
        assert_eq!(
            post.updated_date,
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
        );
    }

    #[test]
    fn test_missing_title_and_pub_date_both_reported() {
        let raw = record("description: D\npostType: article\n");
        let violations = validate(&raw).unwrap_err();
        assert!(violations.contains(&FieldViolation::MissingField("title".to_string())));
        assert!(violations.contains(&FieldViolation::MissingField("pubDate".to_string())));
    }

    #[test]
    fn test_unknown_post_type_reported_alone() {
        // Base fields are bad too, but an unknown tag is the only report
        let raw = record("postType: poem\nrating: 99\n");
        let violations = validate(&raw).unwrap_err();
        assert_eq!(
            violations,
            vec![FieldViolation::UnknownVariant("poem".to_string())]
        );
    }

    #[test]
    fn test_missing_post_type_reported_with_base_violations() {
        let raw = record("description: D\n");
        let violations = validate(&raw).unwrap_err();
        assert!(violations.contains(&FieldViolation::MissingField("postType".to_string())));
        assert!(violations.contains(&FieldViolation::MissingField("title".to_string())));
    }

    #[test]
    fn test_rating_out_of_range() {
        for rating in ["10.5", "-0.1", "42"] {
            let raw = record(&format!(
                "title: T\npubDate: 2024-01-01\npostType: review\nrating: {}\n",
                rating
            ));
            let violations = validate(&raw).unwrap_err();
            assert!(
                violations
                    .iter()
                    .any(|v| matches!(v, FieldViolation::RangeViolation { field, .. } if field == "rating")),
                "rating {} accepted: {:?}",
                rating,
                violations
            );
        }
    }

    #[test]
    fn test_nan_rating_rejected() {
        let raw = record("title: T\npubDate: 2024-01-01\npostType: review\nrating: .nan\n");
        let violations = validate(&raw).unwrap_err();
        assert!(
            violations
                .iter()
                .any(|v| matches!(v, FieldViolation::RangeViolation { field, .. } if field == "rating")),
            "NaN rating accepted: {:?}",
            violations
        );
    }

    #[test]
    fn test_rating_never_clamped_even_with_other_errors() {
        let raw = record("pubDate: 2024-01-01\npostType: review\nrating: 11\n");
        let violations = validate(&raw).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| matches!(v, FieldViolation::RangeViolation { .. })));
        assert!(violations.contains(&FieldViolation::MissingField("title".to_string())));
    }

    #[test]
    fn test_description_optional_only_for_review() {
        let review = record("title: T\npubDate: 2024-01-01\npostType: review\n");
        assert!(validate(&review).is_ok());

        let article = record("title: T\npubDate: 2024-01-01\npostType: article\n");
        let violations = validate(&article).unwrap_err();
        assert!(violations.contains(&FieldViolation::MissingField("description".to_string())));
    }

    #[test]
    fn test_creation_requires_creation_type() {
        let raw = record("postType: creation\ntitle: Scarf\ndescription: D\npubDate: 2024-01-01\n");
        let violations = validate(&raw).unwrap_err();
        assert!(violations.contains(&FieldViolation::MissingField("creationType".to_string())));
    }

    #[test]
    fn test_tv_episode_fields_populated() {
        let raw = record(
            "title: T\npubDate: 2024-01-01\npostType: review\ntarget: tv-episode\n\
             season: 3\nepisodeNumber: 12\nseriesTitle: \"Bob's Burgers\"\nrating: 9\n",
        );
        let post = validate(&raw).unwrap();
        match post.variant {
            PostVariant::Review(details) => {
                assert_eq!(details.target, Some(ReviewTarget::TvEpisode));
                assert_eq!(details.season, Some(3));
                assert_eq!(details.episode_number, Some(12));
                assert_eq!(details.series_title.as_deref(), Some("Bob's Burgers"));
                assert_eq!(details.rating, Some(9.0));
            }
            other => panic!("expected review, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_review_target() {
        let raw = record("title: T\npubDate: 2024-01-01\npostType: review\ntarget: podcast\n");
        let violations = validate(&raw).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| matches!(v, FieldViolation::TypeMismatch { field, .. } if field == "target")));
    }

    #[test]
    fn test_bad_date_is_type_mismatch() {
        let raw = record("title: T\ndescription: D\npubDate: someday\npostType: article\n");
        let violations = validate(&raw).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| matches!(v, FieldViolation::TypeMismatch { field, .. } if field == "pubDate")));
    }

    #[test]
    fn test_display_form_pub_date_accepted() {
        let raw = record(
            "title: T\ndescription: D\npubDate: \"Mar 15 2024\"\npostType: article\n",
        );
        let post = validate(&raw).unwrap();
        assert_eq!(post.pub_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_tags_preserve_order_and_accept_bare_string() {
        let raw = record(
            "title: T\ndescription: D\npubDate: 2024-01-01\npostType: article\ntags: [b, a, c]\n",
        );
        let post = validate(&raw).unwrap();
        assert_eq!(post.tags, vec!["b", "a", "c"]);

        let raw = record(
            "title: T\ndescription: D\npubDate: 2024-01-01\npostType: article\ntags: notes\n",
        );
        assert_eq!(validate(&raw).unwrap().tags, vec!["notes"]);
    }

    #[test]
    fn test_rating_on_article_is_not_representable() {
        // A flat record would admit this; the tagged variant ignores it
        let raw = record(
            "title: T\ndescription: D\npubDate: 2024-01-01\npostType: article\nrating: 5\n",
        );
        let post = validate(&raw).unwrap();
        assert_eq!(post.variant, PostVariant::Article);
    }
}
