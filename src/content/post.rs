//! Typed post record model
//!
//! A validated post is a tagged variant type: the fields that only make
//! sense for one post type live inside that type's variant, so a record
//! with, say, a rating on a plain article cannot be constructed.

use chrono::NaiveDate;
use serde::Serialize;

/// The post-type discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Article,
    Dev,
    Guide,
    Review,
    Creation,
}

impl PostType {
    pub const ALL: [PostType; 5] = [
        PostType::Article,
        PostType::Dev,
        PostType::Guide,
        PostType::Review,
        PostType::Creation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Article => "article",
            PostType::Dev => "dev",
            PostType::Guide => "guide",
            PostType::Review => "review",
            PostType::Creation => "creation",
        }
    }

    pub fn parse(s: &str) -> Option<PostType> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}

/// What a review is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewTarget {
    Film,
    TvEpisode,
    TvSeries,
    Youtube,
    Cosmetic,
    Book,
    Article,
}

impl ReviewTarget {
    pub const OPTIONS: [&'static str; 7] = [
        "film",
        "tv-episode",
        "tv-series",
        "youtube",
        "cosmetic",
        "book",
        "article",
    ];

    pub fn parse(s: &str) -> Option<ReviewTarget> {
        match s {
            "film" => Some(ReviewTarget::Film),
            "tv-episode" => Some(ReviewTarget::TvEpisode),
            "tv-series" => Some(ReviewTarget::TvSeries),
            "youtube" => Some(ReviewTarget::Youtube),
            "cosmetic" => Some(ReviewTarget::Cosmetic),
            "book" => Some(ReviewTarget::Book),
            "article" => Some(ReviewTarget::Article),
            _ => None,
        }
    }
}

/// Kind of handmade creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CreationType {
    Knitting,
    Beading,
    Sewing,
    Other,
}

impl CreationType {
    pub const OPTIONS: [&'static str; 4] = ["knitting", "beading", "sewing", "other"];

    pub fn parse(s: &str) -> Option<CreationType> {
        match s {
            "knitting" => Some(CreationType::Knitting),
            "beading" => Some(CreationType::Beading),
            "sewing" => Some(CreationType::Sewing),
            "other" => Some(CreationType::Other),
            _ => None,
        }
    }
}

/// Review-specific fields; all optional within the variant.
/// The episode fields only carry data when `target` is a TV episode.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDetails {
    pub target: Option<ReviewTarget>,
    /// Inclusive 0-10 scale
    pub rating: Option<f64>,
    pub reviewed_at: Option<NaiveDate>,
    pub season: Option<i64>,
    pub episode_number: Option<i64>,
    pub series_title: Option<String>,
}

/// Variant payload selected by `postType`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "postType", rename_all = "lowercase")]
pub enum PostVariant {
    Article,
    Dev,
    Guide,
    Review(ReviewDetails),
    Creation { creation_type: CreationType },
}

impl PostVariant {
    pub fn post_type(&self) -> PostType {
        match self {
            PostVariant::Article => PostType::Article,
            PostVariant::Dev => PostType::Dev,
            PostVariant::Guide => PostType::Guide,
            PostVariant::Review(_) => PostType::Review,
            PostVariant::Creation { .. } => PostType::Creation,
        }
    }
}

/// A fully validated post record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    /// Post title
    pub title: String,

    /// URL-friendly name derived from the title
    pub slug: String,

    /// Required for every variant except reviews
    pub description: Option<String>,

    /// Publication date
    pub pub_date: NaiveDate,

    /// Last updated date; defaults to the publication date
    pub updated_date: NaiveDate,

    /// Post tags, in the order they were written
    pub tags: Vec<String>,

    /// Hero image asset path
    pub hero_image: Option<String>,

    /// Slugs of related posts
    pub related_posts: Vec<String>,

    /// Drafts are validated but hidden from listings
    pub is_draft: bool,

    /// Variant-specific payload
    pub variant: PostVariant,
}

impl PostRecord {
    pub fn post_type(&self) -> PostType {
        self.variant.post_type()
    }
}
