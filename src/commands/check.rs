//! Validate all content files

use anyhow::Result;
use std::collections::BTreeMap;

use crate::content::loader::{self, FileOutcome};
use crate::Blog;

/// Validate every content file and print every violation found.
/// Fails when any file is invalid, so a build wrapping this aborts.
pub fn run(blog: &Blog) -> Result<()> {
    let reports = blog.check()?;

    let mut failed = 0;
    for report in &reports {
        match &report.outcome {
            FileOutcome::Valid(post) => {
                tracing::debug!("{} ok ({})", report.source, post.post_type().as_str());
            }
            FileOutcome::Invalid(violations) => {
                failed += 1;
                println!("{}:", report.source);
                for violation in violations {
                    println!("  - {}", violation);
                }
            }
            FileOutcome::Unreadable(reason) => {
                failed += 1;
                println!("{}:", report.source);
                println!("  - {}", reason);
            }
        }
    }

    // relatedPosts must name slugs that exist among the valid records
    let references = loader::dangling_references(&reports);
    let mut dangling: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for reference in &references {
        dangling
            .entry(reference.source.as_str())
            .or_default()
            .push(reference.slug.as_str());
    }
    for (source, slugs) in dangling {
        failed += 1;
        println!("{}:", source);
        for slug in slugs {
            println!("  - relatedPosts refers to unknown slug `{}`", slug);
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} content file(s) failed validation", failed, reports.len());
    }

    println!("All {} content file(s) are valid.", reports.len());
    Ok(())
}
