//! List site content

use anyhow::Result;
use std::collections::HashMap;

use crate::content::loader::ContentLoader;
use crate::Blog;

/// List site content by type
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    let loader = ContentLoader::new(blog);

    match content_type {
        "post" | "posts" => {
            let posts = loader.load_posts()?;
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}]",
                    post.pub_date.format("%Y-%m-%d"),
                    post.title,
                    post.post_type().as_str()
                );
            }
        }
        "tag" | "tags" => {
            let posts = loader.load_posts()?;
            let mut tags: HashMap<String, usize> = HashMap::new();
            for post in &posts {
                for tag in &post.tags {
                    *tags.entry(tag.clone()).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            for (tag, count) in sorted_by_count(tags) {
                println!("  {} ({})", tag, count);
            }
        }
        "type" | "types" => {
            let posts = loader.load_posts()?;
            let mut types: HashMap<&'static str, usize> = HashMap::new();
            for post in &posts {
                *types.entry(post.post_type().as_str()).or_insert(0) += 1;
            }
            println!("Post types ({}):", types.len());
            for (post_type, count) in sorted_by_count(types) {
                println!("  {} ({})", post_type, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, tag, type",
                content_type
            );
        }
    }

    Ok(())
}

/// Count-descending order, ties broken by name for stable output
fn sorted_by_count<T: Ord>(counts: HashMap<T, usize>) -> Vec<(T, usize)> {
    let mut items: Vec<_> = counts.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    items
}
