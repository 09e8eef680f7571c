//! Scaffold a new post file

use anyhow::Result;
use chrono::NaiveDate;
use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::content::PostType;
use crate::helpers::{display_date, sortable_date};
use crate::Blog;

/// Interactive prompt over an injected input and output, so tests can
/// drive it without a terminal
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask until a non-empty line comes back
    pub fn prompt_nonempty(&mut self, message: &str) -> Result<String> {
        loop {
            write!(self.output, "{}: ", message)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("input ended before a value was entered");
            }
            let value = line.trim();
            if !value.is_empty() {
                return Ok(value.to_string());
            }
            writeln!(self.output, "A value is required.")?;
        }
    }
}

/// Options for the `new` command
pub struct NewPostOptions {
    /// Content collection (target subdirectory), e.g. `blog`
    pub collection: String,
    /// Skip the title prompt
    pub title: Option<String>,
    /// Skip the description prompt
    pub description: Option<String>,
    /// Overwrite an existing file for the same date
    pub force: bool,
}

/// Create a new post, prompting for whatever the options left out
pub fn create_post<R: BufRead, W: Write>(
    blog: &Blog,
    opts: NewPostOptions,
    prompter: &mut Prompter<R, W>,
) -> Result<PathBuf> {
    let title = match opts.title {
        Some(t) if !t.trim().is_empty() => t.trim().to_string(),
        _ => prompter.prompt_nonempty("Title")?,
    };
    let description = match opts.description {
        Some(d) if !d.trim().is_empty() => d.trim().to_string(),
        _ => prompter.prompt_nonempty("Description")?,
    };

    let today = chrono::Local::now().date_naive();
    scaffold(blog, &opts.collection, &title, &description, today, opts.force)
}

/// Write the scaffold file for the given date
pub fn scaffold(
    blog: &Blog,
    collection: &str,
    title: &str,
    description: &str,
    date: NaiveDate,
    force: bool,
) -> Result<PathBuf> {
    let target_dir = blog.content_dir.join(collection);
    // create_dir_all is a no-op when the directory is already there
    fs::create_dir_all(&target_dir)?;

    let file_path = target_dir.join(format!(
        "{}.{}",
        sortable_date(&date),
        blog.config.new_post_ext
    ));

    if file_path.exists() && !force {
        anyhow::bail!(
            "File already exists: {:?} (pass --force to overwrite)",
            file_path
        );
    }

    fs::write(&file_path, render_template(collection, title, description, &date))?;

    tracing::debug!("Wrote scaffold to {:?}", file_path);
    Ok(file_path)
}

fn render_template(collection: &str, title: &str, description: &str, date: &NaiveDate) -> String {
    // Collections named after a post type scaffold that type directly
    let post_type = PostType::parse(collection)
        .map(|t| t.as_str())
        .unwrap_or("article");

    format!(
        r#"---
title: "{}"
description: "{}"
pubDate: "{}"
postType: "{}"
tags: []
---

Write your content here...
"#,
        escape(title),
        escape(description),
        display_date(date),
        post_type
    )
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Run the new command against a real terminal
pub fn run(blog: &Blog, opts: NewPostOptions) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    let path = create_post(blog, opts, &mut prompter)?;
    println!("Created: {:?}", path);
    Ok(())
}
