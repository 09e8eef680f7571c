//! Export the content schema as JSON
//!
//! The CMS configuration reads this instead of keeping its own copy of
//! the field definitions.

use anyhow::Result;

use crate::content::schema::schema_json;

pub fn run() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&schema_json())?);
    Ok(())
}
