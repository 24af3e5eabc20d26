//! Export the blog as static HTML

use anyhow::Result;

use crate::generator::Generator;
use crate::Blog;

pub fn run(blog: &Blog) -> Result<()> {
    let count = Generator::new(blog).generate()?;
    println!(
        "Exported {} post(s) to {}",
        count,
        blog.output_dir.display()
    );
    Ok(())
}
