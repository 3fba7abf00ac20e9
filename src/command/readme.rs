use anyhow::Result;
use std::path::Path;

use super::installed_tool;

pub async fn run_readme(data_dir: &Path) -> Result<()> {
    let tool = installed_tool(data_dir)?;
    println!("{}", tool.readme());
    Ok(())
}
