use anyhow::Result;
use std::path::Path;

use super::installed_tool;

pub async fn run_token(data_dir: &Path) -> Result<()> {
    let tool = installed_tool(data_dir)?;
    println!("{}", tool.token());
    Ok(())
}
