use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::secret::{InstallationSecret, SecretStore};
use crate::template::{TemplateTool, TOOL_NAME};
use crate::token::{TokenIssuer, TokenScope};

mod init;
mod readme;
mod status;
mod token;

pub use init::run_init;
pub use readme::run_readme;
pub use status::run_status;
pub use token::run_token;

/// Build the tool, creating the installation secret on first use.
pub fn open_tool(data_dir: &Path) -> Result<TemplateTool> {
    let store = SecretStore::new(data_dir)?;
    let secret = store
        .load_or_create()
        .context("Failed to load installation secret")?;
    tool_from_secret(&secret)
}

/// Build the tool from an existing installation secret.
fn installed_tool(data_dir: &Path) -> Result<TemplateTool> {
    let store = SecretStore::new(data_dir)?;
    match store.load().context("Failed to load installation secret")? {
        Some(secret) => tool_from_secret(&secret),
        None => anyhow::bail!(
            "No installation secret found in {:?}. Run 'template-tool init' first.",
            data_dir
        ),
    }
}

fn tool_from_secret(secret: &InstallationSecret) -> Result<TemplateTool> {
    let scope = TokenScope::current(TOOL_NAME);
    debug!("Issuing tokens for {:?}", scope);
    let issuer = TokenIssuer::new(secret.key(), &scope)?;
    Ok(TemplateTool::new(issuer))
}
