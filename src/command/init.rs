use anyhow::Result;
use std::path::Path;

use crate::secret::SecretStore;

pub async fn run_init(data_dir: &Path, force: bool) -> Result<()> {
    let store = SecretStore::new(data_dir)?;

    if store.is_installed() && !force {
        println!("⚠️  Already initialized: {:?}", store.secret_path());
        println!("   Use 'template-tool init --force' to replace the secret.");
        println!("   Replacing it invalidates every token issued so far.");
        return Ok(());
    }

    store.regenerate()?;
    println!("✅ Installation secret written to {:?}", store.secret_path());
    println!("   Run 'template-tool token' to see the unlock token.");

    Ok(())
}
