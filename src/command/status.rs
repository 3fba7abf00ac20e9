use anyhow::Result;
use std::path::Path;

use crate::secret::{SecretSource, SecretStore, SECRET_ENV};

pub async fn run_status(data_dir: &Path) -> Result<()> {
    let store = SecretStore::new(data_dir)?;

    println!("Data directory: {:?}", data_dir);

    match store.load()? {
        Some(secret) => {
            println!("✅ Installation secret present");
            match secret.source() {
                SecretSource::Environment => {
                    println!("   Source: {} environment variable", SECRET_ENV)
                }
                SecretSource::File(path) => println!("   Source: {:?}", path),
            }
            if let Some(created_at) = secret.created_at() {
                println!("   Created: {}", created_at);
            }
        }
        None => {
            println!("❌ No installation secret");
            println!("   Run 'template-tool init' to create one.");
        }
    }

    Ok(())
}
