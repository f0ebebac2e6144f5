use anyhow::{Context, Result};
use folio_core::{profile::SAMPLE_PROFILE, AppConfig};

/// Write the default config and the sample profile, refusing to clobber
/// existing files unless forced.
pub fn run(config: &AppConfig, force: bool) -> Result<()> {
    let config_path = AppConfig::config_path();
    if config_path.exists() && !force {
        println!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    } else {
        config
            .save()
            .with_context(|| format!("writing {}", config_path.display()))?;
        println!("Wrote config to {}", config_path.display());
    }

    let profile_path = config.profile_path();
    if profile_path.exists() && !force {
        println!(
            "Profile already exists at {} (use --force to overwrite)",
            profile_path.display()
        );
    } else {
        if let Some(parent) = profile_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&profile_path, SAMPLE_PROFILE)
            .with_context(|| format!("writing {}", profile_path.display()))?;
        println!("Wrote sample profile to {}", profile_path.display());
    }

    println!("Edit the profile, then start the card with `folio`.");
    Ok(())
}
