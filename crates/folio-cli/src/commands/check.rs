use anyhow::{anyhow, Result};
use folio_core::{AppConfig, Profile};

/// Validate the config and profile, reporting every problem found.
pub fn run(config: &AppConfig) -> Result<()> {
    let config_path = AppConfig::config_path();
    if config_path.exists() {
        println!("config:  {} OK", config_path.display());
    } else {
        println!("config:  none (defaults in effect, run `folio init`)");
    }

    let profile_path = config.profile_path();
    if !profile_path.exists() {
        println!(
            "profile: none at {} (the embedded sample would be shown)",
            profile_path.display()
        );
        return Ok(());
    }

    let profile = Profile::load(&profile_path)?;
    let problems = profile.problems();
    if problems.is_empty() {
        println!(
            "profile: {} OK ({} projects, {} publications, {} links)",
            profile_path.display(),
            profile.projects.len(),
            profile.publications.len(),
            profile.links.len()
        );
        Ok(())
    } else {
        println!("profile: {} has problems:", profile_path.display());
        for problem in &problems {
            println!("  - {}", problem);
        }
        Err(anyhow!("{} problem(s) found", problems.len()))
    }
}
