use papa_core::profile::UserProfile;
use papa_core::state::ReaderState;
use std::io::Write;
use std::path::Path;

pub fn run(root: &Path, yes: bool) -> anyhow::Result<()> {
    if UserProfile::load(root)?.is_none() {
        println!("Er is geen profiel om te wissen.");
        return Ok(());
    }

    if !yes {
        print!("Alles wissen en opnieuw beginnen? [y/N] ");
        std::io::stdout().flush()?;
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "j" | "ja" | "yes") {
            println!("Niks gewist.");
            return Ok(());
        }
    }

    UserProfile::clear(root)?;
    ReaderState::clear(root)?;
    println!("Profiel gewist. Opnieuw beginnen: papa setup");
    Ok(())
}
