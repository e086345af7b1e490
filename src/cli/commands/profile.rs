use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::profile::Profile;
use crate::ui::messages::{info, success};

/// Show or update the master data that gets merged into every
/// submission at submit time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Profile {
        show,
        vorname,
        nachname,
        geburtsdatum,
        personalnummer,
        einsatzort,
        gkz,
    } = cmd
    {
        let pool = open_pool(cfg)?;

        let updates = [
            vorname, nachname, geburtsdatum, personalnummer, einsatzort, gkz,
        ];
        let has_updates = updates.iter().any(|v| v.is_some());

        if has_updates {
            let mut profile = queries::get_profile(&pool.conn, &cfg.user)?.unwrap_or_default();

            apply(&mut profile.vorname, vorname);
            apply(&mut profile.nachname, nachname);
            apply(&mut profile.geburtsdatum, geburtsdatum);
            apply(&mut profile.personalnummer, personalnummer);
            apply(&mut profile.einsatzort, einsatzort);
            apply(&mut profile.gkz, gkz);

            queries::save_profile(&pool.conn, &cfg.user, &profile)?;
            success(format!("Profile updated for user '{}'.", cfg.user));
        }

        if *show || !has_updates {
            match queries::get_profile(&pool.conn, &cfg.user)? {
                Some(p) => print_profile(&cfg.user, &p),
                None => info(format!("No profile stored for user '{}'.", cfg.user)),
            }
        }
    }

    Ok(())
}

fn apply(target: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        *target = v.trim().to_string();
    }
}

fn print_profile(user: &str, p: &Profile) {
    println!("Profile of '{user}':");
    println!("  Vorname:        {}", p.vorname);
    println!("  Nachname:       {}", p.nachname);
    println!("  Geburtsdatum:   {}", p.geburtsdatum);
    println!("  Pers.-Nr.:      {}", p.personalnummer);
    println!("  Einsatzort:     {}", p.einsatzort);
    println!("  GKZ:            {}", p.gkz);
}
