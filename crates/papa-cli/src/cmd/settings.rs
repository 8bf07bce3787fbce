use crate::output;
use anyhow::Context;
use clap::Subcommand;
use papa_core::onboarding::{self, QuestionId};
use papa_core::profile::UserProfile;
use papa_core::PapaError;
use std::path::Path;

#[derive(Subcommand)]
pub enum SettingsSubcommand {
    /// Show the saved profile
    Show,
    /// Update one profile field (e.g. `papa settings set due-date 2026-11-01`)
    Set { field: String, value: String },
}

pub fn run(root: &Path, subcmd: SettingsSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        SettingsSubcommand::Show => show(root, json),
        SettingsSubcommand::Set { field, value } => set(root, &field, &value, json),
    }
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let profile = UserProfile::load(root)?.ok_or(PapaError::NotOnboarded)?;

    if json {
        return output::print_json(&profile);
    }

    output::print_kv(&[
        ("due-date", profile.due_date.clone()),
        ("partner-name", profile.partner_name.clone()),
        ("baby-name", profile.baby_name.clone()),
        ("user-name", profile.user_name.clone()),
        ("first-time", profile.first_time.clone()),
        ("biggest-worry", profile.biggest_worry.clone()),
        ("hormonal-approach", profile.hormonal_approach.clone()),
        ("planning-style", profile.planning_style.clone()),
    ]);
    Ok(())
}

fn set(root: &Path, field: &str, value: &str, json: bool) -> anyhow::Result<()> {
    let mut profile = UserProfile::load(root)?.ok_or(PapaError::NotOnboarded)?;

    let id = field_id(field)?;
    let value = value.trim();
    if !value.is_empty() {
        onboarding::validate(onboarding::question(id), value)
            .with_context(|| format!("invalid value for '{field}'"))?;
    }

    let slot = match id {
        QuestionId::DueDate => &mut profile.due_date,
        QuestionId::PartnerName => &mut profile.partner_name,
        QuestionId::FirstTime => &mut profile.first_time,
        QuestionId::BiggestWorry => &mut profile.biggest_worry,
        QuestionId::HormonalApproach => &mut profile.hormonal_approach,
        QuestionId::PlanningStyle => &mut profile.planning_style,
        QuestionId::BabyName => &mut profile.baby_name,
        QuestionId::UserName => &mut profile.user_name,
    };
    *slot = value.to_string();

    profile.save(root).context("failed to save profile")?;

    if json {
        output::print_json(&profile)?;
    } else {
        println!("Opgeslagen: {field}");
    }
    Ok(())
}

fn field_id(field: &str) -> Result<QuestionId, PapaError> {
    match field {
        "due-date" => Ok(QuestionId::DueDate),
        "partner-name" => Ok(QuestionId::PartnerName),
        "first-time" => Ok(QuestionId::FirstTime),
        "biggest-worry" => Ok(QuestionId::BiggestWorry),
        "hormonal-approach" => Ok(QuestionId::HormonalApproach),
        "planning-style" => Ok(QuestionId::PlanningStyle),
        "baby-name" => Ok(QuestionId::BabyName),
        "user-name" => Ok(QuestionId::UserName),
        _ => Err(PapaError::UnknownField(field.to_string())),
    }
}
