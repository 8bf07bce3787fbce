use crate::output;
use anyhow::Context;
use papa_core::content::ContentSet;
use papa_core::onboarding::{Advance, Flow, InputKind, QuestionId};
use papa_core::profile::UserProfile;
use papa_core::resolver;
use papa_core::state::ReaderState;
use std::io::Write;
use std::path::Path;

pub struct SetupArgs {
    pub force: bool,
    pub due_date: Option<String>,
    pub partner_name: Option<String>,
    pub first_time: Option<String>,
    pub biggest_worry: Option<String>,
    pub hormonal_approach: Option<String>,
    pub planning_style: Option<String>,
    pub baby_name: Option<String>,
    pub user_name: Option<String>,
}

impl SetupArgs {
    fn non_interactive(&self) -> bool {
        self.due_date.is_some()
            || self.partner_name.is_some()
            || self.first_time.is_some()
            || self.biggest_worry.is_some()
            || self.hormonal_approach.is_some()
            || self.planning_style.is_some()
            || self.baby_name.is_some()
            || self.user_name.is_some()
    }

    fn answer_for(&self, id: QuestionId) -> String {
        let slot = match id {
            QuestionId::DueDate => &self.due_date,
            QuestionId::PartnerName => &self.partner_name,
            QuestionId::FirstTime => &self.first_time,
            QuestionId::BiggestWorry => &self.biggest_worry,
            QuestionId::HormonalApproach => &self.hormonal_approach,
            QuestionId::PlanningStyle => &self.planning_style,
            QuestionId::BabyName => &self.baby_name,
            QuestionId::UserName => &self.user_name,
        };
        slot.clone().unwrap_or_default()
    }
}

pub fn run(root: &Path, args: SetupArgs, json: bool) -> anyhow::Result<()> {
    if UserProfile::load(root)?.is_some() && !args.force {
        anyhow::bail!("er is al een profiel; gebruik --force, of 'papa settings' om iets aan te passen");
    }

    let profile = if args.non_interactive() {
        from_flags(&args)?
    } else {
        interactive()?
    };

    profile.save(root).context("failed to save profile")?;
    // A fresh profile starts reading at today.
    ReaderState::clear(root)?;

    let content = ContentSet::load(root);
    let today = resolver::current_index(&profile, content.available_days());

    if json {
        return output::print_json(&serde_json::json!({
            "saved": true,
            "today_day_number": today + 1,
        }));
    }
    println!("Klaar! Dag {} staat voor je klaar: papa today", today + 1);
    Ok(())
}

// ---------------------------------------------------------------------------
// Non-interactive (flags)
// ---------------------------------------------------------------------------

fn from_flags(args: &SetupArgs) -> anyhow::Result<UserProfile> {
    let mut flow = Flow::new();
    loop {
        let value = args.answer_for(flow.current().id);
        flow.answer(&value)?;
        match flow.advance()? {
            Advance::Next => {}
            Advance::Done => break,
        }
    }
    Ok(flow.finish()?)
}

// ---------------------------------------------------------------------------
// Interactive
// ---------------------------------------------------------------------------

fn interactive() -> anyhow::Result<UserProfile> {
    println!("Oké maat, laten we dit even regelen.");
    println!("('b' = vraag terug, leeg laten mag bij optionele vragen)");

    let mut flow = Flow::new();
    loop {
        let question = flow.current();
        let (step, total) = flow.progress();
        println!("\nVraag {step} van {total}: {}", question.prompt);

        match question.kind {
            InputKind::Date => println!("  (JJJJ-MM-DD)"),
            InputKind::Text { placeholder } => println!("  ({placeholder})"),
            InputKind::Choice { options } => {
                for (i, option) in options.iter().enumerate() {
                    println!("  {}. {}", i + 1, option.label);
                }
            }
        }

        let input = prompt("> ")?;
        if input == "b" {
            if !flow.back() {
                println!("Dit is al de eerste vraag.");
            }
            continue;
        }

        // Choices accept the number from the list or the code itself.
        let value = match question.kind {
            InputKind::Choice { options } => match input.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => options[n - 1].code.to_string(),
                _ => input,
            },
            _ => input,
        };

        match flow.answer(&value) {
            Ok(Some(quip)) => println!("  {quip}"),
            Ok(None) => {}
            Err(e) => {
                println!("  {e}");
                continue;
            }
        }

        match flow.advance() {
            Ok(Advance::Next) => {}
            Ok(Advance::Done) => break,
            Err(e) => println!("  {e}"),
        }
    }

    Ok(flow.finish()?)
}

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{label}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    let read = std::io::stdin().read_line(&mut line)?;
    if read == 0 {
        anyhow::bail!("setup afgebroken (einde invoer)");
    }
    Ok(line.trim().to_string())
}
