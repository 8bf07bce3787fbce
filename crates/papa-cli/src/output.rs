use papa_core::resolver::PREGNANCY_DAYS;
use papa_core::selector::DayView;
use rand::seq::SliceRandom;
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn print_kv(rows: &[(&str, String)]) {
    let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in rows {
        println!("{:width$}  {}", key, value, width = width);
    }
}

// ---------------------------------------------------------------------------
// Day rendering
// ---------------------------------------------------------------------------

pub fn render_day(view: &DayView, is_today: bool, media_url: Option<&str>) {
    println!("WEEK {}", view.week);
    let marker = if is_today { "  (vandaag)" } else { "" };
    println!("Dag {} van {}{}", view.day, PREGNANCY_DAYS, marker);
    println!();
    println!("{}", view.title);
    println!();
    println!("{}", html_to_text(&view.body_html));
    println!();
    println!("Lengte: {} cm | Gewicht: {} gram", view.length_cm, view.weight_gr);

    match (media_url, &view.media_hint) {
        (Some(url), _) => println!("Beeld: {url}"),
        (None, Some(hint)) => println!("Beeld idee: {hint}"),
        (None, None) => {}
    }
    if let Some(url) = &view.more_info {
        println!("Meer info: {url}");
    }
}

pub fn render_empty_day() {
    println!("Geen content beschikbaar.");
    println!("Terug naar het begin: papa day 1");
}

/// Flatten the fixed HTML subset produced by the selector back to terminal
/// text: paragraphs separated by blank lines, bold markers dropped.
pub fn html_to_text(html: &str) -> String {
    html.replace("</p>\n<p>", "\n\n")
        .replace("</p><p>", "\n\n")
        .replace("<p>", "")
        .replace("</p>", "")
        .replace("<strong>", "")
        .replace("</strong>", "")
}

// ---------------------------------------------------------------------------
// "Come back tomorrow"
// ---------------------------------------------------------------------------

const TOMORROW_PHRASES: &[&str] = &[
    "Rustig aan, papa. Morgen staat er weer een nieuwe dag klaar.",
    "Niet spieken. Kom morgen maar terug.",
    "Geduld is papatraining. Tot morgen!",
    "De rest zit nog in de oven. Morgen verder.",
];

/// Presentation-only: the resolver signals the boundary, the phrasing is
/// picked here.
pub fn tomorrow_phrase() -> &'static str {
    TOMORROW_PHRASES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(TOMORROW_PHRASES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_to_text_flattens_subset() {
        assert_eq!(
            html_to_text("<p><strong>Hoi</strong> Lisa</p>\n<p>Tweede</p>"),
            "Hoi Lisa\n\nTweede"
        );
    }

    #[test]
    fn tomorrow_phrase_is_from_the_fixed_set() {
        assert!(TOMORROW_PHRASES.contains(&tomorrow_phrase()));
    }
}
