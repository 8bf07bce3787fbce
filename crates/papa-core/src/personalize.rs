use crate::profile::Names;
use regex::{Captures, Regex};
use std::sync::OnceLock;

static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();

fn placeholder_re() -> &'static Regex {
    PLACEHOLDER_RE
        .get_or_init(|| Regex::new(r"\{(partnerName|userName|babyName)\}").unwrap())
}

/// Replace `{partnerName}`, `{userName}`, and `{babyName}` tokens with the
/// resolved names. Single pass over literal braces: inserted values are
/// never rescanned, so a name that itself looks like a placeholder stays as
/// typed.
pub fn substitute(text: &str, names: &Names) -> String {
    placeholder_re()
        .replace_all(text, |caps: &Captures| match &caps[1] {
            "partnerName" => names.partner.clone(),
            "userName" => names.user.clone(),
            _ => names.baby.clone(),
        })
        .into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::UserProfile;

    #[test]
    fn substitutes_with_fallbacks() {
        let profile = UserProfile {
            partner_name: "Lisa".into(),
            user_name: String::new(),
            ..Default::default()
        };
        assert_eq!(
            substitute("Hoi {userName}, groet {partnerName}", &profile.names()),
            "Hoi maat, groet Lisa"
        );
    }

    #[test]
    fn unknown_tokens_stay_literal() {
        let names = Names::default();
        assert_eq!(substitute("{weekNumber} blijft", &names), "{weekNumber} blijft");
        assert_eq!(substitute("geen accolades", &names), "geen accolades");
    }

    #[test]
    fn inserted_values_are_not_rescanned() {
        let profile = UserProfile {
            partner_name: "{userName}".into(),
            user_name: "Tom".into(),
            ..Default::default()
        };
        assert_eq!(
            substitute("{partnerName} en {userName}", &profile.names()),
            "{userName} en Tom"
        );
    }

    #[test]
    fn all_three_tokens() {
        let profile = UserProfile {
            partner_name: "Lisa".into(),
            user_name: "Tom".into(),
            baby_name: "Fien".into(),
            ..Default::default()
        };
        assert_eq!(
            substitute("{userName}, {partnerName} en {babyName}", &profile.names()),
            "Tom, Lisa en Fien"
        );
    }
}
