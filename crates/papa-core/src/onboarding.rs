use crate::error::{PapaError, Result};
use crate::profile::{parse_due_date, UserProfile};

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionId {
    DueDate,
    PartnerName,
    FirstTime,
    BiggestWorry,
    HormonalApproach,
    PlanningStyle,
    BabyName,
    UserName,
}

impl QuestionId {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionId::DueDate => "due_date",
            QuestionId::PartnerName => "partner_name",
            QuestionId::FirstTime => "first_time",
            QuestionId::BiggestWorry => "biggest_worry",
            QuestionId::HormonalApproach => "hormonal_approach",
            QuestionId::PlanningStyle => "planning_style",
            QuestionId::BabyName => "baby_name",
            QuestionId::UserName => "user_name",
        }
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub code: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Date,
    Text { placeholder: &'static str },
    Choice { options: &'static [ChoiceOption] },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub kind: InputKind,
    pub required: bool,
}

const FIRST_TIME_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        code: "first_clueless",
        label: "Ja, en ik heb nog geen flauw idee waar ik aan begin",
    },
    ChoiceOption {
        code: "veteran",
        label: "Nee, ik ken de drill al van de vorige keer(en)",
    },
    ChoiceOption {
        code: "first_warned",
        label: "Ja, maar vrienden hebben me al 'voorbereid' met horrorverhalen",
    },
];

const BIGGEST_WORRY_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        code: "normal_again",
        label: "Of ze ooit weer wordt zoals ze was",
    },
    ChoiceOption {
        code: "money",
        label: "Of ik dit financieel ga overleven zonder rijst-en-bonen dieet",
    },
    ChoiceOption {
        code: "good_father",
        label: "Of ik wel een goede vader ga worden",
    },
    ChoiceOption {
        code: "freedom",
        label: "Of mijn vrijheid nu definitief voorbij is",
    },
    ChoiceOption {
        code: "everything",
        label: "Eigenlijk van alles een beetje",
    },
];

const HORMONAL_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        code: "agree_nod",
        label: "Knikken, \"ja schat\" zeggen en hopen dat het overwaait",
    },
    ChoiceOption {
        code: "hide",
        label: "Strategisch wegduiken tot de storm voorbij is",
    },
    ChoiceOption {
        code: "chocolate",
        label: "Chocola en ijsjes inslaan als verdedigingslinie",
    },
    ChoiceOption {
        code: "figuring_out",
        label: "Ik ben nog steeds aan het uitzoeken wat werkt",
    },
];

const PLANNING_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        code: "spreadsheet",
        label: "Ik heb al een spreadsheet met babynamen en budgetten",
    },
    ChoiceOption {
        code: "go_with_flow",
        label: "Ik zie wel wat er op mijn pad komt, komt goed",
    },
    ChoiceOption {
        code: "balanced",
        label: "Beetje van beide: plannen maken maar flexibel blijven",
    },
];

const QUESTIONS: &[Question] = &[
    Question {
        id: QuestionId::DueDate,
        prompt: "Wanneer is ze uitgerekend?",
        kind: InputKind::Date,
        required: true,
    },
    Question {
        id: QuestionId::PartnerName,
        prompt: "Hoe noem je d'r meestal? We gebruiken dit in de verhalen.",
        kind: InputKind::Text {
            placeholder: "Schat, liefje, bij haar naam, of iets anders...",
        },
        required: true,
    },
    Question {
        id: QuestionId::FirstTime,
        prompt: "Eerste keer papa worden, of ken je dit circus al?",
        kind: InputKind::Choice {
            options: FIRST_TIME_OPTIONS,
        },
        required: true,
    },
    Question {
        id: QuestionId::BiggestWorry,
        prompt: "Eerlijk gezegd, waar lig je 's nachts het meest wakker van?",
        kind: InputKind::Choice {
            options: BIGGEST_WORRY_OPTIONS,
        },
        required: true,
    },
    Question {
        id: QuestionId::HormonalApproach,
        prompt: "Hoe ga je om met haar hormonale buien en rare cravings?",
        kind: InputKind::Choice {
            options: HORMONAL_OPTIONS,
        },
        required: true,
    },
    Question {
        id: QuestionId::PlanningStyle,
        prompt: "Ben je iemand die alles tot in detail plant, of ga je gewoon zien wat er gebeurt?",
        kind: InputKind::Choice {
            options: PLANNING_OPTIONS,
        },
        required: true,
    },
    Question {
        id: QuestionId::BabyName,
        prompt: "Hoe wil je dat we de kleine noemen?",
        kind: InputKind::Text {
            placeholder: "De naam die je al gekozen hebt, of laat leeg voor \"de kleine\"",
        },
        required: false,
    },
    Question {
        id: QuestionId::UserName,
        prompt: "En hoe kunnen we jou noemen? Maakt het wat persoonlijker.",
        kind: InputKind::Text {
            placeholder: "Je voornaam, bijnaam, of laat leeg voor 'maat'",
        },
        required: false,
    },
];

pub fn questions() -> &'static [Question] {
    QUESTIONS
}

pub fn question(id: QuestionId) -> &'static Question {
    QUESTIONS.iter().find(|q| q.id == id).expect("known question")
}

/// One-liner shown after a choice answer. Text answers get none.
pub fn feedback(id: QuestionId, code: &str) -> Option<&'static str> {
    let quip = match (id, code) {
        (QuestionId::FirstTime, "first_clueless") => {
            "Mooi, dan leer je het gewoon onderweg. Net als autorijden, maar dan met meer geschreeuw."
        }
        (QuestionId::FirstTime, "veteran") => "Veteraan! Je weet dus al dat slapen een luxe wordt.",
        (QuestionId::FirstTime, "first_warned") => {
            "Ah, je vrienden hebben je al 'voorbereid'. Vergeet de helft, de rest valt wel mee."
        }
        (QuestionId::BiggestWorry, "normal_again") => {
            "Spoiler alert: ze wordt beter dan de oude versie."
        }
        (QuestionId::BiggestWorry, "money") => {
            "Welkom bij de club. Rijst met bonen wordt je beste vriend."
        }
        (QuestionId::BiggestWorry, "good_father") => {
            "Het feit dat je je zorgen maakt, betekent dat je het al snapt."
        }
        (QuestionId::BiggestWorry, "freedom") => {
            "Vrijheid wordt gewoon anders gedefinieerd. Netflix om 23:00 is het nieuwe uitgaan."
        }
        (QuestionId::BiggestWorry, "everything") => "Eerlijk. Dat mag ook gewoon.",
        (QuestionId::HormonalApproach, "agree_nod") => {
            "Klassieke tactiek. Works 60% of the time, every time."
        }
        (QuestionId::HormonalApproach, "hide") => {
            "Survival mode activated. Niet de meest heldhaftige, maar wel effectief."
        }
        (QuestionId::HormonalApproach, "chocolate") => "Smart man. Chocola lost bijna alles op.",
        (QuestionId::HormonalApproach, "figuring_out") => "Tip: chocola. Altijd chocola.",
        (QuestionId::PlanningStyle, "spreadsheet") => {
            "Respect. Maar bereid je voor: de baby heeft je spreadsheet niet gelezen."
        }
        (QuestionId::PlanningStyle, "go_with_flow") => {
            "Zen-master approach. Kan goed uitpakken... of compleet chaos worden."
        }
        (QuestionId::PlanningStyle, "balanced") => {
            "Verstandig. Plan A tot Z, maar verwacht plan \u{03a9}."
        }
        _ => return None,
    };
    Some(quip)
}

// ---------------------------------------------------------------------------
// Flow
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next,
    Done,
}

/// The linear questionnaire: forward with validation, back one step at a
/// time, finish into a [`UserProfile`].
#[derive(Debug, Clone)]
pub struct Flow {
    step: usize,
    answers: Vec<String>,
}

impl Default for Flow {
    fn default() -> Self {
        Self::new()
    }
}

impl Flow {
    pub fn new() -> Self {
        Self {
            step: 0,
            answers: vec![String::new(); QUESTIONS.len()],
        }
    }

    /// Prefill from an existing profile, for settings edits.
    pub fn from_profile(profile: &UserProfile) -> Self {
        let mut flow = Self::new();
        for (i, q) in QUESTIONS.iter().enumerate() {
            flow.answers[i] = match q.id {
                QuestionId::DueDate => profile.due_date.clone(),
                QuestionId::PartnerName => profile.partner_name.clone(),
                QuestionId::FirstTime => profile.first_time.clone(),
                QuestionId::BiggestWorry => profile.biggest_worry.clone(),
                QuestionId::HormonalApproach => profile.hormonal_approach.clone(),
                QuestionId::PlanningStyle => profile.planning_style.clone(),
                QuestionId::BabyName => profile.baby_name.clone(),
                QuestionId::UserName => profile.user_name.clone(),
            };
        }
        flow
    }

    pub fn current(&self) -> &'static Question {
        &QUESTIONS[self.step]
    }

    pub fn current_answer(&self) -> &str {
        &self.answers[self.step]
    }

    /// (1-based step, total), for "Vraag 3 van 8" progress lines.
    pub fn progress(&self) -> (usize, usize) {
        (self.step + 1, QUESTIONS.len())
    }

    pub fn is_last(&self) -> bool {
        self.step == QUESTIONS.len() - 1
    }

    /// Validate and store an answer for the current question. Returns the
    /// feedback quip for choice answers.
    pub fn answer(&mut self, raw: &str) -> Result<Option<&'static str>> {
        let question = self.current();
        let value = raw.trim();
        if !value.is_empty() {
            validate(question, value)?;
        }
        self.answers[self.step] = value.to_string();
        match question.kind {
            InputKind::Choice { .. } if !value.is_empty() => Ok(feedback(question.id, value)),
            _ => Ok(None),
        }
    }

    /// Move to the next question; a required question blocks while empty.
    pub fn advance(&mut self) -> Result<Advance> {
        let question = self.current();
        if question.required && self.answers[self.step].is_empty() {
            return Err(PapaError::AnswerRequired(question.id.to_string()));
        }
        if self.is_last() {
            Ok(Advance::Done)
        } else {
            self.step += 1;
            Ok(Advance::Next)
        }
    }

    /// Back one step. Returns false at the first question.
    pub fn back(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        true
    }

    /// Materialize the profile. Optional names are stored verbatim (possibly
    /// empty); display fallbacks are applied later.
    pub fn finish(&self) -> Result<UserProfile> {
        for (i, q) in QUESTIONS.iter().enumerate() {
            if q.required && self.answers[i].is_empty() {
                return Err(PapaError::AnswerRequired(q.id.to_string()));
            }
        }
        let get = |id: QuestionId| -> String {
            QUESTIONS
                .iter()
                .position(|q| q.id == id)
                .map(|i| self.answers[i].clone())
                .unwrap_or_default()
        };
        Ok(UserProfile {
            due_date: get(QuestionId::DueDate),
            partner_name: get(QuestionId::PartnerName),
            user_name: get(QuestionId::UserName),
            baby_name: get(QuestionId::BabyName),
            first_time: get(QuestionId::FirstTime),
            biggest_worry: get(QuestionId::BiggestWorry),
            hormonal_approach: get(QuestionId::HormonalApproach),
            planning_style: get(QuestionId::PlanningStyle),
        })
    }
}

/// Validate a non-empty answer against the question's input kind.
pub fn validate(question: &Question, value: &str) -> Result<()> {
    match question.kind {
        InputKind::Date => {
            if parse_due_date(value).is_none() {
                return Err(PapaError::InvalidDueDate(value.to_string()));
            }
            Ok(())
        }
        InputKind::Text { .. } => Ok(()),
        InputKind::Choice { options } => {
            if options.iter().any(|o| o.code == value) {
                Ok(())
            } else {
                Err(PapaError::InvalidAnswer {
                    question: question.id.to_string(),
                    answer: value.to_string(),
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_flow() -> Flow {
        let mut flow = Flow::new();
        let answers = [
            "2026-11-01",
            "Lisa",
            "first_clueless",
            "money",
            "chocolate",
            "balanced",
            "",
            "Tom",
        ];
        for (i, a) in answers.iter().enumerate() {
            flow.answer(a).unwrap();
            if i < answers.len() - 1 {
                assert_eq!(flow.advance().unwrap(), Advance::Next);
            }
        }
        flow
    }

    #[test]
    fn eight_questions_in_fixed_order() {
        let ids: Vec<_> = questions().iter().map(|q| q.id).collect();
        assert_eq!(
            ids,
            vec![
                QuestionId::DueDate,
                QuestionId::PartnerName,
                QuestionId::FirstTime,
                QuestionId::BiggestWorry,
                QuestionId::HormonalApproach,
                QuestionId::PlanningStyle,
                QuestionId::BabyName,
                QuestionId::UserName,
            ]
        );
    }

    #[test]
    fn full_flow_produces_profile() {
        let mut flow = complete_flow();
        assert_eq!(flow.advance().unwrap(), Advance::Done);
        let profile = flow.finish().unwrap();
        assert_eq!(profile.due_date, "2026-11-01");
        assert_eq!(profile.partner_name, "Lisa");
        assert_eq!(profile.baby_name, "");
        assert_eq!(profile.user_name, "Tom");
        assert_eq!(profile.hormonal_approach, "chocolate");
    }

    #[test]
    fn required_question_blocks_advance() {
        let mut flow = Flow::new();
        assert!(matches!(
            flow.advance(),
            Err(PapaError::AnswerRequired(_))
        ));
    }

    #[test]
    fn optional_question_allows_empty() {
        let flow = complete_flow();
        // baby_name stayed empty, finish still succeeds.
        assert!(flow.finish().is_ok());
    }

    #[test]
    fn invalid_due_date_rejected() {
        let mut flow = Flow::new();
        assert!(matches!(
            flow.answer("volgende week"),
            Err(PapaError::InvalidDueDate(_))
        ));
    }

    #[test]
    fn invalid_choice_code_rejected() {
        let mut flow = Flow::new();
        flow.answer("2026-11-01").unwrap();
        flow.advance().unwrap();
        flow.answer("Lisa").unwrap();
        flow.advance().unwrap();
        assert!(matches!(
            flow.answer("maybe"),
            Err(PapaError::InvalidAnswer { .. })
        ));
    }

    #[test]
    fn choice_answer_yields_feedback() {
        let mut flow = Flow::new();
        flow.answer("2026-11-01").unwrap();
        flow.advance().unwrap();
        flow.answer("Lisa").unwrap();
        flow.advance().unwrap();
        let quip = flow.answer("veteran").unwrap();
        assert_eq!(
            quip,
            Some("Veteraan! Je weet dus al dat slapen een luxe wordt.")
        );
    }

    #[test]
    fn back_walks_one_step() {
        let mut flow = Flow::new();
        assert!(!flow.back());
        flow.answer("2026-11-01").unwrap();
        flow.advance().unwrap();
        assert!(flow.back());
        assert_eq!(flow.current().id, QuestionId::DueDate);
        assert_eq!(flow.current_answer(), "2026-11-01");
    }

    #[test]
    fn prefill_from_profile() {
        let profile = UserProfile {
            due_date: "2026-11-01".into(),
            partner_name: "Lisa".into(),
            ..Default::default()
        };
        let flow = Flow::from_profile(&profile);
        assert_eq!(flow.current_answer(), "2026-11-01");
    }

    #[test]
    fn progress_counts_from_one() {
        let flow = Flow::new();
        assert_eq!(flow.progress(), (1, 8));
    }
}
