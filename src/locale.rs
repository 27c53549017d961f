//! Localized string resources.
//!
//! The screening logic is shared; only the text shown to respondents differs
//! between locales.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::questionnaire::{Answer, Question};

/// Language used for answer spellings, prompts and result text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "id")]
    Indonesian,
}

impl Locale {
    /// Spelling of an answer choice as shown on the form.
    pub fn answer_label(self, answer: Answer) -> &'static str {
        match (self, answer) {
            (Locale::English, Answer::Never) => "Never",
            (Locale::English, Answer::Rarely) => "Rarely",
            (Locale::English, Answer::Sometimes) => "Sometimes",
            (Locale::English, Answer::Often) => "Often",
            (Locale::English, Answer::Always) => "Always",
            (Locale::Indonesian, Answer::Never) => "Tidak Pernah",
            (Locale::Indonesian, Answer::Rarely) => "Jarang",
            (Locale::Indonesian, Answer::Sometimes) => "Kadang-kadang",
            (Locale::Indonesian, Answer::Often) => "Sering",
            (Locale::Indonesian, Answer::Always) => "Selalu",
        }
    }

    /// The question as asked on the form.
    pub fn question_prompt(self, question: &Question) -> String {
        match self {
            Locale::English => format!("How often do you experience {}?", question.topic),
            Locale::Indonesian => format!(
                "Seberapa sering Anda mengalami {}?",
                indonesian_topic(question.id).unwrap_or(question.topic)
            ),
        }
    }

    /// Shown with every result.
    pub fn help_notice(self) -> &'static str {
        match self {
            Locale::English => "If you need help, please consult a mental health professional.",
            Locale::Indonesian => {
                "Jika Anda membutuhkan bantuan, silakan berkonsultasi dengan profesional kesehatan mental."
            }
        }
    }

    /// Shown when a submission is rejected as incomplete.
    pub fn incomplete_notice(self) -> &'static str {
        match self {
            Locale::English => "Please answer ALL questions before submitting.",
            Locale::Indonesian => "Harap jawab SEMUA pertanyaan sebelum mengirim.",
        }
    }

    /// Fallback for labels with no known category.
    pub fn description_unavailable(self) -> &'static str {
        match self {
            Locale::English => "Description not available.",
            Locale::Indonesian => "Deskripsi tidak tersedia.",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Indonesian => "id",
        }
    }
}

fn indonesian_topic(question_id: &str) -> Option<&'static str> {
    let topic = match question_id {
        "sleep_quality" => "kualitas tidur",
        "appetite" => "perubahan nafsu makan",
        "interest_in_activities" => "minat dalam beraktivitas",
        "fatigue_levels" => "kelelahan",
        "self_worth" => "perasaan tidak berharga",
        "concentration" => "kesulitan berkonsentrasi",
        "irritability" => "mudah tersinggung",
        "self_harm_thoughts" => "pikiran untuk menyakiti diri sendiri",
        "sleep_disturbances" => "gangguan tidur",
        "aggression" => "agresi",
        "panic_attacks" => "serangan panik",
        "hopelessness" => "keputusasaan",
        "restlessness" => "kegelisahan",
        "energy_levels" => "kekurangan energi",
        _ => return None,
    };
    Some(topic)
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "id" | "indonesian" | "bahasa" => Ok(Locale::Indonesian),
            other => Err(format!("unsupported locale '{other}' (expected 'en' or 'id')")),
        }
    }
}
