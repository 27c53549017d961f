//! Depression level categories and their canned text.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::locale::Locale;

/// Screening outcome, ordered from least to most severe.
///
/// The classifier treats labels as opaque classes; this ordering only matters
/// for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    NoDepression,
    Mild,
    Moderate,
    Severe,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::NoDepression,
        Category::Mild,
        Category::Moderate,
        Category::Severe,
    ];

    /// Label as it appears in the dataset.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NoDepression => "No depression",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }

    /// Parse a dataset label, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }

    /// Name shown to the respondent.
    #[must_use]
    pub fn display_name(self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.label(),
            Locale::Indonesian => match self {
                Self::NoDepression => "Tidak depresi",
                Self::Mild => "Ringan",
                Self::Moderate => "Sedang",
                Self::Severe => "Berat",
            },
        }
    }

    /// Text shown alongside a screening result.
    #[must_use]
    pub fn description(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::English, Self::NoDepression) => {
                "No signs of depression. Your mental health appears to be stable."
            }
            (Locale::English, Self::Mild) => {
                "Mild depression symptoms. Pay attention to your mental well-being."
            }
            (Locale::English, Self::Moderate) => {
                "Moderate depression symptoms. Consider consulting a mental health professional."
            }
            (Locale::English, Self::Severe) => {
                "Severe depression. Immediate professional help is recommended."
            }
            (Locale::Indonesian, Self::NoDepression) => {
                "Tidak ada tanda-tanda depresi. Kesehatan mental Anda tampak stabil."
            }
            (Locale::Indonesian, Self::Mild) => {
                "Gejala depresi ringan. Perhatikan kesejahteraan mental Anda."
            }
            (Locale::Indonesian, Self::Moderate) => {
                "Gejala depresi sedang. Pertimbangkan untuk berkonsultasi dengan profesional kesehatan mental."
            }
            (Locale::Indonesian, Self::Severe) => {
                "Depresi berat. Bantuan profesional segera sangat disarankan."
            }
        }
    }

    /// Longer description used in the level details table.
    #[must_use]
    pub fn detail(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::English, Self::NoDepression) => {
                "No depression symptoms. Mental health is stable."
            }
            (Locale::English, Self::Mild) => "Mild depression signs. Slight impact on daily life.",
            (Locale::English, Self::Moderate) => "Moderate depression affecting daily functioning.",
            (Locale::English, Self::Severe) => "Severe depression significantly disrupting life.",
            (Locale::Indonesian, Self::NoDepression) => {
                "Tidak ada gejala depresi. Kesehatan mental stabil."
            }
            (Locale::Indonesian, Self::Mild) => {
                "Tanda depresi ringan. Sedikit berdampak pada kehidupan sehari-hari."
            }
            (Locale::Indonesian, Self::Moderate) => {
                "Depresi sedang yang memengaruhi fungsi sehari-hari."
            }
            (Locale::Indonesian, Self::Severe) => {
                "Depresi berat yang sangat mengganggu kehidupan."
            }
        }
    }

    #[must_use]
    pub fn recommendation(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::English, Self::NoDepression) => {
                "Maintain healthy lifestyle and positive activities"
            }
            (Locale::English, Self::Mild) => "Increase positive activities and social support",
            (Locale::English, Self::Moderate) => "Consult a mental health professional",
            (Locale::English, Self::Severe) => "Immediate professional intervention required",
            (Locale::Indonesian, Self::NoDepression) => {
                "Pertahankan gaya hidup sehat dan aktivitas positif"
            }
            (Locale::Indonesian, Self::Mild) => {
                "Tingkatkan aktivitas positif dan dukungan sosial"
            }
            (Locale::Indonesian, Self::Moderate) => {
                "Konsultasikan dengan profesional kesehatan mental"
            }
            (Locale::Indonesian, Self::Severe) => "Diperlukan intervensi profesional segera",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
