//! The fixed 15-item question bank.
//!
//! Items 1–6 use a four-point frequency scale (0–3); items 7–15 use a
//! five-point scale (0–4). The scale is fixed per question at authoring time.
//! Every item carries its text in each supported language; ids, categories and
//! option values are identical across languages.

use std::sync::OnceLock;

use crate::i18n::Language;
use crate::models::question::{AnswerOption, Question, QuestionCategory};

/// One string per supported language.
struct Localized {
    en: &'static str,
    fr: &'static str,
    ar: &'static str,
}

impl Localized {
    fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Fr => self.fr,
            Language::Ar => self.ar,
        }
    }
}

#[derive(Clone, Copy)]
enum Scale {
    PastTwoWeeks,
    Frequency,
}

impl Scale {
    fn labels(self) -> &'static [Localized] {
        match self {
            Scale::PastTwoWeeks => PAST_TWO_WEEKS,
            Scale::Frequency => FREQUENCY,
        }
    }
}

const PAST_TWO_WEEKS: &[Localized] = &[
    Localized {
        en: "Not at all",
        fr: "Pas du tout",
        ar: "أبداً",
    },
    Localized {
        en: "Several days",
        fr: "Plusieurs jours",
        ar: "عدة أيام",
    },
    Localized {
        en: "More than half the days",
        fr: "Plus de la moitié des jours",
        ar: "أكثر من نصف الأيام",
    },
    Localized {
        en: "Nearly every day",
        fr: "Presque tous les jours",
        ar: "تقريباً كل يوم",
    },
];

const FREQUENCY: &[Localized] = &[
    Localized {
        en: "Never",
        fr: "Jamais",
        ar: "أبداً",
    },
    Localized {
        en: "Rarely",
        fr: "Rarement",
        ar: "نادراً",
    },
    Localized {
        en: "Sometimes",
        fr: "Parfois",
        ar: "أحياناً",
    },
    Localized {
        en: "Often",
        fr: "Souvent",
        ar: "غالباً",
    },
    Localized {
        en: "Very often",
        fr: "Très souvent",
        ar: "في أغلب الأوقات",
    },
];

struct Item {
    text: Localized,
    category: QuestionCategory,
    scale: Scale,
}

const ITEMS: &[Item] = &[
    Item {
        text: Localized {
            en: "Over the past two weeks, how often have you felt nervous, anxious, or on edge?",
            fr: "Au cours des deux dernières semaines, à quelle fréquence vous êtes-vous senti nerveux, anxieux ou à bout ?",
            ar: "خلال الأسبوعين الماضيين، كم مرة شعرت بالتوتر أو القلق أو العصبية؟",
        },
        category: QuestionCategory::Anxiety,
        scale: Scale::PastTwoWeeks,
    },
    Item {
        text: Localized {
            en: "How often have you been bothered by not being able to stop or control worrying?",
            fr: "À quelle fréquence avez-vous été gêné par l'incapacité d'arrêter ou de contrôler vos inquiétudes ?",
            ar: "كم مرة انزعجت من عدم قدرتك على إيقاف القلق أو التحكم فيه؟",
        },
        category: QuestionCategory::Anxiety,
        scale: Scale::PastTwoWeeks,
    },
    Item {
        text: Localized {
            en: "Over the past two weeks, how often have you had little interest or pleasure in doing things?",
            fr: "Au cours des deux dernières semaines, à quelle fréquence avez-vous eu peu d'intérêt ou de plaisir à faire les choses ?",
            ar: "خلال الأسبوعين الماضيين، كم مرة شعرت بقلة الاهتمام أو المتعة في القيام بالأشياء؟",
        },
        category: QuestionCategory::Depression,
        scale: Scale::PastTwoWeeks,
    },
    Item {
        text: Localized {
            en: "How often have you felt down, depressed, or hopeless?",
            fr: "À quelle fréquence vous êtes-vous senti triste, déprimé ou désespéré ?",
            ar: "كم مرة شعرت بالحزن أو الاكتئاب أو اليأس؟",
        },
        category: QuestionCategory::Depression,
        scale: Scale::PastTwoWeeks,
    },
    Item {
        text: Localized {
            en: "How often do you have trouble falling or staying asleep, or sleeping too much?",
            fr: "À quelle fréquence avez-vous du mal à vous endormir ou à rester endormi, ou dormez-vous trop ?",
            ar: "كم مرة تواجه صعوبة في النوم أو البقاء نائماً، أو تنام أكثر من اللازم؟",
        },
        category: QuestionCategory::Depression,
        scale: Scale::PastTwoWeeks,
    },
    Item {
        text: Localized {
            en: "How often do you feel tired or have little energy?",
            fr: "À quelle fréquence vous sentez-vous fatigué ou manquez-vous d'énergie ?",
            ar: "كم مرة تشعر بالتعب أو بقلة الطاقة؟",
        },
        category: QuestionCategory::Depression,
        scale: Scale::PastTwoWeeks,
    },
    Item {
        text: Localized {
            en: "How often do you experience unwanted memories or flashbacks of a traumatic event?",
            fr: "À quelle fréquence avez-vous des souvenirs non désirés ou des flashbacks d'un événement traumatisant ?",
            ar: "كم مرة تراودك ذكريات غير مرغوب فيها أو ومضات من حدث صادم؟",
        },
        category: QuestionCategory::Trauma,
        scale: Scale::Frequency,
    },
    Item {
        text: Localized {
            en: "How often do you avoid places, people, or activities that remind you of a traumatic experience?",
            fr: "À quelle fréquence évitez-vous des lieux, des personnes ou des activités qui vous rappellent une expérience traumatisante ?",
            ar: "كم مرة تتجنب أماكن أو أشخاصاً أو أنشطة تذكرك بتجربة صادمة؟",
        },
        category: QuestionCategory::Trauma,
        scale: Scale::Frequency,
    },
    Item {
        text: Localized {
            en: "How often do you feel emotionally numb or detached from others?",
            fr: "À quelle fréquence vous sentez-vous émotionnellement engourdi ou détaché des autres ?",
            ar: "كم مرة تشعر بالخدر العاطفي أو بالانفصال عن الآخرين؟",
        },
        category: QuestionCategory::Trauma,
        scale: Scale::Frequency,
    },
    Item {
        text: Localized {
            en: "How often do you feel overwhelmed by daily responsibilities?",
            fr: "À quelle fréquence vous sentez-vous dépassé par les responsabilités quotidiennes ?",
            ar: "كم مرة تشعر بأن المسؤوليات اليومية تثقل كاهلك؟",
        },
        category: QuestionCategory::Stress,
        scale: Scale::Frequency,
    },
    Item {
        text: Localized {
            en: "How often do you have difficulty concentrating on tasks?",
            fr: "À quelle fréquence avez-vous du mal à vous concentrer sur vos tâches ?",
            ar: "كم مرة تجد صعوبة في التركيز على المهام؟",
        },
        category: QuestionCategory::Stress,
        scale: Scale::Frequency,
    },
    Item {
        text: Localized {
            en: "How often do you experience sudden mood changes?",
            fr: "À quelle fréquence vivez-vous des changements d'humeur soudains ?",
            ar: "كم مرة تمر بتقلبات مزاجية مفاجئة؟",
        },
        category: QuestionCategory::Mood,
        scale: Scale::Frequency,
    },
    Item {
        text: Localized {
            en: "How often do you feel irritable or angry without clear reason?",
            fr: "À quelle fréquence vous sentez-vous irritable ou en colère sans raison apparente ?",
            ar: "كم مرة تشعر بالانفعال أو الغضب دون سبب واضح؟",
        },
        category: QuestionCategory::Mood,
        scale: Scale::Frequency,
    },
    Item {
        text: Localized {
            en: "How often do you worry about things that are out of your control?",
            fr: "À quelle fréquence vous inquiétez-vous de choses qui échappent à votre contrôle ?",
            ar: "كم مرة تقلق بشأن أمور خارجة عن سيطرتك؟",
        },
        category: QuestionCategory::Anxiety,
        scale: Scale::Frequency,
    },
    Item {
        text: Localized {
            en: "How often do you feel physically tense or restless?",
            fr: "À quelle fréquence vous sentez-vous physiquement tendu ou agité ?",
            ar: "كم مرة تشعر بالتوتر الجسدي أو عدم الاستقرار؟",
        },
        category: QuestionCategory::Anxiety,
        scale: Scale::Frequency,
    },
];

pub const DEFAULT_CONTEXT: &str = "Using default assessment questions";

/// The bank in `language`, built once per language.
pub fn question_bank(language: Language) -> &'static [Question] {
    static EN: OnceLock<Vec<Question>> = OnceLock::new();
    static FR: OnceLock<Vec<Question>> = OnceLock::new();
    static AR: OnceLock<Vec<Question>> = OnceLock::new();

    let cell = match language {
        Language::En => &EN,
        Language::Fr => &FR,
        Language::Ar => &AR,
    };
    cell.get_or_init(|| build_bank(language))
}

fn build_bank(language: Language) -> Vec<Question> {
    ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| Question {
            id: i as u32 + 1,
            text: item.text.get(language).to_string(),
            options: item
                .scale
                .labels()
                .iter()
                .enumerate()
                .map(|(value, label)| AnswerOption {
                    text: label.get(language).to_string(),
                    value: value as u8,
                })
                .collect(),
            category: Some(item.category),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANGUAGES: [Language; 3] = [Language::Fr, Language::Ar, Language::En];

    #[test]
    fn test_bank_has_fifteen_numbered_questions() {
        for language in LANGUAGES {
            let bank = question_bank(language);
            assert_eq!(bank.len(), 15);
            for (i, q) in bank.iter().enumerate() {
                assert_eq!(q.id as usize, i + 1);
            }
        }
    }

    #[test]
    fn test_scales_split_at_item_seven() {
        for language in LANGUAGES {
            let bank = question_bank(language);
            assert!(bank[..6].iter().all(|q| q.max_value() == 3));
            assert!(bank[6..].iter().all(|q| q.max_value() == 4));
        }
    }

    #[test]
    fn test_languages_share_structure_but_not_text() {
        let en = question_bank(Language::En);
        for language in [Language::Fr, Language::Ar] {
            let bank = question_bank(language);
            for (a, b) in en.iter().zip(bank) {
                assert_eq!(a.id, b.id);
                assert_eq!(a.category, b.category);
                assert_eq!(a.options.len(), b.options.len());
                assert_ne!(a.text, b.text, "question {} in {}", a.id, language.code());
            }
        }
    }

    #[test]
    fn test_french_bank_text() {
        let bank = question_bank(Language::Fr);
        assert!(bank[0].text.starts_with("Au cours des deux dernières semaines"));
        assert_eq!(bank[0].options[0].text, "Pas du tout");
        assert_eq!(bank[14].options[4].text, "Très souvent");
    }

    #[test]
    fn test_option_values_are_contiguous_from_zero() {
        for q in question_bank(Language::En) {
            for (i, option) in q.options.iter().enumerate() {
                assert_eq!(option.value as usize, i, "question {}", q.id);
            }
        }
    }

    #[test]
    fn test_every_category_is_covered() {
        let bank = question_bank(Language::Fr);
        for category in [
            QuestionCategory::Anxiety,
            QuestionCategory::Depression,
            QuestionCategory::Trauma,
            QuestionCategory::Stress,
            QuestionCategory::Mood,
        ] {
            assert!(bank.iter().any(|q| q.category == Some(category)));
        }
    }
}
