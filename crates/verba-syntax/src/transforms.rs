//! Built-in transform names per language.
//!
//! Both the macro and the runtime registry read this table, so a name the
//! macro accepts is always one the runtime can execute.

/// Canonical identifiers for the built-in transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformId {
    Cap,
    Upper,
    Lower,
    EnglishA,
    EnglishThe,
    EnglishPlural,
    SpanishEl,
    SpanishUn,
    PortugueseO,
    PortugueseUm,
    PortugueseDe,
    PortugueseEm,
    FrenchLe,
    FrenchUn,
    FrenchDe,
    FrenchAu,
    GermanDer,
    GermanEin,
    DutchDe,
    DutchEen,
    ItalianIl,
    ItalianUn,
    ItalianDi,
    ItalianA,
    GreekO,
    GreekEnas,
    RomanianDef,
    ArabicAl,
    ChineseCount,
    JapaneseCount,
    KoreanCount,
    KoreanParticle,
    VietnameseCount,
    ThaiCount,
    TurkishInflect,
    FinnishInflect,
    HindiKa,
    HindiKo,
    HindiSe,
    HindiMe,
    HindiPar,
    HindiNe,
}

/// Transforms available in every language.
const UNIVERSAL: &[(&str, TransformId)] = &[
    ("cap", TransformId::Cap),
    ("upper", TransformId::Upper),
    ("lower", TransformId::Lower),
];

/// Language-specific transforms. Aliases map to the same id as their
/// canonical name.
const BY_LANGUAGE: &[(&str, &[(&str, TransformId)])] = &[
    (
        "en",
        &[
            ("a", TransformId::EnglishA),
            ("an", TransformId::EnglishA),
            ("the", TransformId::EnglishThe),
            ("plural", TransformId::EnglishPlural),
        ],
    ),
    (
        "es",
        &[
            ("el", TransformId::SpanishEl),
            ("la", TransformId::SpanishEl),
            ("un", TransformId::SpanishUn),
            ("una", TransformId::SpanishUn),
        ],
    ),
    (
        "pt",
        &[
            ("o", TransformId::PortugueseO),
            ("a", TransformId::PortugueseO),
            ("um", TransformId::PortugueseUm),
            ("uma", TransformId::PortugueseUm),
            ("de", TransformId::PortugueseDe),
            ("em", TransformId::PortugueseEm),
        ],
    ),
    (
        "fr",
        &[
            ("le", TransformId::FrenchLe),
            ("la", TransformId::FrenchLe),
            ("un", TransformId::FrenchUn),
            ("une", TransformId::FrenchUn),
            ("de", TransformId::FrenchDe),
            ("au", TransformId::FrenchAu),
        ],
    ),
    (
        "de",
        &[
            ("der", TransformId::GermanDer),
            ("die", TransformId::GermanDer),
            ("das", TransformId::GermanDer),
            ("ein", TransformId::GermanEin),
            ("eine", TransformId::GermanEin),
        ],
    ),
    (
        "nl",
        &[
            ("de", TransformId::DutchDe),
            ("het", TransformId::DutchDe),
            ("een", TransformId::DutchEen),
        ],
    ),
    (
        "it",
        &[
            ("il", TransformId::ItalianIl),
            ("lo", TransformId::ItalianIl),
            ("la", TransformId::ItalianIl),
            ("un", TransformId::ItalianUn),
            ("uno", TransformId::ItalianUn),
            ("una", TransformId::ItalianUn),
            ("di", TransformId::ItalianDi),
            ("a", TransformId::ItalianA),
        ],
    ),
    (
        "el",
        &[
            ("o", TransformId::GreekO),
            ("i", TransformId::GreekO),
            ("to", TransformId::GreekO),
            ("enas", TransformId::GreekEnas),
            ("mia", TransformId::GreekEnas),
            ("ena", TransformId::GreekEnas),
        ],
    ),
    ("ro", &[("def", TransformId::RomanianDef)]),
    ("ar", &[("al", TransformId::ArabicAl)]),
    ("zh", &[("count", TransformId::ChineseCount)]),
    ("ja", &[("count", TransformId::JapaneseCount)]),
    (
        "ko",
        &[("count", TransformId::KoreanCount), ("particle", TransformId::KoreanParticle)],
    ),
    ("vi", &[("count", TransformId::VietnameseCount)]),
    ("th", &[("count", TransformId::ThaiCount)]),
    ("tr", &[("inflect", TransformId::TurkishInflect)]),
    ("fi", &[("inflect", TransformId::FinnishInflect)]),
    (
        "hi",
        &[
            ("ka", TransformId::HindiKa),
            ("ki", TransformId::HindiKa),
            ("ke", TransformId::HindiKa),
            ("ko", TransformId::HindiKo),
            ("se", TransformId::HindiSe),
            ("me", TransformId::HindiMe),
            ("par", TransformId::HindiPar),
            ("ne", TransformId::HindiNe),
        ],
    ),
];

fn language_entries(lang: &str) -> &'static [(&'static str, TransformId)] {
    BY_LANGUAGE
        .iter()
        .find(|(code, _)| *code == lang)
        .map_or(&[], |(_, entries)| *entries)
}

/// Resolves a transform name, alias or canonical, for a language.
///
/// Universal transforms resolve in every language.
pub fn resolve_transform(name: &str, lang: &str) -> Option<TransformId> {
    UNIVERSAL
        .iter()
        .chain(language_entries(lang))
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, id)| *id)
}

/// Every name, including aliases, that [`resolve_transform`] accepts for
/// `lang`. Universal names come first.
pub fn accepted_transform_names(lang: &str) -> Vec<&'static str> {
    UNIVERSAL.iter().chain(language_entries(lang)).map(|(name, _)| *name).collect()
}
