//! Grammatical tag dimensions per language.
//!
//! Tags are opaque atoms, but some of them are mutually exclusive: a Spanish
//! noun is either `masc` or `fem`. Tags in the same group share a key, and a
//! locally declared tag overrides an inherited tag with the same key.

use crate::types::TagSet;

type Groups = &'static [(&'static str, &'static [&'static str])];

const GENDER_2: (&str, &[&str]) = ("gender", &["masc", "fem"]);
const GENDER_3: (&str, &[&str]) = ("gender", &["masc", "fem", "neut"]);
const ANIMACY: (&str, &[&str]) = ("animacy", &["anim", "inan"]);
const HARMONY: (&str, &[&str]) = ("harmony", &["front", "back"]);

const TABLE: &[(&str, Groups)] = &[
    ("en", &[("article", &["a", "an"])]),
    ("es", &[GENDER_2]),
    ("pt", &[GENDER_2]),
    ("it", &[GENDER_2, ("onset", &["vowel", "s_imp"])]),
    ("fr", &[GENDER_2, ("onset", &["vowel"])]),
    ("de", &[GENDER_3]),
    ("nl", &[("article", &["de", "het"])]),
    ("el", &[GENDER_3]),
    ("ro", &[GENDER_3]),
    ("ru", &[GENDER_3, ANIMACY]),
    ("uk", &[GENDER_3, ANIMACY]),
    ("pl", &[("gender", &["masc_anim", "masc_inan", "fem", "neut"])]),
    ("cs", &[("gender", &["masc_anim", "masc_inan", "fem", "neut"])]),
    ("ar", &[GENDER_2, ("letter", &["sun", "moon"])]),
    ("hi", &[GENDER_2]),
    ("tr", &[HARMONY]),
    ("fi", &[HARMONY]),
    ("zh", &[("classifier", &["zhang", "ge", "ming", "wei", "tiao", "ben", "zhi"])]),
    ("ja", &[("classifier", &["mai", "nin", "hiki", "hon", "ko", "satsu"])]),
    ("ko", &[("classifier", &["jang", "myeong", "mari", "gae", "gwon"])]),
    ("vi", &[("classifier", &["cai", "con", "nguoi", "chiec", "to"])]),
    ("th", &[("classifier", &["bai", "tua", "khon", "an"])]),
];

/// The tag groups of one language.
#[derive(Debug, Clone, Copy)]
pub struct TagGroups {
    groups: Groups,
}

impl TagGroups {
    /// Groups for a primary language subtag. Unknown languages have no
    /// groups, so every tag is its own key.
    pub fn for_language(lang: &str) -> Self {
        let empty: Groups = &[];
        let groups = TABLE.iter().find(|(code, _)| *code == lang).map_or(empty, |(_, g)| *g);
        Self { groups }
    }

    /// The group name of `tag`, or the tag itself when ungrouped.
    pub fn key_of<'a>(&self, tag: &'a str) -> &'a str {
        self.groups
            .iter()
            .find(|(_, members)| members.iter().any(|member| *member == tag))
            .map_or(tag, |(group, _)| *group)
    }

    /// Local tags first, then every inherited tag whose key no local tag
    /// claims.
    pub fn inherit(&self, local: &TagSet, inherited: &TagSet) -> TagSet {
        let mut result = local.clone();
        for tag in inherited {
            let key = self.key_of(tag);
            if !local.iter().any(|own| self.key_of(own) == key) {
                result.insert(tag.clone());
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::TransformRegistry;

    #[test]
    fn local_tag_overrides_its_group_only() {
        let groups = TagGroups::for_language("ar");
        let local = ["fem"].into_iter().collect::<TagSet>();
        let inherited = ["masc", "sun"].into_iter().collect::<TagSet>();
        assert_eq!(groups.inherit(&local, &inherited).names(), vec!["fem", "sun"]);
    }

    #[test]
    fn ungrouped_tags_override_by_name() {
        let groups = TagGroups::for_language("xx");
        let local = ["masc"].into_iter().collect::<TagSet>();
        let inherited = ["fem", "masc"].into_iter().collect::<TagSet>();
        assert_eq!(groups.inherit(&local, &inherited).names(), vec!["masc", "fem"]);
    }

    #[test]
    fn grouped_languages_have_their_own_transforms() {
        // Slavic groups only steer `:from` overrides.
        let inheritance_only = ["ru", "uk", "pl", "cs"];
        for (lang, _) in TABLE {
            let own = TransformRegistry::for_language(lang)
                .names()
                .into_iter()
                .filter(|name| !["cap", "upper", "lower"].contains(name))
                .count();
            assert_eq!(own > 0, !inheritance_only.contains(lang), "{lang}");
        }
    }
}
