use super::tagger::Tagger;

/// True when the tagger reads `word` as a plural noun or a third-person-singular verb.
///
/// Tokens the tagger cannot place are not plural.
pub fn is_plural_form(tagger: &dyn Tagger, word: &str) -> bool {
    tagger.tag(word).is_plural_like()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::tagger::RuleTagger;

    #[test]
    fn test_reference_words() {
        let tagger = RuleTagger::builtin();
        assert!(is_plural_form(&tagger, "cats"));
        assert!(!is_plural_form(&tagger, "cat"));
        assert!(is_plural_form(&tagger, "runs"));
        assert!(!is_plural_form(&tagger, "run"));
        assert!(!is_plural_form(&tagger, "happily"));
        assert!(is_plural_form(&tagger, "children"));
    }

    #[test]
    fn test_singular_nouns() {
        let tagger = RuleTagger::builtin();
        let singular_nouns = [
            "cat", "dog", "house", "child", "person", "analysis", "bus", "glass", "kiss", "class",
            "dress", "boss", "lens", "gas", "bonus", "campus", "focus", "genius", "iris", "thesis",
            "crisis", "basis", "oasis", "octopus", "virus",
        ];
        for word in singular_nouns {
            assert!(!is_plural_form(&tagger, word), "{} should not be plural", word);
        }
    }

    #[test]
    fn test_plural_nouns() {
        let tagger = RuleTagger::builtin();
        let plural_nouns = [
            "cats", "dogs", "houses", "children", "people", "analyses", "buses", "glasses",
            "kisses", "classes", "dresses", "bosses", "lenses", "gases", "bonuses", "campuses",
            "focuses", "geniuses", "irises", "theses", "crises", "bases", "oases", "octopuses",
            "viruses",
        ];
        for word in plural_nouns {
            assert!(is_plural_form(&tagger, word), "{} should be plural", word);
        }
    }

    #[test]
    fn test_adjectives_and_adverbs() {
        let tagger = RuleTagger::builtin();
        for word in ["happy", "blue", "quick", "tall", "beautiful", "famous"] {
            assert!(!is_plural_form(&tagger, word), "{} (adjective)", word);
        }
        for word in ["quickly", "happily", "slowly", "badly", "well", "always"] {
            assert!(!is_plural_form(&tagger, word), "{} (adverb)", word);
        }
    }

    #[test]
    fn test_verb_forms() {
        let tagger = RuleTagger::builtin();
        let base_and_past = [
            "run", "ran", "eat", "ate", "walk", "walked", "talk", "talked", "see", "saw", "go",
            "went", "be", "was", "am", "are", "were", "had",
        ];
        for word in base_and_past {
            assert!(!is_plural_form(&tagger, word), "{} should not be plural", word);
        }

        let third_person = [
            "runs", "eats", "walks", "talks", "sees", "goes", "does", "has", "sings", "brings",
            "flies", "tries", "cries", "studies", "watches", "fixes", "teaches", "pushes",
            "catches", "passes",
        ];
        for word in third_person {
            assert!(is_plural_form(&tagger, word), "{} should be plural", word);
        }
    }

    #[test]
    fn test_unknown_tokens_are_admitted() {
        let tagger = RuleTagger::builtin();
        assert!(!is_plural_form(&tagger, "rock'n'roll"));
        assert!(!is_plural_form(&tagger, "2000s"));
    }
}
