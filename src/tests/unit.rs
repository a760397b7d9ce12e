#[cfg(test)]
mod unit_tests {

    use crate::dictionary::{build_extended, parse_word_pairs};
    use crate::endings::EndingsCollection;
    use crate::phonetic::{Phonetic, Trasianka};
    use crate::transliterator::RuleSet;
    use crate::validator::{Issue, validate_public_dictionary};

    const DICTIONARY: &str = include_str!("fixtures/dictionary.ru-be.txt");
    const RU_ENDS: &str = include_str!("fixtures/endings.ru.txt");
    const BE_ENDS: &str = include_str!("fixtures/endings.be.txt");
    const TRASIANKA: &str = include_str!("fixtures/trasianka.txt");
    const CLASSIC: &str = include_str!("fixtures/lacinka.classic.txt");
    const OFFICIAL: &str = include_str!("fixtures/lacinka.official.txt");

    #[test]
    fn shipped_ending_tables_are_in_lock_step() {
        let ru = EndingsCollection::parse(RU_ENDS);
        let be = EndingsCollection::parse(BE_ENDS);
        assert_eq!(ru.check_lock_step(&be), Ok(()));
        assert_eq!(be.check_lock_step(&ru), Ok(()));
    }

    #[test]
    fn shipped_dictionary_expands_whole_paradigms() {
        let pairs = parse_word_pairs(DICTIONARY);
        let ru = EndingsCollection::parse(RU_ENDS);
        let be = EndingsCollection::parse(BE_ENDS);
        let dict = build_extended(&pairs, &[], &ru, &be);
        assert_eq!(dict["получилось"], "атрымалася");
        assert_eq!(dict["получились"], "атрымаліся");
        assert_eq!(dict["директору"], "дырэктару");
        assert_eq!(dict["директором"], "дырэктарам");
        assert_eq!(dict["плохую"], "дрэнную");
        // yo-folded key for a literal entry
        assert_eq!(dict["еще"], "яшчэ");
    }

    #[test]
    fn shipped_trasianka_rules_cascade() {
        let luka = Trasianka::parse(TRASIANKA);
        assert_eq!(luka.transduce("чего-то"), "чагосьці");
        assert_eq!(luka.transduce("борщ"), "боршч");
    }

    #[test]
    fn classic_rules_cover_the_soft_l_series() {
        let rules = RuleSet::parse(CLASSIC);
        assert_eq!(rules.apply("ляля"), "lala");
        assert_eq!(rules.apply("лала"), "łała");
        assert_eq!(rules.apply("соль"), "sol");
    }

    #[test]
    fn classic_and_official_differ_on_hard_l() {
        let classic = RuleSet::parse(CLASSIC);
        let official = RuleSet::parse(OFFICIAL);
        assert_eq!(classic.apply("мала"), "mała");
        assert_eq!(official.apply("мала"), "mala");
    }

    #[test]
    fn validator_accepts_the_word_pair_format() {
        let v = validate_public_dictionary("вчера\tучора\nмир\tсвет і мір\n");
        assert!(v.is_clean());
    }

    #[test]
    fn validator_reports_line_numbers() {
        let v = validate_public_dictionary("вчера\tучора\nплохо\nмир\tmir\n");
        assert_eq!(v.issues.len(), 2);
        assert_eq!(v.issues[0].line, 2);
        assert_eq!(v.issues[0].issue, Issue::MissingTab);
        assert_eq!(v.issues[1].line, 3);
        assert_eq!(v.issues[1].issue, Issue::TargetAlphabet);
        assert_eq!(v.fixed, "вчера\tучора\n");
    }
}
