#[cfg(test)]
mod integration_tests {

    use crate::context::{Settings, Variant};
    use crate::engine::Engine;
    use crate::phonetic::Trasianka;
    use std::borrow::Cow;

    fn engine() -> Engine {
        Engine::builder()
            .dictionary(include_str!("fixtures/dictionary.ru-be.txt"))
            .endings(
                include_str!("fixtures/endings.ru.txt"),
                include_str!("fixtures/endings.be.txt"),
            )
            .word_forms(include_str!("fixtures/forms.ru-be.txt"))
            .phrases(include_str!("fixtures/phrases.ru-be.txt"))
            .prefixes(include_str!("fixtures/prefixes.ru-be.txt"))
            .phonetic(Trasianka::parse(include_str!("fixtures/trasianka.txt")))
            .variant(Variant::Classic, include_str!("fixtures/lacinka.classic.txt"))
            .variant(
                Variant::Official,
                include_str!("fixtures/lacinka.official.txt"),
            )
            .build()
            .unwrap()
    }

    fn run(engine: &Engine, text: &str) -> String {
        engine.process(Cow::Borrowed(text)).unwrap().into_owned()
    }

    #[test]
    fn dictionary_word_through_extended_forms() {
        let e = engine();
        assert_eq!(run(&e, "получилось"), "atrymałasia");
    }

    #[test]
    fn unknown_word_goes_through_the_phonetic_fallback() {
        let e = engine();
        assert_eq!(run(&e, "чего-то"), "čahości");
    }

    #[test]
    fn prefix_stripping_keeps_the_hyphen() {
        let e = engine();
        assert_eq!(run(&e, "экс-директору"), "eks-dyrektaru");
    }

    #[test]
    fn compound_word_from_the_dictionary() {
        let e = engine();
        assert_eq!(run(&e, "белокраснобелый"), "biełačyrvonabieły");
    }

    #[test]
    fn quotes_pass_through_and_are_mapped() {
        let e = engine();
        assert_eq!(run(&e, "«ещё»"), "\"jašče\"");
    }

    #[test]
    fn phrase_match_beats_the_word_dictionary() {
        let e = engine();
        // `моё` alone is a dictionary word; the two-word phrase wins.
        assert_eq!(run(&e, "то моё"), "to majo");
    }

    #[test]
    fn word_form_override_is_honored() {
        let e = engine();
        assert_eq!(run(&e, "лучше"), "lepš");
    }

    #[test]
    fn case_shape_survives_the_whole_pipeline() {
        let e = engine();
        assert_eq!(run(&e, "Получилось"), "Atrymałasia");
        assert_eq!(run(&e, "Ещё"), "Jašče");
    }

    #[test]
    fn mixed_sentence() {
        let e = engine();
        assert_eq!(
            run(&e, "Вчера получилось, ещё — нет."),
            "Učora atrymałasia, jašče — niet."
        );
    }

    #[test]
    fn official_variant_is_selectable_per_call() {
        let e = engine();
        let settings = Settings {
            translate: true,
            transliterate: Some(Variant::Official),
        };
        let out = e
            .process_with(settings, Cow::Borrowed("получилось"))
            .unwrap();
        assert_eq!(out, "atrymalasia");
    }

    #[test]
    fn translation_can_be_skipped() {
        let e = engine();
        let settings = Settings {
            translate: false,
            transliterate: Some(Variant::Classic),
        };
        let out = e.process_with(settings, Cow::Borrowed("яшчэ")).unwrap();
        assert_eq!(out, "jašče");
    }

    #[test]
    fn pipeline_without_stages_borrows_the_input() {
        let e = engine();
        let settings = Settings {
            translate: false,
            transliterate: None,
        };
        let input = "получилось";
        let out = e.process_with(settings, Cow::Borrowed(input)).unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn user_overlay_takes_effect_after_rebuild() {
        let e = engine();
        e.rebuild_user_overlay("вчера\tдаўней\nто моё\tто маё ўласнае\n");
        assert_eq!(e.translate("вчера"), "даўней");
        assert_eq!(e.translate("то моё"), "то маё ўласнае");
        // untouched base entries survive the rebuild
        assert_eq!(e.translate("директору"), "дырэктару");
    }

    #[test]
    fn short_u_glide_spans_token_boundaries() {
        let e = engine();
        // `вчера` ends in a vowel; the next word's `у` becomes the glide.
        assert_eq!(e.translate("вчера утром"), "учора ўтром");
    }
}
