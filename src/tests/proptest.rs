mod prop_tests {
    use crate::alphabet::{capitalize, copy_case};
    use crate::context::{Settings, Variant};
    use crate::engine::Engine;
    use crate::phonetic::Trasianka;
    use proptest::prelude::*;
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
            .build()
            .unwrap()
    }

    proptest! {
        #[test]
        fn translation_is_total(s in ".{0,400}") {
            let e = engine();
            let _ = e.translate(&s);
        }

        #[test]
        fn pipeline_is_total_over_cyrillic(s in "[а-яё іў'-]{0,200}") {
            let e = engine();
            let _ = e.process(Cow::Owned(s)).unwrap();
        }

        #[test]
        fn token_free_text_is_untouched(s in "[a-z0-9 .,!?()]{0,300}") {
            let e = engine();
            prop_assert_eq!(e.translate(&s), s);
        }

        #[test]
        fn case_shape_law_for_dictionary_hits(
            idx in prop::sample::select(vec![
                ("вчера", "учора"),
                ("директор", "дырэктар"),
                ("белокраснобелый", "белачырвонабелы"),
            ])
        ) {
            let e = engine();
            let (src, tgt) = idx;
            prop_assert_eq!(e.translate(src), tgt);
            prop_assert_eq!(e.translate(&capitalize(src)), capitalize(tgt));
            prop_assert_eq!(e.translate(&src.to_uppercase()), tgt.to_uppercase());
        }

        #[test]
        fn copy_case_never_panics(src in ".{0,40}", tgt in ".{0,40}") {
            let _ = copy_case(&src, &tgt);
        }

        #[test]
        fn skipped_pipeline_is_identity(s in ".{0,300}") {
            let e = engine();
            let settings = Settings { translate: false, transliterate: None };
            let out = e.process_with(settings, Cow::Borrowed(s.as_str())).unwrap();
            prop_assert_eq!(out.as_ref(), s.as_str());
        }
    }
}
