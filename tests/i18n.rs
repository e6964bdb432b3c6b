use care_invest_quickcheck::i18n::{keys, resolve_language, Language, Translator};

#[test]
fn cli_flag_beats_config_language() {
    assert_eq!(resolve_language("en-us", Some("de-ch")), "en-us");
    assert_eq!(resolve_language("de", Some("en-us")), "de-ch");
}

#[test]
fn auto_falls_back_to_config() {
    assert_eq!(resolve_language("auto", Some("en-us")), "en-us");
    assert_eq!(resolve_language("", Some("de-ch")), "de-ch");
}

#[test]
fn regional_codes_normalize() {
    assert_eq!(resolve_language("de-de", None), "de-ch");
    assert_eq!(resolve_language("en-uk", None), "en-us");
}

#[test]
fn german_is_the_built_in_base() {
    let tr = Translator::new("de-ch");
    assert_eq!(tr.language(), Language::De);
    assert_eq!(tr.t(keys::RESULT_UNBOUNDED), "Unbegrenzt");
}

#[test]
fn english_translations_resolve() {
    let tr = Translator::new("en-us");
    assert_eq!(tr.language(), Language::En);
    assert_eq!(tr.t(keys::RESULT_UNBOUNDED), "Unbounded");
    assert_eq!(tr.t(keys::ERROR_PREFIX), "Error");
}

#[test]
fn unknown_language_falls_back_to_german() {
    let tr = Translator::new("fr");
    assert_eq!(tr.language(), Language::De);
    assert_eq!(tr.t(keys::RESULT_UNBOUNDED), "Unbegrenzt");
}

#[test]
fn built_in_pack_provides_gui_strings() {
    let tr = Translator::new_with_pack("en-us", None);
    assert_eq!(
        tr.lookup("gui.result.ebitda").as_deref(),
        Some("Estimated annual EBITDA")
    );
}
