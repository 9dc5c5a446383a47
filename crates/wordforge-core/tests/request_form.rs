use wordforge_core::{Error, RequestForm};

fn form_with_names() -> RequestForm {
    RequestForm {
        first_name: "  John ".to_string(),
        last_name: String::new(),
        birth_year: "1990".to_string(),
        city: "   ".to_string(),
        extra_words: "rex\n  blue\tsky ".to_string(),
        ..RequestForm::default()
    }
}

#[test]
fn input_words_skip_blank_fields_and_split_extras() {
    let form = form_with_names();
    assert_eq!(
        form.input_words(),
        vec!["John", "1990", "rex", "blue", "sky"]
    );
}

#[test]
fn defaults_parse_into_request() {
    let request = form_with_names().parse().expect("default form parses");
    assert_eq!(request.generation.min_len, 6);
    assert_eq!(request.generation.max_len, 16);
    assert_eq!(request.generation.patterns.len(), 3);
    assert!(request.generation.use_symbols);
    assert!(request.random.is_none());
    assert!(!request.preview);
}

#[test]
fn non_numeric_length_is_rejected() {
    let form = RequestForm {
        max_len: "sixteen".to_string(),
        ..form_with_names()
    };
    match form.parse() {
        Err(Error::InvalidNumericInput { field, value }) => {
            assert_eq!(field, "max_len");
            assert_eq!(value, "sixteen");
        }
        other => panic!("expected InvalidNumericInput, got {other:?}"),
    }
}

#[test]
fn random_count_is_parsed_even_when_disabled() {
    let mut form = form_with_names();
    form.random.enabled = false;
    form.random.count = "lots".to_string();
    assert!(matches!(
        form.parse(),
        Err(Error::InvalidNumericInput { field: "random.count", .. })
    ));
}

#[test]
fn enabled_random_section_shares_length_bounds() {
    let mut form = form_with_names();
    form.min_len = "8".to_string();
    form.max_len = "12".to_string();
    form.random.enabled = true;
    form.random.count = " 20 ".to_string();
    form.random.prefix = " pre ".to_string();
    form.random.seed = Some(7);

    let request = form.parse().expect("form parses");
    let random = request.random.expect("random enabled");
    assert_eq!(random.count, 20);
    assert_eq!(random.min_len, 8);
    assert_eq!(random.max_len, 12);
    assert_eq!(random.prefix, "pre");
    assert_eq!(random.seed, Some(7));
}

#[test]
fn negative_length_is_a_config_error() {
    let form = RequestForm {
        min_len: "-3".to_string(),
        ..form_with_names()
    };
    assert!(matches!(form.parse(), Err(Error::InvalidConfig(_))));
}

#[test]
fn pattern_without_slot_is_rejected() {
    let form = RequestForm {
        patterns: vec!["{}{}".to_string(), "plain".to_string()],
        ..form_with_names()
    };
    assert!(matches!(form.parse(), Err(Error::InvalidPattern(_))));
}

#[test]
fn custom_decoration_symbols_replace_defaults() {
    let form = RequestForm {
        decoration_symbols: "+ =".to_string(),
        ..form_with_names()
    };
    let request = form.parse().expect("form parses");
    assert_eq!(request.generation.symbols, vec!['+', '=']);
}

#[test]
fn form_loads_from_partial_toml() {
    let form: RequestForm = toml::from_str(
        r#"
first_name = "Maria"
min_len = "4"

[random]
enabled = true
seed = 42
"#,
    )
    .expect("parse toml form");

    assert_eq!(form.first_name, "Maria");
    assert_eq!(form.max_len, "16");
    assert!(form.random.enabled);
    assert_eq!(form.random.count, "50");
    assert_eq!(form.random.seed, Some(42));
}

#[test]
fn negative_random_count_is_accepted_when_disabled() {
    let mut form = form_with_names();
    form.random.enabled = false;
    form.random.count = "-5".to_string();
    let request = form.parse().expect("negative count still parses");
    assert!(request.random.is_none());
    assert_eq!(request.inputs.first().map(String::as_str), Some("John"));
}

#[test]
fn negative_random_count_clamps_to_zero_when_enabled() {
    let mut form = form_with_names();
    form.random.enabled = true;
    form.random.count = "-5".to_string();
    let request = form.parse().expect("negative count still parses");
    let random = request.random.expect("random enabled");
    assert_eq!(random.count, 0);
    assert_eq!(random.attempt_budget(), 0);
}

#[test]
fn arabic_indic_digits_parse_as_lengths() {
    let form = RequestForm {
        min_len: "٦".to_string(),
        max_len: "۱۲".to_string(),
        ..form_with_names()
    };
    let request = form.parse().expect("arabic-indic digits parse");
    assert_eq!(request.generation.min_len, 6);
    assert_eq!(request.generation.max_len, 12);
}
