use greeter::{greet, Greeter, NameInput};
use serde_json::json;
use std::collections::HashMap;

fn greeters() -> Vec<Greeter> {
    vec![Greeter::default(), Greeter::new("Hi").unwrap()]
}

#[test]
fn test_non_string_inputs_get_fallback() {
    for greeter in greeters() {
        let expected = format!("{}, Stranger!", greeter.salutation());

        assert_eq!(greeter.greet(123), expected);
        assert_eq!(greeter.greet(1.5_f32), expected);
        assert_eq!(greeter.greet(None::<String>), expected);
        assert_eq!(greeter.greet(()), expected);
        assert_eq!(greeter.greet(true), expected);
        assert_eq!(greeter.greet(Vec::<String>::new()), expected);
        assert_eq!(greeter.greet(HashMap::<String, i32>::new()), expected);
        assert_eq!(greeter.greet(json!(123)), expected);
        assert_eq!(greeter.greet(json!(null)), expected);
        assert_eq!(greeter.greet(json!([])), expected);
        assert_eq!(greeter.greet(json!({})), expected);
    }
}

#[test]
fn test_blank_strings_get_fallback() {
    for greeter in greeters() {
        let expected = format!("{}, Stranger!", greeter.salutation());
        assert_eq!(greeter.greet(""), expected);
        assert_eq!(greeter.greet("   "), expected);
        assert_eq!(greeter.greet(String::from("\t \n")), expected);
    }
}

#[test]
fn test_names_are_trimmed_and_capitalized() {
    let cases = [
        (" World ", "World"),
        ("alice", "Alice"),
        ("  bob  ", "Bob"),
        ("CHARLIE", "Charlie"),
        ("  eve", "Eve"),
        ("dANIEL", "Daniel"),
        ("  mARY  ", "Mary"),
    ];

    for greeter in greeters() {
        for (input, name) in cases {
            assert_eq!(
                greeter.greet(input),
                format!("{}, {}!", greeter.salutation(), name),
                "input: {:?}",
                input
            );
        }
    }
}

#[test]
fn test_special_characters_only_first_letter_upper() {
    assert_eq!(greet("o'neill"), "Hello, O'neill!");
    assert_eq!(greet("anne-marie"), "Hello, Anne-marie!");
    assert_eq!(greet("MCDONALD-SMITH"), "Hello, Mcdonald-smith!");
}

#[test]
fn test_numeric_string_is_a_name() {
    assert_eq!(greet("12345"), "Hello, 12345!");
    assert_eq!(greet("7up"), "Hello, 7up!");
    assert_eq!(Greeter::new("Hi").unwrap().greet("12345"), "Hi, 12345!");
}

#[test]
fn test_greet_is_stable_under_retrimming() {
    let samples = [
        " World ",
        "\talice\n",
        "  o'neill  ",
        "x",
        "  ANNE-MARIE",
        "12345   ",
        "  jean luc  ",
    ];

    for greeter in greeters() {
        for sample in samples {
            assert_eq!(greeter.greet(sample), greeter.greet(sample.trim()));
        }
    }
}

#[test]
fn test_output_shape() {
    let out = greet("zoe");
    assert!(out.starts_with("Hello, "));
    assert!(out.ends_with('!'));
    assert_eq!(out.matches(", ").count(), 1);
}

#[test]
fn test_name_input_is_reusable_across_greeters() {
    let input = NameInput::from("bob");
    let outputs: Vec<String> = greeters().iter().map(|g| g.greet(input.clone())).collect();
    assert_eq!(outputs, vec!["Hello, Bob!", "Hi, Bob!"]);
}
