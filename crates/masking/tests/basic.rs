#![allow(dead_code, clippy::unwrap_used, clippy::panic_in_result_fn)]

use masking::{CardNumber, Secret, StrongSecret};

#[test]
fn basic() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use serde::Serialize;

    #[derive(Clone, Debug, Serialize, PartialEq, Eq)]
    pub struct Composite {
        secret_number: Secret<String>,
        not_secret: String,
    }

    // construct

    let secret_number = Secret::<String>::new("4111111111111111".to_string());
    let not_secret = "not secret".to_string();
    let composite = Composite {
        secret_number,
        not_secret,
    };

    // clone

    let composite2 = composite.clone();
    assert_eq!(composite, composite2);

    // format

    let got = format!("{composite:?}");
    let exp =
        "Composite { secret_number: *** alloc::string::String ***, not_secret: \"not secret\" }";
    assert_eq!(got, exp);

    // serialize

    let got = serde_json::to_string(&composite).unwrap();
    let exp = "{\"secret_number\":\"4111111111111111\",\"not_secret\":\"not secret\"}";
    assert_eq!(got, exp);

    Ok(())
}

#[test]
fn card_number_strategy_shows_first_six_and_last_four() {
    let card: Secret<String, CardNumber> = Secret::new("4111111111111111".to_string());
    assert_eq!(format!("{card:?}"), "411111******1111");
}

#[test]
fn card_number_strategy_masks_unexpected_lengths() {
    let card: Secret<String, CardNumber> = Secret::new("4111".to_string());
    assert_eq!(format!("{card:?}"), "*** ***");
}

#[test]
fn strong_secret_masks_debug_output() {
    let cvv: StrongSecret<String> = StrongSecret::new("123".to_string());
    assert_eq!(format!("{cvv:?}"), "*** alloc::string::String ***");
}

#[test]
fn skipped_secret_is_not_serialized() {
    use serde::Serialize;

    #[derive(Clone, Debug, Serialize)]
    pub struct Composite {
        #[serde(skip)]
        secret_number: Secret<String>,
        not_secret: String,
    }

    let composite = Composite {
        secret_number: Secret::new("4111111111111111".to_string()),
        not_secret: "not secret".to_string(),
    };

    let got = serde_json::to_string(&composite).unwrap();
    assert_eq!(got, "{\"not_secret\":\"not secret\"}");
}
