use axum_classifieds_admin::{
    error::AppError,
    services::{listing_service::parse_price, purchase_service},
};

#[test]
fn accepts_comma_and_dot_decimals() {
    assert_eq!(parse_price("99,90").unwrap(), 9990);
    assert_eq!(parse_price("99.90").unwrap(), 9990);
    assert_eq!(parse_price("100").unwrap(), 10000);
    assert_eq!(parse_price(" 10 ").unwrap(), 1000);
}

#[test]
fn single_fraction_digit_means_tenths() {
    assert_eq!(parse_price("1,5").unwrap(), 150);
    assert_eq!(parse_price("0.5").unwrap(), 50);
    assert_eq!(parse_price(",5").unwrap(), 50);
}

#[test]
fn trailing_separator_is_a_whole_price() {
    assert_eq!(parse_price("5,").unwrap(), 500);
}

#[test]
fn zero_is_a_valid_price() {
    assert_eq!(parse_price("0").unwrap(), 0);
    assert_eq!(parse_price("0,00").unwrap(), 0);
}

#[test]
fn blank_price_is_a_missing_field() {
    assert!(matches!(parse_price(""), Err(AppError::MissingField(_))));
    assert!(matches!(parse_price("   "), Err(AppError::MissingField(_))));
}

#[test]
fn rejects_malformed_prices() {
    for input in ["abc", "1,234", "1.2.3", "-5", "+5", "1,-5", ",", "R$ 10"] {
        assert!(
            matches!(parse_price(input), Err(AppError::InvalidPrice(_))),
            "expected {input:?} to be rejected"
        );
    }
}

#[test]
fn quantity_defaults_to_one_when_blank() {
    assert_eq!(purchase_service::default_quantity("").unwrap(), 1);
    assert_eq!(purchase_service::default_quantity("  ").unwrap(), 1);
    assert_eq!(purchase_service::default_quantity("3").unwrap(), 3);
}

#[test]
fn quantity_must_be_a_whole_number_of_at_least_one() {
    assert_eq!(purchase_service::parse_quantity("1").unwrap(), 1);
    assert_eq!(purchase_service::parse_quantity(" 7 ").unwrap(), 7);
    for input in ["0", "-2", "1.5", "muitos", ""] {
        assert!(
            matches!(
                purchase_service::parse_quantity(input),
                Err(AppError::InvalidQuantity)
            ),
            "expected {input:?} to be rejected"
        );
    }
}
