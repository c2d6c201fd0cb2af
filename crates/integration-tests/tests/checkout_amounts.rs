//! Integration tests for the intent-phase amount conversion.
//!
//! The gateway charges in minor units; the API accepts prices in the shop
//! currency. `round(price * 100)` is the contract.

use rust_decimal::Decimal;

use bistro_server::services::stripe::to_minor_units;

#[test]
fn typical_prices_convert_exactly() {
    assert_eq!(to_minor_units(Decimal::new(1250, 2)).expect("converts"), 1250);
    assert_eq!(to_minor_units(Decimal::new(725, 2)).expect("converts"), 725);
    assert_eq!(to_minor_units(Decimal::from(40)).expect("converts"), 4000);
}

#[test]
fn sub_cent_prices_round() {
    assert_eq!(
        to_minor_units(Decimal::new(19_999, 3)).expect("converts"),
        2000
    );
}

#[test]
fn zero_price_is_zero_minor_units() {
    assert_eq!(to_minor_units(Decimal::ZERO).expect("converts"), 0);
}

#[test]
fn absurdly_large_amounts_are_rejected() {
    assert!(to_minor_units(Decimal::MAX).is_err());
}
