#![cfg(feature = "serde")]

use bsgrid_lib::api::{calculate_ivs, calculate_prices, IvRequest, PriceRequest};
use bsgrid_lib::{price, BsGridError, OptionType};

/// Requests parse from the wire field names (S_list, K_list, T, ...).
#[test]
fn test_price_request_parses_wire_shape() {
    let raw = r#"{
        "S_list": [95.0, 100.0],
        "K_list": [90.0, 100.0, 110.0],
        "T": 1.0,
        "r": 0.05,
        "sigma": 0.2,
        "q": 0.01,
        "option_type": "put"
    }"#;

    let request: PriceRequest = serde_json::from_str(raw).expect("request should parse");
    assert_eq!(request.spots.as_deref(), Some(&[95.0, 100.0][..]));
    assert_eq!(request.years_to_exp, 1.0);
    assert_eq!(request.option_type, OptionType::Put);

    let response = calculate_prices(&request).expect("pricing failed");
    assert_eq!(response.spots, vec![95.0, 100.0]);
    assert_eq!(response.prices.len(), 2);
    assert_eq!(response.prices[0].len(), 3);
}

/// Omitted lists and dividend yield take their documented defaults.
#[test]
fn test_omitted_fields_take_defaults() {
    let raw = r#"{"T": 1.0, "r": 0.05, "sigma": 0.2, "option_type": "call"}"#;
    let request: PriceRequest = serde_json::from_str(raw).unwrap();
    assert!(request.spots.is_none());
    assert_eq!(request.q, 0.0);

    let response = calculate_prices(&request).unwrap();
    assert_eq!(response.spots, vec![100.0]);
    assert_eq!(response.strikes, vec![100.0]);

    let expected = price(OptionType::Call, 100.0, 100.0, 0.05, 0.0, 1.0, 0.2).unwrap();
    assert!(
        (response.prices[0][0] - expected).abs() < 1e-12,
        "defaulted 1x1 grid should hold the scalar price"
    );
}

/// The response serializes under the wire field names with the row-major
/// matrix intact.
#[test]
fn test_price_response_wire_shape() {
    let request = PriceRequest {
        spots: Some(vec![100.0]),
        strikes: Some(vec![90.0, 110.0]),
        years_to_exp: 1.0,
        r: 0.05,
        sigma: 0.2,
        q: 0.0,
        option_type: OptionType::Call,
    };
    let response = calculate_prices(&request).unwrap();
    let json = serde_json::to_value(&response).unwrap();

    assert!(json.get("S_list").is_some(), "response must carry S_list");
    assert!(json.get("K_list").is_some(), "response must carry K_list");
    assert_eq!(json["prices"][0].as_array().unwrap().len(), 2);
}

/// Unresolved IV cells serialize as null; resolved siblings keep their
/// values.
#[test]
fn test_unresolved_iv_serializes_as_null() {
    let (r, q, t) = (0.05, 0.0, 1.0);
    let good = price(OptionType::Call, 100.0, 90.0, r, q, t, 0.2).unwrap();

    let request = IvRequest {
        spots: Some(vec![100.0]),
        strikes: Some(vec![90.0, 100.0]),
        years_to_exp: t,
        r,
        price_list: vec![good, 2.0],
        q,
        option_type: OptionType::Call,
    };

    let response = calculate_ivs(&request).expect("one dead cell must not fail the request");
    let json = serde_json::to_value(&response).unwrap();

    assert!(json["ivs"][0][0].is_f64(), "live cell should be a number");
    assert!(json["ivs"][0][1].is_null(), "dead cell should be null");
}

/// A price_list whose length does not match |S_list| * |K_list| is a
/// validation error with no computation performed.
#[test]
fn test_iv_length_mismatch_is_client_error() {
    let request = IvRequest {
        spots: Some(vec![95.0, 105.0]),
        strikes: Some(vec![90.0, 100.0, 110.0]),
        years_to_exp: 1.0,
        r: 0.05,
        price_list: vec![10.0; 5],
        q: 0.0,
        option_type: OptionType::Call,
    };
    let result = calculate_ivs(&request);
    assert!(
        matches!(result, Err(BsGridError::Validation { .. })),
        "expected a validation error, got {:?}",
        result
    );
}

/// option_type is the lowercase wire string.
#[test]
fn test_option_type_wire_strings() {
    assert_eq!(
        serde_json::from_str::<OptionType>("\"call\"").unwrap(),
        OptionType::Call
    );
    assert_eq!(
        serde_json::from_str::<OptionType>("\"put\"").unwrap(),
        OptionType::Put
    );
    assert!(serde_json::from_str::<OptionType>("\"CALL\"").is_err());
    assert_eq!(serde_json::to_string(&OptionType::Put).unwrap(), "\"put\"");
}

/// The default axes apply to the IV endpoint as well: a single observed
/// price against an omitted 1x1 grid round-trips.
#[test]
fn test_iv_defaults_round_trip() {
    let observed = price(OptionType::Call, 100.0, 100.0, 0.05, 0.0, 1.0, 0.2).unwrap();
    let raw = format!(
        r#"{{"T": 1.0, "r": 0.05, "price_list": [{}], "option_type": "call"}}"#,
        observed
    );
    let request: IvRequest = serde_json::from_str(&raw).unwrap();
    let response = calculate_ivs(&request).unwrap();

    assert_eq!(response.spots, vec![100.0]);
    let solved = response.ivs[0][0].expect("anchor cell should resolve");
    assert!(
        (solved - 0.2).abs() < 1e-4,
        "expected ~0.2, got {}",
        solved
    );
}
