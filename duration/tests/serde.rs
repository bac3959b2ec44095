#![cfg(feature = "serde")]

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Timeouts {
    #[serde(with = "rustcommon_duration::serde")]
    connect: f64,
    #[serde(with = "rustcommon_duration::serde")]
    request: f64,
}

#[test]
fn serialize() {
    let timeouts = Timeouts {
        connect: 250.0,
        request: 90000.0,
    };

    assert_eq!(
        serde_json::to_string(&timeouts).unwrap(),
        r#"{"connect":"250ms","request":"1m30s"}"#
    );
}

#[test]
fn deserialize() {
    let timeouts: Timeouts =
        serde_json::from_str(r#"{"connect": "1.5s", "request": "1h0m0s"}"#).unwrap();
    assert_eq!(
        timeouts,
        Timeouts {
            connect: 1500.0,
            request: 3600000.0
        }
    );

    // numbers are already milliseconds
    let timeouts: Timeouts =
        serde_json::from_str(r#"{"connect": 250, "request": 0.5}"#).unwrap();
    assert_eq!(
        timeouts,
        Timeouts {
            connect: 250.0,
            request: 0.5
        }
    );
}

#[test]
fn errors() {
    let e = serde_json::from_str::<Timeouts>(r#"{"connect": "5x", "request": 0}"#).unwrap_err();
    assert!(e.to_string().contains("unknown unit 'x' in 5x"), "{e}");

    let e = serde_json::from_str::<Timeouts>(r#"{"connect": true, "request": 0}"#).unwrap_err();
    assert!(e.to_string().contains("a duration string"), "{e}");
}
