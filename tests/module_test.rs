// Cross-module tests: public API surface, error handling, serde integration
use asset_value::*;
use num_bigint::BigInt;

#[test]
fn test_all_modules_loaded() {
    let identity = AssetIdentity::new("eip155:1/slip44:60", 18).unwrap();
    let value = AssetValue::from_base_units(identity, 1);
    let _ = value.to_serialized();
    let _ = InMemoryAssetRegistry::new();
    let _: DecimalNumber = "1.5".parse().unwrap();

    assert_eq!(DEFAULT_PRECISION, 6);
    assert_eq!(CHECKSUM_LEN, 8);
    assert_eq!(DELIMITER, '|');

    println!("OK: All modules loaded successfully");
}

#[test]
fn test_error_handling() {
    assert!(AssetIdentity::new("", 6).is_err());
    assert!(AssetIdentity::new("eip155:1/slip44:60", -1).is_err());
    assert!(AssetIdentity::new("eip155:1/slip44:60", i64::from(MAX_PRECISION) + 1).is_err());
    assert!(AssetValue::from_serialized("garbage").is_err());
    assert!("1.2.3".parse::<DecimalNumber>().is_err());

    let identity = AssetIdentity::new("eip155:1/slip44:60", 18).unwrap();
    let value = AssetValue::from_base_units(identity, 10);
    assert_eq!(value.divided_by(0), Err(AssetValueError::DivisionByZero));

    println!("OK: Error handling test passed");
}

#[test]
fn test_large_magnitudes_are_exact() {
    let identity = AssetIdentity::new("eip155:1/slip44:60", 18).unwrap();
    let whale =
        AssetValue::from_precision(identity, "123456789012345678901234567890.123456789012345678")
            .unwrap();
    assert_eq!(
        whale.to_base_unit(),
        "123456789012345678901234567890123456789012345678"
    );
    assert_eq!(whale.to_precision(Some(18)), "123456789012345678901234567890.123456789012345678");

    let doubled = whale.plus(&whale).unwrap();
    assert_eq!(doubled, whale.multiplied_by(2).unwrap());
    assert_eq!(doubled.divided_by(2).unwrap(), whale);
    assert!(whale.base_units() > &BigInt::from(u128::MAX));

    println!("OK: Large magnitude test passed");
}

#[test]
fn test_serde_round_trip_in_struct() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Balance {
        owner: String,
        amount: AssetValue,
    }

    let identity = AssetIdentity::new("cosmos:osmosis-1/ibc:118", 6).unwrap();
    let balance = Balance {
        owner: "osmo1xyz".to_string(),
        amount: AssetValue::from_base_units(identity, 420),
    };

    let json = serde_json::to_value(&balance).unwrap();
    assert_eq!(
        json["amount"],
        r#"{"a":"cosmos:osmosis-1/ibc:118","p":6,"v":"420"}|a35b8ad1"#
    );
    let back: Balance = serde_json::from_value(json).unwrap();
    assert_eq!(back, balance);

    println!("OK: Serde round trip test passed");
}

#[test]
fn test_values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AssetValue>();
    assert_send_sync::<InMemoryAssetRegistry>();

    let identity = AssetIdentity::new("cosmos:osmosis-1/ibc:118", 6).unwrap();
    let value = std::sync::Arc::new(AssetValue::from_base_units(identity, 420));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let value = value.clone();
            std::thread::spawn(move || value.to_serialized())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), value.to_serialized());
    }

    println!("OK: Send + Sync test passed");
}

#[test]
fn test_registry_from_file() {
    let dir = std::env::temp_dir().join(format!("asset-value-registry-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("assets.json");
    std::fs::write(
        &path,
        r#"[{"assetId":"cosmos:osmosis-1/slip44:118","symbol":"OSMO","name":"Osmosis","precision":6}]"#,
    )
    .unwrap();

    let registry = InMemoryAssetRegistry::from_path(&path).unwrap();
    assert_eq!(registry.lookup("cosmos:osmosis-1/slip44:118").unwrap().symbol, "OSMO");
    assert!(matches!(
        InMemoryAssetRegistry::from_path(dir.join("missing.json")),
        Err(AssetValueError::Registry(_))
    ));

    std::fs::remove_dir_all(&dir).unwrap();
    println!("OK: Registry file test passed");
}
