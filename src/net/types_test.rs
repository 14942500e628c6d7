use super::*;

#[test]
fn detection_record_deserializes_camel_case_payload() {
    let payload = r#"{
        "id": 42,
        "labelName": "FAKE",
        "state": "Zone B",
        "confidence": 0.9812,
        "ssim": 0.7421,
        "lpips": 0.3318,
        "rm": null,
        "pvr": null,
        "originalImageUrl": "https://cdn.example.com/42/original.png",
        "heatmapImageUrl": "https://cdn.example.com/42/heatmap.png"
    }"#;

    let record: DetectionRecord = serde_json::from_str(payload).unwrap();
    assert_eq!(record.id, 42);
    assert_eq!(record.label_name, "FAKE");
    assert_eq!(record.state, "Zone B");
    assert_eq!(record.confidence, Some(0.9812));
    assert_eq!(record.rm, None);
    assert_eq!(record.pvr, None);
    assert_eq!(record.heatmap_image_url, "https://cdn.example.com/42/heatmap.png");
}

#[test]
fn detection_record_serializes_back_to_camel_case_keys() {
    let record = DetectionRecord {
        id: 7,
        label_name: "REAL".to_owned(),
        state: "Zone A".to_owned(),
        confidence: Some(0.5),
        ssim: None,
        lpips: None,
        rm: None,
        pvr: None,
        original_image_url: "o.png".to_owned(),
        heatmap_image_url: "h.png".to_owned(),
    };

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["labelName"], "REAL");
    assert_eq!(json["originalImageUrl"], "o.png");
    assert!(json["ssim"].is_null());
}

#[test]
fn token_response_reads_access_token_field() {
    let token: TokenResponse = serde_json::from_str(r#"{"accessToken":"tok1"}"#).unwrap();
    assert_eq!(token.access_token, "tok1");
}

#[test]
fn password_request_serializes_expected_field_names() {
    let request = UpdatePasswordRequest {
        current_password: "old".to_owned(),
        new_password: "new".to_owned(),
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["currentPassword"], "old");
    assert_eq!(json["newPassword"], "new");
}
