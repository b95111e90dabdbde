use serde_json::json;
use smart_doh_domain::{AnswerRecord, RecordType, ResolutionAnswer, SiteCategory};

#[test]
fn test_upstream_document_keeps_unknown_fields() {
    let upstream = json!({
        "Status": 0,
        "TC": false,
        "RD": true,
        "Question": [{"name": "github.com", "type": 1}],
        "Answer": [
            {"name": "github.com", "type": 1, "TTL": 60, "data": "140.82.121.4"}
        ]
    });

    let answer: ResolutionAnswer = serde_json::from_value(upstream.clone()).unwrap();
    assert!(answer.is_success());
    assert_eq!(answer.records().len(), 1);
    assert_eq!(answer.records()[0].kind(), Some(RecordType::A));

    assert_eq!(serde_json::to_value(&answer).unwrap(), upstream);
}

#[test]
fn test_missing_answer_section() {
    let answer: ResolutionAnswer = serde_json::from_value(json!({"Status": 3})).unwrap();
    assert!(!answer.is_success());
    assert!(answer.records().is_empty());
    assert_eq!(answer.min_ttl(), None);
    assert!(serde_json::to_value(&answer).unwrap().get("Answer").is_none());
}

#[test]
fn test_substituted_record_serializes_markers() {
    let mut record = AnswerRecord::new("x.com", RecordType::A, 300, "104.16.132.229");
    record.original = Some("1.2.3.4".to_string());
    record.substituted = true;

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["_original"], "1.2.3.4");
    assert_eq!(value["_proxied"], true);
    assert_eq!(value["TTL"], 300);
}

#[test]
fn test_address_detection() {
    assert!(AnswerRecord::new("a", RecordType::AAAA, 1, "::1").is_address());
    assert!(!AnswerRecord::new("a", RecordType::CNAME, 1, "b.").is_address());

    let mut unknown = AnswerRecord::new("a", RecordType::A, 1, "x");
    unknown.record_type = 65;
    assert_eq!(unknown.kind(), None);
    assert!(!unknown.is_address());
}

#[test]
fn test_record_type_parsing() {
    assert_eq!("aaaa".parse::<RecordType>().unwrap(), RecordType::AAAA);
    assert_eq!("MX".parse::<RecordType>().unwrap(), RecordType::MX);
    assert!("SRV".parse::<RecordType>().is_err());
    assert_eq!(RecordType::from_u16(16), Some(RecordType::TXT));
}

#[test]
fn test_category_priority_from_mask() {
    let both = SiteCategory::Blocked.mask() | SiteCategory::Gaming.mask();
    assert_eq!(SiteCategory::from_mask(both), SiteCategory::Blocked);
    let all = both | SiteCategory::Iranian.mask();
    assert_eq!(SiteCategory::from_mask(all), SiteCategory::Iranian);
    assert_eq!(SiteCategory::from_mask(0), SiteCategory::Normal);
}
