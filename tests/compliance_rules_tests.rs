use carelink_be::ingest::{self, RawCertification};
use carelink_be::models::{Certification, DBS, VerificationStatus, mandatory_items};
use carelink_be::rules::matcher::{compliance_status, is_expiring_soon, is_satisfied};
use chrono::Duration;
use fake::Fake;
use fake::faker::lorem::en::Sentence;
use pretty_assertions::assert_eq;
use serde_json::json;

mod common;

fn cert(status: VerificationStatus, is_valid: bool, cert_type: &str, title: &str) -> Certification {
    Certification {
        verification_status: status,
        is_valid,
        ..Certification::uploaded(cert_type, title)
    }
}

#[test]
fn test_empty_list_reports_every_item_missing() {
    let result = compliance_status(mandatory_items(), &[], common::as_of());

    let labels: Vec<String> = mandatory_items().iter().map(|i| i.label.to_string()).collect();
    assert_eq!(result.missing, labels);
    assert!(result.expiring.is_empty());
}

#[test]
fn test_rejected_certifications_never_satisfy() {
    for _ in 0..50 {
        let sentence: String = Sentence(1..6).fake();
        let title = format!("{} DBS", sentence);
        let rejected = cert(VerificationStatus::Rejected, true, "dbs_check", &title);

        let result = compliance_status(mandatory_items(), &[rejected], common::as_of());
        assert!(result.missing.contains(&"DBS Check".to_string()), "title {:?}", title);
    }
}

#[test]
fn test_verified_without_expiry_is_never_missing_or_expiring() {
    for item in mandatory_items() {
        for type_string in item.type_strings {
            let sentence: String = Sentence(1..4).fake();
            let holder = cert(VerificationStatus::Verified, true, type_string, &sentence);

            assert!(is_satisfied(item, &[holder.clone()], common::as_of()));
            assert!(!is_expiring_soon(item, &[holder], common::as_of()));
        }
    }
}

#[test]
fn test_thirty_day_boundary() {
    let now = common::as_of();
    let on_boundary = cert(VerificationStatus::Verified, true, "dbs_check", "DBS")
        .with_expiry(now + Duration::days(30));
    let after_boundary = cert(VerificationStatus::Verified, true, "dbs_check", "DBS")
        .with_expiry(now + Duration::days(31));

    assert!(is_expiring_soon(&DBS, &[on_boundary], now));
    assert!(!is_expiring_soon(&DBS, &[after_boundary], now));
}

#[test]
fn test_loose_matching_is_preserved() {
    // "reference" appears inside an unrelated title and still counts
    let loose = cert(
        VerificationStatus::Verified,
        true,
        "misc",
        "Cross-reference sheet",
    );
    let result = compliance_status(mandatory_items(), &[loose], common::as_of());
    assert!(!result.missing.contains(&"Professional References".to_string()));
}

#[test]
fn test_unreadable_expiry_never_satisfies() {
    let raw: Vec<RawCertification> = serde_json::from_value(json!([
        common::verified_cert("dbs_check", "DBS", Some("31/12/2027")),
        common::verified_cert("photo_id", "Passport", None)
    ]))
    .unwrap();

    let certs = ingest::certifications(raw);
    assert_eq!(certs.len(), 1);

    let result = compliance_status(mandatory_items(), &certs, common::as_of());
    assert!(result.missing.contains(&"DBS Check".to_string()));
    assert!(!result.missing.contains(&"Photo ID".to_string()));
    assert!(result.expiring.is_empty());
}
