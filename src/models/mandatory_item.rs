use serde::Serialize;

/// An entry of the static mandatory-document catalog. Any certification whose
/// type or title loosely matches one of `type_strings` counts towards it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MandatoryItem {
    pub key: &'static str,
    pub label: &'static str,
    pub type_strings: &'static [&'static str],
}

pub const DBS: MandatoryItem = MandatoryItem {
    key: "dbs",
    label: "DBS Check",
    type_strings: &["dbs_check", "dbs check", "dbs", "enhanced dbs", "standard dbs"],
};

pub const RIGHT_TO_WORK: MandatoryItem = MandatoryItem {
    key: "right_to_work",
    label: "Right to Work",
    type_strings: &["right_to_work", "right to work", "visa", "passport"],
};

pub const PHOTO_ID: MandatoryItem = MandatoryItem {
    key: "photo_id",
    label: "Photo ID",
    type_strings: &[
        "photo_id",
        "photo id",
        "id_document",
        "driving licence",
        "driving license",
    ],
};

pub const MANDATORY_TRAINING: MandatoryItem = MandatoryItem {
    key: "mandatory_training",
    label: "Mandatory Training",
    type_strings: &[
        "mandatory_training",
        "mandatory training",
        "training_certificate",
        "training certificate",
    ],
};

pub const PROFESSIONAL_REFERENCES: MandatoryItem = MandatoryItem {
    key: "references",
    label: "Professional References",
    type_strings: &[
        "professional_reference",
        "professional references",
        "reference",
        "references",
    ],
};

static CATALOG: [MandatoryItem; 5] = [
    DBS,
    RIGHT_TO_WORK,
    PHOTO_ID,
    MANDATORY_TRAINING,
    PROFESSIONAL_REFERENCES,
];

/// The fixed catalog, in display order.
pub fn mandatory_items() -> &'static [MandatoryItem] {
    &CATALOG
}

pub fn find_mandatory_item(key: &str) -> Option<&'static MandatoryItem> {
    CATALOG.iter().find(|item| item.key == key)
}
