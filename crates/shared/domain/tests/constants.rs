use vhub_domain::constants::{ENV_PREFIX, SYSTEM_TAG, VENDORS_TABLE, VENDORS_TAG};

#[test]
fn constants_match_published_names() {
    assert_eq!(SYSTEM_TAG, "System");
    assert_eq!(VENDORS_TAG, "Vendors");
    assert_eq!(VENDORS_TABLE, "vendors");
    assert_eq!(ENV_PREFIX, "VHUB");
}
