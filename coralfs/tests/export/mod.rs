//! Round-trip tests for export list decoding against representative
//! appliance payloads.

use coralfs::api::{ExportList, PersonaID, PersonaIDType};
use serde_json::Value;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

const ONE_EXPORT: &str = include_str!("fixtures/exports_1.json");
const SEVEN_EXPORTS: &str = include_str!("fixtures/exports_7.json");
const EIGHT_EXPORTS: &str = include_str!("fixtures/exports_8.json");
const NINE_EXPORTS: &str = include_str!("fixtures/exports_9.json");

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Decodes a fixture, re-encodes it, decodes the result, and re-encodes
/// again; the two encodes must agree structurally so repeated cycles cannot
/// drift fields.
fn assert_round_trip_is_idempotent(fixture: &str) -> anyhow::Result<()> {
    let list: ExportList = serde_json::from_str(fixture)?;

    let first = serde_json::to_string(&list)?;
    let first_value: Value = serde_json::from_str(&first)?;

    let list: ExportList = serde_json::from_str(&first)?;

    let second = serde_json::to_string(&list)?;
    let second_value: Value = serde_json::from_str(&second)?;

    assert_eq!(first_value, second_value);

    Ok(())
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[test_log::test]
fn test_one_export_round_trip() -> anyhow::Result<()> {
    assert_round_trip_is_idempotent(ONE_EXPORT)
}

#[test_log::test]
fn test_seven_exports_round_trip() -> anyhow::Result<()> {
    assert_round_trip_is_idempotent(SEVEN_EXPORTS)
}

#[test_log::test]
fn test_eight_exports_round_trip() -> anyhow::Result<()> {
    assert_round_trip_is_idempotent(EIGHT_EXPORTS)
}

#[test_log::test]
fn test_nine_exports_round_trip() -> anyhow::Result<()> {
    assert_round_trip_is_idempotent(NINE_EXPORTS)
}

#[test_log::test]
fn test_single_export_fixture_decodes_expected_fields() -> anyhow::Result<()> {
    let list: ExportList = serde_json::from_str(ONE_EXPORT)?;
    assert_eq!(list.len(), 1);

    let export = &list[0];
    assert_eq!(export.id, Some(24));
    assert_eq!(
        export.paths.as_deref(),
        Some(&["/cfs/volumes/libstorage/testing".to_string()][..])
    );
    assert_eq!(
        export.clients.as_deref(),
        Some(&["10.50.0.111".to_string()][..])
    );

    let map_root = export
        .map_root
        .as_ref()
        .expect("map_root should survive decode");
    assert_eq!(map_root.enabled, Some(true));
    // the appliance's `{}` placeholder must not materialize a group
    assert!(map_root.primary_group.is_none());
    assert!(map_root.secondary_group.is_none());
    assert_eq!(
        map_root.user.as_ref().and_then(|user| user.id.clone()),
        Some(PersonaID::new(PersonaIDType::User, "root"))
    );

    Ok(())
}

#[test_log::test]
fn test_populated_primary_group_survives_decode() -> anyhow::Result<()> {
    let list: ExportList = serde_json::from_str(SEVEN_EXPORTS)?;
    assert_eq!(list.len(), 7);

    let export = list
        .iter()
        .find(|export| export.id == Some(16))
        .expect("fixture should contain export 16");

    let map_root = export
        .map_root
        .as_ref()
        .expect("map_root should survive decode");
    assert_eq!(
        map_root
            .primary_group
            .as_ref()
            .and_then(|group| group.id.clone()),
        Some(PersonaID::new(PersonaIDType::Group, "wheel"))
    );

    Ok(())
}

#[test_log::test]
fn test_legacy_mapping_shapes_normalize_to_absent_or_name() -> anyhow::Result<()> {
    // this corpus mixes `{}` placeholders with mappings whose user is a bare
    // name string instead of an id object
    let list: ExportList = serde_json::from_str(NINE_EXPORTS)?;
    assert_eq!(list.len(), 9);

    let export = list
        .iter()
        .find(|export| export.id == Some(1))
        .expect("fixture should contain export 1");
    assert!(export.map_all.is_none());

    let map_root = export
        .map_root
        .as_ref()
        .expect("map_root should survive decode");
    assert_eq!(
        map_root.user.as_ref().and_then(|user| user.name.clone()),
        Some("nobody".to_string())
    );

    let export = list
        .iter()
        .find(|export| export.id == Some(17))
        .expect("fixture should contain export 17");
    assert!(export.map_root.is_none());
    assert!(export.map_all.is_some());

    Ok(())
}
