//! End-to-end identification through the full stack.
//!
//! Every test stages a package layout on disk, feeds an install event (or a
//! package name) to a [`PackageMonitor`] backed by a directory source, and
//! checks the derived record. The golden values here must never change: a
//! difference means the identity scheme itself has changed.

use uappid::{
    CancelToken, DeriveError, DigestAlgorithm, MonitorConfig, MonitorError, PackageMonitor,
    SourceError, UAppRecord,
};
use uappid_testkit::fixtures::{
    alpha_certificate, beta_certificate, truncated_certificate, InstallFixture,
};
use uappid_testkit::vectors::ALPHA_SHA256;

fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_install_event_yields_known_record() {
    init_logging();
    let fixture = InstallFixture::new();
    fixture.install("com.example.app", &[alpha_certificate()], b"APKDATA");

    let monitor = PackageMonitor::new(&fixture.source);
    let record = monitor.handle_event("package:com.example.app").unwrap();

    assert_eq!(record.package_name(), "com.example.app");
    assert_eq!(
        record.apk_path(),
        fixture.root().join("com.example.app").join("base.apk")
    );
    assert_eq!(
        record.uapp_id().as_str(),
        "86635A667A0A7D3B3C305AE24E07C6D66F6706D7EE9888F15A290D476BCB3479"
    );
    assert_eq!(
        record.binary_hash().as_str(),
        "2CE76B4E9335982D523A05F17324D2C129E5E72B57B111D93A38A8C8689A9ED3"
    );

    // The UAppID is the digest of "<package name> <certificate hash>".
    let identity = format!("com.example.app {ALPHA_SHA256}");
    assert_eq!(
        record.uapp_id(),
        &DigestAlgorithm::Sha256.hash(identity.as_bytes())
    );
}

#[test]
fn test_certificate_order_changes_identity() {
    init_logging();
    let forward = InstallFixture::new();
    forward.install(
        "com.example.app",
        &[alpha_certificate(), beta_certificate()],
        b"APKDATA",
    );
    let reversed = InstallFixture::new();
    reversed.install(
        "com.example.app",
        &[beta_certificate(), alpha_certificate()],
        b"APKDATA",
    );

    let r1 = PackageMonitor::new(&forward.source)
        .identify("com.example.app")
        .unwrap();
    let r2 = PackageMonitor::new(&reversed.source)
        .identify("com.example.app")
        .unwrap();

    assert_eq!(
        r1.uapp_id().as_str(),
        "E04AE27662D761ECC01A5D150995AF945415ED69B6DEA67BC66CDC26D66E8FBE"
    );
    assert_eq!(
        r2.uapp_id().as_str(),
        "4A2C04779F75BC691E9690EEBCD0050CC33F5D56988B2CAEE98C539F61C69D9D"
    );
    assert_eq!(r1.binary_hash(), r2.binary_hash());
}

#[test]
fn test_renamed_package_changes_identity() {
    init_logging();
    let fixture = InstallFixture::new();
    fixture.install("com.example.app", &[alpha_certificate()], b"APKDATA");
    fixture.install("org.example.other", &[alpha_certificate()], b"APKDATA");

    let monitor = PackageMonitor::new(&fixture.source);
    let original = monitor.identify("com.example.app").unwrap();
    let renamed = monitor.identify("org.example.other").unwrap();

    assert_eq!(
        renamed.uapp_id().as_str(),
        "50A92F3DCDCAB950B0CC2A4B2690B7E4B88481738842725FB41D4C8750F23291"
    );
    assert_ne!(original.uapp_id(), renamed.uapp_id());
    assert_eq!(original.binary_hash(), renamed.binary_hash());
}

#[test]
fn test_resigned_package_changes_identity_not_binary() {
    init_logging();
    let original = InstallFixture::new();
    original.install("com.example.app", &[alpha_certificate()], b"APKDATA");
    let resigned = InstallFixture::new();
    resigned.install("com.example.app", &[beta_certificate()], b"APKDATA");

    let r1 = PackageMonitor::new(&original.source)
        .identify("com.example.app")
        .unwrap();
    let r2 = PackageMonitor::new(&resigned.source)
        .identify("com.example.app")
        .unwrap();

    assert_ne!(r1.uapp_id(), r2.uapp_id());
    assert_eq!(r1.binary_hash(), r2.binary_hash());
}

#[test]
fn test_upgrade_keeps_identity_changes_binary() {
    init_logging();
    let fixture = InstallFixture::new();
    fixture.install("com.example.app", &[alpha_certificate()], b"APKDATA");

    let monitor = PackageMonitor::new(&fixture.source);
    let before = monitor.identify("com.example.app").unwrap();

    // Same name and signer, new binary contents.
    fixture.install("com.example.app", &[alpha_certificate()], b"APKDATA v2");
    let after = monitor.identify("com.example.app").unwrap();

    assert_eq!(before.uapp_id(), after.uapp_id());
    assert_ne!(before.binary_hash(), after.binary_hash());
}

#[test]
fn test_missing_artifact_is_unavailable() {
    init_logging();
    let fixture = InstallFixture::new();
    fixture.install("com.example.app", &[alpha_certificate()], b"APKDATA");
    fixture.remove_artifact("com.example.app");

    let monitor = PackageMonitor::new(&fixture.source);
    let err = monitor.identify("com.example.app").unwrap_err();

    assert!(matches!(
        err,
        MonitorError::Derive(DeriveError::BinaryUnavailable { .. })
    ));
}

#[test]
fn test_truncated_certificate_is_malformed() {
    init_logging();
    let fixture = InstallFixture::new();
    fixture.install("com.example.app", &[truncated_certificate()], b"APKDATA");

    let monitor = PackageMonitor::new(&fixture.source);
    let err = monitor.identify("com.example.app").unwrap_err();

    assert!(matches!(
        err,
        MonitorError::Derive(DeriveError::MalformedCertificate { index: 0, .. })
    ));
}

#[test]
fn test_sha1_compatibility_mode() {
    init_logging();
    let fixture = InstallFixture::new();
    fixture.install("com.example.app", &[alpha_certificate()], b"APKDATA");

    let monitor = PackageMonitor::with_config(
        &fixture.source,
        MonitorConfig {
            algorithm: DigestAlgorithm::Sha1,
        },
    );
    let record = monitor.handle_event("package:com.example.app").unwrap();

    assert_eq!(
        record.uapp_id().as_str(),
        "4B124EC7A6FDA0F8DEF33376864F4556CFE1DBE3"
    );
    assert_eq!(
        record.binary_hash().as_str(),
        "7450B3C6D98DC5C1AD1508FF2C29C17FD50762EC"
    );
    assert_eq!(record.uapp_id().len_bytes(), 20);
}

#[test]
fn test_record_serde_roundtrip() {
    init_logging();
    let fixture = InstallFixture::new();
    fixture.install("com.example.app", &[alpha_certificate()], b"APKDATA");

    let record = PackageMonitor::new(&fixture.source)
        .identify("com.example.app")
        .unwrap();

    let json = serde_json::to_string(&record).unwrap();
    let back: UAppRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn test_cancelled_identification() {
    init_logging();
    let fixture = InstallFixture::new();
    fixture.install(
        "com.example.app",
        &[alpha_certificate()],
        &vec![0x5Au8; 1024 * 1024],
    );

    let monitor = PackageMonitor::new(&fixture.source);
    let cancel = CancelToken::new();
    cancel.cancel();

    let err = monitor
        .identify_with_cancel("com.example.app", &cancel)
        .unwrap_err();
    assert!(matches!(
        err,
        MonitorError::Derive(DeriveError::Cancelled)
    ));
}

#[test]
fn test_package_without_certificates() {
    init_logging();
    let fixture = InstallFixture::new();
    fixture.install("com.example.app", &[], b"APKDATA");

    let monitor = PackageMonitor::new(&fixture.source);
    let err = monitor.identify("com.example.app").unwrap_err();

    assert!(matches!(
        err,
        MonitorError::Derive(DeriveError::NoCertificates(_))
    ));
}

#[test]
fn test_unknown_package_event() {
    init_logging();
    let fixture = InstallFixture::new();

    let monitor = PackageMonitor::new(&fixture.source);
    let err = monitor.handle_event("package:org.absent").unwrap_err();

    assert!(matches!(
        err,
        MonitorError::Source(SourceError::PackageNotFound(pkg)) if pkg == "org.absent"
    ));
}

#[test]
fn test_multi_chunk_binary() {
    init_logging();
    let payload: Vec<u8> = (0..8192).map(|i| (i % 251) as u8).collect();
    let fixture = InstallFixture::new();
    fixture.install("com.example.app", &[alpha_certificate()], &payload);

    let record = PackageMonitor::new(&fixture.source)
        .identify("com.example.app")
        .unwrap();

    assert_eq!(
        record.binary_hash().as_str(),
        "25DF2449B2E5A35FEA14E02A7158E283801A1069C9F84631B9A9DACB2F809A7F"
    );
}
