// crates/bmc-bioscfg/tests/vendor_exports.rs

use bmc_bioscfg::{VendorConfigManager, VendorOptions, new_vendor_config_manager};
use std::fs;
use std::path::PathBuf;

/// Helper function to load a test file from the `tests/data/` directory.
///
/// Returned as bytes: the Supermicro export is ISO-8859-1, not UTF-8.
fn load_test_file(name: &str) -> Vec<u8> {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);

    fs::read(&path).unwrap_or_else(|e| panic!("Failed to read test file {:?}: {}", path, e))
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn load(format: &str, vendor: &str, file: &str) -> Box<dyn VendorConfigManager> {
    init_logging();
    let mut cm = new_vendor_config_manager(format, vendor, &VendorOptions::new())
        .expect("Failed to build adapter");
    cm.unmarshal(&load_test_file(file))
        .unwrap_or_else(|e| panic!("Failed to unmarshal {}: {}", file, e));
    cm
}

fn get<'a>(config: &'a bmc_bioscfg::CanonicalSettingMap, key: &str) -> Option<&'a str> {
    config.get(key).map(String::as_str)
}

/// The SUM export is Latin-1, mixes documentation elements in with the
/// settings and interleaves `<Menu>` and `<Setting>` siblings.
#[test]
fn test_supermicro_latin1_export() {
    let cm = load("xml", "supermicro", "supermicro_bios.xml");

    // The degree sign arrives transcoded.
    assert_eq!(
        cm.value(&["Advanced"], "Temperature Limit (\u{00B0}C)"),
        Some("85")
    );
    // Nested menu after the interleaved setting is still found.
    assert_eq!(
        cm.value(
            &["Advanced", "PCIe/PCI/PnP Configuration"],
            "Software Guard Extensions (SGX)"
        ),
        Some("Software Controlled")
    );

    let config = cm.standard_config().expect("Failed to normalize");
    assert_eq!(get(&config, "smt"), Some("Enabled"));
    assert_eq!(get(&config, "amd_sev"), Some("253"));
    assert_eq!(get(&config, "intel_sgx"), Some("Software Controlled"));
    assert_eq!(get(&config, "tpm"), Some("Disabled"));
    assert_eq!(get(&config, "boot_mode"), Some("DUAL"));
    // CheckBox values other than on/off spellings pass through.
    assert_eq!(get(&config, "secure_boot"), Some("Checked"));
    assert_eq!(get(&config, "raw:Administrator Password"), Some(""));
    assert_eq!(get(&config, "raw:Temperature Limit (\u{00B0}C)"), Some("85"));
    assert!(!config.contains_key("raw:OldSetupPassword"));
    assert_eq!(config.len(), 8);
}

#[test]
fn test_supermicro_export_reimports_as_utf8() {
    let mut cm = load("xml", "supermicro", "supermicro_bios.xml");
    cm.smt(false).expect("smt toggle failed");
    cm.boot_mode("uefi").expect("boot_mode toggle failed");

    let xml = cm.marshal().expect("Failed to marshal");
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("Temperature Limit (\u{00B0}C)"));
    // Documentation elements are not carried over.
    assert!(!xml.contains("<Information>"));

    let mut again = new_vendor_config_manager("xml", "supermicro", &VendorOptions::new()).unwrap();
    again.unmarshal(xml.as_bytes()).expect("Failed to re-read output");

    let config = again.standard_config().unwrap();
    // The existing "Hyper-Threading [ALL]" entry is untouched, the toggle
    // adds the plain spelling next to it.
    assert_eq!(
        again.value(&["Advanced", "CPU Configuration"], "Hyper-Threading"),
        Some("Disabled")
    );
    assert_eq!(get(&config, "boot_mode"), Some("UEFI"));
}

#[test]
fn test_asrockrack_export() {
    let cm = load("XML", "ASRockRack", "asrockrack_bios.xml");

    assert_eq!(
        cm.value(&["Advanced", "AMD CBS"], "SVM Mode"),
        Some("Enabled")
    );

    let config = cm.standard_config().expect("Failed to normalize");
    assert_eq!(get(&config, "secure_boot"), Some("Disabled"));
    assert_eq!(get(&config, "raw:SMT Mode"), Some("Auto"));
    assert_eq!(get(&config, "raw:SVM Mode"), Some("Enabled"));
    assert_eq!(get(&config, "raw:Administrator Password"), Some(""));
    assert_eq!(config.len(), 4);
}

#[test]
fn test_dell_xml_export() {
    let cm = load("xml", "dell", "dell_scp.xml");

    assert_eq!(cm.value(&["BIOS.Setup.1-1"], "BootMode"), Some("Uefi"));
    assert_eq!(
        cm.value(&["NIC.Slot.3-1-1"], "VirtualizationMode"),
        Some("NONE")
    );

    let config = cm.standard_config().expect("Failed to normalize");
    assert_eq!(get(&config, "boot_mode"), Some("UEFI"));
    assert_eq!(get(&config, "smt"), Some("Enabled"));
    assert_eq!(get(&config, "sr_iov"), Some("Disabled"));
    assert_eq!(get(&config, "tpm"), Some("Disabled"));
    assert_eq!(get(&config, "raw:ProcVirtualization"), Some("Enabled"));
    assert_eq!(get(&config, "raw:VirtualizationMode"), Some("NONE"));
    assert!(!config.contains_key("raw:OldSetupPassword"));
    assert_eq!(config.len(), 6);
}

#[test]
fn test_dell_xml_export_round_trips_metadata() {
    let mut cm = load("xml", "dell", "dell_scp.xml");
    cm.enable_sriov().unwrap();

    let xml = cm.marshal().expect("Failed to marshal");
    assert!(xml.contains(r#"Model="PowerEdge R640""#), "{}", xml);
    assert!(xml.contains(r#"TimeStamp="Tue Nov  2 21:19:16 2021""#), "{}", xml);
    assert!(
        xml.contains("<Comment>Export type is Normal,XML,Selective</Comment>"),
        "{}",
        xml
    );
    assert!(xml.contains(r#"SetOnImport="True""#), "{}", xml);
    assert!(xml.contains(r#"Comment="Always Comment""#), "{}", xml);
    assert!(
        xml.contains(r#"<Attribute Name="VirtualizationMode">SRIOV</Attribute>"#),
        "{}",
        xml
    );
}

#[test]
fn test_dell_json_export() {
    let mut cm = load("json", "dell", "dell_scp.json");

    // Bare JSON numbers are read as their text.
    assert_eq!(cm.value(&["BIOS.Setup.1-1"], "CpuMinSevAsid"), Some("253"));

    let config = cm.standard_config().expect("Failed to normalize");
    assert_eq!(get(&config, "boot_mode"), Some("BIOS"));
    assert_eq!(get(&config, "secure_boot"), Some("Enabled"));
    assert_eq!(get(&config, "amd_sev"), Some("253"));

    cm.boot_mode("UEFI").unwrap();
    let json = cm.marshal().expect("Failed to marshal");
    assert!(json.contains(r#""Set On Import": "True""#), "{}", json);
    assert!(json.contains(r#""Value": "Uefi""#), "{}", json);
    assert!(
        json.contains(r#""Comment": "Export type is Normal,JSON,Selective""#),
        "{}",
        json
    );
}
