//! Static roster fixtures used across harnesses.

use std::io::Write;
use tempfile::NamedTempFile;

/// A small roster in the dataset's on-disk shape (display-name keys).
///
/// Two engineers are in `BANDUNG`, one in `BANDUNG BARAT`; exact location
/// matching must tell them apart.
pub const ROSTER_JSON: &str = r#"[
  {"NIK": "91150001", "NAMA EOS": "Ari Wibowo", "NO HP": "081234500001", "CC/AREA": "CC-BDG-01", "NAMA CC": "PT Telkom Akses", "WITEL EOS-NEW": "BANDUNG"},
  {"NIK": "91150002", "NAMA EOS": "Budi Santoso", "NO HP": "081234500002", "CC/AREA": "CC-JKT-02", "NAMA CC": "PT Infomedia Nusantara", "WITEL EOS-NEW": "JAKARTA SELATAN"},
  {"NIK": "91150003", "NAMA EOS": "Citra Lestari", "NO HP": "081234500003", "CC/AREA": "CC-BDG-03", "NAMA CC": "PT Telkom Akses", "WITEL EOS-NEW": "BANDUNG BARAT"},
  {"NIK": "91150004", "NAMA EOS": "Dewi Anggraini", "NO HP": "081234500004", "CC/AREA": "CC-SBY-01", "NAMA CC": "PT Sigma Cipta Caraka", "WITEL EOS-NEW": "SURABAYA"},
  {"NIK": "91150005", "NAMA EOS": "Fajar Nugroho", "NO HP": "081234500005", "CC/AREA": "CC-BDG-02", "NAMA CC": "PT Infomedia Nusantara", "WITEL EOS-NEW": "BANDUNG"}
]"#;

/// Ids in [`ROSTER_JSON`], in file order.
pub const ROSTER_IDS: [&str; 5] = ["91150001", "91150002", "91150003", "91150004", "91150005"];

/// Records with missing, null and numeric values, as exported spreadsheets
/// tend to produce.
pub const ROSTER_JSON_LOOSE: &str = r#"[
  {"NIK": 91150101, "NAMA EOS": "Gita", "NO HP": null, "NAMA CC": "PT Telkom Akses", "WITEL EOS-NEW": "MALANG"},
  {"NIK": "91150102", "NAMA EOS": "Hadi"}
]"#;

/// Write `contents` to a fresh temp file and return its handle. The file is
/// removed when the handle drops.
pub fn write_temp_json(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
