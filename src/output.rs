use anyhow::{Context, Result};
use tracing::info;

use crate::record::ClinicRecord;

/// Write the record as pretty JSON at the profile's fixed output path.
pub fn save_json(record: &ClinicRecord, path: &str) -> Result<()> {
    let json =
        serde_json::to_string_pretty(record).context("Failed to serialize clinic record")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {path}"))?;
    info!("Data saved to {}", path);
    Ok(())
}

/// Console view over the finished record. Always printed, even when every
/// fetch failed and the record is pure fallback.
pub fn print_summary(record: &ClinicRecord) {
    println!("\n=== EXTRACTION SUMMARY ===");
    println!("Clinic: {}", record.clinic_name);
    println!(
        "Overall Confidence: {:.2}%",
        record.overall_confidence * 100.0
    );
    println!(
        "Data Completeness: {:.2}%",
        record.data_completeness * 100.0
    );
    println!("Identified Gaps: {}", record.identified_gaps.len());

    if !record.identified_gaps.is_empty() {
        println!("\nData Gaps:");
        for gap in &record.identified_gaps {
            println!("  - {}", gap);
        }
    }
}
