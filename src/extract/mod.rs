pub mod contact;
pub mod experience;
pub mod hours;
pub mod insurance;
pub mod providers;
pub mod services;

use std::collections::{BTreeMap, HashSet};

use chrono::Local;
use tracing::info;

use crate::fetch::PageSource;
use crate::profile::ClinicProfile;
use crate::record::{count_extracted_fields, mean_confidence, ClinicData, ClinicRecord};

/// What every category extractor hands back: its sub-record, the profile's
/// fixed confidence constant for the category, and any gap notices. The
/// orchestrator folds these into the aggregate record; extractors never touch
/// shared state.
pub struct Extraction<T> {
    pub data: T,
    pub confidence: f64,
    pub gaps: Vec<String>,
}

impl<T> Extraction<T> {
    fn fold_into(
        self,
        category: &str,
        levels: &mut BTreeMap<String, f64>,
        gaps: &mut Vec<String>,
    ) -> T {
        levels.insert(category.to_string(), self.confidence);
        gaps.extend(self.gaps);
        self.data
    }
}

/// Run the six extractors in fixed order and assemble the clinic record.
///
/// The order matters only for log readability; no category depends on
/// another. Every fetch is awaited to completion (or retry exhaustion)
/// before the pipeline moves on.
pub async fn run_profile(fetcher: &impl PageSource, profile: &ClinicProfile) -> ClinicRecord {
    info!("Starting comprehensive data extraction...");

    let mut confidence_levels = BTreeMap::new();
    let mut identified_gaps = Vec::new();

    let contact = contact::extract(fetcher, &profile.contact, &profile.base_url).await;
    let hours = hours::extract(fetcher, &profile.hours).await;
    let providers = providers::extract(fetcher, &profile.providers).await;
    let services = services::extract(fetcher, &profile.services).await;
    let insurance = insurance::extract(fetcher, &profile.insurance).await;
    let experience = experience::extract(fetcher, &profile.experience).await;

    let data = ClinicData {
        contact_info: contact.fold_into("contact_info", &mut confidence_levels, &mut identified_gaps),
        hours_info: hours.fold_into("hours_info", &mut confidence_levels, &mut identified_gaps),
        provider_info: providers.fold_into(
            "provider_info",
            &mut confidence_levels,
            &mut identified_gaps,
        ),
        services_info: services.fold_into(
            "services_info",
            &mut confidence_levels,
            &mut identified_gaps,
        ),
        insurance_info: insurance.fold_into(
            "insurance_info",
            &mut confidence_levels,
            &mut identified_gaps,
        ),
        patient_experience: experience.fold_into(
            "patient_experience",
            &mut confidence_levels,
            &mut identified_gaps,
        ),
    };

    let overall_confidence = mean_confidence(&confidence_levels);
    let extracted_fields = count_extracted_fields(&data);
    let data_completeness = extracted_fields as f64 / profile.total_fields_target as f64;

    info!("Extraction complete. Overall confidence: {:.2}", overall_confidence);
    info!("Data completeness: {:.2}%", data_completeness * 100.0);

    ClinicRecord {
        clinic_name: profile.clinic_name.clone(),
        extraction_timestamp: Local::now().to_rfc3339(),
        confidence_levels,
        identified_gaps,
        data,
        overall_confidence,
        data_completeness,
    }
}

/// Set-semantics dedup keeping the first occurrence.
pub(crate) fn dedup_preserve(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(item.clone())).collect()
}

/// Capitalize the first letter of each word, like the keyword tables expect
/// ("balloon sinuplasty" -> "Balloon Sinuplasty").
pub(crate) fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
