use std::collections::BTreeMap;

use serde::Serialize;

/// Root record for one scrape run. Serialized field order is the output order.
#[derive(Debug, Clone, Serialize)]
pub struct ClinicRecord {
    pub clinic_name: String,
    pub extraction_timestamp: String,
    pub confidence_levels: BTreeMap<String, f64>,
    pub identified_gaps: Vec<String>,
    pub data: ClinicData,
    pub overall_confidence: f64,
    pub data_completeness: f64,
}

/// The six category sub-records. Always fully shaped, even on total fetch
/// failure (each extractor falls back to profile defaults).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClinicData {
    pub contact_info: ContactInfo,
    pub hours_info: HoursInfo,
    pub provider_info: Vec<Provider>,
    pub services_info: ServicesInfo,
    pub insurance_info: InsuranceInfo,
    pub patient_experience: PatientExperience,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactInfo {
    pub phone_numbers: BTreeMap<String, String>,
    pub address: Option<Address>,
    pub email: Option<String>,
    pub website: String,
    pub social_media: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub full_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoursInfo {
    pub regular_hours: BTreeMap<String, String>,
    pub holiday_hours: Option<String>,
    pub appointment_policies: BTreeMap<String, PolicyValue>,
    pub emergency_hours: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Provider {
    pub name: String,
    pub title: String,
    pub specialties: Vec<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub languages: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServicesInfo {
    pub medical_services: Vec<String>,
    pub surgical_services: Vec<String>,
    pub diagnostic_services: Vec<String>,
    pub optical_services: Vec<String>,
    pub specialty_programs: Vec<String>,
    pub conditions_treated: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsuranceInfo {
    pub accepted_plans: Vec<String>,
    pub payment_policies: BTreeMap<String, PolicyValue>,
    pub special_notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientExperience {
    pub walk_in_policy: Option<String>,
    pub wait_time_expectations: Option<String>,
    pub what_to_bring: Vec<String>,
    pub facility_policies: Vec<String>,
    pub accessibility: Option<String>,
    pub patient_portal: bool,
    pub communication_preferences: Vec<String>,
}

/// Policy values are either flags or free text (e.g. `copays_due_at_service:
/// true` next to `payment_methods: "Cash, check, credit cards accepted"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PolicyValue {
    Bool(bool),
    Text(String),
}

impl From<bool> for PolicyValue {
    fn from(v: bool) -> Self {
        PolicyValue::Bool(v)
    }
}

impl From<&str> for PolicyValue {
    fn from(v: &str) -> Self {
        PolicyValue::Text(v.to_string())
    }
}

/// Arithmetic mean of the per-category confidences. Zero when no extractor
/// has registered yet (never divides by zero).
pub fn mean_confidence(levels: &BTreeMap<String, f64>) -> f64 {
    if levels.is_empty() {
        return 0.0;
    }
    levels.values().sum::<f64>() / levels.len() as f64
}

/// Count non-empty leaf fields for the completeness ratio.
///
/// Counting rules per category: a mapping contributes its entry count, a
/// populated list or scalar contributes 1, an empty/None field contributes 0.
/// Contact email/website/social are deliberately not counted.
pub fn count_extracted_fields(data: &ClinicData) -> usize {
    let mut count = 0;

    let contact = &data.contact_info;
    count += contact.phone_numbers.len();
    if contact.address.is_some() {
        count += 1;
    }

    let hours = &data.hours_info;
    if !hours.regular_hours.is_empty() {
        count += 1;
    }
    count += hours.appointment_policies.len();

    count += data.provider_info.len();

    let services = &data.services_info;
    for bucket in [
        &services.medical_services,
        &services.surgical_services,
        &services.diagnostic_services,
        &services.optical_services,
        &services.specialty_programs,
        &services.conditions_treated,
    ] {
        if !bucket.is_empty() {
            count += 1;
        }
    }

    let insurance = &data.insurance_info;
    if !insurance.accepted_plans.is_empty() {
        count += 1;
    }
    count += insurance.payment_policies.len();

    let exp = &data.patient_experience;
    count += [
        exp.walk_in_policy.is_some(),
        exp.wait_time_expectations.is_some(),
        !exp.what_to_bring.is_empty(),
        !exp.facility_policies.is_empty(),
        exp.accessibility.is_some(),
        exp.patient_portal,
        !exp.communication_preferences.is_empty(),
    ]
    .iter()
    .filter(|set| **set)
    .count();

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_data() -> ClinicData {
        ClinicData {
            contact_info: ContactInfo {
                phone_numbers: BTreeMap::new(),
                address: None,
                email: None,
                website: "https://example.com".into(),
                social_media: BTreeMap::new(),
            },
            hours_info: HoursInfo {
                regular_hours: BTreeMap::new(),
                holiday_hours: None,
                appointment_policies: BTreeMap::new(),
                emergency_hours: None,
            },
            provider_info: vec![],
            services_info: ServicesInfo {
                medical_services: vec![],
                surgical_services: vec![],
                diagnostic_services: vec![],
                optical_services: vec![],
                specialty_programs: vec![],
                conditions_treated: vec![],
            },
            insurance_info: InsuranceInfo {
                accepted_plans: vec![],
                payment_policies: BTreeMap::new(),
                special_notes: vec![],
            },
            patient_experience: PatientExperience {
                walk_in_policy: None,
                wait_time_expectations: None,
                what_to_bring: vec![],
                facility_policies: vec![],
                accessibility: None,
                patient_portal: false,
                communication_preferences: vec![],
            },
        }
    }

    #[test]
    fn mean_confidence_empty_is_zero() {
        assert_eq!(mean_confidence(&BTreeMap::new()), 0.0);
    }

    #[test]
    fn mean_confidence_is_arithmetic_mean() {
        let mut levels = BTreeMap::new();
        levels.insert("contact_info".to_string(), 0.9);
        levels.insert("hours_info".to_string(), 0.7);
        levels.insert("services_info".to_string(), 0.8);
        let mean = mean_confidence(&levels);
        assert!((mean - 0.8).abs() < 1e-9);
    }

    #[test]
    fn empty_record_counts_zero() {
        assert_eq!(count_extracted_fields(&empty_data()), 0);
    }

    #[test]
    fn mappings_count_entries_scalars_count_one() {
        let mut data = empty_data();
        data.contact_info
            .phone_numbers
            .insert("main".into(), "817-332-8848".into());
        data.contact_info
            .phone_numbers
            .insert("fax".into(), "817-732-5499".into());
        data.contact_info.address = Some(Address {
            street: "5751 Edwards Ranch Road".into(),
            city: "Fort Worth".into(),
            state: "TX".into(),
            zip_code: "76109".into(),
            full_address: "5751 Edwards Ranch Road, Fort Worth, TX 76109".into(),
        });
        data.hours_info
            .regular_hours
            .insert("monday".into(), "8:00 AM - 5:00 PM".into());
        data.hours_info
            .appointment_policies
            .insert("scheduling_method".into(), "Call 817-332-8848".into());
        data.services_info.medical_services.push("Allergy Testing".into());
        data.patient_experience.patient_portal = true;

        // 2 phones + 1 address + 1 regular_hours + 1 policy + 1 bucket + 1 flag
        assert_eq!(count_extracted_fields(&data), 7);
    }

    #[test]
    fn untruthy_experience_fields_do_not_count() {
        let mut data = empty_data();
        data.patient_experience.walk_in_policy = Some("Appointments required".into());
        data.patient_experience.patient_portal = false;
        assert_eq!(count_extracted_fields(&data), 1);
    }

    #[test]
    fn counter_is_pure_and_idempotent() {
        let mut data = empty_data();
        data.provider_info.push(Provider {
            name: "Dr. Ann E. Ranelle, DO".into(),
            title: "Ophthalmologist".into(),
            specialties: vec!["Strabismus".into()],
            education: None,
            experience: None,
            languages: None,
        });
        let first = count_extracted_fields(&data);
        let second = count_extracted_fields(&data);
        assert_eq!(first, 1);
        assert_eq!(first, second);
    }

    #[test]
    fn policy_values_serialize_untagged() {
        let mut policies: BTreeMap<String, PolicyValue> = BTreeMap::new();
        policies.insert("copays_due_at_service".into(), true.into());
        policies.insert("missed_appointment_fee".into(), "$25".into());
        let json = serde_json::to_string(&policies).unwrap();
        assert_eq!(
            json,
            r#"{"copays_due_at_service":true,"missed_appointment_fee":"$25"}"#
        );
    }
}
