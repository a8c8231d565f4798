//! Per-clinic configuration tables.
//!
//! Everything clinic-specific lives here: page URLs, keyword tables,
//! operator-verified defaults, per-category confidence constants, and gap
//! rules. The extraction engine in `extract/` is generic over these tables,
//! so adding a clinic means writing a new constructor, not a new scraper.

use std::collections::BTreeMap;

use crate::record::{Address, InsuranceInfo, PatientExperience, PolicyValue, Provider};

pub const PROFILE_NAMES: &[&str] = &["fort-worth-ent", "fort-worth-eye"];

pub struct ClinicProfile {
    pub clinic_name: String,
    pub base_url: String,
    pub output_file: String,
    /// Hand-picked completeness denominator. Not derived from the record
    /// shape; a new profile must pick its own.
    pub total_fields_target: usize,
    pub contact: ContactRules,
    pub hours: HoursRules,
    pub providers: ProviderRules,
    pub services: ServicesRules,
    pub insurance: InsuranceRules,
    pub experience: ExperienceRules,
}

// ── Contact ──

pub struct ContactRules {
    pub confidence: f64,
    pub contact_page: String,
    pub phone_policy: PhonePolicy,
    /// Label → number literals checked verbatim against the contact page.
    pub known_phones: Vec<(String, String)>,
    /// Promote a regex-found phone on the contact page to a `secondary` slot
    /// when it is not already recorded.
    pub collect_secondary: bool,
    pub address: Address,
    pub address_rule: AddressRule,
    pub scan_email: bool,
    /// Platform label → href keyword, matched over homepage links.
    pub social_platforms: Vec<(String, String)>,
}

pub enum PhonePolicy {
    /// Any phone-shaped match on the homepage confirms the operator-verified
    /// main number; the raw capture is not trusted.
    KnownLiteral(String),
    /// The first phone-shaped match becomes the main number.
    FirstMatch,
}

pub enum AddressRule {
    /// Fill the verified address whenever the homepage is reachable.
    OnHomepage,
    /// Fill it only when the homepage text carries this literal.
    LiteralMatch(String),
}

// ── Hours ──

pub struct HoursRules {
    pub confidence: f64,
    pub hour_pages: Vec<String>,
    pub detection: HoursDetection,
    pub default_week: BTreeMap<String, String>,
    pub policies_page: String,
    pub default_policies: BTreeMap<String, PolicyValue>,
    pub gap_if_no_regular: Option<String>,
    pub gap_if_no_holiday: Option<String>,
    pub gap_if_no_emergency: Option<String>,
}

pub enum HoursDetection {
    /// All keywords present (case-insensitive) confirms the default week.
    WeekdayKeywords(Vec<String>),
    /// A verbatim hours line confirms the default week.
    Literal(String),
}

// ── Providers ──

pub struct ProviderRules {
    pub confidence: f64,
    pub mode: ProviderMode,
    pub gap_if_fewer_than: Option<(usize, String)>,
    pub always_gaps: Vec<String>,
}

pub enum ProviderMode {
    /// One bio page per provider; specialties keyword-scanned from the page,
    /// surname-keyed defaults when the scan comes up empty or the page is
    /// unreachable.
    ProfilePages {
        pages: Vec<ProviderPage>,
        title: String,
        specialty_keywords: Vec<String>,
        fallbacks: Vec<(String, Vec<String>)>,
    },
    /// One roster page listing everyone; the roster itself is the
    /// operator-verified table and doubles as the fallback.
    Roster { page: String, roster: Vec<Provider> },
}

pub struct ProviderPage {
    pub url: String,
    pub expected_name: String,
}

// ── Services ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceBucket {
    Medical,
    Surgical,
    Diagnostic,
    Optical,
    SpecialtyPrograms,
    Conditions,
}

pub struct ServicesRules {
    pub confidence: f64,
    /// Pages scanned keyword-by-keyword into buckets.
    pub keyword_pages: Vec<String>,
    pub keyword_buckets: Vec<(ServiceBucket, Vec<String>)>,
    /// Fixed lists granted when a given page is reachable.
    pub page_grants: Vec<PageGrant>,
    /// Defaults applied to buckets the scan left empty.
    pub fill_empty: Vec<(ServiceBucket, Vec<String>)>,
    /// Buckets set unconditionally from the verified table.
    pub always_fill: Vec<(ServiceBucket, Vec<String>)>,
}

pub struct PageGrant {
    pub url: String,
    pub grants: Vec<(ServiceBucket, Vec<String>)>,
}

// ── Insurance ──

pub struct InsuranceRules {
    pub confidence: f64,
    pub page: String,
    pub defaults: InsuranceInfo,
    /// When configured, plan keywords found on the page replace the default
    /// plan list (plus the catch-all).
    pub plan_scan: Option<PlanScan>,
}

pub struct PlanScan {
    pub keywords: Vec<String>,
    pub catch_all: String,
}

// ── Patient experience ──

pub struct ExperienceRules {
    pub confidence: f64,
    pub page: String,
    pub defaults: PatientExperience,
    pub triggers: Vec<TextTrigger>,
    pub always_gaps: Vec<String>,
}

pub struct TextTrigger {
    pub keyword: String,
    pub action: TriggerAction,
}

pub enum TriggerAction {
    AppendFacilityPolicy(String),
    EnablePatientPortal,
}

// ── Profiles ──

impl ClinicProfile {
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "fort-worth-ent" => Some(Self::fort_worth_ent()),
            "fort-worth-eye" => Some(Self::fort_worth_eye()),
            _ => None,
        }
    }

    pub fn fort_worth_ent() -> Self {
        let base = "https://fortworthent.net";
        ClinicProfile {
            clinic_name: "Fort Worth ENT & Sinus".into(),
            base_url: base.into(),
            output_file: "fort_worth_ent_data.json".into(),
            total_fields_target: 30,
            contact: ContactRules {
                confidence: 0.9,
                contact_page: format!("{base}/contact-us/"),
                phone_policy: PhonePolicy::KnownLiteral("817-332-8848".into()),
                known_phones: vec![],
                collect_secondary: true,
                address: Address {
                    street: "5751 Edwards Ranch Road".into(),
                    city: "Fort Worth".into(),
                    state: "TX".into(),
                    zip_code: "76109".into(),
                    full_address: "5751 Edwards Ranch Road, Fort Worth, TX 76109".into(),
                },
                address_rule: AddressRule::OnHomepage,
                scan_email: true,
                social_platforms: vec![
                    ("facebook".into(), "facebook".into()),
                    ("linkedin".into(), "linkedin".into()),
                ],
            },
            hours: HoursRules {
                confidence: 0.7,
                hour_pages: vec![
                    format!("{base}/contact-us/"),
                    format!("{base}/patient-information/"),
                ],
                detection: HoursDetection::WeekdayKeywords(strings(&["monday", "friday"])),
                default_week: weekday_hours("8:00 AM - 5:00 PM"),
                policies_page: format!("{base}/patient-information/"),
                default_policies: policies(&[
                    ("scheduling_method", "Call 817-332-8848".into()),
                    ("online_scheduling", "Available via patient portal".into()),
                    ("cancellation_policy", "24 hours advance notice required".into()),
                ]),
                gap_if_no_regular: Some("Specific office hours not found".into()),
                gap_if_no_holiday: None,
                gap_if_no_emergency: None,
            },
            providers: ProviderRules {
                confidence: 0.8,
                mode: ProviderMode::ProfilePages {
                    pages: vec![
                        ProviderPage {
                            url: format!("{base}/team/otolaryngologist/"),
                            expected_name: "Dr. J. Bradley McIntyre, MD".into(),
                        },
                        ProviderPage {
                            url: format!("{base}/team/jeremy-p-watkins-md-otolaryngologist/"),
                            expected_name: "Dr. Jeremy P. Watkins, MD".into(),
                        },
                        ProviderPage {
                            url: format!("{base}/sean-m-callahan-md/"),
                            expected_name: "Dr. Sean M. Callahan, MD".into(),
                        },
                    ],
                    title: "Otolaryngologist".into(),
                    specialty_keywords: strings(&[
                        "sinus surgery",
                        "pediatric ent",
                        "sleep apnea",
                        "voice disorders",
                        "thyroid surgery",
                        "head and neck",
                        "allergy treatment",
                        "hearing loss",
                        "balloon sinuplasty",
                        "endoscopic surgery",
                    ]),
                    fallbacks: vec![
                        (
                            "McIntyre".into(),
                            strings(&[
                                "Comprehensive ENT Care",
                                "Sinus Surgery",
                                "Head and Neck Surgery",
                            ]),
                        ),
                        (
                            "Watkins".into(),
                            strings(&["ENT Surgery", "Pediatric ENT", "Allergy Treatment"]),
                        ),
                        (
                            "Callahan".into(),
                            strings(&[
                                "Sleep Apnea Treatment",
                                "Voice Disorders",
                                "Thyroid Surgery",
                            ]),
                        ),
                    ],
                },
                gap_if_fewer_than: Some((3, "Not all provider pages accessible".into())),
                always_gaps: vec![],
            },
            services: ServicesRules {
                confidence: 0.85,
                keyword_pages: vec![
                    format!("{base}/ear-nose-throat/"),
                    format!("{base}/fort-worth-sinus-center/"),
                    format!("{base}/fort-worth-thyroid-center/thyroid-disease/"),
                    format!("{base}/audiology-hearing-loss/hearing-aids/"),
                    format!("{base}/allergies-fort-worth/"),
                    format!("{base}/vivaer-nasal-airway-remodeling/"),
                    format!("{base}/fort-worth-sinus-center/balloon-sinuplasty/"),
                    format!("{base}/fort-worth-sinus-center/office-ct-scan/"),
                    format!("{base}/ear-nose-throat/snoring-obstructive-sleep-apnea-osa/"),
                    format!("{base}/ear-nose-throat/voice-problems/"),
                ],
                keyword_buckets: vec![
                    (
                        ServiceBucket::Surgical,
                        strings(&[
                            "balloon sinuplasty",
                            "vivaer",
                            "septoplasty",
                            "turbinate reduction",
                            "rhinoplasty",
                            "tonsillectomy",
                            "adenoidectomy",
                            "thyroidectomy",
                            "ear tubes",
                            "mastoidectomy",
                            "stapedectomy",
                            "parotidectomy",
                        ]),
                    ),
                    (
                        ServiceBucket::Medical,
                        strings(&[
                            "allergy testing",
                            "hearing evaluation",
                            "voice therapy",
                            "sleep study",
                            "nasal endoscopy",
                            "laryngoscopy",
                        ]),
                    ),
                    (
                        ServiceBucket::Conditions,
                        strings(&[
                            "sinusitis",
                            "sleep apnea",
                            "hearing loss",
                            "tinnitus",
                            "voice disorders",
                            "thyroid",
                            "allergies",
                            "nasal polyps",
                            "deviated septum",
                            "vertigo",
                            "ear infections",
                        ]),
                    ),
                ],
                page_grants: vec![],
                fill_empty: vec![
                    (
                        ServiceBucket::Surgical,
                        strings(&[
                            "Balloon Sinuplasty",
                            "VivAer® Nasal Airway Remodeling",
                            "Septoplasty",
                            "Turbinate Reduction",
                            "Tonsillectomy",
                            "Adenoidectomy",
                            "Thyroid Surgery",
                            "Ear Tube Placement",
                        ]),
                    ),
                    (
                        ServiceBucket::Medical,
                        strings(&[
                            "Comprehensive ENT Evaluation",
                            "Allergy Testing",
                            "Hearing Evaluations",
                            "Voice Therapy",
                            "Sleep Apnea Evaluation",
                        ]),
                    ),
                    (
                        ServiceBucket::Conditions,
                        strings(&[
                            "Chronic Sinusitis",
                            "Sleep Apnea",
                            "Hearing Loss",
                            "Voice Disorders",
                            "Thyroid Conditions",
                            "Allergies",
                            "Nasal Polyps",
                            "Deviated Septum",
                            "Ear Infections",
                        ]),
                    ),
                ],
                always_fill: vec![
                    (
                        ServiceBucket::Diagnostic,
                        strings(&[
                            "In-office CT Scans",
                            "Allergy Testing",
                            "Audiometry",
                            "Tympanometry",
                            "Nasal Endoscopy",
                            "Laryngoscopy",
                        ]),
                    ),
                    (
                        ServiceBucket::SpecialtyPrograms,
                        strings(&[
                            "Fort Worth Sinus Center",
                            "Fort Worth Thyroid Center",
                            "Pediatric ENT",
                            "Sleep Apnea Treatment",
                            "Voice Center",
                            "Allergy and Immunotherapy Center",
                        ]),
                    ),
                ],
            },
            insurance: InsuranceRules {
                confidence: 0.7,
                page: format!("{base}/patient-information/"),
                defaults: InsuranceInfo {
                    accepted_plans: strings(&[
                        "Most major health insurance plans",
                        "Medicare",
                        "Medicaid",
                        "Aetna",
                        "Blue Cross Blue Shield",
                        "Cigna",
                        "UnitedHealthcare",
                    ]),
                    payment_policies: policies(&[
                        ("copays_due_at_service", true.into()),
                        ("deductibles_due_at_service", true.into()),
                        ("payment_methods", "Cash, check, credit cards accepted".into()),
                        ("payment_plans", "Available upon request".into()),
                    ]),
                    special_notes: strings(&[
                        "Insurance verification recommended prior to appointment",
                        "Specialist referral may be required by insurance",
                        "Coverage varies by procedure and insurance plan",
                    ]),
                },
                plan_scan: Some(PlanScan {
                    keywords: strings(&[
                        "aetna",
                        "blue cross",
                        "cigna",
                        "united",
                        "medicare",
                        "medicaid",
                    ]),
                    catch_all: "Most other major insurance plans".into(),
                }),
            },
            experience: ExperienceRules {
                confidence: 0.75,
                page: format!("{base}/patient-information/"),
                defaults: PatientExperience {
                    walk_in_policy: Some("Appointments required".into()),
                    wait_time_expectations: None,
                    what_to_bring: strings(&[
                        "Photo identification",
                        "Insurance cards",
                        "List of current medications",
                        "Referral from primary care physician (if required)",
                        "Previous medical records related to ENT issues",
                    ]),
                    facility_policies: strings(&[
                        "Arrive 15 minutes early for appointments",
                        "Complete patient forms before visit",
                        "Children must be accompanied by parent/guardian",
                    ]),
                    accessibility: Some("ADA compliant facility".into()),
                    patient_portal: true,
                    communication_preferences: strings(&[
                        "Phone calls for urgent matters",
                        "Patient portal for routine communication",
                    ]),
                },
                triggers: vec![
                    TextTrigger {
                        keyword: "new patient".into(),
                        action: TriggerAction::AppendFacilityPolicy(
                            "New patients should arrive 30 minutes early".into(),
                        ),
                    },
                    TextTrigger {
                        keyword: "forms".into(),
                        action: TriggerAction::AppendFacilityPolicy(
                            "Patient forms available online".into(),
                        ),
                    },
                    TextTrigger {
                        keyword: "portal".into(),
                        action: TriggerAction::EnablePatientPortal,
                    },
                ],
                always_gaps: vec![],
            },
        }
    }

    pub fn fort_worth_eye() -> Self {
        let base = "https://www.ranelle.com";
        ClinicProfile {
            clinic_name: "Fort Worth Eye Associates".into(),
            base_url: base.into(),
            output_file: "fort_worth_eye_data.json".into(),
            total_fields_target: 25,
            contact: ContactRules {
                confidence: 0.9,
                contact_page: format!("{base}/contact-us"),
                phone_policy: PhonePolicy::FirstMatch,
                known_phones: vec![
                    ("optical_shop".into(), "817-732-9307".into()),
                    ("fax".into(), "817-732-5499".into()),
                ],
                collect_secondary: false,
                address: Address {
                    street: "5000 Collinwood Avenue".into(),
                    city: "Fort Worth".into(),
                    state: "TX".into(),
                    zip_code: "76107".into(),
                    full_address: "5000 Collinwood Avenue, Fort Worth, TX 76107".into(),
                },
                address_rule: AddressRule::LiteralMatch("5000 Collinwood Avenue".into()),
                scan_email: false,
                social_platforms: vec![],
            },
            hours: HoursRules {
                confidence: 0.8,
                hour_pages: vec![format!("{base}/contact-us")],
                detection: HoursDetection::Literal("Monday – Friday: 8 AM – 5 PM".into()),
                default_week: weekday_hours("8:00 AM - 5:00 PM"),
                policies_page: format!("{base}/patient-information"),
                default_policies: policies(&[
                    ("cancellation_policy", "24 hours advance notice required".into()),
                    ("missed_appointment_fee", "$25".into()),
                    ("scheduling_method", "Call 817-732-5593".into()),
                    ("patient_portal_required", true.into()),
                ]),
                gap_if_no_regular: None,
                gap_if_no_holiday: Some("Holiday hours not specified".into()),
                gap_if_no_emergency: Some("Emergency/after-hours contact not specified".into()),
            },
            providers: ProviderRules {
                confidence: 0.7,
                mode: ProviderMode::Roster {
                    page: format!("{base}/eye-doctors"),
                    roster: vec![
                        Provider {
                            name: "Dr. Ann E. Ranelle, DO".into(),
                            title: "Ophthalmologist".into(),
                            specialties: strings(&[
                                "Comprehensive Ophthalmology",
                                "Pediatric Ophthalmology",
                                "Strabismus",
                            ]),
                            education: None,
                            experience: Some("Part of three-generation practice".into()),
                            languages: None,
                        },
                        Provider {
                            name: "Dr. Tyler B. Moore".into(),
                            title: "Ophthalmologist".into(),
                            specialties: strings(&["Comprehensive Ophthalmology"]),
                            education: None,
                            experience: None,
                            languages: None,
                        },
                        Provider {
                            name: "Dr. Kacy D. Pate, OD".into(),
                            title: "Therapeutic Optometrist".into(),
                            specialties: strings(&[
                                "Therapeutic Optometry",
                                "Comprehensive Eye Care",
                            ]),
                            education: None,
                            experience: None,
                            languages: None,
                        },
                    ],
                },
                gap_if_fewer_than: None,
                always_gaps: strings(&[
                    "Detailed education backgrounds",
                    "Years of experience",
                    "Languages spoken by providers",
                ]),
            },
            services: ServicesRules {
                confidence: 0.85,
                keyword_pages: vec![],
                keyword_buckets: vec![],
                page_grants: vec![
                    PageGrant {
                        url: format!("{base}/adult-ophthalmology"),
                        grants: vec![
                            (
                                ServiceBucket::Conditions,
                                strings(&[
                                    "Cataracts",
                                    "Diabetic Eye Disease",
                                    "Glaucoma",
                                    "Dry Eye Syndrome",
                                    "Strabismus",
                                    "Amblyopia (Lazy Eye)",
                                    "Macular Degeneration",
                                    "Floaters and Flashers",
                                ]),
                            ),
                            (
                                ServiceBucket::Surgical,
                                strings(&[
                                    "Light Adjustable Lens cataract surgery",
                                    "Strabismus surgery",
                                    "Blepharoplasty (eyelid surgery)",
                                ]),
                            ),
                            (
                                ServiceBucket::Medical,
                                strings(&[
                                    "Comprehensive vision screenings",
                                    "Annual ophthalmic exams",
                                    "Botox treatments",
                                ]),
                            ),
                        ],
                    },
                    PageGrant {
                        url: format!("{base}/optometry"),
                        grants: vec![
                            (
                                ServiceBucket::Optical,
                                strings(&[
                                    "Comprehensive eye examinations",
                                    "Eyeglasses prescriptions",
                                    "Contact lens fittings",
                                    "Vision therapy",
                                    "Low-vision rehabilitation",
                                ]),
                            ),
                            (
                                ServiceBucket::Diagnostic,
                                strings(&[
                                    "Glaucoma testing",
                                    "Visual acuity testing",
                                    "Color perception testing",
                                    "Depth perception testing",
                                    "Eye focus and coordination testing",
                                ]),
                            ),
                            (
                                ServiceBucket::SpecialtyPrograms,
                                strings(&[
                                    "Computer Vision Syndrome treatment",
                                    "Blue light reduction lenses",
                                    "Diabetic retinopathy screening",
                                ]),
                            ),
                        ],
                    },
                ],
                fill_empty: vec![
                    (
                        ServiceBucket::Conditions,
                        strings(&[
                            "Cataracts",
                            "Diabetic Eye Disease",
                            "Glaucoma",
                            "Dry Eye Syndrome",
                            "Strabismus",
                            "Amblyopia (Lazy Eye)",
                            "Macular Degeneration",
                            "Floaters and Flashers",
                        ]),
                    ),
                    (
                        ServiceBucket::Surgical,
                        strings(&[
                            "Light Adjustable Lens cataract surgery",
                            "Strabismus surgery",
                            "Blepharoplasty (eyelid surgery)",
                        ]),
                    ),
                    (
                        ServiceBucket::Medical,
                        strings(&[
                            "Comprehensive vision screenings",
                            "Annual ophthalmic exams",
                            "Botox treatments",
                        ]),
                    ),
                    (
                        ServiceBucket::Optical,
                        strings(&[
                            "Comprehensive eye examinations",
                            "Eyeglasses prescriptions",
                            "Contact lens fittings",
                            "Vision therapy",
                            "Low-vision rehabilitation",
                        ]),
                    ),
                    (
                        ServiceBucket::Diagnostic,
                        strings(&[
                            "Glaucoma testing",
                            "Visual acuity testing",
                            "Color perception testing",
                            "Depth perception testing",
                            "Eye focus and coordination testing",
                        ]),
                    ),
                    (
                        ServiceBucket::SpecialtyPrograms,
                        strings(&[
                            "Computer Vision Syndrome treatment",
                            "Blue light reduction lenses",
                            "Diabetic retinopathy screening",
                        ]),
                    ),
                ],
                always_fill: vec![],
            },
            insurance: InsuranceRules {
                confidence: 0.8,
                page: format!("{base}/patient-information"),
                defaults: InsuranceInfo {
                    accepted_plans: strings(&[
                        "Most major health plans",
                        "Aetna",
                        "Aetna Better Health Medicaid",
                        "Aetna Medicare",
                        "Medicare (for medical visits)",
                    ]),
                    payment_policies: policies(&[
                        ("deductibles_due_at_service", true.into()),
                        ("copays_due_at_service", true.into()),
                        ("refraction_fee", "$25 (not covered by insurance)".into()),
                        ("missed_appointment_fee", "$25".into()),
                    ]),
                    special_notes: strings(&[
                        "No longer accepting new Medicaid or CHIP patients as of January 2, 2023",
                        "Routine vs medical visits have different insurance coverage",
                        "Refraction exams typically not covered by insurance",
                    ]),
                },
                plan_scan: None,
            },
            experience: ExperienceRules {
                confidence: 0.6,
                page: format!("{base}/patient-information"),
                defaults: PatientExperience {
                    walk_in_policy: None,
                    wait_time_expectations: None,
                    what_to_bring: strings(&[
                        "Identification",
                        "Medical insurance card",
                        "Current eye medications",
                    ]),
                    facility_policies: strings(&[
                        "No food or drinks in waiting room",
                        "No cell phone use in waiting room",
                        "Patient Portal registration required before appointment",
                        "Use Google Chrome for Patient Portal access",
                    ]),
                    accessibility: None,
                    patient_portal: true,
                    communication_preferences: strings(&[
                        "Clinical questions may have delayed response",
                        "Physicians prioritize in-clinic patient care",
                    ]),
                },
                triggers: vec![],
                always_gaps: strings(&[
                    "Walk-in policy",
                    "Wait time expectations",
                    "Accessibility features",
                ]),
            },
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn weekday_hours(range: &str) -> BTreeMap<String, String> {
    let mut week = BTreeMap::new();
    for day in ["monday", "tuesday", "wednesday", "thursday", "friday"] {
        week.insert(day.to_string(), range.to_string());
    }
    week.insert("saturday".to_string(), "Closed".to_string());
    week.insert("sunday".to_string(), "Closed".to_string());
    week
}

fn policies(pairs: &[(&str, PolicyValue)]) -> BTreeMap<String, PolicyValue> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_profile_resolves() {
        for name in PROFILE_NAMES {
            assert!(ClinicProfile::by_name(name).is_some(), "missing {name}");
        }
        assert!(ClinicProfile::by_name("unknown-clinic").is_none());
    }

    #[test]
    fn profiles_carry_distinct_targets() {
        assert_eq!(ClinicProfile::fort_worth_ent().total_fields_target, 30);
        assert_eq!(ClinicProfile::fort_worth_eye().total_fields_target, 25);
    }

    #[test]
    fn default_week_covers_all_seven_days() {
        let week = weekday_hours("8:00 AM - 5:00 PM");
        assert_eq!(week.len(), 7);
        assert_eq!(week["saturday"], "Closed");
        assert_eq!(week["monday"], "8:00 AM - 5:00 PM");
    }
}
