use tracing::info;

use super::Extraction;
use crate::fetch::PageSource;
use crate::profile::{ExperienceRules, TriggerAction};
use crate::record::PatientExperience;

/// Patient-experience facts are mostly verified defaults; a reachable
/// patient-information page can add policies via keyword triggers.
pub async fn extract(
    fetcher: &impl PageSource,
    rules: &ExperienceRules,
) -> Extraction<PatientExperience> {
    info!("Extracting patient experience information...");

    let mut experience = rules.defaults.clone();

    if let Some(page) = fetcher.fetch_page(&rules.page).await {
        for trigger in &rules.triggers {
            if page.contains_ci(&trigger.keyword) {
                match &trigger.action {
                    TriggerAction::AppendFacilityPolicy(policy) => {
                        experience.facility_policies.push(policy.clone());
                    }
                    TriggerAction::EnablePatientPortal => {
                        experience.patient_portal = true;
                    }
                }
            }
        }
    }

    Extraction {
        data: experience,
        confidence: rules.confidence,
        gaps: rules.always_gaps.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::stub::StubFetcher;
    use crate::profile::ClinicProfile;

    #[tokio::test]
    async fn triggers_append_policies_when_keywords_present() {
        let profile = ClinicProfile::fort_worth_ent();
        let fetcher = StubFetcher::new().with_text(
            &profile.experience.page,
            "New patient forms are available through our patient portal.",
        );

        let result = extract(&fetcher, &profile.experience).await;
        assert!(result
            .data
            .facility_policies
            .contains(&"New patients should arrive 30 minutes early".to_string()));
        assert!(result
            .data
            .facility_policies
            .contains(&"Patient forms available online".to_string()));
        assert!(result.data.patient_portal);
        assert_eq!(result.confidence, 0.75);
    }

    #[tokio::test]
    async fn absent_page_keeps_defaults_without_trigger_extras() {
        let profile = ClinicProfile::fort_worth_ent();
        let fetcher = StubFetcher::new();

        let result = extract(&fetcher, &profile.experience).await;
        assert_eq!(result.data.facility_policies.len(), 3);
        assert_eq!(
            result.data.walk_in_policy.as_deref(),
            Some("Appointments required")
        );
        assert!(result.gaps.is_empty());
    }

    #[tokio::test]
    async fn profile_authored_gaps_are_unconditional() {
        let profile = ClinicProfile::fort_worth_eye();
        let fetcher = StubFetcher::new()
            .with_text(&profile.experience.page, "Welcome to patient information.");

        let result = extract(&fetcher, &profile.experience).await;
        assert_eq!(result.gaps.len(), 3);
        assert!(result.data.walk_in_policy.is_none());
        assert!(result.data.patient_portal);
        assert_eq!(result.confidence, 0.6);
    }
}
