use std::collections::BTreeMap;

use tracing::info;

use super::Extraction;
use crate::fetch::PageSource;
use crate::profile::{HoursDetection, HoursRules};
use crate::record::HoursInfo;

/// Office hours are confirmed, not parsed: a page matching the profile's
/// detection rule unlocks the operator-verified week table. Appointment
/// policies come from the patient-information page the same way.
pub async fn extract(fetcher: &impl PageSource, rules: &HoursRules) -> Extraction<HoursInfo> {
    info!("Extracting hours information...");

    let mut hours = HoursInfo {
        regular_hours: BTreeMap::new(),
        holiday_hours: None,
        appointment_policies: BTreeMap::new(),
        emergency_hours: None,
    };

    for url in &rules.hour_pages {
        if let Some(page) = fetcher.fetch_page(url).await {
            let matched = match &rules.detection {
                HoursDetection::WeekdayKeywords(keywords) => {
                    keywords.iter().all(|k| page.contains_ci(k))
                }
                HoursDetection::Literal(literal) => page.contains(literal),
            };
            if matched {
                hours.regular_hours = rules.default_week.clone();
                break;
            }
        }
    }

    if fetcher.fetch_page(&rules.policies_page).await.is_some() {
        hours.appointment_policies = rules.default_policies.clone();
    }

    let mut gaps = Vec::new();
    if hours.regular_hours.is_empty() {
        if let Some(gap) = &rules.gap_if_no_regular {
            gaps.push(gap.clone());
        }
    }
    if hours.holiday_hours.is_none() {
        if let Some(gap) = &rules.gap_if_no_holiday {
            gaps.push(gap.clone());
        }
    }
    if hours.emergency_hours.is_none() {
        if let Some(gap) = &rules.gap_if_no_emergency {
            gaps.push(gap.clone());
        }
    }

    Extraction {
        data: hours,
        confidence: rules.confidence,
        gaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::stub::StubFetcher;
    use crate::profile::ClinicProfile;

    #[tokio::test]
    async fn weekday_keywords_unlock_default_week() {
        let profile = ClinicProfile::fort_worth_ent();
        let fetcher = StubFetcher::new().with_text(
            &profile.hours.hour_pages[0],
            "We are open Monday through Friday.",
        );

        let result = extract(&fetcher, &profile.hours).await;
        assert_eq!(result.data.regular_hours.len(), 7);
        assert_eq!(result.data.regular_hours["monday"], "8:00 AM - 5:00 PM");
        assert_eq!(result.data.regular_hours["sunday"], "Closed");
        assert!(result.gaps.is_empty());
    }

    #[tokio::test]
    async fn later_page_can_satisfy_detection() {
        let profile = ClinicProfile::fort_worth_ent();
        let fetcher = StubFetcher::new()
            .with_text(&profile.hours.hour_pages[0], "Directions and parking.")
            .with_text(
                &profile.hours.hour_pages[1],
                "Open monday to friday, call ahead.",
            );

        let result = extract(&fetcher, &profile.hours).await;
        assert!(!result.data.regular_hours.is_empty());
    }

    #[tokio::test]
    async fn no_match_appends_profile_gap() {
        let profile = ClinicProfile::fort_worth_ent();
        let fetcher = StubFetcher::new()
            .with_text(&profile.hours.hour_pages[0], "Open Monday only this week.");

        let result = extract(&fetcher, &profile.hours).await;
        assert!(result.data.regular_hours.is_empty());
        assert_eq!(result.gaps, vec!["Specific office hours not found"]);
        assert_eq!(result.confidence, 0.7);
    }

    #[tokio::test]
    async fn literal_detection_is_verbatim() {
        let profile = ClinicProfile::fort_worth_eye();
        let fetcher = StubFetcher::new().with_text(
            &profile.hours.hour_pages[0],
            "Office hours:\nMonday – Friday: 8 AM – 5 PM",
        );

        let result = extract(&fetcher, &profile.hours).await;
        assert_eq!(result.data.regular_hours.len(), 7);
        // Holiday and emergency hours are never extracted for this profile.
        assert_eq!(result.gaps.len(), 2);
    }

    #[tokio::test]
    async fn policies_page_presence_fills_policy_table() {
        let profile = ClinicProfile::fort_worth_ent();
        let fetcher = StubFetcher::new()
            .with_text(&profile.hours.policies_page, "Patient information and forms.");

        let result = extract(&fetcher, &profile.hours).await;
        assert_eq!(result.data.appointment_policies.len(), 3);
        assert!(result
            .data
            .appointment_policies
            .contains_key("cancellation_policy"));
    }

    #[tokio::test]
    async fn all_absent_leaves_tables_empty_with_gaps() {
        let profile = ClinicProfile::fort_worth_eye();
        let fetcher = StubFetcher::new();

        let result = extract(&fetcher, &profile.hours).await;
        assert!(result.data.regular_hours.is_empty());
        assert!(result.data.appointment_policies.is_empty());
        assert_eq!(result.gaps.len(), 2);
    }
}
