use tracing::{info, warn};

use super::{dedup_preserve, title_case, Extraction};
use crate::fetch::PageSource;
use crate::profile::{ProviderMode, ProviderRules};
use crate::record::Provider;

/// Provider entries resolve one of two ways: per-provider bio pages with a
/// keyword-scanned specialty list (surname-keyed defaults as the safety net),
/// or a single roster page whose verified roster doubles as the fallback.
pub async fn extract(
    fetcher: &impl PageSource,
    rules: &ProviderRules,
) -> Extraction<Vec<Provider>> {
    info!("Extracting provider information...");

    let mut providers = Vec::new();

    match &rules.mode {
        ProviderMode::ProfilePages {
            pages,
            title,
            specialty_keywords,
            fallbacks,
        } => {
            for entry in pages {
                match fetcher.fetch_page(&entry.url).await {
                    Some(page) => {
                        let mut specialties: Vec<String> = specialty_keywords
                            .iter()
                            .filter(|keyword| page.contains_ci(keyword))
                            .map(|keyword| title_case(keyword))
                            .collect();
                        if specialties.is_empty() {
                            if let Some(defaults) =
                                surname_defaults(fallbacks, &entry.expected_name)
                            {
                                specialties = defaults.to_vec();
                            }
                        }
                        providers.push(Provider {
                            name: entry.expected_name.clone(),
                            title: title.clone(),
                            specialties: dedup_preserve(specialties),
                            education: None,
                            experience: None,
                            languages: None,
                        });
                    }
                    None => {
                        if let Some(defaults) = surname_defaults(fallbacks, &entry.expected_name)
                        {
                            providers.push(Provider {
                                name: entry.expected_name.clone(),
                                title: title.clone(),
                                specialties: defaults.to_vec(),
                                education: None,
                                experience: None,
                                languages: None,
                            });
                        }
                    }
                }
            }
        }
        ProviderMode::Roster { page, roster } => {
            if fetcher.fetch_page(page).await.is_none() {
                warn!("Provider roster page unavailable, using verified roster");
            }
            providers = roster.clone();
        }
    }

    let mut gaps = Vec::new();
    if let Some((minimum, gap)) = &rules.gap_if_fewer_than {
        if providers.len() < *minimum {
            gaps.push(gap.clone());
        }
    }
    gaps.extend(rules.always_gaps.iter().cloned());

    Extraction {
        data: providers,
        confidence: rules.confidence,
        gaps,
    }
}

fn surname_defaults<'a>(
    fallbacks: &'a [(String, Vec<String>)],
    expected_name: &str,
) -> Option<&'a Vec<String>> {
    let name_lower = expected_name.to_lowercase();
    fallbacks
        .iter()
        .find(|(surname, _)| name_lower.contains(&surname.to_lowercase()))
        .map(|(_, defaults)| defaults)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::stub::StubFetcher;
    use crate::profile::ClinicProfile;

    fn ent_pages(profile: &ClinicProfile) -> Vec<String> {
        match &profile.providers.mode {
            ProviderMode::ProfilePages { pages, .. } => {
                pages.iter().map(|p| p.url.clone()).collect()
            }
            _ => panic!("expected per-provider pages"),
        }
    }

    #[tokio::test]
    async fn all_pages_absent_falls_back_to_three_surname_keyed_entries() {
        let profile = ClinicProfile::fort_worth_ent();
        let fetcher = StubFetcher::new();

        let result = extract(&fetcher, &profile.providers).await;
        assert_eq!(result.data.len(), 3);
        assert!(result.data[0].name.contains("McIntyre"));
        assert!(result.data[1].name.contains("Watkins"));
        assert!(result.data[2].name.contains("Callahan"));
        assert_eq!(
            result.data[1].specialties,
            vec!["ENT Surgery", "Pediatric ENT", "Allergy Treatment"]
        );
        // All three resolved via fallback, so the shortfall gap stays silent.
        assert!(result.gaps.is_empty());
        assert_eq!(result.confidence, 0.8);
    }

    #[tokio::test]
    async fn page_text_drives_specialty_keywords() {
        let profile = ClinicProfile::fort_worth_ent();
        let urls = ent_pages(&profile);
        let fetcher = StubFetcher::new().with_text(
            &urls[0],
            "Dr. McIntyre performs sinus surgery and balloon sinuplasty.",
        );

        let result = extract(&fetcher, &profile.providers).await;
        let mcintyre = &result.data[0];
        assert_eq!(
            mcintyre.specialties,
            vec!["Sinus Surgery", "Balloon Sinuplasty"]
        );
        assert_eq!(mcintyre.title, "Otolaryngologist");
    }

    #[tokio::test]
    async fn empty_scan_on_present_page_uses_surname_defaults() {
        let profile = ClinicProfile::fort_worth_ent();
        let urls = ent_pages(&profile);
        let fetcher = StubFetcher::new()
            .with_text(&urls[2], "Biography coming soon.");

        let result = extract(&fetcher, &profile.providers).await;
        let callahan = result
            .data
            .iter()
            .find(|p| p.name.contains("Callahan"))
            .unwrap();
        assert_eq!(
            callahan.specialties,
            vec!["Sleep Apnea Treatment", "Voice Disorders", "Thyroid Surgery"]
        );
    }

    #[tokio::test]
    async fn shortfall_gap_fires_when_fewer_providers_resolve() {
        use crate::profile::ProviderPage;

        // One page, unreachable, and no surname default to fall back on.
        let rules = ProviderRules {
            confidence: 0.8,
            mode: ProviderMode::ProfilePages {
                pages: vec![ProviderPage {
                    url: "https://clinic.example/team/dr-lee/".into(),
                    expected_name: "Dr. Morgan Lee, MD".into(),
                }],
                title: "Otolaryngologist".into(),
                specialty_keywords: vec![],
                fallbacks: vec![],
            },
            gap_if_fewer_than: Some((1, "Not all provider pages accessible".into())),
            always_gaps: vec![],
        };
        let fetcher = StubFetcher::new();

        let result = extract(&fetcher, &rules).await;
        assert!(result.data.is_empty());
        assert_eq!(result.gaps, vec!["Not all provider pages accessible"]);
    }

    #[tokio::test]
    async fn roster_mode_returns_verified_roster_even_on_absence() {
        let profile = ClinicProfile::fort_worth_eye();
        let fetcher = StubFetcher::new();

        let result = extract(&fetcher, &profile.providers).await;
        assert_eq!(result.data.len(), 3);
        assert_eq!(result.data[0].name, "Dr. Ann E. Ranelle, DO");
        assert_eq!(
            result.data[0].experience.as_deref(),
            Some("Part of three-generation practice")
        );
        // Profile-authored unconditional gaps.
        assert_eq!(result.gaps.len(), 3);
        assert_eq!(result.confidence, 0.7);
    }
}
