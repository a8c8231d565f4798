use tracing::info;

use super::{title_case, Extraction};
use crate::fetch::PageSource;
use crate::profile::InsuranceRules;
use crate::record::InsuranceInfo;

/// Insurance starts from the operator-verified table; a reachable
/// patient-information page can narrow the plan list to what is actually
/// named there (plus the catch-all).
pub async fn extract(
    fetcher: &impl PageSource,
    rules: &InsuranceRules,
) -> Extraction<InsuranceInfo> {
    info!("Extracting insurance information...");

    let mut insurance = rules.defaults.clone();

    if let Some(page) = fetcher.fetch_page(&rules.page).await {
        if let Some(scan) = &rules.plan_scan {
            let found: Vec<String> = scan
                .keywords
                .iter()
                .filter(|keyword| page.contains_ci(keyword))
                .map(|keyword| title_case(keyword))
                .collect();
            if !found.is_empty() {
                insurance.accepted_plans = found;
                insurance.accepted_plans.push(scan.catch_all.clone());
            }
        }
    }

    Extraction {
        data: insurance,
        confidence: rules.confidence,
        gaps: vec![],
    }
}
