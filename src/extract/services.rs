use std::mem;

use tracing::info;

use super::{dedup_preserve, title_case, Extraction};
use crate::fetch::PageSource;
use crate::profile::{ServiceBucket, ServicesRules};
use crate::record::ServicesInfo;

const ALL_BUCKETS: [ServiceBucket; 6] = [
    ServiceBucket::Medical,
    ServiceBucket::Surgical,
    ServiceBucket::Diagnostic,
    ServiceBucket::Optical,
    ServiceBucket::SpecialtyPrograms,
    ServiceBucket::Conditions,
];

/// Service facts accumulate from keyword scans over the profile's service
/// pages and from fixed per-page grants, then get deduped and topped up from
/// the verified defaults.
pub async fn extract(
    fetcher: &impl PageSource,
    rules: &ServicesRules,
) -> Extraction<ServicesInfo> {
    info!("Extracting services information...");

    let mut services = ServicesInfo {
        medical_services: vec![],
        surgical_services: vec![],
        diagnostic_services: vec![],
        optical_services: vec![],
        specialty_programs: vec![],
        conditions_treated: vec![],
    };

    for url in &rules.keyword_pages {
        if let Some(page) = fetcher.fetch_page(url).await {
            for (bucket, keywords) in &rules.keyword_buckets {
                for keyword in keywords {
                    if page.contains_ci(keyword) {
                        bucket_mut(&mut services, *bucket).push(title_case(keyword));
                    }
                }
            }
        }
    }

    for grant in &rules.page_grants {
        if fetcher.fetch_page(&grant.url).await.is_some() {
            for (bucket, items) in &grant.grants {
                bucket_mut(&mut services, *bucket).extend(items.iter().cloned());
            }
        }
    }

    for bucket in ALL_BUCKETS {
        let slot = bucket_mut(&mut services, bucket);
        *slot = dedup_preserve(mem::take(slot));
    }

    for (bucket, defaults) in &rules.fill_empty {
        let slot = bucket_mut(&mut services, *bucket);
        if slot.is_empty() {
            *slot = defaults.clone();
        }
    }

    for (bucket, items) in &rules.always_fill {
        *bucket_mut(&mut services, *bucket) = items.clone();
    }

    Extraction {
        data: services,
        confidence: rules.confidence,
        gaps: vec![],
    }
}

fn bucket_mut(services: &mut ServicesInfo, bucket: ServiceBucket) -> &mut Vec<String> {
    match bucket {
        ServiceBucket::Medical => &mut services.medical_services,
        ServiceBucket::Surgical => &mut services.surgical_services,
        ServiceBucket::Diagnostic => &mut services.diagnostic_services,
        ServiceBucket::Optical => &mut services.optical_services,
        ServiceBucket::SpecialtyPrograms => &mut services.specialty_programs,
        ServiceBucket::Conditions => &mut services.conditions_treated,
    }
}
