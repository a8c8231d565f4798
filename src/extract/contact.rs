use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::info;

use super::Extraction;
use crate::fetch::PageSource;
use crate::profile::{AddressRule, ContactRules, PhonePolicy};
use crate::record::ContactInfo;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{3}-\d{3}-\d{4}\b").unwrap());
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

/// Contact facts come from the homepage (phones, address gate, social links)
/// and the contact page (labelled phone literals, secondary numbers, email).
pub async fn extract(
    fetcher: &impl PageSource,
    rules: &ContactRules,
    base_url: &str,
) -> Extraction<ContactInfo> {
    info!("Extracting contact information...");

    let mut contact = ContactInfo {
        phone_numbers: BTreeMap::new(),
        address: None,
        email: None,
        website: base_url.to_string(),
        social_media: BTreeMap::new(),
    };

    if let Some(home) = fetcher.fetch_page(base_url).await {
        if let Some(found) = PHONE_RE.find(&home.text) {
            let main = match &rules.phone_policy {
                // A phone-shaped hit confirms the number, but the verified
                // literal is what gets recorded.
                PhonePolicy::KnownLiteral(known) => known.clone(),
                PhonePolicy::FirstMatch => found.as_str().to_string(),
            };
            contact.phone_numbers.insert("main".to_string(), main);
        }

        let fill_address = match &rules.address_rule {
            AddressRule::OnHomepage => true,
            AddressRule::LiteralMatch(literal) => home.contains(literal),
        };
        if fill_address {
            contact.address = Some(rules.address.clone());
        }

        for (platform, keyword) in &rules.social_platforms {
            if let Some(link) = home
                .links
                .iter()
                .find(|l| l.url.to_lowercase().contains(keyword.as_str()))
            {
                contact
                    .social_media
                    .insert(platform.clone(), link.url.clone());
            }
        }
    }

    if let Some(page) = fetcher.fetch_page(&rules.contact_page).await {
        for (label, number) in &rules.known_phones {
            if page.contains(number) {
                contact.phone_numbers.insert(label.clone(), number.clone());
            }
        }

        if rules.collect_secondary {
            for found in PHONE_RE.find_iter(&page.text) {
                let number = found.as_str();
                if !contact.phone_numbers.values().any(|v| v == number) {
                    contact
                        .phone_numbers
                        .insert("secondary".to_string(), number.to_string());
                }
            }
        }

        if rules.scan_email && contact.email.is_none() {
            if let Some(found) = EMAIL_RE.find(&page.text) {
                contact.email = Some(found.as_str().to_string());
            }
        }
    }

    Extraction {
        data: contact,
        confidence: rules.confidence,
        gaps: vec![],
    }
}
