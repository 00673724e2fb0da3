//! Built-in audience segment definitions.
//!
//! The six Iraqi remittance segments shipped with the system. The attribute
//! data is domain research material and is reproduced as-is; definition
//! order here is the catalog's iteration order.

use super::model::AudienceSegment;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Returns the built-in segment definitions in their canonical order.
pub fn builtin_segments() -> Vec<AudienceSegment> {
    vec![
        AudienceSegment {
            name: "Iraqi Students Abroad".to_string(),
            description: "Iraqi students studying abroad who receive financial support (remittances) from family in Iraq".to_string(),
            age_range: "17-35".to_string(),
            subsegments: strings(&[
                "Undergraduate Students",
                "Master's Students",
                "PhD/Research Scholars",
                "Working Students",
                "First-Year Students",
                "Final-Year Students",
            ]),
            motivations: strings(&[
                "Family fulfilling educational dreams",
                "Tuition and living expenses",
                "Emergency needs abroad",
                "Currency arbitrage benefits",
            ]),
            traits: strings(&[
                "aspirational",
                "family-oriented",
                "budget-conscious",
                "technophile",
                "security-oriented",
            ]),
            key_concerns: strings(&[
                "tuition costs",
                "living expenses",
                "family support",
                "academic success",
                "fast transfers",
            ]),
            platforms: strings(&["Western Union", "Remitly", "Wise", "WorldRemit", "Revolut"]),
            keywords: strings(&[
                "Iraqi student",
                "tuition remittance",
                "send money to student",
                "study abroad support",
            ]),
        },
        AudienceSegment {
            name: "Iraqi Workers Abroad".to_string(),
            description: "Iraqi workers abroad sending remittances back home to support families and communities".to_string(),
            age_range: "20-60".to_string(),
            subsegments: strings(&[
                "Construction Workers",
                "Healthcare Workers",
                "Domestic Workers",
                "Tech Workers",
                "Service Industry",
            ]),
            motivations: strings(&[
                "Fulfilling family obligations",
                "Building home/investments in Iraq",
                "Supporting medical care",
                "Social status and pride",
            ]),
            traits: strings(&[
                "family-oriented",
                "sacrificial",
                "community-led",
                "resilient",
                "goal-oriented",
                "traditional",
            ]),
            key_concerns: strings(&[
                "family support",
                "reliable transfers",
                "low fees",
                "fast delivery",
                "privacy",
            ]),
            platforms: strings(&[
                "Western Union",
                "Remitly",
                "Ria",
                "Tahweel",
                "Al Ansari",
                "Hawala",
            ]),
            keywords: strings(&[
                "send money to Iraq",
                "Iraqi remittance",
                "support family Iraq",
                "hawala Iraq",
                "low cost transfer",
            ]),
        },
        AudienceSegment {
            name: "Iraqi Diaspora Community".to_string(),
            description: "Long-term Iraqi diaspora maintaining cultural and financial ties with home country".to_string(),
            age_range: "25-65+".to_string(),
            subsegments: strings(&[
                "Long-term Settled Expats",
                "Refugee Diaspora",
                "Business Professionals",
                "Second-generation Diaspora",
            ]),
            motivations: strings(&[
                "Preserving cultural ties",
                "Supporting community events",
                "Property investments",
                "Emergency family support",
            ]),
            traits: strings(&[
                "aspirational",
                "family-oriented",
                "technophile",
                "security-oriented",
                "culturally rooted",
                "community-minded",
            ]),
            key_concerns: strings(&[
                "cultural preservation",
                "family emergencies",
                "investment opportunities",
                "trusted services",
            ]),
            platforms: strings(&[
                "Western Union",
                "MoneyGram",
                "Wise",
                "Traditional hawala networks",
            ]),
            keywords: strings(&[
                "Iraqi diaspora",
                "Iraqi community abroad",
                "support family Iraq",
                "cultural remittance",
            ]),
        },
        AudienceSegment {
            name: "Freelancers & Remote Workers".to_string(),
            description: "Digitally connected individuals in Iraq earning from international clients and managing cross-border payments".to_string(),
            age_range: "20-45".to_string(),
            subsegments: strings(&[
                "Platform Freelancers",
                "Remote Employees",
                "Creative Professionals",
                "Developers & IT",
                "Crypto-earning Freelancers",
            ]),
            motivations: strings(&[
                "Income access and conversion",
                "Business investment",
                "Global market access",
                "Equipment upgrades",
            ]),
            traits: strings(&[
                "entrepreneurial",
                "tech-savvy",
                "independent",
                "global-minded",
                "resilient",
                "status-seeking",
            ]),
            key_concerns: strings(&[
                "fast USD access",
                "low conversion fees",
                "crypto options",
                "reliable platforms",
            ]),
            platforms: strings(&[
                "Payoneer",
                "Wise",
                "Crypto wallets",
                "Upwork payments",
                "Freelancer platforms",
            ]),
            keywords: strings(&[
                "freelancer Iraq",
                "Payoneer Iraq",
                "receive USD Iraq",
                "Upwork withdrawal",
                "crypto Iraq",
            ]),
        },
        AudienceSegment {
            name: "Business Owners & Importers".to_string(),
            description: "Iraqi business owners and import/export operators sending money abroad for business operations".to_string(),
            age_range: "30-60+".to_string(),
            subsegments: strings(&[
                "Small Local Businesses",
                "Medium Enterprises",
                "Import/Export Firms",
                "Online Sellers",
                "Exporters",
            ]),
            motivations: strings(&[
                "Supplier payments",
                "Business expansion",
                "Supply chain operations",
                "International partnerships",
            ]),
            traits: strings(&[
                "entrepreneurial",
                "efficiency-focused",
                "relationship-driven",
                "security-conscious",
                "growth-oriented",
            ]),
            key_concerns: strings(&[
                "business continuity",
                "supplier relationships",
                "compliance",
                "cost efficiency",
            ]),
            platforms: strings(&[
                "Commercial banking",
                "Business wire transfers",
                "Trade finance platforms",
            ]),
            keywords: strings(&[
                "business payments Iraq",
                "international suppliers",
                "import export Iraq",
                "commercial transfers",
            ]),
        },
        AudienceSegment {
            name: "Digital Entrepreneurs".to_string(),
            description: "Iraqi entrepreneurs running online stores, digital services, or e-commerce platforms".to_string(),
            age_range: "20-45".to_string(),
            subsegments: strings(&[
                "Online Retailers",
                "Digital Service Providers",
                "Export-focused Sellers",
                "Dropshippers",
                "Social Media Sellers",
            ]),
            motivations: strings(&[
                "Business growth",
                "Market expansion",
                "Financial efficiency",
                "International reach",
            ]),
            traits: strings(&[
                "ambitious",
                "tech-savvy",
                "risk-tolerant",
                "customer-focused",
                "adaptable",
                "community-oriented",
            ]),
            key_concerns: strings(&[
                "payment processing",
                "international sales",
                "digital marketing",
                "platform fees",
            ]),
            platforms: strings(&[
                "Digital wallets",
                "E-commerce platforms",
                "Online banking",
                "Social media payments",
            ]),
            keywords: strings(&[
                "e-commerce Iraq",
                "online business Iraq",
                "digital payments Iraq",
                "Iraqi entrepreneurs",
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_builtin_segments() {
        let segments = builtin_segments();
        assert_eq!(segments.len(), 6);
        assert_eq!(segments[0].name, "Iraqi Students Abroad");
        assert_eq!(segments[1].name, "Iraqi Workers Abroad");
        assert_eq!(segments[5].name, "Digital Entrepreneurs");
    }

    #[test]
    fn test_builtin_segments_are_valid() {
        for segment in builtin_segments() {
            segment.validate().expect("preset segment should validate");
        }
    }

    #[test]
    fn test_builtin_list_fields_populated() {
        for segment in builtin_segments() {
            assert!(!segment.subsegments.is_empty(), "{}", segment.name);
            assert!(segment.motivations.len() >= 3, "{}", segment.name);
            assert!(segment.key_concerns.len() >= 3, "{}", segment.name);
            assert!(!segment.traits.is_empty(), "{}", segment.name);
            assert!(!segment.platforms.is_empty(), "{}", segment.name);
            assert!(segment.keywords.len() >= 2, "{}", segment.name);
        }
    }
}
