//! Prompt templates for the three analysis operations.
//!
//! Each builder is a pure template-fill over static segment attributes and
//! the user's content. The section contracts requested of the model (labels,
//! counts, allowed values) are part of the product behavior; change them
//! together with anything that parses results downstream.

use wasla_core::AudienceSegment;

fn join(items: &[String]) -> String {
    items.join(", ")
}

fn join_first(items: &[String], n: usize) -> String {
    items[..items.len().min(n)].join(", ")
}

/// Builds the reaction-analysis instruction for one segment.
///
/// Embeds the full attribute set and asks for five labeled sections.
pub fn reaction_prompt(segment: &AudienceSegment, content: &str) -> String {
    format!(
        r#"You are an expert in social media marketing and audience analysis for Iraqi remittance segments. Analyze how the following audience segment would react to a social media post.

AUDIENCE SEGMENT: {name}
Description: {description}
Age Range: {age_range}
Subsegments: {subsegments}
Key Motivations: {motivations}
Key Traits: {traits}
Main Concerns: {concerns}
Preferred Platforms: {platforms}

SOCIAL MEDIA CONTENT TO ANALYZE:
"{content}"

Please provide a detailed analysis in the following format:

ENGAGEMENT LEVEL: [High/Medium/Low]
EMOTIONAL RESPONSE: [Positive/Neutral/Negative/Mixed]

REACTION ANALYSIS:
[3-4 sentences explaining how this segment would likely react to the content, considering their motivations and concerns]

KEY TRIGGERS:
[List 3-4 specific elements that would trigger positive or negative responses for this segment]

SEGMENT-SPECIFIC INSIGHTS:
[2-3 insights about why this particular Iraqi segment would react this way, considering their cultural and financial context]

IMPROVEMENT SUGGESTIONS:
[3-4 specific suggestions to make the content more engaging for this segment]"#,
        name = segment.name,
        description = segment.description,
        age_range = segment.age_range,
        subsegments = join(&segment.subsegments),
        motivations = join(&segment.motivations),
        traits = join(&segment.traits),
        concerns = join(&segment.key_concerns),
        platforms = join(&segment.platforms),
    )
}

/// Builds the content-enhancement instruction covering every selected
/// segment, caller order preserved.
///
/// Each segment contributes its description plus the first three motivations
/// and first three key concerns.
pub fn enhancement_prompt(segments: &[&AudienceSegment], content: &str) -> String {
    let mut segments_info = String::new();
    for segment in segments {
        segments_info.push_str(&format!(
            "\n{name}:\n- Description: {description}\n- Motivations: {motivations}\n- Key Concerns: {concerns}\n",
            name = segment.name,
            description = segment.description,
            motivations = join_first(&segment.motivations, 3),
            concerns = join_first(&segment.key_concerns, 3),
        ));
    }

    format!(
        r#"You are a social media content strategist specializing in Iraqi remittance and financial services. Enhance the following content to better appeal to these Iraqi segments:

ORIGINAL CONTENT:
"{content}"

TARGET SEGMENTS:
{segments_info}

Consider the cultural context of Iraqi communities, remittance behaviors, and financial needs when enhancing the content.

Please provide:

ENHANCED CONTENT:
[Improved version that appeals to the target segments, incorporating cultural nuances and specific pain points]

ENHANCEMENT RATIONALE:
[Explain specific changes made and how they address each segment's motivations and concerns]

IRAQI ARABIC HOOKS:
[3-4 short, catchy phrases in Iraqi Arabic dialect that would resonate with these segments]

PLATFORM-SPECIFIC ADAPTATIONS:
[Brief suggestions for how to adapt this content for WhatsApp, Instagram, Facebook, and Telegram]"#,
    )
}

/// Builds the Iraqi Arabic adaptation instruction for one segment.
pub fn arabic_prompt(segment: &AudienceSegment, content: &str) -> String {
    format!(
        r#"You are a native Iraqi Arabic speaker and social media expert specializing in remittance services. Create an Iraqi Arabic version of this content for {name}.

ENGLISH CONTENT:
"{content}"

TARGET SEGMENT: {name}
Description: {description}
Key Motivations: {motivations}
Key Concerns: {concerns}

Consider the cultural context, family values, and specific financial behaviors of this Iraqi segment.

Please provide:

IRAQI ARABIC CONTENT:
[Content in Iraqi Arabic dialect that authentically resonates with this segment's values and concerns]

CULTURAL ADAPTATION NOTES:
[Explain specific cultural elements incorporated and why they're important for this audience]

EMOTIONAL TRIGGERS:
[Identify 2-3 emotional appeals that work specifically for Iraqi culture and this segment]

ENGAGEMENT TIPS:
[Specific tips for using this content effectively with Iraqi audiences on social media]"#,
        name = segment.name,
        description = segment.description,
        motivations = join_first(&segment.motivations, 3),
        concerns = join_first(&segment.key_concerns, 3),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasla_core::SegmentCatalog;

    #[test]
    fn test_reaction_prompt_embeds_segment_verbatim() {
        let catalog = SegmentCatalog::builtin();
        let segment = catalog.get("Iraqi Students Abroad").unwrap();
        let content = "Send money home instantly!";

        let prompt = reaction_prompt(segment, content);

        assert!(prompt.contains(&segment.description));
        assert!(prompt.contains("Age Range: 17-35"));
        assert!(prompt.contains(r#""Send money home instantly!""#));
        assert!(prompt.contains("ENGAGEMENT LEVEL: [High/Medium/Low]"));
        assert!(prompt.contains("EMOTIONAL RESPONSE: [Positive/Neutral/Negative/Mixed]"));
        // All subsegments, comma-joined
        assert!(prompt.contains("Undergraduate Students, Master's Students"));
    }

    #[test]
    fn test_enhancement_prompt_truncates_to_first_three() {
        let catalog = SegmentCatalog::builtin();
        let students = catalog.get("Iraqi Students Abroad").unwrap();
        let workers = catalog.get("Iraqi Workers Abroad").unwrap();

        let prompt = enhancement_prompt(&[students, workers], "Low fees for all!");

        // First three motivations/concerns per segment, in caller order
        assert!(prompt.contains(
            "- Motivations: Family fulfilling educational dreams, Tuition and living expenses, Emergency needs abroad"
        ));
        assert!(prompt.contains("- Key Concerns: tuition costs, living expenses, family support"));
        assert!(prompt.contains(
            "- Motivations: Fulfilling family obligations, Building home/investments in Iraq, Supporting medical care"
        ));
        assert!(prompt.contains("- Key Concerns: family support, reliable transfers, low fees"));
        // Fourth motivation is truncated away
        assert!(!prompt.contains("Currency arbitrage benefits"));
        // Order preserved
        let students_at = prompt.find("Iraqi Students Abroad:").unwrap();
        let workers_at = prompt.find("Iraqi Workers Abroad:").unwrap();
        assert!(students_at < workers_at);
    }

    #[test]
    fn test_enhancement_prompt_names_messaging_platforms() {
        let catalog = SegmentCatalog::builtin();
        let segment = catalog.get("Digital Entrepreneurs").unwrap();
        let prompt = enhancement_prompt(&[segment], "Grow your store");
        assert!(prompt.contains("WhatsApp, Instagram, Facebook, and Telegram"));
    }

    #[test]
    fn test_arabic_prompt_sections() {
        let catalog = SegmentCatalog::builtin();
        let segment = catalog.get("Iraqi Diaspora Community").unwrap();
        let prompt = arabic_prompt(segment, "Stay connected to home");

        assert!(prompt.contains(r#""Stay connected to home""#));
        assert!(prompt.contains("TARGET SEGMENT: Iraqi Diaspora Community"));
        assert!(prompt.contains(&segment.description));
        assert!(prompt.contains("IRAQI ARABIC CONTENT:"));
        assert!(prompt.contains("CULTURAL ADAPTATION NOTES:"));
        assert!(prompt.contains("EMOTIONAL TRIGGERS:"));
        assert!(prompt.contains("ENGAGEMENT TIPS:"));
        // First three motivations only
        assert!(prompt.contains(
            "Key Motivations: Preserving cultural ties, Supporting community events, Property investments"
        ));
        assert!(!prompt.contains("Emergency family support"));
    }
}
