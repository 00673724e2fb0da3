//! Segment inspection commands.

use anyhow::Result;

use wasla_core::SegmentCatalog;

pub fn list(catalog: &SegmentCatalog) {
    println!("{} segments:", catalog.len());
    for segment in catalog.iter() {
        println!("  {} ({})", segment.name, segment.age_range);
    }
}

pub fn show(catalog: &SegmentCatalog, name: &str) -> Result<()> {
    let segment = catalog.get(name)?;
    println!("{} ({})", segment.name, segment.age_range);
    println!("  {}", segment.description);
    println!();
    println!("  Subsegments:  {}", segment.subsegments.join(", "));
    println!("  Motivations:  {}", segment.motivations.join(", "));
    println!("  Traits:       {}", segment.traits.join(", "));
    println!("  Key concerns: {}", segment.key_concerns.join(", "));
    println!("  Platforms:    {}", segment.platforms.join(", "));
    println!("  Keywords:     {}", segment.keywords.join(", "));
    Ok(())
}

pub fn compare(catalog: &SegmentCatalog, names: &[String]) -> Result<()> {
    let names: Vec<String> = if names.is_empty() {
        catalog.names().map(str::to_string).collect()
    } else {
        names.to_vec()
    };
    let rows = catalog.comparison_rows(&names)?;

    println!(
        "{:<30} {:<8} {:<40} {:<22} {:<20} Keywords",
        "Segment", "Age", "Primary Motivation", "Key Concern", "Top Platform"
    );
    for row in rows {
        println!(
            "{:<30} {:<8} {:<40} {:<22} {:<20} {}",
            row.segment,
            row.age_range,
            row.primary_motivation,
            row.key_concern,
            row.top_platform,
            row.main_keywords
        );
    }
    Ok(())
}
