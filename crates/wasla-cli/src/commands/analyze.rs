//! The `analyze` command: run one analysis mode against selected segments.

use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Args;
use strum::IntoEnumIterator;

use wasla_application::AnalysisService;
use wasla_core::{AnalysisMode, AnalysisRequest, SegmentCatalog, sample_posts};
use wasla_interaction::OpenAiGenerator;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Analysis mode: reaction, enhancement, or arabic-adaptation
    #[arg(long, value_parser = parse_mode)]
    mode: AnalysisMode,

    /// Segment name; repeat for multiple (default: first two catalog segments)
    #[arg(long = "segment")]
    segments: Vec<String>,

    /// The content to analyze
    #[arg(long, conflicts_with = "sample")]
    content: Option<String>,

    /// Use built-in sample post N (1-based) instead of --content
    #[arg(long)]
    sample: Option<usize>,

    /// Emit results as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn parse_mode(value: &str) -> Result<AnalysisMode, String> {
    AnalysisMode::from_str(value).map_err(|_| {
        let valid: Vec<String> = AnalysisMode::iter().map(|m| m.to_string()).collect();
        format!("unknown mode '{value}' (valid: {})", valid.join(", "))
    })
}

pub async fn run(args: AnalyzeArgs) -> Result<()> {
    let catalog = Arc::new(SegmentCatalog::builtin());

    let content = match (args.content, args.sample) {
        (Some(content), _) => content,
        (None, Some(index)) => {
            let posts = sample_posts();
            if index == 0 || index > posts.len() {
                bail!("sample index must be between 1 and {}", posts.len());
            }
            posts[index - 1].to_string()
        }
        (None, None) => bail!("provide content with --content or --sample"),
    };

    let segments = if args.segments.is_empty() {
        catalog.names().take(2).map(str::to_string).collect()
    } else {
        args.segments
    };

    let generator =
        OpenAiGenerator::try_from_env().context("failed to configure the OpenAI client")?;
    let service = AnalysisService::new(catalog, Arc::new(generator));

    let request = AnalysisRequest::new(content, segments, args.mode);
    let results = service.analyze(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for analysis in &results {
        println!("=== {} ===", analysis.segment);
        match &analysis.result {
            Ok(text) => println!("{text}\n"),
            Err(err) => eprintln!("analysis failed: {err}\n"),
        }
    }
    Ok(())
}
