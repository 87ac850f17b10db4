use clap::Parser;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use icpgen::models::{CollectionOptions, CollectionResult, CompanyProfile, GeneratedICP};
use icpgen::{
    BusinessModelClassifier, ClaudeProvider, Config, GenerationOutcome, ICPGenerationPipeline,
    JsonFileReviewSource, PipelineConfig, RetryPolicy, ReviewCollectionOrchestrator,
};

#[derive(Parser, Debug)]
#[command(name = "icpgen")]
#[command(version = "0.1.0")]
#[command(about = "Generate Ideal Customer Profiles from company data and customer reviews")]
struct Args {
    /// JSON file with the company profile
    #[arg(short, long)]
    profile: Option<String>,

    /// Company name (overrides the profile file)
    #[arg(short, long)]
    name: Option<String>,

    /// Industry (overrides the profile file)
    #[arg(long)]
    industry: Option<String>,

    /// Target market (overrides the profile file)
    #[arg(long)]
    target_market: Option<String>,

    /// Value proposition (overrides the profile file)
    #[arg(long)]
    value_proposition: Option<String>,

    /// JSON file of customer reviews to use as evidence
    #[arg(short, long)]
    reviews: Option<String>,

    /// Location passed to the review source
    #[arg(long)]
    location: Option<String>,

    /// Maximum number of reviews to fetch
    #[arg(long)]
    max_reviews: Option<usize>,

    /// Only print the detected business model
    #[arg(long)]
    classify_only: bool,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("icpgen=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;
    let profile = load_profile(&args)?;

    if args.classify_only {
        println!("{}", BusinessModelClassifier::new().classify(&profile));
        return Ok(());
    }

    let llm = ClaudeProvider::with_base_url(
        config.api_key()?.to_string(),
        Some(config.anthropic_model.clone()),
        &config.anthropic_base_url,
    )?;
    let mut pipeline = ICPGenerationPipeline::new(Arc::new(llm), PipelineConfig::from(&config))
        .with_progress(true);

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, cancelling review collection");
            ctrl_c.cancel();
        }
    });

    if let Some(ref path) = args.reviews {
        let collector = ReviewCollectionOrchestrator::new(
            Arc::new(JsonFileReviewSource::new(path)),
            RetryPolicy::from(&config),
        )
        .with_cancellation(cancel.clone());
        pipeline = pipeline.with_review_collector(collector);
    }

    let options = CollectionOptions {
        location: args.location.clone().or_else(|| profile.location().map(str::to_string)),
        max_results: Some(args.max_reviews.unwrap_or(config.review_max_results)),
        analyze: true,
    };

    tracing::info!("Starting ICP generation for {}", profile.display_name());
    let outcome = pipeline.generate_with_reviews(&profile, &options).await?;

    output_outcome(&outcome, &args)?;

    Ok(())
}

fn load_profile(args: &Args) -> anyhow::Result<CompanyProfile> {
    let mut profile = match args.profile {
        Some(ref path) => {
            let contents = std::fs::read_to_string(path)?;
            serde_json::from_str::<CompanyProfile>(&contents)?
        }
        None => CompanyProfile::default(),
    };

    if let Some(ref name) = args.name {
        profile.name = Some(name.clone());
    }
    if let Some(ref industry) = args.industry {
        profile.industry = Some(industry.clone());
    }
    if let Some(ref target_market) = args.target_market {
        profile.target_market = Some(target_market.clone());
    }
    if let Some(ref value_proposition) = args.value_proposition {
        profile.value_proposition = Some(value_proposition.clone());
    }

    if profile.labeled_fields().is_empty() {
        anyhow::bail!("No company data given: pass --profile or at least --name");
    }

    Ok(profile)
}

fn output_outcome(outcome: &GenerationOutcome, args: &Args) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(outcome)?,
        "markdown" => format_markdown(outcome),
        _ => format_text(outcome),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(outcome: &GenerationOutcome) -> String {
    let mut output = String::new();

    let company = outcome
        .icps
        .first()
        .map(|icp| icp.meta.source_company.as_str())
        .unwrap_or("the company");
    output.push_str(&format!(
        "\n=== Ideal Customer Profiles: {} ({}) ===\n",
        company, outcome.business_model
    ));

    if let Some(ref collection) = outcome.collection {
        output.push_str(&format_collection_text(collection));
    }

    for (i, icp) in outcome.icps.iter().enumerate() {
        output.push_str(&format!("\n{}. {}\n", i + 1, icp.icp_name));
        output.push_str(&format!(
            "   Fit score: {}/100 | ABM: {} | Confidence: {}\n",
            icp.fit_scoring.score, icp.abm_tier, icp.confidence
        ));
        output.push_str(&format!(
            "   Value prop: {}\n",
            icp.value_prop_alignment.value_prop
        ));

        let personas = icp
            .fit_definition
            .buyer_personas
            .iter()
            .map(|p| format!("{} ({})", p.title, p.role))
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!("   Personas: {}\n", personas));

        for (label, items) in text_sections(icp) {
            output.push_str(&format!("   {}: {}\n", label, items.join(", ")));
        }
        output.push_str(&format!(
            "   Pricing: {} (price sensitivity: {})\n",
            icp.offerings_pricing.pricing_model, icp.offerings_pricing.price_sensitivity
        ));
    }

    output
}

fn format_collection_text(collection: &CollectionResult) -> String {
    let meta = &collection.metadata;
    let mut output = format!(
        "Reviews: {} retained of {} fetched ({} too short, {} duplicates, {} attempt(s))\n",
        meta.retained,
        meta.total_fetched,
        meta.too_short_removed,
        meta.duplicates_removed,
        meta.attempts
    );

    if let Some(ref analysis) = meta.analysis {
        let dist = &analysis.sentiment_distribution;
        output.push_str(&format!(
            "Sentiment: {} positive, {} negative, {} neutral\n",
            dist.positive, dist.negative, dist.neutral
        ));
        if let Some(avg) = analysis.average_rating {
            output.push_str(&format!("Average rating: {:.1}\n", avg));
        }
        for rec in &analysis.recommendations {
            output.push_str(&format!("  * {}\n", rec));
        }
    }

    output
}

fn text_sections(icp: &GeneratedICP) -> Vec<(&'static str, &[String])> {
    vec![
        ("Segments", icp.segments.as_slice()),
        ("Pains", icp.needs_pain_goals.pains.as_slice()),
        ("Jobs to be done", icp.needs_pain_goals.jobs_to_be_done.as_slice()),
        ("Desired outcomes", icp.needs_pain_goals.desired_outcomes.as_slice()),
        ("Buying triggers", icp.buying_triggers.as_slice()),
        ("Objections", icp.common_objections.as_slice()),
        ("Channels", icp.go_to_market.primary_channels.as_slice()),
        ("Messages", icp.go_to_market.messages.as_slice()),
    ]
}

fn format_markdown(outcome: &GenerationOutcome) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "# Ideal Customer Profiles ({})\n\n",
        outcome.business_model
    ));

    if let Some(ref collection) = outcome.collection {
        let meta = &collection.metadata;
        output.push_str("## Review Evidence\n\n");
        output.push_str("| Metric | Value |\n|--------|-------|\n");
        output.push_str(&format!("| Reviews retained | {} |\n", meta.retained));
        output.push_str(&format!("| Reviews fetched | {} |\n", meta.total_fetched));
        output.push_str(&format!("| Duplicates removed | {} |\n", meta.duplicates_removed));
        if let Some(ref analysis) = meta.analysis {
            if let Some(avg) = analysis.average_rating {
                output.push_str(&format!("| Average rating | {:.1} |\n", avg));
            }
            if !analysis.recommendations.is_empty() {
                output.push_str("\n**Recommendations**\n\n");
                for rec in &analysis.recommendations {
                    output.push_str(&format!("- {}\n", rec));
                }
            }
        }
        output.push('\n');
    }

    for icp in &outcome.icps {
        output.push_str(&format!("## {}\n\n", icp.icp_name));
        output.push_str(&format!("> {}\n\n", icp.value_prop_alignment.value_prop));

        output.push_str("| Fit Score | ABM Tier | Confidence | Price Sensitivity |\n");
        output.push_str("|-----------|----------|------------|-------------------|\n");
        output.push_str(&format!(
            "| {}/100 | {} | {} | {} |\n\n",
            icp.fit_scoring.score,
            icp.abm_tier,
            icp.confidence,
            icp.offerings_pricing.price_sensitivity
        ));

        output.push_str("**Buyer personas**\n\n");
        for persona in &icp.fit_definition.buyer_personas {
            output.push_str(&format!("- {} *({})*\n", persona.title, persona.role));
        }
        output.push('\n');

        for (label, items) in text_sections(icp) {
            output.push_str(&format!("**{}**: {}\n\n", label, items.join(", ")));
        }

        output.push_str(&format!(
            "*Template `{}`, generated {}*\n\n",
            icp.meta.template_id,
            icp.meta.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }

    output
}
