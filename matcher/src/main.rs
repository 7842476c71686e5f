use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use engine::{analyze, AnalyzeOptions, CorpusIndex, RawQueryText, Selection};
use matcher::export::write_csv_file;
use matcher::loader::load_catalog;
use matcher::render::{render_index, render_report};
use matcher::settings::{debug_from_env, EngineArgs};
use matcher::{parse_skills, read_resume};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "matcher")]
#[command(about = "Rank job roles against a candidate's skills", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a skill list or resume against the job catalog
    Analyze {
        /// Catalog path (csv/json/jsonl file or directory)
        #[arg(long)]
        catalog: String,
        #[command(flatten)]
        query: QueryArgs,
        /// Keep only the best N roles
        #[arg(long, allow_negative_numbers = true, conflicts_with = "min_percent")]
        top: Option<i64>,
        /// Keep roles matching at least this percentage
        #[arg(long)]
        min_percent: Option<f64>,
        /// With --top, also keep roles tied with the last one
        #[arg(long, default_value_t = false)]
        keep_ties: bool,
        /// Hide 0% matches
        #[arg(long, default_value_t = false)]
        hide_zero: bool,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Also write the ranked results to this CSV file
        #[arg(long)]
        csv: Option<String>,
        /// Include tokens, vectors and the idf table in the output
        #[arg(long, default_value_t = false)]
        debug: bool,
        #[command(flatten)]
        tuning: EngineArgs,
    },
    /// Print the vocabulary and idf table fitted from a catalog
    Inspect {
        #[arg(long)]
        catalog: String,
        #[command(flatten)]
        tuning: EngineArgs,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct QueryArgs {
    /// Comma separated skills, e.g. "python, sql, excel"
    #[arg(long)]
    skills: Option<String>,
    /// Plain-text resume file
    #[arg(long)]
    resume: Option<String>,
}

impl QueryArgs {
    fn into_query(self) -> Result<RawQueryText> {
        match (self.skills, self.resume) {
            (Some(skills), _) => Ok(parse_skills(&skills)),
            (None, Some(path)) => read_resume(path),
            (None, None) => Ok(RawQueryText::default()),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { catalog, query, top, min_percent, keep_ties, hide_zero, format, csv, debug, tuning } => {
            let config = tuning.resolve()?;
            let precision = config.percent_precision;
            let docs = load_catalog(&catalog)?;
            let index = CorpusIndex::build(&docs, config)?;

            let selection = match (top, min_percent) {
                (Some(k), _) => Selection::TopK(k),
                (None, Some(p)) => Selection::MinPercent(p),
                (None, None) => Selection::All,
            };
            let opts = AnalyzeOptions { selection, keep_ties, hide_zero, debug: debug || debug_from_env() };
            let report = analyze(&index, &query.into_query()?, &opts)?;

            match format {
                Format::Text => print!("{}", render_report(&report, precision)),
                Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
            if let Some(path) = csv {
                write_csv_file(&report, precision, path)?;
            }
            Ok(())
        }
        Commands::Inspect { catalog, tuning } => {
            let docs = load_catalog(&catalog)?;
            let index = CorpusIndex::build(&docs, tuning.resolve()?)?;
            print!("{}", render_index(&index));
            Ok(())
        }
    }
}
