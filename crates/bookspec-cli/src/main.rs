use anyhow::{Result, bail};
use bookspec_guidelines::{
    BleedChoice, BookFormat, CoverFinish, GeneratedGuideline, GuidelineOptions, PaperType,
    derive_guidelines, detail_sections, find_platform, load_platforms, platform_names,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookspec", about = "Book publishing guideline lookup", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the publishing platforms in the dataset
    Platforms {
        /// Platform comparison CSV file
        #[arg(short, long, default_value = "data/publishing_platforms_comparison.csv")]
        dataset: PathBuf,
    },

    /// Show every recorded requirement for one platform
    Show {
        /// Platform comparison CSV file
        #[arg(short, long, default_value = "data/publishing_platforms_comparison.csv")]
        dataset: PathBuf,

        /// Platform name, e.g. "Amazon KDP"
        name: String,
    },

    /// Generate formatting guidelines for selected platforms and formats
    Guidelines {
        /// Platform comparison CSV file
        #[arg(short, long, default_value = "data/publishing_platforms_comparison.csv")]
        dataset: PathBuf,

        /// Target platform(s) - can specify multiple
        #[arg(short, long, num_args = 1..)]
        platform: Vec<String>,

        /// Requested format(s) - can specify multiple
        #[arg(short, long, num_args = 1.., value_enum)]
        format: Vec<FormatArg>,

        /// Page count (required for print formats)
        #[arg(long)]
        page_count: Option<u32>,

        /// Interior paper stock
        #[arg(long, default_value = "white", value_enum)]
        paper: PaperArg,

        /// Print book size, e.g. "6 x 9 inches"
        #[arg(long)]
        book_size: Option<String>,

        /// Cover finish
        #[arg(long, value_enum)]
        cover_finish: Option<FinishArg>,

        /// Bleed preference
        #[arg(long, default_value = "unsure", value_enum)]
        bleed: BleedArg,

        /// Load the selection from a saved JSON file instead of flags
        #[arg(long, conflicts_with_all = ["platform", "format", "page_count", "book_size", "cover_finish"])]
        config: Option<PathBuf>,

        /// Save the selection to a JSON file after running
        #[arg(long)]
        save_config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Ebook,
    Paperback,
    Hardcover,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    White,
    Cream,
}

#[derive(Clone, Copy, ValueEnum)]
enum FinishArg {
    Glossy,
    Matte,
}

#[derive(Clone, Copy, ValueEnum)]
enum BleedArg {
    Yes,
    No,
    Unsure,
}

impl From<FormatArg> for BookFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Ebook => Self::EBook,
            FormatArg::Paperback => Self::Paperback,
            FormatArg::Hardcover => Self::Hardcover,
        }
    }
}

impl From<PaperArg> for PaperType {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::White => Self::White,
            PaperArg::Cream => Self::Cream,
        }
    }
}

impl From<FinishArg> for CoverFinish {
    fn from(arg: FinishArg) -> Self {
        match arg {
            FinishArg::Glossy => Self::Glossy,
            FinishArg::Matte => Self::Matte,
        }
    }
}

impl From<BleedArg> for BleedChoice {
    fn from(arg: BleedArg) -> Self {
        match arg {
            BleedArg::Yes => Self::Yes,
            BleedArg::No => Self::No,
            BleedArg::Unsure => Self::Unsure,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Platforms { dataset } => {
            let records = load_platforms(&dataset).await?;
            for name in platform_names(&records) {
                println!("{}", name);
            }
        }

        Commands::Show { dataset, name } => {
            let records = load_platforms(&dataset).await?;
            let Some(record) = find_platform(&records, &name) else {
                bail!("Details for platform \"{}\" not found.", name);
            };

            println!("{}", record.platform_name);
            for section in detail_sections(record) {
                println!("\n{}:", section.title);
                for entry in section.entries {
                    println!("  {}: {}", entry.label, entry.value);
                }
            }
        }

        Commands::Guidelines {
            dataset,
            platform,
            format,
            page_count,
            paper,
            book_size,
            cover_finish,
            bleed,
            config,
            save_config,
        } => {
            let options = match config {
                Some(path) => GuidelineOptions::load(&path).await?,
                None => GuidelineOptions {
                    formats: format.into_iter().map(Into::into).collect(),
                    platforms: platform,
                    page_count,
                    paper_type: paper.into(),
                    book_size,
                    cover_finish: cover_finish.map(Into::into),
                    bleed: bleed.into(),
                },
            };

            let records = load_platforms(&dataset).await?;
            let guidelines = derive_guidelines(&records, &options)?;

            if guidelines.is_empty() {
                println!("No selected platform matched the dataset.");
            }
            for guideline in &guidelines {
                print_guideline(guideline);
            }

            if let Some(path) = save_config {
                options.save(&path).await?;
                println!("Saved selection → {}", path.display());
            }
        }
    }

    Ok(())
}

fn print_guideline(guideline: &GeneratedGuideline) {
    println!("{}", guideline.platform_name);

    if let Some(ebook) = &guideline.ebook {
        println!("  eBook Specifications:");
        println!("    Manuscript Format: {}", ebook.manuscript_format);
        println!("    Cover Dimensions: {}", ebook.cover_dimensions);
        println!("    Cover Resolution: {}", ebook.cover_resolution);
    }

    if let Some(print) = &guideline.print {
        println!("  Print Specifications:");
        println!("    Trim Size: {}", print.trim_size);
        println!("    Approx. Spine Width: {}", print.spine_width);
        println!("    Cover File Format: {}", print.cover_file_format);
        println!("    Interior File Format: {}", print.interior_file_format);
        println!("    Margins: {}", print.margins);
        println!("    Bleed: {}", print.bleed);
    }

    println!("  Important Notes: {}", guideline.notes);
    println!();
}
