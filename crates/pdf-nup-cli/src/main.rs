use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Convert every 4 PDF pages into 1 PDF page
#[derive(Parser)]
#[command(name = "pdfnup", about = "Convert 4 PDF pages to 1 PDF page", version)]
struct Cli {
    /// File path of input PDF
    #[arg(short, long)]
    input: PathBuf,

    /// File name of output PDF
    #[arg(short = 'o', long, default_value = "result.pdf")]
    output_fname: PathBuf,

    /// Directory of output PDF (created if missing)
    #[arg(short = 'd', long, default_value = ".")]
    output_dirname: PathBuf,

    /// Use the first page as a title page followed by a blank page
    #[arg(short = 't', long)]
    with_title: bool,

    /// Don't draw the line between columns
    #[arg(long)]
    without_line: bool,

    /// Don't print page numbers
    #[arg(long)]
    without_pagenum: bool,

    /// Inside margin ratio to page width [default: 0.06]
    #[arg(long)]
    inside_margin: Option<f32>,

    /// Outside margin ratio to page width [default: 0.0]
    #[arg(long)]
    outside_margin: Option<f32>,

    /// Column spacing ratio to page width [default: 0.0095]
    #[arg(long)]
    column_spacing: Option<f32>,

    /// Row spacing ratio to page height [default: 0.03]
    #[arg(long)]
    row_spacing: Option<f32>,

    /// Ratio of top margin to bottom margin [default: 0.75]
    #[arg(long)]
    margin_ratio_top_to_bottom: Option<f32>,

    /// Load layout options from a JSON file (flags override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective layout options to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,
}

impl Cli {
    /// Apply command-line overrides on top of `base`
    fn options(&self, base: pdf_nup::NupOptions) -> pdf_nup::NupOptions {
        let mut options = base;

        if let Some(ratio) = self.inside_margin {
            options.margins.inside_ratio = ratio;
        }
        if let Some(ratio) = self.outside_margin {
            options.margins.outside_ratio = ratio;
        }
        if let Some(ratio) = self.margin_ratio_top_to_bottom {
            options.margins.top_to_bottom_ratio = ratio;
        }
        if let Some(ratio) = self.column_spacing {
            options.spacing.column_ratio = ratio;
        }
        if let Some(ratio) = self.row_spacing {
            options.spacing.row_ratio = ratio;
        }

        options.with_title_page |= self.with_title;
        if self.without_line {
            options.decorations.separator_line = false;
        }
        if self.without_pagenum {
            options.decorations.page_numbers = false;
        }

        options
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => pdf_nup::NupOptions::load(path).await?,
        None => pdf_nup::NupOptions::default(),
    };
    let options = cli.options(base);
    options.validate()?;

    if let Some(path) = &cli.save_config {
        options.save(path).await?;
        log::info!("Saved options to {}", path.display());
    }

    // Load the input PDF
    let document = pdf_nup::load_pdf(&cli.input).await?;

    // Calculate and show statistics
    let stats = pdf_nup::calculate_statistics(&document, &options)?;
    println!("Composition Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Title pages: {}", stats.title_pages);
    println!("  Sheets: {}", stats.sheets);
    println!("  Output pages: {}", stats.output_pages);
    println!("  Blank slots: {}", stats.blank_slots);

    if cli.stats_only {
        return Ok(());
    }

    log::info!("Start merging PDF pages");
    let composed = pdf_nup::nup(&document, &options).await?;

    let output = pdf_nup::prepare_output_path(&cli.output_dirname, &cli.output_fname).await?;
    pdf_nup::save_pdf(composed, &output).await?;
    println!("Export to \"{}\"", output.display());

    Ok(())
}
