use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use detail_page::conl_ser::{read_product_file, write_product_file};
use detail_page::export::code_preview;
use detail_page::resolve::{example_form, example_keyword};
use detail_page::theme::themes;
use detail_page::{generate, write_exports, FormInput, InputMode};

mod utils;

const OUTPUT_DIR: &str = "output";
const DEFAULT_PRODUCT_FILE: &str = "product.conl";

#[derive(Parser)]
#[command(name = "detail-page")]
#[command(about = "Generate a standalone product detail page from a few product attributes")]
struct Cli {
    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,
    /// Print debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer everything from a single product keyword
    Quick {
        /// Product keyword (e.g. "프리미엄 무선 이어폰")
        keyword: Option<String>,
        /// Use the built-in example keyword
        #[arg(long, conflicts_with = "keyword")]
        example: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Generate from explicitly specified product fields
    Form {
        #[command(flatten)]
        fields: FormArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Write the example product as a CONL file to edit
    Init {
        #[arg(value_name = "PATH", default_value = DEFAULT_PRODUCT_FILE)]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// List the category themes
    Themes,
    /// Remove the output directory
    Clean {
        #[arg(short, long, default_value = OUTPUT_DIR)]
        output: PathBuf,
    },
}

#[derive(Args)]
struct FormArgs {
    /// Product name (required)
    #[arg(long)]
    name: Option<String>,
    /// Category: 전자제품, 패션, 뷰티, 경영경제서적, 식품, 기타 (or the English name)
    #[arg(long)]
    category: Option<String>,
    /// Price in won
    #[arg(long)]
    price: Option<u64>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    target_market: Option<String>,
    /// Design notes for the third feature card
    #[arg(long)]
    design_notes: Option<String>,
    /// Hex brand color, e.g. #2C3E50
    #[arg(long)]
    brand_color: Option<String>,
    /// Read fields from a CONL product file; flags override its values
    #[arg(long, value_name = "FILE")]
    from: Option<PathBuf>,
    /// Start from the built-in example product
    #[arg(long, conflicts_with = "from")]
    example: bool,
}

impl FormArgs {
    fn into_form(self) -> Result<FormInput> {
        let base = if self.example {
            example_form()
        } else if let Some(path) = &self.from {
            read_product_file(path)?
        } else {
            FormInput::default()
        };

        Ok(base.overlay(FormInput {
            product_name: self.name,
            category: self.category,
            price: self.price,
            description: self.description,
            target_market: self.target_market,
            special_requirements: self.design_notes,
            brand_color: self.brand_color,
        }))
    }
}

#[derive(Args)]
struct OutputArgs {
    /// Directory for the exported files
    #[arg(short, long, default_value = OUTPUT_DIR)]
    output: PathBuf,
    /// Print the page to stdout instead of writing files
    #[arg(long)]
    stdout: bool,
    /// Also print the first part of the page source
    #[arg(long, conflicts_with = "stdout")]
    preview: bool,
}

fn init_logging(quiet: bool, verbose: bool) {
    let default_filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

fn run_generate(mode: InputMode, output: &OutputArgs, quiet: bool) -> Result<()> {
    let page = generate(mode).context("Please fill in the required product information")?;

    if output.stdout {
        print!("{}", page.html);
        return Ok(());
    }

    let generated_at = chrono::Local::now().naive_local();
    let paths = write_exports(&output.output, &page.attributes, &page.html, generated_at)?;

    if !quiet {
        println!(
            "Generated page for '{}' ({}, {})",
            page.attributes.product_name(),
            page.attributes.category(),
            detail_page::render::format_price(page.attributes.price())
        );
        println!("  HTML: {}", utils::file_link(&paths.html));
        println!("  JSON: {}", utils::file_link(&paths.json));
    }

    if output.preview {
        println!("\n{}", code_preview(&page.html));
    }

    Ok(())
}

fn run_init(path: &Path, force: bool, quiet: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_product_file(path, &example_form())?;
    if !quiet {
        println!("Wrote example product to {}", utils::file_link(path));
        println!("Edit it, then run: detail-page form --from {}", path.display());
    }
    Ok(())
}

fn run_themes() -> Result<()> {
    println!("{:<14} {:<14} {:<9} {:<9} {}", "CATEGORY", "LABEL", "PRIMARY", "SECONDARY", "STYLE");
    for (category, theme) in themes() {
        println!(
            "{:<14} {:<14} {:<9} {:<9} {}",
            category.name(),
            category.label(),
            theme.primary_color,
            theme.secondary_color,
            theme.style_label
        );
    }
    Ok(())
}

fn run_clean(output: &Path, quiet: bool) -> Result<()> {
    if output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to remove {}", output.display()))?;
        if !quiet {
            println!("Removed {}/", output.display());
        }
    } else if !quiet {
        println!("Nothing to clean");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);
    let quiet = cli.quiet;

    match cli.command {
        Commands::Quick {
            keyword,
            example,
            output,
        } => {
            let keyword = if example {
                example_keyword().to_string()
            } else {
                keyword.unwrap_or_default()
            };
            run_generate(InputMode::Keyword(keyword), &output, quiet)
        }
        Commands::Form { fields, output } => {
            run_generate(InputMode::Form(fields.into_form()?), &output, quiet)
        }
        Commands::Init { path, force } => run_init(&path, force, quiet),
        Commands::Themes => run_themes(),
        Commands::Clean { output } => run_clean(&output, quiet),
    }
}
