use clap::{Parser, Subcommand, ValueEnum};
use credit_core::record::validate_student_id;
use credit_core::*;
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

mod render;

#[derive(Parser)]
#[command(name = "credits")]
#[command(about = "Credit requirement tracker for promotion and graduation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Select completed courses, show what is left and save the record (default)
    Check {
        /// Requirement set: p (promotion) or g (graduation)
        #[arg(long)]
        mode: Option<RequirementMode>,

        /// Student id the record is saved under
        #[arg(long)]
        student_id: Option<String>,

        /// Select without prompting, e.g. --select "A=1 3" (repeatable)
        #[arg(long, value_name = "CATEGORY=NUMBERS")]
        select: Vec<String>,

        /// Keep an existing record: show it and exit without changes
        #[arg(long, conflicts_with = "overwrite")]
        keep: bool,

        /// Replace an existing record without asking
        #[arg(long, conflicts_with = "keep")]
        overwrite: bool,
    },

    /// Show the result for a saved record
    Show {
        /// Requirement set: p (promotion) or g (graduation)
        #[arg(long)]
        mode: RequirementMode,

        #[arg(long)]
        student_id: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the required credits per category
    Requirements {
        /// Requirement set: p (promotion) or g (graduation)
        #[arg(long)]
        mode: RequirementMode,
    },

    /// Print the numbered course catalog
    Catalog,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Default)]
struct CheckOptions {
    mode: Option<RequirementMode>,
    student_id: Option<String>,
    select: Vec<String>,
    keep: bool,
    overwrite: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    credit_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    // Determine data directory
    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    tracing::debug!("Using data directory {:?}", data_dir);

    match cli.command {
        Some(Commands::Check {
            mode,
            student_id,
            select,
            keep,
            overwrite,
        }) => cmd_check(
            &data_dir,
            &config,
            CheckOptions {
                mode,
                student_id,
                select,
                keep,
                overwrite,
            },
        ),
        Some(Commands::Show {
            mode,
            student_id,
            format,
        }) => cmd_show(&data_dir, &config, mode, &student_id, format),
        Some(Commands::Requirements { mode }) => cmd_requirements(&data_dir, &config, mode),
        Some(Commands::Catalog) => cmd_catalog(&data_dir, &config),
        None => {
            // Default to "check" command
            cmd_check(&data_dir, &config, CheckOptions::default())
        }
    }
}

fn cmd_check(data_dir: &Path, config: &Config, opts: CheckOptions) -> Result<()> {
    println!("=== Credit tracker (promotion / graduation, B0 surplus → B1) ===");

    let mode = match opts.mode {
        Some(mode) => mode,
        None => prompt_mode()?,
    };
    println!("\n→ Using {} requirements.", mode);

    let student_id = match opts.student_id {
        Some(id) => id,
        None => prompt("\nStudent id: ")?,
    };
    let student_id = validate_student_id(&student_id)?.to_string();

    let requirements = load_requirements(&config.requirements_path(data_dir, mode))?;
    let catalog = load_catalog(&config.catalog_path(data_dir))?;

    print!("{}", render::requirements_table(mode, &requirements));
    println!("* Surplus B0 credits are applied to B1 automatically.");

    let mut store = TextRecordStore::new(data_dir);
    let record_path = store.path_for(&student_id)?;

    if let Some(prior) = store.load(&student_id)? {
        println!("\nFound saved data ({}).", record_path.display());

        let keep = if opts.keep {
            true
        } else if opts.overwrite {
            false
        } else {
            prompt("Overwrite it? (y/n): ")?.to_lowercase() == "n"
        };

        if keep {
            println!("\nLoading saved data.");
            let report = Report::build(mode, &requirements, &catalog, &prior);
            print!("{}", render::report(&report, config.report.show_untaken));
            println!("\nNo changes made.");
            return Ok(());
        }
        println!("\nEntering new data (the saved record will be replaced).");
    }

    let selection = if opts.select.is_empty() {
        select_interactively(&catalog)?
    } else {
        let inputs = parse_select_args(&opts.select);
        select_all_by_numbers(&catalog, |category, _| inputs.get(&category).cloned())
    };

    let report = Report::build(mode, &requirements, &catalog, &selection);
    print!("{}", render::report(&report, config.report.show_untaken));

    store.save(&student_id, &selection)?;
    println!("\nSaved data to {}", record_path.display());

    Ok(())
}

fn cmd_show(
    data_dir: &Path,
    config: &Config,
    mode: RequirementMode,
    student_id: &str,
    format: OutputFormat,
) -> Result<()> {
    let store = TextRecordStore::new(data_dir);
    let Some(selection) = store.load(student_id)? else {
        println!("No saved data for {}.", student_id.trim());
        return Ok(());
    };

    let requirements = load_requirements(&config.requirements_path(data_dir, mode))?;
    let catalog = load_catalog(&config.catalog_path(data_dir))?;
    let report = Report::build(mode, &requirements, &catalog, &selection);

    match format {
        OutputFormat::Text => print!("{}", render::report(&report, config.report.show_untaken)),
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Csv => report.write_csv(io::stdout().lock())?,
    }

    Ok(())
}

fn cmd_requirements(data_dir: &Path, config: &Config, mode: RequirementMode) -> Result<()> {
    let requirements = load_requirements(&config.requirements_path(data_dir, mode))?;
    print!("{}", render::requirements_table(mode, &requirements));
    Ok(())
}

fn cmd_catalog(data_dir: &Path, config: &Config) -> Result<()> {
    let catalog = load_catalog(&config.catalog_path(data_dir))?;
    for category in Category::ALL {
        print!("{}", render::category_listing(category, &catalog[category]));
    }
    Ok(())
}

/// Ask for completed course numbers category by category
fn select_interactively(catalog: &Catalog) -> Result<EarnedSelection> {
    println!("\n=== Select the courses you have completed ===");
    println!("Enter numbers separated by spaces. Press Enter if none.");

    let mut selection = EarnedSelection::default();
    for category in Category::ALL {
        let courses = &catalog[category];
        print!("{}", render::category_listing(category, courses));
        if courses.is_empty() {
            continue;
        }

        let input = prompt("Completed course numbers → ")?;
        selection.set(category, select_by_numbers(courses, &input));
    }

    Ok(selection)
}

/// Parse `--select CATEGORY=NUMBERS` values; repeats for one category accumulate
fn parse_select_args(args: &[String]) -> HashMap<Category, String> {
    let mut inputs: HashMap<Category, String> = HashMap::new();

    for arg in args {
        let Some((category, numbers)) = arg.split_once('=') else {
            eprintln!("Ignoring malformed --select value: {}", arg);
            continue;
        };

        match category.trim().parse::<Category>() {
            Ok(category) => {
                let entry = inputs.entry(category).or_default();
                entry.push(' ');
                entry.push_str(numbers);
            }
            Err(e) => eprintln!("{}. Ignoring --select {}", e, arg),
        }
    }

    inputs
}

fn prompt_mode() -> Result<RequirementMode> {
    loop {
        let answer = prompt("Check promotion (p) or graduation (g) requirements? ")?;
        match answer.parse::<RequirementMode>() {
            Ok(mode) => return Ok(mode),
            Err(e) => tracing::debug!("Re-prompting for mode: {}", e),
        }
    }
}

/// Print `question` and read one trimmed line from stdin
fn prompt(question: &str) -> Result<String> {
    print!("{}", question);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(Error::Input(format!(
            "input ended while waiting for: {}",
            question.trim()
        )));
    }

    Ok(input.trim().to_string())
}
