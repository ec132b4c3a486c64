//! acrylic-quote - CLI for acrylic box and panel quotes.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use acrylic_quote::pricing::{format_currency, round_currency};
use acrylic_quote::store::{remember_box, remember_panel};
use acrylic_quote::{
    quote_box, quote_panel, render_layout_svg, write_order_form, BoxForm, Catalog, FormStore,
    JsonFileStore, MemoryStore, OrderForm, PanelForm, Thickness,
};

/// Quote acrylic boxes and panels against a stock sheet catalog.
#[derive(Parser, Debug)]
#[command(name = "acrylic-quote")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Stock sheet catalog (JSON). Uses the built-in catalog if omitted
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// File that remembers the last form inputs
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Quote a batch of identical boxes
    Box(BoxArgs),
    /// Rank sheets by price per item for flat panels
    Panel(PanelArgs),
    /// Check a material order form and print it
    Order(OrderArgs),
    /// List catalog sheets
    Catalog {
        /// Only show sheets stocked in this thickness
        #[arg(long)]
        thickness: Option<Thickness>,
    },
}

#[derive(Args, Debug)]
struct BoxArgs {
    /// Outer width (mm)
    #[arg(long)]
    width: Option<f64>,

    /// Outer height (mm)
    #[arg(long)]
    height: Option<f64>,

    /// Outer depth (mm)
    #[arg(long)]
    depth: Option<f64>,

    /// Sheet thickness, e.g. 3 or 1.3T
    #[arg(long)]
    thickness: Option<Thickness>,

    /// Number of boxes
    #[arg(long)]
    quantity: Option<u32>,

    /// Labor cost multiplier
    #[arg(long)]
    labor_factor: Option<f64>,

    /// Write the cutting layout as SVG
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Print the quote as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct PanelArgs {
    /// Panel width (mm)
    #[arg(long)]
    width: Option<f64>,

    /// Panel height (mm)
    #[arg(long)]
    height: Option<f64>,

    /// Sheet thickness, e.g. 3 or 1.3T
    #[arg(long)]
    thickness: Option<Thickness>,

    /// Print the options as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct OrderArgs {
    /// Order form (JSON)
    input: PathBuf,

    /// Order date (YYYY-MM-DD). Defaults to the date in the file, else today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Write the form to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the checked form as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::builtin().context("Built-in catalog is invalid")?,
    };

    match &cli.state {
        Some(path) => {
            let mut store = JsonFileStore::open(path)
                .with_context(|| format!("Failed to open state file {}", path.display()))?;
            run(cli.command, &catalog, &mut store)
        }
        None => run(cli.command, &catalog, &mut MemoryStore::new()),
    }
}

fn run<S: FormStore>(command: Command, catalog: &Catalog, store: &mut S) -> Result<()> {
    match command {
        Command::Box(args) => run_box(args, catalog, store),
        Command::Panel(args) => run_panel(args, catalog, store),
        Command::Order(args) => run_order(args, catalog),
        Command::Catalog { thickness } => {
            list_catalog(catalog, thickness);
            Ok(())
        }
    }
}

fn run_box<S: FormStore>(args: BoxArgs, catalog: &Catalog, store: &mut S) -> Result<()> {
    let form = BoxForm {
        width: args.width,
        height: args.height,
        depth: args.depth,
        thickness: args.thickness,
        quantity: args.quantity,
        labor_factor: args.labor_factor,
    };
    let request = form.resolve(&*store)?;

    info!(
        "Quoting {} box(es) {}x{}x{} mm in {}",
        request.quantity, request.width, request.height, request.depth, request.thickness
    );

    let quote = quote_box(&request, catalog)?;

    remember_box(store, &request)?;

    if let Some(path) = &args.svg {
        std::fs::write(path, render_layout_svg(&quote))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Generated: {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    println!("Panels:");
    for part in &quote.dimensions {
        println!("  {:<7} {} x {} mm", part.part, part.width, part.height);
    }
    println!(
        "Sheet:            {} ({} x {} mm)",
        quote.sheet.name, quote.sheet.width, quote.sheet.height
    );
    println!("Parts per sheet:  {}", quote.layout.len());
    println!("Sheets needed:    {}", quote.sheets_needed);
    println!(
        "Material cost:    {}",
        format_currency(quote.total_material_cost)
    );
    println!("Labor factor:     {}", quote.labor_factor);
    println!(
        "Total cost:       {}",
        format_currency(round_currency(quote.total_cost))
    );
    println!(
        "Cost per box:     {}",
        format_currency(round_currency(quote.cost_per_box))
    );
    println!("Utilization:      {:.1}%", quote.utilization() * 100.0);

    Ok(())
}

fn run_panel<S: FormStore>(args: PanelArgs, catalog: &Catalog, store: &mut S) -> Result<()> {
    let form = PanelForm {
        width: args.width,
        height: args.height,
        thickness: args.thickness,
    };
    let request = form.resolve(&*store)?;

    let options = quote_panel(&request, catalog)?;

    remember_panel(store, &request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    if let Some(best) = options.first() {
        println!(
            "Best: {} ({} x {} mm), {} per item, {} item(s) for {}",
            best.sheet_name,
            best.sheet_width,
            best.sheet_height,
            format_currency(round_currency(best.price_per_item)),
            best.count,
            format_currency(best.fee)
        );
    }

    for option in &options {
        println!(
            "  {:<10} {:>5} x {:<5} {:>3} x {:<3} = {:>4}  sheet {:>10}  item {:>8}",
            option.sheet_name,
            option.sheet_width,
            option.sheet_height,
            option.horizontal,
            option.vertical,
            option.count,
            format_currency(option.fee),
            format_currency(round_currency(option.price_per_item))
        );
    }

    Ok(())
}

fn run_order(args: OrderArgs, catalog: &Catalog) -> Result<()> {
    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let mut form: OrderForm = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse order form {}", args.input.display()))?;

    form.order_date = args
        .date
        .or(form.order_date)
        .or_else(|| Some(Local::now().date_naive()));

    let text = write_order_form(&form, catalog)?;
    let output = if args.json {
        serde_json::to_string_pretty(&form)? + "\n"
    } else {
        text
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}

fn list_catalog(catalog: &Catalog, thickness: Option<Thickness>) {
    println!("Cut loss: {} mm", catalog.cut_loss);

    for sheet in &catalog.sheets {
        match thickness {
            Some(th) => match sheet.fee_for(th) {
                Some(fee) => println!(
                    "  {:<10} {:>5} x {:<5} {} {}",
                    sheet.name,
                    sheet.width,
                    sheet.height,
                    th,
                    format_currency(fee)
                ),
                None => continue,
            },
            None => {
                let stocked: Vec<String> = sheet.thicknesses().map(|t| t.to_string()).collect();
                println!(
                    "  {:<10} {:>5} x {:<5} {}",
                    sheet.name,
                    sheet.width,
                    sheet.height,
                    stocked.join(" ")
                );
            }
        }
    }

    if let Some(th) = thickness {
        if !catalog.offers(th) {
            warn!("No sheet is stocked in {}", th);
        }
    }
}
