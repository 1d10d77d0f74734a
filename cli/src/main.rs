//! unpsd CLI - PSD to Android layout conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unpsd::{
    parse_file_with_options, render, AssetExporter, DataBinding, JsonFormat, LayerNode,
    ParseOptions, RenderOptions,
};

#[derive(Parser)]
#[command(name = "unpsd")]
#[command(version)]
#[command(about = "Convert PSD layers to Android layout XML and drawables", long_about = None)]
struct Cli {
    /// Input PSD file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output project directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Wrap the layout in a data-binding <layout> element
    #[arg(long)]
    binding: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert PSD to a full Android resource tree (layout, drawables, JSON)
    Convert {
        /// Input PSD file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output project directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Wrap the layout in a data-binding <layout> element
        #[arg(long)]
        binding: bool,

        /// Discard group wrappers, placing every image at the top level
        #[arg(long)]
        flatten: bool,

        /// File names the drawable clean-up must not delete (repeatable)
        #[arg(long, value_name = "NAME")]
        keep: Vec<String>,

        /// Kotlin source root for the generated stub files
        /// (default: <OUTPUT>/app/src/main/java)
        #[arg(long, value_name = "DIR")]
        stub_dir: Option<PathBuf>,
    },

    /// Emit layout XML only
    Layout {
        /// Input PSD file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Drawable output directory for exported assets
        #[arg(short, long, value_name = "DIR", default_value = "app/src/main/res/drawable")]
        drawable: PathBuf,

        /// Wrap the layout in a data-binding <layout> element
        #[arg(long)]
        binding: bool,

        /// Discard group wrappers, placing every image at the top level
        #[arg(long)]
        flatten: bool,
    },

    /// Dump the extracted layer tree as JSON
    Json {
        /// Input PSD file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input PSD file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Extract layer images without generating a layout
    Extract {
        /// Input PSD file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            binding,
            flatten,
            keep,
            stub_dir,
        }) => cmd_convert(
            &input,
            output.as_deref(),
            binding,
            flatten,
            &keep,
            stub_dir.as_deref(),
        ),
        Some(Commands::Layout {
            input,
            output,
            drawable,
            binding,
            flatten,
        }) => cmd_layout(&input, output.as_deref(), &drawable, binding, flatten),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Extract { input, output }) => cmd_extract(&input, output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), cli.binding, false, &[], None)
            } else {
                println!("{}", "Usage: unpsd <FILE> [OUTPUT]".yellow());
                println!("       unpsd --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_options(flatten: bool) -> ParseOptions {
    ParseOptions::new().with_flatten_groups(flatten)
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    binding: bool,
    flatten: bool,
    keep: &[String],
    stub_dir: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    let layout_dir = output_dir.join("app/src/main/res/layout");
    let drawable_dir = output_dir.join("app/src/main/res/drawable");
    fs::create_dir_all(&layout_dir)?;

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    // Parse the layer tree
    pb.set_message("Parsing PSD...");
    let doc = parse_file_with_options(input, parse_options(flatten))?;
    pb.inc(1);

    // Build render options
    let mut render_options = RenderOptions::new().with_asset_dir(&drawable_dir);
    for name in keep {
        render_options = render_options.retain_file(name.clone());
    }
    if binding {
        render_options = render_options.with_data_binding(DataBinding::sample());
    }

    // Export assets and emit the layout in one traversal
    pb.set_message("Generating layout...");
    let rendered = render::render_layout(&doc, &render_options)?;
    fs::write(layout_dir.join("activity_main.xml"), &rendered.xml)?;
    pb.inc(1);

    // Stub sources are part of every run; --binding only controls the
    // <layout> wrapper in the XML.
    pb.set_message("Writing stubs...");
    let java_root = stub_dir
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| output_dir.join("app/src/main/java"));
    render::stubs::write_stubs_under(&java_root)?;
    pb.inc(1);

    // Structural dump
    pb.set_message("Writing JSON...");
    let json = render::to_json(&doc, JsonFormat::Pretty)?;
    fs::write(output_dir.join("layers.json"), &json)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    println!("  {} app/src/main/res/layout/activity_main.xml", "├─".dimmed());
    println!(
        "  {} app/src/main/res/drawable/ ({} images)",
        "├─".dimmed(),
        rendered.stats.assets_written
    );
    println!("  {} app/src/main/java/", "├─".dimmed());
    println!("  {} layers.json", "└─".dimmed());

    if rendered.stats.unsupported_skipped > 0 || rendered.stats.empty_skipped > 0 {
        println!(
            "{} {} unsupported, {} empty layers skipped",
            "Note:".yellow(),
            rendered.stats.unsupported_skipped,
            rendered.stats.empty_skipped
        );
    }

    Ok(())
}

fn cmd_layout(
    input: &Path,
    output: Option<&Path>,
    drawable: &Path,
    binding: bool,
    flatten: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file_with_options(input, parse_options(flatten))?;

    let mut render_options = RenderOptions::new().with_asset_dir(drawable);
    if binding {
        render_options = render_options.with_data_binding(DataBinding::sample());
    }

    let rendered = render::render_layout(&doc, &render_options)?;

    if let Some(path) = output {
        fs::write(path, &rendered.xml)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", rendered.xml);
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = unpsd::parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = unpsd::detect_format_from_path(input)?;
    let doc = unpsd::parse_file(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    println!(
        "{}: {}x{}",
        "Canvas".bold(),
        doc.metadata.width,
        doc.metadata.height
    );
    println!("{}: {}", "Layers".bold(), doc.metadata.layer_count);
    println!("{}: {}", "Groups".bold(), doc.metadata.group_count);
    println!(
        "{}: {}",
        "Drawable leaves".bold(),
        doc.leaf_count()
    );

    Ok(())
}

fn cmd_extract(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = unpsd::parse_file(input)?;

    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let exporter = AssetExporter::new(&output_dir);
    let mut count = 0;
    for node in &doc.root {
        count += extract_node(&exporter, node)?;
    }

    println!("\n{} {} images extracted", "Done!".green().bold(), count);

    Ok(())
}

fn extract_node(
    exporter: &AssetExporter,
    node: &LayerNode,
) -> Result<usize, Box<dyn std::error::Error>> {
    if node.is_group() {
        let mut count = 0;
        for child in node.children() {
            count += extract_node(exporter, child)?;
        }
        return Ok(count);
    }

    match exporter.export(node)? {
        Some(name) => {
            println!("{} {}.png", "Extracted".green(), name);
            Ok(1)
        }
        None => Ok(0),
    }
}

fn cmd_version() {
    println!("{} {}", "unpsd".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PSD to Android layout conversion tool");
    println!();
    println!("License: MIT");
}
