//! CLI entrypoint.

use std::error::Error;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use docview::{Docview, RenderFormat, ResolveMode};

#[derive(Debug, Clone, Copy, ValueEnum)]
/// Output formats accepted by `--format`.
enum OutputFormat {
	/// Plain text, colored on terminals.
	Text,
	/// HTML fragments with the viewer's CSS classes.
	Html,
	/// Structured JSON.
	Json,
}

impl From<OutputFormat> for RenderFormat {
	fn from(format: OutputFormat) -> Self {
		match format {
			OutputFormat::Text => Self::Text,
			OutputFormat::Html => Self::Html,
			OutputFormat::Json => Self::Json,
		}
	}
}

#[derive(Args, Clone)]
struct CommonArgs {
	/// Select the output format
	#[arg(short = 'f', long, value_enum, default_value = "text")]
	format: OutputFormat,

	/// Disable ANSI colors in CLI output
	#[arg(long, default_value_t = false)]
	no_color: bool,

	/// Fail on malformed type descriptors instead of rendering their name
	#[arg(long, default_value_t = false)]
	strict: bool,

	/// Enable verbose mode, logging document loading and search to stderr
	#[arg(short = 'v', long, default_value_t = false)]
	verbose: bool,
}

#[derive(Args, Clone)]
struct LabelArgs {
	/// JSON file holding a single type descriptor
	descriptor: PathBuf,

	/// Default value appended as `(default V)`
	#[arg(short = 'd', long = "default")]
	default_value: Option<String>,

	/// Documentation tree used to drop links to undocumented constructs
	#[arg(long)]
	docs: Option<PathBuf>,

	#[command(flatten)]
	common: CommonArgs,
}

#[derive(Args, Clone)]
struct SearchArgs {
	/// Search data JSON file
	data: PathBuf,

	/// Case-insensitive substring to look for in construct names
	#[arg(default_value = "")]
	query: String,

	#[command(flatten)]
	common: CommonArgs,
}

#[derive(Args, Clone)]
struct ModuleArgs {
	/// Documentation tree JSON file
	docs: PathBuf,

	/// Module identifier, e.g. `http` or `http.client`
	module: String,

	#[command(flatten)]
	common: CommonArgs,
}

#[derive(Args, Clone)]
struct ItemArgs {
	/// Documentation tree JSON file
	docs: PathBuf,

	/// Module identifier
	module: String,

	/// Construct name; `Type.method` selects a method
	name: String,

	#[command(flatten)]
	common: CommonArgs,
}

#[derive(Args, Clone)]
struct ReportArgs {
	/// Test report JSON file (workspace or single project)
	report: PathBuf,

	/// Show one project's module table
	#[arg(short = 'p', long)]
	project: Option<String>,

	/// Show one module's tests and coverage (requires --project)
	#[arg(short = 'm', long, requires = "project")]
	module: Option<String>,

	#[command(flatten)]
	common: CommonArgs,
}

#[derive(Subcommand, Clone)]
enum Command {
	/// Render a type descriptor as a linked label.
	Label(LabelArgs),
	/// Search construct names.
	Search(SearchArgs),
	/// Summarize a module.
	Module(ModuleArgs),
	/// Render a function or method page.
	Function(ItemArgs),
	/// Render the page of any construct.
	Construct(ItemArgs),
	/// Render a test and coverage report.
	Report(ReportArgs),
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Parsed command-line options for the docview CLI.
struct Cli {
	#[command(subcommand)]
	command: Command,
}

impl Command {
	fn common(&self) -> &CommonArgs {
		match self {
			Self::Label(args) => &args.common,
			Self::Search(args) => &args.common,
			Self::Module(args) => &args.common,
			Self::Function(args) | Self::Construct(args) => &args.common,
			Self::Report(args) => &args.common,
		}
	}
}

fn build_docview(common: &CommonArgs) -> Docview {
	let mut docview = Docview::new()
		.with_format(common.format.into())
		.with_color(should_color_output(common));
	if common.strict {
		docview = docview.with_mode(ResolveMode::Strict);
	}
	docview
}

fn should_color_output(common: &CommonArgs) -> bool {
	if common.no_color || !matches!(common.format, OutputFormat::Text) {
		return false;
	}
	if std::env::var_os("NO_COLOR").is_some() {
		return false;
	}
	if std::env::var("TERM").ok().as_deref() == Some("dumb") {
		return false;
	}
	std::io::stdout().is_terminal()
}

fn main() {
	let cli = Cli::parse();
	docview::logging::init(cli.command.common().verbose);

	if let Err(e) = run(cli) {
		eprintln!("{e}");
		process::exit(1);
	}
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
	let dv = build_docview(cli.command.common());
	let output = match cli.command {
		Command::Label(args) => {
			let descriptor = dv.load_descriptor(&args.descriptor)?;
			let docs = args.docs.as_deref().map(|path| dv.load_documents(path)).transpose()?;
			dv.render_label(&descriptor, args.default_value.as_deref(), docs.as_ref())?
		}
		Command::Search(args) => {
			let index = dv.load_search_index(&args.data)?;
			dv.render_search(&index, &args.query)?
		}
		Command::Module(args) => {
			let tree = dv.load_documents(&args.docs)?;
			dv.render_module(&tree, &args.module)?
		}
		Command::Function(args) => {
			let tree = dv.load_documents(&args.docs)?;
			dv.render_function(&tree, &args.module, &args.name)?
		}
		Command::Construct(args) => {
			let tree = dv.load_documents(&args.docs)?;
			dv.render_construct(&tree, &args.module, &args.name)?
		}
		Command::Report(args) => {
			let report = dv.load_report(&args.report)?;
			dv.render_report(report, args.project.as_deref(), args.module.as_deref())?
		}
	};
	print!("{output}");
	if !output.is_empty() && !output.ends_with('\n') {
		println!();
	}
	Ok(())
}
