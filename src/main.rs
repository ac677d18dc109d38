mod cli;

use build_compat::adapters::outbound::console::StderrProgressReporter;
use build_compat::adapters::outbound::formatters::HtmlResultRenderer;
use build_compat::adapters::outbound::network::ReqwestTransport;
use build_compat::adapters::outbound::page::Document;
use build_compat::application::dto::CheckOutcome;
use build_compat::application::factories::{PresenterFactory, PresenterType};
use build_compat::application::page_context::PageContext;
use build_compat::application::use_cases::{CheckCompatibilityUseCase, LoadComponentsUseCase};
use build_compat::config::{self, ConfigFile, Settings};
use build_compat::shared::error::ExitCode;
use build_compat::shared::Result;
use cli::Args;
use owo_colors::OwoColorize;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();
    let args = Args::parse_args();

    let exit_code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };
    process::exit(exit_code.as_i32());
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> Result<ExitCode> {
    let config_file = load_config(&args)?;
    let settings = Settings::resolve(args.base_url.as_deref(), config_file);
    tracing::debug!(base_url = %settings.base_url, "resolved settings");

    // Create adapters (Dependency Injection)
    let transport = ReqwestTransport::new(&settings.base_url)?;
    let mut document = Document::checker_page();
    let context = PageContext::bootstrap(&mut document, &settings.widget, settings.endpoints)?;

    eprintln!("🔌 Backend: {}", transport.base_url());
    let loader = LoadComponentsUseCase::new(transport.clone(), StderrProgressReporter::new());
    loader.load_all(&context).await;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.as_deref()));

    if args.list {
        presenter.present(&format_listing(&context))?;
        return Ok(ExitCode::Success);
    }

    for (category, value) in args.requested() {
        let selected = context
            .widget(category)
            .is_some_and(|widget| widget.select(value));
        if !selected {
            eprintln!(
                "{}",
                format!("⚠️  No {} option matches '{}'", category, value).yellow()
            );
        }
    }

    let checker = CheckCompatibilityUseCase::new(transport, HtmlResultRenderer::new());
    let outcome = checker.execute(&context).await;

    presenter.present(&context.results().html())?;
    Ok(report_outcome(&outcome))
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(&std::env::current_dir()?),
    }
}

/// One line per loaded category, then its options as `label [value]`
fn format_listing(context: &PageContext) -> String {
    let mut output = String::new();
    for (category, widget) in context.widgets() {
        let choices = widget.choices();
        output.push_str(&format!("{} ({})\n", category, choices.len()));
        for option in choices {
            output.push_str(&format!("  {} [{}]\n", option.label(), option.value()));
        }
    }
    output
}

fn report_outcome(outcome: &CheckOutcome) -> ExitCode {
    match outcome {
        CheckOutcome::Rendered(result) if result.is_compatible() => {
            eprintln!("{}", "✅ Build is compatible".green().bold());
            ExitCode::Success
        }
        CheckOutcome::Rendered(_) => {
            eprintln!("{}", "❌ Build is incompatible".red().bold());
            ExitCode::Incompatible
        }
        CheckOutcome::Rejected { missing } => {
            let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
            eprintln!(
                "{}",
                format!("⚠️  Missing selection: {}", names.join(", ")).yellow()
            );
            ExitCode::ApplicationError
        }
        CheckOutcome::RequestFailed { message } => {
            eprintln!("{}", message.red());
            ExitCode::ApplicationError
        }
    }
}
