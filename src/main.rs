use anyhow::Result;
use rescore::cli::{Cli, Commands};
use rescore::commands::{self, BatchOptions, CorrectOptions};
use rescore::formatting::FormattingConfig;
use rescore::observability::{init_tracing, install_panic_hook};

fn main() -> Result<()> {
    let cli = rescore::cli::parse_args();

    install_panic_hook();
    init_tracing(cli.verbose);

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let verbosity = cli.verbose;

    match cli.command {
        Commands::Correct {
            input,
            format,
            output,
            export,
            plain,
            correction,
        } => commands::handle_correct(CorrectOptions {
            input,
            format: format.map(Into::into),
            output,
            export,
            formatting: create_formatting_config(plain),
            verbosity,
            correction,
        }),
        Commands::Batch {
            inputs,
            output_dir,
            correction,
        } => commands::handle_batch(BatchOptions {
            inputs,
            output_dir,
            formatting: FormattingConfig::from_env(),
            correction,
        }),
        Commands::Validate { input } => commands::handle_validate(&input),
        Commands::Init { force } => commands::init_config(force),
        Commands::Demo { format, plain } => {
            commands::handle_demo(format.into(), create_formatting_config(plain), verbosity)
        }
    }
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
