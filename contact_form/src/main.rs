use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use contact_form::commands::{
    render::render,
    submit::{submit, SubmitArgs},
};
use contact_form_config::DEFAULT_CONFIG_PATH;
use contact_form_utils::contact_form_version;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
    paths.extend(cli.config);
    let config = contact_form_config::load(&paths)?;

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Render => render(&config, &mut stdout)?,
        Command::Submit(args) => submit(&config, args, &mut stdout)?,
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = contact_form_version())]
struct Cli {
    /// Additional config files, merged over the defaults in order
    #[arg(long, short, global = true, env = "CONTACT_FORM_CONFIG", value_delimiter = ':')]
    config: Vec<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the markup of an empty contact form
    #[command(aliases(["r"]))]
    Render,
    /// Fill in the contact form, submit it and print the resulting markup
    #[command(aliases(["s"]))]
    Submit(SubmitArgs),
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}
