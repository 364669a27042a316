// Binary entry point for the terminal application.
use anyhow::Result;
use huhhh::TaskController;
use huhhh::cli::{CliArgs, print_help};
use huhhh::config::Config;
use huhhh::context::StandardContext;
use huhhh::logging;
use huhhh::storage::Storage;
use huhhh::ui::Ui;
use log::info;

fn main() -> Result<()> {
    let args = match CliArgs::parse(std::env::args_os().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Try 'huhhh --help' for usage.");
            std::process::exit(2);
        }
    };

    if args.help {
        print_help("huhhh");
        return Ok(());
    }

    let ctx = StandardContext::new(args.root.clone());

    let config = Config::load_or_init(&ctx).unwrap_or_else(|e| {
        eprintln!("{:#}. Using default settings.", e);
        Config::default()
    });

    if let Err(e) = logging::init(&ctx, config.level_filter()) {
        eprintln!("Logging disabled: {:#}", e);
    }

    let data_file = Storage::resolve_path(
        args.data_file
            .as_deref()
            .or(Some(config.data_file.as_path())),
    );
    info!("Starting session with task file {}", data_file.display());

    let mut controller = TaskController::new(Storage::open(&data_file));
    Ui::stdio().run(&mut controller, config.show_welcome)?;

    info!("Session ended");
    Ok(())
}
