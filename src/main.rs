use anyhow::Result;
use clap::Parser;
use cpim_core::config::AppConfig;
use cpim_core::metrics::{init_logging, LogTarget};
use cpim_lib::{App, Args, Mode};
use cpim_tui::Tui;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_target = match (&args.log_file, args.mode) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, Mode::Headless) => LogTarget::Stderr,
        (None, Mode::Tui) => LogTarget::Discard,
    };
    init_logging(log_target)?;

    let mut config = AppConfig::load_or_default(&args.config);
    args.apply_to(&mut config)?;

    match args.mode {
        Mode::Headless => {
            let mut app = App::new(config)?;
            app.export_on_stop = false;
            let summary = app.run_headless()?;
            if args.export {
                let path = app.export()?;
                println!("Snapshot saved as {}", path.display());
            }
            println!(
                "Finished after {} generations: {} occupied{}",
                summary.generations,
                summary.occupied,
                if summary.extinct { " (extinct)" } else { "" }
            );
        }
        Mode::Tui => {
            let mut tui = Tui::new()?;
            tui.init()?;

            let mut app = App::new(config)?;
            let res = app.run(&mut tui).await;

            tui.exit()?;

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            }
        }
    }

    Ok(())
}
