use color_eyre::Result;

use swatchbook::tui::Terminal;
use swatchbook::{logging, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Load configuration
    let config = Config::load()?;
    logging::init(&config.log)?;

    // Connect collaborators and fetch the stored palette
    let mut app = App::load(config).await?;

    // Initialize terminal and run
    let terminal = Terminal::new()?;
    app.run(terminal).await?;

    Ok(())
}
