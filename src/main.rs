use nba_schedule_scraper::fetcher::Fetcher;
use nba_schedule_scraper::prompt::TerminalPrompt;
use nba_schedule_scraper::{Config, init_tracing, season};
use tracing::{error, info};

type Error = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), Error> {
    init_tracing();

    let config = Config::load()?;
    let fetcher = Fetcher::new(&config);
    let mut prompt = TerminalPrompt::new();

    match season::run(&config, &fetcher, &mut prompt) {
        Ok(summary) => {
            for report in &summary.seasons {
                info!(year = report.year, outcome = ?report.outcome, "Season finished");
            }
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Scrape aborted");
            Err(e.into())
        }
    }
}
