use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use crate::error::{Result, ScrapeError};
use crate::model::GameRecord;
use crate::model::game::coerce_points;

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Parse(format!("invalid selector '{css}': {e}")))
}

fn text_of(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Month sub-page URLs from the season page's `div.filter` navigation, in page order.
///
/// Each href is resolved against `base` the way a browser would.
pub fn extract_month_links(body: &str, base: &Url) -> Result<Vec<String>> {
    let document = Html::parse_document(body);
    let filter_selector = selector("div.filter")?;
    let anchor_selector = selector("a")?;

    let filter = document
        .select(&filter_selector)
        .next()
        .ok_or_else(|| ScrapeError::Parse("couldn't find months".to_string()))?;

    let links = filter
        .select(&anchor_selector)
        .filter_map(|a| a.value().attr("href"))
        .map(|href| {
            base.join(href)
                .map(String::from)
                .map_err(|e| ScrapeError::Parse(format!("bad month link '{href}': {e}")))
        })
        .collect::<Result<Vec<String>>>()?;
    debug!(count = links.len(), "Extracted month links");
    Ok(links)
}

/// Game rows from `table#schedule`.
///
/// Repeated header rows (class `thead`) and rows without `<td>` cells are skipped.
pub fn extract_games(body: &str) -> Result<Vec<GameRecord>> {
    let document = Html::parse_document(body);
    let table_selector = selector("table#schedule")?;
    let row_selector = selector("tbody tr")?;
    let header_selector = selector("th")?;
    let cell_selector = selector("td")?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| ScrapeError::Parse("couldn't find schedule table".to_string()))?;

    let mut games = Vec::new();
    for row in table.select(&row_selector) {
        if row.value().classes().any(|c| c == "thead") {
            continue;
        }
        let cells: Vec<String> = row.select(&cell_selector).map(|td| text_of(&td)).collect();
        if cells.is_empty() {
            continue;
        }
        let cell = |i: usize| cells.get(i).cloned().unwrap_or_default();
        let date = row.select(&header_selector).next().map(|th| text_of(&th)).unwrap_or_default();

        games.push(GameRecord {
            date,
            start_et: cell(0),
            visitor_team: cell(1),
            visitor_pts: coerce_points(&cell(2)),
            home_team: cell(3),
            home_pts: coerce_points(&cell(4)),
            // 5 is the box score link
            overtime: cell(6),
            attendance: cell(7),
            game_duration: cell(8),
            arena: cell(9),
        });
    }
    debug!(count = games.len(), "Extracted games");
    Ok(games)
}
