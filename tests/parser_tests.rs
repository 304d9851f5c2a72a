use nba_schedule_scraper::ScrapeError;
use nba_schedule_scraper::parser::{extract_games, extract_month_links};
use url::Url;

fn season_page_url() -> Url {
    Url::parse("https://www.basketball-reference.com/leagues/NBA_2020_games.html").unwrap()
}

#[test]
fn extracts_month_links_in_page_order() {
    // Arrange
    let html = include_str!("fixtures/season_2020.html");

    // Act
    let links = extract_month_links(html, &season_page_url()).expect("month links");

    // Assert: the December anchor has no href and is dropped
    assert_eq!(
        links,
        vec![
            "https://www.basketball-reference.com/leagues/NBA_2020_games-october.html".to_string(),
            "https://www.basketball-reference.com/leagues/NBA_2020_games-november.html".to_string(),
        ]
    );
}

#[test]
fn missing_month_filter_is_a_parse_error() {
    let html = include_str!("fixtures/month_october.html");
    let err = extract_month_links(html, &season_page_url()).unwrap_err();
    assert!(matches!(err, ScrapeError::Parse(_)), "error was: {:?}", err);
}

#[test]
fn resolves_hrefs_like_a_browser() {
    let html = r#"<div class="filter">
        <a href="//www.basketball-reference.com/leagues/NBA_2020_games-may.html">May</a>
        <a href="NBA_2020_games-june.html">June</a>
        <a href="https://mirror.example/leagues/NBA_2020_games-july.html">July</a>
    </div>"#;
    let base = Url::parse("https://www.basketball-reference.com/leagues").unwrap();

    let links = extract_month_links(html, &base).expect("month links");

    assert_eq!(
        links,
        vec![
            "https://www.basketball-reference.com/leagues/NBA_2020_games-may.html".to_string(),
            "https://www.basketball-reference.com/NBA_2020_games-june.html".to_string(),
            "https://mirror.example/leagues/NBA_2020_games-july.html".to_string(),
        ]
    );
}

#[test]
fn relative_hrefs_resolve_next_to_the_season_page() {
    let html = r#"<div class="filter"><a href="NBA_2020_games-june.html">June</a></div>"#;
    let links = extract_month_links(html, &season_page_url()).expect("month links");
    assert_eq!(links, vec!["https://www.basketball-reference.com/leagues/NBA_2020_games-june.html".to_string()]);
}

#[test]
fn reads_fixed_position_fields() {
    let html = include_str!("fixtures/month_october.html");
    let games = extract_games(html).expect("games");
    assert_eq!(games.len(), 1);

    let g = &games[0];
    assert_eq!(g.date, "Tue, Oct 22, 2019");
    assert_eq!(g.start_et, "8:00p");
    assert_eq!(g.visitor_team, "New Orleans Pelicans");
    assert_eq!(g.visitor_pts, Some(122));
    assert_eq!(g.home_team, "Toronto Raptors");
    assert_eq!(g.home_pts, Some(130));
    assert_eq!(g.overtime, "OT");
    assert_eq!(g.attendance, "20,787");
    assert_eq!(g.game_duration, "2:44");
    assert_eq!(g.arena, "Scotiabank Arena");
}

#[test]
fn skips_repeated_header_rows() {
    let html = include_str!("fixtures/month_november.html");
    let games = extract_games(html).expect("games");
    assert_eq!(games.len(), 1, "games were: {:?}", games);
    assert_eq!(games[0].home_team, "New York Knicks");
    assert_eq!(games[0].overtime, "");
}

#[test]
fn unplayed_games_have_absent_points() {
    let html = include_str!("fixtures/month_unplayed.html");
    let games = extract_games(html).expect("games");
    // the thead row and the row without cells contribute nothing
    assert_eq!(games.len(), 2, "games were: {:?}", games);

    assert_eq!(games[0].visitor_team, "Miami Heat");
    assert_eq!(games[0].visitor_pts, None);
    assert_eq!(games[0].home_pts, None);
    assert_eq!(games[0].arena, "Scotiabank Arena");

    assert_eq!(games[1].visitor_pts, None);
    assert_eq!(games[1].home_team, "Milwaukee Bucks");
    assert_eq!(games[1].arena, "");
}

#[test]
fn missing_schedule_table_is_a_parse_error() {
    let html = include_str!("fixtures/season_2020.html");
    let err = extract_games(html).unwrap_err();
    assert!(matches!(err, ScrapeError::Parse(_)), "error was: {:?}", err);
}
