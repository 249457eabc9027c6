//! Behaviour tests for the way a rendering layer walks the dashboard.
//!
//! These describe WHAT a view can show using the core, not how the core
//! stores it.

use sentiview_core::{
    correlation_class, sentiment_color, CorrelationStrength, DashboardConfig, FixtureStore,
    Locale, NumberFormatter, RouteTable, SentimentTier, ValidationError,
};

// =============================================================================
// Journey: Opening the dashboard
// =============================================================================

#[test]
fn app_start_resolves_root_to_the_dashboard_view() {
    // Given: the router is built from the shipped table
    let table = RouteTable::default();

    // When: the browser asks for the root path
    let route = table.resolve("/").expect("root path must be routable");

    // Then: the dashboard view is rendered under the `home` name
    assert_eq!(route.view.as_str(), "SentimentDashboard");
    assert_eq!(route.name, "home");

    // And: nothing else is routable
    assert!(table.resolve("/settings").is_none());
}

// =============================================================================
// Journey: Rendering the sentiment panel
// =============================================================================

#[test]
fn sentiment_panel_shows_colored_score_and_grouped_volume() {
    // Given: the shipped fixtures and default configuration
    let store = FixtureStore::builtin();
    let config = DashboardConfig::default();
    let formatter = config.number_formatter();

    // When: the panel renders the headline score and tweet volume
    let overall = &store.sentiment().overall;
    let color = sentiment_color(overall.score);
    let volume = formatter.format_count(store.sentiment().tweet_volume);

    // Then: a 7.2 score is painted positive and the volume is grouped
    assert_eq!(color, SentimentTier::Positive.color());
    assert_eq!(volume, "24,863");
}

#[test]
fn tweets_are_tagged_with_their_sentiment_class() {
    // Given: the top tweets
    let store = FixtureStore::builtin();

    // When: each tweet is classified for its badge
    let tiers: Vec<SentimentTier> = store
        .top_tweets()
        .iter()
        .map(|tweet| SentimentTier::classify(tweet.sentiment))
        .collect();

    // Then: 9.2 and 7.8 are positive, 4.2 negative, 5.5 neutral
    assert_eq!(
        tiers,
        [
            SentimentTier::Positive,
            SentimentTier::Positive,
            SentimentTier::Negative,
            SentimentTier::Neutral,
        ]
    );
}

// =============================================================================
// Journey: Reading the correlation table
// =============================================================================

#[test]
fn correlation_rows_split_into_strong_and_moderate() {
    // Given: the four correlation periods
    let store = FixtureStore::builtin();

    // When: each row is styled by correlation strength
    let classes: Vec<&str> = store
        .correlation()
        .iter()
        .map(|row| correlation_class(row.correlation))
        .collect();

    // Then: week and month are strong, quarter and YTD moderate
    assert_eq!(classes, ["strong", "strong", "moderate", "moderate"]);
    assert!(store
        .correlation()
        .iter()
        .all(|row| CorrelationStrength::classify(row.correlation) != CorrelationStrength::Weak));
}

// =============================================================================
// Journey: Comparing peers
// =============================================================================

#[test]
fn comparison_rows_link_back_to_company_names_where_registered() {
    // Given: the comparison table
    let store = FixtureStore::builtin();

    // When: the table shows the full company name for each row
    let names: Vec<&str> = store
        .comparison()
        .iter()
        .map(|row| store.company_name(row.id.as_str()))
        .collect();

    // Then: registered ids show their name and META falls back to its id
    assert_eq!(names[0], "Apple Inc.");
    assert_eq!(names[4], "META");
}

#[test]
fn user_can_find_company_by_brand_alias() {
    // Given: a post mentions "Youtube"
    let store = FixtureStore::builtin();

    // When: the alias is resolved
    let ticker = store.resolve_alias("Youtube").expect("Youtube is a known alias");

    // Then: it maps to Alphabet
    assert_eq!(ticker.as_str(), "GOOGL");
    assert_eq!(store.company_name(ticker.as_str()), "Alphabet Inc.");
}

#[test]
fn user_can_search_companies_by_partial_name() {
    // Given: a user types "micro"
    let store = FixtureStore::builtin();

    // When: they search
    let hits = store.search("micro", 5);

    // Then: Microsoft is the single hit
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id.as_str(), "MSFT");
}

// =============================================================================
// Journey: Switching locale
// =============================================================================

#[test]
fn german_users_see_dot_grouping() {
    // Given: a German locale
    let config = DashboardConfig::default().with_locale(Locale::DeDe);

    // When: prices are formatted
    let formatted = config.number_formatter().format(1234.56);

    // Then: dots group and commas separate decimals
    assert_eq!(formatted, "1.234,56");
}

#[test]
fn unknown_locale_is_a_validation_error() {
    let err = "klingon".parse::<Locale>().expect_err("must fail");
    assert!(matches!(err, ValidationError::UnsupportedLocale { .. }));

    // And: the default formatter is unaffected
    assert_eq!(NumberFormatter::default().format(1000.0), "1,000");
}
