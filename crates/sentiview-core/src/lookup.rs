//! Company lookups: display names, logo paths, brand aliases and search.

use tracing::trace;

use crate::{Company, Ticker};

/// Directory the dashboard serves company logos from.
pub const LOGO_DIR: &str = "/logos";

/// Brand and product names people use in posts, mapped to the listed ticker.
pub const TICKER_ALIASES: [(&str, &str); 10] = [
    ("AMD", "AMD"),
    ("Google", "GOOGL"),
    ("Apple", "AAPL"),
    ("Tesla", "TSLA"),
    ("Netflix", "NFLX"),
    ("Nvidia", "NVDA"),
    ("Microsoft", "MSFT"),
    ("Youtube", "GOOGL"),
    ("Amazon", "AMZN"),
    ("Twitch", "AMZN"),
];

/// Returns the registered name for `id`, or `id` itself when it is not listed.
///
/// Matching is case-sensitive: `aapl` is not `AAPL`.
pub fn resolve_company_name<'a>(companies: &'a [Company], id: &'a str) -> &'a str {
    match find_company(companies, id) {
        Some(company) => company.name.as_str(),
        None => {
            trace!(id, "company id not registered, echoing id");
            id
        }
    }
}

/// Case-sensitive exact match on the company id.
pub fn find_company<'a>(companies: &'a [Company], id: &str) -> Option<&'a Company> {
    companies.iter().find(|company| company.id == *id)
}

/// `/logos/<lowercased id>.png`. The file is not checked for existence.
pub fn resolve_logo_path(id: &str) -> String {
    format!("{LOGO_DIR}/{}.png", id.to_lowercase())
}

/// Maps a brand name (`Youtube`) or a listed ticker (`nvda`) to its ticker.
pub fn resolve_ticker_alias(companies: &[Company], name: &str) -> Option<Ticker> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    if let Some((_, ticker)) = TICKER_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
    {
        return Some(Ticker::from_static(*ticker));
    }

    companies
        .iter()
        .find(|company| company.id.as_str().eq_ignore_ascii_case(name))
        .map(|company| company.id.clone())
}

/// Case-insensitive search on id prefix or name substring, in list order.
pub fn search_companies<'a>(
    companies: &'a [Company],
    query: &str,
    limit: usize,
) -> Vec<&'a Company> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    companies
        .iter()
        .filter(|company| {
            company.id.as_str().to_lowercase().starts_with(&needle)
                || company.name.to_lowercase().contains(&needle)
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn companies() -> Vec<Company> {
        vec![
            Company::new(Ticker::parse("AAPL").expect("valid"), "Apple Inc.").expect("valid"),
            Company::new(Ticker::parse("AMZN").expect("valid"), "Amazon.com Inc.").expect("valid"),
            Company::new(Ticker::parse("NVDA").expect("valid"), "Nvidia.").expect("valid"),
        ]
    }

    #[test]
    fn resolves_registered_name() {
        let companies = companies();
        assert_eq!(resolve_company_name(&companies, "AMZN"), "Amazon.com Inc.");
    }

    #[test]
    fn echoes_unknown_and_differently_cased_ids() {
        let companies = companies();
        assert_eq!(resolve_company_name(&companies, "META"), "META");
        assert_eq!(resolve_company_name(&companies, "aapl"), "aapl");
        assert_eq!(resolve_company_name(&companies, ""), "");
    }

    #[test]
    fn builds_logo_path() {
        assert_eq!(resolve_logo_path("AAPL"), "/logos/aapl.png");
        assert_eq!(resolve_logo_path("BRK.B"), "/logos/brk.b.png");
        assert_eq!(resolve_logo_path(""), "/logos/.png");
    }

    #[test]
    fn resolves_aliases_and_listed_tickers() {
        let companies = companies();
        let youtube = resolve_ticker_alias(&companies, "youtube").expect("alias");
        assert_eq!(youtube.as_str(), "GOOGL");
        let twitch = resolve_ticker_alias(&companies, " Twitch ").expect("alias");
        assert_eq!(twitch.as_str(), "AMZN");
        let nvda = resolve_ticker_alias(&companies, "nvda").expect("listed ticker");
        assert_eq!(nvda.as_str(), "NVDA");
        assert!(resolve_ticker_alias(&companies, "Myspace").is_none());
        assert!(resolve_ticker_alias(&companies, "  ").is_none());
    }

    #[test]
    fn searches_by_prefix_and_name() {
        let companies = companies();
        let hits = search_companies(&companies, "a", 10);
        let ids: Vec<&str> = hits.iter().map(|company| company.id.as_str()).collect();
        assert_eq!(ids, ["AAPL", "AMZN", "NVDA"]);

        let hits = search_companies(&companies, "amazon", 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "AMZN");

        assert_eq!(search_companies(&companies, "a", 1).len(), 1);
        assert!(search_companies(&companies, "", 10).is_empty());
    }
}
