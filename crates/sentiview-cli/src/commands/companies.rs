use serde::Serialize;

use sentiview_core::{resolve_logo_path, ComparisonRow, EnvelopeError};

use crate::cli::{AliasArgs, CompanyArgs, SearchArgs};
use crate::error::CliError;

use super::{CommandResult, Context};

#[derive(Debug, Serialize)]
struct CompanyView<'a> {
    id: &'a str,
    name: &'a str,
    logo: String,
}

impl<'a> CompanyView<'a> {
    fn new(id: &'a str, name: &'a str) -> Self {
        Self {
            id,
            name,
            logo: resolve_logo_path(id),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompanyDetail<'a> {
    #[serde(flatten)]
    company: CompanyView<'a>,
    registered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    comparison: Option<&'a ComparisonRow>,
}

#[derive(Debug, Serialize)]
struct SearchResponseData<'a> {
    query: &'a str,
    results: Vec<CompanyView<'a>>,
}

#[derive(Debug, Serialize)]
struct AliasResponseData<'a> {
    name: &'a str,
    ticker: Option<String>,
    company: Option<String>,
}

pub fn list(context: &Context) -> Result<CommandResult, CliError> {
    let companies: Vec<CompanyView<'_>> = context
        .store
        .companies()
        .iter()
        .map(|company| CompanyView::new(company.id.as_str(), &company.name))
        .collect();

    Ok(CommandResult::ok(serde_json::to_value(companies)?))
}

pub fn show(args: &CompanyArgs, context: &Context) -> Result<CommandResult, CliError> {
    let id = args.id.as_str();
    let registered = context.store.company(id).is_some();
    let detail = CompanyDetail {
        company: CompanyView::new(id, context.store.company_name(id)),
        registered,
        comparison: context.store.comparison_for(id),
    };

    let result = CommandResult::ok(serde_json::to_value(detail)?);
    if registered {
        Ok(result)
    } else {
        Ok(result.with_warning(format!(
            "company '{id}' is not registered; its id is shown as the name"
        )))
    }
}

pub fn search(args: &SearchArgs, context: &Context) -> Result<CommandResult, CliError> {
    if args.limit == 0 {
        return Err(CliError::Command(String::from(
            "--limit must be greater than zero",
        )));
    }

    let query = args.query.trim();
    if query.is_empty() {
        return Err(CliError::Command(String::from("query must not be empty")));
    }

    let results = context
        .store
        .search(query, args.limit)
        .into_iter()
        .map(|company| CompanyView::new(company.id.as_str(), &company.name))
        .collect();

    let data = serde_json::to_value(SearchResponseData { query, results })?;
    Ok(CommandResult::ok(data))
}

pub fn alias(args: &AliasArgs, context: &Context) -> Result<CommandResult, CliError> {
    let Some(ticker) = context.store.resolve_alias(&args.name) else {
        let data = serde_json::to_value(AliasResponseData {
            name: args.name.as_str(),
            ticker: None,
            company: None,
        })?;
        let error = EnvelopeError::new(
            "alias_not_found",
            format!("no ticker is known for '{}'", args.name.trim()),
        )?;
        return Ok(CommandResult::ok(data).with_error(error));
    };

    let company = context.store.company_name(ticker.as_str()).to_owned();
    let data = serde_json::to_value(AliasResponseData {
        name: args.name.as_str(),
        ticker: Some(ticker.into()),
        company: Some(company),
    })?;
    Ok(CommandResult::ok(data))
}
