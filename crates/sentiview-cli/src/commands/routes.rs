use serde::Serialize;

use sentiview_core::{EnvelopeError, Route};

use crate::cli::RoutesArgs;
use crate::error::CliError;

use super::{CommandResult, Context};

#[derive(Debug, Serialize)]
struct RouteResolution<'a> {
    path: &'a str,
    route: Option<&'a Route>,
}

pub fn run(args: &RoutesArgs, context: &Context) -> Result<CommandResult, CliError> {
    let Some(path) = args.resolve.as_deref() else {
        return Ok(CommandResult::ok(serde_json::to_value(&context.routes)?));
    };

    let route = context.routes.resolve(path);
    let data = serde_json::to_value(RouteResolution { path, route })?;
    if route.is_some() {
        return Ok(CommandResult::ok(data));
    }

    let error = EnvelopeError::new("route_not_found", format!("no route matches '{path}'"))?;
    Ok(CommandResult::ok(data).with_error(error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_the_route_table() {
        let result = run(&RoutesArgs { resolve: None }, &Context::default()).expect("routes");
        assert_eq!(result.data[0]["path"], "/");
        assert_eq!(result.data[0]["name"], "home");
        assert_eq!(result.data[0]["view"], "SentimentDashboard");
    }

    #[test]
    fn resolves_root_path() {
        let args = RoutesArgs {
            resolve: Some(String::from("/")),
        };
        let result = run(&args, &Context::default()).expect("routes");
        assert_eq!(result.data["route"]["name"], "home");
        assert!(result.errors.is_empty());
    }

    #[test]
    fn unknown_path_reports_error() {
        let args = RoutesArgs {
            resolve: Some(String::from("/settings")),
        };
        let result = run(&args, &Context::default()).expect("routes");
        assert!(result.data["route"].is_null());
        assert_eq!(result.errors[0].code, "route_not_found");
    }
}
