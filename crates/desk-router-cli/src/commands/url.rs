use anyhow::{bail, Result};
use colored::Colorize;
use desk_router::{Matcher, Params, RouteTree, RoutingConfig};

/// Parses `key=value` arguments into route params
pub fn parse_params(args: &[String]) -> Result<Params> {
    args.iter()
        .map(|arg| match arg.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => bail!("Invalid parameter '{}', expected key=value", arg),
        })
        .collect()
}

pub fn execute(
    tree: &RouteTree,
    config: &RoutingConfig,
    name: &str,
    args: &[String],
    json: bool,
) -> Result<()> {
    let params = parse_params(args)?;
    let path = tree.url_for(name, &params)?;
    let href = Matcher::with_config(tree, config).href(&path);

    if json {
        println!("{}", serde_json::json!({ "name": name, "path": href }));
    } else {
        println!("{} {}", name.yellow(), href.green());
    }

    Ok(())
}
