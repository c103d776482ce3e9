//! Waypoint CLI
//!
//! Loads a router from a JSON route table and replays navigation commands
//! against it, printing the current route after each one.
//!
//! ```text
//! waypoint <router.json> [push <loc> | replace <loc> | resolve <loc> | go <n> | back | forward]...
//! ```
//!
//! A `<loc>` is either a path (`/users/root?tab=1#top`) or a named target
//! (`name:user:username=root,tab=1`).

use anyhow::{anyhow, bail, Context, Result};
use waypoint_core::{Location, Navigation, Route, Router, RouterConfig, StringDict};

enum Command {
    Navigate(Navigation),
    Resolve(Location),
}

fn main() -> Result<()> {
    waypoint_core::init_logging();

    let mut args = std::env::args().skip(1);
    let config_path = args
        .next()
        .ok_or_else(|| anyhow!("usage: waypoint <router.json> [command]..."))?;

    let config = RouterConfig::load(&config_path)
        .with_context(|| format!("Failed to load router config from {config_path}"))?;
    let commands = parse_commands(args.collect())?;

    let mut router = Router::from_config(&config);
    router.watch(|to, from| {
        tracing::info!(
            from = from.map(Route::full_path).unwrap_or("-"),
            to = %to.full_path(),
            "Route changed"
        );
    });

    for command in commands {
        match command {
            Command::Navigate(navigation) => {
                router.navigate(navigation);
                print_current(&router)?;
            }
            Command::Resolve(location) => {
                let resolved = router.resolve(&location, false);
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            }
        }
    }

    Ok(())
}

fn print_current(router: &Router) -> Result<()> {
    match router.current_route() {
        Some(route) => println!("{}", serde_json::to_string_pretty(route)?),
        None => println!("null"),
    }
    Ok(())
}

fn parse_commands(args: Vec<String>) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let command = match arg.as_str() {
            "push" => Command::Navigate(Navigation::Push(parse_location(args.next(), &arg)?)),
            "replace" => {
                Command::Navigate(Navigation::Replace(parse_location(args.next(), &arg)?))
            }
            "resolve" => Command::Resolve(parse_location(args.next(), &arg)?),
            "go" => {
                let delta = args.next().ok_or_else(|| anyhow!("go needs a delta"))?;
                Command::Navigate(Navigation::Go(
                    delta
                        .parse()
                        .with_context(|| format!("Invalid history delta: {delta}"))?,
                ))
            }
            "back" => Command::Navigate(Navigation::Go(-1)),
            "forward" => Command::Navigate(Navigation::Go(1)),
            other => bail!("Unknown command: {other}"),
        };
        commands.push(command);
    }

    Ok(commands)
}

fn parse_location(arg: Option<String>, command: &str) -> Result<Location> {
    let raw = arg.ok_or_else(|| anyhow!("{command} needs a location"))?;

    let Some(named) = raw.strip_prefix("name:") else {
        return Ok(Location::from_path(raw));
    };

    let (name, params) = named.split_once(':').unwrap_or((named, ""));
    if name.is_empty() {
        bail!("Named location is missing a route name: {raw}");
    }

    let params: StringDict = params
        .split(',')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .collect();

    Ok(Location::from_name(name).with_params(params))
}
