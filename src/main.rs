use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use route_limit::config::Config;
use route_limit::core::error::{LimitResult, ToPublicError};
use route_limit::limit::{LimitStore, StaticAppLimits, StaticPresets, StaticRouteConfig};
use route_limit::utils::logging;

#[derive(Parser)]
#[clap(version = "0.1.0", author = "Route Limit Contributors")]
struct Cli {
    #[clap(short, long, default_value = "config.toml")]
    config: String,

    /// 路由配置 JSON 文件（顶层为节点数组）
    #[clap(short, long)]
    routes: PathBuf,

    /// 页面预设 JSON 文件（nodePath -> preset）
    #[clap(short, long)]
    presets: Option<PathBuf>,

    /// 已获得的权限，逗号分隔
    #[clap(short, long, default_value = "")]
    limits: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the limit menu tree
    Menus,
    /// Print routes the caller is authorized for
    Routes,
    /// Print sidebar menus
    Aside,
    /// Print the action address map
    Actions,
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Failed to load config from '{}': {}, using default config",
                cli.config, e
            );
            Config::default()
        }
    };
    if let Err(e) = logging::init(&config) {
        eprintln!("{}", e.to_public_error());
    }

    let result = run(&cli, config);
    if let Err(e) = &result {
        log::error!("执行失败: {}", e);
    }
    logging::shutdown();

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            let public = e.to_public_error();
            eprintln!("{}", public);
            process::exit(public.exit_code());
        }
    }
}

fn run(cli: &Cli, config: Config) -> LimitResult<String> {
    let route_config = StaticRouteConfig::from_file(&cli.routes)?;
    let presets = match &cli.presets {
        Some(path) => StaticPresets::from_file(path)?,
        None => StaticPresets::new(),
    };

    let store = LimitStore::builder(Arc::new(route_config))
        .presets(Arc::new(presets))
        .app_limits(Arc::new(StaticAppLimits::from_str_list(&cli.limits)))
        .config(config.limit)
        .build()?;

    let output = match cli.command {
        Command::Menus => serde_json::to_string_pretty(store.get_limit_menus(false).as_ref())?,
        Command::Routes => serde_json::to_string_pretty(store.get_auth_routes().as_ref())?,
        Command::Aside => serde_json::to_string_pretty(store.get_aside_menus().as_ref())?,
        Command::Actions => {
            store.get_limit_menus(false);
            serde_json::to_string_pretty(store.get_action_addr_map().as_ref())?
        }
    };
    Ok(output)
}
