use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use appdeck_core::app::LauncherBuilder;
use appdeck_core::bridge::{AppLauncherModule, BridgeResponse, ModuleError, ModuleRegistry};
use appdeck_core::catalog::{Catalog, LaunchNotice};
use appdeck_core::config::AppDeckConfig;
use appdeck_core::domain::Platform;
use appdeck_core::impls::{InMemoryPackageRegistry, RecordingActivityStarter};

/// コマンドライン引数
#[derive(Debug, Parser)]
#[command(name = "appdeck", about = "Launch installed apps against a simulated device registry")]
struct CliArgs {
    /// 端末のパッケージ一覧 (JSON)
    registry: PathBuf,
    /// 起動するパッケージ名
    packages: Vec<String>,
    #[arg(long)]
    config: Option<PathBuf>,
    /// android, ios, desktop
    #[arg(long)]
    platform: Option<Platform>,
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// カタログの id（複数指定可）
    #[arg(long = "id")]
    ids: Vec<String>,
}

/// 1 回の launchApp の結果（stdout に JSON で出す）
#[derive(Debug, Serialize)]
struct LaunchReport {
    package: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<BridgeResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<LaunchNotice>,
}

async fn launch_report(
    modules: &ModuleRegistry,
    catalog: &Catalog,
    package: String,
) -> Result<LaunchReport, ModuleError> {
    let result = modules
        .call(
            AppLauncherModule::NAME,
            AppLauncherModule::LAUNCH_APP,
            json!({ "packageName": package }),
        )
        .await;

    let response = match result {
        Ok(response) => response,
        Err(ModuleError::Unavailable(module)) => {
            warn!(module = %module, package = %package, "native module missing");
            let notice = LaunchNotice::module_unavailable(&module, &package);
            return Ok(LaunchReport {
                package,
                response: None,
                notice: Some(notice),
            });
        }
        Err(other) => return Err(other),
    };

    let notice = match (response.error(), catalog.find_by_package(&package.as_str().into())) {
        (Some(error), Some(app)) => Some(LaunchNotice::for_rejection(app, error)),
        _ => None,
    };

    Ok(LaunchReport {
        package,
        response: Some(response),
        notice,
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => AppDeckConfig::load_from_path(path)?,
        None => AppDeckConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // このツールは端末を模擬するので、指定がなければ Android として動かす
    let platform = args
        .platform
        .or(config.launcher.platform)
        .unwrap_or(Platform::Android);

    let registry = Arc::new(InMemoryPackageRegistry::from_json_str(
        &std::fs::read_to_string(&args.registry)?,
    )?);
    let starter = Arc::new(RecordingActivityStarter::new());

    let launcher = LauncherBuilder::from_config(&config)
        .platform(platform)
        .registry(registry)
        .starter(starter.clone())
        .build()?;
    info!(platform = %launcher.platform(), "launcher built");

    let mut modules = ModuleRegistry::new();
    modules.register(Arc::new(AppLauncherModule::new(launcher)))?;

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_json_str(&std::fs::read_to_string(path)?)?,
        None => Catalog::default(),
    };

    let mut targets: Vec<String> = Vec::new();
    for id in &args.ids {
        match catalog.identifier_of(id) {
            Some(identifier) => targets.push(identifier.as_str().to_string()),
            None => warn!(id = %id, "no catalog entry with this id"),
        }
    }
    targets.extend(args.packages.iter().cloned());

    for package in targets {
        let report = launch_report(&modules, &catalog, package).await?;
        println!("{}", serde_json::to_string(&report)?);
    }

    info!(dispatched = starter.started_count(), "done");
    Ok(())
}
