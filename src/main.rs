use anyhow::Result;
use clap::Parser;

use branch_version::analyzer::FeatureVersionCalculator;
use branch_version::git::{Git2Repository, Repository};
use branch_version::package::PackageInfo;
use branch_version::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "branch-version",
    about = "Compute a feature branch version from its divergence from develop"
)]
struct Args {
    #[arg(short, long, default_value = ".", help = "Project work directory")]
    path: String,

    #[arg(short, long, help = "Feature branch to version (defaults to HEAD)")]
    branch: Option<String>,

    #[arg(short, long, help = "Develop branch to compare against")]
    develop: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Preview the computed version without writing it")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("branch-version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    // Open the repository and the project metadata
    let repo = match Git2Repository::open(&args.path) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let mut package = match PackageInfo::open(&args.path) {
        Ok(pkg) => pkg,
        Err(e) => {
            ui::display_error(&format!("Package metadata error: {}", e));
            std::process::exit(1);
        }
    };

    // The feature branch is the checked-out branch unless given explicitly
    let feature_branch = match args.branch {
        Some(branch) => branch,
        None => match repo.current_branch() {
            Ok(branch) => branch,
            Err(e) => {
                ui::display_error(&format!("Cannot determine current branch: {}", e));
                std::process::exit(1);
            }
        },
    };

    let develop_branch = args
        .develop
        .unwrap_or_else(|| config.branches.develop.clone());

    let current_version = match package.version() {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&format!("Cannot read current version: {}", e));
            std::process::exit(1);
        }
    };

    ui::display_status(&format!(
        "Comparing '{}' against '{}'",
        feature_branch, develop_branch
    ));

    let calculator = FeatureVersionCalculator::new(
        feature_branch,
        develop_branch,
        config.prerelease.feature.clone(),
    );

    let next_version = match calculator.calculate(&repo, &current_version) {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&format!("Version calculation failed: {}", e));
            std::process::exit(1);
        }
    };

    let package_name = package.name().unwrap_or("package").to_string();
    ui::display_version_change(&package_name, &current_version, &next_version);

    if args.dry_run {
        ui::display_status("Dry run: package.json left untouched");
        return Ok(());
    }

    if let Err(e) = package.fix_version(&next_version) {
        ui::display_error(&format!("Failed to write version: {}", e));
        std::process::exit(1);
    }

    ui::display_success(&format!("Updated package.json to {}", next_version));

    Ok(())
}
