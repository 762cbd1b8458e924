//! `lab-pages` command line

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use lab_content::image::ImageCatalog;
use lab_content::slug::slugify;
use lab_pages::prelude::*;
use lab_pages::{logging, DetailPage};
use lab_render::Mutation;
use serde_json::json;
use std::path::{Path, PathBuf};

fn cli() -> Command {
    let detail_args = |cmd: Command| {
        cmd.arg(
            Arg::new("url")
                .long("url")
                .conflicts_with("id")
                .help("Page address carrying the id query parameter"),
        )
        .arg(
            Arg::new("id")
                .long("id")
                .help("Record id or title slug"),
        )
    };

    Command::new("lab-pages")
        .version(lab_pages::VERSION)
        .about("Render the lab site's content pages from their JSON documents")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML site configuration"),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .global(true)
                .default_value(".")
                .value_parser(value_parser!(PathBuf))
                .help("Site root holding data/ and js/"),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .global(true)
                .help("Fetch documents from a deployed site instead of --root"),
        )
        .arg(
            Arg::new("json-logs")
                .long("json-logs")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity"),
        )
        .subcommand(Command::new("research").about("Render the research listing"))
        .subcommand(Command::new("news").about("Render the news listing"))
        .subcommand(Command::new("people").about("Render the people page"))
        .subcommand(detail_args(
            Command::new("project").about("Render a research project detail page"),
        ))
        .subcommand(detail_args(
            Command::new("article").about("Render a news article detail page"),
        ))
        .subcommand(
            Command::new("slug")
                .about("Print the slug of a title")
                .arg(Arg::new("text").required(true)),
        )
        .subcommand(
            Command::new("image")
                .about("Print the responsive image data for a path")
                .arg(Arg::new("path").required(true))
                .arg(
                    Arg::new("people")
                        .long("people")
                        .action(ArgAction::SetTrue)
                        .help("Use the people photo catalogue"),
                ),
        )
}

fn load_config(matches: &ArgMatches) -> Result<SiteConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => SiteConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(SiteConfig::default()),
    }
}

fn document_source(matches: &ArgMatches, root: &Path) -> Result<Box<dyn DocumentSource>> {
    match matches.get_one::<String>("base-url") {
        Some(base) => Ok(Box::new(
            HttpSource::new(base).with_context(|| format!("invalid base URL {base}"))?,
        )),
        None => Ok(Box::new(FsSource::new(root))),
    }
}

fn detail_address(args: &ArgMatches, page: &str) -> Result<PageAddress> {
    let address = match (args.get_one::<String>("url"), args.get_one::<String>("id")) {
        (Some(url), _) => PageAddress::parse(url)?,
        (None, Some(id)) => PageAddress::for_record(page, id)?,
        (None, None) => PageAddress::parse(page)?,
    };
    Ok(address)
}

async fn run_detail<P: DetailPage>(
    source: Box<dyn DocumentSource>,
    page: P,
    config: &SiteConfig,
    address: &PageAddress,
) -> Result<i32> {
    let controller = DetailController::new(source, page, config.render_options())
        .with_asset_prefix(config.detail_asset_prefix.clone());
    let outcome = controller.run(address).await?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(match outcome.state {
        PageState::Error(_) => 1,
        _ => 0,
    })
}

fn print_listing(report: &impl serde::Serialize, mutations: &[Mutation]) -> Result<()> {
    let out = json!({ "report": report, "mutations": mutations });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

async fn run(matches: ArgMatches) -> Result<i32> {
    let config = load_config(&matches)?;
    let root = matches
        .get_one::<PathBuf>("root")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));

    match matches.subcommand() {
        Some(("research", _)) => {
            let controller = ListingController::new(
                document_source(&matches, &root)?,
                config.data.clone(),
                config.render_options(),
            );
            let pipeline = ScriptPipeline::new(config.research_scripts.clone());
            let mut log: Vec<Mutation> = Vec::new();
            let report = controller
                .research(&pipeline, &AssetScriptLoader::new(root), &mut log)
                .await
                .context("rendering research page")?;
            print_listing(&report, &log)?;
        }
        Some(("news", _)) => {
            let controller = ListingController::new(
                document_source(&matches, &root)?,
                config.data.clone(),
                config.render_options(),
            );
            let mut log: Vec<Mutation> = Vec::new();
            let report = controller
                .news(&mut log)
                .await
                .context("rendering news page")?;
            print_listing(&report, &log)?;
        }
        Some(("people", _)) => {
            let controller = ListingController::new(
                document_source(&matches, &root)?,
                config.data.clone(),
                config.render_options(),
            );
            let mut log: Vec<Mutation> = Vec::new();
            let report = controller
                .people(&mut log)
                .await
                .context("rendering people page")?;
            print_listing(&report, &log)?;
        }
        Some(("project", args)) => {
            let address = detail_address(args, "projects/project.html")?;
            let page = ProjectPage::new(config.data.research.clone());
            return run_detail(document_source(&matches, &root)?, page, &config, &address).await;
        }
        Some(("article", args)) => {
            let address = detail_address(args, "news/news.html")?;
            let page = NewsPage::new(config.data.news.clone());
            return run_detail(document_source(&matches, &root)?, page, &config, &address).await;
        }
        Some(("slug", args)) => {
            let text = args
                .get_one::<String>("text")
                .context("missing text argument")?;
            println!("{}", slugify(text));
        }
        Some(("image", args)) => {
            let path = args
                .get_one::<String>("path")
                .context("missing path argument")?;
            let catalog = if args.get_flag("people") {
                ImageCatalog::people()
            } else {
                ImageCatalog::research()
            };
            let info = catalog.resolve(path);
            let out = json!({
                "info": info,
                "catalogued": info.is_catalogued(),
                "srcset": info.srcset(),
                "sizes": info.sizes(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        _ => {}
    }
    Ok(0)
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();
    let verbosity = matches.get_count("verbose");
    logging::init(verbosity, matches.get_flag("json-logs"))
        .context("installing log subscriber")?;

    let code = run(matches).await?;
    std::process::exit(code);
}
