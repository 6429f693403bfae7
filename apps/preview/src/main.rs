use std::{path::PathBuf, sync::Arc};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use shared::{catalog, domain::Category, gallery};
use tracing::info;
use widget_core::{
    ColorPicker, GalleryWidget, ImageSwapSequencer, ModalOutcome, SelectionOutcome, SwapOutcome,
    ToastBoard,
};

mod config;
mod console;

use config::load_settings;
use console::{ConsoleSurface, FsAssetProbe};

#[derive(Parser, Debug)]
#[command(about = "Drive the site's picker and gallery widgets against a local site root")]
struct Cli {
    #[arg(long, default_value = "preview.toml")]
    config: PathBuf,
    #[arg(long)]
    site_root: Option<PathBuf>,
    #[arg(long)]
    probe_timeout_ms: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Select a style and/or color in the preview picker.
    Pick {
        #[arg(long)]
        style: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Replay key presses (ArrowLeft, ArrowRight, ...) against the picker.
    Keys { keys: Vec<String> },
    /// Filter or shuffle the gallery, optionally opening one item.
    Gallery {
        #[arg(long, default_value = "all")]
        filter: String,
        #[arg(long)]
        shuffle: bool,
        #[arg(long)]
        open: Option<u32>,
    },
    /// Catalog and gallery statistics.
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Suggest a random color.
    Suggest,
}

#[derive(Debug, Serialize)]
struct CategoryStats {
    key: &'static str,
    name: &'static str,
    count: usize,
}

#[derive(Debug, Serialize)]
struct CatalogStats {
    total_styles: usize,
    total_colors: usize,
    total_images: usize,
    categories: Vec<CategoryStats>,
    tags: Vec<&'static str>,
    protective_styles: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings(&cli.config)?;
    if let Some(site_root) = cli.site_root {
        settings.site_root = site_root;
    }
    if let Some(timeout_ms) = cli.probe_timeout_ms {
        settings.probe_timeout_ms = Some(timeout_ms);
    }
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();
    info!(site_root = %settings.site_root.display(), "preview starting");

    let surface = Arc::new(ConsoleSurface::default());
    let probe = Arc::new(FsAssetProbe::new(settings.site_root.clone()));

    match cli.command {
        Command::Pick { style, color } => {
            let (picker, toasts) = build_picker(&settings, probe, surface.clone()).await?;
            if let Some(style) = style {
                let outcome = picker.select_style(&style).await;
                println!("style {style}: {}", describe_selection(&outcome));
            }
            if let Some(color) = color {
                let outcome = picker.select_color(&color).await;
                println!("color {color}: {}", describe_selection(&outcome));
            }
            print_toasts(&toasts);
            println!(
                "{}",
                serde_json::to_string_pretty(&picker.current_selection().await)?
            );
        }
        Command::Keys { keys } => {
            let (picker, toasts) = build_picker(&settings, probe, surface.clone()).await?;
            for key in keys {
                let outcome = picker.handle_key(&key).await;
                println!("{key}: {}", describe_selection(&outcome));
            }
            print_toasts(&toasts);
            println!(
                "{}",
                serde_json::to_string_pretty(&picker.current_selection().await)?
            );
        }
        Command::Gallery {
            filter,
            shuffle,
            open,
        } => {
            let widget = GalleryWidget::new(surface.clone(), probe);
            widget.initialize().await;
            if shuffle {
                widget.shuffle(&mut rand::rng()).await;
            } else {
                widget.filter_by_key(&filter).await?;
            }

            println!(
                "{} ({} items)",
                gallery::category_display_name(widget.active_filter().await.key()),
                widget.visible_items().await.len()
            );
            for item in widget.visible_items().await {
                println!("  #{:<2} {} [{}]", item.id, item.title, item.tags.join(", "));
            }

            if let Some(id) = open {
                let item = gallery::item_by_id(id)
                    .ok_or_else(|| anyhow!("no gallery item with id {id}"))?;
                let outcome = widget.open_item(item).await;
                println!("open #{id}: {}", describe_modal(&outcome));
                println!(
                    "{}",
                    serde_json::to_string_pretty(&widget.modal_state().await)?
                );
            }
        }
        Command::Stats { json } => {
            let stats = collect_stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!(
                    "styles: {}  colors: {}  images: {}  protective: {}",
                    stats.total_styles,
                    stats.total_colors,
                    stats.total_images,
                    stats.protective_styles
                );
                for category in &stats.categories {
                    println!("  {:<18} {}", category.name, category.count);
                }
                println!("tags: {}", stats.tags.join(", "));
            }
        }
        Command::Suggest => {
            let suggestion = catalog::random_color_suggestion(&mut rand::rng());
            println!(
                "{} ({}): {}",
                suggestion.display_name, suggestion.color, suggestion.description
            );
        }
    }

    println!("{}", serde_json::to_string_pretty(&surface.snapshot())?);
    Ok(())
}

async fn build_picker(
    settings: &config::Settings,
    probe: Arc<FsAssetProbe>,
    surface: Arc<ConsoleSurface>,
) -> Result<(ColorPicker, Arc<ToastBoard>)> {
    let initial = catalog::swap_request(catalog::DEFAULT_STYLE, catalog::DEFAULT_COLOR)
        .context("default selection missing from catalog")?;
    let toasts = Arc::new(ToastBoard::new());
    let sequencer = Arc::new(ImageSwapSequencer::new(
        initial,
        probe,
        surface.clone(),
        settings.sequencer_config(),
    ));
    sequencer.initialize().await;
    Ok((ColorPicker::new(sequencer, surface, toasts.clone()), toasts))
}

fn describe_selection(outcome: &SelectionOutcome) -> String {
    match outcome {
        SelectionOutcome::Unchanged => "already selected".to_string(),
        SelectionOutcome::Ignored => "ignored".to_string(),
        SelectionOutcome::Invalid(err) => format!("rejected: {err}"),
        SelectionOutcome::Swap(SwapOutcome::Success(label)) => format!("now showing {label}"),
        SelectionOutcome::Swap(SwapOutcome::Busy) => "busy, dropped".to_string(),
        SelectionOutcome::Swap(SwapOutcome::Failed(failure)) => format!("failed: {failure}"),
    }
}

fn describe_modal(outcome: &ModalOutcome) -> &'static str {
    match outcome {
        ModalOutcome::Opened => "opened",
        ModalOutcome::AlreadyOpen => "another image is open",
        ModalOutcome::Superseded => "closed before load finished",
        ModalOutcome::LoadFailed => "image failed to load",
        ModalOutcome::Ignored => "ignored",
    }
}

fn print_toasts(toasts: &ToastBoard) {
    for message in toasts.visible() {
        println!("toast: {message}");
    }
}

fn collect_stats() -> CatalogStats {
    CatalogStats {
        total_styles: catalog::total_styles(),
        total_colors: catalog::total_colors(),
        total_images: gallery::total_images(),
        categories: gallery::categories()
            .into_iter()
            .map(|category: Category| CategoryStats {
                key: category.slug(),
                name: category.display_name(),
                count: gallery::category_count(category),
            })
            .collect(),
        tags: gallery::all_tags(),
        protective_styles: gallery::protective_styles().len(),
    }
}
