//! Browse a folder of images as a paging carousel.
//!
//! ```sh
//! cargo run --example gallery -- ~/Pictures --interval 4
//! ```
//!
//! Drag to flip pages, tap an image to log it, tap a dot to jump. Pass
//! `--interval 0` to turn auto-advance off.

use std::path::{Path, PathBuf};

use clap::Parser;
use log::{info, warn};

use iced::{Color, Element, Size, Subscription, Task, Theme};

use filmstrip::{Carousel, Config, Message as CarouselMessage, Slide};

/// Extensions the demo treats as images; matches the formats the carousel
/// can decode.
const IMAGE_EXTENSIONS: [&str; 11] = [
    "jpg", "jpeg", "png", "gif", "bmp", "ico", "tiff", "webp", "pnm", "qoi", "tga",
];

#[derive(Debug, Parser)]
#[command(about = "Browse a folder of images as a paging carousel")]
struct Args {
    /// Directory holding the images to show
    dir: PathBuf,

    /// Seconds between automatic page advances; 0 disables auto-scroll
    #[arg(long, default_value_t = 4.0)]
    interval: f32,

    /// Hide the dot page indicator
    #[arg(long)]
    no_dots: bool,

    /// Rubber-band past the first and last image instead of stopping hard
    #[arg(long)]
    bounce: bool,
}

#[derive(Debug, Clone)]
enum Message {
    Carousel(CarouselMessage),
}

struct Gallery {
    carousel: Carousel,
}

impl Gallery {
    fn boot(args: Args) -> (Self, Task<Message>) {
        let slides = scan(&args.dir);
        if slides.is_empty() {
            warn!("no images found in {}", args.dir.display());
        } else {
            info!("showing {} image(s) from {}", slides.len(), args.dir.display());
        }

        let mut config = Config::new(slides)
            .show_page_indicator(!args.no_dots)
            .bounces(args.bounce)
            .background(Color::BLACK)
            .on_tap(|index, slide| info!("tapped pane {index}: {:?}", slide.source));

        if args.interval > 0.0 {
            config = config.auto_scroll_interval(args.interval);
        }

        let mut carousel = Carousel::new();
        let task = carousel.configure(config);

        (Self { carousel }, task.map(Message::Carousel))
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Carousel(message) => self.carousel.update(message).map(Message::Carousel),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.carousel.view().map(Message::Carousel)
    }

    fn subscription(&self) -> Subscription<Message> {
        self.carousel.subscription().map(Message::Carousel)
    }
}

fn scan(dir: &Path) -> Vec<Slide> {
    let mut paths: Vec<PathBuf> = match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| {
                        IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
                    })
            })
            .collect(),
        Err(error) => {
            warn!("cannot read {}: {error}", dir.display());
            Vec::new()
        }
    };

    alphanumeric_sort::sort_path_slice(&mut paths);
    paths.into_iter().map(Slide::new).collect()
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    iced::application("Gallery", Gallery::update, Gallery::view)
        .subscription(Gallery::subscription)
        .theme(|_| Theme::Dark)
        .window_size(Size::new(960.0, 600.0))
        .run_with(move || Gallery::boot(args))
}
