use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use visitcard::{
    cli::profile::{self, NewService},
    core::{
        location::Location,
        storage::open_storage,
        store::ProfileStore,
    },
    preview::qr::QrFormat,
    settings::get_config,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Page address the card is opened from, fragment included. Relative
    /// values such as `#token` resolve against base_url
    #[arg(long, global = true)]
    url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the current profile
    Show,
    /// Set a profile field, e.g. `set name "Jordan Lee"`
    Set { field: String, value: String },
    /// Service related command
    Service(ServiceArgs),
    /// Gallery related command
    Gallery(GalleryArgs),
    /// Print the mode the card opens in
    Mode,
    /// Print the shareable link
    Link,
    /// Draw the shareable link as a QR code
    Qr {
        /// Print SVG markup instead of terminal blocks
        #[arg(long)]
        svg: bool,
    },
    /// Print a WhatsApp link that sends the card to a phone number
    Whatsapp {
        #[arg(short, long, default_value = "+91")]
        country_code: String,
        phone: String,
    },
    /// Write the contact card (.vcf)
    Vcard {
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Decode a shared link or fragment token
    Decode { token: String },
}

#[derive(Debug, Args)]
struct ServiceArgs {
    #[command(subcommand)]
    command: ServiceCommands,
}

#[derive(Debug, Subcommand)]
enum ServiceCommands {
    /// Append a new service
    Add {
        #[arg(short, long)]
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        #[arg(short, long)]
        price: Option<String>,
        #[arg(short, long)]
        image_url: Option<String>,
    },
    /// Change one field of a service
    Update {
        id: String,
        field: String,
        value: String,
    },
    /// Remove a service
    Remove { id: String },
}

#[derive(Debug, Args)]
struct GalleryArgs {
    #[command(subcommand)]
    command: GalleryCommands,
}

#[derive(Debug, Subcommand)]
enum GalleryCommands {
    /// Append an image
    Add { url: String },
    /// Change the url of an item
    Update { id: String, url: String },
    /// Remove an item
    Remove { id: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = get_config()?;

    let log_level = config.max_log_level()?;
    // Logging to File
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "visitcard.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(log_level)
        .init();
    config.log_source();
    tracing::info!("run with config: {:?}", config);

    if let Commands::Decode { token } = &cli.command {
        println!("{}", profile::decode(token)?);
        return Ok(());
    }

    let location = profile::open_location(&config.base_url, cli.url.as_deref())?;
    let storage = open_storage(&config)?;
    let mut store = ProfileStore::open(storage, location, config.storage_key.clone());

    match cli.command {
        Commands::Show => println!("{}", profile::show(&store)?),
        Commands::Set { field, value } => {
            profile::set_field(&mut store, &field, &value)?;
            println!("{}", store.location().href());
        }
        Commands::Service(service_args) => match service_args.command {
            ServiceCommands::Add {
                title,
                description,
                price,
                image_url,
            } => {
                let id = profile::add_service(
                    &mut store,
                    NewService {
                        title: &title,
                        description: &description,
                        price: price.as_deref(),
                        image_url: image_url.as_deref(),
                    },
                )?;
                println!("added service {id}");
            }
            ServiceCommands::Update { id, field, value } => {
                profile::update_service(&mut store, &id, &field, &value)?;
                println!("updated service {id}");
            }
            ServiceCommands::Remove { id } => {
                profile::remove_service(&mut store, &id)?;
                println!("removed service {id}");
            }
        },
        Commands::Gallery(gallery_args) => match gallery_args.command {
            GalleryCommands::Add { url } => {
                let id = profile::add_gallery_item(&mut store, &url)?;
                println!("added gallery item {id}");
            }
            GalleryCommands::Update { id, url } => {
                profile::update_gallery_item(&mut store, &id, &url)?;
                println!("updated gallery item {id}");
            }
            GalleryCommands::Remove { id } => {
                profile::remove_gallery_item(&mut store, &id)?;
                println!("removed gallery item {id}");
            }
        },
        Commands::Mode => println!("{} (loaded from {:?})", store.mode(), store.source()),
        Commands::Link => println!("{}", profile::share_link(&store)?),
        Commands::Qr { svg } => {
            let format = if svg { QrFormat::Svg } else { QrFormat::Text };
            println!("{}", profile::share_qr(&store, format)?)
        }
        Commands::Whatsapp {
            country_code,
            phone,
        } => println!("{}", profile::whatsapp_share(&store, &country_code, &phone)?),
        Commands::Vcard { out_dir } => {
            println!("wrote {}", profile::export_vcard(&store, &out_dir)?)
        }
        Commands::Decode { .. } => {}
    }
    Ok(())
}
