#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod error;
mod fetch;
mod parse;

use std::time::Instant;

use tokio::{fs, io::AsyncWriteExt};

use crate::config::{Output, Settings};

pub use error::{Error, Result};

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

async fn load_page(settings: &Settings) -> Result<String> {
    match &settings.input {
        Some(path) => {
            log::info!("Reading {} menu from {}", settings.site.name, path.display());
            let bytes = fs::read(path).await?;
            Ok(fetch::decode(&bytes))
        }
        None => {
            log::info!("Fetching {} menu from {}", settings.site.name, settings.site.url);
            let client = fetch::make_client();
            fetch::fetch_page(&client, settings.site).await
        }
    }
}

async fn write_record(output: &Output, json: &str) -> Result<()> {
    match output {
        Output::Stdout => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(json.as_bytes()).await?;
            stdout.flush().await?;
        }
        Output::File(path) => {
            fs::write(path, json).await?;
            log::info!("Menu saved to {}", path.display());
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let start = Instant::now();
    let settings = Settings::from_env()?;
    log::debug!("{settings:?}");

    let html = load_page(&settings).await?;
    let document = parse::parse_menu(&html, settings.site).map_err(Error::from)?;
    let json = document.to_json().map_err(Error::from)?;
    write_record(&settings.output, &json).await?;

    log::info!("Done in {:?}", start.elapsed());
    Ok(())
}
