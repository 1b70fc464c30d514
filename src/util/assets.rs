use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Stylesheet, favicon and bundled company dataset, embedded at build time.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

pub const DATASET_ASSET: &str = "companies.json";

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css").unwrap_or_default())
}

pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI.get_or_init(|| {
        load_asset("favicon.svg")
            .map(|bytes| format!("data:image/svg+xml;base64,{}", encode_base64(&bytes)))
            .unwrap_or_default()
    })
}

/// Raw JSON of the bundled company dataset.
pub fn bundled_dataset() -> Option<String> {
    load_text(DATASET_ASSET)
}

fn load_text(path: &str) -> Option<String> {
    let bytes = load_asset(path)?;
    match String::from_utf8(bytes.into_owned()) {
        Ok(text) => Some(text),
        Err(err) => {
            tracing::error!(path, %err, "embedded asset is not valid UTF-8");
            None
        }
    }
}

fn load_asset(path: &str) -> Option<Cow<'static, [u8]>> {
    let asset = EmbeddedAssets::get(path.trim_start_matches('/')).map(|file| file.data);
    if asset.is_none() {
        tracing::error!(path, "embedded asset not found");
    }
    asset
}

fn encode_base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut output = String::with_capacity(input.len().div_ceil(3) * 4);

    for chunk in input.chunks(3) {
        let bytes = [chunk[0], *chunk.get(1).unwrap_or(&0), *chunk.get(2).unwrap_or(&0)];
        let group = u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]);
        for position in 0..4 {
            if position <= chunk.len() {
                let index = (group >> (18 - 6 * position)) & 0b11_1111;
                output.push(TABLE[index as usize] as char);
            } else {
                output.push('=');
            }
        }
    }

    output
}
