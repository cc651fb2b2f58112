use std::sync::OnceLock;

use rust_embed::RustEmbed;

/// Styles and the favicon ship inside the binary so the app has no
/// runtime asset directory to locate.
#[derive(RustEmbed)]
#[folder = "assets"]
struct Assets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static TAILWIND_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| stylesheet("main.css")).as_str()
}

pub fn tailwind_css() -> &'static str {
    TAILWIND_CSS
        .get_or_init(|| stylesheet("tailwind.css"))
        .as_str()
}

/// Inline `data:` URI for the window/tab icon.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| {
            let bytes = embedded("favicon.svg");
            format!("data:image/svg+xml;base64,{}", base64(&bytes))
        })
        .as_str()
}

fn stylesheet(name: &str) -> String {
    String::from_utf8_lossy(&embedded(name)).into_owned()
}

fn embedded(name: &str) -> Vec<u8> {
    Assets::get(name)
        .map(|file| file.data.into_owned())
        .unwrap_or_else(|| panic!("missing embedded asset: {name}"))
}

// Plain RFC 4648 encoding; small enough that pulling in a crate for the
// favicon alone is not worth it.
fn base64(bytes: &[u8]) -> String {
    const ALPHABET: &[u8; 64] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut out = Vec::with_capacity(bytes.len().div_ceil(3) * 4);
    for chunk in bytes.chunks(3) {
        let mut word = 0u32;
        for (offset, byte) in chunk.iter().enumerate() {
            word |= u32::from(*byte) << (16 - 8 * offset);
        }
        for sextet in 0..4 {
            if sextet <= chunk.len() {
                out.push(ALPHABET[(word >> (18 - 6 * sextet)) as usize & 0x3f]);
            } else {
                out.push(b'=');
            }
        }
    }
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_matches_known_vectors() {
        assert_eq!(base64(b""), "");
        assert_eq!(base64(b"f"), "Zg==");
        assert_eq!(base64(b"fo"), "Zm8=");
        assert_eq!(base64(b"foo"), "Zm9v");
        assert_eq!(base64(b"foobar"), "Zm9vYmFy");
    }
}
