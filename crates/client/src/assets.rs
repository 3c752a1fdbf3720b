//! Embedded asset management.
//!
//! Files under the crate's `assets/` directory are compiled into the binary
//! with `rust-embed`. Shader sources are the only assets the viewer ships.

use rust_embed::Embed;

#[derive(Embed)]
#[folder = "assets/"]
pub struct Assets;

impl Assets {
    /// Load a text asset by path relative to `assets/`, e.g. `shaders/scene.vert.wgsl`.
    pub fn load_string(path: &str) -> Option<String> {
        Self::get(path).and_then(|file| String::from_utf8(file.data.into_owned()).ok())
    }

    /// List asset paths matching a prefix.
    #[allow(dead_code)]
    pub fn list_prefix(prefix: &str) -> Vec<String> {
        Self::iter()
            .filter(|path| path.starts_with(prefix))
            .map(|path| path.into_owned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_shaders_are_embedded() {
        let shaders = Assets::list_prefix("shaders/");
        for name in [
            "shaders/scene.vert.wgsl",
            "shaders/lighting.frag.wgsl",
            "shaders/light_source.frag.wgsl",
        ] {
            assert!(shaders.iter().any(|s| s == name), "{name} missing");
            assert!(Assets::load_string(name).is_some_and(|s| !s.is_empty()));
        }
    }

    #[test]
    fn test_missing_asset_is_none() {
        assert!(Assets::load_string("shaders/nope.wgsl").is_none());
    }
}
