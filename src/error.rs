use thiserror::Error;

/// Why a page effect did not mount.
#[derive(Debug, Error)]
pub enum FxError {
    /// A required element is absent; the effect silently stays off.
    #[error("required element `{0}` not found")]
    Missing(&'static str),
    #[error("reduced motion requested")]
    ReducedMotion,
    #[error("js error: {0}")]
    Js(String),
}

impl FxError {
    /// Skips that are part of normal operation rather than faults.
    pub fn is_silent(&self) -> bool {
        matches!(self, FxError::Missing(_) | FxError::ReducedMotion)
    }
}

impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        FxError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{0} is not a directory")]
    NotADirectory(std::path::PathBuf),
    #[error("io error on {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("image error on {path}: {source}")]
    Image {
        path: std::path::PathBuf,
        #[source]
        source: image::ImageError,
    },
}
