//! Config and transcoding pipeline for the `acme-transcode` binary.
//!
//! A transcode decodes one payload under its declared `Content-Type` and
//! re-encodes it for an `Accept` header, exactly as a server would for a
//! request/response pair.

use acme_negotiate::{ContentType, Encoded, NegotiationEngine, NegotiationResult};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Transcoder settings, read from the `[transcode]` table of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscodeConfig {
    /// Declared media type of the input, optionally with a charset parameter.
    #[serde(default = "default_media_type")]
    pub content_type: String,
    /// Overrides any charset given in `content_type`.
    #[serde(default)]
    pub charset: Option<String>,
    /// `Accept` header used to pick the output encoding.
    #[serde(default = "default_media_type")]
    pub accept: String,
    /// Treat the input as a list of people.
    #[serde(default)]
    pub collection: bool,
}

fn default_media_type() -> String {
    "application/json".to_string()
}

impl Default for TranscodeConfig {
    fn default() -> Self {
        Self {
            content_type: default_media_type(),
            charset: None,
            accept: default_media_type(),
            collection: false,
        }
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    transcode: TranscodeConfig,
}

impl TranscodeConfig {
    /// Load settings from a TOML file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let file: ConfigFile = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        info!("Loaded transcode config from {:?}", path);
        Ok(file.transcode)
    }

    /// Apply command-line values on top of the file settings.
    pub fn with_overrides(
        mut self,
        content_type: Option<String>,
        charset: Option<String>,
        accept: Option<String>,
        collection: bool,
    ) -> Self {
        if let Some(content_type) = content_type {
            self.content_type = content_type;
        }
        if charset.is_some() {
            self.charset = charset;
        }
        if let Some(accept) = accept {
            self.accept = accept;
        }
        self.collection |= collection;
        self
    }
}

/// Decode `input` and re-encode it according to `config`.
pub fn transcode(
    engine: &NegotiationEngine,
    input: &[u8],
    config: &TranscodeConfig,
) -> NegotiationResult<Encoded> {
    let content_type = ContentType::parse(&config.content_type);
    let charset = config.charset.as_deref().or(content_type.charset());
    debug!(
        "Transcoding {} bytes from {} (charset {:?}) for Accept {:?}",
        input.len(),
        content_type.media_type,
        charset,
        config.accept
    );

    if config.collection {
        let people = engine.decode_collection(input, &content_type.media_type, charset)?;
        engine.encode_collection_for_accept(&people, &config.accept)
    } else {
        let person = engine.decode(input, &content_type.media_type, charset)?;
        engine.encode_for_accept(&person, &config.accept)
    }
}
