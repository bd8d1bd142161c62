//! Configuration for the codec
//!
//! Centralized limits applied while decoding server replies.

/// Codec configuration
#[derive(Debug, Clone)]
pub struct CodecConfig {
    // -------------------------------------------------------------------------
    // Response Limits
    // -------------------------------------------------------------------------
    /// Largest structured response message accepted (in bytes)
    pub max_response_size: usize,

    /// Largest trailing cell block accepted (in bytes)
    pub max_cell_block_size: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_response_size: 64 * 1024 * 1024,   // 64 MB
            max_cell_block_size: 16 * 1024 * 1024, // 16 MB
        }
    }
}

impl CodecConfig {
    /// Create a new config builder
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::default()
    }
}

/// Builder for CodecConfig
#[derive(Default)]
pub struct CodecConfigBuilder {
    config: CodecConfig,
}

impl CodecConfigBuilder {
    /// Set the maximum structured response size (in bytes)
    pub fn max_response_size(mut self, size: usize) -> Self {
        self.config.max_response_size = size;
        self
    }

    /// Set the maximum cell block size (in bytes)
    pub fn max_cell_block_size(mut self, size: usize) -> Self {
        self.config.max_cell_block_size = size;
        self
    }

    pub fn build(self) -> CodecConfig {
        self.config
    }
}
