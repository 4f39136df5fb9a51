// Proxy: an access-control proxy and a lazily loading image proxy.

use std::io::{self, Write};

use crate::error::Result;

// ============================================================================
// Access control
// ============================================================================

pub trait Server {
    fn request(&self) -> String;
}

pub struct RealServer;

impl Server for RealServer {
    fn request(&self) -> String {
        "RealServer: Handling the request".to_string()
    }
}

pub struct ProxyServer {
    real_server: RealServer,
}

impl ProxyServer {
    pub fn new(real_server: RealServer) -> Self {
        Self { real_server }
    }
}

impl Server for ProxyServer {
    fn request(&self) -> String {
        // Access checks would go here before delegating.
        format!("ProxyServer: {}", self.real_server.request())
    }
}

// ============================================================================
// Lazy initialization
// ============================================================================

pub struct RealImage {
    filename: String,
}

impl RealImage {
    /// Loading is the expensive part; it happens on construction.
    pub fn load(filename: &str, out: &mut dyn Write) -> io::Result<Self> {
        writeln!(out, "Loading image '{filename}' from disk")?;
        tracing::debug!(filename, "real image loaded");
        Ok(Self {
            filename: filename.to_string(),
        })
    }

    pub fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Displaying image '{}'", self.filename)
    }
}

/// Defers loading the real image until the first `display`.
pub struct ImageProxy {
    filename: String,
    real_image: Option<RealImage>,
}

impl ImageProxy {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            real_image: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.real_image.is_some()
    }

    pub fn display(&mut self, out: &mut dyn Write) -> io::Result<()> {
        let real_image = match self.real_image.take() {
            Some(image) => image,
            None => RealImage::load(&self.filename, out)?,
        };
        let image = self.real_image.insert(real_image);
        image.display(out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let real_server = RealServer;
    let proxy_server = ProxyServer::new(real_server);

    let result = proxy_server.request();
    writeln!(out, "{result}")?;

    let mut image_proxy = ImageProxy::new("sample.jpg");

    // The real image is not loaded until display() is called
    image_proxy.display(out)?;

    // Already loaded, so this won't reload it
    image_proxy.display(out)?;
    Ok(())
}
