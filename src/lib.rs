#[cfg(feature = "logging")]
pub mod logging {
    pub use libris_logging::*;
}

#[cfg(feature = "messaging")]
pub mod messaging {
    pub use libris_messaging::*;
}

#[cfg(feature = "request")]
pub mod request {
    pub use libris_request::*;
}
