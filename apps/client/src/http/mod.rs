//! Concrete HTTP implementation of the transport port.

pub mod transport;

pub use transport::HttpTransport;
