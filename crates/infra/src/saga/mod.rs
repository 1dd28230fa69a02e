//! Multi-step orchestrations across upstream services.

pub mod create_product;
