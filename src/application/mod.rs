// Application layer - Use cases and the outbound feed seam
pub mod dashboard_service;
pub mod label_service;
pub mod session_feed;

#[cfg(test)]
pub mod test_support;
