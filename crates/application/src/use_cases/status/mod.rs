mod get_service_status;

pub use get_service_status::{GetServiceStatusUseCase, ServiceStatus, UpstreamHealth};
