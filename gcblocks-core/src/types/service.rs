/// Target Google Cloud API surface. Carries the host and versioned path
/// prefix every operation of that service shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Service {
    #[serde(rename = "compute")]
    ComputeV1,
    #[serde(rename = "gke")]
    ContainerV1,
    #[serde(rename = "run")]
    RunV2,
}

impl Service {
    pub fn base_url(&self) -> &'static str {
        match self {
            Service::ComputeV1 => "https://compute.googleapis.com",
            Service::ContainerV1 => "https://container.googleapis.com",
            Service::RunV2 => "https://run.googleapis.com",
        }
    }

    pub fn path_prefix(&self) -> &'static str {
        match self {
            Service::ComputeV1 => "/compute/v1",
            Service::ContainerV1 => "/v1",
            Service::RunV2 => "/v2",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Service::ComputeV1 => "compute",
            Service::ContainerV1 => "gke",
            Service::RunV2 => "run",
        }
    }
}

impl std::str::FromStr for Service {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compute" => Ok(Service::ComputeV1),
            "gke" => Ok(Service::ContainerV1),
            "run" => Ok(Service::RunV2),
            other => Err(format!("unknown service: {other}")),
        }
    }
}
