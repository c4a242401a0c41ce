//! GKE v1 cluster lookup. The `get` response carries the control-plane
//! endpoint and CA material a caller needs to authenticate to a cluster.

use crate::types::{HttpMethod, OperationDescriptor, Service};

use super::{object_shape, op};

pub fn operations() -> Vec<OperationDescriptor> {
    vec![
        op(
            Service::ContainerV1,
            HttpMethod::Get,
            "gke.clusters.list",
            "/projects/{project}/locations/{location}/clusters",
            "Lists all clusters owned by a project in either the specified zone or all zones.",
        )
        .path_param(
            "location",
            "The name of the Google Compute Engine zone or region in which the clusters reside, or \"-\" for all zones.",
        )
        .output(object_shape(&["clusters", "missingZones"]))
        .build(),
        op(
            Service::ContainerV1,
            HttpMethod::Get,
            "gke.clusters.get",
            "/projects/{project}/locations/{location}/clusters/{cluster}",
            "Gets the details of a specific cluster.",
        )
        .path_param(
            "location",
            "The name of the Google Compute Engine zone or region in which the cluster resides.",
        )
        .path_param("cluster", "The name of the cluster to retrieve.")
        .output(object_shape(&[
            "name",
            "description",
            "endpoint",
            "masterAuth",
            "currentMasterVersion",
            "currentNodeCount",
            "status",
            "location",
            "selfLink",
        ]))
        .build(),
    ]
}
