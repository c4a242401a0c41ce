//! Compute Engine v1 load-balancing resources: backend services, URL maps,
//! target proxies, forwarding rules, health checks, SSL certificates, and
//! target pools.

use crate::types::{FieldType, HttpMethod, OperationDescriptor, Service};

use super::{
    compute_list_shape, compute_operation_shape, object_shape, op, OpBuilder, SCOPE_CLOUD_PLATFORM,
    SCOPE_COMPUTE, SCOPE_COMPUTE_READONLY,
};

const READ: &[&str] = &[SCOPE_CLOUD_PLATFORM, SCOPE_COMPUTE, SCOPE_COMPUTE_READONLY];
const MUTATE: &[&str] = &[SCOPE_CLOUD_PLATFORM, SCOPE_COMPUTE];

/// Standard list-call query surface shared by every Compute collection.
fn paged(b: OpBuilder) -> OpBuilder {
    b.query(
        "filter",
        FieldType::String,
        "A filter expression that filters resources listed in the response.",
    )
    .query(
        "maxResults",
        FieldType::Number,
        "The maximum number of results per page that should be returned.",
    )
    .query(
        "orderBy",
        FieldType::String,
        "Sorts list results by a certain order.",
    )
    .query(
        "pageToken",
        FieldType::String,
        "Specifies a page token to use. Set pageToken to the nextPageToken returned by a previous list request.",
    )
}

/// Idempotency token accepted by every mutating Compute call. Passed through
/// verbatim; no client-side retry is attached to it.
fn mutating(b: OpBuilder) -> OpBuilder {
    b.query(
        "requestId",
        FieldType::String,
        "An optional request ID to identify requests.",
    )
}

pub fn operations() -> Vec<OperationDescriptor> {
    let mut ops = Vec::new();
    backend_services(&mut ops);
    url_maps(&mut ops);
    target_http_proxies(&mut ops);
    target_https_proxies(&mut ops);
    global_forwarding_rules(&mut ops);
    forwarding_rules(&mut ops);
    health_checks(&mut ops);
    ssl_certificates(&mut ops);
    target_pools(&mut ops);
    ops
}

fn backend_services(ops: &mut Vec<OperationDescriptor>) {
    ops.push(
        paged(op(
            Service::ComputeV1,
            HttpMethod::Get,
            "compute.backendServices.list",
            "/projects/{project}/global/backendServices",
            "Retrieves the list of BackendService resources available to the specified project.",
        ))
        .scopes(READ)
        .output(compute_list_shape())
        .build(),
    );
    ops.push(
        op(
            Service::ComputeV1,
            HttpMethod::Get,
            "compute.backendServices.get",
            "/projects/{project}/global/backendServices/{backendService}",
            "Returns the specified BackendService resource.",
        )
        .scopes(READ)
        .path_param("backendService", "Name of the BackendService resource to return.")
        .output(object_shape(&[
            "id",
            "name",
            "description",
            "backends",
            "healthChecks",
            "protocol",
            "timeoutSec",
            "selfLink",
        ]))
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Post,
            "compute.backendServices.insert",
            "/projects/{project}/global/backendServices",
            "Creates a BackendService resource in the specified project using the data included in the request.",
        ))
        .scopes(MUTATE)
        .request_body("A BackendService resource to create.")
        .output(compute_operation_shape())
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Patch,
            "compute.backendServices.patch",
            "/projects/{project}/global/backendServices/{backendService}",
            "Patches the specified BackendService resource with the data included in the request.",
        ))
        .scopes(MUTATE)
        .path_param("backendService", "Name of the BackendService resource to patch.")
        .body_field(
            "description",
            FieldType::String,
            "An optional description of this resource.",
        )
        .body_field(
            "timeoutSec",
            FieldType::Number,
            "The backend service timeout, in seconds.",
        )
        .body_field(
            "enableCDN",
            FieldType::Boolean,
            "If true, enables Cloud CDN for the backend service.",
        )
        .body_field(
            "protocol",
            FieldType::String,
            "The protocol this BackendService uses to communicate with backends.",
        )
        .body_field(
            "portName",
            FieldType::String,
            "A named port on a backend instance group representing the port for communication to the backend VMs.",
        )
        .body_field(
            "sessionAffinity",
            FieldType::String,
            "Type of session affinity to use.",
        )
        .output(compute_operation_shape())
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Delete,
            "compute.backendServices.delete",
            "/projects/{project}/global/backendServices/{backendService}",
            "Deletes the specified BackendService resource.",
        ))
        .scopes(MUTATE)
        .path_param("backendService", "Name of the BackendService resource to delete.")
        .output(compute_operation_shape())
        .build(),
    );
}

fn url_maps(ops: &mut Vec<OperationDescriptor>) {
    ops.push(
        paged(op(
            Service::ComputeV1,
            HttpMethod::Get,
            "compute.urlMaps.list",
            "/projects/{project}/global/urlMaps",
            "Retrieves the list of UrlMap resources available to the specified project.",
        ))
        .scopes(READ)
        .output(compute_list_shape())
        .build(),
    );
    ops.push(
        op(
            Service::ComputeV1,
            HttpMethod::Get,
            "compute.urlMaps.get",
            "/projects/{project}/global/urlMaps/{urlMap}",
            "Returns the specified UrlMap resource.",
        )
        .scopes(READ)
        .path_param("urlMap", "Name of the UrlMap resource to return.")
        .output(object_shape(&[
            "id",
            "name",
            "description",
            "defaultService",
            "hostRules",
            "pathMatchers",
            "selfLink",
        ]))
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Post,
            "compute.urlMaps.insert",
            "/projects/{project}/global/urlMaps",
            "Creates a UrlMap resource in the specified project using the data included in the request.",
        ))
        .scopes(MUTATE)
        .request_body("A UrlMap resource to create.")
        .output(compute_operation_shape())
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Patch,
            "compute.urlMaps.patch",
            "/projects/{project}/global/urlMaps/{urlMap}",
            "Patches the specified UrlMap resource with the data included in the request.",
        ))
        .scopes(MUTATE)
        .path_param("urlMap", "Name of the UrlMap resource to patch.")
        .body_field(
            "description",
            FieldType::String,
            "An optional description of this resource.",
        )
        .body_field(
            "defaultService",
            FieldType::String,
            "The full or partial URL of the defaultService resource to which traffic is directed if none of the hostRules match.",
        )
        .output(compute_operation_shape())
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Delete,
            "compute.urlMaps.delete",
            "/projects/{project}/global/urlMaps/{urlMap}",
            "Deletes the specified UrlMap resource.",
        ))
        .scopes(MUTATE)
        .path_param("urlMap", "Name of the UrlMap resource to delete.")
        .output(compute_operation_shape())
        .build(),
    );
}

fn target_http_proxies(ops: &mut Vec<OperationDescriptor>) {
    ops.push(
        paged(op(
            Service::ComputeV1,
            HttpMethod::Get,
            "compute.targetHttpProxies.list",
            "/projects/{project}/global/targetHttpProxies",
            "Retrieves the list of TargetHttpProxy resources available to the specified project.",
        ))
        .scopes(READ)
        .output(compute_list_shape())
        .build(),
    );
    ops.push(
        op(
            Service::ComputeV1,
            HttpMethod::Get,
            "compute.targetHttpProxies.get",
            "/projects/{project}/global/targetHttpProxies/{targetHttpProxy}",
            "Returns the specified TargetHttpProxy resource.",
        )
        .scopes(READ)
        .path_param("targetHttpProxy", "Name of the TargetHttpProxy resource to return.")
        .output(object_shape(&["id", "name", "description", "urlMap", "selfLink"]))
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Post,
            "compute.targetHttpProxies.insert",
            "/projects/{project}/global/targetHttpProxies",
            "Creates a TargetHttpProxy resource in the specified project using the data included in the request.",
        ))
        .scopes(MUTATE)
        .request_body("A TargetHttpProxy resource to create.")
        .output(compute_operation_shape())
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Delete,
            "compute.targetHttpProxies.delete",
            "/projects/{project}/global/targetHttpProxies/{targetHttpProxy}",
            "Deletes the specified TargetHttpProxy resource.",
        ))
        .scopes(MUTATE)
        .path_param("targetHttpProxy", "Name of the TargetHttpProxy resource to delete.")
        .output(compute_operation_shape())
        .build(),
    );
    // setUrlMap lives outside the /global/ segment in the published API.
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Post,
            "compute.targetHttpProxies.setUrlMap",
            "/projects/{project}/targetHttpProxies/{targetHttpProxy}/setUrlMap",
            "Changes the URL map for TargetHttpProxy.",
        ))
        .scopes(MUTATE)
        .path_param("targetHttpProxy", "Name of the TargetHttpProxy to set a URL map for.")
        .required_body_field("urlMap", FieldType::String, "The URL of the new UrlMap resource.")
        .output(compute_operation_shape())
        .build(),
    );
}

fn target_https_proxies(ops: &mut Vec<OperationDescriptor>) {
    ops.push(
        paged(op(
            Service::ComputeV1,
            HttpMethod::Get,
            "compute.targetHttpsProxies.list",
            "/projects/{project}/global/targetHttpsProxies",
            "Retrieves the list of TargetHttpsProxy resources available to the specified project.",
        ))
        .scopes(READ)
        .output(compute_list_shape())
        .build(),
    );
    ops.push(
        op(
            Service::ComputeV1,
            HttpMethod::Get,
            "compute.targetHttpsProxies.get",
            "/projects/{project}/global/targetHttpsProxies/{targetHttpsProxy}",
            "Returns the specified TargetHttpsProxy resource.",
        )
        .scopes(READ)
        .path_param("targetHttpsProxy", "Name of the TargetHttpsProxy resource to return.")
        .output(object_shape(&[
            "id",
            "name",
            "description",
            "urlMap",
            "sslCertificates",
            "selfLink",
        ]))
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Post,
            "compute.targetHttpsProxies.insert",
            "/projects/{project}/global/targetHttpsProxies",
            "Creates a TargetHttpsProxy resource in the specified project using the data included in the request.",
        ))
        .scopes(MUTATE)
        .request_body("A TargetHttpsProxy resource to create.")
        .output(compute_operation_shape())
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Delete,
            "compute.targetHttpsProxies.delete",
            "/projects/{project}/global/targetHttpsProxies/{targetHttpsProxy}",
            "Deletes the specified TargetHttpsProxy resource.",
        ))
        .scopes(MUTATE)
        .path_param("targetHttpsProxy", "Name of the TargetHttpsProxy resource to delete.")
        .output(compute_operation_shape())
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Post,
            "compute.targetHttpsProxies.setSslCertificates",
            "/projects/{project}/targetHttpsProxies/{targetHttpsProxy}/setSslCertificates",
            "Replaces SslCertificates for TargetHttpsProxy.",
        ))
        .scopes(MUTATE)
        .path_param(
            "targetHttpsProxy",
            "Name of the TargetHttpsProxy resource to set an SslCertificates resource for.",
        )
        .required_body_field(
            "sslCertificates",
            FieldType::Array,
            "New set of SslCertificate resources to associate with this TargetHttpsProxy resource.",
        )
        .output(compute_operation_shape())
        .build(),
    );
}

fn global_forwarding_rules(ops: &mut Vec<OperationDescriptor>) {
    ops.push(
        paged(op(
            Service::ComputeV1,
            HttpMethod::Get,
            "compute.globalForwardingRules.list",
            "/projects/{project}/global/forwardingRules",
            "Retrieves a list of GlobalForwardingRule resources available to the specified project.",
        ))
        .scopes(READ)
        .output(compute_list_shape())
        .build(),
    );
    ops.push(
        op(
            Service::ComputeV1,
            HttpMethod::Get,
            "compute.globalForwardingRules.get",
            "/projects/{project}/global/forwardingRules/{forwardingRule}",
            "Returns the specified GlobalForwardingRule resource.",
        )
        .scopes(READ)
        .path_param("forwardingRule", "Name of the ForwardingRule resource to return.")
        .output(object_shape(&[
            "id",
            "name",
            "description",
            "IPAddress",
            "IPProtocol",
            "portRange",
            "target",
            "selfLink",
        ]))
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Post,
            "compute.globalForwardingRules.insert",
            "/projects/{project}/global/forwardingRules",
            "Creates a GlobalForwardingRule resource in the specified project using the data included in the request.",
        ))
        .scopes(MUTATE)
        .request_body("A ForwardingRule resource to create.")
        .output(compute_operation_shape())
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Delete,
            "compute.globalForwardingRules.delete",
            "/projects/{project}/global/forwardingRules/{forwardingRule}",
            "Deletes the specified GlobalForwardingRule resource.",
        ))
        .scopes(MUTATE)
        .path_param("forwardingRule", "Name of the ForwardingRule resource to delete.")
        .output(compute_operation_shape())
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Post,
            "compute.globalForwardingRules.setTarget",
            "/projects/{project}/global/forwardingRules/{forwardingRule}/setTarget",
            "Changes target URL for the GlobalForwardingRule resource.",
        ))
        .scopes(MUTATE)
        .path_param(
            "forwardingRule",
            "Name of the ForwardingRule resource in which target is to be set.",
        )
        .required_body_field("target", FieldType::String, "The URL of the target resource to receive the matched traffic.")
        .output(compute_operation_shape())
        .build(),
    );
}

fn forwarding_rules(ops: &mut Vec<OperationDescriptor>) {
    ops.push(
        paged(op(
            Service::ComputeV1,
            HttpMethod::Get,
            "compute.forwardingRules.list",
            "/projects/{project}/regions/{region}/forwardingRules",
            "Retrieves a list of ForwardingRule resources available to the specified project and region.",
        ))
        .scopes(READ)
        .path_param("region", "Name of the region scoping this request.")
        .output(compute_list_shape())
        .build(),
    );
    ops.push(
        op(
            Service::ComputeV1,
            HttpMethod::Get,
            "compute.forwardingRules.get",
            "/projects/{project}/regions/{region}/forwardingRules/{forwardingRule}",
            "Returns the specified ForwardingRule resource.",
        )
        .scopes(READ)
        .path_param("region", "Name of the region scoping this request.")
        .path_param("forwardingRule", "Name of the ForwardingRule resource to return.")
        .output(object_shape(&[
            "id",
            "name",
            "description",
            "IPAddress",
            "IPProtocol",
            "portRange",
            "target",
            "region",
            "selfLink",
        ]))
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Post,
            "compute.forwardingRules.insert",
            "/projects/{project}/regions/{region}/forwardingRules",
            "Creates a ForwardingRule resource in the specified project and region using the data included in the request.",
        ))
        .scopes(MUTATE)
        .path_param("region", "Name of the region scoping this request.")
        .request_body("A ForwardingRule resource to create.")
        .output(compute_operation_shape())
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Delete,
            "compute.forwardingRules.delete",
            "/projects/{project}/regions/{region}/forwardingRules/{forwardingRule}",
            "Deletes the specified ForwardingRule resource.",
        ))
        .scopes(MUTATE)
        .path_param("region", "Name of the region scoping this request.")
        .path_param("forwardingRule", "Name of the ForwardingRule resource to delete.")
        .output(compute_operation_shape())
        .build(),
    );
}

fn health_checks(ops: &mut Vec<OperationDescriptor>) {
    ops.push(
        paged(op(
            Service::ComputeV1,
            HttpMethod::Get,
            "compute.healthChecks.list",
            "/projects/{project}/global/healthChecks",
            "Retrieves the list of HealthCheck resources available to the specified project.",
        ))
        .scopes(READ)
        .output(compute_list_shape())
        .build(),
    );
    ops.push(
        op(
            Service::ComputeV1,
            HttpMethod::Get,
            "compute.healthChecks.get",
            "/projects/{project}/global/healthChecks/{healthCheck}",
            "Returns the specified HealthCheck resource.",
        )
        .scopes(READ)
        .path_param("healthCheck", "Name of the HealthCheck resource to return.")
        .output(object_shape(&[
            "id",
            "name",
            "description",
            "type",
            "checkIntervalSec",
            "timeoutSec",
            "healthyThreshold",
            "unhealthyThreshold",
            "selfLink",
        ]))
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Post,
            "compute.healthChecks.insert",
            "/projects/{project}/global/healthChecks",
            "Creates a HealthCheck resource in the specified project using the data included in the request.",
        ))
        .scopes(MUTATE)
        .request_body("A HealthCheck resource to create.")
        .output(compute_operation_shape())
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Patch,
            "compute.healthChecks.patch",
            "/projects/{project}/global/healthChecks/{healthCheck}",
            "Patches the specified HealthCheck resource with the data included in the request.",
        ))
        .scopes(MUTATE)
        .path_param("healthCheck", "Name of the HealthCheck resource to patch.")
        .body_field(
            "description",
            FieldType::String,
            "An optional description of this resource.",
        )
        .body_field(
            "checkIntervalSec",
            FieldType::Number,
            "How often (in seconds) to send a health check.",
        )
        .body_field(
            "timeoutSec",
            FieldType::Number,
            "How long (in seconds) to wait before claiming failure.",
        )
        .body_field(
            "healthyThreshold",
            FieldType::Number,
            "A so-far unhealthy instance will be marked healthy after this many consecutive successes.",
        )
        .body_field(
            "unhealthyThreshold",
            FieldType::Number,
            "A so-far healthy instance will be marked unhealthy after this many consecutive failures.",
        )
        .output(compute_operation_shape())
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Delete,
            "compute.healthChecks.delete",
            "/projects/{project}/global/healthChecks/{healthCheck}",
            "Deletes the specified HealthCheck resource.",
        ))
        .scopes(MUTATE)
        .path_param("healthCheck", "Name of the HealthCheck resource to delete.")
        .output(compute_operation_shape())
        .build(),
    );
}

fn ssl_certificates(ops: &mut Vec<OperationDescriptor>) {
    ops.push(
        paged(op(
            Service::ComputeV1,
            HttpMethod::Get,
            "compute.sslCertificates.list",
            "/projects/{project}/global/sslCertificates",
            "Retrieves the list of SslCertificate resources available to the specified project.",
        ))
        .scopes(READ)
        .output(compute_list_shape())
        .build(),
    );
    ops.push(
        op(
            Service::ComputeV1,
            HttpMethod::Get,
            "compute.sslCertificates.get",
            "/projects/{project}/global/sslCertificates/{sslCertificate}",
            "Returns the specified SslCertificate resource.",
        )
        .scopes(READ)
        .path_param("sslCertificate", "Name of the SslCertificate resource to return.")
        .output(object_shape(&[
            "id",
            "name",
            "description",
            "certificate",
            "expireTime",
            "managed",
            "type",
            "selfLink",
        ]))
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Post,
            "compute.sslCertificates.insert",
            "/projects/{project}/global/sslCertificates",
            "Creates a SslCertificate resource in the specified project using the data included in the request.",
        ))
        .scopes(MUTATE)
        .request_body("A SslCertificate resource to create.")
        .output(compute_operation_shape())
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Delete,
            "compute.sslCertificates.delete",
            "/projects/{project}/global/sslCertificates/{sslCertificate}",
            "Deletes the specified SslCertificate resource.",
        ))
        .scopes(MUTATE)
        .path_param("sslCertificate", "Name of the SslCertificate resource to delete.")
        .output(compute_operation_shape())
        .build(),
    );
}

fn target_pools(ops: &mut Vec<OperationDescriptor>) {
    ops.push(
        paged(op(
            Service::ComputeV1,
            HttpMethod::Get,
            "compute.targetPools.list",
            "/projects/{project}/regions/{region}/targetPools",
            "Retrieves a list of target pools available to the specified project and region.",
        ))
        .scopes(READ)
        .path_param("region", "Name of the region scoping this request.")
        .output(compute_list_shape())
        .build(),
    );
    ops.push(
        op(
            Service::ComputeV1,
            HttpMethod::Get,
            "compute.targetPools.get",
            "/projects/{project}/regions/{region}/targetPools/{targetPool}",
            "Returns the specified target pool.",
        )
        .scopes(READ)
        .path_param("region", "Name of the region scoping this request.")
        .path_param("targetPool", "Name of the TargetPool resource to return.")
        .output(object_shape(&[
            "id",
            "name",
            "description",
            "instances",
            "healthChecks",
            "sessionAffinity",
            "region",
            "selfLink",
        ]))
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Post,
            "compute.targetPools.insert",
            "/projects/{project}/regions/{region}/targetPools",
            "Creates a target pool in the specified project and region using the data included in the request.",
        ))
        .scopes(MUTATE)
        .path_param("region", "Name of the region scoping this request.")
        .request_body("A TargetPool resource to create.")
        .output(compute_operation_shape())
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Delete,
            "compute.targetPools.delete",
            "/projects/{project}/regions/{region}/targetPools/{targetPool}",
            "Deletes the specified target pool.",
        ))
        .scopes(MUTATE)
        .path_param("region", "Name of the region scoping this request.")
        .path_param("targetPool", "Name of the TargetPool resource to delete.")
        .output(compute_operation_shape())
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Post,
            "compute.targetPools.addInstance",
            "/projects/{project}/regions/{region}/targetPools/{targetPool}/addInstance",
            "Adds an instance to a target pool.",
        ))
        .scopes(MUTATE)
        .path_param("region", "Name of the region scoping this request.")
        .path_param("targetPool", "Name of the TargetPool resource to add instances to.")
        .required_body_field(
            "instances",
            FieldType::Array,
            "A full or partial URL to each instance to add to this target pool.",
        )
        .output(compute_operation_shape())
        .build(),
    );
    ops.push(
        mutating(op(
            Service::ComputeV1,
            HttpMethod::Post,
            "compute.targetPools.removeInstance",
            "/projects/{project}/regions/{region}/targetPools/{targetPool}/removeInstance",
            "Removes instance URL from a target pool.",
        ))
        .scopes(MUTATE)
        .path_param("region", "Name of the region scoping this request.")
        .path_param("targetPool", "Name of the TargetPool resource to remove instances from.")
        .required_body_field(
            "instances",
            FieldType::Array,
            "URLs of the instances to be removed from target pool.",
        )
        .output(compute_operation_shape())
        .build(),
    );
}
