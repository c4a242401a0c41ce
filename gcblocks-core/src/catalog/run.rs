//! Cloud Run v2 services, jobs, and executions.

use crate::types::{FieldType, HttpMethod, OperationDescriptor, Service};

use super::{object_shape, op, run_list_shape, run_operation_shape, OpBuilder};

/// Standard list-call query surface shared by the Run v2 collections.
fn paged(b: OpBuilder) -> OpBuilder {
    b.query(
        "pageSize",
        FieldType::Number,
        "Maximum number of items to return in this call.",
    )
    .query(
        "pageToken",
        FieldType::String,
        "A page token received from a previous list call.",
    )
    .query(
        "showDeleted",
        FieldType::Boolean,
        "If true, returns deleted (but unexpired) resources along with active ones.",
    )
}

pub fn operations() -> Vec<OperationDescriptor> {
    let mut ops = Vec::new();
    services(&mut ops);
    jobs(&mut ops);
    executions(&mut ops);
    ops
}

fn services(ops: &mut Vec<OperationDescriptor>) {
    ops.push(
        paged(op(
            Service::RunV2,
            HttpMethod::Get,
            "run.services.list",
            "/projects/{project}/locations/{location}/services",
            "Lists Services in a given project and location.",
        ))
        .path_param("location", "The location to list Services in.")
        .output(run_list_shape("services"))
        .build(),
    );
    ops.push(
        op(
            Service::RunV2,
            HttpMethod::Get,
            "run.services.get",
            "/projects/{project}/locations/{location}/services/{service}",
            "Gets information about a Service.",
        )
        .path_param("location", "The location the Service is in.")
        .path_param("service", "The name of the Service to retrieve.")
        .output(object_shape(&[
            "name",
            "uid",
            "generation",
            "uri",
            "template",
            "traffic",
            "conditions",
            "latestReadyRevision",
            "latestCreatedRevision",
        ]))
        .build(),
    );
    ops.push(
        op(
            Service::RunV2,
            HttpMethod::Post,
            "run.services.create",
            "/projects/{project}/locations/{location}/services",
            "Creates a new Service in a given project and location.",
        )
        .path_param("location", "The location to create the Service in.")
        .required_query(
            "serviceId",
            FieldType::String,
            "The unique identifier for the Service; it becomes the final component of the Service's resource name.",
        )
        .query(
            "validateOnly",
            FieldType::Boolean,
            "Indicates that the request should be validated without actually creating the Service.",
        )
        .request_body("The Service instance to create.")
        .output(run_operation_shape())
        .build(),
    );
    ops.push(
        op(
            Service::RunV2,
            HttpMethod::Patch,
            "run.services.patch",
            "/projects/{project}/locations/{location}/services/{service}",
            "Updates a Service.",
        )
        .path_param("location", "The location the Service is in.")
        .path_param("service", "The name of the Service to update.")
        .query(
            "allowMissing",
            FieldType::Boolean,
            "If true and the Service does not exist, it will be created.",
        )
        .query(
            "validateOnly",
            FieldType::Boolean,
            "Indicates that the request should be validated without actually updating the Service.",
        )
        .request_body("The Service instance to update; full replacement of the mutable fields.")
        .output(run_operation_shape())
        .build(),
    );
    ops.push(
        op(
            Service::RunV2,
            HttpMethod::Delete,
            "run.services.delete",
            "/projects/{project}/locations/{location}/services/{service}",
            "Deletes a Service. This will cause the Service to stop serving traffic.",
        )
        .path_param("location", "The location the Service is in.")
        .path_param("service", "The name of the Service to delete.")
        .query(
            "validateOnly",
            FieldType::Boolean,
            "Indicates that the request should be validated without actually deleting the Service.",
        )
        .query(
            "etag",
            FieldType::String,
            "A system-generated fingerprint for this version of the resource; deletion fails if it does not match.",
        )
        .output(run_operation_shape())
        .build(),
    );
}

fn jobs(ops: &mut Vec<OperationDescriptor>) {
    ops.push(
        paged(op(
            Service::RunV2,
            HttpMethod::Get,
            "run.jobs.list",
            "/projects/{project}/locations/{location}/jobs",
            "Lists Jobs in a given project and location.",
        ))
        .path_param("location", "The location to list Jobs in.")
        .output(run_list_shape("jobs"))
        .build(),
    );
    ops.push(
        op(
            Service::RunV2,
            HttpMethod::Get,
            "run.jobs.get",
            "/projects/{project}/locations/{location}/jobs/{job}",
            "Gets information about a Job.",
        )
        .path_param("location", "The location the Job is in.")
        .path_param("job", "The name of the Job to retrieve.")
        .output(object_shape(&[
            "name",
            "uid",
            "generation",
            "template",
            "conditions",
            "executionCount",
            "latestCreatedExecution",
        ]))
        .build(),
    );
    ops.push(
        op(
            Service::RunV2,
            HttpMethod::Post,
            "run.jobs.create",
            "/projects/{project}/locations/{location}/jobs",
            "Creates a new Job in a given project and location.",
        )
        .path_param("location", "The location to create the Job in.")
        .required_query(
            "jobId",
            FieldType::String,
            "The unique identifier for the Job; it becomes the final component of the Job's resource name.",
        )
        .query(
            "validateOnly",
            FieldType::Boolean,
            "Indicates that the request should be validated without actually creating the Job.",
        )
        .request_body("The Job instance to create.")
        .output(run_operation_shape())
        .build(),
    );
    ops.push(
        op(
            Service::RunV2,
            HttpMethod::Delete,
            "run.jobs.delete",
            "/projects/{project}/locations/{location}/jobs/{job}",
            "Deletes a Job.",
        )
        .path_param("location", "The location the Job is in.")
        .path_param("job", "The name of the Job to delete.")
        .query(
            "validateOnly",
            FieldType::Boolean,
            "Indicates that the request should be validated without actually deleting the Job.",
        )
        .query(
            "etag",
            FieldType::String,
            "A system-generated fingerprint for this version of the resource; deletion fails if it does not match.",
        )
        .output(run_operation_shape())
        .build(),
    );
    ops.push(
        op(
            Service::RunV2,
            HttpMethod::Post,
            "run.jobs.run",
            "/projects/{project}/locations/{location}/jobs/{job}:run",
            "Triggers creation of a new Execution of this Job.",
        )
        .path_param("location", "The location the Job is in.")
        .path_param("job", "The name of the Job to run.")
        .body_field(
            "validateOnly",
            FieldType::Boolean,
            "Indicates that the request should be validated without actually running the Job.",
        )
        .body_field(
            "etag",
            FieldType::String,
            "A system-generated fingerprint for this version of the resource; the run fails if it does not match.",
        )
        .body_field(
            "overrides",
            FieldType::Object,
            "Overrides existing job configuration for this particular execution only.",
        )
        .output(run_operation_shape())
        .build(),
    );
}

fn executions(ops: &mut Vec<OperationDescriptor>) {
    ops.push(
        paged(op(
            Service::RunV2,
            HttpMethod::Get,
            "run.executions.list",
            "/projects/{project}/locations/{location}/jobs/{job}/executions",
            "Lists Executions from a Job.",
        ))
        .path_param("location", "The location the Job is in.")
        .path_param("job", "The Job whose Executions should be listed.")
        .output(run_list_shape("executions"))
        .build(),
    );
    ops.push(
        op(
            Service::RunV2,
            HttpMethod::Get,
            "run.executions.get",
            "/projects/{project}/locations/{location}/jobs/{job}/executions/{execution}",
            "Gets information about an Execution.",
        )
        .path_param("location", "The location the Job is in.")
        .path_param("job", "The Job the Execution belongs to.")
        .path_param("execution", "The name of the Execution to retrieve.")
        .output(object_shape(&[
            "name",
            "uid",
            "job",
            "taskCount",
            "runningCount",
            "succeededCount",
            "failedCount",
            "conditions",
        ]))
        .build(),
    );
    ops.push(
        op(
            Service::RunV2,
            HttpMethod::Delete,
            "run.executions.delete",
            "/projects/{project}/locations/{location}/jobs/{job}/executions/{execution}",
            "Deletes an Execution.",
        )
        .path_param("location", "The location the Job is in.")
        .path_param("job", "The Job the Execution belongs to.")
        .path_param("execution", "The name of the Execution to delete.")
        .query(
            "validateOnly",
            FieldType::Boolean,
            "Indicates that the request should be validated without actually deleting the Execution.",
        )
        .query(
            "etag",
            FieldType::String,
            "A system-generated fingerprint for this version of the resource; deletion fails if it does not match.",
        )
        .output(run_operation_shape())
        .build(),
    );
    ops.push(
        op(
            Service::RunV2,
            HttpMethod::Post,
            "run.executions.cancel",
            "/projects/{project}/locations/{location}/jobs/{job}/executions/{execution}:cancel",
            "Cancels an Execution.",
        )
        .path_param("location", "The location the Job is in.")
        .path_param("job", "The Job the Execution belongs to.")
        .path_param("execution", "The name of the Execution to cancel.")
        .body_field(
            "validateOnly",
            FieldType::Boolean,
            "Indicates that the request should be validated without actually cancelling the Execution.",
        )
        .body_field(
            "etag",
            FieldType::String,
            "A system-generated fingerprint for this version of the resource; cancellation fails if it does not match.",
        )
        .output(run_operation_shape())
        .build(),
    );
}
