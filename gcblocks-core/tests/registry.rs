use gcblocks_core::types::{BodyKind, FieldLocation, FieldType, HttpMethod, Service};
use gcblocks_core::Registry;

#[test]
fn builtin_registry_is_populated() {
    let registry = Registry::builtin();
    assert!(!registry.is_empty());
    assert_eq!(registry.len(), gcblocks_core::catalog::all().len());
}

#[test]
fn known_operations_are_present() {
    let registry = Registry::builtin();
    for name in [
        "compute.backendServices.list",
        "compute.backendServices.insert",
        "compute.targetHttpProxies.setUrlMap",
        "compute.targetPools.addInstance",
        "gke.clusters.get",
        "run.services.create",
        "run.jobs.run",
        "run.executions.cancel",
    ] {
        assert!(registry.get(name).is_some(), "missing {name}");
    }
}

#[test]
fn unknown_operation_is_absent() {
    assert!(Registry::builtin().get("compute.instances.list").is_none());
}

#[test]
fn every_placeholder_has_a_path_field() {
    for op in Registry::builtin().iter() {
        for placeholder in op.path_placeholders() {
            if placeholder == "project" {
                continue;
            }
            let field = op
                .field(placeholder)
                .unwrap_or_else(|| panic!("{}: no field for {{{placeholder}}}", op.name));
            assert_eq!(field.location, FieldLocation::Path, "{}", op.name);
            assert!(field.required, "{}: path field {placeholder} must be required", op.name);
            assert_eq!(field.ty, FieldType::String, "{}", op.name);
        }
    }
}

#[test]
fn every_path_field_appears_in_the_template() {
    for op in Registry::builtin().iter() {
        for field in op.path_fields() {
            assert!(
                op.path.contains(&format!("{{{}}}", field.name)),
                "{}: path field {} not in template {}",
                op.name,
                field.name,
                op.path
            );
        }
    }
}

#[test]
fn project_placeholder_is_never_declared_as_a_field() {
    for op in Registry::builtin().iter() {
        assert!(op.path.contains("{project}"), "{}", op.name);
        assert!(op.field("project").is_none(), "{}", op.name);
    }
}

#[test]
fn bodyless_verbs_declare_no_body() {
    for op in Registry::builtin().iter() {
        if !op.method.takes_body() {
            assert_eq!(op.body, BodyKind::None, "{}", op.name);
            assert_eq!(op.body_fields().count(), 0, "{}", op.name);
        }
    }
}

#[test]
fn pass_through_operations_declare_one_required_request_body() {
    for op in Registry::builtin().iter() {
        if op.body == BodyKind::PassThrough {
            let field = op.field("requestBody").expect(op.name);
            assert!(field.required, "{}", op.name);
            assert_eq!(field.ty, FieldType::Object, "{}", op.name);
            assert_eq!(op.body_fields().count(), 1, "{}", op.name);
        }
    }
}

#[test]
fn every_operation_declares_scopes_and_a_shape() {
    for op in Registry::builtin().iter() {
        assert!(!op.scopes.is_empty(), "{}", op.name);
        assert!(op.output_shape.is_object(), "{}", op.name);
    }
}

#[test]
fn service_filter_partitions_the_catalogue() {
    let registry = Registry::builtin();
    let compute = registry.for_service(Service::ComputeV1).count();
    let gke = registry.for_service(Service::ContainerV1).count();
    let run = registry.for_service(Service::RunV2).count();
    assert_eq!(compute + gke + run, registry.len());
    assert_eq!(gke, 2);
    assert!(compute > run);
}

#[test]
fn set_url_map_path_skips_the_global_segment() {
    let op = Registry::builtin()
        .get("compute.targetHttpProxies.setUrlMap")
        .expect("present");
    assert_eq!(op.method, HttpMethod::Post);
    assert_eq!(
        op.path,
        "/projects/{project}/targetHttpProxies/{targetHttpProxy}/setUrlMap"
    );
}

#[test]
fn compute_mutations_accept_a_request_id() {
    for op in Registry::builtin().for_service(Service::ComputeV1) {
        if op.method != HttpMethod::Get {
            let field = op.field("requestId").unwrap_or_else(|| panic!("{}", op.name));
            assert_eq!(field.location, FieldLocation::Query, "{}", op.name);
            assert!(!field.required, "{}", op.name);
        }
    }
}
