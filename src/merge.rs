// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Applies resolved overrides onto a controller built workload.
//!
//! Precedence per field:
//! - object and pod labels/annotations, node selector: additive, the default wins on key collision
//! - container resources: replaced for containers matched by name
//! - min ready seconds, affinity, tolerations, topology spread constraints,
//!   termination grace period: replaced wholesale

use crate::overrides::ReplicatedPodResourceOverrides;
use crate::types::Metadata;
use k8s_openapi::api::apps::v1::DaemonSet;
use k8s_openapi::api::core::v1::{Container, PodTemplateSpec};
use kube::api::ObjectMeta;
use std::collections::BTreeMap;

/// Apply overrides to a DaemonSet built from the controller's defaults.
///
/// The deployment strategy accessor is not consulted; DaemonSets have no such field.
pub fn apply_daemonset_overrides<O>(daemonset: &mut DaemonSet, overrides: &O)
where
    O: ReplicatedPodResourceOverrides + ?Sized,
{
    if let Some(metadata) = overrides.metadata() {
        merge_metadata(&mut daemonset.metadata, metadata);
    }

    let Some(spec) = daemonset.spec.as_mut() else {
        return;
    };

    if let Some(min_ready_seconds) = overrides.min_ready_seconds() {
        spec.min_ready_seconds = Some(min_ready_seconds);
    }

    apply_pod_template_overrides(&mut spec.template, overrides);
}

/// Apply the pod level overrides to a pod template.
pub fn apply_pod_template_overrides<O>(template: &mut PodTemplateSpec, overrides: &O)
where
    O: ReplicatedPodResourceOverrides + ?Sized,
{
    if let Some(metadata) = overrides.pod_template_metadata() {
        merge_metadata(template.metadata.get_or_insert_with(Default::default), metadata);
    }

    let Some(pod_spec) = template.spec.as_mut() else {
        return;
    };

    if let Some(init_containers) = overrides.init_containers() {
        if let Some(current) = pod_spec.init_containers.as_mut() {
            merge_containers(current, &init_containers);
        }
    }
    if let Some(containers) = overrides.containers() {
        merge_containers(&mut pod_spec.containers, &containers);
    }
    if let Some(affinity) = overrides.affinity() {
        pod_spec.affinity = Some(affinity.clone());
    }
    if let Some(node_selector) = overrides.node_selector() {
        merge_maps(
            node_selector,
            pod_spec.node_selector.get_or_insert_with(Default::default),
        );
    }
    if let Some(constraints) = overrides.topology_spread_constraints() {
        pod_spec.topology_spread_constraints = Some(constraints.to_vec());
    }
    if let Some(tolerations) = overrides.tolerations() {
        pod_spec.tolerations = Some(tolerations.to_vec());
    }
    if let Some(grace_period) = overrides.termination_grace_period_seconds() {
        pod_spec.termination_grace_period_seconds = Some(grace_period);
    }
}

/// Add every entry of `overrides` to `target` whose key `target` does not already have.
pub fn merge_maps(overrides: &BTreeMap<String, String>, target: &mut BTreeMap<String, String>) {
    for (key, value) in overrides {
        target
            .entry(key.clone())
            .or_insert_with(|| value.clone());
    }
}

fn merge_metadata(target: &mut ObjectMeta, metadata: &Metadata) {
    if let Some(labels) = metadata.labels.as_ref().filter(|l| !l.is_empty()) {
        merge_maps(labels, target.labels.get_or_insert_with(Default::default));
    }
    if let Some(annotations) = metadata.annotations.as_ref().filter(|a| !a.is_empty()) {
        merge_maps(
            annotations,
            target.annotations.get_or_insert_with(Default::default),
        );
    }
}

/// Replace the resources of each container that has an override with the same name.
/// When several overrides share a name the last one wins.
fn merge_containers(current: &mut [Container], provided: &[Container]) {
    for container in current.iter_mut() {
        if let Some(over) = provided.iter().rfind(|p| p.name == container.name) {
            container.resources = over.resources.clone();
        }
    }
}
