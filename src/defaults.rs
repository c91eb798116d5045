// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The controller's built-in csi-node-driver DaemonSet, before any overrides

use crate::constants::csi::{DAEMONSET_NAME, DRIVER_CONTAINER, REGISTRAR_CONTAINER};
use crate::constants::labels;
use k8s_openapi::api::apps::v1::{DaemonSet, DaemonSetSpec, DaemonSetUpdateStrategy};
use k8s_openapi::api::core::v1::{
    Container, HostPathVolumeSource, PodSpec, PodTemplateSpec, SecurityContext, Toleration,
    Volume, VolumeMount,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::api::ObjectMeta;
use std::collections::BTreeMap;

const DRIVER_IMAGE: &str = "docker.io/calico/csi:v3.30.0";
const REGISTRAR_IMAGE: &str = "docker.io/calico/node-driver-registrar:v3.30.0";
const KUBELET_DIR: &str = "/var/lib/kubelet";
const SOCKET_DIR: &str = "/var/lib/kubelet/plugins/csi.tigera.io";
const REGISTRATION_DIR: &str = "/var/lib/kubelet/plugins_registry";

/// Build the default csi-node-driver DaemonSet in `namespace`
pub fn csi_node_driver_daemonset(namespace: &str) -> DaemonSet {
    let app_labels = BTreeMap::from([(labels::APP.to_string(), DAEMONSET_NAME.to_string())]);

    DaemonSet {
        metadata: ObjectMeta {
            name: Some(DAEMONSET_NAME.to_string()),
            namespace: Some(namespace.to_string()),
            labels: Some(app_labels.clone()),
            ..Default::default()
        },
        spec: Some(DaemonSetSpec {
            selector: LabelSelector {
                match_labels: Some(app_labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(app_labels),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![driver_container(), registrar_container()],
                    node_selector: Some(BTreeMap::from([(
                        labels::OS.to_string(),
                        "linux".to_string(),
                    )])),
                    tolerations: Some(tolerate_all()),
                    volumes: Some(vec![
                        host_path_volume("kubelet-dir", KUBELET_DIR),
                        host_path_volume("socket-dir", SOCKET_DIR),
                        host_path_volume("registration-dir", REGISTRATION_DIR),
                    ]),
                    ..Default::default()
                }),
            },
            update_strategy: Some(DaemonSetUpdateStrategy {
                type_: Some("RollingUpdate".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn driver_container() -> Container {
    Container {
        name: DRIVER_CONTAINER.to_string(),
        image: Some(DRIVER_IMAGE.to_string()),
        args: Some(vec![
            "--nodeid=$(KUBE_NODE_NAME)".to_string(),
            "--loglevel=$(LOG_LEVEL)".to_string(),
        ]),
        security_context: Some(SecurityContext {
            privileged: Some(true),
            ..Default::default()
        }),
        volume_mounts: Some(vec![
            volume_mount("kubelet-dir", KUBELET_DIR),
            volume_mount("socket-dir", "/csi"),
        ]),
        ..Default::default()
    }
}

fn registrar_container() -> Container {
    Container {
        name: REGISTRAR_CONTAINER.to_string(),
        image: Some(REGISTRAR_IMAGE.to_string()),
        args: Some(vec![
            "--v=5".to_string(),
            "--csi-address=$(ADDRESS)".to_string(),
            "--kubelet-registration-path=$(DRIVER_REG_SOCK_PATH)".to_string(),
        ]),
        volume_mounts: Some(vec![
            volume_mount("socket-dir", "/csi"),
            volume_mount("registration-dir", "/registration"),
        ]),
        ..Default::default()
    }
}

fn tolerate_all() -> Vec<Toleration> {
    ["NoSchedule", "NoExecute"]
        .into_iter()
        .map(|effect| Toleration {
            effect: Some(effect.to_string()),
            operator: Some("Exists".to_string()),
            ..Default::default()
        })
        .chain(std::iter::once(Toleration {
            key: Some("CriticalAddonsOnly".to_string()),
            operator: Some("Exists".to_string()),
            ..Default::default()
        }))
        .collect()
}

fn host_path_volume(name: &str, path: &str) -> Volume {
    Volume {
        name: name.to_string(),
        host_path: Some(HostPathVolumeSource {
            path: path.to_string(),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn volume_mount(name: &str, mount_path: &str) -> VolumeMount {
    VolumeMount {
        name: name.to_string(),
        mount_path: mount_path.to_string(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daemonset_identity() {
        let daemonset = csi_node_driver_daemonset("calico-system");

        assert_eq!(daemonset.metadata.name.as_deref(), Some(DAEMONSET_NAME));
        assert_eq!(daemonset.metadata.namespace.as_deref(), Some("calico-system"));
    }

    #[test]
    fn test_selector_matches_pod_labels() {
        let daemonset = csi_node_driver_daemonset("calico-system");
        let spec = daemonset.spec.unwrap();

        assert_eq!(
            spec.selector.match_labels,
            spec.template.metadata.unwrap().labels
        );
    }

    #[test]
    fn test_default_containers() {
        let daemonset = csi_node_driver_daemonset("calico-system");
        let pod_spec = daemonset.spec.unwrap().template.spec.unwrap();
        let names: Vec<_> = pod_spec.containers.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec![DRIVER_CONTAINER, REGISTRAR_CONTAINER]);
        assert!(pod_spec.containers.iter().all(|c| c.resources.is_none()));
    }

    #[test]
    fn test_default_scheduling() {
        let daemonset = csi_node_driver_daemonset("calico-system");
        let pod_spec = daemonset.spec.unwrap().template.spec.unwrap();

        assert_eq!(
            pod_spec.node_selector.unwrap().get(labels::OS).map(String::as_str),
            Some("linux")
        );
        assert_eq!(pod_spec.tolerations.unwrap().len(), 3);
        assert_eq!(pod_spec.affinity, None);
    }
}
