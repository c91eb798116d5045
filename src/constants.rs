// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The operator name used for server-side apply
pub const OPERATOR_NAME: &str = "csi-node-overrides";

/// Namespace the csi-node-driver DaemonSet is rendered into when none is configured
pub const DEFAULT_NAMESPACE: &str = "calico-system";

/// csi-node-driver workload naming
pub mod csi {
    /// Name of the DaemonSet and the value of its `k8s-app` label
    pub const DAEMONSET_NAME: &str = "csi-node-driver";
    /// The only container that may be overridden
    pub const DRIVER_CONTAINER: &str = "csi-node-driver";
    /// Sidecar that registers the driver with the kubelet
    pub const REGISTRAR_CONTAINER: &str = "csi-node-driver-registrar";
}

/// Well-known label keys
pub mod labels {
    pub const APP: &str = "k8s-app";
    pub const OS: &str = "kubernetes.io/os";
    pub const POD_SECURITY_ENFORCE: &str = "pod-security.kubernetes.io/enforce";
}
