// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::OPERATOR_NAME;
use crate::error::{OverrideError, Result};
use k8s_openapi::api::apps::v1::DaemonSet;
use kube::{
    api::{Patch, PatchParams},
    Api, Client, ResourceExt,
};
use tracing::{info, instrument};

/// Server-side apply a DaemonSet, taking ownership of every field it sets
#[instrument(
    skip(client, daemonset),
    fields(daemonset = %format!("{}/{}", daemonset.namespace().unwrap_or_default(), daemonset.name_any()))
)]
pub async fn apply_daemonset(client: &Client, daemonset: &DaemonSet) -> Result<DaemonSet> {
    let name = daemonset.name_any();
    let namespace = daemonset.namespace().ok_or_else(|| {
        OverrideError::InvalidObject(format!("DaemonSet {} has no namespace", name))
    })?;

    let daemonsets: Api<DaemonSet> = Api::namespaced(client.clone(), &namespace);
    let pp = PatchParams::apply(OPERATOR_NAME).force();
    let applied = daemonsets
        .patch(&name, &pp, &Patch::Apply(daemonset))
        .await?;

    info!("Applied DaemonSet {}/{}", namespace, name);
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::csi_node_driver_daemonset;
    use crate::test_utils::{status_json, MockService};

    const DAEMONSET_PATH: &str = "/apis/apps/v1/namespaces/calico-system/daemonsets/csi-node-driver";

    #[tokio::test]
    async fn test_apply_daemonset() {
        let daemonset = csi_node_driver_daemonset("calico-system");
        let mut response = serde_json::to_value(&daemonset).unwrap();
        response["apiVersion"] = "apps/v1".into();
        response["kind"] = "DaemonSet".into();

        let client = MockService::new()
            .on_patch(DAEMONSET_PATH, 200, &response.to_string())
            .into_client();

        let applied = apply_daemonset(&client, &daemonset).await.unwrap();
        assert_eq!(applied.name_any(), "csi-node-driver");
        assert_eq!(applied.spec, daemonset.spec);
    }

    #[tokio::test]
    async fn test_apply_daemonset_api_error() {
        let daemonset = csi_node_driver_daemonset("calico-system");
        let client = MockService::new()
            .on_patch(
                DAEMONSET_PATH,
                422,
                &status_json(422, "Invalid", "DaemonSet.apps \"csi-node-driver\" is invalid"),
            )
            .into_client();

        let err = apply_daemonset(&client, &daemonset).await.unwrap_err();
        assert!(matches!(err, OverrideError::KubeError(_)));
    }

    #[tokio::test]
    async fn test_apply_daemonset_requires_namespace() {
        let mut daemonset = csi_node_driver_daemonset("calico-system");
        daemonset.metadata.namespace = None;
        let client = MockService::new().into_client();

        let err = apply_daemonset(&client, &daemonset).await.unwrap_err();
        assert!(matches!(err, OverrideError::InvalidObject(_)));
    }
}
