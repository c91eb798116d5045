// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace management utilities

use crate::constants::labels::POD_SECURITY_ENFORCE;
use crate::error::{OverrideError, Result};
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client,
};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Ensure the namespace the csi-node-driver runs in exists.
///
/// A newly created namespace admits privileged pods; an existing one is not modified.
#[instrument(skip(client))]
pub async fn ensure_namespace_exists(client: &Client, namespace: &str) -> Result<()> {
    let namespaces: Api<Namespace> = Api::all(client.clone());

    let existing = namespaces.get_opt(namespace).await.map_err(|e| {
        OverrideError::NamespaceError(format!("Failed to look up namespace {}: {}", namespace, e))
    })?;
    if existing.is_some() {
        debug!("Namespace {} already exists", namespace);
        return Ok(());
    }

    info!("Creating namespace {}", namespace);
    namespaces
        .create(&PostParams::default(), &privileged_namespace(namespace))
        .await?;
    Ok(())
}

fn privileged_namespace(name: &str) -> Namespace {
    Namespace {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            labels: Some(BTreeMap::from([(
                POD_SECURITY_ENFORCE.to_string(),
                "privileged".to_string(),
            )])),
            ..Default::default()
        },
        ..Default::default()
    }
}
