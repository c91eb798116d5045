// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for applying the rendered DaemonSet.

pub mod apply;
pub mod namespaces;

pub use apply::apply_daemonset;
pub use namespaces::ensure_namespace_exists;
