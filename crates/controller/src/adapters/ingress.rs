// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Kubernetes ingress route registration.
//!
//! Registers the operator-facing hostname as a `networking.k8s.io/v1` Ingress
//! pointing at the workload's web service, via server-side apply so repeated
//! registration with an unchanged hostname is a no-op on the API server.

use crate::adapters::RouteAdapter;
use crate::error::RouteError;
use async_trait::async_trait;
use k8s_openapi::api::networking::v1::{
    HTTPIngressPath, HTTPIngressRuleValue, Ingress, IngressBackend, IngressRule,
    IngressServiceBackend, IngressSpec, ServiceBackendPort,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::{Api, Patch, PatchParams};
use kube::Client;

const NAMESPACE_ENV: &str = "SPLUNKCTL_K8S_NAMESPACE";

/// Field manager for server-side apply.
const FIELD_MANAGER: &str = "splunkctl";

/// Router backed by the Kubernetes API.
#[derive(Clone)]
pub struct KubeRouter {
    client: Client,
    namespace: String,
    /// App identity: names the Ingress object and the backend Service.
    app: String,
}

impl KubeRouter {
    /// Connect using in-cluster config or the local kubeconfig.
    pub async fn try_default(app: impl Into<String>) -> Result<Self, RouteError> {
        let client = Client::try_default().await?;
        let namespace =
            std::env::var(NAMESPACE_ENV).unwrap_or_else(|_| "default".to_string());
        Ok(Self { client, namespace, app: app.into() })
    }

    fn ingress(&self, hostname: &str, port: u16) -> Ingress {
        Ingress {
            metadata: ObjectMeta {
                name: Some(self.app.clone()),
                namespace: Some(self.namespace.clone()),
                ..Default::default()
            },
            spec: Some(IngressSpec {
                rules: Some(vec![IngressRule {
                    host: Some(hostname.to_string()),
                    http: Some(HTTPIngressRuleValue {
                        paths: vec![HTTPIngressPath {
                            path: Some("/".to_string()),
                            path_type: "Prefix".to_string(),
                            backend: IngressBackend {
                                service: Some(IngressServiceBackend {
                                    name: self.app.clone(),
                                    port: Some(ServiceBackendPort {
                                        number: Some(i32::from(port)),
                                        ..Default::default()
                                    }),
                                }),
                                ..Default::default()
                            },
                        }],
                    }),
                }]),
                ..Default::default()
            }),
            status: None,
        }
    }
}

#[async_trait]
impl RouteAdapter for KubeRouter {
    async fn set_route(&self, hostname: &str, port: u16) -> Result<(), RouteError> {
        let api: Api<Ingress> = Api::namespaced(self.client.clone(), &self.namespace);
        let params = PatchParams::apply(FIELD_MANAGER).force();
        api.patch(&self.app, &params, &Patch::Apply(&self.ingress(hostname, port))).await?;
        tracing::info!(hostname, port, app = %self.app, "registered ingress route");
        Ok(())
    }
}
