//! Remote filtering collaborator, responsible for authoritative evaluation
//! of a full criteria set
use futures::{Future, Stream};
use reqwest::async::Client;
use serde_json;

use models::{RemoteFilterRequest, RemoteFilterResponse};

use super::error::Error;
use super::types::RemoteFuture;
use super::{log_remote_req, log_remote_resp};

pub trait RemoteFilters {
    /// Evaluates the full criteria set against the authoritative service
    fn filter_products(&self, request: RemoteFilterRequest) -> RemoteFuture<RemoteFilterResponse>;
}

pub struct RemoteFiltersImpl {
    pub http_client: Client,
    pub remote_address: String,
}

impl RemoteFiltersImpl {
    pub fn new(http_client: Client, remote_address: String) -> Self {
        Self {
            http_client,
            remote_address,
        }
    }
}

impl RemoteFilters for RemoteFiltersImpl {
    fn filter_products(&self, request: RemoteFilterRequest) -> RemoteFuture<RemoteFilterResponse> {
        log_remote_req(&request);
        let url = format!("{}/filters/products", self.remote_address);
        Box::new(
            self.http_client
                .post(&url)
                .json(&request)
                .send()
                .map_err(Error::from)
                .and_then(|resp| resp.error_for_status().map_err(Error::from))
                .and_then(|resp| resp.into_body().concat2().map_err(Error::from))
                .and_then(|body| serde_json::from_slice::<RemoteFilterResponse>(&body).map_err(Error::from))
                .map(|resp| {
                    log_remote_resp(&resp);
                    resp
                }),
        )
    }
}
