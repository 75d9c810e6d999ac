// SPDX-FileCopyrightText: 2026 termgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! High-level schedule service client.

use reqwest::Method;
use tracing::debug;

use termgrid_core::{ConflictOutcome, ConflictQuery, ScheduleRecord};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::sequence::{RevalidationGate, Ticket};
use crate::types::FetchScope;

/// Client for the schedule service REST API.
///
/// Fetches the record pools that [`termgrid_core::MatrixBuilder`] turns
/// into weekly grids, and submits candidates for the server-side
/// conflict verdict that mirrors [`termgrid_core::validate`].
#[derive(Debug)]
pub struct ScheduleApi {
    http: HttpClient,
}

impl ScheduleApi {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if `base_url` is empty, or an HTTP
    /// error if client construction fails.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        if config.base_url.is_empty() {
            return Err(ApiError::Config("base_url must not be empty".to_string()));
        }
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Fetches the schedule records covered by `scope`.
    pub async fn fetch_schedules(
        &self,
        scope: &FetchScope,
    ) -> Result<Vec<ScheduleRecord>, ApiError> {
        let path = scope.path();
        debug!(%path, "fetching schedules");
        let resp = self
            .http
            .execute(self.http.request(Method::GET, &path))
            .await?;
        let records: Vec<ScheduleRecord> = resp.json().await?;
        debug!(count = records.len(), "fetched schedules");
        Ok(records)
    }

    /// Asks the server for its conflict verdict on a candidate record.
    ///
    /// The candidate's own `id` is sent only when the query excludes an
    /// existing record (the edit case); on creation it is stripped so
    /// the server treats the candidate as new.
    pub async fn validate_conflicts(
        &self,
        query: &ConflictQuery,
    ) -> Result<ConflictOutcome, ApiError> {
        let mut body = serde_json::to_value(&query.candidate)?;
        if let Some(obj) = body.as_object_mut() {
            match query.exclude_id {
                Some(id) => {
                    obj.insert("id".to_string(), serde_json::Value::from(id));
                }
                None => {
                    obj.remove("id");
                }
            }
        }

        let req = self
            .http
            .request(Method::POST, "/api/schedule/class/validate-conflicts")
            .json(&body);
        let resp = self.http.execute(req).await?;
        let outcome: ConflictOutcome = resp.json().await?;
        if outcome.any() {
            debug!(
                lecturer = outcome.lecturer_conflict,
                class = outcome.class_conflict,
                room = outcome.room_conflict,
                "server reported conflicts"
            );
        }
        Ok(outcome)
    }

    /// Like [`validate_conflicts`](Self::validate_conflicts), but gated:
    /// returns `Ok(None)` when a newer revalidation finished first and
    /// this verdict must be discarded.
    pub async fn validate_conflicts_gated(
        &self,
        gate: &RevalidationGate,
        query: &ConflictQuery,
    ) -> Result<Option<ConflictOutcome>, ApiError> {
        let ticket = gate.issue();
        let outcome = self.validate_conflicts(query).await?;
        Ok(self.admit(gate, ticket, outcome))
    }

    fn admit(
        &self,
        gate: &RevalidationGate,
        ticket: Ticket,
        outcome: ConflictOutcome,
    ) -> Option<ConflictOutcome> {
        if gate.accept(ticket) {
            Some(outcome)
        } else {
            debug!("discarding stale conflict verdict");
            None
        }
    }

    /// Creates a schedule record, returning the stored copy.
    pub async fn create_schedule(
        &self,
        record: &ScheduleRecord,
    ) -> Result<ScheduleRecord, ApiError> {
        let req = self
            .http
            .request(Method::POST, "/api/schedule/class")
            .json(record);
        let resp = self.http.execute(req).await?;
        Ok(resp.json().await?)
    }

    /// Updates an existing schedule record.
    pub async fn update_schedule(
        &self,
        id: i64,
        record: &ScheduleRecord,
    ) -> Result<ScheduleRecord, ApiError> {
        let req = self
            .http
            .request(Method::PUT, &format!("/api/schedule/class/{id}"))
            .json(record);
        let resp = self.http.execute(req).await?;
        Ok(resp.json().await?)
    }

    /// Deletes a schedule record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the record does not exist.
    pub async fn delete_schedule(&self, id: i64) -> Result<(), ApiError> {
        let req = self
            .http
            .request(Method::DELETE, &format!("/api/schedule/class/{id}"));
        match self.http.execute(req).await {
            Ok(_) => Ok(()),
            Err(ApiError::Status { status: 404, .. }) => Err(ApiError::NotFound(id)),
            Err(e) => Err(e),
        }
    }
}
