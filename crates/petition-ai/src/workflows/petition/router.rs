use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{definitions, Criterion, Demographics, DemographicsPatch, EntryId, UserRole};
use super::entries::CriterionEntry;
use super::intake::{
    EducationHistoryEntry, EmploymentHistoryEntry, IntakeData, ProfessionalConnectionEntry,
};
use super::repository::ApplicationStore;
use super::review::ReviewStatus;
use super::service::{MutationOutcome, PetitionService};

pub const PETITION_API_PREFIX: &str = "/api/v1/petition";

type SharedService<S> = State<Arc<PetitionService<S>>>;

/// Router builder exposing the petition workflow over JSON.
pub fn petition_router<S>(service: Arc<PetitionService<S>>) -> Router
where
    S: ApplicationStore + 'static,
{
    let routes = Router::new()
        .route(
            "/",
            get(snapshot_handler::<S>).delete(reset_handler::<S>),
        )
        .route("/catalog", get(catalog_handler))
        .route("/progress", get(progress_handler::<S>))
        .route(
            "/demographics",
            put(set_demographics_handler::<S>)
                .patch(update_demographics_handler::<S>)
                .delete(clear_demographics_handler::<S>),
        )
        .route("/role", put(set_role_handler::<S>))
        .route("/criteria/:criterion/entries", post(add_entry_handler::<S>))
        .route(
            "/criteria/:criterion/entries/:entry_id",
            put(update_entry_handler::<S>).delete(remove_entry_handler::<S>),
        )
        .route("/criteria/:criterion/complete", put(set_complete_handler::<S>))
        .route("/criteria/:criterion/draft", put(set_draft_handler::<S>))
        .route("/intake", put(set_intake_handler::<S>))
        .route("/intake/complete", post(complete_intake_handler::<S>))
        .route(
            "/intake/wants_recommendations",
            put(wants_recommendations_handler::<S>),
        )
        .route("/intake/employment", post(add_employment_handler::<S>))
        .route(
            "/intake/employment/:entry_id",
            put(update_employment_handler::<S>).delete(remove_employment_handler::<S>),
        )
        .route("/intake/education", post(add_education_handler::<S>))
        .route(
            "/intake/education/:entry_id",
            put(update_education_handler::<S>).delete(remove_education_handler::<S>),
        )
        .route("/intake/connections", post(add_connection_handler::<S>))
        .route(
            "/intake/connections/:entry_id",
            put(update_connection_handler::<S>).delete(remove_connection_handler::<S>),
        )
        .route("/intake/populate", post(populate_handler::<S>))
        .route(
            "/recommendations",
            get(cached_recommendations_handler::<S>).post(refresh_recommendations_handler::<S>),
        )
        .route("/submit", post(submit_handler::<S>))
        .route("/review/summary", get(review_summary_handler::<S>))
        .route("/review/:criterion", put(criterion_review_handler::<S>))
        .route(
            "/review/:criterion/entries/:entry_id",
            put(entry_review_handler::<S>),
        )
        .with_state(service);

    Router::new().nest(PETITION_API_PREFIX, routes)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RoleRequest {
    pub(crate) role: UserRole,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FlagRequest {
    pub(crate) value: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReviewRequest {
    pub(crate) status: ReviewStatus,
    #[serde(default)]
    pub(crate) comment: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreatedView {
    #[serde(flatten)]
    pub(crate) outcome: MutationOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) entry_id: Option<EntryId>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PopulateView {
    #[serde(flatten)]
    pub(crate) outcome: MutationOutcome,
    pub(crate) seeded: Vec<Criterion>,
}

fn outcome_response(outcome: MutationOutcome) -> Response {
    (StatusCode::OK, Json(outcome)).into_response()
}

pub(crate) async fn snapshot_handler<S>(State(service): SharedService<S>) -> Response
where
    S: ApplicationStore + 'static,
{
    (StatusCode::OK, Json(service.snapshot())).into_response()
}

pub(crate) async fn reset_handler<S>(State(service): SharedService<S>) -> Response
where
    S: ApplicationStore + 'static,
{
    outcome_response(service.reset())
}

pub(crate) async fn catalog_handler() -> Response {
    (StatusCode::OK, Json(definitions())).into_response()
}

pub(crate) async fn progress_handler<S>(State(service): SharedService<S>) -> Response
where
    S: ApplicationStore + 'static,
{
    (StatusCode::OK, Json(service.progress())).into_response()
}

pub(crate) async fn set_demographics_handler<S>(
    State(service): SharedService<S>,
    Json(demographics): Json<Demographics>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    outcome_response(service.mutate(|application| {
        application.set_demographics(demographics);
        true
    }))
}

pub(crate) async fn update_demographics_handler<S>(
    State(service): SharedService<S>,
    Json(patch): Json<DemographicsPatch>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    outcome_response(service.mutate(|application| application.update_demographics(patch)))
}

pub(crate) async fn clear_demographics_handler<S>(State(service): SharedService<S>) -> Response
where
    S: ApplicationStore + 'static,
{
    outcome_response(service.mutate(|application| {
        application.clear_demographics();
        true
    }))
}

pub(crate) async fn set_role_handler<S>(
    State(service): SharedService<S>,
    Json(request): Json<RoleRequest>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    outcome_response(service.mutate(|application| {
        application.set_role(request.role);
        true
    }))
}

pub(crate) async fn add_entry_handler<S>(
    State(service): SharedService<S>,
    Path(criterion): Path<Criterion>,
    Json(entry): Json<CriterionEntry>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    let view = service.mutate_with(|application| {
        let applied = application.add_entry(criterion, entry);
        let entry_id = applied
            .then(|| application.entries(criterion).last().map(|entry| entry.id().clone()))
            .flatten();
        CreatedView {
            outcome: MutationOutcome::from_application(applied, application),
            entry_id,
        }
    });
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn update_entry_handler<S>(
    State(service): SharedService<S>,
    Path((criterion, entry_id)): Path<(Criterion, String)>,
    Json(entry): Json<CriterionEntry>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    let id = EntryId(entry_id);
    outcome_response(service.mutate(|application| application.update_entry(criterion, &id, entry)))
}

pub(crate) async fn remove_entry_handler<S>(
    State(service): SharedService<S>,
    Path((criterion, entry_id)): Path<(Criterion, String)>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    let id = EntryId(entry_id);
    outcome_response(service.mutate(|application| application.remove_entry(criterion, &id)))
}

pub(crate) async fn set_complete_handler<S>(
    State(service): SharedService<S>,
    Path(criterion): Path<Criterion>,
    Json(request): Json<FlagRequest>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    outcome_response(
        service.mutate(|application| application.set_complete(criterion, request.value)),
    )
}

pub(crate) async fn set_draft_handler<S>(
    State(service): SharedService<S>,
    Path(criterion): Path<Criterion>,
    Json(request): Json<FlagRequest>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    outcome_response(service.mutate(|application| {
        application.set_draft(criterion, request.value);
        true
    }))
}

pub(crate) async fn set_intake_handler<S>(
    State(service): SharedService<S>,
    Json(intake): Json<IntakeData>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    outcome_response(service.mutate(|application| {
        application.set_intake(intake);
        true
    }))
}

pub(crate) async fn complete_intake_handler<S>(State(service): SharedService<S>) -> Response
where
    S: ApplicationStore + 'static,
{
    outcome_response(service.mutate(|application| {
        application.complete_intake(chrono::Utc::now());
        true
    }))
}

pub(crate) async fn wants_recommendations_handler<S>(
    State(service): SharedService<S>,
    Json(request): Json<FlagRequest>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    outcome_response(service.mutate(|application| {
        application.set_wants_recommendations(request.value);
        true
    }))
}

macro_rules! intake_record_handlers {
    ($add:ident, $update:ident, $remove:ident, $record:ty, $push:ident, $replace:ident, $delete:ident) => {
        pub(crate) async fn $add<S>(
            State(service): SharedService<S>,
            Json(record): Json<$record>,
        ) -> Response
        where
            S: ApplicationStore + 'static,
        {
            let view = service.mutate_with(|application| {
                let entry_id = application.$push(record);
                CreatedView {
                    outcome: MutationOutcome::from_application(true, application),
                    entry_id: Some(entry_id),
                }
            });
            (StatusCode::OK, Json(view)).into_response()
        }

        pub(crate) async fn $update<S>(
            State(service): SharedService<S>,
            Path(entry_id): Path<String>,
            Json(record): Json<$record>,
        ) -> Response
        where
            S: ApplicationStore + 'static,
        {
            let id = EntryId(entry_id);
            outcome_response(service.mutate(|application| application.$replace(&id, record)))
        }

        pub(crate) async fn $remove<S>(
            State(service): SharedService<S>,
            Path(entry_id): Path<String>,
        ) -> Response
        where
            S: ApplicationStore + 'static,
        {
            let id = EntryId(entry_id);
            outcome_response(service.mutate(|application| application.$delete(&id)))
        }
    };
}

intake_record_handlers!(
    add_employment_handler,
    update_employment_handler,
    remove_employment_handler,
    EmploymentHistoryEntry,
    add_employment,
    update_employment,
    remove_employment
);
intake_record_handlers!(
    add_education_handler,
    update_education_handler,
    remove_education_handler,
    EducationHistoryEntry,
    add_education,
    update_education,
    remove_education
);
intake_record_handlers!(
    add_connection_handler,
    update_connection_handler,
    remove_connection_handler,
    ProfessionalConnectionEntry,
    add_connection,
    update_connection,
    remove_connection
);

pub(crate) async fn populate_handler<S>(State(service): SharedService<S>) -> Response
where
    S: ApplicationStore + 'static,
{
    let view = service.mutate_with(|application| {
        let seeded = application.populate_from_intake();
        PopulateView {
            outcome: MutationOutcome::from_application(!seeded.is_empty(), application),
            seeded,
        }
    });
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn cached_recommendations_handler<S>(State(service): SharedService<S>) -> Response
where
    S: ApplicationStore + 'static,
{
    match service.read(|application| application.recommendations.clone()) {
        Some(result) => (StatusCode::OK, Json(result)).into_response(),
        None => {
            let payload = json!({
                "error": "no recommendations have been generated",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn refresh_recommendations_handler<S>(
    State(service): SharedService<S>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    let result = service.mutate_with(|application| application.refresh_recommendations().clone());
    (StatusCode::OK, Json(result)).into_response()
}

pub(crate) async fn submit_handler<S>(State(service): SharedService<S>) -> Response
where
    S: ApplicationStore + 'static,
{
    outcome_response(service.mutate(|application| application.submit_for_review()))
}

pub(crate) async fn criterion_review_handler<S>(
    State(service): SharedService<S>,
    Path(criterion): Path<Criterion>,
    Json(request): Json<ReviewRequest>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    outcome_response(service.mutate(|application| {
        application.set_criterion_review_status(criterion, request.status, request.comment)
    }))
}

pub(crate) async fn entry_review_handler<S>(
    State(service): SharedService<S>,
    Path((criterion, entry_id)): Path<(Criterion, String)>,
    Json(request): Json<ReviewRequest>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    let id = EntryId(entry_id);
    outcome_response(service.mutate(|application| {
        application.set_entry_review_status(criterion, &id, request.status, request.comment)
    }))
}

pub(crate) async fn review_summary_handler<S>(State(service): SharedService<S>) -> Response
where
    S: ApplicationStore + 'static,
{
    let (submitted, summary) =
        service.read(|application| (application.is_submitted, application.review_summary()));
    let payload = json!({
        "submitted": submitted,
        "approved": summary.approved,
        "rejected": summary.rejected,
        "pending": summary.pending,
        "changes_requested": summary.changes_requested,
        "minimum_met": summary.minimum_met(),
    });
    (StatusCode::OK, Json(payload)).into_response()
}
