use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::console::action::ConsoleAction;
use business::domain::console_session::use_cases::close::{
    CloseConsoleSessionParams, CloseConsoleSessionUseCase,
};
use business::domain::console_session::use_cases::get_by_id::{
    GetConsoleSessionParams, GetConsoleSessionUseCase,
};
use business::domain::console_session::use_cases::open::OpenConsoleSessionUseCase;
use business::domain::console_session::use_cases::run_action::{
    RunConsoleActionParams, RunConsoleActionUseCase,
};

use crate::api::console::dto::{ConsoleActionRequest, ConsoleStateResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct ConsoleApi {
    open_use_case: Arc<dyn OpenConsoleSessionUseCase>,
    get_use_case: Arc<dyn GetConsoleSessionUseCase>,
    close_use_case: Arc<dyn CloseConsoleSessionUseCase>,
    run_action_use_case: Arc<dyn RunConsoleActionUseCase>,
}

impl ConsoleApi {
    pub fn new(
        open_use_case: Arc<dyn OpenConsoleSessionUseCase>,
        get_use_case: Arc<dyn GetConsoleSessionUseCase>,
        close_use_case: Arc<dyn CloseConsoleSessionUseCase>,
        run_action_use_case: Arc<dyn RunConsoleActionUseCase>,
    ) -> Self {
        Self {
            open_use_case,
            get_use_case,
            close_use_case,
            run_action_use_case,
        }
    }
}

fn parse_session_id(id: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(id).map_err(|_| ErrorResponse::validation("console_session.invalid_id"))
}

/// Shopcart admin console
///
/// Each session holds one console's form, flash area, clipboard and result
/// tables. Pressing a button is a POST to the action endpoint.
#[OpenApi]
impl ConsoleApi {
    /// Open a console session
    ///
    /// Starts a console with every field blank.
    #[oai(path = "/console/sessions", method = "post", tag = "ApiTags::Console")]
    async fn open(&self) -> OpenConsoleSessionResponse {
        match self.open_use_case.execute().await {
            Ok(session) => OpenConsoleSessionResponse::Created(Json(session.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                OpenConsoleSessionResponse::InternalError(json)
            }
        }
    }

    /// Get a console session
    ///
    /// Returns what the console currently shows.
    #[oai(path = "/console/sessions/:id", method = "get", tag = "ApiTags::Console")]
    async fn get(&self, id: Path<String>) -> GetConsoleSessionResponse {
        let id = match parse_session_id(&id.0) {
            Ok(id) => id,
            Err(json) => return GetConsoleSessionResponse::BadRequest(json),
        };

        match self
            .get_use_case
            .execute(GetConsoleSessionParams { id })
            .await
        {
            Ok(session) => GetConsoleSessionResponse::Ok(Json(session.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetConsoleSessionResponse::NotFound(json),
                    _ => GetConsoleSessionResponse::InternalError(json),
                }
            }
        }
    }

    /// Close a console session
    #[oai(
        path = "/console/sessions/:id",
        method = "delete",
        tag = "ApiTags::Console"
    )]
    async fn close(&self, id: Path<String>) -> CloseConsoleSessionResponse {
        let id = match parse_session_id(&id.0) {
            Ok(id) => id,
            Err(json) => return CloseConsoleSessionResponse::BadRequest(json),
        };

        match self
            .close_use_case
            .execute(CloseConsoleSessionParams { id })
            .await
        {
            Ok(()) => CloseConsoleSessionResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => CloseConsoleSessionResponse::NotFound(json),
                    _ => CloseConsoleSessionResponse::InternalError(json),
                }
            }
        }
    }

    /// Press a console button
    ///
    /// Applies the submitted field values, then runs the action. A failed
    /// action still answers 200; the reason is in `flash`.
    ///
    /// Actions: copy-id, paste-id, clear, create-shopcart, update-shopcart,
    /// delete-shopcart, create-item, update-item, search, list,
    /// find-by-customer, find-by-item, retrieve-item, delete-item,
    /// clear-items, list-items. Aliases: create, add-item, update, delete.
    /// A `-btn` suffix is ignored. An action on a session closed meanwhile
    /// answers 404.
    #[oai(
        path = "/console/sessions/:id/actions/:action",
        method = "post",
        tag = "ApiTags::Console"
    )]
    async fn run_action(
        &self,
        id: Path<String>,
        action: Path<String>,
        body: Json<ConsoleActionRequest>,
    ) -> RunConsoleActionResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(id) => id,
            Err(json) => return RunConsoleActionResponse::BadRequest(json),
        };
        let Ok(action) = action.0.parse::<ConsoleAction>() else {
            return RunConsoleActionResponse::BadRequest(ErrorResponse::validation(
                "console.unknown_action",
            ));
        };

        let params = RunConsoleActionParams {
            session_id,
            action,
            input: body.0.into(),
        };

        match self.run_action_use_case.execute(params).await {
            Ok(session) => RunConsoleActionResponse::Ok(Json(session.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RunConsoleActionResponse::NotFound(json),
                    _ => RunConsoleActionResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum OpenConsoleSessionResponse {
    #[oai(status = 201)]
    Created(Json<ConsoleStateResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetConsoleSessionResponse {
    #[oai(status = 200)]
    Ok(Json<ConsoleStateResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CloseConsoleSessionResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RunConsoleActionResponse {
    #[oai(status = 200)]
    Ok(Json<ConsoleStateResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
