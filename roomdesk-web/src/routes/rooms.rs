/// Room CRUD handlers
///
/// All four data-entry fields arrive as form strings. A submission with a
/// missing, empty, or unparsable field is not an error: the form is silently
/// re-rendered with nothing persisted, matching the registry's data-entry
/// behavior.
///
/// # Gating
///
/// Every handler here requires a logged-in session (the `SessionUser`
/// extractor redirects anonymous requests to `/login`). The mutating
/// handlers additionally check the admin flag themselves and redirect
/// non-admins to the listing view.
///
/// # Endpoints
///
/// - `GET/POST /cadastro` - create form / submit (admin)
/// - `GET /lista` - listing
/// - `GET /excluir/:id` - delete (admin)
/// - `GET/POST /atualizar/:id` - edit form / submit (admin)

use crate::{
    app::AppState,
    error::{AppError, AppResult},
    session::SessionUser,
};
use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use roomdesk_core::models::room::{CreateRoom, Room, UpdateRoom};
use serde::Deserialize;

/// Raw room form submission
///
/// Fields are kept as strings so that absent, empty, and malformed input can
/// all be treated uniformly as "missing".
#[derive(Debug, Deserialize)]
pub struct RoomForm {
    pub number: Option<String>,

    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub price: Option<String>,

    pub bathrooms: Option<String>,
}

/// Parsed room fields, present only when all four fields are usable
struct RoomFields {
    number: i64,
    kind: String,
    price: f64,
    bathrooms: i64,
}

impl RoomForm {
    /// Returns the parsed fields, or None if any field is missing or invalid
    fn parse(&self) -> Option<RoomFields> {
        fn text(field: &Option<String>) -> Option<&str> {
            field.as_deref().map(str::trim).filter(|s| !s.is_empty())
        }

        Some(RoomFields {
            number: text(&self.number)?.parse().ok()?,
            kind: text(&self.kind)?.to_string(),
            price: text(&self.price)?.parse().ok()?,
            bathrooms: text(&self.bathrooms)?.parse().ok()?,
        })
    }
}

#[derive(Template)]
#[template(path = "room_create.html")]
struct CreateRoomTemplate {
    session: Option<SessionUser>,
}

#[derive(Template)]
#[template(path = "room_list.html")]
struct ListRoomsTemplate {
    session: Option<SessionUser>,
    rooms: Vec<Room>,
}

#[derive(Template)]
#[template(path = "room_edit.html")]
struct EditRoomTemplate {
    session: Option<SessionUser>,
    room: Room,
}

/// Room creation form
///
/// `GET /cadastro`
pub async fn create_form(session: SessionUser) -> AppResult<Response> {
    if !session.is_admin {
        return Ok(Redirect::to("/lista").into_response());
    }

    let template = CreateRoomTemplate {
        session: Some(session),
    };
    Ok(Html(template.render()?).into_response())
}

/// Room creation submit
///
/// `POST /cadastro`. Persists the room and redirects home on success;
/// re-renders the form when a field is missing.
pub async fn create(
    session: SessionUser,
    State(state): State<AppState>,
    Form(form): Form<RoomForm>,
) -> AppResult<Response> {
    if !session.is_admin {
        return Ok(Redirect::to("/lista").into_response());
    }

    let Some(fields) = form.parse() else {
        let template = CreateRoomTemplate {
            session: Some(session),
        };
        return Ok(Html(template.render()?).into_response());
    };

    let room = Room::create(
        &state.db,
        CreateRoom {
            number: fields.number,
            kind: fields.kind,
            price: fields.price,
            bathrooms: fields.bathrooms,
        },
    )
    .await?;

    tracing::info!(room_id = room.id, number = room.number, "Room registered");
    Ok(Redirect::to("/").into_response())
}

/// Room listing
///
/// `GET /lista`
pub async fn list(session: SessionUser, State(state): State<AppState>) -> AppResult<Html<String>> {
    let rooms = Room::list_all(&state.db).await?;

    let template = ListRoomsTemplate {
        session: Some(session),
        rooms,
    };
    Ok(Html(template.render()?))
}

/// Room deletion
///
/// `GET /excluir/:id`. Deleting an id that does not exist yields 404.
pub async fn delete(
    session: SessionUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    if !session.is_admin {
        return Ok(Redirect::to("/lista").into_response());
    }

    let deleted = Room::delete(&state.db, id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("No room with id {}", id)));
    }

    tracing::info!(room_id = id, "Room deleted");
    Ok(Redirect::to("/lista").into_response())
}

/// Room edit form
///
/// `GET /atualizar/:id`. An unknown id yields 404.
pub async fn edit_form(
    session: SessionUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    if !session.is_admin {
        return Ok(Redirect::to("/lista").into_response());
    }

    let room = Room::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No room with id {}", id)))?;

    let template = EditRoomTemplate {
        session: Some(session),
        room,
    };
    Ok(Html(template.render()?).into_response())
}

/// Room edit submit
///
/// `POST /atualizar/:id`. Overwrites the four data-entry fields and
/// redirects to the listing; re-renders the edit form when a field is
/// missing.
pub async fn update(
    session: SessionUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<RoomForm>,
) -> AppResult<Response> {
    if !session.is_admin {
        return Ok(Redirect::to("/lista").into_response());
    }

    let Some(fields) = form.parse() else {
        let room = Room::find_by_id(&state.db, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No room with id {}", id)))?;

        let template = EditRoomTemplate {
            session: Some(session),
            room,
        };
        return Ok(Html(template.render()?).into_response());
    };

    let updated = Room::update(
        &state.db,
        id,
        UpdateRoom {
            number: fields.number,
            kind: fields.kind,
            price: fields.price,
            bathrooms: fields.bathrooms,
        },
    )
    .await?
    .ok_or_else(|| AppError::NotFound(format!("No room with id {}", id)))?;

    tracing::info!(room_id = updated.id, "Room updated");
    Ok(Redirect::to("/lista").into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(
        number: Option<&str>,
        kind: Option<&str>,
        price: Option<&str>,
        bathrooms: Option<&str>,
    ) -> RoomForm {
        RoomForm {
            number: number.map(String::from),
            kind: kind.map(String::from),
            price: price.map(String::from),
            bathrooms: bathrooms.map(String::from),
        }
    }

    #[test]
    fn test_parse_complete_form() {
        let fields = form(Some("101"), Some("suite"), Some("250.0"), Some("2"))
            .parse()
            .expect("Complete form should parse");

        assert_eq!(fields.number, 101);
        assert_eq!(fields.kind, "suite");
        assert_eq!(fields.price, 250.0);
        assert_eq!(fields.bathrooms, 2);
    }

    #[test]
    fn test_parse_missing_field() {
        assert!(form(Some("101"), None, Some("250.0"), Some("2"))
            .parse()
            .is_none());
    }

    #[test]
    fn test_parse_empty_field_counts_as_missing() {
        // Browsers submit empty inputs as empty strings, not absent fields.
        assert!(form(Some("101"), Some(""), Some("250.0"), Some("2"))
            .parse()
            .is_none());
    }

    #[test]
    fn test_parse_unparsable_number() {
        assert!(form(Some("abc"), Some("suite"), Some("250.0"), Some("2"))
            .parse()
            .is_none());
    }
}
