//! Board pages

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::get,
    Form, Router,
};
use serde::Deserialize;

use crate::db::repos::{BoardRepo, ItemRepo};
use crate::http::error::ApiError;
use crate::http::extractors::BoardIdParam;
use crate::http::server::AppState;
use crate::http::views::{BoardContext, BoardSummary, HomeContext, ItemView};
use crate::models::NewBoard;

/// Create board form
#[derive(Debug, Deserialize)]
pub struct CreateBoardForm {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// GET / - list public boards
async fn list_public_boards(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ApiError> {
    let boards = BoardRepo::new(&state.pool).list_public().await?;

    let ctx = HomeContext {
        boards: boards.into_iter().map(BoardSummary::from).collect(),
    };
    Ok(state.views.render("home.html", ctx)?)
}

/// GET /board/{id} - a public board with its items
async fn view_board(
    State(state): State<Arc<AppState>>,
    BoardIdParam(id): BoardIdParam,
) -> Result<Html<String>, ApiError> {
    let board = BoardRepo::new(&state.pool).get(id).await?;

    // No endpoint creates private boards; the flag can only be set in the store
    if !board.public {
        tracing::debug!(board_id = id, "Refusing private board");
        return Err(ApiError::Forbidden);
    }

    let items = ItemRepo::new(&state.pool).list_for_board(id).await?;

    let ctx = BoardContext {
        board: BoardSummary::from(board),
        items: items.into_iter().map(ItemView::from).collect(),
    };
    Ok(state.views.render("view_board.html", ctx)?)
}

/// GET /create - board creation form
async fn create_board_form(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    Ok(state.views.render("create.html", minijinja::context! {})?)
}

/// POST /create - create a board, then back to the list
async fn create_board(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateBoardForm>,
) -> Result<Redirect, ApiError> {
    let new_board = NewBoard::from_form(form.name, form.description)?;
    let board = BoardRepo::new(&state.pool).create(new_board).await?;

    tracing::info!(board_id = board.id, name = %board.name, "Board created");
    Ok(Redirect::to("/"))
}

/// Board routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_public_boards))
        .route("/board/{id}", get(view_board))
        .route("/create", get(create_board_form).post(create_board))
}
